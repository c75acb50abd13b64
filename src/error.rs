use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IconSetError {
    #[error("no source image found in {dir} (looked for: {})", candidates.join(", "))]
    SourceUnavailable {
        dir: PathBuf,
        candidates: Vec<String>,
    },

    #[error("invalid size label: {0:?}")]
    InvalidSizeLabel(String),
}
