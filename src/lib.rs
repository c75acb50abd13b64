use anyhow::{Context, Result};
use image::{DynamicImage, ImageReader};
use std::path::{Path, PathBuf};

mod error;
mod icon_spec;
mod manifest;
mod resample;

pub use error::IconSetError;
pub use icon_spec::{parse_size_label, IconSpec, WATCH_ICON_SPECS};
pub use manifest::{GeneratedEntry, Manifest, ManifestInfo, MANIFEST_FILENAME, WATCH_IDIOM};

pub const DEFAULT_SOURCE_DIR: &str = "Coacher/Assets.xcassets/AppIcon.appiconset";
pub const DEFAULT_TARGET_DIR: &str = "WatchApp Watch App/Assets.xcassets/AppIcon.appiconset";

/// Source filenames, most preferred first.
pub const SOURCE_CANDIDATES: &[&str] = &[
    "Lighter App just icon (2).png",
    "Lighter App just icon dark2 (1).png",
    "Lighter App icon Tinted.png",
];

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub source_dir: PathBuf,
    pub target_dir: PathBuf,
    pub candidates: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            target_dir: PathBuf::from(DEFAULT_TARGET_DIR),
            candidates: SOURCE_CANDIDATES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Reported as the run advances, so front-ends can print progress.
#[derive(Debug, Clone, Copy)]
pub enum Progress<'a> {
    SourceSelected(&'a str),
    Generated(&'a GeneratedEntry),
    ManifestWritten(&'a Path),
}

// --- source resolution ---

/// Load the first candidate that exists under `source_dir`.
///
/// Returns the chosen filename along with the decoded image. The decoder is
/// picked from the file contents, not the extension. A candidate that exists
/// but fails to decode is an error; later candidates are not tried.
pub fn resolve_source(source_dir: &Path, candidates: &[String]) -> Result<(String, DynamicImage)> {
    for name in candidates {
        let path = source_dir.join(name);
        log::trace!("probing source candidate {}", path.display());
        if !path.exists() {
            continue;
        }

        let img = ImageReader::open(&path)
            .and_then(|reader| reader.with_guessed_format())
            .with_context(|| format!("Failed to open source image: {}", path.display()))?
            .decode()
            .with_context(|| format!("Failed to open source image: {}", path.display()))?;
        log::debug!("loaded source {} ({}x{})", path.display(), img.width(), img.height());
        return Ok((name.clone(), img));
    }

    Err(IconSetError::SourceUnavailable {
        dir: source_dir.to_path_buf(),
        candidates: candidates.to_vec(),
    }
    .into())
}

// --- resize & encode ---

/// Resize to exactly `width`x`height` with Lanczos3 and encode as PNG in
/// the source's colour type.
pub fn resize_to_png_bytes(source: &DynamicImage, width: u32, height: u32) -> Result<Vec<u8>> {
    let resized = resample::resize_exact(source, width, height);

    let mut out: Vec<u8> = Vec::new();
    resized
        .write_to(&mut std::io::Cursor::new(&mut out), image::ImageFormat::Png)
        .context("Failed to encode output PNG")?;

    Ok(out)
}

fn write_icon(source: &DynamicImage, width: u32, height: u32, output: &Path) -> Result<()> {
    let png = resize_to_png_bytes(source, width, height)?;
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(output, &png)
        .with_context(|| format!("Failed to save output image: {}", output.display()))?;
    log::debug!("wrote {} ({width}x{height}, {} bytes)", output.display(), png.len());
    Ok(())
}

// --- pipeline ---

/// Resize `source` for every spec into `target_dir` and return one entry per
/// spec, in order.
///
/// Every size label is resolved before anything is written, so a bad label
/// leaves the target directory untouched.
pub fn generate_icons(
    source: &DynamicImage,
    specs: &[IconSpec],
    target_dir: &Path,
    mut on_progress: impl FnMut(Progress<'_>),
) -> Result<Vec<GeneratedEntry>> {
    let sizes = specs
        .iter()
        .map(IconSpec::pixel_size)
        .collect::<Result<Vec<_>>>()?;

    std::fs::create_dir_all(target_dir)
        .with_context(|| format!("Failed to create directory: {}", target_dir.display()))?;

    let mut generated = Vec::with_capacity(specs.len());

    for (spec, (width, height)) in specs.iter().zip(sizes) {
        write_icon(source, width, height, &target_dir.join(spec.filename))?;

        let entry = GeneratedEntry::from(spec);
        on_progress(Progress::Generated(&entry));
        generated.push(entry);
    }

    Ok(generated)
}

/// Run the whole generator: resolve the source, write every icon in
/// `specs`, then write `Contents.json`.
///
/// Nothing is written when no source candidate exists.
pub fn generate_icon_set(
    config: &GeneratorConfig,
    specs: &[IconSpec],
    mut on_progress: impl FnMut(Progress<'_>),
) -> Result<Manifest> {
    let (source_name, source) = resolve_source(&config.source_dir, &config.candidates)?;
    on_progress(Progress::SourceSelected(&source_name));

    let images = generate_icons(&source, specs, &config.target_dir, &mut on_progress)?;

    let manifest = Manifest::new(images);
    let manifest_path = manifest.write_to_dir(&config.target_dir)?;
    on_progress(Progress::ManifestWritten(&manifest_path));

    Ok(manifest)
}
