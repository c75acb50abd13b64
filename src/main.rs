use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use watch_iconset::{
    GeneratorConfig, Progress, DEFAULT_SOURCE_DIR, DEFAULT_TARGET_DIR, WATCH_ICON_SPECS,
};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate the watchOS app icon set and Contents.json from the main app icon"
)]
struct Args {
    /// Directory holding the main app icon
    #[arg(long, default_value = DEFAULT_SOURCE_DIR)]
    source_dir: PathBuf,

    /// Watch app `.appiconset` directory to populate
    #[arg(long, default_value = DEFAULT_TARGET_DIR)]
    target_dir: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let config = GeneratorConfig {
        source_dir: args.source_dir,
        target_dir: args.target_dir,
        ..Default::default()
    };

    println!("Generating watchOS app icons...");

    let mut count = 0usize;
    let res =
        watch_iconset::generate_icon_set(&config, WATCH_ICON_SPECS, |progress| match progress {
            Progress::SourceSelected(name) => println!("Using source image: {name}"),
            Progress::Generated(entry) => {
                count += 1;
                println!("Generated: {} ({})", entry.filename, entry.size);
            }
            Progress::ManifestWritten(path) => {
                println!("\nGenerated {count} watchOS icons");
                println!("Updated Contents.json at: {}", path.display());
            }
        });

    match res {
        Ok(_) => {
            println!("✅ WatchOS icons generated successfully!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            println!("❌ Failed to generate watchOS icons");
            ExitCode::FAILURE
        }
    }
}
