use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use facebridge_core::channel::detection_channel::DetectionChannel;
use facebridge_core::channel::method_call::MethodCall;
use facebridge_core::channel::response::MethodResponse;
use facebridge_core::detection::infrastructure::classifier_store;
use facebridge_core::shared::constants::{CASCADE_MODEL_NAME, CASCADE_MODEL_URL};

/// Face detection for still images: prints detected face rectangles as JSON.
#[derive(Parser)]
#[command(name = "facebridge")]
struct Cli {
    /// Input image file (JPEG, PNG, ...).
    input: PathBuf,

    /// Bundled classifier file (resolved, downloading if needed, when omitted).
    #[arg(long)]
    classifier: Option<PathBuf>,

    /// Staging directory override (defaults to the app-private directory).
    #[arg(long)]
    app_dir: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let bundled = resolve_classifier(cli.classifier.as_deref())?;
    let target_dir = match cli.app_dir {
        Some(dir) => dir,
        None => classifier_store::app_private_dir()?,
    };

    let mut channel = DetectionChannel::initialize(&bundled, &target_dir);
    if !channel.is_ready() {
        log::error!("channel is uninitialized; detection will report no faces");
    }

    let image = std::fs::read(&cli.input)?;
    let response = channel.handle(MethodCall::DetectFaces { image });
    println!("{}", render(&response, cli.pretty));

    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if let Some(ref classifier) = cli.classifier {
        if !classifier.exists() {
            return Err(format!("Classifier file not found: {}", classifier.display()).into());
        }
    }
    Ok(())
}

fn resolve_classifier(explicit: Option<&Path>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    log::info!("Resolving classifier: {CASCADE_MODEL_NAME}");
    let path = classifier_store::fetch(
        CASCADE_MODEL_NAME,
        CASCADE_MODEL_URL,
        None,
        Some(Box::new(download_progress)),
    )?;
    eprintln!();
    Ok(path)
}

fn render(response: &MethodResponse, pretty: bool) -> String {
    if pretty {
        response.to_json_pretty()
    } else {
        response.to_json()
    }
}

fn download_progress(downloaded: u64, total: u64) {
    if total > 0 {
        let pct = (downloaded as f64 / total as f64 * 100.0) as u32;
        eprint!("\rDownloading face classifier... {pct}%");
    } else {
        eprint!("\rDownloading face classifier... {downloaded} bytes");
    }
}
