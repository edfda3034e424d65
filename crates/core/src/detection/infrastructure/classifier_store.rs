use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::shared::constants::{APP_DATA_DIR, STAGING_SUBDIR};

#[derive(Error, Debug)]
pub enum ClassifierStoreError {
    #[error("could not determine app-private directory")]
    NoAppDir,
    #[error("failed to create staging directory {path}: {source}")]
    StagingDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read bundled classifier {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write staged classifier {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("download failed for {url}: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Progress callback: `(bytes_downloaded, total_bytes)`.
/// `total_bytes` is 0 if the server didn't provide Content-Length.
pub type ProgressFn = Box<dyn Fn(u64, u64) + Send>;

/// Copies the bundled classifier byte-for-byte into `target_dir`, creating
/// the directory if absent, and returns the staged file's path.
///
/// Safe to re-run on every startup: an existing staged file is overwritten
/// with identical content. The copy goes through a `.part` file and a
/// rename, so a failed copy never leaves a truncated classifier at the
/// staged path.
pub fn stage(source: &Path, target_dir: &Path) -> Result<PathBuf, ClassifierStoreError> {
    fs::create_dir_all(target_dir).map_err(|e| ClassifierStoreError::StagingDir {
        path: target_dir.to_path_buf(),
        source: e,
    })?;

    let file_name = source
        .file_name()
        .ok_or_else(|| ClassifierStoreError::Read {
            path: source.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "source path has no file name",
            ),
        })?;
    let staged = target_dir.join(file_name);

    let bytes = fs::read(source).map_err(|e| ClassifierStoreError::Read {
        path: source.to_path_buf(),
        source: e,
    })?;
    write_atomic(&staged, &bytes)?;

    Ok(staged)
}

/// Platform app-private directory for staged classifier data.
///
/// - macOS: `~/Library/Application Support/FaceBridge/cascade/`
/// - Linux: `$XDG_DATA_HOME/FaceBridge/cascade/` or `~/.local/share/FaceBridge/cascade/`
/// - Windows: `%APPDATA%/FaceBridge/cascade/`
pub fn app_private_dir() -> Result<PathBuf, ClassifierStoreError> {
    dirs::data_dir()
        .map(|d| d.join(APP_DATA_DIR).join(STAGING_SUBDIR))
        .ok_or(ClassifierStoreError::NoAppDir)
}

/// Locates the bundled classifier for installs that don't carry one.
///
/// Resolution order:
/// 1. Previously staged copy in the app-private directory
/// 2. Bundled path (for development / pre-packaged installs)
/// 3. Download from URL into the app-private directory
pub fn fetch(
    name: &str,
    url: &str,
    bundled_dir: Option<&Path>,
    progress: Option<ProgressFn>,
) -> Result<PathBuf, ClassifierStoreError> {
    let staging_dir = app_private_dir()?;
    let staged = staging_dir.join(name);
    if staged.exists() {
        return Ok(staged);
    }

    if let Some(dir) = bundled_dir {
        let bundled = dir.join(name);
        if bundled.exists() {
            return Ok(bundled);
        }
    }

    fs::create_dir_all(&staging_dir).map_err(|e| ClassifierStoreError::StagingDir {
        path: staging_dir.clone(),
        source: e,
    })?;
    download(url, &staged, progress)?;
    Ok(staged)
}

fn download(url: &str, dest: &Path, progress: Option<ProgressFn>) -> Result<(), ClassifierStoreError> {
    let response = reqwest::blocking::get(url).map_err(|e| ClassifierStoreError::Download {
        url: url.to_string(),
        source: e,
    })?;
    let total = response.content_length().unwrap_or(0);
    let bytes = response.bytes().map_err(|e| ClassifierStoreError::Download {
        url: url.to_string(),
        source: e,
    })?;

    let temp = dest.with_extension("part");
    let mut file = fs::File::create(&temp).map_err(|e| ClassifierStoreError::Write {
        path: temp.clone(),
        source: e,
    })?;

    // Report progress in chunks to avoid excessive callbacks
    let chunk_size = 1024 * 1024;
    let mut written: u64 = 0;
    for chunk in bytes.chunks(chunk_size) {
        file.write_all(chunk).map_err(|e| ClassifierStoreError::Write {
            path: temp.clone(),
            source: e,
        })?;
        written += chunk.len() as u64;
        if let Some(ref cb) = progress {
            cb(written, total);
        }
    }
    file.flush().map_err(|e| ClassifierStoreError::Write {
        path: temp.clone(),
        source: e,
    })?;
    drop(file);

    fs::rename(&temp, dest).map_err(|e| ClassifierStoreError::Write {
        path: dest.to_path_buf(),
        source: e,
    })?;
    Ok(())
}

fn write_atomic(dest: &Path, bytes: &[u8]) -> Result<(), ClassifierStoreError> {
    let temp = dest.with_extension("part");
    fs::write(&temp, bytes).map_err(|e| ClassifierStoreError::Write {
        path: temp.clone(),
        source: e,
    })?;
    fs::rename(&temp, dest).map_err(|e| ClassifierStoreError::Write {
        path: dest.to_path_buf(),
        source: e,
    })?;
    Ok(())
}
