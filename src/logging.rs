use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Route `tracing` output to `path`. The terminal belongs to the TUI, so nothing goes to stderr.
///
/// Returns `false` when the file can't be opened; the app then runs without a log.
pub fn init(path: Option<&Path>) -> bool {
    let Some(path) = path else {
        return false;
    };

    let file = match open_log_file(path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: could not open log file {}: {}", path.display(), e);
            return false;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .is_ok()
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_log_file_creates_parent() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("nested").join("dex.log");

        let file = open_log_file(&path);

        assert!(file.is_ok());
        assert!(path.exists());
    }

    #[test]
    fn test_init_without_path_is_disabled() {
        assert!(!init(None));
    }
}
