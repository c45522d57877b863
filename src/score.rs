use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR_NAME: &str = "arcade-snake";
const SCORE_FILE_NAME: &str = "scores.json";

/// On-disk shape of the persisted score data.
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreFile {
    pub high_score: u32,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no platform data directory available")]
    NoDataDir,
    #[error("failed to read score file: {0}")]
    Io(#[from] io::Error),
    #[error("score file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("no platform data directory available")]
    NoDataDir,
    #[error("failed to write score file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode score file: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Loads the persisted high score. A score file that does not exist yet
/// reads as zero; a file that exists but cannot be parsed is an error.
pub fn load_high_score() -> Result<u32, LoadError> {
    let path = score_file_path().ok_or(LoadError::NoDataDir)?;
    load_from(&path)
}

/// Persists `high_score`, creating the data directory on first save.
pub fn save_high_score(high_score: u32) -> Result<(), SaveError> {
    let path = score_file_path().ok_or(SaveError::NoDataDir)?;
    save_to(&path, high_score)
}

fn score_file_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_DIR_NAME).join(SCORE_FILE_NAME))
}

fn load_from(path: &Path) -> Result<u32, LoadError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(err) => return Err(err.into()),
    };
    let file: ScoreFile = serde_json::from_str(&raw)?;
    Ok(file.high_score)
}

fn save_to(path: &Path, high_score: u32) -> Result<(), SaveError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let encoded = serde_json::to_string_pretty(&ScoreFile { high_score })?;
    fs::write(path, encoded)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::fs;
    use std::path::PathBuf;
    use std::process;

    use super::{LoadError, load_from, save_to};

    fn scratch_path(name: &str) -> PathBuf {
        env::temp_dir()
            .join(format!("arcade-snake-test-{}-{name}", process::id()))
            .join("scores.json")
    }

    #[test]
    fn saved_score_loads_back() {
        let path = scratch_path("roundtrip");

        save_to(&path, 42).unwrap();
        assert_eq!(load_from(&path).unwrap(), 42);

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"high_score\": 42"));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn missing_file_reads_as_zero() {
        let path = scratch_path("missing");

        assert_eq!(load_from(&path).unwrap(), 0);
    }

    #[test]
    fn unparsable_file_is_reported() {
        let path = scratch_path("garbage");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json at all").unwrap();

        assert!(matches!(load_from(&path), Err(LoadError::Parse(_))));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn save_creates_the_data_directory() {
        let path = scratch_path("fresh-dir");
        let _ = fs::remove_dir_all(path.parent().unwrap());

        save_to(&path, 7).unwrap();
        assert!(path.exists());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
