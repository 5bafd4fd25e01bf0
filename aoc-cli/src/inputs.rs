//! Read-only store of puzzle inputs on disk

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// File-based puzzle inputs
///
/// Directory structure: `{input_dir}/{year}_day{day:02}.txt`, unless an
/// explicit file overrides it.
pub struct InputStore {
    input_dir: PathBuf,
    explicit: Option<PathBuf>,
}

impl InputStore {
    pub fn new(input_dir: PathBuf) -> Self {
        Self {
            input_dir,
            explicit: None,
        }
    }

    /// Serve `file` for every year/day.
    pub fn with_file(input_dir: PathBuf, file: PathBuf) -> Self {
        Self {
            input_dir,
            explicit: Some(file),
        }
    }

    /// Get the input path for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        match &self.explicit {
            Some(file) => file.clone(),
            None => self.input_dir.join(format!("{}_day{:02}.txt", year, day)),
        }
    }

    pub fn get(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.input_path(year, day);
        match fs::read_to_string(&path) {
            Ok(content) => {
                log::info!("read {}/{:02} input from {}", year, day, path.display());
                Ok(content)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::warn!("missing {}/{:02} input at {}", year, day, path.display());
                Err(InputError::Missing(path))
            }
            Err(e) => Err(InputError::Read {
                path,
                message: e.to_string(),
            }),
        }
    }
}
