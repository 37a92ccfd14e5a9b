//! Input files stored locally, one per puzzle

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Reads puzzle inputs from a directory
///
/// Directory structure: `{input_dir}/{id:02}.txt`
pub struct InputStore {
    input_dir: PathBuf,
}

impl InputStore {
    pub fn new(input_dir: PathBuf) -> Self {
        Self { input_dir }
    }

    /// Get the path for a specific puzzle
    pub fn input_path(&self, id: u8) -> PathBuf {
        self.input_dir.join(format!("{:02}.txt", id))
    }

    /// Read the input for a puzzle
    pub fn read(&self, id: u8) -> Result<String, InputError> {
        let path = self.input_path(id);
        fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => InputError::Missing { id, path },
            _ => InputError::Io { path, source },
        })
    }
}
