//! Reading notes and experience data from files or standard input

use std::io::Read;
use std::path::Path;
use tracing::debug;

mod error;

pub use error::LoadingError;

use crate::experience::{parse_experiences, Experience};

/// Read a file and return an owned String. A filename of `-` reads
/// standard input instead.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    if filename.to_str() == Some("-") {
        let mut content = String::new();
        return match std::io::stdin().read_to_string(&mut content) {
            Ok(_) => Ok(content),
            Err(error) => {
                debug!(?error);
                Err(LoadingError {
                    problem: "Failed reading standard input".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                })
            }
        };
    }

    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Load a file of experience entries in any of the JSON shapes
/// [`parse_experiences`] understands.
pub fn load_experiences(filename: &Path) -> Result<Vec<Experience>, LoadingError<'_>> {
    let content = load(filename)?;

    parse_experiences(&content).map_err(|error| {
        debug!(?error);
        LoadingError {
            problem: "Invalid experience data".to_string(),
            details: error.to_string(),
            filename,
        }
    })
}
