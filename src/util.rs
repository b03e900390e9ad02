use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// An I/O failure annotated with what kind of file was being read.
#[derive(Debug, Error)]
#[error("reading {kind} file `{}`: {source}", .path.display())]
pub struct ReadError {
    pub kind: &'static str,
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Reads `path` into a string. `kind` names the file's role (e.g. `site
/// config`, `article`) for the error message.
pub fn read(path: &Path, kind: &'static str) -> Result<String, ReadError> {
    fs::read_to_string(path).map_err(|source| ReadError {
        kind,
        path: path.to_owned(),
        source,
    })
}
