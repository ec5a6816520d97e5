//! Attachment metadata and the selection gatekeeper

use crate::error::AttachmentError;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

/// Maximum number of files per submission
pub const MAX_FILES: usize = 5;

/// Maximum size of a single file (8 MiB)
pub const MAX_FILE_SIZE: u64 = 8 * 1024 * 1024;

/// A file selected for upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    pub size: u64,
    /// Local path used to stream the bytes; never sent in the payload
    #[serde(skip)]
    pub path: PathBuf,
}

impl Attachment {
    pub fn new(path: &Path, size: u64) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            name,
            size,
            path: path.to_path_buf(),
        }
    }
}

/// Source of file size metadata
pub trait FileProbe {
    fn size_of(&self, path: &Path) -> io::Result<u64>;
}

/// Reads metadata from the local filesystem
pub struct DiskProbe;

impl FileProbe for DiskProbe {
    fn size_of(&self, path: &Path) -> io::Result<u64> {
        let meta = std::fs::metadata(path)?;
        if !meta.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a regular file",
            ));
        }
        Ok(meta.len())
    }
}

/// Split the Files text into paths, one per non-blank line
pub fn parse_selection(text: &str) -> Vec<PathBuf> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(PathBuf::from)
        .collect()
}

/// Accept or reject a whole selection.
///
/// Count is checked before any metadata is read; then each file in order.
/// The first violation rejects everything.
pub fn gate_selection(
    paths: &[PathBuf],
    probe: &dyn FileProbe,
) -> Result<Vec<Attachment>, AttachmentError> {
    if paths.len() > MAX_FILES {
        return Err(AttachmentError::TooMany { max: MAX_FILES });
    }

    let mut accepted = Vec::with_capacity(paths.len());
    for path in paths {
        let size = probe
            .size_of(path)
            .map_err(|e| AttachmentError::Unreadable {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        let attachment = Attachment::new(path, size);
        if size > MAX_FILE_SIZE {
            return Err(AttachmentError::TooLarge {
                name: attachment.name,
                size,
            });
        }
        accepted.push(attachment);
    }
    Ok(accepted)
}
