//! Removal of the external root directory

use std::fs;
use std::path::Path;

use crate::{Error, Result};

/// Remove the external root directory.
///
/// The removal is not recursive: a root that still holds checkouts, or a root
/// that does not exist, is an error and nothing is deleted.
pub fn clear(root: &Path) -> Result<()> {
    tracing::info!(path = %root.display(), "Removing external directory");
    fs::remove_dir(root).map_err(|e| Error::io(root, e))
}
