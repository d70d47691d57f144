//! Optional serialized travel model
//!
//! The artifact is read at startup and held by the engine, but ranking never
//! consults it. A missing or unreadable file leaves the model unset.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

/// Raw model artifact kept in memory for the process lifetime
#[derive(Debug, Clone)]
pub struct TravelModel {
    path: PathBuf,
    bytes: Vec<u8>,
}

impl TravelModel {
    /// Read the artifact from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read model artifact {}", path.display()))?;
        if bytes.is_empty() {
            anyhow::bail!("Model artifact {} is empty", path.display());
        }

        Ok(Self {
            path: path.to_path_buf(),
            bytes,
        })
    }

    /// Load the artifact, logging and returning `None` on failure
    pub fn load_optional<P: AsRef<Path>>(path: P) -> Option<Self> {
        match Self::load(&path) {
            Ok(model) => {
                info!(
                    "Travel model loaded from {} ({} bytes)",
                    model.path.display(),
                    model.size_bytes()
                );
                Some(model)
            }
            Err(e) => {
                warn!("Error loading travel model: {:#}", e);
                None
            }
        }
    }

    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }
}
