// sha256.rs - SHA256 file digests

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::{Result, SwapError};

/// SHA256 hasher for whole-file content identity
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl Sha256Hasher {
    /// Lowercase hex digest of the file at `path`, streamed
    pub fn hash_file(&self, path: &Path) -> Result<String> {
        let file = File::open(path)
            .map_err(|e| SwapError::io(format!("cannot open \"{}\" for hashing", path.display()), e))?;
        let mut reader = BufReader::new(file);
        let mut hasher = Sha256::new();
        io::copy(&mut reader, &mut hasher)
            .map_err(|e| SwapError::io(format!("cannot read \"{}\" for hashing", path.display()), e))?;
        Ok(format!("{:x}", hasher.finalize()))
    }

    pub fn name(&self) -> &'static str {
        "SHA256"
    }
}
