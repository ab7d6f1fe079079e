// mod.rs - Hashers module root

pub mod sha256;
pub mod snapshot;

// Re-export main types for convenience
pub use sha256::Sha256Hasher;
pub use snapshot::ContentSnapshot;
