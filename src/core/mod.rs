// mod.rs - Core logic module

pub mod cancel;
pub mod pair;
pub mod swap;

// Re-export main types for convenience
pub use cancel::{install_interrupt_handler, CancellationToken};
pub use pair::{entry_exists, temp_name, Pair, RenameStep, SwapPlan};
pub use swap::{SwapEngine, SwapReport};
