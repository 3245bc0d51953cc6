//! Text-level hide and reveal operations.
//!
//! These tie the pipeline together:
//!
//! ```text
//! text → obfuscate (optional) → frame → capacity check → embed
//! ```

mod operations;
mod types;

pub use operations::{capacity_report, hide_text, reveal_text};
pub use types::{CapacityReport, HideSummary};
