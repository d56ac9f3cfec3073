//! ms-core: stable foundation for the motor starting workspace.
//!
//! Contains:
//! - units (uom SI types + constructors for nameplate quantities)
//! - numeric (finiteness/positivity checks, percent helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{MsError, MsResult};
pub use numeric::*;
pub use units::*;
