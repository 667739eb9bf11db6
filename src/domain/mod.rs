// ============================================================================
// Domain Module
// Value objects: unit tags, ratio units, and tagged quantities
// ============================================================================

pub mod quantity;
pub mod unit;

pub use quantity::Quantity;
pub use unit::{RawAmount, Unit};
