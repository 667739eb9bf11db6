// ============================================================================
// Engine Module
// Operation dispatch and free-form input resolution
// ============================================================================

pub mod dispatch;
pub mod resolver;

pub use dispatch::{ArithOp, CompareOp, Operand};
pub use resolver::{CurrencyRegistry, ResolveSource, Resolver, UnitRef};
