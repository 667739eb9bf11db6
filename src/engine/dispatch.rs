// ============================================================================
// Operation Dispatcher
// Unit-compatibility validation and checked execution of binary operations
// ============================================================================

use crate::domain::{Quantity, Unit};
use crate::numeric::{CurrencyError, CurrencyResult};
use bigdecimal::{BigDecimal, Zero};
use std::fmt;

// ============================================================================
// Operation Sets
// ============================================================================

/// Arithmetic operations on a quantity and a right operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ArithOp {
    /// Canonical operation name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            ArithOp::Add => "add",
            ArithOp::Sub => "subtract",
            ArithOp::Mul => "multiply",
            ArithOp::Div => "divide",
        }
    }
}

impl fmt::Display for ArithOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Comparison operations on a quantity and a right operand.
///
/// Comparisons follow the same unit-compatibility rules as arithmetic:
/// comparing two unrelated units is an error, even for equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Lt,
    Lte,
    Gt,
    Gte,
    Eq,
}

impl CompareOp {
    /// Canonical operation name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            CompareOp::Lt => "lt",
            CompareOp::Lte => "lte",
            CompareOp::Gt => "gt",
            CompareOp::Gte => "gte",
            CompareOp::Eq => "eq",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Operands
// ============================================================================

/// The right operand of a binary operation: a unit-tagged quantity or a
/// bare scalar that broadcasts against any unit.
#[derive(Debug, Clone)]
pub enum Operand {
    /// A raw scalar; always compatible, result keeps the left unit
    Scalar(BigDecimal),
    /// A tagged quantity, subject to unit-compatibility validation
    Quantity(Quantity),
}

impl Operand {
    /// Symbol (or scalar value) used in rejection diagnostics.
    fn describe(&self) -> String {
        match self {
            Operand::Scalar(value) => value.to_string(),
            Operand::Quantity(q) => q.symbol().to_string(),
        }
    }
}

impl From<Quantity> for Operand {
    fn from(q: Quantity) -> Self {
        Operand::Quantity(q)
    }
}

impl From<&Quantity> for Operand {
    fn from(q: &Quantity) -> Self {
        Operand::Quantity(q.clone())
    }
}

impl From<BigDecimal> for Operand {
    fn from(value: BigDecimal) -> Self {
        Operand::Scalar(value)
    }
}

impl From<&BigDecimal> for Operand {
    fn from(value: &BigDecimal) -> Self {
        Operand::Scalar(value.clone())
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Scalar(BigDecimal::from(value))
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Scalar(BigDecimal::from(value))
    }
}

impl From<u64> for Operand {
    fn from(value: u64) -> Self {
        Operand::Scalar(BigDecimal::from(value))
    }
}

impl From<u32> for Operand {
    fn from(value: u32) -> Self {
        Operand::Scalar(BigDecimal::from(value))
    }
}

/// How the right operand relates to the left quantity's unit.
///
/// A closed classification matched exhaustively by validation and result
/// typing; the ratio arm carries the numerator/denominator handles so the
/// cancellation rules never re-derive them.
enum OperandClass<'a> {
    Scalar(&'a BigDecimal),
    SameUnit(&'a Quantity),
    Ratio {
        quantity: &'a Quantity,
        numerator: &'a Unit,
        denominator: &'a Unit,
    },
    OtherUnit(&'a Quantity),
}

fn classify<'a>(left: &Quantity, right: &'a Operand) -> OperandClass<'a> {
    match right {
        Operand::Scalar(value) => OperandClass::Scalar(value),
        Operand::Quantity(q) if left.is_same_unit(q) => OperandClass::SameUnit(q),
        Operand::Quantity(q) => match (q.unit().numerator(), q.unit().denominator()) {
            (Some(numerator), Some(denominator)) => OperandClass::Ratio {
                quantity: q,
                numerator,
                denominator,
            },
            _ => OperandClass::OtherUnit(q),
        },
    }
}

fn rejection(method: &'static str, left: &Quantity, right: &Operand) -> CurrencyError {
    tracing::debug!(
        method,
        left = left.symbol(),
        right = %right.describe(),
        "rejected incompatible operation"
    );
    CurrencyError::InvalidOperation {
        method,
        left: left.symbol().to_string(),
        right: right.describe(),
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Check unit compatibility for an arithmetic operation.
///
/// Scalars broadcast and same-unit operands always combine. A ratio on the
/// right combines only when the left unit cancels one of its sides:
/// multiply against the denominator, divide against the numerator. Any
/// other plain unit combines only under division, which forms a ratio.
///
/// # Errors
/// [`CurrencyError::InvalidOperation`] naming both symbols and the method.
pub fn assert_valid_arith(op: ArithOp, left: &Quantity, right: &Operand) -> CurrencyResult<()> {
    match classify(left, right) {
        OperandClass::Scalar(_) | OperandClass::SameUnit(_) => Ok(()),
        OperandClass::Ratio {
            numerator,
            denominator,
            ..
        } => match op {
            ArithOp::Mul if denominator.symbol() == left.symbol() => Ok(()),
            ArithOp::Div if numerator.symbol() == left.symbol() => Ok(()),
            _ => Err(rejection(op.name(), left, right)),
        },
        OperandClass::OtherUnit(_) => match op {
            ArithOp::Div => Ok(()),
            _ => Err(rejection(op.name(), left, right)),
        },
    }
}

/// Check unit compatibility for a comparison.
///
/// Only scalars and same-unit quantities are comparable; ratio and
/// cross-unit comparisons are rejected even for equality.
///
/// # Errors
/// [`CurrencyError::InvalidOperation`] naming both symbols and the method.
pub fn assert_valid_compare(op: CompareOp, left: &Quantity, right: &Operand) -> CurrencyResult<()> {
    match classify(left, right) {
        OperandClass::Scalar(_) | OperandClass::SameUnit(_) => Ok(()),
        OperandClass::Ratio { .. } | OperandClass::OtherUnit(_) => {
            Err(rejection(op.name(), left, right))
        }
    }
}

// ============================================================================
// Execution
// ============================================================================

/// Validate and execute an arithmetic operation, typing the result.
///
/// Result unit:
/// - scalar or same-unit right → left's unit;
/// - ratio right → numerator unit under multiply, denominator under divide;
/// - other plain unit (division only) → the synthesized ratio `left/right`.
///
/// # Errors
/// [`CurrencyError::InvalidOperation`] for incompatible operands,
/// [`CurrencyError::DivisionByZero`] for a zero divisor.
pub fn execute(op: ArithOp, left: &Quantity, right: &Operand) -> CurrencyResult<Quantity> {
    assert_valid_arith(op, left, right)?;
    match classify(left, right) {
        OperandClass::Scalar(value) => {
            let amount = apply(op, left.amount(), value)?;
            Ok(Quantity::from_computed(amount, left.unit().clone()))
        }
        OperandClass::SameUnit(q) => {
            let amount = apply(op, left.amount(), q.amount())?;
            Ok(Quantity::from_computed(amount, left.unit().clone()))
        }
        OperandClass::Ratio {
            quantity,
            numerator,
            denominator,
        } => {
            let amount = apply(op, left.amount(), quantity.amount())?;
            // Validation admits only Mul (cancels denominator) and Div
            // (cancels numerator) here
            let unit = match op {
                ArithOp::Mul => numerator.clone(),
                _ => denominator.clone(),
            };
            Ok(Quantity::from_computed(amount, unit))
        }
        OperandClass::OtherUnit(q) => {
            let amount = apply(op, left.amount(), q.amount())?;
            Ok(Quantity::from_computed(
                amount,
                Unit::ratio(left.unit(), q.unit()),
            ))
        }
    }
}

/// Validate and execute a comparison, returning the raw boolean.
///
/// # Errors
/// [`CurrencyError::InvalidOperation`] if the operand unit is incompatible.
pub fn compare(op: CompareOp, left: &Quantity, right: &Operand) -> CurrencyResult<bool> {
    assert_valid_compare(op, left, right)?;
    let rhs = match right {
        Operand::Scalar(value) => value,
        Operand::Quantity(q) => q.amount(),
    };
    Ok(match op {
        CompareOp::Lt => left.amount() < rhs,
        CompareOp::Lte => left.amount() <= rhs,
        CompareOp::Gt => left.amount() > rhs,
        CompareOp::Gte => left.amount() >= rhs,
        CompareOp::Eq => left.amount() == rhs,
    })
}

fn apply(op: ArithOp, lhs: &BigDecimal, rhs: &BigDecimal) -> CurrencyResult<BigDecimal> {
    match op {
        ArithOp::Add => Ok(lhs + rhs),
        ArithOp::Sub => Ok(lhs - rhs),
        ArithOp::Mul => Ok(lhs * rhs),
        ArithOp::Div => {
            // BigDecimal division panics on a zero divisor
            if rhs.is_zero() {
                return Err(CurrencyError::DivisionByZero);
            }
            Ok(lhs / rhs)
        }
    }
}
