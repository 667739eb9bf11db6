// ============================================================================
// Quantity Value Object
// An arbitrary-precision amount bound to a nominal unit
// ============================================================================

use crate::domain::unit::Unit;
use crate::engine::dispatch::{self, ArithOp, CompareOp, Operand};
use crate::numeric::{pow10, CurrencyResult, Shift};
use bigdecimal::{BigDecimal, RoundingMode, Zero};
use std::fmt;

/// An immutable amount tagged with the unit that produced it.
///
/// Quantities are value objects: every operation returns a new `Quantity`,
/// no method mutates an operand. Arithmetic and comparisons are checked by
/// the operation dispatcher before touching the decimal primitive; two
/// quantities of unrelated units refuse to combine, while dividing them
/// forms a ratio-typed result.
///
/// A computed quantity may be negative even though raw construction rejects
/// negative input.
#[derive(Clone, Debug)]
pub struct Quantity {
    amount: BigDecimal,
    unit: Unit,
}

impl Quantity {
    /// Wrap a computed decimal under `unit` without validation.
    ///
    /// Construction-time checks apply to raw input only; arithmetic results
    /// (including negatives) pass through here.
    pub(crate) fn from_computed(amount: BigDecimal, unit: Unit) -> Self {
        Quantity { amount, unit }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Borrow the underlying decimal amount.
    pub fn amount(&self) -> &BigDecimal {
        &self.amount
    }

    /// Clone the underlying decimal amount.
    pub fn to_big_decimal(&self) -> BigDecimal {
        self.amount.clone()
    }

    /// The unit that produced this quantity.
    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// The unit symbol.
    pub fn symbol(&self) -> &str {
        self.unit.symbol()
    }

    /// Whether the amount is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Whether the amount is negative (only reachable through arithmetic).
    pub fn is_negative(&self) -> bool {
        self.amount < BigDecimal::zero()
    }

    // ========================================================================
    // Equality
    // ========================================================================

    /// Structural equality: amounts and unit symbols both match.
    ///
    /// Never fails; any mismatch (including a different unit) is `false`.
    /// Contrast with [`Quantity::eq_value`], which rejects mismatched units.
    pub fn is_equal(&self, other: &Quantity) -> bool {
        self.is_same_unit(other) && self.amount == other.amount
    }

    /// Whether both quantities carry the same unit symbol.
    pub fn is_same_unit(&self, other: &Quantity) -> bool {
        self.symbol() == other.symbol()
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Render as a fixed-point integer string, rounding toward zero.
    ///
    /// Named presets resolve to their extraction exponent (`wei` → +18) so a
    /// wei-constructed amount round-trips to its integer encoding. Rounding
    /// toward zero is an invariant: a rendered amount never exceeds the true
    /// underlying value.
    pub fn to_fixed(&self, shift: Shift) -> String {
        let shifted = match shift.extraction_exponent() {
            0 => self.amount.clone(),
            exp => &self.amount * pow10(exp),
        };
        shifted
            .with_scale_round(0, RoundingMode::Down)
            .to_plain_string()
    }

    /// Render with a fixed number of fractional digits.
    ///
    /// Uses the primitive's conventional half-up rounding; the
    /// round-toward-zero guarantee applies to [`Quantity::to_fixed`] only.
    pub fn to_decimal_string(&self, decimals: i64) -> String {
        self.amount
            .with_scale_round(decimals, RoundingMode::HalfUp)
            .to_plain_string()
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Add a same-unit quantity or scalar.
    ///
    /// # Errors
    /// [`crate::numeric::CurrencyError::InvalidOperation`] if the operand
    /// unit is incompatible.
    pub fn add(&self, rhs: impl Into<Operand>) -> CurrencyResult<Quantity> {
        dispatch::execute(ArithOp::Add, self, &rhs.into())
    }

    /// Subtract a same-unit quantity or scalar. The result may be negative.
    ///
    /// # Errors
    /// [`crate::numeric::CurrencyError::InvalidOperation`] if the operand
    /// unit is incompatible.
    pub fn sub(&self, rhs: impl Into<Operand>) -> CurrencyResult<Quantity> {
        dispatch::execute(ArithOp::Sub, self, &rhs.into())
    }

    /// Multiply by a scalar, a same-unit quantity, or a ratio whose
    /// denominator this unit cancels.
    ///
    /// # Errors
    /// [`crate::numeric::CurrencyError::InvalidOperation`] if the operand
    /// unit is incompatible.
    pub fn mul(&self, rhs: impl Into<Operand>) -> CurrencyResult<Quantity> {
        dispatch::execute(ArithOp::Mul, self, &rhs.into())
    }

    /// Divide by a scalar, a same-unit quantity, a ratio whose numerator
    /// this unit cancels, or any other plain unit (forming a ratio).
    ///
    /// # Errors
    /// [`crate::numeric::CurrencyError::InvalidOperation`] for incompatible
    /// operands, [`crate::numeric::CurrencyError::DivisionByZero`] for a
    /// zero divisor.
    pub fn div(&self, rhs: impl Into<Operand>) -> CurrencyResult<Quantity> {
        dispatch::execute(ArithOp::Div, self, &rhs.into())
    }

    /// Alias for [`Quantity::add`].
    ///
    /// # Errors
    /// See [`Quantity::add`].
    pub fn plus(&self, rhs: impl Into<Operand>) -> CurrencyResult<Quantity> {
        self.add(rhs)
    }

    /// Alias for [`Quantity::sub`].
    ///
    /// # Errors
    /// See [`Quantity::sub`].
    pub fn minus(&self, rhs: impl Into<Operand>) -> CurrencyResult<Quantity> {
        self.sub(rhs)
    }

    /// Alias for [`Quantity::mul`].
    ///
    /// # Errors
    /// See [`Quantity::mul`].
    pub fn times(&self, rhs: impl Into<Operand>) -> CurrencyResult<Quantity> {
        self.mul(rhs)
    }

    /// Alias for [`Quantity::div`].
    ///
    /// # Errors
    /// See [`Quantity::div`].
    pub fn divided_by(&self, rhs: impl Into<Operand>) -> CurrencyResult<Quantity> {
        self.div(rhs)
    }

    /// Shift the amount by 10^`exponent`, keeping the unit.
    pub fn shifted_by(&self, exponent: i64) -> Quantity {
        let amount = match exponent {
            0 => self.amount.clone(),
            exp => &self.amount * pow10(exp),
        };
        Quantity::from_computed(amount, self.unit.clone())
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Numeric less-than against a same-unit quantity or scalar.
    ///
    /// # Errors
    /// [`crate::numeric::CurrencyError::InvalidOperation`] if the operand
    /// unit is incompatible.
    pub fn lt(&self, rhs: impl Into<Operand>) -> CurrencyResult<bool> {
        dispatch::compare(CompareOp::Lt, self, &rhs.into())
    }

    /// Numeric less-or-equal.
    ///
    /// # Errors
    /// [`crate::numeric::CurrencyError::InvalidOperation`] if the operand
    /// unit is incompatible.
    pub fn lte(&self, rhs: impl Into<Operand>) -> CurrencyResult<bool> {
        dispatch::compare(CompareOp::Lte, self, &rhs.into())
    }

    /// Numeric greater-than.
    ///
    /// # Errors
    /// [`crate::numeric::CurrencyError::InvalidOperation`] if the operand
    /// unit is incompatible.
    pub fn gt(&self, rhs: impl Into<Operand>) -> CurrencyResult<bool> {
        dispatch::compare(CompareOp::Gt, self, &rhs.into())
    }

    /// Numeric greater-or-equal.
    ///
    /// # Errors
    /// [`crate::numeric::CurrencyError::InvalidOperation`] if the operand
    /// unit is incompatible.
    pub fn gte(&self, rhs: impl Into<Operand>) -> CurrencyResult<bool> {
        dispatch::compare(CompareOp::Gte, self, &rhs.into())
    }

    /// Numeric equality as a checked comparison.
    ///
    /// Unlike [`Quantity::is_equal`], comparing across unrelated units is an
    /// error rather than `false`.
    ///
    /// # Errors
    /// [`crate::numeric::CurrencyError::InvalidOperation`] if the operand
    /// unit is incompatible.
    pub fn eq_value(&self, rhs: impl Into<Operand>) -> CurrencyResult<bool> {
        dispatch::compare(CompareOp::Eq, self, &rhs.into())
    }
}

impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.to_decimal_string(2), self.symbol())
    }
}

// ============================================================================
// Serde (optional, for API boundaries)
// ============================================================================

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::de::Error as DeError;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    #[derive(Serialize, Deserialize)]
    struct QuantityRepr {
        amount: String,
        symbol: String,
    }

    impl Serialize for Quantity {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            QuantityRepr {
                amount: self.amount().to_plain_string(),
                symbol: self.symbol().to_string(),
            }
            .serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Quantity {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let repr = QuantityRepr::deserialize(deserializer)?;
            let amount = BigDecimal::from_str(&repr.amount).map_err(D::Error::custom)?;
            // Computed negatives round-trip; no non-negative re-validation here
            Ok(Quantity::from_computed(amount, Unit::from_symbol(&repr.symbol)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn usd() -> Unit {
        Unit::base("USD")
    }

    #[test]
    fn test_construction_preserves_value() {
        let q = usd().of("123.456789012345678901234567890").unwrap();
        assert_eq!(
            q.to_big_decimal(),
            BigDecimal::from_str("123.456789012345678901234567890").unwrap()
        );
    }

    #[test]
    fn test_to_fixed_rounds_toward_zero() {
        let q = usd().of("1.999999999999999999").unwrap();
        assert_eq!(q.to_fixed(Shift::None), "1");

        // Negative computed amounts truncate toward zero as well
        let neg = usd().of("0").unwrap().sub(q).unwrap();
        assert_eq!(neg.to_fixed(Shift::None), "-1");
    }

    #[test]
    fn test_to_fixed_wei_round_trip() {
        let eth = Unit::base("ETH");
        let q = eth.wei("1500000000000000000").unwrap(); // 1.5 ETH
        assert_eq!(q.to_fixed(Shift::Wei), "1500000000000000000");
        assert_eq!(q.to_fixed(Shift::None), "1");
    }

    #[test]
    fn test_to_fixed_explicit_exponent() {
        let q = usd().of("1.5").unwrap();
        assert_eq!(q.to_fixed(Shift::Exponent(2)), "150");
        assert_eq!(q.to_fixed(Shift::Exponent(-1)), "0");
    }

    #[test]
    fn test_to_decimal_string() {
        let q = usd().of("1.005").unwrap();
        assert_eq!(q.to_decimal_string(2), "1.01");
        assert_eq!(q.to_decimal_string(4), "1.0050");
    }

    #[test]
    fn test_display_includes_symbol() {
        let q = usd().of("1.5").unwrap();
        assert_eq!(q.to_string(), "1.50 USD");
    }

    #[test]
    fn test_is_equal_across_units_is_false_not_error() {
        let a = usd().of(1i64).unwrap();
        let b = Unit::base("DAI").of(1i64).unwrap();
        assert!(!a.is_equal(&b));
        assert!(a.is_equal(&usd().of("1.0").unwrap()));
    }

    #[test]
    fn test_shifted_by() {
        let q = usd().of("1.5").unwrap();
        let shifted = q.shifted_by(3);
        assert_eq!(shifted.to_big_decimal(), BigDecimal::from(1500));
        assert_eq!(shifted.symbol(), "USD");
    }

    #[test]
    fn test_arithmetic_aliases() {
        let a = usd().of(6i64).unwrap();
        let b = usd().of(2i64).unwrap();
        assert!(a.plus(&b).unwrap().is_equal(&a.add(&b).unwrap()));
        assert!(a.minus(&b).unwrap().is_equal(&a.sub(&b).unwrap()));
        assert!(a.times(&b).unwrap().is_equal(&a.mul(&b).unwrap()));
        assert!(a.divided_by(&b).unwrap().is_equal(&a.div(&b).unwrap()));
    }

    #[test]
    fn test_partial_eq_matches_is_equal() {
        let a = usd().of("2").unwrap();
        let b = usd().of("2.000").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, usd().of(3i64).unwrap());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let q = usd().of("1.25").unwrap();
        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(json, r#"{"amount":"1.25","symbol":"USD"}"#);
        let back: Quantity = serde_json::from_str(&json).unwrap();
        assert!(back.is_equal(&q));

        // Ratio symbols reconstruct ratio units
        let dai = Unit::base("DAI");
        let ratio = usd().of(6i64).unwrap().div(dai.of(2i64).unwrap()).unwrap();
        let back: Quantity = serde_json::from_str(&serde_json::to_string(&ratio).unwrap()).unwrap();
        assert!(back.unit().is_ratio());
        assert_eq!(back.symbol(), "USD/DAI");
    }
}
