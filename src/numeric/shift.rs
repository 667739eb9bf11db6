// ============================================================================
// Decimal-Exponent Shifts
// Named presets for smallest-denomination integer encodings
// ============================================================================

use bigdecimal::num_bigint::BigInt;
use bigdecimal::BigDecimal;

/// A decimal-exponent shift applied at construction and inverted at extraction.
///
/// Smallest-denomination integer encodings store `value × 10^|exp|`; the
/// named presets normalize them to human-scale amounts:
///
/// | Preset | Construction | Extraction |
/// |--------|--------------|------------|
/// | `Wei`  | 10^-18       | 10^+18     |
/// | `Ray`  | 10^-27       | 10^+27     |
/// | `Rad`  | 10^-45       | 10^+45     |
///
/// `Exponent(e)` applies `10^e` in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Shift {
    /// No shift (10^0)
    #[default]
    None,
    /// An explicit signed exponent, applied as given
    Exponent(i64),
    /// 10^-18, the wei encoding of 18-decimal tokens
    Wei,
    /// 10^-27, the ray encoding of 27-decimal rates
    Ray,
    /// 10^-45, the rad encoding of 45-decimal debt units
    Rad,
}

impl Shift {
    /// Exponent applied when a raw amount is constructed.
    #[inline]
    pub const fn construction_exponent(self) -> i64 {
        match self {
            Shift::None => 0,
            Shift::Exponent(exp) => exp,
            Shift::Wei => -18,
            Shift::Ray => -27,
            Shift::Rad => -45,
        }
    }

    /// Exponent applied when an amount is extracted with `to_fixed`.
    ///
    /// Named presets invert their construction exponent; explicit exponents
    /// are applied as given.
    #[inline]
    pub const fn extraction_exponent(self) -> i64 {
        match self {
            Shift::None => 0,
            Shift::Exponent(exp) => exp,
            Shift::Wei => 18,
            Shift::Ray => 27,
            Shift::Rad => 45,
        }
    }
}

impl From<i64> for Shift {
    fn from(exp: i64) -> Self {
        Shift::Exponent(exp)
    }
}

/// Exact 10^exp as a `BigDecimal`, for any signed exponent.
///
/// `BigDecimal` stores `digits × 10^-scale`, so this is a single allocation
/// with no precision loss in either direction.
pub fn pow10(exp: i64) -> BigDecimal {
    BigDecimal::new(BigInt::from(1), -exp)
}
