// ============================================================================
// Unit Factory
// Nominal unit tags and derived ratio units
// ============================================================================

use crate::domain::quantity::Quantity;
use crate::numeric::{pow10, CurrencyError, CurrencyResult, Shift};
use bigdecimal::{BigDecimal, FromPrimitive, Zero};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

// ============================================================================
// Raw Input
// ============================================================================

/// Raw input accepted by unit constructors.
///
/// A closed set of source representations; everything is converted to a
/// `BigDecimal` and validated (finite, non-negative) before a `Quantity`
/// is produced.
#[derive(Debug, Clone)]
pub enum RawAmount<'a> {
    /// A decimal string, e.g. `"1.5"`
    Text(&'a str),
    /// An already-parsed decimal
    Decimal(BigDecimal),
    /// A signed integer
    Int(i64),
    /// An unsigned integer
    Unsigned(u64),
    /// A float; NaN and infinities are rejected
    Float(f64),
}

impl RawAmount<'_> {
    /// Render the raw input for error messages.
    fn describe(&self) -> String {
        match self {
            RawAmount::Text(s) => (*s).to_string(),
            RawAmount::Decimal(d) => d.to_string(),
            RawAmount::Int(i) => i.to_string(),
            RawAmount::Unsigned(u) => u.to_string(),
            RawAmount::Float(f) => f.to_string(),
        }
    }

    /// Convert to a decimal, reporting the reason on failure.
    fn into_decimal(self) -> Result<BigDecimal, String> {
        match self {
            RawAmount::Text(s) => {
                BigDecimal::from_str(s.trim()).map_err(|err| format!("not a valid number ({err})"))
            }
            RawAmount::Decimal(d) => Ok(d),
            RawAmount::Int(i) => Ok(BigDecimal::from(i)),
            RawAmount::Unsigned(u) => Ok(BigDecimal::from(u)),
            RawAmount::Float(f) => {
                BigDecimal::from_f64(f).ok_or_else(|| "not a finite number".to_string())
            }
        }
    }
}

impl<'a> From<&'a str> for RawAmount<'a> {
    fn from(s: &'a str) -> Self {
        RawAmount::Text(s)
    }
}

impl From<BigDecimal> for RawAmount<'_> {
    fn from(d: BigDecimal) -> Self {
        RawAmount::Decimal(d)
    }
}

impl From<&BigDecimal> for RawAmount<'_> {
    fn from(d: &BigDecimal) -> Self {
        RawAmount::Decimal(d.clone())
    }
}

impl From<i64> for RawAmount<'_> {
    fn from(i: i64) -> Self {
        RawAmount::Int(i)
    }
}

impl From<i32> for RawAmount<'_> {
    fn from(i: i32) -> Self {
        RawAmount::Int(i64::from(i))
    }
}

impl From<u64> for RawAmount<'_> {
    fn from(u: u64) -> Self {
        RawAmount::Unsigned(u)
    }
}

impl From<u32> for RawAmount<'_> {
    fn from(u: u32) -> Self {
        RawAmount::Unsigned(u64::from(u))
    }
}

impl From<f64> for RawAmount<'_> {
    fn from(f: f64) -> Self {
        RawAmount::Float(f)
    }
}

// ============================================================================
// Unit
// ============================================================================

#[derive(Debug)]
enum UnitKind {
    Base,
    Ratio { numerator: Unit, denominator: Unit },
}

#[derive(Debug)]
struct UnitInner {
    symbol: String,
    kind: UnitKind,
}

/// A nominal unit tag: a plain currency symbol, or a derived ratio of two
/// base units.
///
/// Units are created once at setup and shared; the handle is a cheap `Arc`
/// clone, and every [`Quantity`] carries the handle of the unit that built
/// it, so a value can spawn same-unit siblings without naming the type.
///
/// Two quantities are "same-unit" iff their symbols are equal; ratio symbols
/// are derived as `"<numerator>/<denominator>"`.
#[derive(Clone, Debug)]
pub struct Unit(Arc<UnitInner>);

impl Unit {
    /// Create a new base unit for `symbol`.
    pub fn base(symbol: impl Into<String>) -> Self {
        Unit(Arc::new(UnitInner {
            symbol: symbol.into(),
            kind: UnitKind::Base,
        }))
    }

    /// Create the ratio unit `numerator/denominator`.
    ///
    /// The ratio holds read-only handles to its parts; distinct pairings
    /// are distinct units even though all ratios share the same kind.
    pub fn ratio(numerator: &Unit, denominator: &Unit) -> Self {
        Unit(Arc::new(UnitInner {
            symbol: format!("{}/{}", numerator.symbol(), denominator.symbol()),
            kind: UnitKind::Ratio {
                numerator: numerator.clone(),
                denominator: denominator.clone(),
            },
        }))
    }

    /// Rebuild a unit from its symbol alone.
    ///
    /// Symbols containing `/` become ratio units of two base units.
    pub fn from_symbol(symbol: &str) -> Self {
        match symbol.split_once('/') {
            Some((num, den)) => Unit::ratio(&Unit::base(num), &Unit::base(den)),
            None => Unit::base(symbol),
        }
    }

    /// The unit's symbol.
    pub fn symbol(&self) -> &str {
        &self.0.symbol
    }

    /// Whether this unit is a derived ratio.
    pub fn is_ratio(&self) -> bool {
        matches!(self.0.kind, UnitKind::Ratio { .. })
    }

    /// The numerator unit, for ratio units.
    pub fn numerator(&self) -> Option<&Unit> {
        match &self.0.kind {
            UnitKind::Ratio { numerator, .. } => Some(numerator),
            UnitKind::Base => None,
        }
    }

    /// The denominator unit, for ratio units.
    pub fn denominator(&self) -> Option<&Unit> {
        match &self.0.kind {
            UnitKind::Ratio { denominator, .. } => Some(denominator),
            UnitKind::Base => None,
        }
    }

    /// Whether `quantity` belongs to this exact unit.
    ///
    /// Requires both an exact symbol match and a matching base/ratio kind.
    pub fn is_instance(&self, quantity: &Quantity) -> bool {
        quantity.unit().symbol() == self.symbol()
            && quantity.unit().is_ratio() == self.is_ratio()
    }

    // ========================================================================
    // Constructors
    // ========================================================================

    /// Construct a quantity of this unit from raw input.
    ///
    /// # Errors
    /// Returns [`CurrencyError::Construction`] if the input is negative,
    /// non-numeric, or non-finite.
    pub fn of<'a>(&self, raw: impl Into<RawAmount<'a>>) -> CurrencyResult<Quantity> {
        self.of_shifted(raw, Shift::None)
    }

    /// Construct a quantity, applying `shift` once at construction.
    ///
    /// The shift is baked into the amount (multiply by 10^exp); it is not
    /// stored on the quantity.
    ///
    /// # Errors
    /// Returns [`CurrencyError::Construction`] if the input is negative,
    /// non-numeric, or non-finite.
    pub fn of_shifted<'a>(
        &self,
        raw: impl Into<RawAmount<'a>>,
        shift: Shift,
    ) -> CurrencyResult<Quantity> {
        let raw = raw.into();
        let input = raw.describe();
        let value = raw
            .into_decimal()
            .map_err(|reason| self.construction_error(&input, reason))?;
        if value < BigDecimal::zero() {
            return Err(self.construction_error(&input, "amount cannot be negative".to_string()));
        }
        Ok(Quantity::from_computed(apply_shift(&value, shift), self.clone()))
    }

    /// Construct from a wei-encoded integer amount (10^-18).
    pub fn wei<'a>(&self, raw: impl Into<RawAmount<'a>>) -> CurrencyResult<Quantity> {
        self.of_shifted(raw, Shift::Wei)
    }

    /// Construct from a ray-encoded integer amount (10^-27).
    pub fn ray<'a>(&self, raw: impl Into<RawAmount<'a>>) -> CurrencyResult<Quantity> {
        self.of_shifted(raw, Shift::Ray)
    }

    /// Construct from a rad-encoded integer amount (10^-45).
    pub fn rad<'a>(&self, raw: impl Into<RawAmount<'a>>) -> CurrencyResult<Quantity> {
        self.of_shifted(raw, Shift::Rad)
    }

    /// Re-wrap an existing quantity under this unit.
    ///
    /// Reuses the decimal value directly, bypassing the non-negative check:
    /// a computed negative survives re-wrapping. The shift is still applied.
    pub fn rewrap(&self, quantity: &Quantity, shift: Shift) -> Quantity {
        Quantity::from_computed(apply_shift(quantity.amount(), shift), self.clone())
    }

    fn construction_error(&self, input: &str, reason: String) -> CurrencyError {
        CurrencyError::Construction {
            symbol: self.symbol().to_string(),
            input: input.to_string(),
            reason,
        }
    }
}

fn apply_shift(value: &BigDecimal, shift: Shift) -> BigDecimal {
    match shift.construction_exponent() {
        0 => value.clone(),
        exp => value * pow10(exp),
    }
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.symbol() == other.symbol() && self.is_ratio() == other.is_ratio()
    }
}

impl Eq for Unit {}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
