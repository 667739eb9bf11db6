// ============================================================================
// Currency Registry and Resolver
// Maps free-form input (raw amount + unit reference) to typed quantities
// ============================================================================

use crate::domain::{Quantity, RawAmount, Unit};
use crate::numeric::{CurrencyError, CurrencyResult, Shift};
use bigdecimal::BigDecimal;
use std::collections::HashMap;

// ============================================================================
// Registry
// ============================================================================

/// Lookup table from case-normalized symbol to unit.
///
/// Populated during setup and treated as read-only afterwards; the resolver
/// only reads it. Keys are upper-cased, so lookups are case-insensitive.
#[derive(Debug, Default, Clone)]
pub struct CurrencyRegistry {
    units: HashMap<String, Unit>,
}

impl CurrencyRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with `units`.
    pub fn with_units(units: impl IntoIterator<Item = Unit>) -> Self {
        let mut registry = Self::new();
        for unit in units {
            registry.register(unit);
        }
        registry
    }

    /// Register a unit under its upper-cased symbol.
    ///
    /// Re-registering a symbol replaces the previous entry.
    pub fn register(&mut self, unit: Unit) {
        self.units.insert(unit.symbol().to_uppercase(), unit);
    }

    /// Look up a unit by symbol (case-insensitive).
    pub fn get(&self, symbol: &str) -> Option<&Unit> {
        self.units.get(&symbol.to_uppercase())
    }

    /// Whether a symbol is registered.
    pub fn contains(&self, symbol: &str) -> bool {
        self.units.contains_key(&symbol.to_uppercase())
    }

    /// Number of registered units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl FromIterator<Unit> for CurrencyRegistry {
    fn from_iter<I: IntoIterator<Item = Unit>>(iter: I) -> Self {
        Self::with_units(iter)
    }
}

// ============================================================================
// Unit References
// ============================================================================

/// A reference to a unit at a resolver call site: a bare symbol, a unit
/// handle, or a unit handle carrying a construction shift.
#[derive(Debug, Clone, Copy)]
pub enum UnitRef<'a> {
    /// Look up by symbol string
    Symbol(&'a str),
    /// Look up by the unit's own symbol
    Unit(&'a Unit),
    /// Look up by the unit's symbol and apply `Shift` at construction
    Shifted(&'a Unit, Shift),
}

impl UnitRef<'_> {
    /// The case-normalized registry key.
    fn key(&self) -> String {
        match self {
            UnitRef::Symbol(symbol) => symbol.to_uppercase(),
            UnitRef::Unit(unit) | UnitRef::Shifted(unit, _) => unit.symbol().to_uppercase(),
        }
    }

    /// The shift carried on the reference, if any.
    fn shift(&self) -> Shift {
        match self {
            UnitRef::Shifted(_, shift) => *shift,
            UnitRef::Symbol(_) | UnitRef::Unit(_) => Shift::None,
        }
    }
}

impl<'a> From<&'a str> for UnitRef<'a> {
    fn from(symbol: &'a str) -> Self {
        UnitRef::Symbol(symbol)
    }
}

impl<'a> From<&'a Unit> for UnitRef<'a> {
    fn from(unit: &'a Unit) -> Self {
        UnitRef::Unit(unit)
    }
}

// ============================================================================
// Resolver
// ============================================================================

/// The amount argument of a resolver call: either an already-typed quantity
/// (returned unchanged) or raw input needing a unit reference.
#[derive(Debug, Clone)]
pub enum ResolveSource<'a> {
    /// An existing quantity; resolution is the identity
    Quantity(Quantity),
    /// Raw input to be constructed through a registered unit
    Raw(RawAmount<'a>),
}

impl From<Quantity> for ResolveSource<'_> {
    fn from(q: Quantity) -> Self {
        ResolveSource::Quantity(q)
    }
}

impl From<&Quantity> for ResolveSource<'_> {
    fn from(q: &Quantity) -> Self {
        ResolveSource::Quantity(q.clone())
    }
}

impl<'a> From<&'a str> for ResolveSource<'a> {
    fn from(s: &'a str) -> Self {
        ResolveSource::Raw(RawAmount::from(s))
    }
}

impl From<BigDecimal> for ResolveSource<'_> {
    fn from(d: BigDecimal) -> Self {
        ResolveSource::Raw(RawAmount::from(d))
    }
}

impl From<i64> for ResolveSource<'_> {
    fn from(i: i64) -> Self {
        ResolveSource::Raw(RawAmount::from(i))
    }
}

impl From<u64> for ResolveSource<'_> {
    fn from(u: u64) -> Self {
        ResolveSource::Raw(RawAmount::from(u))
    }
}

impl From<f64> for ResolveSource<'_> {
    fn from(f: f64) -> Self {
        ResolveSource::Raw(RawAmount::from(f))
    }
}

/// Resolves raw amounts plus unit references into typed quantities.
///
/// A convenience layer for external call sites: the registry is supplied by
/// the caller at construction, no implicit global table exists.
#[derive(Debug, Clone)]
pub struct Resolver {
    registry: CurrencyRegistry,
}

impl Resolver {
    /// Create a resolver over a caller-supplied registry.
    pub fn new(registry: CurrencyRegistry) -> Self {
        Resolver { registry }
    }

    /// The underlying registry.
    pub fn registry(&self) -> &CurrencyRegistry {
        &self.registry
    }

    /// Resolve an amount and optional unit reference into a quantity.
    ///
    /// An already-typed quantity is returned unchanged and the reference is
    /// ignored. Raw input requires a reference, whose symbol is looked up
    /// case-insensitively; any shift carried on the reference is passed
    /// through to construction.
    ///
    /// # Errors
    /// [`CurrencyError::MissingUnit`] for raw input with no reference,
    /// [`CurrencyError::UnknownCurrency`] for an unregistered symbol, and
    /// [`CurrencyError::Construction`] for invalid raw input.
    pub fn resolve<'a>(
        &self,
        source: impl Into<ResolveSource<'a>>,
        unit_ref: Option<UnitRef<'_>>,
    ) -> CurrencyResult<Quantity> {
        match source.into() {
            ResolveSource::Quantity(quantity) => Ok(quantity),
            ResolveSource::Raw(raw) => {
                let unit_ref = unit_ref.ok_or(CurrencyError::MissingUnit)?;
                let key = unit_ref.key();
                let unit = self.registry.get(&key).ok_or_else(|| {
                    tracing::debug!(symbol = %key, "unit lookup failed");
                    CurrencyError::UnknownCurrency(key.clone())
                })?;
                unit.of_shifted(raw, unit_ref.shift())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;

    fn resolver() -> Resolver {
        Resolver::new(CurrencyRegistry::with_units([
            Unit::base("USD"),
            Unit::base("DAI"),
            Unit::base("ETH"),
        ]))
    }

    #[test]
    fn test_registry_case_insensitive_lookup() {
        let registry = CurrencyRegistry::with_units([Unit::base("USD")]);
        assert!(registry.contains("usd"));
        assert_eq!(registry.get("Usd").map(Unit::symbol), Some("USD"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registry_reregister_replaces() {
        let mut registry = CurrencyRegistry::new();
        assert!(registry.is_empty());
        registry.register(Unit::base("USD"));
        registry.register(Unit::base("USD"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_resolve_by_symbol() {
        let q = resolver().resolve("1.5", Some(UnitRef::Symbol("usd"))).unwrap();
        assert_eq!(q.symbol(), "USD");
        assert_eq!(q.to_decimal_string(1), "1.5");
    }

    #[test]
    fn test_resolve_by_unit_handle() {
        let r = resolver();
        let dai = Unit::base("DAI");
        let q = r.resolve(100i64, Some(UnitRef::from(&dai))).unwrap();
        assert_eq!(q.symbol(), "DAI");
        assert_eq!(q.to_big_decimal(), BigDecimal::from(100));
    }

    #[test]
    fn test_resolve_passes_through_carried_shift() {
        let r = resolver();
        let eth = Unit::base("ETH");
        let q = r
            .resolve(
                "1000000000000000000",
                Some(UnitRef::Shifted(&eth, Shift::Wei)),
            )
            .unwrap();
        assert_eq!(q.to_big_decimal(), BigDecimal::from(1));
    }

    #[test]
    fn test_resolve_quantity_is_identity() {
        let r = resolver();
        let other = Unit::base("XYZ"); // deliberately unregistered
        let q = other.of(5i64).unwrap();
        // Unit reference is ignored for an existing quantity
        let resolved = r.resolve(&q, Some(UnitRef::Symbol("USD"))).unwrap();
        assert!(resolved.is_equal(&q));
        assert_eq!(resolved.symbol(), "XYZ");
    }

    #[test]
    fn test_resolve_missing_unit() {
        assert_eq!(
            resolver().resolve(1i64, None).unwrap_err(),
            CurrencyError::MissingUnit
        );
    }

    #[test]
    fn test_resolve_unknown_currency() {
        assert_eq!(
            resolver()
                .resolve(1i64, Some(UnitRef::Symbol("btc")))
                .unwrap_err(),
            CurrencyError::UnknownCurrency("BTC".to_string())
        );
    }

    #[test]
    fn test_resolve_invalid_raw_input() {
        assert!(matches!(
            resolver().resolve("abc", Some(UnitRef::Symbol("USD"))),
            Err(CurrencyError::Construction { .. })
        ));
    }
}
