// ============================================================================
// Currency Engine Library
// Unit-safe arbitrary-precision arithmetic with automatic ratio units
// ============================================================================

//! # Currency Engine
//!
//! A unit-safe arithmetic engine over arbitrary-precision decimals: every
//! value is tagged with a nominal currency (or measurement) unit, and
//! operations between incompatible units are rejected unless they form a
//! well-defined ratio.
//!
//! ## Features
//!
//! - **Nominal unit tagging** — `USD` and `DAI` amounts cannot be mixed by
//!   accident, even though both are plain decimals underneath
//! - **Automatic ratio units** — dividing `USD` by `DAI` yields a `USD/DAI`
//!   quantity that cancels back against either side
//! - **Shift presets** — `wei` (10^-18), `ray` (10^-27), and `rad` (10^-45)
//!   encodings normalize smallest-denomination integers at construction
//! - **Round-down extraction** — rendered amounts never exceed the true value
//! - **Registry resolution** — free-form `(amount, symbol)` input resolves to
//!   typed quantities through a caller-supplied registry
//!
//! ## Example
//!
//! ```rust
//! use currency_engine::prelude::*;
//!
//! let usd = Unit::base("USD");
//! let dai = Unit::base("DAI");
//!
//! // Same-unit arithmetic just works
//! let total = usd.of("1.5").unwrap().add(usd.of("2.5").unwrap()).unwrap();
//! assert_eq!(total.to_string(), "4.00 USD");
//!
//! // Mixing units is an error...
//! assert!(usd.of(1i64).unwrap().add(dai.of(1i64).unwrap()).is_err());
//!
//! // ...unless division forms a ratio, which cancels back
//! let price = usd.of(6i64).unwrap().div(dai.of(2i64).unwrap()).unwrap();
//! assert_eq!(price.symbol(), "USD/DAI");
//! let paid = dai.of(2i64).unwrap().mul(&price).unwrap();
//! assert_eq!(paid.to_string(), "6.00 USD");
//!
//! // Resolve free-form input through a registry
//! let resolver = Resolver::new(CurrencyRegistry::with_units([usd, dai]));
//! let q = resolver.resolve("42", Some(UnitRef::Symbol("usd"))).unwrap();
//! assert_eq!(q.symbol(), "USD");
//! ```

pub mod domain;
pub mod engine;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Quantity, RawAmount, Unit};
    pub use crate::engine::{
        ArithOp, CompareOp, CurrencyRegistry, Operand, ResolveSource, Resolver, UnitRef,
    };
    pub use crate::numeric::{CurrencyError, CurrencyResult, Shift};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use bigdecimal::BigDecimal;

    #[test]
    fn test_end_to_end_ratio_flow() {
        let usd = Unit::base("USD");
        let dai = Unit::base("DAI");
        let resolver = Resolver::new(CurrencyRegistry::with_units([usd.clone(), dai.clone()]));

        // Resolve free-form input to typed quantities
        let collateral = resolver.resolve("6", Some(UnitRef::Symbol("USD"))).unwrap();
        let debt = resolver.resolve("2", Some(UnitRef::Symbol("DAI"))).unwrap();

        // Cross-unit division forms the price ratio
        let price = collateral.div(&debt).unwrap();
        assert_eq!(price.symbol(), "USD/DAI");
        assert_eq!(price.to_big_decimal(), BigDecimal::from(3));

        // Cancel both ways
        assert!(debt.mul(&price).unwrap().is_equal(&collateral));
        assert!(collateral.div(&price).unwrap().is_equal(&debt));

        // The ratio refuses everything else
        assert!(collateral.add(&price).is_err());
        assert!(collateral.lt(&price).is_err());
    }

    #[test]
    fn test_end_to_end_wei_accounting() {
        let eth = Unit::base("ETH");

        // 1.5 ETH deposited as wei, 0.7 ETH withdrawn
        let deposited = eth.wei("1500000000000000000").unwrap();
        let withdrawn = eth.of("0.7").unwrap();
        let balance = deposited.sub(&withdrawn).unwrap();

        assert_eq!(balance.to_string(), "0.80 ETH");
        // Extraction rounds down, never overstating the spendable amount
        assert_eq!(balance.to_fixed(Shift::Wei), "800000000000000000");
    }

    #[test]
    fn test_error_taxonomy_surfaces() {
        let usd = Unit::base("USD");
        let resolver = Resolver::new(CurrencyRegistry::with_units([usd.clone()]));

        assert!(matches!(
            usd.of(-1i64),
            Err(CurrencyError::Construction { .. })
        ));
        assert!(matches!(
            resolver.resolve(1i64, None),
            Err(CurrencyError::MissingUnit)
        ));
        assert!(matches!(
            resolver.resolve(1i64, Some(UnitRef::Symbol("BTC"))),
            Err(CurrencyError::UnknownCurrency(_))
        ));
        assert!(matches!(
            usd.of(1i64).unwrap().div(0i64),
            Err(CurrencyError::DivisionByZero)
        ));
    }
}
