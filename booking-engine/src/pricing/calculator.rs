//! Price Calculator
//!
//! Pure derivation of per-person and total prices from a selection.
//! Uses rust_decimal for precise calculations, stores as f64.

use rust_decimal::prelude::*;
use serde::Serialize;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Derived prices for one booking
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct Totals {
    /// Sum of selected unit prices plus any per-person cover charge
    pub per_person: f64,
    /// per_person * guest_count
    pub total: f64,
}

/// Compute per-person and total prices
///
/// `cover_charge` is the per-person surcharge resolved from the booking
/// kind (zero for kinds without one). An empty selection yields the
/// cover charge alone. Totals are linear in the guest count: the
/// per-person price is rounded once, then multiplied by the (integer)
/// guest count.
pub fn compute_totals(unit_prices: &[f64], guest_count: i32, cover_charge: f64) -> Totals {
    let mut per_person = to_decimal(cover_charge);
    for price in unit_prices {
        per_person += to_decimal(*price);
    }
    let per_person =
        per_person.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);

    let guests = Decimal::from(guest_count.max(0));
    Totals {
        per_person: to_f64(per_person),
        total: to_f64(per_person * guests),
    }
}
