//! Display formatting helpers.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a price for display: whole amounts render without decimals
/// (`$450`), fractional amounts with two (`$449.99`).
#[must_use]
pub fn price_label(price: f64) -> String {
    if (price - price.trunc()).abs() < f64::EPSILON {
        format!("${price:.0}")
    } else {
        format!("${price:.2}")
    }
}

/// Quantity × unit price line total.
#[must_use]
pub fn line_total(price: f64, quantity: u32) -> f64 {
    price * f64::from(quantity)
}
