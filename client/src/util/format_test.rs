use super::*;

#[test]
fn whole_prices_have_no_decimals() {
    assert_eq!(price_label(450.0), "$450");
    assert_eq!(price_label(0.0), "$0");
}

#[test]
fn fractional_prices_have_two_decimals() {
    assert_eq!(price_label(449.99), "$449.99");
    assert_eq!(price_label(120.5), "$120.50");
}

#[test]
fn line_total_multiplies() {
    assert!((line_total(100.0, 3) - 300.0).abs() < f64::EPSILON);
    assert!((line_total(449.99, 2) - 899.98).abs() < f64::EPSILON);
}
