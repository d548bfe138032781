/// Display formatting for CHF amounts and percentages (fr-CH)

use rust_decimal_macros::dec;
use staypricing::core::{format_chf, format_percentage};

#[test]
fn test_format_chf_uses_no_break_space_before_code() {
    assert_eq!(format_chf(dec!(100)), "100.00\u{a0}CHF");
    assert_eq!(format_chf(dec!(178)), "178.00\u{a0}CHF");
    assert_eq!(format_chf(dec!(163.93)), "163.93\u{a0}CHF");
}

#[test]
fn test_format_chf_groups_thousands_with_narrow_space() {
    assert_eq!(format_chf(dec!(1234.56)), "1\u{202f}234.56\u{a0}CHF");
    assert_eq!(format_chf(dec!(999.999)), "1\u{202f}000.00\u{a0}CHF");
    assert_eq!(format_chf(dec!(12345678.9)), "12\u{202f}345\u{202f}678.90\u{a0}CHF");
}

#[test]
fn test_format_chf_rounds_half_up() {
    assert_eq!(format_chf(dec!(0.005)), "0.01\u{a0}CHF");
    assert_eq!(format_chf(dec!(2.345)), "2.35\u{a0}CHF");
    assert_eq!(format_chf(dec!(2.344)), "2.34\u{a0}CHF");
}

#[test]
fn test_format_percentage_uses_decimal_comma() {
    assert_eq!(format_percentage(dec!(0.055)), "5,5\u{202f}%");
    assert_eq!(format_percentage(dec!(0.065)), "6,5\u{202f}%");
    assert_eq!(format_percentage(dec!(0.1)), "10,0\u{202f}%");
    assert_eq!(format_percentage(dec!(0.12345)), "12,3\u{202f}%");
}
