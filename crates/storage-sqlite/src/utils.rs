use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a stored decimal string, tolerating scientific notation by falling
/// back to an f64 parse. Malformed values log an error and read as zero
/// rather than poisoning a whole query.
pub(crate) fn parse_decimal(value_str: &str, field_name: &str) -> Decimal {
    match Decimal::from_str(value_str) {
        Ok(d) => d,
        Err(e_decimal) => match f64::from_str(value_str).ok().and_then(Decimal::from_f64) {
            Some(dec_val) => dec_val,
            None => {
                log::error!(
                    "Failed to parse {} '{}' as Decimal ({}). Falling back to ZERO.",
                    field_name,
                    value_str,
                    e_decimal
                );
                Decimal::ZERO
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::parse_decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parses_plain_decimal() {
        assert_eq!(parse_decimal("0.00000001", "quantity"), dec!(0.00000001));
    }

    #[test]
    fn test_parses_scientific_notation() {
        assert_eq!(parse_decimal("1e-8", "quantity"), dec!(0.00000001));
    }

    #[test]
    fn test_malformed_value_reads_as_zero() {
        assert_eq!(parse_decimal("garbage", "quantity"), dec!(0));
    }
}
