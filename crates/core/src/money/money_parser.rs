use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

use crate::constants::CURRENCY_GLYPHS;
use crate::errors::AmountParseError;

/// Parses a price or quantity that may arrive as a JSON number or as text.
///
/// Numbers pass through unchanged. Text has whitespace, `,` separators and
/// currency glyphs removed, then is read as an integer, falling back to a
/// decimal and finally to scientific notation. Any other JSON type is
/// rejected; the caller decides whether to abort or substitute a default.
pub fn parse_amount(value: &Value) -> Result<Decimal, AmountParseError> {
    match value {
        Value::Number(n) => parse_number_literal(&n.to_string()),
        Value::String(s) => parse_amount_str(s),
        Value::Null => Err(AmountParseError::UnsupportedType("null".to_string())),
        Value::Bool(_) => Err(AmountParseError::UnsupportedType("bool".to_string())),
        Value::Array(_) => Err(AmountParseError::UnsupportedType("array".to_string())),
        Value::Object(_) => Err(AmountParseError::UnsupportedType("object".to_string())),
    }
}

/// Parses a textual amount such as `"1,234,000₩"` or `"$ 1,500.50"`.
pub fn parse_amount_str(raw: &str) -> Result<Decimal, AmountParseError> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',' && !CURRENCY_GLYPHS.contains(c))
        .collect();

    if cleaned.is_empty() {
        return Err(AmountParseError::Empty);
    }

    if let Ok(whole) = cleaned.parse::<i64>() {
        return Ok(Decimal::from(whole));
    }

    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .map_err(|_| AmountParseError::Unparsable(raw.to_string()))
}

fn parse_number_literal(literal: &str) -> Result<Decimal, AmountParseError> {
    Decimal::from_str(literal)
        .or_else(|_| Decimal::from_scientific(literal))
        .map_err(|_| AmountParseError::Unparsable(literal.to_string()))
}

/// Serde adapter for decimal fields that accept numbers or formatted amount strings.
pub mod amount_format {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        super::parse_amount(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_won_amount_with_separators() {
        assert_eq!(parse_amount(&json!("1,234,000₩")), Ok(dec!(1234000)));
    }

    #[test]
    fn test_numeric_value_passes_through() {
        assert_eq!(parse_amount(&json!(1500.5)), Ok(dec!(1500.5)));
        assert_eq!(parse_amount(&json!(42)), Ok(dec!(42)));
    }

    #[test]
    fn test_letters_are_a_parse_failure() {
        assert_eq!(
            parse_amount(&json!("abc")),
            Err(AmountParseError::Unparsable("abc".to_string()))
        );
    }

    #[test]
    fn test_decimal_text_falls_back_from_integer_parse() {
        assert_eq!(parse_amount_str("$ 1,500.25"), Ok(dec!(1500.25)));
        assert_eq!(parse_amount_str("0.1"), Ok(dec!(0.1)));
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(parse_amount_str("1.5e3"), Ok(dec!(1500)));
        assert_eq!(parse_amount(&json!(2.5e-3)), Ok(dec!(0.0025)));
    }

    #[test]
    fn test_korean_won_suffix_and_negative() {
        assert_eq!(parse_amount_str("50,000원"), Ok(dec!(50000)));
        assert_eq!(parse_amount_str("-3,000"), Ok(dec!(-3000)));
    }

    #[test]
    fn test_blank_text_is_empty_not_zero() {
        assert_eq!(parse_amount_str("   "), Err(AmountParseError::Empty));
        assert_eq!(parse_amount_str("₩"), Err(AmountParseError::Empty));
    }

    #[test]
    fn test_non_amount_types_are_rejected() {
        assert!(matches!(
            parse_amount(&Value::Null),
            Err(AmountParseError::UnsupportedType(_))
        ));
        assert!(matches!(
            parse_amount(&json!(true)),
            Err(AmountParseError::UnsupportedType(_))
        ));
        assert!(matches!(
            parse_amount(&json!([1, 2])),
            Err(AmountParseError::UnsupportedType(_))
        ));
    }

    #[test]
    fn test_amount_format_deserializes_both_shapes() {
        #[derive(serde::Deserialize)]
        struct Row {
            #[serde(with = "amount_format")]
            price: Decimal,
        }

        let from_text: Row = serde_json::from_str(r#"{"price": "60,000,000₩"}"#).unwrap();
        let from_number: Row = serde_json::from_str(r#"{"price": 0.1}"#).unwrap();
        assert_eq!(from_text.price, dec!(60000000));
        assert_eq!(from_number.price, dec!(0.1));

        let bad = serde_json::from_str::<Row>(r#"{"price": "lots"}"#);
        assert!(bad.is_err());
    }
}
