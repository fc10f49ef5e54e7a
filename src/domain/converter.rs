//! Converters: ordered raw strings into one typed value.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::domain::error::ConversionError;
use crate::domain::{Value, ValueKind};

/// Parses the raw values of one option into a single typed value.
pub trait Converter: Send + Sync {
    /// The kind every successful conversion produces.
    fn kind(&self) -> ValueKind;

    fn convert(&self, values: &[String]) -> Result<Value, ConversionError>;
}

/// Strictly single-valued converter for scalar kinds.
///
/// Parsing is locale-invariant: `.` is the decimal point, booleans accept
/// `true`/`false` in any case, numbers allow only digits, a leading sign and
/// (for fractional kinds) `.`. Digit separators are rejected for every kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimitiveConverter {
    kind: ValueKind,
}

impl PrimitiveConverter {
    pub fn new(kind: ValueKind) -> Self {
        Self { kind }
    }

    fn parse(&self, raw: &str) -> Result<Value, ConversionError> {
        let value = match self.kind {
            ValueKind::Bool => Value::Bool(parse_bool(raw).ok_or_else(|| {
                self.failed(raw, "expected 'true' or 'false'".to_string())
            })?),
            ValueKind::Char => {
                let mut chars = raw.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Value::Char(c),
                    _ => return Err(self.failed(raw, "expected exactly one character".into())),
                }
            }
            ValueKind::I8 => Value::I8(self.parse_from(raw)?),
            ValueKind::I16 => Value::I16(self.parse_from(raw)?),
            ValueKind::I32 => Value::I32(self.parse_from(raw)?),
            ValueKind::I64 => Value::I64(self.parse_from(raw)?),
            ValueKind::I128 => Value::I128(self.parse_from(raw)?),
            ValueKind::Isize => Value::Isize(self.parse_from(raw)?),
            ValueKind::U8 => Value::U8(self.parse_from(raw)?),
            ValueKind::U16 => Value::U16(self.parse_from(raw)?),
            ValueKind::U32 => Value::U32(self.parse_from(raw)?),
            ValueKind::U64 => Value::U64(self.parse_from(raw)?),
            ValueKind::U128 => Value::U128(self.parse_from(raw)?),
            ValueKind::Usize => Value::Usize(self.parse_from(raw)?),
            ValueKind::F32 => Value::F32(self.parse_from(raw)?),
            ValueKind::F64 => Value::F64(self.parse_from(raw)?),
            ValueKind::Decimal => {
                // rust_decimal accepts `_` as a digit separator
                if raw.contains('_') {
                    return Err(self.failed(raw, "digit separators are not allowed".into()));
                }
                Value::Decimal(self.parse_from::<Decimal>(raw)?)
            }
            ValueKind::Text => {
                return Err(self.failed(raw, "text is not a primitive kind".into()));
            }
        };
        Ok(value)
    }

    fn parse_from<T>(&self, raw: &str) -> Result<T, ConversionError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        raw.parse::<T>().map_err(|e| self.failed(raw, e.to_string()))
    }

    fn failed(&self, raw: &str, message: String) -> ConversionError {
        ConversionError::ConversionFailed {
            raw: raw.to_string(),
            kind: self.kind,
            message,
        }
    }
}

impl Converter for PrimitiveConverter {
    fn kind(&self) -> ValueKind {
        self.kind
    }

    fn convert(&self, values: &[String]) -> Result<Value, ConversionError> {
        match values {
            [] => Err(ConversionError::MissingValue(self.kind)),
            [raw] => self.parse(raw),
            _ => Err(ConversionError::MultipleValuesNotAllowed(self.kind)),
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Single-valued converter that keeps the raw string as is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextConverter;

impl Converter for TextConverter {
    fn kind(&self) -> ValueKind {
        ValueKind::Text
    }

    fn convert(&self, values: &[String]) -> Result<Value, ConversionError> {
        match values {
            [] => Err(ConversionError::MissingValue(ValueKind::Text)),
            [raw] => Ok(Value::Text(raw.clone())),
            _ => Err(ConversionError::MultipleValuesNotAllowed(ValueKind::Text)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn given_empty_values_when_converting_then_missing_value() {
        let converter = PrimitiveConverter::new(ValueKind::I32);
        assert_eq!(
            converter.convert(&[]),
            Err(ConversionError::MissingValue(ValueKind::I32))
        );
    }

    #[test]
    fn given_two_chars_when_converting_char_then_fails() {
        let converter = PrimitiveConverter::new(ValueKind::Char);
        assert!(matches!(
            converter.convert(&strings(&["ab"])),
            Err(ConversionError::ConversionFailed { .. })
        ));
        assert_eq!(converter.convert(&strings(&["a"])), Ok(Value::Char('a')));
    }

    #[test]
    fn given_text_converter_when_two_values_then_rejected() {
        assert_eq!(
            TextConverter.convert(&strings(&["a", "b"])),
            Err(ConversionError::MultipleValuesNotAllowed(ValueKind::Text))
        );
    }
}
