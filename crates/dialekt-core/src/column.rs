//! Semantic column descriptors.
//!
//! A [`ColumnMeta`] describes a column abstractly (kind, declared length,
//! declared precision) without committing to any vendor's type grammar.
//! Vendors map it to concrete SQL via their `field_definition`.
//!
//! Length and precision use `-1` as the documented "unspecified" sentinel,
//! checked explicitly at every branch point; `0` is a meaningful value
//! (zero-scale numbers), never a stand-in for "unset".

use serde::{Deserialize, Serialize};

/// The semantic kind of a column value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Character data of any length.
    String,
    /// Whole numbers (64-bit signed).
    Integer,
    /// Fixed or floating point numbers with optional precision.
    Number,
    /// Arbitrary-precision decimals.
    BigNumber,
    /// True/false.
    Boolean,
    /// Calendar date (with or without time, per vendor).
    Date,
    /// Date-time with sub-second precision where the vendor has one.
    Timestamp,
    /// Raw bytes.
    Binary,
    /// IPv4/IPv6 address; only a handful of vendors represent it natively.
    Internet,
    /// A kind this layer cannot describe; maps to the `" UNKNOWN"`
    /// malformed-SQL marker everywhere.
    Unsupported,
}

impl ValueKind {
    /// Whether this kind is one of the numeric family.
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            ValueKind::Integer | ValueKind::Number | ValueKind::BigNumber
        )
    }
}

/// Abstract description of one column: the input to type mapping.
///
/// Created per call by the caller; immutable; never persisted by this
/// layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMeta {
    /// Column name, unquoted.
    pub name: String,
    /// Semantic kind.
    pub kind: ValueKind,
    /// Declared length, `-1` when unspecified.
    pub length: i32,
    /// Declared precision, `-1` when unspecified.
    pub precision: i32,
}

impl ColumnMeta {
    /// Create a column descriptor with explicit length and precision.
    pub fn new(name: impl Into<String>, kind: ValueKind, length: i32, precision: i32) -> Self {
        Self {
            name: name.into(),
            kind,
            length,
            precision,
        }
    }

    /// String column of the given length (`-1` = unbounded).
    pub fn string(name: impl Into<String>, length: i32) -> Self {
        Self::new(name, ValueKind::String, length, -1)
    }

    /// Integer column with unspecified length.
    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, ValueKind::Integer, -1, 0)
    }

    /// Integer column sized by digit count.
    pub fn integer_sized(name: impl Into<String>, length: i32) -> Self {
        Self::new(name, ValueKind::Integer, length, 0)
    }

    /// Number column with length (total digits) and precision (fractional
    /// digits).
    pub fn number(name: impl Into<String>, length: i32, precision: i32) -> Self {
        Self::new(name, ValueKind::Number, length, precision)
    }

    /// Arbitrary-precision number column.
    pub fn big_number(name: impl Into<String>, length: i32, precision: i32) -> Self {
        Self::new(name, ValueKind::BigNumber, length, precision)
    }

    /// Boolean column.
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, ValueKind::Boolean, -1, -1)
    }

    /// Date column.
    pub fn date(name: impl Into<String>) -> Self {
        Self::new(name, ValueKind::Date, -1, -1)
    }

    /// Timestamp column.
    pub fn timestamp(name: impl Into<String>) -> Self {
        Self::new(name, ValueKind::Timestamp, -1, -1)
    }

    /// Binary column of the given length (`-1` = unbounded).
    pub fn binary(name: impl Into<String>, length: i32) -> Self {
        Self::new(name, ValueKind::Binary, length, -1)
    }

    /// Internet-address column.
    pub fn internet(name: impl Into<String>) -> Self {
        Self::new(name, ValueKind::Internet, -1, -1)
    }

    /// Whether a usable (non-sentinel, non-zero) length was declared.
    pub const fn has_length(&self) -> bool {
        self.length > 0
    }

    /// Whether a usable precision was declared (`0` counts: zero-scale
    /// numbers are integers).
    pub const fn has_precision(&self) -> bool {
        self.precision >= 0
    }

    /// Whether this column is the table key or primary key named by the
    /// caller (case-insensitive, matching catalog behavior).
    pub fn is_key_of(&self, table_key: &str, primary_key: &str) -> bool {
        self.name.eq_ignore_ascii_case(table_key) || self.name.eq_ignore_ascii_case(primary_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_sentinels() {
        let c = ColumnMeta::integer("ID");
        assert_eq!(c.kind, ValueKind::Integer);
        assert_eq!(c.length, -1);
        assert_eq!(c.precision, 0);
        assert!(!c.has_length());
        assert!(c.has_precision());

        let c = ColumnMeta::boolean("FLAG");
        assert_eq!(c.precision, -1);
        assert!(!c.has_precision());
    }

    #[test]
    fn test_key_match_is_case_insensitive() {
        let c = ColumnMeta::integer("Id");
        assert!(c.is_key_of("ID", ""));
        assert!(c.is_key_of("", "id"));
        assert!(!c.is_key_of("KEY", "PK"));
    }

    #[test]
    fn test_numeric_family() {
        assert!(ValueKind::Integer.is_numeric());
        assert!(ValueKind::BigNumber.is_numeric());
        assert!(!ValueKind::Date.is_numeric());
    }

    #[test]
    fn test_serde_round_trip() {
        let c = ColumnMeta::number("PRICE", 10, 2);
        let json = serde_json::to_string(&c).unwrap();
        let back: ColumnMeta = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
