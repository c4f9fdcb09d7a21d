//! Per-vendor capability descriptors.
//!
//! A [`DatabaseCapabilities`] value is the immutable record of feature
//! flags and limits for one vendor variant. Variants construct one at
//! startup by overriding the handful of fields that differ from
//! [`DatabaseCapabilities::default`], which documents the base behavior
//! every abstract query falls back to.

use serde::{Deserialize, Serialize};

/// Length above which a String column maps to a large-object type instead
/// of a bounded VARCHAR, unless the vendor declares a tighter limit.
pub const CLOB_LENGTH: i32 = 9_999_999;

/// Connection mode, orthogonal to the vendor variant.
///
/// Affects driver-class resolution and URL shape, not SQL generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessType {
    /// Vendor-native JDBC-style driver.
    #[default]
    Native,
    /// Generic ODBC bridge.
    Odbc,
    /// Container-managed datasource looked up by name.
    Jndi,
    /// Oracle Call Interface (Oracle only).
    Oci,
}

impl AccessType {
    /// Short code used in connection definitions.
    pub const fn as_code(self) -> &'static str {
        match self {
            AccessType::Native => "NATIVE",
            AccessType::Odbc => "ODBC",
            AccessType::Jndi => "JNDI",
            AccessType::Oci => "OCI",
        }
    }

    /// Parse an access type from a code (case-insensitive).
    ///
    /// Returns `None` if the string is not a recognized code.
    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "NATIVE" => Some(AccessType::Native),
            "ODBC" => Some(AccessType::Odbc),
            "JNDI" => Some(AccessType::Jndi),
            "OCI" => Some(AccessType::Oci),
            _ => None,
        }
    }
}

impl std::fmt::Display for AccessType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Immutable feature-flag record for one vendor variant.
///
/// Unset fields fall back to the documented defaults of the base
/// descriptor ([`DatabaseCapabilities::default`]); a variant overrides
/// only what differs, via struct-update syntax. Pure data, no behavior.
/// Serializable so connection definitions can be exported; built only in
/// code, so there is no deserialize half.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseCapabilities {
    /// Default TCP port; `-1` means the vendor has no network port
    /// (embedded engines, file databases).
    pub default_port: i32,
    /// JDBC driver class for native access. Part of the connection
    /// contract, irrelevant to SQL generation.
    pub driver_class: &'static str,
    /// Longest length a bounded VARCHAR may declare before the String
    /// mapping falls through to the large-object branch.
    pub max_varchar_length: i32,
    /// Length at or above which a String column is considered a CLOB
    /// regardless of `max_varchar_length`.
    pub clob_threshold: i32,
    /// Opening quote for identifiers.
    pub quote_start: &'static str,
    /// Closing quote for identifiers.
    pub quote_end: &'static str,
    /// Vendor reserved words, ordered as the vendor documents them.
    pub reserved_words: &'static [&'static str],
    /// Sequences exist as first-class schema objects.
    pub supports_sequences: bool,
    /// Sequences accept a NOMAXVALUE/NO MAXVALUE option.
    pub supports_sequence_no_max_option: bool,
    /// Identity / auto-increment column syntax exists.
    pub supports_auto_increment: bool,
    /// A native BOOLEAN/BIT column type exists.
    pub supports_boolean_type: bool,
    /// A native TIMESTAMP column type exists (distinct from DATE).
    pub supports_timestamp_type: bool,
    /// Batched statement execution is reliable.
    pub supports_batch_updates: bool,
    /// Synonyms/aliases over tables exist.
    pub supports_synonyms: bool,
    /// Views exist.
    pub supports_views: bool,
    /// The catalog namespace level exists.
    pub supports_catalogs: bool,
    /// The schema namespace level exists.
    pub supports_schemas: bool,
    /// Transactions exist (false for pure analytic append stores).
    pub supports_transactions: bool,
    /// BLOB columns can be read through the standard LOB accessor.
    pub supports_get_blob: bool,
    /// 64-bit integers bind without truncation.
    pub supports_set_long: bool,
    /// Bitmap indexes exist.
    pub supports_bitmap_index: bool,
    /// Prepared statements expose result metadata before execution.
    pub supports_prepared_statement_metadata: bool,
    /// Separator between appended URL options.
    pub extra_option_separator: &'static str,
    /// Indicator that starts the URL option section.
    pub extra_option_indicator: &'static str,
    /// Metadata type names that denote plain tables.
    pub table_types: &'static [&'static str],
    /// Metadata type names that denote views.
    pub view_types: &'static [&'static str],
    /// Metadata type names that denote synonyms.
    pub synonym_types: &'static [&'static str],
}

impl Default for DatabaseCapabilities {
    /// The base descriptor. Every flag a vendor leaves untouched resolves
    /// to these values.
    fn default() -> Self {
        Self {
            default_port: -1,
            driver_class: "",
            max_varchar_length: CLOB_LENGTH,
            clob_threshold: CLOB_LENGTH,
            quote_start: "\"",
            quote_end: "\"",
            reserved_words: &[],
            supports_sequences: false,
            supports_sequence_no_max_option: false,
            supports_auto_increment: false,
            supports_boolean_type: false,
            supports_timestamp_type: true,
            supports_batch_updates: true,
            supports_synonyms: false,
            supports_views: true,
            supports_catalogs: true,
            supports_schemas: true,
            supports_transactions: true,
            supports_get_blob: true,
            supports_set_long: true,
            supports_bitmap_index: false,
            supports_prepared_statement_metadata: true,
            extra_option_separator: ";",
            extra_option_indicator: ";",
            table_types: &["TABLE"],
            view_types: &["VIEW"],
            synonym_types: &[],
        }
    }
}

impl DatabaseCapabilities {
    /// Whether `word` matches a reserved word, using the vendor's
    /// case-insensitive catalog convention.
    pub fn is_reserved_word(&self, word: &str) -> bool {
        self.reserved_words
            .iter()
            .any(|w| w.eq_ignore_ascii_case(word))
    }

    /// Whether this vendor declares a real default port.
    pub const fn has_default_port(&self) -> bool {
        self.default_port > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_defaults() {
        let caps = DatabaseCapabilities::default();
        assert_eq!(caps.default_port, -1);
        assert!(!caps.has_default_port());
        assert_eq!(caps.quote_start, "\"");
        assert_eq!(caps.quote_end, "\"");
        assert_eq!(caps.max_varchar_length, CLOB_LENGTH);
        assert!(caps.supports_transactions);
        assert!(!caps.supports_sequences);
        assert!(!caps.supports_boolean_type);
        assert_eq!(caps.table_types, &["TABLE"]);
    }

    #[test]
    fn test_struct_update_override() {
        let caps = DatabaseCapabilities {
            default_port: 5432,
            supports_sequences: true,
            ..Default::default()
        };
        assert_eq!(caps.default_port, 5432);
        assert!(caps.has_default_port());
        assert!(caps.supports_sequences);
        // untouched flags keep base values
        assert!(caps.supports_transactions);
    }

    #[test]
    fn test_reserved_word_case_insensitive() {
        let caps = DatabaseCapabilities {
            reserved_words: &["SELECT", "FROM"],
            ..Default::default()
        };
        assert!(caps.is_reserved_word("select"));
        assert!(caps.is_reserved_word("FROM"));
        assert!(!caps.is_reserved_word("frombulate"));
    }

    #[test]
    fn test_access_type_codes() {
        assert_eq!(AccessType::Native.as_code(), "NATIVE");
        assert_eq!(AccessType::from_code("oci"), Some(AccessType::Oci));
        assert_eq!(AccessType::from_code("JNDI"), Some(AccessType::Jndi));
        assert_eq!(AccessType::from_code("bogus"), None);
        assert_eq!(AccessType::Odbc.to_string(), "ODBC");
    }

    #[test]
    fn test_capabilities_serialize() {
        let caps = DatabaseCapabilities {
            default_port: 1521,
            supports_sequences: true,
            ..Default::default()
        };
        let json = serde_json::to_value(&caps).unwrap();
        assert_eq!(json["default_port"], 1521);
        assert_eq!(json["supports_sequences"], true);
        assert_eq!(json["quote_start"], "\"");
    }
}
