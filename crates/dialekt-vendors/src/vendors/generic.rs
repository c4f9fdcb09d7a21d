//! Generic fallback variant.
//!
//! Used when no registered vendor matches: base capabilities, the
//! near-ANSI type mapping, and a plain `jdbc:` URL shape.

use crate::dialect::Dialect;
use dialekt_core::{AccessType, DatabaseCapabilities};

/// Catch-all variant for unrecognized products.
#[derive(Debug)]
pub struct Generic {
    access: AccessType,
    caps: DatabaseCapabilities,
}

impl Generic {
    pub fn new(access: AccessType) -> Self {
        Self {
            access,
            caps: DatabaseCapabilities::default(),
        }
    }
}

impl Dialect for Generic {
    fn vendor_id(&self) -> &'static str {
        "generic"
    }

    fn vendor_name(&self) -> &'static str {
        "Generic database"
    }

    fn access_type(&self) -> AccessType {
        self.access
    }

    fn caps(&self) -> &DatabaseCapabilities {
        &self.caps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialekt_core::ColumnMeta;

    #[test]
    fn test_base_mapping_applies() {
        let d = Generic::new(AccessType::Native);
        let def = d.field_definition(&ColumnMeta::boolean("FLAG"), "", "", false, false, false);
        assert_eq!(def, "CHAR(1)");
        let def = d.field_definition(&ColumnMeta::string("NAME", 40), "", "", false, true, false);
        assert_eq!(def, "NAME VARCHAR(40)");
    }

    #[test]
    fn test_unsupported_kind_is_marked() {
        let d = Generic::new(AccessType::Native);
        let def = d.field_definition(
            &ColumnMeta::new("X", dialekt_core::ValueKind::Unsupported, -1, -1),
            "",
            "",
            false,
            false,
            false,
        );
        assert_eq!(def, " UNKNOWN");
    }

    #[test]
    fn test_generic_url() {
        let d = Generic::new(AccessType::Native);
        assert_eq!(
            d.url("db.example.com", "1234", "mydb").unwrap(),
            "jdbc:generic://db.example.com:1234/mydb"
        );
        assert_eq!(
            d.url("db.example.com", "", "mydb").unwrap(),
            "jdbc:generic://db.example.com/mydb"
        );
    }

    #[test]
    fn test_odbc_and_jndi_shapes() {
        let d = Generic::new(AccessType::Odbc);
        assert_eq!(d.url("h", "1", "dsn").unwrap(), "jdbc:odbc:dsn");
        let d = Generic::new(AccessType::Jndi);
        assert_eq!(d.url("h", "1", "ds/name").unwrap(), "ds/name");
    }
}
