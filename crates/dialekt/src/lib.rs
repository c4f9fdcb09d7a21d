//! Vendor SQL dialect abstraction.
//!
//! Given an abstract column description, a table name, and a vendor's
//! capability descriptor, `dialekt` produces the SQL that vendor actually
//! accepts: column definitions, ALTER/CREATE/TRUNCATE/DROP statements,
//! quoted identifiers, connection URLs, and the catalog queries for
//! sequences, tables, columns and indexes.
//!
//! # Quick Start
//!
//! ```
//! use dialekt::{AccessType, ColumnMeta, create_dialect};
//!
//! let dialect = create_dialect("postgres", AccessType::Native).unwrap();
//!
//! let ddl = dialect.add_column_statement(
//!     "customers",
//!     &ColumnMeta::string("email", 254),
//!     "id",
//!     false,
//!     "id",
//! );
//! assert_eq!(ddl, "ALTER TABLE customers ADD COLUMN email VARCHAR(254)");
//!
//! let url = dialect.url("db.example.com", "5432", "crm").unwrap();
//! assert_eq!(url, "jdbc:postgresql://db.example.com:5432/crm");
//! ```
//!
//! # Contract
//!
//! Everything except [`check_index_exists`] is a pure string builder:
//! no connections, no retries, no logging in place of a return value.
//! Operations a vendor does not support return `None`: feature absent,
//! not failure. Hard errors are reserved for genuinely unconstructable
//! outputs (an OCI URL with nothing to connect to, an unknown vendor id).

pub use dialekt_core::{
    AccessType, CLOB_LENGTH, ColumnMeta, Cx, DatabaseCapabilities, Error, Outcome, QueryExecutor,
    Result, Row, Value, ValueKind,
};
pub use dialekt_vendors::{
    CR, Dialect, ODBC_BRIDGE_DRIVER, check_index_exists, create_dialect, vendor_ids, vendors,
};
