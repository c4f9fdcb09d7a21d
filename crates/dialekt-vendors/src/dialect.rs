//! The `Dialect` trait: one vendor's view of SQL.
//!
//! Default method bodies encode the base-descriptor behavior; a vendor
//! variant overrides only the methods whose output differs. All methods
//! are pure `&self` string builders over immutable inputs; nothing here
//! touches a connection.
//!
//! Unsupported operations return `None` (sequence SQL on a vendor without
//! sequences, lock statements on vendors with transaction-scoped locking).
//! Callers must treat `None` as "feature absent", not as an error.

use dialekt_core::{AccessType, ColumnMeta, DatabaseCapabilities, Error, Result, ValueKind};
use dialekt_core::identifiers::safe_identifier;

/// Line separator appended between concatenated column definitions.
pub const CR: &str = "\n";

/// JDBC-ODBC bridge class used by every vendor under ODBC access.
pub const ODBC_BRIDGE_DRIVER: &str = "sun.jdbc.odbc.JdbcOdbcDriver";

/// One vendor variant: capability descriptor plus the overrides that
/// cannot be expressed as flags.
///
/// Implementations are immutable after construction and safe to share
/// across threads.
pub trait Dialect: Send + Sync {
    /// Stable registry id, e.g. `"postgres"`.
    fn vendor_id(&self) -> &'static str;

    /// Human-readable product name.
    fn vendor_name(&self) -> &'static str;

    /// Connection mode this variant was created for.
    fn access_type(&self) -> AccessType;

    /// The capability descriptor.
    fn caps(&self) -> &DatabaseCapabilities;

    // ==================== Column type mapping ====================

    /// Render the full column definition for `col`.
    ///
    /// `table_key`/`primary_key` name the technical and primary key
    /// columns so identity syntax can be applied when
    /// `use_auto_increment` is set. `add_field_name` prepends the column
    /// name; `add_cr` appends the line separator (used when concatenating
    /// definitions into a CREATE TABLE body).
    fn field_definition(
        &self,
        col: &ColumnMeta,
        table_key: &str,
        primary_key: &str,
        use_auto_increment: bool,
        add_field_name: bool,
        add_cr: bool,
    ) -> String {
        let mut retval = String::new();
        if add_field_name {
            retval.push_str(&col.name);
            retval.push(' ');
        }
        retval.push_str(&self.field_type(col, table_key, primary_key, use_auto_increment));
        if add_cr {
            retval.push_str(CR);
        }
        retval
    }

    /// The bare type clause for `col`, without name or separator.
    ///
    /// The base mapping is close to ANSI; most vendors replace it
    /// wholesale. The `" UNKNOWN"` return (leading space intact) is the
    /// deliberate malformed-SQL marker for kinds the vendor cannot
    /// represent; callers surface it as a warning instead of executing it.
    fn field_type(
        &self,
        col: &ColumnMeta,
        table_key: &str,
        primary_key: &str,
        use_auto_increment: bool,
    ) -> String {
        let caps = self.caps();
        match col.kind {
            ValueKind::Timestamp => {
                if caps.supports_timestamp_type {
                    "TIMESTAMP".to_string()
                } else {
                    "DATE".to_string()
                }
            }
            ValueKind::Date => "DATE".to_string(),
            ValueKind::Boolean => {
                if caps.supports_boolean_type {
                    "BOOLEAN".to_string()
                } else {
                    "CHAR(1)".to_string()
                }
            }
            ValueKind::Integer | ValueKind::Number | ValueKind::BigNumber => {
                // no identity grammar in the base descriptor; keys are
                // plain NOT NULL primary keys whatever use_auto_increment says
                let _ = use_auto_increment;
                if col.is_key_of(table_key, primary_key) {
                    "BIGINT NOT NULL PRIMARY KEY".to_string()
                } else if col.precision == 0 {
                    // integer family, sized by digit count
                    if col.length > 9 {
                        "BIGINT".to_string()
                    } else if col.length > 0 {
                        format!("NUMERIC({})", col.length)
                    } else {
                        "BIGINT".to_string()
                    }
                } else if col.length > 0 && col.precision > 0 {
                    format!("NUMERIC({}, {})", col.length, col.precision)
                } else {
                    "DOUBLE PRECISION".to_string()
                }
            }
            ValueKind::String => {
                if col.length > 0 && col.length < caps.max_varchar_length {
                    format!("VARCHAR({})", col.length)
                } else {
                    "TEXT".to_string()
                }
            }
            ValueKind::Binary => "BLOB".to_string(),
            ValueKind::Internet | ValueKind::Unsupported => " UNKNOWN".to_string(),
        }
    }

    // ==================== DDL statement builders ====================

    /// Statement adding `col` to `table`.
    fn add_column_statement(
        &self,
        table: &str,
        col: &ColumnMeta,
        table_key: &str,
        use_auto_increment: bool,
        primary_key: &str,
    ) -> String {
        let stmt = format!(
            "ALTER TABLE {} ADD {}",
            table,
            self.field_definition(col, table_key, primary_key, use_auto_increment, true, false)
        );
        tracing::trace!(vendor = self.vendor_id(), sql = %stmt, "add column");
        stmt
    }

    /// Statement dropping `col` from `table`.
    fn drop_column_statement(
        &self,
        table: &str,
        col: &ColumnMeta,
        _table_key: &str,
        _use_auto_increment: bool,
        _primary_key: &str,
    ) -> String {
        let stmt = format!("ALTER TABLE {} DROP {}", table, col.name);
        tracing::trace!(vendor = self.vendor_id(), sql = %stmt, "drop column");
        stmt
    }

    /// Statements redefining `col` in place.
    ///
    /// A single MODIFY/ALTER where the grammar has one; vendors that
    /// cannot change a column in place return the full shadow-column
    /// dance (add shadow, copy, drop original, rename shadow). Callers
    /// must execute every returned statement, in order, inside one DDL
    /// transaction.
    fn modify_column_statement(
        &self,
        table: &str,
        col: &ColumnMeta,
        table_key: &str,
        use_auto_increment: bool,
        primary_key: &str,
    ) -> Vec<String> {
        vec![format!(
            "ALTER TABLE {} MODIFY {}",
            table,
            self.field_definition(col, table_key, primary_key, use_auto_increment, true, false)
        )]
    }

    /// The shadow-column rename dance, shared by vendors without an
    /// in-place MODIFY. Add/drop go through the vendor's own templates.
    fn rename_dance(
        &self,
        table: &str,
        col: &ColumnMeta,
        table_key: &str,
        use_auto_increment: bool,
        primary_key: &str,
    ) -> Vec<String> {
        let shadow = ColumnMeta {
            name: format!("{}_DLK", col.name),
            ..col.clone()
        };
        vec![
            self.add_column_statement(table, &shadow, table_key, use_auto_increment, primary_key),
            format!("UPDATE {} SET {} = {}", table, shadow.name, col.name),
            self.drop_column_statement(table, col, table_key, use_auto_increment, primary_key),
            format!("ALTER TABLE {} RENAME {} TO {}", table, shadow.name, col.name),
        ]
    }

    /// Emptying statement for `table`; `DELETE FROM` where the vendor has
    /// no TRUNCATE.
    fn truncate_table_statement(&self, table: &str) -> String {
        format!("TRUNCATE TABLE {}", table)
    }

    /// Opening clause of a CREATE TABLE; the caller concatenates column
    /// definitions and the closing parenthesis.
    fn create_table_statement(&self) -> &'static str {
        "CREATE TABLE "
    }

    /// Drop `table`, tolerating its absence.
    fn drop_table_if_exists_statement(&self, table: &str) -> String {
        format!("DROP TABLE IF EXISTS {}", table)
    }

    /// Explicit lock statement over `tables`, or `None` when the vendor
    /// locks implicitly at transaction scope.
    fn lock_tables(&self, _tables: &[&str]) -> Option<String> {
        None
    }

    /// Explicit unlock statement, or `None` when commit releases locks.
    fn unlock_tables(&self, _tables: &[&str]) -> Option<String> {
        None
    }

    // ==================== Identifiers & URL ====================

    /// `name` wrapped in the vendor quote pair.
    fn quote_field(&self, name: &str) -> String {
        let caps = self.caps();
        format!("{}{}{}", caps.quote_start, name, caps.quote_end)
    }

    /// Joined schema/table pair in the vendor's bare shape.
    fn schema_table_combination(&self, schema: &str, table: &str) -> String {
        format!("{}.{}", schema, table)
    }

    /// Joined schema/table pair with both sides quoted. Vendors with a
    /// bracket pair get brackets on both sides for free.
    fn quoted_schema_table_combination(&self, schema: &str, table: &str) -> String {
        format!("{}.{}", self.quote_field(schema), self.quote_field(table))
    }

    /// Rewrite `name` into an identifier this vendor accepts bare:
    /// protector for disallowed characters, digit prefix, reserved-word
    /// suffix. Idempotent.
    fn safe_field_name(&self, name: &str) -> String {
        safe_identifier(name, self.caps().reserved_words)
    }

    /// Driver class for the current access type.
    fn driver_class(&self) -> &'static str {
        match self.access_type() {
            AccessType::Odbc => ODBC_BRIDGE_DRIVER,
            _ => self.caps().driver_class,
        }
    }

    /// Connection URL for the given components.
    ///
    /// ODBC and JNDI shapes are vendor-independent; native (and OCI)
    /// shapes come from [`Dialect::native_url`]. Port handling quirks are
    /// preserved per vendor: an empty or `-1` port omits the port segment
    /// wherever the vendor's template allows it.
    fn url(&self, host: &str, port: &str, database: &str) -> Result<String> {
        match self.access_type() {
            AccessType::Odbc => Ok(format!("jdbc:odbc:{}", database)),
            AccessType::Jndi => Ok(database.to_string()),
            AccessType::Native | AccessType::Oci => self.native_url(host, port, database),
        }
    }

    /// Native-access URL template. The base shape is the common
    /// `jdbc:<subprotocol>://host:port/database`.
    fn native_url(&self, host: &str, port: &str, database: &str) -> Result<String> {
        let mut url = format!("jdbc:{}://{}", self.vendor_id(), host);
        if has_port(port) {
            url.push(':');
            url.push_str(port);
        }
        url.push('/');
        url.push_str(database);
        Ok(url)
    }

    /// Append driver options to `url`: the indicator starts the option
    /// section, the separator joins subsequent pairs.
    fn append_extra_options(&self, url: &str, options: &[(&str, &str)]) -> String {
        if options.is_empty() {
            return url.to_string();
        }
        let caps = self.caps();
        let mut out = String::from(url);
        for (i, (k, v)) in options.iter().enumerate() {
            out.push_str(if i == 0 {
                caps.extra_option_indicator
            } else {
                caps.extra_option_separator
            });
            out.push_str(k);
            out.push('=');
            out.push_str(v);
        }
        out
    }

    /// Schema this vendor implicitly works in, when it has a fixed one.
    fn default_schema_name(&self) -> Option<&'static str> {
        None
    }

    // ==================== Sequence SQL ====================

    /// SQL advancing `sequence` and returning the new value; `None` when
    /// the vendor has no sequences.
    fn sql_next_sequence_value(&self, _sequence: &str) -> Option<String> {
        None
    }

    /// SQL reading the current value of `sequence`; `None` when the
    /// vendor has no sequences.
    fn sql_current_sequence_value(&self, _sequence: &str) -> Option<String> {
        None
    }

    /// SQL probing whether `sequence` exists; `None` when the vendor has
    /// no sequences.
    fn sql_sequence_exists(&self, _sequence: &str) -> Option<String> {
        None
    }

    /// SQL listing every sequence visible to the connection; `None` when
    /// the vendor has no sequences.
    fn sql_list_of_sequences(&self) -> Option<String> {
        None
    }

    // ==================== Introspection SQL ====================

    /// Cheapest probe that fails iff `table` is absent.
    fn sql_table_exists(&self, table: &str) -> String {
        format!("SELECT 1 FROM {}", table)
    }

    /// Cheapest probe that fails iff `column` is absent from `table`.
    fn sql_column_exists(&self, column: &str, table: &str) -> String {
        format!("SELECT {} FROM {}", column, table)
    }

    /// Query whose result metadata describes every column of `table`.
    fn sql_query_fields(&self, table: &str) -> String {
        format!("SELECT * FROM {}", table)
    }

    /// SQL listing callable procedures, or `None` when not reachable via
    /// plain SQL.
    fn sql_list_of_procedures(&self) -> Option<String> {
        None
    }

    /// SQL listing schemas, or `None` when not reachable via plain SQL.
    fn sql_list_of_schemas(&self) -> Option<String> {
        None
    }

    /// Index introspection query whose **first result column** is an
    /// indexed column name of `table`; `None` when the vendor has no
    /// SQL-reachable index catalog.
    fn sql_index_columns(&self, _schema: &str, _table: &str) -> Option<String> {
        None
    }

    // ==================== Supplemental operations ====================

    /// Bootstrap row insert for the unknown dimension member, where the
    /// key column auto-increments; `None` when the vendor cannot seed an
    /// identity column explicitly.
    fn sql_insert_auto_inc_unknown_dimension_row(
        &self,
        _table: &str,
        _key_field: &str,
        _version_field: &str,
    ) -> Option<String> {
        None
    }

    /// Trailing row-limit clause (leading space included), empty when the
    /// vendor has no trailing LIMIT grammar.
    fn limit_clause(&self, _rows: u64) -> String {
        String::new()
    }
}

/// Whether a port component was actually supplied (`-1` and empty both
/// mean "none").
pub fn has_port(port: &str) -> bool {
    !port.is_empty() && port != "-1"
}

/// Split a possibly schema-qualified name into (schema, object).
pub fn split_schema_qualified(name: &str) -> (Option<&str>, &str) {
    match name.split_once('.') {
        Some((schema, object)) if !schema.is_empty() => (Some(schema), object),
        _ => (None, name),
    }
}

/// Helper for vendors whose catalog lookups are case-folded: a quoted
/// uppercase literal.
pub fn upper_literal(s: &str) -> String {
    format!("'{}'", s.to_uppercase())
}

/// Helper for vendors whose catalog lookups are lower-folded.
pub fn lower_literal(s: &str) -> String {
    format!("'{}'", s.to_lowercase())
}

/// Hard failure for the one URL that must not be emitted malformed.
pub fn malformed_url(vendor: &'static str, reason: impl Into<String>) -> Error {
    Error::MalformedUrl {
        vendor,
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_port() {
        assert!(has_port("5432"));
        assert!(!has_port(""));
        assert!(!has_port("-1"));
    }

    #[test]
    fn test_split_schema_qualified() {
        assert_eq!(split_schema_qualified("S.SEQ"), (Some("S"), "SEQ"));
        assert_eq!(split_schema_qualified("SEQ"), (None, "SEQ"));
        assert_eq!(split_schema_qualified(".SEQ"), (None, ".SEQ"));
    }

    #[test]
    fn test_literals() {
        assert_eq!(upper_literal("seq"), "'SEQ'");
        assert_eq!(lower_literal("SEQ"), "'seq'");
    }
}
