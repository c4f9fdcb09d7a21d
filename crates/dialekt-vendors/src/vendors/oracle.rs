//! Oracle.
//!
//! Sequence-centric keys, `NUMBER` everywhere, the thin/OCI URL split,
//! and DDL that cannot modify a column in place.

use crate::dialect::{Dialect, has_port, malformed_url, split_schema_qualified, upper_literal};
use dialekt_core::{AccessType, ColumnMeta, DatabaseCapabilities, Result, ValueKind};

const RESERVED: &[&str] = &[
    "ACCESS", "ADD", "ALL", "ALTER", "AND", "ANY", "AS", "ASC", "AUDIT", "BETWEEN", "BY", "CHAR",
    "CHECK", "CLUSTER", "COLUMN", "COMMENT", "COMPRESS", "CONNECT", "CREATE", "CURRENT", "DATE",
    "DECIMAL", "DEFAULT", "DELETE", "DESC", "DISTINCT", "DROP", "ELSE", "EXCLUSIVE", "EXISTS",
    "FILE", "FLOAT", "FOR", "FROM", "GRANT", "GROUP", "HAVING", "IDENTIFIED", "IMMEDIATE", "IN",
    "INCREMENT", "INDEX", "INITIAL", "INSERT", "INTEGER", "INTERSECT", "INTO", "IS", "LEVEL",
    "LIKE", "LOCK", "LONG", "MAXEXTENTS", "MINUS", "MLSLABEL", "MODE", "MODIFY", "NOAUDIT",
    "NOCOMPRESS", "NOT", "NOWAIT", "NULL", "NUMBER", "OF", "OFFLINE", "ON", "ONLINE", "OPTION",
    "OR", "ORDER", "PCTFREE", "PRIOR", "PRIVILEGES", "PUBLIC", "RAW", "RENAME", "RESOURCE",
    "REVOKE", "ROW", "ROWID", "ROWNUM", "ROWS", "SELECT", "SESSION", "SET", "SHARE", "SIZE",
    "SMALLINT", "START", "SUCCESSFUL", "SYNONYM", "SYSDATE", "TABLE", "THEN", "TO", "TRIGGER",
    "UID", "UNION", "UNIQUE", "UPDATE", "USER", "VALIDATE", "VALUES", "VARCHAR", "VARCHAR2",
    "VIEW", "WHENEVER", "WHERE", "WITH",
];

/// Oracle, thin or OCI.
#[derive(Debug)]
pub struct Oracle {
    access: AccessType,
    caps: DatabaseCapabilities,
}

impl Oracle {
    pub fn new(access: AccessType) -> Self {
        Self {
            access,
            caps: DatabaseCapabilities {
                default_port: 1521,
                driver_class: "oracle.jdbc.driver.OracleDriver",
                max_varchar_length: 2000,
                reserved_words: RESERVED,
                supports_sequences: true,
                supports_sequence_no_max_option: true,
                supports_synonyms: true,
                supports_bitmap_index: true,
                // ORA-17023 on metadata before execution
                supports_prepared_statement_metadata: false,
                ..Default::default()
            },
        }
    }
}

impl Dialect for Oracle {
    fn vendor_id(&self) -> &'static str {
        "oracle"
    }

    fn vendor_name(&self) -> &'static str {
        "Oracle"
    }

    fn access_type(&self) -> AccessType {
        self.access
    }

    fn caps(&self) -> &DatabaseCapabilities {
        &self.caps
    }

    fn field_type(
        &self,
        col: &ColumnMeta,
        table_key: &str,
        primary_key: &str,
        _use_auto_increment: bool,
    ) -> String {
        match col.kind {
            ValueKind::Timestamp => "TIMESTAMP".to_string(),
            ValueKind::Date => "DATE".to_string(),
            ValueKind::Boolean => "CHAR(1)".to_string(),
            ValueKind::Integer | ValueKind::Number | ValueKind::BigNumber => {
                // keys come from sequences; no identity grammar here
                if col.is_key_of(table_key, primary_key) {
                    "NUMBER(19) NOT NULL PRIMARY KEY".to_string()
                } else if col.precision == 0 {
                    if col.length > 0 {
                        format!("NUMBER({})", col.length)
                    } else {
                        "INTEGER".to_string()
                    }
                } else if col.length > 0 && col.precision > 0 {
                    format!("NUMBER({}, {})", col.length, col.precision)
                } else {
                    "NUMBER".to_string()
                }
            }
            ValueKind::String => {
                if col.length >= self.caps.clob_threshold {
                    "CLOB".to_string()
                } else if col.length > 0 && col.length <= self.caps.max_varchar_length {
                    format!("VARCHAR2({})", col.length)
                } else if col.length > self.caps.max_varchar_length {
                    "CLOB".to_string()
                } else {
                    "VARCHAR2(2000)".to_string()
                }
            }
            ValueKind::Binary => "BLOB".to_string(),
            ValueKind::Internet | ValueKind::Unsupported => " UNKNOWN".to_string(),
        }
    }

    fn add_column_statement(
        &self,
        table: &str,
        col: &ColumnMeta,
        table_key: &str,
        use_auto_increment: bool,
        primary_key: &str,
    ) -> String {
        format!(
            "ALTER TABLE {} ADD ( {} )",
            table,
            self.field_definition(col, table_key, primary_key, use_auto_increment, true, false)
        )
    }

    fn drop_column_statement(
        &self,
        table: &str,
        col: &ColumnMeta,
        _table_key: &str,
        _use_auto_increment: bool,
        _primary_key: &str,
    ) -> String {
        format!("ALTER TABLE {} DROP ( {} )", table, col.name)
    }

    /// No in-place MODIFY: shadow column, copy, drop, rename back.
    fn modify_column_statement(
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
            format!(
                "ALTER TABLE {} RENAME COLUMN {} TO {}",
                table, shadow.name, col.name
            ),
        ]
    }

    fn drop_table_if_exists_statement(&self, table: &str) -> String {
        format!(
            "BEGIN EXECUTE IMMEDIATE 'DROP TABLE {}'; EXCEPTION WHEN OTHERS THEN IF SQLCODE != -942 THEN RAISE; END IF; END;",
            table
        )
    }

    fn lock_tables(&self, tables: &[&str]) -> Option<String> {
        if tables.is_empty() {
            return None;
        }
        let mut sql = String::new();
        for t in tables {
            sql.push_str("LOCK TABLE ");
            sql.push_str(t);
            sql.push_str(" IN EXCLUSIVE MODE;");
        }
        Some(sql)
    }

    // commit releases the locks

    fn native_url(&self, host: &str, port: &str, database: &str) -> Result<String> {
        if self.access == AccessType::Oci {
            return oci_url(host, port, database);
        }
        if host.is_empty() {
            // TNS alias or full descriptor in the database field
            return Ok(format!("jdbc:oracle:thin:@{}", database));
        }
        let mut url = format!("jdbc:oracle:thin:@{}", host);
        if has_port(port) {
            url.push(':');
            url.push_str(port);
        }
        url.push(':');
        url.push_str(database);
        Ok(url)
    }

    fn sql_next_sequence_value(&self, sequence: &str) -> Option<String> {
        Some(format!("SELECT {}.nextval FROM dual", sequence))
    }

    fn sql_current_sequence_value(&self, sequence: &str) -> Option<String> {
        Some(format!("SELECT {}.currval FROM dual", sequence))
    }

    fn sql_sequence_exists(&self, sequence: &str) -> Option<String> {
        let (schema, seq) = split_schema_qualified(sequence);
        Some(match schema {
            Some(schema) => format!(
                "SELECT * FROM ALL_SEQUENCES WHERE SEQUENCE_NAME = {} AND SEQUENCE_OWNER = {}",
                upper_literal(seq),
                upper_literal(schema)
            ),
            None => format!(
                "SELECT * FROM USER_SEQUENCES WHERE SEQUENCE_NAME = {}",
                upper_literal(seq)
            ),
        })
    }

    fn sql_list_of_sequences(&self) -> Option<String> {
        Some("SELECT SEQUENCE_NAME FROM all_sequences".to_string())
    }

    fn sql_table_exists(&self, table: &str) -> String {
        format!("SELECT * FROM {} WHERE 1=0", table)
    }

    fn sql_column_exists(&self, column: &str, table: &str) -> String {
        format!("SELECT {} FROM {} WHERE 1=0", column, table)
    }

    fn sql_list_of_procedures(&self) -> Option<String> {
        Some(
            "SELECT DISTINCT DECODE(package_name, NULL, '', package_name || '.') || object_name \
             FROM user_arguments"
                .to_string(),
        )
    }

    fn sql_list_of_schemas(&self) -> Option<String> {
        Some("SELECT username AS schema_name FROM all_users".to_string())
    }

    fn sql_index_columns(&self, schema: &str, table: &str) -> Option<String> {
        Some(if schema.is_empty() {
            format!(
                "SELECT column_name FROM user_ind_columns WHERE table_name = {}",
                upper_literal(table)
            )
        } else {
            format!(
                "SELECT column_name FROM all_ind_columns WHERE table_name = {} AND index_owner = {}",
                upper_literal(table),
                upper_literal(schema)
            )
        })
    }
}

/// OCI URLs are the one place a missing component is a hard error rather
/// than a malformed-but-emitted string.
fn oci_url(host: &str, port: &str, database: &str) -> Result<String> {
    if host.is_empty() && !has_port(port) && database.is_empty() {
        return Err(malformed_url(
            "oracle",
            "OCI access needs a host, port or database name",
        ));
    }
    if host.is_empty() {
        // TNS alias
        return Ok(format!("jdbc:oracle:oci:@{}", database));
    }
    let port = if has_port(port) { port } else { "1521" };
    Ok(format!(
        "jdbc:oracle:oci:@(description=(address=(host={})(protocol=tcp)(port={}))(connect_data=(sid={})))",
        host, port, database
    ))
}
