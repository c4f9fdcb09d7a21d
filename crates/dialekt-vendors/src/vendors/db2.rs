//! IBM DB2 (LUW) and DB2 for i (AS/400).
//!
//! `CHARACTER(1)` booleans, `GENERATED ALWAYS AS IDENTITY` keys, schema
//! scoped sequence catalogs under `SYSCAT`.

use crate::dialect::{Dialect, has_port, split_schema_qualified, upper_literal};
use dialekt_core::{AccessType, ColumnMeta, DatabaseCapabilities, Result, ValueKind};

const RESERVED: &[&str] = &[
    "ADD", "AFTER", "ALL", "ALLOCATE", "ALTER", "AND", "ANY", "AS", "ASSOCIATE", "AT", "AUDIT",
    "BEFORE", "BEGIN", "BETWEEN", "BINARY", "BY", "CALL", "CASE", "CAST", "CHAR", "CHARACTER",
    "CHECK", "CLOSE", "COLLECTION", "COLUMN", "COMMENT", "COMMIT", "CONCAT", "CONDITION",
    "CONNECT", "CONSTRAINT", "CREATE", "CURRENT", "CURSOR", "DATABASE", "DAY", "DECLARE",
    "DEFAULT", "DELETE", "DESCRIBE", "DISTINCT", "DO", "DROP", "ELSE", "END", "ESCAPE", "EXCEPT",
    "EXECUTE", "EXISTS", "EXTERNAL", "FETCH", "FOR", "FOREIGN", "FREE", "FROM", "FULL",
    "FUNCTION", "GET", "GLOBAL", "GO", "GOTO", "GRANT", "GROUP", "HANDLER", "HAVING", "HOLD",
    "HOUR", "IDENTITY", "IF", "IMMEDIATE", "IN", "INDEX", "INDICATOR", "INNER", "INOUT",
    "INSERT", "INTO", "IS", "ISOLATION", "JOIN", "KEY", "LANGUAGE", "LEFT", "LIKE", "LOCK",
    "MINUTE", "MONTH", "NO", "NOT", "NULL", "OF", "ON", "OPEN", "OPTION", "OR", "ORDER", "OUT",
    "OUTER", "PARAMETER", "PARTITION", "POSITION", "PRIMARY", "PROCEDURE", "RELEASE", "RENAME",
    "RESULT", "RETURN", "REVOKE", "RIGHT", "ROLLBACK", "ROW", "ROWS", "SAVEPOINT", "SCHEMA",
    "SECOND", "SELECT", "SEQUENCE", "SET", "SOME", "TABLE", "THEN", "TO", "TRIGGER", "UNION",
    "UNIQUE", "UPDATE", "USER", "USING", "VALUES", "VIEW", "WHEN", "WHERE", "WHILE", "WITH",
    "YEAR",
];

fn db2_field_type(
    col: &ColumnMeta,
    table_key: &str,
    primary_key: &str,
    use_auto_increment: bool,
    max_varchar: i32,
) -> String {
    match col.kind {
        ValueKind::Timestamp => "TIMESTAMP".to_string(),
        ValueKind::Date => "DATE".to_string(),
        ValueKind::Boolean => "CHARACTER(1)".to_string(),
        ValueKind::Integer | ValueKind::Number | ValueKind::BigNumber => {
            if col.is_key_of(table_key, primary_key) {
                if use_auto_increment {
                    "BIGINT NOT NULL GENERATED ALWAYS AS IDENTITY PRIMARY KEY".to_string()
                } else {
                    "BIGINT NOT NULL PRIMARY KEY".to_string()
                }
            } else if col.precision == 0 {
                if col.length > 18 {
                    format!("DECIMAL({})", col.length)
                } else if col.length > 9 {
                    "BIGINT".to_string()
                } else if col.length > 4 {
                    "INTEGER".to_string()
                } else if col.length > 0 {
                    "SMALLINT".to_string()
                } else {
                    "BIGINT".to_string()
                }
            } else if col.length > 0 && col.precision > 0 {
                format!("DECIMAL({}, {})", col.length, col.precision)
            } else {
                "FLOAT".to_string()
            }
        }
        ValueKind::String => {
            if col.length > 0 && col.length <= max_varchar {
                format!("VARCHAR({})", col.length)
            } else {
                "CLOB".to_string()
            }
        }
        ValueKind::Binary => {
            if col.length > 0 {
                format!("BLOB({})", col.length)
            } else {
                "BLOB".to_string()
            }
        }
        ValueKind::Internet | ValueKind::Unsupported => " UNKNOWN".to_string(),
    }
}

/// IBM DB2 LUW.
#[derive(Debug)]
pub struct Db2 {
    access: AccessType,
    caps: DatabaseCapabilities,
}

impl Db2 {
    pub fn new(access: AccessType) -> Self {
        Self {
            access,
            caps: DatabaseCapabilities {
                default_port: 50000,
                driver_class: "com.ibm.db2.jcc.DB2Driver",
                max_varchar_length: 32672,
                reserved_words: RESERVED,
                supports_sequences: true,
                supports_auto_increment: true,
                ..Default::default()
            },
        }
    }
}

impl Dialect for Db2 {
    fn vendor_id(&self) -> &'static str {
        "db2"
    }

    fn vendor_name(&self) -> &'static str {
        "IBM DB2"
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
        use_auto_increment: bool,
    ) -> String {
        db2_field_type(
            col,
            table_key,
            primary_key,
            use_auto_increment,
            self.caps.max_varchar_length,
        )
    }

    fn native_url(&self, host: &str, port: &str, database: &str) -> Result<String> {
        let mut url = format!("jdbc:db2://{}", host);
        if has_port(port) {
            url.push(':');
            url.push_str(port);
        }
        url.push('/');
        url.push_str(database);
        Ok(url)
    }

    fn drop_column_statement(
        &self,
        table: &str,
        col: &ColumnMeta,
        _table_key: &str,
        _use_auto_increment: bool,
        _primary_key: &str,
    ) -> String {
        format!("ALTER TABLE {} DROP COLUMN {}", table, col.name)
    }

    /// No in-place MODIFY before 9.7; shadow dance with RENAME COLUMN.
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

    fn sql_next_sequence_value(&self, sequence: &str) -> Option<String> {
        Some(format!(
            "SELECT NEXT VALUE FOR {} FROM SYSIBM.SYSDUMMY1",
            sequence
        ))
    }

    fn sql_current_sequence_value(&self, sequence: &str) -> Option<String> {
        Some(format!(
            "SELECT PREVIOUS VALUE FOR {} FROM SYSIBM.SYSDUMMY1",
            sequence
        ))
    }

    fn sql_sequence_exists(&self, sequence: &str) -> Option<String> {
        let (schema, seq) = split_schema_qualified(sequence);
        Some(match schema {
            Some(schema) => format!(
                "SELECT * FROM SYSCAT.SEQUENCES WHERE SEQNAME = {} AND SEQSCHEMA = {}",
                upper_literal(seq),
                upper_literal(schema)
            ),
            None => format!(
                "SELECT * FROM SYSCAT.SEQUENCES WHERE SEQNAME = {}",
                upper_literal(seq)
            ),
        })
    }

    fn sql_list_of_sequences(&self) -> Option<String> {
        Some("SELECT SEQNAME FROM SYSCAT.SEQUENCES".to_string())
    }

    fn sql_list_of_procedures(&self) -> Option<String> {
        Some("SELECT PROCNAME FROM SYSCAT.PROCEDURES".to_string())
    }

    fn sql_list_of_schemas(&self) -> Option<String> {
        Some("SELECT SCHEMANAME FROM SYSCAT.SCHEMATA".to_string())
    }

    fn sql_index_columns(&self, schema: &str, table: &str) -> Option<String> {
        Some(if schema.is_empty() {
            format!(
                "SELECT ICU.COLNAME FROM SYSCAT.INDEXCOLUSE ICU \
                 JOIN SYSCAT.INDEXES I ON ICU.INDNAME = I.INDNAME AND ICU.INDSCHEMA = I.INDSCHEMA \
                 WHERE I.TABNAME = {}",
                upper_literal(table)
            )
        } else {
            format!(
                "SELECT ICU.COLNAME FROM SYSCAT.INDEXCOLUSE ICU \
                 JOIN SYSCAT.INDEXES I ON ICU.INDNAME = I.INDNAME AND ICU.INDSCHEMA = I.INDSCHEMA \
                 WHERE I.TABNAME = {} AND I.TABSCHEMA = {}",
                upper_literal(table),
                upper_literal(schema)
            )
        })
    }
}

/// DB2 for i (AS/400).
#[derive(Debug)]
pub struct As400 {
    access: AccessType,
    caps: DatabaseCapabilities,
}

impl As400 {
    pub fn new(access: AccessType) -> Self {
        Self {
            access,
            caps: DatabaseCapabilities {
                default_port: -1,
                driver_class: "com.ibm.as400.access.AS400JDBCDriver",
                max_varchar_length: 32672,
                reserved_words: RESERVED,
                ..Default::default()
            },
        }
    }
}

impl Dialect for As400 {
    fn vendor_id(&self) -> &'static str {
        "as400"
    }

    fn vendor_name(&self) -> &'static str {
        "DB2 for i (AS/400)"
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
        use_auto_increment: bool,
    ) -> String {
        db2_field_type(
            col,
            table_key,
            primary_key,
            use_auto_increment,
            self.caps.max_varchar_length,
        )
    }

    fn native_url(&self, host: &str, _port: &str, database: &str) -> Result<String> {
        // the port is fixed by the host server; only the library matters
        Ok(format!("jdbc:as400://{}/{}", host, database))
    }
}
