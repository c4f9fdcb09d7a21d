//! MySQL and its close derivatives (MariaDB, Infobright, InfiniDB).
//!
//! Backtick quoting, `AUTO_INCREMENT` keys, the tiered TEXT family for
//! long strings, and explicit `LOCK TABLES`.

use crate::dialect::{Dialect, has_port};
use dialekt_core::{AccessType, ColumnMeta, DatabaseCapabilities, Result, ValueKind};

const RESERVED: &[&str] = &[
    "ADD", "ALL", "ALTER", "ANALYZE", "AND", "AS", "ASC", "BEFORE", "BETWEEN", "BIGINT", "BINARY",
    "BLOB", "BOTH", "BY", "CASCADE", "CASE", "CHANGE", "CHAR", "CHARACTER", "CHECK", "COLLATE",
    "COLUMN", "CONDITION", "CONSTRAINT", "CONTINUE", "CONVERT", "CREATE", "CROSS", "CURSOR",
    "DATABASE", "DECIMAL", "DEFAULT", "DELETE", "DESC", "DESCRIBE", "DISTINCT", "DOUBLE", "DROP",
    "EACH", "ELSE", "EXISTS", "FALSE", "FOR", "FORCE", "FOREIGN", "FROM", "GRANT", "GROUP",
    "HAVING", "IGNORE", "IN", "INDEX", "INNER", "INSERT", "INT", "INTEGER", "INTERVAL", "INTO",
    "IS", "JOIN", "KEY", "KEYS", "LEADING", "LEFT", "LIKE", "LIMIT", "LOCK", "LONGTEXT", "MATCH",
    "MEDIUMTEXT", "NATURAL", "NOT", "NULL", "ON", "OPTION", "OR", "ORDER", "OUTER", "PRIMARY",
    "PROCEDURE", "RANGE", "READ", "REFERENCES", "REGEXP", "RENAME", "REPLACE", "RESTRICT",
    "RIGHT", "SCHEMA", "SELECT", "SET", "SHOW", "SMALLINT", "TABLE", "TERMINATED", "THEN",
    "TINYINT", "TO", "TRAILING", "TRIGGER", "TRUE", "UNION", "UNIQUE", "UNLOCK", "UNSIGNED",
    "UPDATE", "USAGE", "USE", "USING", "VALUES", "VARCHAR", "WHEN", "WHERE", "WHILE", "WITH",
    "WRITE",
];

fn mysql_caps(default_port: i32, driver_class: &'static str) -> DatabaseCapabilities {
    DatabaseCapabilities {
        default_port,
        driver_class,
        // the bounded-VARCHAR branch stops at 255; longer goes to the TEXT family
        max_varchar_length: 255,
        quote_start: "`",
        quote_end: "`",
        reserved_words: RESERVED,
        supports_auto_increment: true,
        supports_schemas: false,
        extra_option_indicator: "?",
        extra_option_separator: "&",
        ..Default::default()
    }
}

fn mysql_field_type(
    col: &ColumnMeta,
    table_key: &str,
    primary_key: &str,
    use_auto_increment: bool,
) -> String {
    match col.kind {
        ValueKind::Timestamp | ValueKind::Date => "DATETIME".to_string(),
        ValueKind::Boolean => "CHAR(1)".to_string(),
        ValueKind::Integer | ValueKind::Number | ValueKind::BigNumber => {
            if col.is_key_of(table_key, primary_key) {
                if use_auto_increment {
                    "BIGINT AUTO_INCREMENT NOT NULL PRIMARY KEY".to_string()
                } else {
                    "BIGINT NOT NULL PRIMARY KEY".to_string()
                }
            } else if col.precision == 0 {
                if col.length > 18 {
                    format!("DECIMAL({})", col.length)
                } else if col.length > 9 {
                    "BIGINT".to_string()
                } else if col.length > 4 {
                    "INT".to_string()
                } else if col.length > 0 {
                    "SMALLINT".to_string()
                } else {
                    "BIGINT".to_string()
                }
            } else if col.length > 0 && col.precision > 0 {
                format!("DECIMAL({}, {})", col.length, col.precision)
            } else {
                "DOUBLE".to_string()
            }
        }
        ValueKind::String => {
            if col.length == 1 {
                "CHAR(1)".to_string()
            } else if col.length > 0 && col.length < 256 {
                format!("VARCHAR({})", col.length)
            } else if col.length >= 256 && col.length < 65536 {
                "TEXT".to_string()
            } else if col.length >= 65536 && col.length < 16_777_216 {
                "MEDIUMTEXT".to_string()
            } else if col.length >= 16_777_216 {
                "LONGTEXT".to_string()
            } else {
                "TINYTEXT".to_string()
            }
        }
        ValueKind::Binary => "LONGBLOB".to_string(),
        ValueKind::Internet | ValueKind::Unsupported => " UNKNOWN".to_string(),
    }
}

fn mysql_native_url(subprotocol: &str, host: &str, port: &str, database: &str) -> Result<String> {
    let mut url = format!("jdbc:{}://{}", subprotocol, host);
    if has_port(port) {
        url.push(':');
        url.push_str(port);
    }
    url.push('/');
    url.push_str(database);
    Ok(url)
}

fn mysql_lock(tables: &[&str]) -> Option<String> {
    if tables.is_empty() {
        return None;
    }
    let mut sql = String::from("LOCK TABLES ");
    for (i, t) in tables.iter().enumerate() {
        if i > 0 {
            sql.push_str(", ");
        }
        sql.push_str(t);
        sql.push_str(" WRITE");
    }
    sql.push(';');
    Some(sql)
}

macro_rules! mysql_family_dialect {
    ($ty:ident, $id:literal, $name:literal, $subprotocol:literal) => {
        impl Dialect for $ty {
            fn vendor_id(&self) -> &'static str {
                $id
            }

            fn vendor_name(&self) -> &'static str {
                $name
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
                mysql_field_type(col, table_key, primary_key, use_auto_increment)
            }

            fn native_url(&self, host: &str, port: &str, database: &str) -> Result<String> {
                mysql_native_url($subprotocol, host, port, database)
            }

            fn lock_tables(&self, tables: &[&str]) -> Option<String> {
                mysql_lock(tables)
            }

            fn unlock_tables(&self, _tables: &[&str]) -> Option<String> {
                Some("UNLOCK TABLES".to_string())
            }

            fn sql_insert_auto_inc_unknown_dimension_row(
                &self,
                table: &str,
                key_field: &str,
                version_field: &str,
            ) -> Option<String> {
                // 0 would trip AUTO_INCREMENT; the unknown member gets key 1
                Some(format!(
                    "insert into {}({}, {}) values (1, 1)",
                    table, key_field, version_field
                ))
            }

            fn limit_clause(&self, rows: u64) -> String {
                format!(" LIMIT {}", rows)
            }

            fn sql_index_columns(&self, schema: &str, table: &str) -> Option<String> {
                Some(if schema.is_empty() {
                    format!(
                        "SELECT column_name FROM information_schema.statistics WHERE table_name = '{}'",
                        table
                    )
                } else {
                    format!(
                        "SELECT column_name FROM information_schema.statistics WHERE table_name = '{}' AND table_schema = '{}'",
                        table, schema
                    )
                })
            }
        }
    };
}

/// MySQL.
#[derive(Debug)]
pub struct MySql {
    access: AccessType,
    caps: DatabaseCapabilities,
}

impl MySql {
    pub fn new(access: AccessType) -> Self {
        Self {
            access,
            caps: mysql_caps(3306, "org.gjt.mm.mysql.Driver"),
        }
    }
}

mysql_family_dialect!(MySql, "mysql", "MySQL", "mysql");

/// MariaDB.
#[derive(Debug)]
pub struct MariaDb {
    access: AccessType,
    caps: DatabaseCapabilities,
}

impl MariaDb {
    pub fn new(access: AccessType) -> Self {
        Self {
            access,
            caps: mysql_caps(3306, "org.mariadb.jdbc.Driver"),
        }
    }
}

mysql_family_dialect!(MariaDb, "mariadb", "MariaDB", "mariadb");

/// Infobright column store (MySQL protocol).
#[derive(Debug)]
pub struct Infobright {
    access: AccessType,
    caps: DatabaseCapabilities,
}

impl Infobright {
    pub fn new(access: AccessType) -> Self {
        Self {
            access,
            caps: DatabaseCapabilities {
                supports_auto_increment: false,
                ..mysql_caps(5029, "org.gjt.mm.mysql.Driver")
            },
        }
    }
}

mysql_family_dialect!(Infobright, "infobright", "Infobright", "mysql");

/// InfiniDB column store (MySQL protocol).
#[derive(Debug)]
pub struct InfiniDb {
    access: AccessType,
    caps: DatabaseCapabilities,
}

impl InfiniDb {
    pub fn new(access: AccessType) -> Self {
        Self {
            access,
            caps: DatabaseCapabilities {
                supports_auto_increment: false,
                ..mysql_caps(3306, "org.gjt.mm.mysql.Driver")
            },
        }
    }
}

mysql_family_dialect!(InfiniDb, "infinidb", "InfiniDB", "mysql");

#[cfg(test)]
mod tests {
    use super::*;

    fn mysql() -> MySql {
        MySql::new(AccessType::Native)
    }

    #[test]
    fn test_add_column_with_auto_increment_key() {
        let stmt =
            mysql().add_column_statement("FOO", &ColumnMeta::integer("BAR"), "BAR", true, "");
        assert_eq!(
            stmt,
            "ALTER TABLE FOO ADD BAR BIGINT AUTO_INCREMENT NOT NULL PRIMARY KEY"
        );
    }

    #[test]
    fn test_string_tiers() {
        let d = mysql();
        let def = |len| d.field_definition(&ColumnMeta::string("S", len), "", "", false, false, false);
        assert_eq!(def(1), "CHAR(1)");
        assert_eq!(def(255), "VARCHAR(255)");
        assert_eq!(def(256), "TEXT");
        assert_eq!(def(65536), "MEDIUMTEXT");
        assert_eq!(def(16_777_216), "LONGTEXT");
        assert_eq!(def(-1), "TINYTEXT");
    }

    #[test]
    fn test_url_shapes() {
        assert_eq!(
            mysql().url("db.example.com", "3306", "shop").unwrap(),
            "jdbc:mysql://db.example.com:3306/shop"
        );
        assert_eq!(
            mysql().url("db.example.com", "", "shop").unwrap(),
            "jdbc:mysql://db.example.com/shop"
        );
        assert_eq!(
            MariaDb::new(AccessType::Native)
                .url("h", "3307", "shop")
                .unwrap(),
            "jdbc:mariadb://h:3307/shop"
        );
    }

    #[test]
    fn test_extra_options_use_query_syntax() {
        let url = mysql().append_extra_options(
            "jdbc:mysql://h/db",
            &[("useSSL", "false"), ("rewriteBatchedStatements", "true")],
        );
        assert_eq!(
            url,
            "jdbc:mysql://h/db?useSSL=false&rewriteBatchedStatements=true"
        );
    }

    #[test]
    fn test_lock_and_unlock() {
        let d = mysql();
        assert_eq!(
            d.lock_tables(&["A", "B"]).unwrap(),
            "LOCK TABLES A WRITE, B WRITE;"
        );
        assert_eq!(d.unlock_tables(&[]).unwrap(), "UNLOCK TABLES");
    }

    #[test]
    fn test_no_sequences() {
        let d = mysql();
        assert!(d.sql_next_sequence_value("SEQ").is_none());
        assert!(d.sql_list_of_sequences().is_none());
    }

    #[test]
    fn test_unknown_dimension_row_starts_at_one() {
        assert_eq!(
            mysql()
                .sql_insert_auto_inc_unknown_dimension_row("DIM", "DIM_TK", "DIM_VERSION")
                .unwrap(),
            "insert into DIM(DIM_TK, DIM_VERSION) values (1, 1)"
        );
    }

    #[test]
    fn test_quoting_uses_backticks() {
        assert_eq!(mysql().quote_field("order"), "`order`");
    }

    #[test]
    fn test_safe_field_name_reserved() {
        assert_eq!(mysql().safe_field_name("select"), "select_");
        assert_eq!(mysql().safe_field_name("order count"), "order_count");
    }

    #[test]
    fn test_derivatives_keep_mysql_types() {
        let d = Infobright::new(AccessType::Native);
        let def = d.field_definition(&ColumnMeta::string("S", 300), "", "", false, false, false);
        assert_eq!(def, "TEXT");
        assert_eq!(d.caps().default_port, 5029);
        assert!(!d.caps().supports_auto_increment);
    }
}
