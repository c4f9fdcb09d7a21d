//! Microsoft SQL Server, through jTDS or the vendor driver.
//!
//! `IDENTITY` keys, `BIT` booleans, `TOP`-style limits (so no trailing
//! limit clause), and an `OBJECT_ID` guard instead of `IF EXISTS`.

use crate::dialect::{Dialect, has_port};
use dialekt_core::{AccessType, ColumnMeta, DatabaseCapabilities, Result, ValueKind};

const RESERVED: &[&str] = &[
    "ADD", "ALL", "ALTER", "AND", "ANY", "AS", "ASC", "AUTHORIZATION", "BACKUP", "BEGIN",
    "BETWEEN", "BREAK", "BROWSE", "BULK", "BY", "CASCADE", "CASE", "CHECK", "CHECKPOINT", "CLOSE",
    "CLUSTERED", "COLUMN", "COMMIT", "COMPUTE", "CONSTRAINT", "CONTAINS", "CONTINUE", "CONVERT",
    "CREATE", "CROSS", "CURRENT", "CURSOR", "DATABASE", "DBCC", "DEALLOCATE", "DECLARE",
    "DEFAULT", "DELETE", "DENY", "DESC", "DISTINCT", "DOUBLE", "DROP", "ELSE", "END", "ERRLVL",
    "ESCAPE", "EXCEPT", "EXEC", "EXECUTE", "EXISTS", "EXIT", "FETCH", "FILE", "FOR", "FOREIGN",
    "FROM", "FULL", "FUNCTION", "GOTO", "GRANT", "GROUP", "HAVING", "HOLDLOCK", "IDENTITY", "IF",
    "IN", "INDEX", "INNER", "INSERT", "INTERSECT", "INTO", "IS", "JOIN", "KEY", "KILL", "LEFT",
    "LIKE", "LINENO", "MERGE", "NOT", "NULL", "OF", "OFF", "ON", "OPEN", "OPTION", "OR", "ORDER",
    "OUTER", "OVER", "PERCENT", "PIVOT", "PLAN", "PRIMARY", "PRINT", "PROC", "PROCEDURE",
    "PUBLIC", "RAISERROR", "READ", "RECONFIGURE", "REFERENCES", "REPLICATION", "RESTORE",
    "RESTRICT", "RETURN", "REVOKE", "RIGHT", "ROLLBACK", "RULE", "SAVE", "SCHEMA", "SELECT",
    "SET", "SHUTDOWN", "SOME", "TABLE", "THEN", "TO", "TOP", "TRAN", "TRANSACTION", "TRIGGER",
    "TRUNCATE", "UNION", "UNIQUE", "UPDATE", "UPDLOCK", "USE", "USER", "VALUES", "VIEW", "WHERE",
    "WHILE", "WITH",
];

fn mssql_caps(driver_class: &'static str) -> DatabaseCapabilities {
    DatabaseCapabilities {
        default_port: 1433,
        driver_class,
        max_varchar_length: 8000,
        reserved_words: RESERVED,
        supports_auto_increment: true,
        supports_boolean_type: true,
        ..Default::default()
    }
}

fn mssql_field_type(
    col: &ColumnMeta,
    table_key: &str,
    primary_key: &str,
    use_auto_increment: bool,
    max_varchar: i32,
) -> String {
    match col.kind {
        ValueKind::Timestamp | ValueKind::Date => "DATETIME".to_string(),
        ValueKind::Boolean => "BIT".to_string(),
        ValueKind::Integer | ValueKind::Number | ValueKind::BigNumber => {
            if col.is_key_of(table_key, primary_key) {
                if use_auto_increment {
                    "BIGINT IDENTITY(0,1) PRIMARY KEY".to_string()
                } else {
                    "BIGINT PRIMARY KEY".to_string()
                }
            } else if col.precision == 0 {
                if col.length > 18 {
                    format!("DECIMAL({})", col.length)
                } else if col.length > 9 {
                    "BIGINT".to_string()
                } else if col.length > 0 {
                    "INT".to_string()
                } else {
                    "BIGINT".to_string()
                }
            } else if col.length > 0 && col.precision > 0 {
                format!("DECIMAL({}, {})", col.length, col.precision)
            } else {
                "FLOAT(53)".to_string()
            }
        }
        ValueKind::String => {
            if col.length > max_varchar {
                "TEXT".to_string()
            } else if col.length > 0 {
                format!("VARCHAR({})", col.length)
            } else {
                "VARCHAR(100)".to_string()
            }
        }
        ValueKind::Binary => "VARBINARY(MAX)".to_string(),
        ValueKind::Internet | ValueKind::Unsupported => " UNKNOWN".to_string(),
    }
}

fn jtds_url(host: &str, port: &str, database: &str) -> Result<String> {
    let mut url = format!("jdbc:jtds:sqlserver://{}", host);
    if has_port(port) {
        url.push(':');
        url.push_str(port);
    }
    url.push('/');
    url.push_str(database);
    Ok(url)
}

fn sqlserver_url(host: &str, port: &str, database: &str) -> Result<String> {
    let mut url = format!("jdbc:sqlserver://{}", host);
    if has_port(port) {
        url.push(':');
        url.push_str(port);
    }
    url.push_str(";databaseName=");
    url.push_str(database);
    Ok(url)
}

macro_rules! mssql_family_dialect {
    ($ty:ident, $id:literal, $name:literal, $url_fn:path) => {
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

            fn native_url(&self, host: &str, port: &str, database: &str) -> Result<String> {
                $url_fn(host, port, database)
            }

            fn field_type(
                &self,
                col: &ColumnMeta,
                table_key: &str,
                primary_key: &str,
                use_auto_increment: bool,
            ) -> String {
                mssql_field_type(
                    col,
                    table_key,
                    primary_key,
                    use_auto_increment,
                    self.caps.max_varchar_length,
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
                format!("ALTER TABLE {} DROP COLUMN {}", table, col.name)
            }

            fn modify_column_statement(
                &self,
                table: &str,
                col: &ColumnMeta,
                table_key: &str,
                use_auto_increment: bool,
                primary_key: &str,
            ) -> Vec<String> {
                vec![format!(
                    "ALTER TABLE {} ALTER COLUMN {}",
                    table,
                    self.field_definition(
                        col,
                        table_key,
                        primary_key,
                        use_auto_increment,
                        true,
                        false
                    )
                )]
            }

            fn drop_table_if_exists_statement(&self, table: &str) -> String {
                format!(
                    "IF OBJECT_ID('{}', 'U') IS NOT NULL DROP TABLE {}",
                    table, table
                )
            }

            fn lock_tables(&self, tables: &[&str]) -> Option<String> {
                if tables.is_empty() {
                    return None;
                }
                let mut sql = String::new();
                for t in tables {
                    sql.push_str("SELECT TOP 0 * FROM ");
                    sql.push_str(t);
                    sql.push_str(" WITH (UPDLOCK, HOLDLOCK);");
                }
                Some(sql)
            }

            fn default_schema_name(&self) -> Option<&'static str> {
                Some("dbo")
            }

            fn sql_list_of_procedures(&self) -> Option<String> {
                Some("SELECT name FROM sys.procedures".to_string())
            }

            fn sql_list_of_schemas(&self) -> Option<String> {
                Some("SELECT name FROM sys.schemas".to_string())
            }

            fn sql_index_columns(&self, _schema: &str, table: &str) -> Option<String> {
                Some(format!(
                    "SELECT c.name FROM sys.indexes i \
                     JOIN sys.index_columns ic ON i.object_id = ic.object_id AND i.index_id = ic.index_id \
                     JOIN sys.columns c ON ic.object_id = c.object_id AND ic.column_id = c.column_id \
                     WHERE i.object_id = OBJECT_ID('{}')",
                    table
                ))
            }
        }
    };
}

/// SQL Server through the jTDS driver.
#[derive(Debug)]
pub struct Mssql {
    access: AccessType,
    caps: DatabaseCapabilities,
}

impl Mssql {
    pub fn new(access: AccessType) -> Self {
        Self {
            access,
            caps: mssql_caps("net.sourceforge.jtds.jdbc.Driver"),
        }
    }
}

mssql_family_dialect!(Mssql, "mssql", "MS SQL Server", jtds_url);

/// SQL Server through the Microsoft driver.
#[derive(Debug)]
pub struct MssqlNative {
    access: AccessType,
    caps: DatabaseCapabilities,
}

impl MssqlNative {
    pub fn new(access: AccessType) -> Self {
        Self {
            access,
            caps: mssql_caps("com.microsoft.sqlserver.jdbc.SQLServerDriver"),
        }
    }
}

mssql_family_dialect!(MssqlNative, "mssql-native", "MS SQL Server (native)", sqlserver_url);

#[cfg(test)]
mod tests {
    use super::*;

    fn mssql() -> Mssql {
        Mssql::new(AccessType::Native)
    }

    #[test]
    fn test_jtds_and_native_urls_differ() {
        assert_eq!(
            mssql().url("db.example.com", "1433", "crm").unwrap(),
            "jdbc:jtds:sqlserver://db.example.com:1433/crm"
        );
        assert_eq!(
            MssqlNative::new(AccessType::Native)
                .url("db.example.com", "1433", "crm")
                .unwrap(),
            "jdbc:sqlserver://db.example.com:1433;databaseName=crm"
        );
    }

    #[test]
    fn test_identity_key() {
        let def =
            mssql().field_definition(&ColumnMeta::integer("ID"), "ID", "", true, true, false);
        assert_eq!(def, "ID BIGINT IDENTITY(0,1) PRIMARY KEY");
    }

    #[test]
    fn test_boolean_is_bit() {
        let def = mssql().field_definition(&ColumnMeta::boolean("OK"), "", "", false, false, false);
        assert_eq!(def, "BIT");
    }

    #[test]
    fn test_varchar_text_boundary_is_exclusive() {
        let def =
            mssql().field_definition(&ColumnMeta::string("S", 8000), "", "", false, false, false);
        assert_eq!(def, "VARCHAR(8000)");
        let def =
            mssql().field_definition(&ColumnMeta::string("S", 8001), "", "", false, false, false);
        assert_eq!(def, "TEXT");
    }

    #[test]
    fn test_modify_is_single_alter_column() {
        let stmts =
            mssql().modify_column_statement("T", &ColumnMeta::string("C", 20), "", false, "");
        assert_eq!(stmts, vec!["ALTER TABLE T ALTER COLUMN C VARCHAR(20)".to_string()]);
    }

    #[test]
    fn test_drop_table_guard() {
        assert_eq!(
            mssql().drop_table_if_exists_statement("T"),
            "IF OBJECT_ID('T', 'U') IS NOT NULL DROP TABLE T"
        );
    }

    #[test]
    fn test_lock_uses_updlock_probe() {
        assert_eq!(
            mssql().lock_tables(&["A"]).unwrap(),
            "SELECT TOP 0 * FROM A WITH (UPDLOCK, HOLDLOCK);"
        );
        assert!(mssql().unlock_tables(&["A"]).is_none());
    }

    #[test]
    fn test_no_trailing_limit_clause() {
        assert_eq!(mssql().limit_clause(10), "");
    }
}
