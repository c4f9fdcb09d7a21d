//! The vendor variants.
//!
//! One module per product family; each variant owns its capability
//! descriptor and overrides only the `Dialect` methods whose output
//! differs from the base behavior.

pub mod cache;
pub mod cubrid;
pub mod db2;
pub mod derby;
pub mod exasol;
pub mod firebird;
pub mod generic;
pub mod h2;
pub mod hana;
pub mod hypersonic;
pub mod informix;
pub mod ingres;
pub mod luciddb;
pub mod maxdb;
pub mod monetdb;
pub mod msaccess;
pub mod mssql;
pub mod mysql;
pub mod netezza;
pub mod oracle;
pub mod postgres;
pub mod snowflake;
pub mod sqlite;
pub mod sybase;
pub mod teradata;
pub mod vertica;
pub mod xugu;

pub use cache::Cache;
pub use cubrid::Cubrid;
pub use db2::{As400, Db2};
pub use derby::Derby;
pub use exasol::Exasol;
pub use firebird::{Firebird, Interbase};
pub use generic::Generic;
pub use h2::H2;
pub use hana::Hana;
pub use hypersonic::Hypersonic;
pub use informix::Informix;
pub use ingres::{Ingres, Vectorwise};
pub use luciddb::LucidDb;
pub use maxdb::MaxDb;
pub use monetdb::MonetDb;
pub use msaccess::MsAccess;
pub use mssql::{Mssql, MssqlNative};
pub use mysql::{InfiniDb, Infobright, MariaDb, MySql};
pub use netezza::Netezza;
pub use oracle::Oracle;
pub use postgres::{Greenplum, KingbaseEs, Postgres, Redshift};
pub use snowflake::Snowflake;
pub use sqlite::Sqlite;
pub use sybase::{Sybase, SybaseIq};
pub use teradata::Teradata;
pub use vertica::Vertica;
pub use xugu::Xugu;
