//! Core types for the dialekt vendor SQL abstraction.
//!
//! `dialekt-core` is the **foundation layer** for the dialekt ecosystem. It
//! defines the data model every other crate consumes.
//!
//! # Role In The Architecture
//!
//! - **Capability model**: [`DatabaseCapabilities`] is the immutable record
//!   of per-vendor feature flags and limits; [`AccessType`] is the
//!   orthogonal connection-mode axis (native, ODBC, JNDI, OCI).
//! - **Semantic columns**: [`ColumnMeta`] and [`ValueKind`] describe a
//!   column abstractly (kind, length, precision) without committing to any
//!   vendor's type grammar.
//! - **Executor seam**: [`QueryExecutor`], [`Row`] and [`Value`] are the
//!   minimal contract through which the one introspection operation that
//!   must touch a live result set reaches the (out-of-scope) connection
//!   layer.
//! - **Structured concurrency**: re-exports `Cx` and `Outcome` from
//!   asupersync so the delegated read is cancel-correct.
//!
//! # Who Uses This Crate
//!
//! - `dialekt-vendors` builds vendor variants over `DatabaseCapabilities`
//!   and maps `ColumnMeta` to vendor SQL.
//! - Applications normally use the `dialekt` facade; reach for
//!   `dialekt-core` directly when implementing a `QueryExecutor`.

// Re-export asupersync primitives for structured concurrency
pub use asupersync::{Cx, Outcome};

pub mod capabilities;
pub mod column;
pub mod error;
pub mod executor;
pub mod identifiers;

pub use capabilities::{AccessType, CLOB_LENGTH, DatabaseCapabilities};
pub use column::{ColumnMeta, ValueKind};
pub use error::{Error, Result};
pub use executor::{QueryExecutor, Row, Value};
pub use identifiers::{needs_quoting, safe_identifier};
