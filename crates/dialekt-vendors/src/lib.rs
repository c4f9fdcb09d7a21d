//! Vendor variants and SQL generation for the dialekt abstraction.
//!
//! This crate carries the behavioral half of the ecosystem:
//!
//! - [`Dialect`]: the trait one vendor variant implements; default
//!   method bodies encode the base-descriptor behavior so variants
//!   override only what differs.
//! - [`vendors`]: ~38 concrete variants, from the big five to the
//!   appliance warehouses.
//! - [`create_dialect`]/[`vendor_ids`]: the static registry, built once
//!   at first use and immutable afterwards.
//! - [`check_index_exists`]: the one operation that reads a live result
//!   set, through the `QueryExecutor` seam of `dialekt-core`.
//!
//! Everything else is pure string building over immutable inputs: the
//! same call with the same inputs always produces the same SQL, with no
//! connection in sight.

pub mod dialect;
pub mod index_lookup;
pub mod registry;
pub mod vendors;

pub use dialect::{CR, Dialect, ODBC_BRIDGE_DRIVER};
pub use index_lookup::check_index_exists;
pub use registry::{create_dialect, vendor_ids};
