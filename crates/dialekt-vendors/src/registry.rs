//! The vendor variant registry.
//!
//! An explicit, statically-built map from vendor id to factory, created
//! once behind a `LazyLock` and immutable afterwards. Concurrent first
//! callers race only on the lock's one-time initialization; nothing is
//! ever mutated after that.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::dialect::Dialect;
use crate::vendors::*;
use dialekt_core::{AccessType, Error, Result};

type VendorFactory = fn(AccessType) -> Box<dyn Dialect>;

macro_rules! register {
    ($map:ident, $($id:literal => $ty:ident),+ $(,)?) => {
        $(
            $map.insert($id, (|access| Box::new($ty::new(access)) as Box<dyn Dialect>) as VendorFactory);
        )+
    };
}

static REGISTRY: LazyLock<BTreeMap<&'static str, VendorFactory>> = LazyLock::new(|| {
    let mut map: BTreeMap<&'static str, VendorFactory> = BTreeMap::new();
    register!(map,
        "as400" => As400,
        "cache" => Cache,
        "cubrid" => Cubrid,
        "db2" => Db2,
        "derby" => Derby,
        "exasol" => Exasol,
        "firebird" => Firebird,
        "generic" => Generic,
        "greenplum" => Greenplum,
        "h2" => H2,
        "hana" => Hana,
        "hypersonic" => Hypersonic,
        "infinidb" => InfiniDb,
        "infobright" => Infobright,
        "informix" => Informix,
        "ingres" => Ingres,
        "interbase" => Interbase,
        "kingbase" => KingbaseEs,
        "luciddb" => LucidDb,
        "mariadb" => MariaDb,
        "maxdb" => MaxDb,
        "monetdb" => MonetDb,
        "msaccess" => MsAccess,
        "mssql" => Mssql,
        "mssql-native" => MssqlNative,
        "mysql" => MySql,
        "netezza" => Netezza,
        "oracle" => Oracle,
        "postgres" => Postgres,
        "redshift" => Redshift,
        "snowflake" => Snowflake,
        "sqlite" => Sqlite,
        "sybase" => Sybase,
        "sybase-iq" => SybaseIq,
        "teradata" => Teradata,
        "vectorwise" => Vectorwise,
        "vertica" => Vertica,
        "xugu" => Xugu,
    );
    tracing::debug!(vendors = map.len(), "dialect registry built");
    map
});

/// Create the dialect registered under `id` for the given access type.
pub fn create_dialect(id: &str, access: AccessType) -> Result<Box<dyn Dialect>> {
    match REGISTRY.get(id) {
        Some(make) => {
            tracing::debug!(vendor = id, access = %access, "dialect created");
            Ok(make(access))
        }
        None => Err(Error::UnknownVendor { id: id.to_string() }),
    }
}

/// Every registered vendor id, sorted.
pub fn vendor_ids() -> Vec<&'static str> {
    REGISTRY.keys().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_id_creates_its_own_vendor() {
        for id in vendor_ids() {
            let dialect = create_dialect(id, AccessType::Native).unwrap();
            assert_eq!(dialect.vendor_id(), id, "factory mismatch for {id}");
        }
    }

    #[test]
    fn test_unknown_vendor_is_an_error() {
        let err = match create_dialect("hal9000", AccessType::Native) {
            Ok(_) => panic!("expected an error for an unknown vendor"),
            Err(e) => e,
        };
        assert!(matches!(err, Error::UnknownVendor { .. }));
    }

    #[test]
    fn test_registry_size() {
        assert_eq!(vendor_ids().len(), 38);
    }

    #[test]
    fn test_ids_are_sorted() {
        let ids = vendor_ids();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }
}
