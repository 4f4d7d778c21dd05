//! Identities for tables and views.
//!
//! A [`TableIdentity`] names a table by `(database, table)` and, once the
//! catalog has assigned one, a UUID. Identities are ordered so they can be
//! used as keys when tracking dependencies between tables and views.
pub mod alias;
pub mod dependencies;
pub mod errors;
pub mod identity;
pub mod quote;

pub use alias::DatabaseAndTableWithAlias;
pub use dependencies::ViewDependencies;
pub use errors::{Result, TableIdentityError};
pub use identity::TableIdentity;
