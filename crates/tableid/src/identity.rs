use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use tableid_ast::{AstNode, Identifier, QueryWithTableAndOutput};
use tracing::trace;
use uuid::Uuid;

use crate::alias::DatabaseAndTableWithAlias;
use crate::errors::{Result, TableIdentityError, logical};
use crate::quote::quote_if_needed;

/// Identifies a table or view, either by name or by the UUID assigned to it
/// at creation.
///
/// Identities are compared in two strata. Identities without a UUID compare by
/// `(database, table)` and always sort before identities with a UUID, which
/// compare by UUID alone. Two identities with the same UUID are equal even if
/// their names differ, e.g. before and after a rename.
///
/// The table name is never empty except for the unset identity returned by
/// [`TableIdentity::empty`]. Accessors on the unset identity return a logical
/// error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "SerializedTableIdentity", into = "SerializedTableIdentity")]
pub struct TableIdentity {
    /// Empty if no database was specified.
    database_name: String,
    table_name: String,
    /// Nil if the table hasn't been assigned a UUID.
    uuid: Uuid,
}

impl TableIdentity {
    /// Create a name-identified table identity.
    pub fn new(database: impl Into<String>, table: impl Into<String>) -> Result<Self> {
        Self::from_parts(database.into(), table.into(), Uuid::nil())
    }

    /// The unset identity, used as a placeholder before a table is resolved.
    pub fn empty() -> Self {
        TableIdentity {
            database_name: String::new(),
            table_name: String::new(),
            uuid: Uuid::nil(),
        }
    }

    pub fn from_query(query: &QueryWithTableAndOutput) -> Result<Self> {
        Self::from_parts(query.database.clone(), query.table.clone(), query.uuid)
    }

    pub fn from_identifier(identifier: &Identifier) -> Result<Self> {
        let resolved = DatabaseAndTableWithAlias::from_identifier(identifier)?;
        Self::from_parts(resolved.database, resolved.table, resolved.uuid)
    }

    /// Extract the identity of the table an AST node refers to.
    ///
    /// Only identifiers and single table queries refer to a table, any other
    /// node is a logical error.
    pub fn from_ast(node: &AstNode) -> Result<Self> {
        trace!(kind = node.kind(), "table identity from ast");
        match node {
            AstNode::Identifier(identifier) => Self::from_identifier(identifier),
            AstNode::QueryWithTableAndOutput(query) => Self::from_query(query),
            other => Err(logical!("Unexpected AST: {}", other.kind())),
        }
    }

    fn from_parts(database_name: String, table_name: String, uuid: Uuid) -> Result<Self> {
        let id = TableIdentity {
            database_name,
            table_name,
            uuid,
        };
        id.assert_not_empty()?;
        Ok(id)
    }

    /// Returns a new identity with the given UUID, keeping the names.
    pub fn with_uuid(self, uuid: Uuid) -> Self {
        TableIdentity { uuid, ..self }
    }

    pub fn is_empty(&self) -> bool {
        self.table_name.is_empty()
    }

    pub fn has_uuid(&self) -> bool {
        !self.uuid.is_nil()
    }

    pub fn has_database(&self) -> bool {
        !self.database_name.is_empty()
    }

    /// The UUID, nil if none was assigned.
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    pub fn assert_not_empty(&self) -> Result<()> {
        if self.is_empty() {
            return Err(logical!("Table name cannot be empty"));
        }
        Ok(())
    }

    pub fn table_name(&self) -> Result<&str> {
        self.assert_not_empty()?;
        Ok(&self.table_name)
    }

    /// Errors with `UnknownDatabase` if the identity has no database.
    pub fn database_name(&self) -> Result<&str> {
        self.assert_not_empty()?;
        if self.database_name.is_empty() {
            return Err(TableIdentityError::UnknownDatabase(
                "Database name is empty".to_string(),
            ));
        }
        Ok(&self.database_name)
    }

    /// `database.table`, quoting each part if needed.
    pub fn full_table_name(&self) -> Result<String> {
        let database = self.database_name()?;
        Ok(format!(
            "{}.{}",
            quote_if_needed(database),
            quote_if_needed(&self.table_name)
        ))
    }

    /// Name suitable for logs and error messages. Doesn't require a database.
    pub fn name_for_logs(&self) -> Result<String> {
        self.assert_not_empty()?;

        let mut name = String::new();
        if self.has_database() {
            name.push_str(&quote_if_needed(&self.database_name));
            name.push('.');
        }
        name.push_str(&quote_if_needed(&self.table_name));
        if self.has_uuid() {
            name.push_str(&format!(" (UUID {})", self.uuid));
        }

        Ok(name)
    }

    /// Compare two identities, erroring if either is the unset identity.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering> {
        self.assert_not_empty()?;
        other.assert_not_empty()?;
        Ok(self.cmp_not_empty(other))
    }

    fn cmp_not_empty(&self, other: &Self) -> Ordering {
        match (self.has_uuid(), other.has_uuid()) {
            (false, false) => (&self.database_name, &self.table_name)
                .cmp(&(&other.database_name, &other.table_name)),
            (true, true) => self.uuid.cmp(&other.uuid),
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater,
        }
    }
}

impl TryFrom<&AstNode> for TableIdentity {
    type Error = TableIdentityError;

    fn try_from(node: &AstNode) -> Result<Self> {
        Self::from_ast(node)
    }
}

impl fmt::Display for TableIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name_for_logs() {
            Ok(name) => write!(f, "{name}"),
            Err(_) => write!(f, "<empty>"),
        }
    }
}

impl Ord for TableIdentity {
    /// The unset identity sorts first. Use `try_cmp` to reject it instead.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.cmp_not_empty(other),
        }
    }
}

impl PartialOrd for TableIdentity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for TableIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TableIdentity {}

impl Hash for TableIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.is_empty() {
            return;
        }
        if self.has_uuid() {
            self.uuid.hash(state);
        } else {
            self.database_name.hash(state);
            self.table_name.hash(state);
        }
    }
}

#[derive(Serialize, Deserialize)]
struct SerializedTableIdentity {
    #[serde(default)]
    database: String,
    table: String,
    #[serde(default)]
    uuid: Uuid,
}

impl TryFrom<SerializedTableIdentity> for TableIdentity {
    type Error = TableIdentityError;

    fn try_from(value: SerializedTableIdentity) -> Result<Self> {
        Self::from_parts(value.database, value.table, value.uuid)
    }
}

impl From<TableIdentity> for SerializedTableIdentity {
    fn from(value: TableIdentity) -> Self {
        SerializedTableIdentity {
            database: value.database_name,
            table: value.table_name,
            uuid: value.uuid,
        }
    }
}
