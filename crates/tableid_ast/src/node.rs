use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Ident, ObjectReference};

/// A bare, possibly qualified, table identifier with an optional alias.
///
/// `uuid` is nil unless the identifier was written with an explicit UUID
/// clause (e.g. when replaying catalog metadata).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: ObjectReference,
    pub alias: Option<Ident>,
    pub uuid: Uuid,
}

impl Identifier {
    pub fn new(name: ObjectReference) -> Self {
        Identifier {
            name,
            alias: None,
            uuid: Uuid::nil(),
        }
    }

    pub fn with_alias(mut self, alias: Ident) -> Self {
        self.alias = Some(alias);
        self
    }

    pub fn with_uuid(mut self, uuid: Uuid) -> Self {
        self.uuid = uuid;
        self
    }
}

/// Common fields for queries that operate on a single table and may write
/// output, e.g. `CREATE TABLE`, `DROP TABLE`, `SHOW CREATE TABLE`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryWithTableAndOutput {
    /// Empty when the query didn't name a database.
    pub database: String,
    pub table: String,
    pub uuid: Uuid,
}

impl QueryWithTableAndOutput {
    pub fn new(database: impl Into<String>, table: impl Into<String>) -> Self {
        QueryWithTableAndOutput {
            database: database.into(),
            table: table.into(),
            uuid: Uuid::nil(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AstNode {
    Identifier(Identifier),
    QueryWithTableAndOutput(QueryWithTableAndOutput),
    Literal(String),
    Function { name: Ident, args: Vec<AstNode> },
}

impl AstNode {
    /// Name of the node variant, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            AstNode::Identifier(_) => "identifier",
            AstNode::QueryWithTableAndOutput(_) => "query with table",
            AstNode::Literal(_) => "literal",
            AstNode::Function { .. } => "function",
        }
    }
}

impl From<Identifier> for AstNode {
    fn from(value: Identifier) -> Self {
        AstNode::Identifier(value)
    }
}

impl From<QueryWithTableAndOutput> for AstNode {
    fn from(value: QueryWithTableAndOutput) -> Self {
        AstNode::QueryWithTableAndOutput(value)
    }
}
