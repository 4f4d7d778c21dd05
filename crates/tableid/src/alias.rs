use tableid_ast::Identifier;
use uuid::Uuid;

use crate::errors::{Result, logical};

/// Database and table parts of a possibly qualified table identifier, along
/// with the alias it was given in the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatabaseAndTableWithAlias {
    /// Empty if the identifier wasn't qualified.
    pub database: String,
    pub table: String,
    /// Empty if no alias.
    pub alias: String,
    pub uuid: Uuid,
}

impl DatabaseAndTableWithAlias {
    /// Split an identifier into its database and table parts.
    ///
    /// Errors if the identifier has more than two parts, or none at all.
    pub fn from_identifier(identifier: &Identifier) -> Result<Self> {
        let (database, table) = match identifier.name.0.as_slice() {
            [table] => (String::new(), table.value.clone()),
            [database, table] => (database.value.clone(), table.value.clone()),
            _ => {
                return Err(logical!(
                    "Expected identifier of the form [database.]table, got '{}'",
                    identifier.name
                ));
            }
        };

        Ok(DatabaseAndTableWithAlias {
            database,
            table,
            alias: identifier
                .alias
                .as_ref()
                .map(|alias| alias.value.clone())
                .unwrap_or_default(),
            uuid: identifier.uuid,
        })
    }

    /// Like `from_identifier`, but an unqualified identifier is placed in the
    /// current database.
    pub fn from_identifier_with_database(
        identifier: &Identifier,
        current_database: &str,
    ) -> Result<Self> {
        let mut resolved = Self::from_identifier(identifier)?;
        if resolved.database.is_empty() {
            resolved.database = current_database.to_string();
        }
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use tableid_ast::{Ident, ObjectReference};

    use super::*;

    #[test]
    fn split_identifiers() {
        struct Test {
            parts: Vec<&'static str>,
            database: &'static str,
            table: &'static str,
        }

        let tests = vec![
            Test {
                parts: vec!["t1"],
                database: "",
                table: "t1",
            },
            Test {
                parts: vec!["db", "t1"],
                database: "db",
                table: "t1",
            },
        ];

        for test in tests {
            let ident = Identifier::new(ObjectReference::from_strings(test.parts));
            let got = DatabaseAndTableWithAlias::from_identifier(&ident).unwrap();
            assert_eq!(test.database, got.database);
            assert_eq!(test.table, got.table);
            assert_eq!("", got.alias);
            assert!(got.uuid.is_nil());
        }
    }

    #[test]
    fn carries_alias_and_uuid() {
        let uuid = Uuid::from_u128(42);
        let ident = Identifier::new(ObjectReference::from_strings(["db", "t1"]))
            .with_alias(Ident::new_unquoted("a"))
            .with_uuid(uuid);
        let got = DatabaseAndTableWithAlias::from_identifier(&ident).unwrap();
        assert_eq!("a", got.alias);
        assert_eq!(uuid, got.uuid);
    }

    #[test]
    fn too_many_parts() {
        let ident = Identifier::new(ObjectReference::from_strings(["a", "b", "c"]));
        let err = DatabaseAndTableWithAlias::from_identifier(&ident).unwrap_err();
        assert!(err.is_logical());

        let ident = Identifier::new(ObjectReference(Vec::new()));
        let err = DatabaseAndTableWithAlias::from_identifier(&ident).unwrap_err();
        assert!(err.is_logical());
    }

    #[test]
    fn fill_current_database() {
        let ident = Identifier::new(ObjectReference::from_strings(["t1"]));
        let got = DatabaseAndTableWithAlias::from_identifier_with_database(&ident, "default").unwrap();
        assert_eq!("default", got.database);

        let ident = Identifier::new(ObjectReference::from_strings(["db", "t1"]));
        let got = DatabaseAndTableWithAlias::from_identifier_with_database(&ident, "default").unwrap();
        assert_eq!("db", got.database);
    }
}
