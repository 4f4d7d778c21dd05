#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableIdentityError {
    /// A caller broke a contract, e.g. used an unset identity.
    #[error("logical error: {0}")]
    Logical(String),

    /// No database was specified and none could be inferred.
    #[error("unknown database: {0}")]
    UnknownDatabase(String),
}

impl TableIdentityError {
    pub fn is_logical(&self) -> bool {
        matches!(self, TableIdentityError::Logical(_))
    }

    pub fn is_unknown_database(&self) -> bool {
        matches!(self, TableIdentityError::UnknownDatabase(_))
    }
}

pub type Result<T, E = TableIdentityError> = std::result::Result<T, E>;

macro_rules! logical {
    ($($arg:tt)*) => {
        crate::errors::TableIdentityError::Logical(std::format!($($arg)*))
    };
}
pub(crate) use logical;
