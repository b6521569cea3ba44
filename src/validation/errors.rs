//! Validation error types
//!
//! Two levels: a table-level error for callers that only need "the scheme
//! is invalid", and a nested attribute-level cause carrying the specific
//! reason. The cause stays reachable through `std::error::Error::source`,
//! so nothing is lost between the two.

use thiserror::Error;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Reason a single attribute is unacceptable.
///
/// Never surfaced at top level; always nested inside
/// [`ValidationError::InvalidTableAttributes`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributeError {
    #[error("attribute name {0:?} is not a legal storage name")]
    IllegalName(String),

    #[error("attribute name {0:?} is declared more than once")]
    DuplicateName(String),

    #[error("attribute {name:?} references unknown data type {type_name:?}")]
    UnknownType { name: String, type_name: String },
}

/// Validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required input was not supplied by the caller. A programming
    /// error on the calling side, distinct from the domain failures below.
    #[error("required argument '{0}' was not supplied")]
    MissingArgument(&'static str),

    /// The table name cannot serve as a storage file name.
    #[error("table name {0:?} is not a legal storage name")]
    InvalidTableName(String),

    /// The attribute list as a whole is unacceptable: empty, or containing
    /// an attribute that fails one of the per-attribute rules.
    #[error("table {table:?} has an invalid attribute list")]
    InvalidTableAttributes {
        table: String,
        #[source]
        cause: Option<AttributeError>,
    },
}

impl ValidationError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MissingArgument(_) => "FLATDB_MISSING_ARGUMENT",
            ValidationError::InvalidTableName(_) => "FLATDB_INVALID_TABLE_NAME",
            ValidationError::InvalidTableAttributes { .. } => "FLATDB_INVALID_TABLE_ATTRIBUTES",
        }
    }

    /// Returns the attribute-level cause, if any.
    pub fn attribute_cause(&self) -> Option<&AttributeError> {
        match self {
            ValidationError::InvalidTableAttributes { cause, .. } => cause.as_ref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(
            ValidationError::MissingArgument("scheme").code(),
            "FLATDB_MISSING_ARGUMENT"
        );
        assert_eq!(
            ValidationError::InvalidTableName("a/b".into()).code(),
            "FLATDB_INVALID_TABLE_NAME"
        );
        let err = ValidationError::InvalidTableAttributes {
            table: "users".into(),
            cause: None,
        };
        assert_eq!(err.code(), "FLATDB_INVALID_TABLE_ATTRIBUTES");
    }

    #[test]
    fn test_cause_is_reachable_through_source() {
        let err = ValidationError::InvalidTableAttributes {
            table: "users".into(),
            cause: Some(AttributeError::DuplicateName("id".into())),
        };
        let source = err.source().expect("cause must be chained");
        assert!(source.to_string().contains("id"));
        assert_eq!(
            err.attribute_cause(),
            Some(&AttributeError::DuplicateName("id".into()))
        );
    }

    #[test]
    fn test_empty_attribute_list_has_no_cause() {
        let err = ValidationError::InvalidTableAttributes {
            table: "users".into(),
            cause: None,
        };
        assert!(err.source().is_none());
        assert!(err.attribute_cause().is_none());
    }

    #[test]
    fn test_display_names_the_offender() {
        let err = AttributeError::UnknownType {
            name: "age".into(),
            type_name: "testType".into(),
        };
        let text = err.to_string();
        assert!(text.contains("age"));
        assert!(text.contains("testType"));
    }
}
