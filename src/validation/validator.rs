//! Validation engine for names, table schemes, and rows
//!
//! Every create or update runs through these checks before the persistence
//! layer writes anything. The engine is a pure function of its inputs plus
//! the shared registry: no I/O, no logging, no retries, safe to call from
//! any number of threads at once.

use std::collections::HashSet;

use super::errors::{AttributeError, ValidationError, ValidationResult};
use super::registry::DataTypeRegistry;
use super::types::{Attribute, Row, Table, TableScheme};

/// Characters that cannot appear in database or table names.
///
/// Names become storage file names. This is the strictest common
/// filesystem set, enforced on every platform so that a name accepted on
/// one host is accepted on all of them.
const ILLEGAL_NAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Validation engine over an immutable data type registry.
///
/// Holds no state of its own; entities are checked and discarded.
pub struct DatabaseValidator<'a> {
    registry: &'a DataTypeRegistry,
}

impl<'a> DatabaseValidator<'a> {
    /// Creates a validator backed by the given registry.
    pub fn new(registry: &'a DataTypeRegistry) -> Self {
        Self { registry }
    }

    /// Checks whether a name can serve as a database name.
    ///
    /// An absent name is invalid, never an error: absence and illegality
    /// are the same answer to "can this become a file name".
    pub fn is_valid_database_name(&self, name: Option<&str>) -> bool {
        match name {
            Some(name) => is_legal_name(name),
            None => false,
        }
    }

    /// Checks a proposed table scheme.
    ///
    /// Rules, in the order they are applied:
    /// 1. the scheme must be supplied;
    /// 2. the table name must be a legal storage name;
    /// 3. the attribute list must be non-empty;
    /// 4. every attribute name must be a legal storage name;
    /// 5. attribute names must be unique (case-sensitive);
    /// 6. every attribute type must be registered.
    ///
    /// # Errors
    ///
    /// [`ValidationError::MissingArgument`] for rule 1,
    /// [`ValidationError::InvalidTableName`] for rule 2, and
    /// [`ValidationError::InvalidTableAttributes`] for rules 3-6 — without
    /// a cause for the empty list, with the attribute-level cause for
    /// rules 4-6.
    pub fn check_table_scheme(&self, scheme: Option<&TableScheme>) -> ValidationResult<()> {
        let scheme = scheme.ok_or(ValidationError::MissingArgument("scheme"))?;

        if !is_legal_name(&scheme.name) {
            return Err(ValidationError::InvalidTableName(scheme.name.clone()));
        }

        if scheme.attributes.is_empty() {
            return Err(ValidationError::InvalidTableAttributes {
                table: scheme.name.clone(),
                cause: None,
            });
        }

        if let Some(cause) = check_attributes(&scheme.attributes, self.registry) {
            return Err(ValidationError::InvalidTableAttributes {
                table: scheme.name.clone(),
                cause: Some(cause),
            });
        }

        Ok(())
    }

    /// Checks whether a row's values fit a table, position by position.
    ///
    /// Content mismatches are an expected outcome and come back as
    /// `false`: a wrong value count, a cell failing its type's rule, or a
    /// type name with no registered validator. Only an absent argument is
    /// an error.
    ///
    /// # Errors
    ///
    /// [`ValidationError::MissingArgument`] when `table` or `row` is
    /// absent.
    pub fn does_row_fit_table(
        &self,
        table: Option<&Table>,
        row: Option<&Row>,
    ) -> ValidationResult<bool> {
        let table = table.ok_or(ValidationError::MissingArgument("table"))?;
        let row = row.ok_or(ValidationError::MissingArgument("row"))?;

        if row.values.len() != table.attributes.len() {
            return Ok(false);
        }

        let fits = table
            .attributes
            .iter()
            .zip(&row.values)
            .all(
                |(attribute, value)| match self.registry.get(&attribute.type_name) {
                    Some(data_type) => data_type.is_valid_value(value),
                    None => false,
                },
            );

        Ok(fits)
    }

    /// Builds a row of per-type default values fitting the given table.
    ///
    /// Returns `None` when any attribute's type is not registered. A
    /// produced row always fits its table.
    pub fn default_row(&self, table: &Table) -> Option<Row> {
        let values = table
            .attributes
            .iter()
            .map(|attribute| {
                self.registry
                    .get(&attribute.type_name)
                    .map(|data_type| data_type.default_value().to_string())
            })
            .collect::<Option<Vec<_>>>()?;

        Some(Row::new(values))
    }
}

/// Returns true iff `name` is usable as a storage file name: not blank and
/// free of illegal characters.
fn is_legal_name(name: &str) -> bool {
    if name.trim().is_empty() {
        return false;
    }
    name.chars()
        .all(|c| !c.is_control() && !ILLEGAL_NAME_CHARS.contains(&c))
}

/// Applies the per-attribute rules as successive passes over the whole
/// list, so rule order decides which violation is reported when several
/// hold at once.
fn check_attributes(
    attributes: &[Attribute],
    registry: &DataTypeRegistry,
) -> Option<AttributeError> {
    for attribute in attributes {
        if !is_legal_name(&attribute.name) {
            return Some(AttributeError::IllegalName(attribute.name.clone()));
        }
    }

    let mut seen = HashSet::new();
    for attribute in attributes {
        if !seen.insert(attribute.name.as_str()) {
            return Some(AttributeError::DuplicateName(attribute.name.clone()));
        }
    }

    for attribute in attributes {
        if !registry.contains(&attribute.type_name) {
            return Some(AttributeError::UnknownType {
                name: attribute.name.clone(),
                type_name: attribute.type_name.clone(),
            });
        }
    }

    None
}
