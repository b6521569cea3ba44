//! Descriptive records for databases, tables, and rows
//!
//! Value objects built by the calling layers for each request. The
//! validation engine neither stores nor mutates them; the persistence and
//! service layers move them around as JSON.

use serde::{Deserialize, Serialize};

/// A named column definition referencing a data type by name.
///
/// The type name is resolved against the registry at validation time, not
/// at construction. Uniqueness inside a scheme is judged by name alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    /// Registry key of the column's data type.
    #[serde(rename = "type")]
    pub type_name: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// A proposed table structure, not yet tied to stored data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableScheme {
    pub name: String,
    pub attributes: Vec<Attribute>,
}

impl TableScheme {
    pub fn new(name: impl Into<String>, attributes: Vec<Attribute>) -> Self {
        Self {
            name: name.into(),
            attributes,
        }
    }
}

/// An accepted table structure, the reference for row-fit checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    pub attributes: Vec<Attribute>,
}

impl Table {
    pub fn new(name: impl Into<String>, attributes: Vec<Attribute>) -> Self {
        Self {
            name: name.into(),
            attributes,
        }
    }
}

/// An accepted scheme becomes a table unchanged.
impl From<TableScheme> for Table {
    fn from(scheme: TableScheme) -> Self {
        Self {
            name: scheme.name,
            attributes: scheme.attributes,
        }
    }
}

/// An ordered list of cell values; position `i` corresponds to attribute
/// `i` of the table the row is checked against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub values: Vec<String>,
}

impl Row {
    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A database: a name plus its tables.
///
/// The name doubles as the storage directory name, which is why it is held
/// to the same legality rule as table names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Database {
    pub name: String,
    pub tables: Vec<Table>,
}

impl Database {
    pub fn new(name: impl Into<String>, tables: Vec<Table>) -> Self {
        Self {
            name: name.into(),
            tables,
        }
    }

    /// Looks up a table by name.
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name == name)
    }
}
