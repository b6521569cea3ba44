//! Data type registry
//!
//! The mapping from type name to data type is fixed at construction and
//! shared read-only by every validation call. Keys are case-sensitive.

use std::collections::HashMap;

use super::datatype::DataType;

/// Type names installed by default construction.
const BUILT_IN_TYPES: [(&str, DataType); 5] = [
    ("char", DataType::Char),
    ("integer", DataType::Int),
    ("double", DataType::Double),
    ("complexInteger", DataType::ComplexInt),
    ("complexDouble", DataType::ComplexDouble),
];

/// Immutable mapping from type name to data type.
///
/// Default construction is never empty. An explicit mapping may be, in
/// which case every lookup fails and no scheme or row can reference a type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTypeRegistry {
    types: HashMap<String, DataType>,
}

impl DataTypeRegistry {
    /// Creates a registry with the built-in type set.
    pub fn new() -> Self {
        Self {
            types: BUILT_IN_TYPES
                .iter()
                .map(|(name, data_type)| ((*name).to_string(), *data_type))
                .collect(),
        }
    }

    /// Creates a registry from an explicit mapping, for tests and external
    /// configuration.
    pub fn with_types(types: HashMap<String, DataType>) -> Self {
        Self { types }
    }

    /// Parses a registry from a JSON object mapping type names to data
    /// types, e.g. `{"text":"char","count":"int"}`.
    ///
    /// The caller owns reading the configuration file; this core performs
    /// no I/O.
    pub fn from_json(config: &str) -> serde_json::Result<Self> {
        let types: HashMap<String, DataType> = serde_json::from_str(config)?;
        Ok(Self { types })
    }

    /// Looks up a data type by name.
    pub fn get(&self, type_name: &str) -> Option<DataType> {
        self.types.get(type_name).copied()
    }

    /// Checks whether a type name is registered.
    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    /// Returns the registered type names.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    /// Returns the number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true when no types are registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for DataTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
