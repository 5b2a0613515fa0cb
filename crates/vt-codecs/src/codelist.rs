//! Code lists
//!
//! A code list maps short wire codes (`"220"`) to their meaning
//! (`"Order"`). Lists are configured in YAML and turned into reversible
//! keyed-mapping transformers, so unknown codes and meanings resolve to a
//! configured default instead of failing.
//!
//! ```yaml
//! code_lists:
//!   - name: document_type
//!     default_value: Unknown
//!     default_code: "000"
//!     entries:
//!       - code: "220"
//!         value: Order
//! ```

use crate::adapters::{ValueAs, value_string};
use crate::value::Value;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info};
use vt_core::{
    Compose, Flip, ReversibleDictionary, compose, flip, lift_dictionary_reversible,
};

/// One code and its meaning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeEntry {
    /// Wire code
    pub code: String,

    /// Meaning of the code
    pub value: String,
}

/// A named table of codes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeList {
    /// Name/identifier of the code list
    pub name: String,

    /// Description for documentation
    #[serde(default)]
    pub description: Option<String>,

    /// Codes in declaration order
    #[serde(default)]
    pub entries: Vec<CodeEntry>,

    /// Meaning produced for unknown codes
    #[serde(default)]
    pub default_value: String,

    /// Code produced for unknown meanings
    #[serde(default)]
    pub default_code: String,
}

/// `String <-> String` code list transformer
pub type CodeListTransformer = ReversibleDictionary<String, String, Error>;

/// `Value <-> Value` code list transformer over string values
pub type CodeListValueCodec =
    Compose<ValueAs<String>, Compose<CodeListTransformer, Flip<ValueAs<String>>>>;

impl CodeList {
    /// Create a new empty code list
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            entries: Vec::new(),
            default_value: String::new(),
            default_code: String::new(),
        }
    }

    /// Add a code
    #[must_use]
    pub fn with_entry(mut self, code: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push(CodeEntry {
            code: code.into(),
            value: value.into(),
        });
        self
    }

    /// Set the defaults used for unknown codes and meanings
    #[must_use]
    pub fn with_defaults(
        mut self,
        default_value: impl Into<String>,
        default_code: impl Into<String>,
    ) -> Self {
        self.default_value = default_value.into();
        self.default_code = default_code.into();
        self
    }

    /// Set description
    #[must_use]
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Check the list is usable: a non-empty name and no repeated code.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::config("code list name must not be empty"));
        }
        let mut seen = HashSet::new();
        for entry in &self.entries {
            if !seen.insert(entry.code.as_str()) {
                return Err(Error::config(format!(
                    "duplicate code '{}' in code list '{}'",
                    entry.code, self.name
                )));
            }
        }
        Ok(())
    }

    /// Build the reversible lookup: code to meaning forwards, meaning to code
    /// backwards. When two codes share a meaning, the later one wins the
    /// reverse lookup.
    #[must_use]
    pub fn transformer(&self) -> CodeListTransformer {
        debug!(
            "Building transformer for code list {} ({} entries)",
            self.name,
            self.entries.len()
        );
        lift_dictionary_reversible(
            self.entries
                .iter()
                .map(|entry| (entry.code.clone(), entry.value.clone())),
            self.default_value.clone(),
            self.default_code.clone(),
        )
    }

    /// The lookup lifted to string [`Value`]s
    #[must_use]
    pub fn value_codec(&self) -> CodeListValueCodec {
        compose(value_string(), compose(self.transformer(), flip(value_string())))
    }
}

/// A collection of code lists loaded from one document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeListSet {
    /// Lists in declaration order
    #[serde(default)]
    pub code_lists: Vec<CodeList>,
}

impl CodeListSet {
    /// Parse and validate a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the YAML is malformed, a list is invalid,
    /// or two lists share a name.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let set: CodeListSet = serde_yaml::from_str(yaml)
            .map_err(|error| Error::config(format!("invalid code list document: {error}")))?;
        set.validate()?;
        info!("Loaded {} code lists", set.code_lists.len());
        Ok(set)
    }

    /// Validate every list and reject repeated names.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        let mut names = HashSet::new();
        for list in &self.code_lists {
            list.validate()?;
            if !names.insert(list.name.as_str()) {
                return Err(Error::config(format!(
                    "duplicate code list name '{}'",
                    list.name
                )));
            }
        }
        Ok(())
    }

    /// Get a code list by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CodeList> {
        self.code_lists.iter().find(|list| list.name == name)
    }

    /// Iterate over the lists
    pub fn iter(&self) -> impl Iterator<Item = &CodeList> {
        self.code_lists.iter()
    }

    /// Number of lists
    #[must_use]
    pub fn len(&self) -> usize {
        self.code_lists.len()
    }

    /// Whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.code_lists.is_empty()
    }
}

/// Turn a map-shaped [`Value`] produced elsewhere back into a code list.
impl TryFrom<Value> for CodeList {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        let tree = serde_yaml::to_value(&value)
            .map_err(|error| Error::config(format!("cannot convert code list: {error}")))?;
        let list: CodeList = serde_yaml::from_value(tree)
            .map_err(|error| Error::config(format!("invalid code list: {error}")))?;
        list.validate()?;
        Ok(list)
    }
}
