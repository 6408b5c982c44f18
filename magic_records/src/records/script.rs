//! Script attachments on records.

use serde::{Deserialize, Serialize};

use super::RecordId;

/// The script adapter attached to a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptAdapter {
    pub version: i16,
    pub object_format: i16,
    #[serde(default)]
    pub scripts: Vec<ScriptEntry>,
}

impl ScriptAdapter {
    pub const VERSION: i16 = 5;
    pub const OBJECT_FORMAT: i16 = 2;

    /// Create an adapter holding a single script.
    pub fn with_script(script: ScriptEntry) -> Self {
        Self {
            version: Self::VERSION,
            object_format: Self::OBJECT_FORMAT,
            scripts: vec![script],
        }
    }
}

/// A script bound to a record, with its property values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptEntry {
    pub name: String,
    #[serde(default)]
    pub local: bool,
    #[serde(default)]
    pub properties: Vec<ScriptProperty>,
}

impl ScriptEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            local: false,
            properties: Vec::new(),
        }
    }

    pub fn with_property(mut self, property: ScriptProperty) -> Self {
        self.properties.push(property);
        self
    }

    /// Look up an object property by exact name.
    ///
    /// Returns `None` when no property has that name or the property does not hold
    /// an object reference. The inner option is the reference itself, which may be unset.
    pub fn object_property(&self, name: &str) -> Option<&Option<RecordId>> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .and_then(|p| match &p.value {
                PropertyValue::Object(target) => Some(target),
                _ => None,
            })
    }

    /// Mutable variant of [`ScriptEntry::object_property`].
    pub fn object_property_mut(&mut self, name: &str) -> Option<&mut Option<RecordId>> {
        self.properties
            .iter_mut()
            .find(|p| p.name == name)
            .and_then(|p| match &mut p.value {
                PropertyValue::Object(target) => Some(target),
                _ => None,
            })
    }
}

/// A named script property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptProperty {
    pub name: String,
    #[serde(default)]
    pub edited: bool,
    pub value: PropertyValue,
}

impl ScriptProperty {
    /// An edited object property.
    pub fn object(name: impl Into<String>, target: RecordId) -> Self {
        Self {
            name: name.into(),
            edited: true,
            value: PropertyValue::Object(Some(target)),
        }
    }

    /// An edited integer property.
    pub fn int(name: impl Into<String>, value: i32) -> Self {
        Self {
            name: name.into(),
            edited: true,
            value: PropertyValue::Int(value),
        }
    }
}

/// Values a script property can hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    Object(Option<RecordId>),
    Int(i32),
    Float(f32),
    Bool(bool),
    String(String),
}
