//! Record definitions for the source catalog and the derived output.

mod items;
mod magic_effect;
mod mask;
mod perk;
mod script;
mod spell;

pub use items::*;
pub use magic_effect::*;
pub use mask::*;
pub use perk::*;
pub use script::*;
pub use spell::*;

use serde::{Deserialize, Serialize};

/// Identifier of a data layer (a plugin file in load order).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LayerId(pub String);

impl LayerId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a record: the layer that first defined it plus a local id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId {
    pub layer: LayerId,
    pub local: u32,
}

impl RecordId {
    /// Create a record ID in the given layer.
    pub fn new(layer: impl Into<String>, local: u32) -> Self {
        Self {
            layer: LayerId::new(layer),
            local,
        }
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:06X}:{}", self.local, self.layer)
    }
}

/// A record identity fixed at compile time, e.g. a base-game keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KnownRecord {
    pub layer: &'static str,
    pub local: u32,
}

impl KnownRecord {
    pub const fn new(layer: &'static str, local: u32) -> Self {
        Self { layer, local }
    }

    /// Convert into an owned record ID.
    pub fn id(&self) -> RecordId {
        RecordId::new(self.layer, self.local)
    }

    /// Check whether a record ID refers to this known record.
    pub fn is(&self, id: &RecordId) -> bool {
        id.local == self.local && id.layer.as_str() == self.layer
    }
}

/// Kinds of records the catalog stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    Weapon,
    Enchantment,
    MagicEffect,
    Spell,
    Scroll,
    Perk,
    FormList,
}

/// Any record in the catalog or the output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Record {
    Weapon(Weapon),
    Enchantment(Enchantment),
    MagicEffect(MagicEffect),
    Spell(Spell),
    Scroll(Scroll),
    Perk(Perk),
    FormList(FormList),
}

/// Header access shared by every record struct.
pub trait RecordData: Clone + Into<Record> {
    const KIND: RecordKind;

    fn id(&self) -> &RecordId;

    fn editor_id(&self) -> Option<&str>;

    fn name(&self) -> Option<&str>;

    /// Give the record a new identity and editor ID, keeping all other fields.
    fn reidentify(&mut self, id: RecordId, editor_id: String);

    /// Borrow the record out of the enum if it is of this kind.
    fn from_record(record: &Record) -> Option<&Self>;
}

macro_rules! record_data {
    ($($kind:ident),* $(,)?) => {
        $(
            impl RecordData for $kind {
                const KIND: RecordKind = RecordKind::$kind;

                fn id(&self) -> &RecordId {
                    &self.id
                }

                fn editor_id(&self) -> Option<&str> {
                    self.editor_id.as_deref()
                }

                fn name(&self) -> Option<&str> {
                    self.name.as_deref()
                }

                fn reidentify(&mut self, id: RecordId, editor_id: String) {
                    self.id = id;
                    self.editor_id = Some(editor_id);
                }

                fn from_record(record: &Record) -> Option<&Self> {
                    match record {
                        Record::$kind(inner) => Some(inner),
                        _ => None,
                    }
                }
            }

            impl From<$kind> for Record {
                fn from(record: $kind) -> Self {
                    Record::$kind(record)
                }
            }
        )*

        impl Record {
            /// Get the record's identity.
            pub fn id(&self) -> &RecordId {
                match self {
                    $(Record::$kind(inner) => &inner.id,)*
                }
            }

            /// Get the record's editor ID.
            pub fn editor_id(&self) -> Option<&str> {
                match self {
                    $(Record::$kind(inner) => inner.editor_id.as_deref(),)*
                }
            }

            /// Get the record's display name.
            pub fn name(&self) -> Option<&str> {
                match self {
                    $(Record::$kind(inner) => inner.name.as_deref(),)*
                }
            }

            /// Get the record's kind.
            pub fn kind(&self) -> RecordKind {
                match self {
                    $(Record::$kind(_) => RecordKind::$kind,)*
                }
            }
        }
    };
}

record_data!(Weapon, Enchantment, MagicEffect, Spell, Scroll, Perk, FormList);

impl Record {
    /// Downcast to a concrete record type.
    pub fn as_kind<T: RecordData>(&self) -> Option<&T> {
        T::from_record(self)
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.editor_id() {
            Some(editor_id) => write!(f, "{:?} {} <{}>", self.kind(), editor_id, self.id()),
            None => write!(f, "{:?} <{}>", self.kind(), self.id()),
        }
    }
}
