//! Weapons and form lists.

use serde::{Deserialize, Serialize};

use super::RecordId;

/// A weapon; staves carry their spell as an enchantment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub id: RecordId,
    pub editor_id: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub keywords: Vec<RecordId>,
    pub object_effect: Option<RecordId>,
}

impl Weapon {
    pub fn new(id: RecordId, editor_id: impl Into<String>) -> Self {
        Self {
            id,
            editor_id: Some(editor_id.into()),
            name: None,
            keywords: Vec::new(),
            object_effect: None,
        }
    }

    /// Check if the weapon carries a keyword.
    pub fn has_keyword(&self, keyword: &RecordId) -> bool {
        self.keywords.contains(keyword)
    }
}

/// An ordered list of record references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormList {
    pub id: RecordId,
    pub editor_id: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub items: Vec<RecordId>,
}

impl FormList {
    pub fn new(id: RecordId, editor_id: impl Into<String>) -> Self {
        Self {
            id,
            editor_id: Some(editor_id.into()),
            name: None,
            items: Vec::new(),
        }
    }

    /// Check if the list contains a record.
    pub fn contains(&self, item: &RecordId) -> bool {
        self.items.contains(item)
    }

    /// Append a record unless it is already listed.
    ///
    /// Returns true if the record was added.
    pub fn add_unique(&mut self, item: RecordId) -> bool {
        if self.contains(&item) {
            false
        } else {
            self.items.push(item);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weapon_keywords() {
        let staff_keyword = RecordId::new("Skyrim.esm", 0x01E716);
        let mut staff = Weapon::new(RecordId::new("Skyrim.esm", 0x29B6C), "StaffFireball");
        staff.keywords.push(staff_keyword.clone());

        assert!(staff.has_keyword(&staff_keyword));
    }

    #[test]
    fn test_form_list_add_unique() {
        let mut list = FormList::new(RecordId::new("Patch.esp", 0x800), "_MDT_List");
        let spell = RecordId::new("Skyrim.esm", 0x1C789);

        assert!(list.add_unique(spell.clone()));
        assert!(!list.add_unique(spell.clone()));
        assert_eq!(list.items, vec![spell]);
    }
}
