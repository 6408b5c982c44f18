//! Graph synthesis - building each item's derived records from its templates.
//!
//! Synthesizers only write to a [`Draft`](crate::output::Draft); committing is left to
//! the pipeline so a rejected item never reaches the output.

mod scroll;
mod staff;

pub use scroll::*;
pub use staff::*;

/// Placeholder in template display names, replaced with the source behavior's name.
pub const NAME_PLACEHOLDER: &str = "X";

/// Placeholder in template descriptions, replaced with the source behavior's name.
pub const DESCRIPTION_PLACEHOLDER: &str = "<Spell>";

/// Label used for scrolls without a display name.
pub const GENERIC_SCROLL_LABEL: &str = "Some Generic Spell";

/// Condition tabs exposed by a spell-cost perk entry.
pub const COST_ENTRY_TAB_COUNT: u8 = 2;

/// Condition tabs exposed by a magnitude or duration perk entry.
pub const SCALE_ENTRY_TAB_COUNT: u8 = 3;

/// A display name with its spaces removed, for use inside editor IDs.
pub fn compact_name(name: &str) -> String {
    name.chars().filter(|c| *c != ' ').collect()
}

/// Replace every occurrence of `placeholder` in an optional text.
pub fn fill_placeholder(text: Option<&str>, placeholder: &str, value: &str) -> Option<String> {
    text.map(|text| text.replace(placeholder, value))
}

/// The spell label of a scroll: its name without the first two words.
///
/// "Scroll of Fire Bolt" becomes "Fire Bolt".
pub fn scroll_label(name: Option<&str>) -> String {
    match name {
        Some(name) => name.split(' ').skip(2).collect::<Vec<_>>().join(" "),
        None => GENERIC_SCROLL_LABEL.to_string(),
    }
}

/// Free casts granted by a scroll, by the minimum skill level of its effect.
pub fn charges_for(minimum_skill_level: u32) -> i32 {
    match minimum_skill_level {
        0..=24 => 5,
        25..=49 => 4,
        50..=74 => 3,
        75..=99 => 2,
        _ => 1,
    }
}
