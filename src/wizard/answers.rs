//! Typed answer storage and the generic read/patch surface over it
//!
//! Each flow keeps its answers in plain structs of enums, sets and strings.
//! The controller and the front-end only see them through [`Answers`]:
//! `value(field)` reads a [`FieldValue`], `apply(field, edit)` writes one.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Deserializer};

/// Slider position used before the user touches a slider
pub const SLIDER_DEFAULT: u8 = 50;
pub const SLIDER_MAX: u8 = 100;

/// Placeholder shown for anything the user has not answered
pub const UNANSWERED: &str = "-";

/// An option list entry with a stable key and a display label
pub trait Choice: Copy + Eq + Ord + fmt::Debug + 'static {
    const ALL: &'static [Self];

    fn key(self) -> &'static str;

    fn label(self) -> &'static str;

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|choice| choice.key() == key)
    }
}

/// Key/label pair handed to renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption {
    pub key: &'static str,
    pub label: &'static str,
}

/// All options of a choice enum in declaration order
pub fn options_of<C: Choice>() -> Vec<ChoiceOption> {
    C::ALL
        .iter()
        .map(|choice| ChoiceOption {
            key: choice.key(),
            label: choice.label(),
        })
        .collect()
}

/// Declare an option enum together with its [`Choice`] table.
///
/// Keys double as the serde representation, so answers files use the same
/// strings the step rules compare against.
#[macro_export]
macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => ($key:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                #[serde(rename = $key)]
                $variant,
            )+
        }

        impl $crate::wizard::Choice for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn key(self) -> &'static str {
                match self {
                    $(Self::$variant => $key,)+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::wizard::Choice::label(*self))
            }
        }
    };
}

/// Read-only view of one field's current value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Single choice, holding the option key when one is selected
    Choice(Option<&'static str>),
    /// Multi-select, holding the selected option keys
    Many(Vec<&'static str>),
    Text(&'a str),
    Slider(u8),
}

impl FieldValue<'_> {
    /// Whether the field counts as answered for validation
    pub fn is_filled(&self) -> bool {
        match self {
            FieldValue::Choice(selected) => selected.is_some(),
            FieldValue::Many(keys) => !keys.is_empty(),
            FieldValue::Text(text) => !text.trim().is_empty(),
            FieldValue::Slider(_) => true,
        }
    }

    pub fn choice_key(&self) -> Option<&'static str> {
        match self {
            FieldValue::Choice(selected) => *selected,
            _ => None,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        match self {
            FieldValue::Many(keys) => keys.contains(&key),
            FieldValue::Choice(selected) => *selected == Some(key),
            _ => false,
        }
    }
}

/// A single field edit coming from the front-end
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Pick an option by key
    Select(String),
    /// Flip an option of a multi-select by key
    Toggle(String),
    Text(String),
    Slider(u8),
    Clear,
}

impl Edit {
    pub fn select(key: impl Into<String>) -> Self {
        Edit::Select(key.into())
    }

    pub fn toggle(key: impl Into<String>) -> Self {
        Edit::Toggle(key.into())
    }

    pub fn text(value: impl Into<String>) -> Self {
        Edit::Text(value.into())
    }
}

/// A batch of edits merged into the answers in one go
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch<F> {
    edits: Vec<(F, Edit)>,
}

impl<F> Patch<F> {
    pub fn new() -> Self {
        Self { edits: Vec::new() }
    }

    pub fn set(mut self, field: F, edit: Edit) -> Self {
        self.edits.push((field, edit));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn into_edits(self) -> Vec<(F, Edit)> {
        self.edits
    }
}

impl<F> Default for Patch<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> From<(F, Edit)> for Patch<F> {
    fn from(edit: (F, Edit)) -> Self {
        Self { edits: vec![edit] }
    }
}

/// Generic access to a flow's typed answers
pub trait Answers: Default + Clone + fmt::Debug {
    type Field: Copy + Eq + fmt::Debug + 'static;

    fn value(&self, field: Self::Field) -> FieldValue<'_>;

    /// Apply one edit. Returns `false` when the edit does not fit the field
    /// (unknown option key, text sent to a choice, ...), leaving it untouched.
    fn apply(&mut self, field: Self::Field, edit: Edit) -> bool;
}

pub fn choice_value<C: Choice>(slot: Option<C>) -> FieldValue<'static> {
    FieldValue::Choice(slot.map(C::key))
}

pub fn many_value<C: Choice>(set: &BTreeSet<C>) -> FieldValue<'static> {
    FieldValue::Many(set.iter().map(|choice| choice.key()).collect())
}

pub fn apply_choice<C: Choice>(slot: &mut Option<C>, edit: Edit) -> bool {
    match edit {
        Edit::Select(key) => match C::from_key(&key) {
            Some(choice) => {
                *slot = Some(choice);
                true
            }
            None => false,
        },
        Edit::Clear => {
            *slot = None;
            true
        }
        _ => false,
    }
}

pub fn apply_many<C: Choice>(set: &mut BTreeSet<C>, edit: Edit) -> bool {
    match edit {
        Edit::Toggle(key) => match C::from_key(&key) {
            Some(choice) => {
                if !set.remove(&choice) {
                    set.insert(choice);
                }
                true
            }
            None => false,
        },
        Edit::Select(key) => match C::from_key(&key) {
            Some(choice) => {
                set.insert(choice);
                true
            }
            None => false,
        },
        Edit::Clear => {
            set.clear();
            true
        }
        _ => false,
    }
}

pub fn apply_text(slot: &mut String, edit: Edit) -> bool {
    match edit {
        Edit::Text(value) => {
            *slot = value;
            true
        }
        Edit::Clear => {
            slot.clear();
            true
        }
        _ => false,
    }
}

/// Read a slider position from an answers file, clamped like a key press would be
pub fn deserialize_slider<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let position = u64::deserialize(deserializer)?;
    Ok(position.min(u64::from(SLIDER_MAX)) as u8)
}

pub fn apply_slider(slot: &mut u8, edit: Edit) -> bool {
    match edit {
        Edit::Slider(value) => {
            *slot = value.min(SLIDER_MAX);
            true
        }
        Edit::Clear => {
            *slot = SLIDER_DEFAULT;
            true
        }
        _ => false,
    }
}

/// Label of a selected option, or the unanswered placeholder
pub fn label_or_dash<C: Choice>(slot: Option<C>) -> String {
    slot.map(|choice| choice.label().to_string())
        .unwrap_or_else(|| UNANSWERED.to_string())
}

/// Comma-joined labels of a multi-select, or the unanswered placeholder
pub fn labels_or_dash<C: Choice>(set: &BTreeSet<C>) -> String {
    if set.is_empty() {
        UNANSWERED.to_string()
    } else {
        set.iter()
            .map(|choice| choice.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Trimmed free text, or the unanswered placeholder
pub fn text_or_dash(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        UNANSWERED.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::choice_enum! {
        enum Colour {
            Red => ("red", "Red"),
            Blue => ("blue", "Deep blue"),
        }
    }

    #[test]
    fn choice_lookup_by_key() {
        assert_eq!(Colour::from_key("blue"), Some(Colour::Blue));
        assert_eq!(Colour::from_key("green"), None);
        assert_eq!(Colour::Blue.to_string(), "Deep blue");
        assert_eq!(options_of::<Colour>().len(), 2);
    }

    #[test]
    fn choice_edits_reject_unknown_keys() {
        let mut slot = None;
        assert!(apply_choice::<Colour>(&mut slot, Edit::select("red")));
        assert_eq!(slot, Some(Colour::Red));
        assert!(!apply_choice::<Colour>(&mut slot, Edit::select("green")));
        assert_eq!(slot, Some(Colour::Red));
        assert!(!apply_choice::<Colour>(&mut slot, Edit::text("Red")));
        assert!(apply_choice::<Colour>(&mut slot, Edit::Clear));
        assert_eq!(slot, None);
    }

    #[test]
    fn toggles_flip_membership() {
        let mut set = BTreeSet::new();
        apply_many::<Colour>(&mut set, Edit::toggle("red"));
        apply_many::<Colour>(&mut set, Edit::toggle("blue"));
        apply_many::<Colour>(&mut set, Edit::toggle("red"));
        assert_eq!(many_value(&set), FieldValue::Many(vec!["blue"]));
        assert_eq!(labels_or_dash(&set), "Deep blue");
    }

    #[test]
    fn sliders_saturate_at_one_hundred() {
        let mut slider = SLIDER_DEFAULT;
        apply_slider(&mut slider, Edit::Slider(250));
        assert_eq!(slider, 100);
        apply_slider(&mut slider, Edit::Clear);
        assert_eq!(slider, SLIDER_DEFAULT);
    }

    #[test]
    fn blank_text_is_not_filled() {
        assert!(!FieldValue::Text("   ").is_filled());
        assert!(FieldValue::Text(" x ").is_filled());
        assert_eq!(text_or_dash("  "), UNANSWERED);
    }
}
