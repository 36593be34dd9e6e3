//! This module provides the widget configuration.

use crate::constants;
use crate::error::Error;

use autosearch_navigator::Shortcut;
use serde::Deserialize;



// ==============
// === Config ===
// ==============

/// Markup contract and tunables of the widget. Every field falls back to its default when
/// absent from the JSON form.
#[derive(Clone,Debug,Deserialize,PartialEq)]
#[serde(default)]
pub struct Config {
    /// Attribute holding the role of an element.
    pub element_attribute     : String,
    /// Attribute holding the action of a result item.
    pub action_attribute      : String,
    /// Attribute of the form opting out of native submission.
    pub form_submit_attribute : String,
    /// Class marking the keyboard-focused item.
    pub focused_class         : String,
    /// Margin kept below the focused item while scrolling, in `rem`.
    pub scroll_margin_rem     : f64,
    /// Key focusing the input when pressed with Ctrl or Cmd.
    pub shortcut_key          : String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            element_attribute     : constants::ELEMENT_ATTRIBUTE.into(),
            action_attribute      : constants::ACTION_ATTRIBUTE.into(),
            form_submit_attribute : constants::FORM_SUBMIT_ATTRIBUTE.into(),
            focused_class         : constants::FOCUSED_CLASS.into(),
            scroll_margin_rem     : constants::SCROLL_MARGIN_REM,
            shortcut_key          : constants::SHORTCUT_KEY.into(),
        }
    }
}

impl Config {
    /// Parse the JSON form, e.g. `{"focused_class":"is-active"}`.
    pub fn from_json(json:&str) -> Result<Self,Error> {
        serde_json::from_str(json).map_err(|error| Error::InvalidConfig(error.to_string()))
    }

    /// CSS selector of elements having the given role.
    pub fn role_selector(&self, role:&str) -> String {
        autosearch_system_web::attribute_selector(&self.element_attribute,role)
    }

    /// The shortcut focusing the input.
    pub fn shortcut(&self) -> Shortcut {
        Shortcut::new(self.shortcut_key.as_str())
    }
}



// =============
// === Tests ===
// =============
