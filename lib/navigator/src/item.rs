//! Result items and their selection actions.

use failure::Fail;
use std::str::FromStr;



// ==============
// === Action ===
// ==============

/// Error raised when an action marker has an unknown value.
#[derive(Clone,Debug,Fail)]
#[fail(display="Unknown item action: {:?}.", _0)]
pub struct UnknownAction(pub String);

/// What happens when an item gets selected.
#[derive(Clone,Copy,Debug,Eq,PartialEq)]
pub enum Action {
    /// Follow the link found inside the item.
    OpenLink,
    /// Put the item's text into the search input.
    Autocomplete,
}

impl FromStr for Action {
    type Err = UnknownAction;
    fn from_str(s:&str) -> Result<Self,Self::Err> {
        match s {
            "open-link"    => Ok(Action::OpenLink),
            "autocomplete" => Ok(Action::Autocomplete),
            other          => Err(UnknownAction(other.into())),
        }
    }
}



// ============
// === Item ===
// ============

/// A single result item, as seen by the navigator.
#[derive(Clone,Debug)]
pub struct Item {
    text   : String,
    label  : String,
    action : Option<Action>,
}

impl Item {
    /// Constructor. `text` is the full text content of the item.
    pub fn new(text:impl Into<String>, action:Option<Action>) -> Self {
        let text  = text.into();
        let label = text.to_lowercase();
        Self {text,label,action}
    }

    /// The item's text content, as found in the page.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lowercase text used for matching.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Selection action, if the item declares a known one.
    pub fn action(&self) -> Option<Action> {
        self.action
    }
}



// =============
// === Tests ===
// =============
