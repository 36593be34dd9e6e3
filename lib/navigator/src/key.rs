//! Keys the widget reacts to.



// ===========
// === Key ===
// ===========

/// A key, as reported by `KeyboardEvent.key`.
#[derive(Clone,Debug,Eq,PartialEq)]
#[allow(missing_docs)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Backspace,
    Other(String),
}

impl Key {
    /// Interpret the `KeyboardEvent.key` value.
    pub fn from_dom(key:&str) -> Self {
        match key {
            "ArrowDown" => Key::ArrowDown,
            "ArrowUp"   => Key::ArrowUp,
            "Enter"     => Key::Enter,
            "Escape"    => Key::Escape,
            "Backspace" => Key::Backspace,
            other       => Key::Other(other.into()),
        }
    }
}



// ================
// === Shortcut ===
// ================

/// Global shortcut focusing the search input: the given key pressed together with Ctrl or
/// Cmd (Meta).
#[derive(Clone,Debug,Eq,PartialEq)]
pub struct Shortcut {
    key:String,
}

impl Shortcut {
    /// Constructor.
    pub fn new(key:impl Into<String>) -> Self {
        let key = key.into();
        Self {key}
    }

    /// Check whether the key press triggers the shortcut.
    pub fn matches(&self, key:&str, ctrl:bool, meta:bool) -> bool {
        (ctrl || meta) && key == self.key
    }
}

impl Default for Shortcut {
    fn default() -> Self {
        Self::new("k")
    }
}



// =============
// === Tests ===
// =============

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_keys() {
        assert_eq!(Key::from_dom("ArrowDown"), Key::ArrowDown);
        assert_eq!(Key::from_dom("Escape"), Key::Escape);
        assert_eq!(Key::from_dom("a"), Key::Other("a".into()));
    }

    #[test]
    fn shortcut_requires_modifier() {
        let shortcut = Shortcut::default();
        assert!(shortcut.matches("k",true,false));
        assert!(shortcut.matches("k",false,true));
        assert!(!shortcut.matches("k",false,false));
        assert!(!shortcut.matches("j",true,false));
    }
}
