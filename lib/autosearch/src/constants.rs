//! Default markup contract of the widget.

/// Attribute holding the role of an element.
pub const ELEMENT_ATTRIBUTE:&str = "tu-autosearch-element";

/// Attribute holding the selection action of a result item.
pub const ACTION_ATTRIBUTE:&str = "tu-autosearch-action";

/// Attribute of the form opting out of native submission when set to `"false"`.
pub const FORM_SUBMIT_ATTRIBUTE:&str = "tu-autosearch-form-submit";

/// Class marking the keyboard-focused item.
pub const FOCUSED_CLASS:&str = "is-focused";

/// Distance kept between the focused item and the bottom edge of the results, in `rem`.
pub const SCROLL_MARGIN_REM:f64 = 3.0;

/// Key which, together with Ctrl or Cmd, focuses the search input.
pub const SHORTCUT_KEY:&str = "k";

/// Root font size assumed when the computed one cannot be read.
pub const FALLBACK_ROOT_FONT_SIZE_PX:f64 = 16.0;

/// Values of the role attribute.
pub mod role {
    /// The form wrapping the whole widget.
    pub const FORM:&str = "search-form";
    /// The text input.
    pub const INPUT:&str = "search-input";
    /// The container of the result items.
    pub const RESULTS:&str = "search-results";
    /// A single result item.
    pub const ITEM:&str = "search-result-item";
    /// The "no results" block.
    pub const EMPTY:&str = "empty";
}
