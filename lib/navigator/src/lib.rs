//! Filter and keyboard-focus state machine of the autosearch widget.
//!
//! This crate knows nothing about the DOM. It is fed with the items' text and action markers
//! once, and then with the input value and key presses. It answers with explicit visibility
//! flags and the side effects the view layer has to perform (prevent default, select an item,
//! blur the input).

#![warn(unsafe_code)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]

pub mod item;
pub mod key;
pub mod navigator;
pub mod query;
pub mod scroll;

pub use item::Action;
pub use item::Item;
pub use key::Key;
pub use key::Shortcut;
pub use navigator::Effect;
pub use navigator::KeyResponse;
pub use navigator::Navigator;
pub use navigator::Selection;
pub use query::Query;
pub use scroll::Bounds;
pub use scroll::scroll_delta;
