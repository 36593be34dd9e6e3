//! Thin layer over `web-sys`: access to the global window and document, element queries and
//! style helpers, typed DOM events with self-unregistering listeners.

#![warn(unsafe_code)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]

pub mod closure;
pub mod dom;
pub mod event;

pub use dom::*;

/// Commonly used types and functions.
pub mod prelude {
    pub use derivative::Derivative;
    pub use failure::Fail;
    pub use logger::DefaultLogger as Logger;
    pub use logger::LoggerApi;
    pub use logger::debug;
    pub use logger::warning;
    pub use std::cell::RefCell;
    pub use std::rc::Rc;
    pub use wasm_bindgen::JsCast;
    pub use wasm_bindgen::JsValue;
}

use prelude::*;

pub use web_sys::Document;
pub use web_sys::Element;
pub use web_sys::EventTarget;
pub use web_sys::HtmlElement;
pub use web_sys::Window;



// =============
// === Error ===
// =============

/// Failures of DOM access.
#[derive(Clone,Debug,Fail)]
pub enum Error {
    /// A global object or an element could not be found.
    #[fail(display="Missing {}.", name)]
    Missing {
        /// What was missing.
        name:String,
    },
}

impl Error {
    /// Constructor of the `Missing` variant.
    pub fn missing(name:&str) -> Self {
        let name = name.into();
        Self::Missing {name}
    }
}

/// Result of DOM access.
pub type Result<T> = std::result::Result<T,Error>;



// ===============
// === Globals ===
// ===============

/// The global `window` object.
pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| Error::missing("window"))
}

/// The document of the global window.
pub fn document() -> Result<Document> {
    window()?.document().ok_or_else(|| Error::missing("document"))
}

/// Stringify any JS value, for logging.
pub fn js_to_string(value:&JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}",value))
}



// ==================
// === Panic Hook ===
// ==================

/// Report Rust panics in the browser console instead of an opaque `unreachable` trap.
pub fn forward_panic_hook_to_console() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
