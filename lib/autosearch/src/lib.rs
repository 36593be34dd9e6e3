//! Filter-as-you-type search box for Webflow pages.
//!
//! The widget binds to elements marked with the `tu-autosearch-element` attribute: a form, a
//! text input, a results container with pre-rendered result items and an optional "no results"
//! block. Typing filters the items by case-insensitive substring match, arrow keys move the
//! focus over the visible items, Enter selects the focused one and Escape dismisses the results.
//! Ctrl+K (Cmd+K) focuses the input from anywhere in the page.

#![warn(unsafe_code)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]

pub mod config;
pub mod constants;
pub mod elements;
pub mod error;
pub mod startup;
pub mod widget;

pub use config::Config;
pub use error::Error;
pub use widget::AutoSearch;

/// Commonly used types and functions.
pub mod prelude {
    pub use autosearch_system_web::prelude::*;
    pub use autosearch_system_web::event::Event as _;
    pub use logger::info;
}

use prelude::*;

use autosearch_system_web as web;
use std::mem;
use wasm_bindgen::prelude::wasm_bindgen;



// ======================
// === Initialization ===
// ======================

/// Bind a widget to the current document. A failure is reported as a warning and leaves the
/// page untouched.
pub fn init(logger:&Logger, config:Config) -> Option<AutoSearch> {
    let widget = web::document().map_err(Error::from).and_then(|document| {
        AutoSearch::new(logger,&document,config)
    });
    match widget {
        Ok(widget) => Some(widget),
        Err(error) => {
            warning!(logger,"{}",error);
            None
        }
    }
}

fn init_for_page(logger:&Logger, config:Result<Config,Error>) -> bool {
    let widget = match config {
        Ok(config) => init(logger,config),
        Err(error) => {
            warning!(logger,"{}",error);
            None
        }
    };
    let bound = widget.is_some();
    mem::forget(widget);
    bound
}



// ===============
// === Exports ===
// ===============

/// Entry point of the page script. Binds the widget as soon as the page is ready.
#[wasm_bindgen]
pub fn run_autosearch() {
    web::forward_panic_hook_to_console();
    let logger      = Logger::new("AutoSearch");
    let init_logger = logger.clone();
    let ready       = startup::run_when_ready(&logger,move || {
        init_for_page(&init_logger,Ok(Config::default()));
    });
    if let Err(error) = ready {
        warning!(logger,"Cannot schedule initialization: {}",web::js_to_string(&error));
    }
}

/// Bind the widget immediately, with the default configuration. Returns whether it was bound.
#[wasm_bindgen]
pub fn init_autosearch() -> bool {
    web::forward_panic_hook_to_console();
    init_for_page(&Logger::new("AutoSearch"),Ok(Config::default()))
}

/// Bind the widget immediately, with the configuration given as JSON. Returns whether it was
/// bound.
#[wasm_bindgen]
pub fn init_autosearch_with_config(json:&str) -> bool {
    web::forward_panic_hook_to_console();
    init_for_page(&Logger::new("AutoSearch"),Config::from_json(json))
}
