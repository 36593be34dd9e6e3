//! Utilities for DOM events.

pub mod listener;

use crate::prelude::*;

use js_sys::Function;
use wasm_bindgen::convert::FromWasmAbi;
use web_sys::EventTarget;



// =============
// === Event ===
// =============

/// This trait represents a kind of event that may fire from some specific JS object.
///
/// For example, `keydown` on the search input is such an event.
pub trait Event {
    /// The type of the event -- it will be the type of value passed to the event listeners.
    /// For example `web_sys::KeyboardEvent`.
    type Interface : AsRef<web_sys::Event> + FromWasmAbi + 'static;

    /// The name of the event. For example `"keydown"`.
    const NAME:&'static str;

    /// Adds a given function to the event's target as an event listener. It will be called each
    /// time event occurs until listener is removed through `remove_listener`.
    fn add_listener(target:&EventTarget, listener:&Function) -> Result<(),JsValue> {
        target.add_event_listener_with_callback(Self::NAME,listener)
    }

    /// Remove the event listener. The `add_listener` method should have been called before with
    /// the very same function argument.
    fn remove_listener(target:&EventTarget, listener:&Function) -> Result<(),JsValue> {
        target.remove_event_listener_with_callback(Self::NAME,listener)
    }
}

macro_rules! define_events {
    ($($(#[$meta:meta])* $name:ident = $js_name:literal ($interface:ty);)*) => {$(
        $(#[$meta])*
        #[derive(Clone,Copy,Debug,Default)]
        pub struct $name;

        impl Event for $name {
            type Interface = $interface;
            const NAME:&'static str = $js_name;
        }
    )*};
}

define_events! {
    /// The value of an input changed.
    Input   = "input"   (web_sys::Event);
    /// An element received focus.
    Focus   = "focus"   (web_sys::FocusEvent);
    /// A key was pressed.
    KeyDown = "keydown" (web_sys::KeyboardEvent);
    /// A key was released.
    KeyUp   = "keyup"   (web_sys::KeyboardEvent);
    /// A pointer click.
    Click   = "click"   (web_sys::MouseEvent);
    /// A form is being submitted.
    Submit  = "submit"  (web_sys::Event);
    /// The page finished loading.
    Load    = "load"    (web_sys::Event);
}
