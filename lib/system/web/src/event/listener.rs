//! Event listeners bound to a target for as long as they live.

use crate::prelude::*;

use crate::closure::ClosureFn;
use crate::closure::OptionalFmMutClosure;
use crate::js_to_string;

use web_sys::EventTarget;



// ============
// === Slot ===
// ============

/// A single event listener slot.
///
/// Stores a closure that can be registered as an event listener.
///
/// Slot will register the closure as event listener whenever both closure and target are provided.
///
/// Caveat: this listener holds a reference to the target while it is registered.
/// Be sure not to leak this value nor have it dependent on target destruction.
#[derive(Derivative)]
#[derivative(Debug(bound=""))]
pub struct Slot<Event:crate::event::Event> {
    logger     : Logger,
    target     : Option<EventTarget>,
    js_closure : OptionalFmMutClosure<Event::Interface>,
}

impl<Event:crate::event::Event> Slot<Event> {
    /// Create a new `Slot`. As the initial target is provided, the listener will register once it
    /// gets a callback (see [[set_callback]]).
    pub fn new(target:&EventTarget, logger:&Logger) -> Self {
        Self {
            logger     : logger.sub(Event::NAME),
            target     : Some(target.clone()),
            js_closure : OptionalFmMutClosure::new(),
        }
    }

    /// Create a `Slot` with the callback already registered.
    pub fn with_callback
    (target:&EventTarget, logger:&Logger, f:impl ClosureFn<Event::Interface>) -> Self {
        let mut slot = Self::new(target,logger);
        slot.set_callback(f);
        slot
    }

    /// Register the event listener if both target and callback are set.
    fn add_if_active(&mut self) {
        if let (Some(target), Some(function)) = (self.target.as_ref(), self.js_closure.js_ref()) {
            debug!(self.logger,"Attaching the callback.");
            if let Err(error) = Event::add_listener(target,function) {
                warning!(self.logger,"Failed to attach the callback: {}",js_to_string(&error));
            }
        }
    }

    /// Unregister the event listener if both target and callback are set.
    fn remove_if_active(&mut self) {
        if let (Some(target), Some(function)) = (self.target.as_ref(), self.js_closure.js_ref()) {
            debug!(self.logger,"Detaching the callback.");
            if let Err(error) = Event::remove_listener(target,function) {
                warning!(self.logger,"Failed to detach the callback: {}",js_to_string(&error));
            }
        }
    }

    /// Assign a new event callback closure and register it in the target.
    ///
    /// If the listener was registered with the previous closure, it will unregister first.
    ///
    /// Caveat: using this method will move the event listener to the end of the registered
    /// callbacks. This will affect the order of callback calls.
    pub fn set_callback(&mut self, f:impl ClosureFn<Event::Interface>) {
        self.remove_if_active();
        self.js_closure.wrap(f);
        self.add_if_active()
    }

    /// Erase the callback.
    ///
    /// The stored closure will be dropped and event listener unregistered.
    pub fn clear_callback(&mut self) {
        self.remove_if_active();
        self.js_closure.clear();
    }

    /// Whether a callback is currently stored.
    pub fn has_callback(&self) -> bool {
        self.js_closure.js_ref().is_some()
    }
}

/// Unregister listener on drop.
impl<Event:crate::event::Event> Drop for Slot<Event> {
    fn drop(&mut self) {
        self.remove_if_active();
    }
}
