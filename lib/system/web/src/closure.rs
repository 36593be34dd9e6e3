//! Storage for Rust closures handed over to JS.

use crate::prelude::*;

use js_sys::Function;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;



/// Closure that can be used as a callback of a DOM event listener.
pub trait ClosureFn<Arg> : FnMut(Arg) + 'static {}
impl<Arg,F:FnMut(Arg) + 'static> ClosureFn<Arg> for F {}



// ============================
// === OptionalFmMutClosure ===
// ============================

/// Slot for an `FnMut(Arg)` closure exposed to JS. Dropping the stored closure invalidates the
/// JS function, so the owner has to unregister it before.
#[derive(Derivative)]
#[derivative(Debug(bound=""))]
#[derivative(Default(bound=""))]
pub struct OptionalFmMutClosure<Arg> {
    /// The stored closure.
    pub closure : Option<Closure<dyn FnMut(Arg)>>,
}

impl<Arg:FromWasmAbi + 'static> OptionalFmMutClosure<Arg> {
    /// Constructor of an empty slot.
    pub fn new() -> Self {
        Self {closure:None}
    }

    /// Store the given closure, dropping the previous one.
    pub fn store(&mut self, closure:Closure<dyn FnMut(Arg)>) -> &Function {
        let closure : &Closure<dyn FnMut(Arg)> = self.closure.insert(closure);
        closure.as_ref().unchecked_ref()
    }

    /// Obtain the JS function of the stored closure.
    pub fn js_ref(&self) -> Option<&Function> {
        self.closure.as_ref().map(|closure| closure.as_ref().unchecked_ref())
    }

    /// Wrap the Rust closure and store it.
    pub fn wrap(&mut self, f:impl ClosureFn<Arg>) -> &Function {
        let boxed = Box::new(f) as Box<dyn FnMut(Arg)>;
        self.store(Closure::wrap(boxed))
    }

    /// Drop the stored closure.
    pub fn clear(&mut self) {
        self.closure = None;
    }
}
