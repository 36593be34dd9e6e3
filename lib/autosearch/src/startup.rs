//! Running the initializer once the page is ready.

use crate::prelude::*;

use autosearch_system_web as web;
use js_sys::Function;
use js_sys::Reflect;
use wasm_bindgen::closure::Closure;

/// Name of the global queue Webflow drains once its runtime is ready.
const WEBFLOW_GLOBAL:&str = "Webflow";



/// Run `f` when the page is ready: through `window.Webflow.push` when the Webflow runtime is
/// present, on the window `load` event otherwise.
pub fn run_when_ready(logger:&Logger, f:impl FnOnce() + 'static) -> Result<(),JsValue> {
    let window   = web::window().map_err(|error| JsValue::from(error.to_string()))?;
    let webflow  = Reflect::get(&window,&WEBFLOW_GLOBAL.into())?;
    let push     = if webflow.is_object() { Reflect::get(&webflow,&"push".into())? }
                   else { JsValue::UNDEFINED };
    let callback = Closure::once_into_js(f);
    match push.dyn_ref::<Function>() {
        Some(push) => {
            debug!(logger,"Deferring initialization to the Webflow queue.");
            push.call1(&webflow,&callback).map(|_| ())
        }
        None => {
            debug!(logger,"Webflow not found, initializing on page load.");
            let target : &web_sys::EventTarget = window.as_ref();
            target.add_event_listener_with_callback(web::event::Load::NAME,callback.unchecked_ref())
        }
    }
}
