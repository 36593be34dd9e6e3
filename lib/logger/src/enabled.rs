//! Logger emitting every message.

use crate::*;

use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;
#[cfg(target_arch = "wasm32")]
use web_sys::console;



/// Default Logger implementation.
#[derive(Clone,Debug,Default)]
pub struct Logger {
    /// Dotted path identifying this logger, e.g. `AutoSearch.KeyDown`.
    pub path:Rc<String>,
}

impl Logger {
    fn format<M:LogMsg>(&self, msg:M) -> String {
        msg.with_log_msg(|s| format!("[{}] {}", self.path, s))
    }

    #[cfg(target_arch = "wasm32")]
    fn format_js<M:LogMsg>(&self, msg:M) -> JsValue {
        self.format(msg).into()
    }

    #[cfg(target_arch = "wasm32")]
    fn group_begin<M:LogMsg>(&self, msg:M) {
        console::group_1(&self.format_js(msg));
    }

    #[cfg(target_arch = "wasm32")]
    fn group_end(&self) {
        console::group_end();
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn group_begin<M:LogMsg>(&self, msg:M) {
        println!(">>> {}",self.format(msg));
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn group_end(&self) {
        println!("<<<")
    }
}

#[cfg(target_arch = "wasm32")]
impl LoggerApi for Logger {
    fn new<T:Str>(path:T) -> Self {
        let path = Rc::new(path.into());
        Self {path}
    }

    fn sub<T:Str>(&self, path:T) -> Self {
        if self.path.is_empty() { Self::new(path) } else {
            Self::new(format!("{}.{}", self.path, path.as_ref()))
        }
    }

    fn group<M:LogMsg,T,F:FnOnce() -> T>(&self, msg:M, f:F) -> T {
        self.group_begin(msg);
        let out = f();
        self.group_end();
        out
    }

    fn debug<M:LogMsg>(&self, msg:M) {
        console::debug_1(&self.format_js(msg));
    }

    fn info<M:LogMsg>(&self, msg:M) {
        console::info_1(&self.format_js(msg));
    }

    fn warning<M:LogMsg>(&self, msg:M) {
        console::warn_1(&self.format_js(msg));
    }

}

#[cfg(not(target_arch = "wasm32"))]
impl LoggerApi for Logger {
    fn new<T:Str>(path:T) -> Self {
        let path = Rc::new(path.into());
        Self {path}
    }

    fn sub<T:Str>(&self, path:T) -> Self {
        if self.path.is_empty() { Self::new(path) } else {
            Self::new(format!("{}.{}", self.path, path.as_ref()))
        }
    }

    fn group<M:LogMsg,T,F:FnOnce() -> T>(&self, msg:M, f:F) -> T {
        self.group_begin(msg);
        let out = f();
        self.group_end();
        out
    }

    fn debug<M:LogMsg>(&self, msg:M) {
        println!("{}",self.format(msg));
    }

    fn info<M:LogMsg>(&self, msg:M) {
        println!("{}",self.format(msg));
    }

    fn warning<M:LogMsg>(&self, msg:M) {
        println!("[WARNING] {}",self.format(msg));
    }

}



// =============
// === Tests ===
// =============

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_logger_extends_path() {
        let logger = Logger::new("AutoSearch");
        let sub    = logger.sub("KeyDown");
        assert_eq!(sub.path.as_str(), "AutoSearch.KeyDown");
        assert_eq!(Logger::default().sub("Root").path.as_str(), "Root");
    }

    #[test]
    fn message_is_prefixed_with_path() {
        let logger = Logger::new("AutoSearch");
        assert_eq!(logger.format("ready"), "[AutoSearch] ready");
        assert_eq!(logger.format(|| format!("{} items", 3)), "[AutoSearch] 3 items");
    }

    #[test]
    fn group_returns_body_value() {
        let logger = Logger::new("AutoSearch");
        assert_eq!(logger.group("init", || 7), 7);
    }
}
