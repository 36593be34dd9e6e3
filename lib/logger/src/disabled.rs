//! Logger discarding every message.

use crate::*;



/// Trivial logger that discards all the messages.
#[derive(Clone,Copy,Debug,Default)]
pub struct Logger();

impl LoggerApi for Logger {
    fn new<T:Str>(_:T) -> Self {
        Logger()
    }

    fn sub<T:Str>(&self, _:T) -> Logger {
        Logger()
    }

    fn group<M:LogMsg,T,F:FnOnce() -> T>(&self, _:M, f:F) -> T {
        f()
    }

    fn debug  <M:LogMsg>(&self, _:M){}
    fn info   <M:LogMsg>(&self, _:M){}
    fn warning<M:LogMsg>(&self, _:M){}
}
