//! Errors of the widget initialization.

use failure::Fail;



/// Reasons for which the widget could not be bound to the page.
#[derive(Clone,Debug,Fail)]
pub enum Error {
    /// One or more required elements are absent from the page.
    #[fail(display="Required elements not found: {}.", _0)]
    MissingElements(String),
    /// The JSON configuration could not be parsed.
    #[fail(display="Invalid configuration: {}.", _0)]
    InvalidConfig(String),
    /// The browser environment is not available.
    #[fail(display="{}", _0)]
    Web(autosearch_system_web::Error),
}

impl From<autosearch_system_web::Error> for Error {
    fn from(error:autosearch_system_web::Error) -> Self {
        Error::Web(error)
    }
}
