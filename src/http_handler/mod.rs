// used by the logger macros through `$crate::http_handler::chrono`
pub use chrono;
pub use reqwest;
pub use serde;

pub mod http_client;
pub mod http_handler_common;
pub mod http_request;
pub mod http_response;
