//! Client for the memo backend.
//!
//! The backend is expected on port 8000 of the same host the frontend page was
//! loaded from, so the frontend works whether it is opened via `localhost` or a
//! LAN address. The hostname is injected through a [`HostnameSource`].
//!
//! ```no_run
//! use memo_client::{PageLocation, shared};
//! use memo_client::http_handler::http_request::{
//!     memo_list_get::MemoListRequest, request_common::NoBodyHTTPRequestType,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let page = PageLocation::parse("http://192.168.1.42:5173/")?;
//! let api = shared(&page);
//! assert_eq!(api.url(), "http://192.168.1.42:8000");
//! let memos = MemoListRequest::default().send_request(api).await?;
//! # Ok(())
//! # }
//! ```
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
pub mod http_handler;
pub mod location;
mod logger;

pub use http_handler::http_client::{BACKEND_PORT, BACKEND_SCHEME, HTTPClient, shared, try_shared};
pub use location::{HostnameSource, PageLocation};
