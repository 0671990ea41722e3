use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_handler_common::Memo;

/// Request type for GET /memos/{id}.
#[derive(Debug, Clone, Copy)]
pub struct MemoGetRequest {
    pub id: i64,
}

impl NoBodyHTTPRequestType for MemoGetRequest {}

impl HTTPRequestType for MemoGetRequest {
    type Response = Memo;
    fn endpoint(&self) -> String { format!("/memos/{}", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
