use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_handler_common::Memo;

/// Request type for DELETE /memos/{id}. The backend answers with the deleted memo.
#[derive(Debug, Clone, Copy)]
pub struct MemoDeleteRequest {
    pub id: i64,
}

impl NoBodyHTTPRequestType for MemoDeleteRequest {}

impl HTTPRequestType for MemoDeleteRequest {
    type Response = Memo;
    fn endpoint(&self) -> String { format!("/memos/{}", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Delete }
}
