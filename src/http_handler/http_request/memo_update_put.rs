use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use crate::http_handler::http_handler_common::{Memo, MemoUpdate};

/// Request type for PUT /memos/{id}.
#[derive(Debug)]
pub struct MemoUpdateRequest {
    pub id: i64,
    pub update: MemoUpdate,
}

impl JSONBodyHTTPRequestType for MemoUpdateRequest {
    type Body = MemoUpdate;
    fn body(&self) -> &Self::Body { &self.update }
}

impl HTTPRequestType for MemoUpdateRequest {
    type Response = Memo;
    fn endpoint(&self) -> String { format!("/memos/{}", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Put }
}
