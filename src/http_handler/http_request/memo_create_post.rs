use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use crate::http_handler::http_handler_common::{Memo, MemoCreate};

/// Request type for POST /memos/.
#[derive(Debug)]
pub struct MemoCreateRequest {
    memo: MemoCreate,
}

impl MemoCreateRequest {
    pub fn new(memo: MemoCreate) -> Self { Self { memo } }
}

impl JSONBodyHTTPRequestType for MemoCreateRequest {
    type Body = MemoCreate;
    fn body(&self) -> &Self::Body { &self.memo }
}

impl HTTPRequestType for MemoCreateRequest {
    type Response = Memo;
    fn endpoint(&self) -> String { String::from("/memos/") }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
