use super::memo_list::MemoListResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

/// Request type for GET /memos/, paginated with `skip` and `limit`.
#[derive(Debug, Clone, Copy)]
pub struct MemoListRequest {
    pub skip: u32,
    pub limit: u32,
}

impl MemoListRequest {
    /// Page size the backend applies when no limit is given.
    pub const DEFAULT_LIMIT: u32 = 100;
}

impl Default for MemoListRequest {
    fn default() -> Self { Self { skip: 0, limit: Self::DEFAULT_LIMIT } }
}

impl NoBodyHTTPRequestType for MemoListRequest {}

impl HTTPRequestType for MemoListRequest {
    type Response = MemoListResponse;
    fn endpoint(&self) -> String { String::from("/memos/") }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![("skip", self.skip.to_string()), ("limit", self.limit.to_string())]
    }
}
