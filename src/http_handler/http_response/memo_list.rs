use crate::http_handler::http_handler_common::Memo;
use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for GET /memos/, a bare JSON array of memos.
#[derive(serde::Deserialize, Debug)]
#[serde(transparent)]
pub struct MemoListResponse {
    memos: Vec<Memo>,
}

impl SerdeJSONBodyHTTPResponseType for MemoListResponse {}

impl MemoListResponse {
    pub fn memos(&self) -> &[Memo] { &self.memos }
    pub fn into_memos(self) -> Vec<Memo> { self.memos }
    pub fn is_empty(&self) -> bool { self.memos.is_empty() }
}

impl IntoIterator for MemoListResponse {
    type Item = Memo;
    type IntoIter = std::vec::IntoIter<Memo>;
    fn into_iter(self) -> Self::IntoIter { self.memos.into_iter() }
}
