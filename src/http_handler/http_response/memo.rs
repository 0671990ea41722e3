use crate::http_handler::http_handler_common::Memo;
use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Create, get, update and delete all answer with the affected memo.
impl SerdeJSONBodyHTTPResponseType for Memo {}
