use super::http_response::memo_list;

pub mod memo_create_post;
pub mod memo_delete_delete;
pub mod memo_get;
pub mod memo_list_get;
pub mod memo_update_put;
pub mod request_common;
