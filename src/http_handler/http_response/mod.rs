pub mod memo;
pub mod memo_list;
pub mod response_common;
