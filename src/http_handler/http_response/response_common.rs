use crate::{error, warn};
use strum_macros::Display;

#[allow(async_fn_in_trait)]
pub trait JSONBodyHTTPResponseType: HTTPResponseType {
    async fn parse_json_body(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>
    where Self::ParsedResponseType: for<'de> serde::Deserialize<'de> {
        Ok(response.json::<Self::ParsedResponseType>().await?)
    }
}

/// Marker for response types that are deserialized directly from the JSON body.
pub trait SerdeJSONBodyHTTPResponseType {}

impl<T> JSONBodyHTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
}

impl<T> HTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
    type ParsedResponseType = T;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        let resp = Self::unwrap_return_code(response).await?;
        Self::parse_json_body(resp).await
    }
}

#[allow(async_fn_in_trait)]
pub trait HTTPResponseType {
    type ParsedResponseType;
    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>;

    async fn unwrap_return_code(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ResponseError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else if status.is_server_error() {
            error!("Backend answered {status} for {}", response.url());
            Err(ResponseError::InternalServer)
        } else if status.is_client_error() {
            let url = response.url().to_string();
            let detail = response.json::<ErrorDetail>().await.unwrap_or_default();
            warn!("Backend answered {status} for {url}: {detail}");
            if status == reqwest::StatusCode::NOT_FOUND {
                Err(ResponseError::NotFound(detail))
            } else {
                Err(ResponseError::BadRequest(detail))
            }
        } else {
            Err(ResponseError::Unknown)
        }
    }
}

/// Error body returned by the backend for 4xx responses.
#[derive(Debug, Default, serde::Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    detail: Detail,
}

impl ErrorDetail {
    pub fn message(&self) -> Option<&str> {
        match &self.detail {
            Detail::Message(msg) => Some(msg.as_str()),
            Detail::Validation(_) => None,
        }
    }

    pub fn validation_errors(&self) -> &[ValidationDetail] {
        match &self.detail {
            Detail::Message(_) => &[],
            Detail::Validation(entries) => entries.as_slice(),
        }
    }
}

impl std::fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.detail {
            Detail::Message(msg) => write!(f, "{msg}"),
            Detail::Validation(entries) => {
                let joined =
                    entries.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ");
                write!(f, "{joined}")
            }
        }
    }
}

/// Either a plain message (`{"detail": "Memo not found"}`) or a list of
/// field validation failures.
#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
enum Detail {
    Message(String),
    Validation(Vec<ValidationDetail>),
}

impl Default for Detail {
    fn default() -> Self { Detail::Validation(Vec::new()) }
}

#[derive(Debug, serde::Deserialize)]
pub struct ValidationDetail {
    #[serde(rename = "type")]
    error_type: String,
    loc: Vec<LocSegment>,
    msg: String,
}

impl ValidationDetail {
    pub fn error_type(&self) -> &str { &self.error_type }
    pub fn msg(&self) -> &str { &self.msg }

    /// Location of the offending field, e.g. `body.title`.
    pub fn location(&self) -> String {
        self.loc.iter().map(ToString::to_string).collect::<Vec<_>>().join(".")
    }
}

impl std::fmt::Display for ValidationDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.location(), self.msg)
    }
}

/// Path segments are field names or list indices.
#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
enum LocSegment {
    Field(String),
    Index(u64),
}

impl std::fmt::Display for LocSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocSegment::Field(name) => write!(f, "{name}"),
            LocSegment::Index(i) => write!(f, "{i}"),
        }
    }
}

#[derive(Debug, Display)]
pub enum ResponseError {
    NotFound(ErrorDetail),
    BadRequest(ErrorDetail),
    InternalServer,
    NoConnection,
    Timeout,
    InvalidRequest,
    Decode,
    Unknown,
}

impl std::error::Error for ResponseError {}
impl From<reqwest::Error> for ResponseError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_builder() {
            ResponseError::InvalidRequest
        } else if value.is_timeout() {
            ResponseError::Timeout
        } else if value.is_connect() {
            ResponseError::NoConnection
        } else if value.is_decode() {
            ResponseError::Decode
        } else {
            ResponseError::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{HTTPResponseType, ResponseError};
    use crate::http_handler::http_handler_common::Memo;
    use crate::http_handler::http_response::memo_list::MemoListResponse;

    fn response(status: u16, body: &str) -> reqwest::Response {
        let resp = http::Response::builder()
            .status(status)
            .header("content-type", "application/json")
            .body(body.to_string())
            .unwrap();
        reqwest::Response::from(resp)
    }

    const MEMO: &str =
        r#"{"id":3,"title":"todo","content":"ship it","created_at":"2025-05-04T12:00:00Z","updated_at":null}"#;

    #[tokio::test]
    async fn test_success_is_parsed() {
        let memo = Memo::read_response(response(200, MEMO)).await.unwrap();
        assert_eq!(memo.id(), 3);
        assert_eq!(memo.content(), "ship it");
    }

    #[tokio::test]
    async fn test_list_is_parsed() {
        let body = format!("[{MEMO},{MEMO}]");
        let list = MemoListResponse::read_response(response(200, &body)).await.unwrap();
        assert_eq!(list.memos().len(), 2);
        let empty = MemoListResponse::read_response(response(200, "[]")).await.unwrap();
        assert!(empty.is_empty());
    }

    #[tokio::test]
    async fn test_not_found_carries_message() {
        let err = Memo::read_response(response(404, r#"{"detail":"Memo not found"}"#))
            .await
            .unwrap_err();
        match err {
            ResponseError::NotFound(detail) => {
                assert_eq!(detail.message(), Some("Memo not found"));
                assert!(detail.validation_errors().is_empty());
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_validation_error_is_parsed() {
        let body = r#"{"detail":[{"type":"missing","loc":["body","title"],"msg":"Field required","input":{}},
                                 {"type":"int_parsing","loc":["query","limit"],"msg":"Input should be a valid integer"}]}"#;
        let err = Memo::read_response(response(422, body)).await.unwrap_err();
        let ResponseError::BadRequest(detail) = err else { panic!("expected BadRequest") };
        let entries = detail.validation_errors();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].error_type(), "missing");
        assert_eq!(entries[0].location(), "body.title");
        assert_eq!(
            detail.to_string(),
            "body.title: Field required; query.limit: Input should be a valid integer"
        );
    }

    #[tokio::test]
    async fn test_client_error_without_json_body() {
        let err = Memo::read_response(response(400, "not json")).await.unwrap_err();
        let ResponseError::BadRequest(detail) = err else { panic!("expected BadRequest") };
        assert!(detail.message().is_none());
        assert!(detail.validation_errors().is_empty());
    }

    #[tokio::test]
    async fn test_server_error() {
        let err = Memo::read_response(response(500, "Internal Server Error")).await.unwrap_err();
        assert!(matches!(err, ResponseError::InternalServer));
    }

    #[tokio::test]
    async fn test_unexpected_body_is_decode_error() {
        let err = Memo::read_response(response(200, r#"{"id":"three"}"#)).await.unwrap_err();
        assert!(matches!(err, ResponseError::Decode));
    }
}
