use super::super::http_client::HTTPClient;
use super::super::http_response::response_common::{HTTPResponseType, ResponseError};
use crate::warn;
use strum_macros::Display;

/// HTTP methods used by the memo endpoints.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HTTPRequestMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl From<HTTPRequestMethod> for reqwest::Method {
    fn from(value: HTTPRequestMethod) -> Self {
        match value {
            HTTPRequestMethod::Get => reqwest::Method::GET,
            HTTPRequestMethod::Post => reqwest::Method::POST,
            HTTPRequestMethod::Put => reqwest::Method::PUT,
            HTTPRequestMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Result type produced by sending a request of type `T`.
pub type RequestResult<T> =
    Result<<<T as HTTPRequestType>::Response as HTTPResponseType>::ParsedResponseType, ResponseError>;

pub trait HTTPRequestType {
    /// Type of the expected response.
    type Response: HTTPResponseType;
    /// Path of the endpoint relative to the base URL, e.g. `/memos/3`.
    fn endpoint(&self) -> String;
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod;
    /// Query string parameters appended to the endpoint.
    fn query_params(&self) -> Vec<(&'static str, String)> { Vec::new() }

    /// Method, URL and query parameters, without a body.
    fn request_builder(&self, client: &HTTPClient) -> reqwest::RequestBuilder {
        let builder = client.request(self.request_method().into(), &self.endpoint());
        let query = self.query_params();
        if query.is_empty() { builder } else { builder.query(&query) }
    }
}

#[allow(async_fn_in_trait)]
pub trait NoBodyHTTPRequestType: HTTPRequestType {
    /// Builds the request without sending it.
    ///
    /// # Errors
    /// `ResponseError::InvalidRequest` if the URL cannot be parsed, e.g. when the
    /// client was created with an empty hostname.
    fn build_request(&self, client: &HTTPClient) -> Result<reqwest::Request, ResponseError> {
        Ok(self.request_builder(client).build()?)
    }

    /// Sends the request and parses the response.
    ///
    /// # Errors
    /// Any transport failure or non-success status, see [`ResponseError`].
    async fn send_request(&self, client: &HTTPClient) -> RequestResult<Self>
    where Self: Sized {
        let request = self.build_request(client)?;
        execute::<Self>(client, request).await
    }
}

#[allow(async_fn_in_trait)]
pub trait JSONBodyHTTPRequestType: HTTPRequestType {
    /// The type of the json body.
    type Body: serde::Serialize;
    /// Returns the serializable object.
    fn body(&self) -> &Self::Body;

    /// Builds the request with its JSON body without sending it.
    ///
    /// # Errors
    /// `ResponseError::InvalidRequest` if the URL cannot be parsed or the body
    /// cannot be serialized.
    fn build_request(&self, client: &HTTPClient) -> Result<reqwest::Request, ResponseError> {
        Ok(self.request_builder(client).json(self.body()).build()?)
    }

    /// Sends the request and parses the response.
    ///
    /// # Errors
    /// Any transport failure or non-success status, see [`ResponseError`].
    async fn send_request(&self, client: &HTTPClient) -> RequestResult<Self>
    where Self: Sized {
        let request = self.build_request(client)?;
        execute::<Self>(client, request).await
    }
}

async fn execute<T: HTTPRequestType>(
    client: &HTTPClient,
    request: reqwest::Request,
) -> RequestResult<T> {
    let method = request.method().clone();
    let url = request.url().clone();
    match client.client().execute(request).await {
        Ok(response) => T::Response::read_response(response).await,
        Err(e) => {
            warn!("{method} {url} failed: {e}");
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::memo_get::MemoGetRequest;
    use super::{HTTPRequestMethod, execute};
    use crate::http_handler::http_client::HTTPClient;
    use crate::http_handler::http_response::response_common::ResponseError;
    use std::net::TcpListener;
    use std::time::Duration;

    #[tokio::test]
    async fn test_closed_port_is_no_connection() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = HTTPClient::new("127.0.0.1");
        let request = client.client().get(format!("http://127.0.0.1:{port}/memos/1")).build().unwrap();
        let err = execute::<MemoGetRequest>(&client, request).await.unwrap_err();
        assert!(matches!(err, ResponseError::NoConnection), "got {err:?}");
    }

    #[tokio::test]
    async fn test_silent_backend_is_timeout() {
        // accepted by the kernel backlog, never answered
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let client = HTTPClient::new("127.0.0.1");
        let request = client
            .client()
            .get(format!("http://127.0.0.1:{port}/memos/1"))
            .timeout(Duration::from_millis(200))
            .build()
            .unwrap();
        let err = execute::<MemoGetRequest>(&client, request).await.unwrap_err();
        assert!(matches!(err, ResponseError::Timeout), "got {err:?}");
        drop(listener);
    }

    #[test]
    fn test_method_names() {
        assert_eq!(HTTPRequestMethod::Delete.to_string(), "DELETE");
        assert_eq!(reqwest::Method::from(HTTPRequestMethod::Put), reqwest::Method::PUT);
    }
}
