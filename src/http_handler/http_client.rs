use crate::info;
use crate::location::HostnameSource;
use std::sync::OnceLock;

/// Scheme used to reach the backend.
pub const BACKEND_SCHEME: &str = "http";
/// Port the backend listens on, on the same host the frontend was served from.
pub const BACKEND_PORT: u16 = 8000;

static SHARED_CLIENT: OnceLock<HTTPClient> = OnceLock::new();

/// A simple wrapper around `reqwest::Client` used to manage HTTP requests
/// with a preconfigured base URL.
///
/// The base URL is `http://<hostname>:8000`, where the hostname is the one the
/// frontend page was loaded from. No timeout, retry policy or default headers
/// are installed.
#[derive(Debug, Clone)]
pub struct HTTPClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
    /// Base URL for the API, prepended to all endpoint paths.
    base_url: String,
}

impl HTTPClient {
    /// Constructs a new `HTTPClient` for the backend on `hostname`.
    ///
    /// The hostname is not validated. An empty or malformed hostname produces
    /// a malformed base URL, and requests fail once they are built or sent.
    pub fn new(hostname: &str) -> HTTPClient {
        HTTPClient { client: reqwest::Client::new(), base_url: Self::base_url_for(hostname) }
    }

    /// Constructs a new `HTTPClient` for the hostname reported by `source`.
    pub fn from_source<S: HostnameSource + ?Sized>(source: &S) -> HTTPClient {
        Self::new(&source.hostname())
    }

    /// Formats the backend base URL for `hostname`, e.g. `http://localhost:8000`.
    pub fn base_url_for(hostname: &str) -> String {
        format!("{BACKEND_SCHEME}://{hostname}:{BACKEND_PORT}")
    }

    /// Returns a reference to the internal `reqwest::Client`.
    pub fn client(&self) -> &reqwest::Client { &self.client }
    /// Returns the base URL that the client was initialized with.
    pub fn url(&self) -> &str { self.base_url.as_str() }

    /// Full URL for an endpoint path such as `/memos/3` or `memos/3`.
    ///
    /// Base and path are joined with exactly one `/`; an empty path yields the
    /// bare base URL.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        if endpoint.is_empty() {
            return self.base_url.clone();
        }
        let base = self.base_url.trim_end_matches('/');
        let path = endpoint.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Starts a request with `method` on `base_url + endpoint`.
    pub fn request(&self, method: reqwest::Method, endpoint: &str) -> reqwest::RequestBuilder {
        self.client.request(method, self.endpoint_url(endpoint))
    }

    pub fn get(&self, endpoint: &str) -> reqwest::RequestBuilder {
        self.request(reqwest::Method::GET, endpoint)
    }

    pub fn post(&self, endpoint: &str) -> reqwest::RequestBuilder {
        self.request(reqwest::Method::POST, endpoint)
    }

    pub fn put(&self, endpoint: &str) -> reqwest::RequestBuilder {
        self.request(reqwest::Method::PUT, endpoint)
    }

    pub fn delete(&self, endpoint: &str) -> reqwest::RequestBuilder {
        self.request(reqwest::Method::DELETE, endpoint)
    }
}

/// Returns the process-wide client, creating it from `source` on first use.
///
/// Every later call returns the same instance; the `source` passed to those
/// calls is not consulted again.
pub fn shared<S: HostnameSource + ?Sized>(source: &S) -> &'static HTTPClient {
    SHARED_CLIENT.get_or_init(|| {
        let client = HTTPClient::from_source(source);
        info!("Backend base URL is {}", client.url());
        client
    })
}

/// Returns the process-wide client if [`shared`] has already created it.
pub fn try_shared() -> Option<&'static HTTPClient> { SHARED_CLIENT.get() }
