use url::{ParseError, Url};

/// Supplies the hostname the frontend page was loaded from.
///
/// The returned string is used verbatim when building the backend base URL;
/// implementations must not validate or normalise it.
pub trait HostnameSource {
    fn hostname(&self) -> String;
}

/// The address the frontend page was loaded from.
#[derive(Debug, Clone)]
pub struct PageLocation {
    url: Url,
}

impl PageLocation {
    /// Parses the page address, e.g. `"http://192.168.1.42:5173/memos"`.
    ///
    /// # Errors
    /// Returns a [`ParseError`] if `page_url` is not an absolute URL.
    pub fn parse(page_url: &str) -> Result<Self, ParseError> {
        Ok(Self { url: Url::parse(page_url)? })
    }

    pub fn url(&self) -> &Url { &self.url }
}

impl From<Url> for PageLocation {
    fn from(url: Url) -> Self { Self { url } }
}

impl HostnameSource for PageLocation {
    /// Host portion of the page address, or an empty string for host-less
    /// locations such as `file://` pages.
    fn hostname(&self) -> String { self.url.host_str().unwrap_or_default().to_string() }
}

impl HostnameSource for str {
    fn hostname(&self) -> String { self.to_string() }
}

impl HostnameSource for String {
    fn hostname(&self) -> String { self.clone() }
}

impl<T: HostnameSource + ?Sized> HostnameSource for &T {
    fn hostname(&self) -> String { (**self).hostname() }
}
