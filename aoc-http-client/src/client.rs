//! AOC HTTP client implementation

use crate::error::AocError;
use reqwest::header::{COOKIE, HeaderValue, USER_AGENT};
use zeroize::Zeroize;

/// Default Advent of Code host
pub const DEFAULT_BASE_URL: &str = "https://adventofcode.com";

/// The main AOC HTTP client
///
/// Every request carries the session cookie and the configured
/// `User-Agent`. Redirects are never followed: an expired session answers
/// with a redirect, which surfaces as [`AocError::FetchFailed`].
///
/// # Example
///
/// ```no_run
/// use aoc_http_client::AocClient;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AocClient::builder()
///     .user_agent("github.com/username/aoc")
///     .build()?;
///
/// let input = client.get_input(2025, 1, "your_session_cookie")?;
/// println!("Input: {}", input);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct AocClient {
    client: reqwest::blocking::Client,
    base_url: reqwest::Url,
    user_agent: Option<HeaderValue>,
}

impl AocClient {
    /// Create a client with default settings and no `User-Agent` override
    ///
    /// # Errors
    ///
    /// Returns `AocError::ClientInit` if the HTTP client cannot be initialized.
    pub fn new() -> Result<Self, AocError> {
        Self::builder().build()
    }

    /// Create a builder for configuring the AOC client
    pub fn builder() -> AocClientBuilder {
        AocClientBuilder::new()
    }

    /// Create a secure cookie header value from a session string
    ///
    /// The header is flagged sensitive and the temporary string is zeroized.
    fn create_cookie_header(session: &str) -> Result<HeaderValue, AocError> {
        let mut cookie_string = format!("session={}", session);
        let header_value = HeaderValue::from_bytes(cookie_string.as_bytes());
        cookie_string.zeroize();

        let mut sensitive_header = header_value
            .map_err(|_| AocError::ClientInit("Invalid session cookie format".to_string()))?;
        sensitive_header.set_sensitive(true);

        Ok(sensitive_header)
    }

    /// Fetch puzzle input for a specific year and day
    ///
    /// Downloads the personalized puzzle input and strips trailing whitespace
    /// (leading whitespace is kept). A single attempt is made.
    ///
    /// # Arguments
    ///
    /// * `year` - The AOC year (e.g., 2025)
    /// * `day` - The day number (1-25)
    /// * `session` - The session cookie value (without "session=" prefix)
    ///
    /// # Errors
    ///
    /// * `AocError::CredentialMissing` - `session` is empty; no request is sent
    /// * `AocError::FetchFailed` - Non-success status (e.g., 404 before unlock)
    /// * `AocError::Network` - Connection or body read failure
    pub fn get_input(&self, year: u16, day: u8, session: &str) -> Result<String, AocError> {
        if session.is_empty() {
            return Err(AocError::CredentialMissing);
        }

        let cookie_header = Self::create_cookie_header(session)?;

        // Construct URL using path segments
        let (year, day) = (year.to_string(), day.to_string());
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AocError::ClientInit("Cannot modify base URL path".to_string()))?
            .clear()
            .extend([year.as_str(), "day", day.as_str(), "input"]);

        tracing::debug!(%url, "fetching puzzle input");

        let mut request = self.client.get(url).header(COOKIE, cookie_header);
        if let Some(user_agent) = &self.user_agent {
            request = request.header(USER_AGENT, user_agent.clone());
        }
        let response = request.send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(AocError::FetchFailed {
                status,
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let text = response.text()?;
        tracing::debug!(bytes = text.len(), "fetched puzzle input");

        Ok(text.trim_end().to_string())
    }
}

/// Builder for configuring an AOC HTTP client
///
/// # Example
///
/// ```no_run
/// use aoc_http_client::AocClient;
/// use std::time::Duration;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // Custom base URL for testing
/// let client = AocClient::builder()
///     .base_url("http://localhost:1234")?
///     .build()?;
///
/// // Custom timeout
/// let client = AocClient::builder()
///     .user_agent("github.com/username/aoc")
///     .client_builder(
///         reqwest::blocking::Client::builder()
///             .timeout(Duration::from_secs(30))
///     )
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AocClientBuilder {
    base_url: Option<reqwest::Url>,
    user_agent: Option<String>,
    client_builder: Option<reqwest::blocking::ClientBuilder>,
}

impl AocClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
            client_builder: None,
        }
    }

    /// Set a custom base URL for the client
    ///
    /// Useful for pointing the client at a mock server. The URL is parsed
    /// and validated here.
    pub fn base_url(mut self, url: impl reqwest::IntoUrl) -> Result<Self, AocError> {
        let url = url
            .into_url()
            .map_err(|e| AocError::ClientInit(format!("Invalid base URL: {}", e)))?;
        self.base_url = Some(url);
        Ok(self)
    }

    /// Set the `User-Agent` sent with every request
    ///
    /// Advent of Code asks automated tools to identify themselves, usually
    /// with a repository URL or contact address.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set a custom HTTP client builder
    ///
    /// The redirect policy is always overridden to `Policy::none()`.
    pub fn client_builder(mut self, builder: reqwest::blocking::ClientBuilder) -> Self {
        self.client_builder = Some(builder);
        self
    }

    /// Build the AOC client with the configured settings
    ///
    /// # Errors
    ///
    /// Returns `AocError::ClientInit` if the `User-Agent` is not a valid
    /// header value or the HTTP client cannot be initialized.
    pub fn build(self) -> Result<AocClient, AocError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => reqwest::Url::parse(DEFAULT_BASE_URL)
                .map_err(|e| AocError::ClientInit(e.to_string()))?,
        };

        let user_agent = self
            .user_agent
            .map(|ua| {
                HeaderValue::from_str(&ua)
                    .map_err(|_| AocError::ClientInit(format!("Invalid user agent: {:?}", ua)))
            })
            .transpose()?;

        // Use provided client builder or create default with rustls-tls
        let builder = self
            .client_builder
            .unwrap_or_else(|| reqwest::blocking::Client::builder().use_rustls_tls());

        let client = builder
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| AocError::ClientInit(e.to_string()))?;

        Ok(AocClient {
            client,
            base_url,
            user_agent,
        })
    }
}

impl Default for AocClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn mock_client(server: &mockito::Server) -> AocClient {
        AocClient::builder()
            .base_url(server.url())
            .unwrap()
            .user_agent("github.com/test/aoc")
            .build()
            .unwrap()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_base_url_configuration(
            scheme in prop::sample::select(vec!["http", "https"]),
            host in "[a-z]{3,10}",
            port in 1000u16..10000u16,
        ) {
            let base_url = format!("{}://{}:{}", scheme, host, port);

            let client = AocClient::builder()
                .base_url(&base_url)
                .unwrap()
                .build()
                .unwrap();

            prop_assert_eq!(client.base_url.scheme(), scheme);
            prop_assert_eq!(client.base_url.host_str(), Some(host.as_str()));
            prop_assert_eq!(client.base_url.port(), Some(port));
        }
    }

    #[test]
    fn test_default_base_url() {
        let client = AocClient::new().unwrap();
        assert_eq!(client.base_url.as_str(), "https://adventofcode.com/");
        assert!(client.user_agent.is_none());
    }

    #[test]
    fn test_invalid_base_url() {
        let result = AocClient::builder().base_url("not a valid url");
        assert!(matches!(result, Err(AocError::ClientInit(_))));
    }

    #[test]
    fn test_invalid_user_agent() {
        let result = AocClient::builder().user_agent("bad\nagent").build();
        assert!(matches!(result, Err(AocError::ClientInit(_))));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_input_request_construction(
            year in 2015u16..2030u16,
            day in 1u8..=25u8,
            session in "[a-f0-9]{32,128}",
        ) {
            let mut server = mockito::Server::new();

            let expected_path = format!("/{}/day/{}/input", year, day);
            let mock = server.mock("GET", expected_path.as_str())
                .match_header("cookie", format!("session={}", session).as_str())
                .match_header("user-agent", "github.com/test/aoc")
                .with_status(200)
                .with_body("test input data")
                .expect(1)
                .create();

            let client = mock_client(&server);
            let result = client.get_input(year, day, &session);

            prop_assert!(result.is_ok(), "get_input should succeed for year {} day {}", year, day);
            mock.assert();
            prop_assert_eq!(result.unwrap(), "test input data");
        }
    }

    #[test]
    fn test_trailing_whitespace_trimmed_leading_kept() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/2025/day/3/input")
            .with_status(200)
            .with_body("  12\n34\n\n \t\n")
            .expect(1)
            .create();

        let input = mock_client(&server).get_input(2025, 3, "abc").unwrap();

        assert_eq!(input, "  12\n34");
        mock.assert();
    }

    #[test]
    fn test_empty_session_sends_nothing() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", mockito::Matcher::Any)
            .with_status(200)
            .expect(0)
            .create();

        let result = mock_client(&server).get_input(2025, 1, "");

        assert!(matches!(result, Err(AocError::CredentialMissing)));
        mock.assert();
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_non_success_status_error_handling(
            day in 1u8..=25u8,
            session in "[a-f0-9]{32,128}",
            status_code in prop::sample::select(vec![302, 400, 401, 403, 404, 429, 500, 502, 503]),
        ) {
            let mut server = mockito::Server::new();

            let expected_path = format!("/2025/day/{}/input", day);
            let mock = server.mock("GET", expected_path.as_str())
                .with_status(status_code)
                .with_body("Error response")
                .expect(1)
                .create();

            let result = mock_client(&server).get_input(2025, day, &session);

            match result {
                Err(AocError::FetchFailed { status, reason }) => {
                    prop_assert_eq!(status.as_u16(), status_code as u16);
                    prop_assert_eq!(
                        Some(reason.as_str()),
                        status.canonical_reason()
                    );
                }
                other => prop_assert!(false, "Expected AocError::FetchFailed, got {:?}", other),
            }

            // Single attempt, no retry
            mock.assert();
        }
    }

    #[test]
    fn test_connection_failure_is_network_error() {
        // Nothing listens on port 1
        let client = AocClient::builder()
            .base_url("http://127.0.0.1:1")
            .unwrap()
            .build()
            .unwrap();

        let result = client.get_input(2025, 1, "abc");

        assert!(matches!(result, Err(AocError::Network(_))));
    }

    #[test]
    fn test_error_messages() {
        let err = AocError::FetchFailed {
            status: reqwest::StatusCode::NOT_FOUND,
            reason: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to fetch input: 404 Not Found");
    }
}
