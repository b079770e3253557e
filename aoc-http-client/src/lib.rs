//! AOC HTTP Client Library
//!
//! Fetches personalized puzzle input from the Advent of Code website.
//!
//! # Features
//!
//! - One authenticated `GET /<year>/day/<day>/input` request, no retries
//! - Session cookie sent as a sensitive header, temporary copies zeroized
//! - Configurable `User-Agent` identifying the caller
//! - Secure TLS using rustls (no OpenSSL dependencies)
//! - Blocking synchronous API
//! - Well-typed errors using thiserror
//!
//! # Example
//!
//! ```no_run
//! use aoc_http_client::AocClient;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AocClient::builder()
//!     .user_agent("github.com/username/aoc")
//!     .build()?;
//!
//! // Your session cookie from adventofcode.com
//! let session = "your_session_cookie_here";
//!
//! let input = client.get_input(2025, 1, session)?;
//! println!("{} bytes", input.len());
//! # Ok(())
//! # }
//! ```

mod client;
mod error;

pub use client::{AocClient, AocClientBuilder, DEFAULT_BASE_URL};
pub use error::AocError;
