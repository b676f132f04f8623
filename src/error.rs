//! Error types for incremental JSON rendering.
//!
//! The error taxonomy mirrors the three phases a render can fail in:
//!
//! - **Encoding errors**: a skeleton node is not representable as JSON.
//!   Raised by [`encode`](crate::encode) before any bytes reach the writer,
//!   so the caller can still produce a clean alternate response.
//! - **Streaming errors**: a lazy region's source failed mid-iteration, or
//!   produced an item that cannot be encoded. By this point part of the
//!   document has already been written; the output is truncated and the
//!   error is for the caller's logs, not the consumer.
//! - **Transport errors**: the destination writer itself failed (typically a
//!   disconnected client). Processing stops immediately.
//!
//! ## Examples
//!
//! ```rust
//! use json_drip::{encode, StreamOptions, Template, Error};
//!
//! let bad = Template::from(f64::NAN);
//! let result = encode(bad, StreamOptions::new());
//! assert!(matches!(result, Err(Error::Encoding { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while encoding or streaming
/// a document.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A skeleton node is not representable as JSON. Detected before any
    /// output is written.
    #[error("encoding error at {path}: {msg}")]
    Encoding { path: String, msg: String },

    /// A lazy region failed mid-stream, after output was partially written.
    #[error("streaming error in region {region}: {msg}")]
    Streaming { region: usize, msg: String },

    /// The destination writer failed (write or flush), e.g. the client
    /// disconnected.
    #[error("transport error: {0}")]
    Transport(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an encoding error with the path of the offending node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_drip::Error;
    ///
    /// let err = Error::encoding("$.totals.ratio", "non-finite number");
    /// assert!(err.to_string().contains("$.totals.ratio"));
    /// ```
    pub fn encoding(path: &str, msg: &str) -> Self {
        Error::Encoding {
            path: path.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates a streaming error for the region with the given zero-based
    /// document-order index.
    pub fn streaming(region: usize, msg: &str) -> Self {
        Error::Streaming {
            region,
            msg: msg.to_string(),
        }
    }

    /// Creates a transport error for a failed write or flush.
    pub fn transport<T: fmt::Display>(msg: T) -> Self {
        Error::Transport(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_drip::Error;
    ///
    /// let err = Error::custom("row fetch timed out");
    /// assert!(err.to_string().contains("row fetch timed out"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns `true` if the failure happened before any bytes were written,
    /// i.e. the caller may still send a different response.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Error::Encoding { .. })
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
