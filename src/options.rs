//! Configuration options for incremental rendering.
//!
//! This module provides [`StreamOptions`], which controls two independent
//! concerns:
//!
//! - **String escaping**: whether forward slashes and non-ASCII characters
//!   are escaped in string output. Both are off by default, matching the
//!   most compact valid JSON.
//! - **Flush cadence**: how many streamed items are written between explicit
//!   flushes of the destination writer.
//!
//! ## Examples
//!
//! ```rust
//! use json_drip::{StreamOptions, Template, to_string_with_options};
//!
//! let options = StreamOptions::new()
//!     .with_flush_threshold(50)
//!     .with_escape_non_ascii(true);
//!
//! let out = to_string_with_options(Template::from("café"), options).unwrap();
//! assert_eq!(out, "\"caf\\u00e9\"");
//! ```

/// Default number of streamed items between explicit transport flushes.
pub const DEFAULT_FLUSH_THRESHOLD: usize = 250;

/// Configuration options for encoding and streaming.
///
/// # Examples
///
/// ```rust
/// use json_drip::StreamOptions;
///
/// // Defaults: flush every 250 items, compact escaping
/// let options = StreamOptions::new();
///
/// // Custom configuration
/// let options = StreamOptions::new()
///     .with_flush_threshold(100)
///     .with_escape_slashes(true);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StreamOptions {
    /// Number of items written to a region before the writer is flushed.
    /// Never flushes after a region's final item.
    pub flush_threshold: usize,
    /// Escape `/` as `\/` in strings.
    pub escape_slashes: bool,
    /// Escape non-ASCII characters as `\uXXXX` (surrogate pairs above the
    /// BMP) instead of emitting UTF-8 bytes.
    pub escape_non_ascii: bool,
}

impl Default for StreamOptions {
    fn default() -> Self {
        StreamOptions {
            flush_threshold: DEFAULT_FLUSH_THRESHOLD,
            escape_slashes: false,
            escape_non_ascii: false,
        }
    }
}

impl StreamOptions {
    /// Creates default options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_drip::{StreamOptions, DEFAULT_FLUSH_THRESHOLD};
    ///
    /// let options = StreamOptions::new();
    /// assert_eq!(options.flush_threshold, DEFAULT_FLUSH_THRESHOLD);
    /// assert!(!options.escape_slashes);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the flush threshold.
    ///
    /// The threshold must be positive; a value of 0 is clamped to 1.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_drip::StreamOptions;
    ///
    /// let options = StreamOptions::new().with_flush_threshold(100);
    /// assert_eq!(options.flush_threshold, 100);
    ///
    /// let options = StreamOptions::new().with_flush_threshold(0);
    /// assert_eq!(options.flush_threshold, 1);
    /// ```
    #[must_use]
    pub fn with_flush_threshold(mut self, threshold: usize) -> Self {
        self.flush_threshold = threshold.max(1);
        self
    }

    /// Sets whether forward slashes are escaped in string output.
    ///
    /// Useful when the rendered document is embedded in an HTML `<script>`
    /// block, where a literal `</` can end the block early.
    #[must_use]
    pub fn with_escape_slashes(mut self, escape: bool) -> Self {
        self.escape_slashes = escape;
        self
    }

    /// Sets whether non-ASCII characters are escaped as `\uXXXX`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_drip::StreamOptions;
    ///
    /// let options = StreamOptions::new().with_escape_non_ascii(true);
    /// assert!(options.escape_non_ascii);
    /// ```
    #[must_use]
    pub fn with_escape_non_ascii(mut self, escape: bool) -> Self {
        self.escape_non_ascii = escape;
        self
    }
}
