//! # json_drip
//!
//! An incremental JSON structure renderer: serialize a document template
//! with embedded lazy record sequences to an output stream, in bounded
//! memory, flushing in controlled batches.
//!
//! ## Why streaming?
//!
//! A typical API response wraps a long, database-backed collection in a
//! fixed envelope: pagination info, totals, metadata. Materializing the
//! whole collection before the first byte leaves the server costs memory
//! proportional to the collection and delays time-to-first-byte. json_drip
//! encodes the envelope up front, then pulls the collection record by
//! record, writing and flushing as it goes. The bytes on the wire are
//! exactly what a non-streamed encode of the fully materialized document
//! would have produced.
//!
//! ## Key Features
//!
//! - **Bounded memory**: only the record currently being encoded is held;
//!   sequence length never affects memory use
//! - **Byte-identical output**: a consumer that buffers the response and
//!   parses it sees no difference from eager encoding
//! - **Batched flushing**: the writer is flushed every N records so clients
//!   start receiving data early; never redundantly after the last record
//! - **Shape inference**: a region whose records are keyed 0,1,2,… renders
//!   as a JSON array; string-keyed records render as a JSON object
//! - **Two-phase API**: skeleton encoding can fail before any byte is
//!   written, leaving room for a clean error response
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! json_drip = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Streaming a wrapped collection
//!
//! ```rust
//! use json_drip::{template, to_writer, LazyRegion, Template};
//!
//! // In real use the region wraps a database cursor via LazyRegion::from_fn
//! // or a RecordSource impl; a vector works for the example.
//! let articles = LazyRegion::from_values(vec![
//!     Template::from("intro"),
//!     Template::from("outro"),
//! ]);
//!
//! let doc = template!({
//!     "embedded": { "articles": (lazy articles) },
//!     "total": 2
//! });
//!
//! let mut body = Vec::new();
//! to_writer(doc, &mut body).unwrap();
//! assert_eq!(
//!     String::from_utf8(body).unwrap(),
//!     r#"{"embedded":{"articles":["intro","outro"]},"total":2}"#
//! );
//! ```
//!
//! ### Two-phase rendering
//!
//! ```rust
//! use json_drip::{encode, template, StreamOptions};
//!
//! let doc = template!({ "status": "ok" });
//!
//! // encode() can fail; nothing has been written yet, so a caller serving
//! // HTTP can still swap in an error response here.
//! let skeleton = encode(doc, StreamOptions::new().with_flush_threshold(100)).unwrap();
//!
//! // stream() commits bytes to the transport.
//! let mut body = Vec::new();
//! skeleton.stream(&mut body).unwrap();
//! ```
//!
//! ## Failure model
//!
//! Three phases, three errors: [`Error::Encoding`] before any output,
//! [`Error::Streaming`] after output has started (the consumer receives a
//! truncated document; the error is for server-side reporting), and
//! [`Error::Transport`] when the writer itself fails. See the [`error`]
//! module.
//!
//! ## Serving over HTTP
//!
//! The crate writes to any [`std::io::Write`]; transports, routing, and
//! headers stay outside. Advertise the body as `application/json`; the
//! completed stream is one ordinary JSON document, not line-delimited
//! framing.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - envelope plus a streamed array
//! - **`paged_rows.rs`** - pulling records from a paged, fallible source
//!
//! Run any example with: `cargo run --example <name>`

pub mod encode;
pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod source;
pub mod stream;
pub mod value;

pub use encode::{encode, Skeleton};
pub use error::{Error, Result};
pub use map::TemplateMap;
pub use options::{StreamOptions, DEFAULT_FLUSH_THRESHOLD};
pub use ser::{to_template, TemplateSerializer};
pub use source::{LazyRegion, Record, RecordKey, RecordSource};
pub use value::{Number, Template};

use std::io;

/// Streams a template to a writer with default options.
///
/// # Examples
///
/// ```rust
/// use json_drip::{to_writer, Template};
///
/// let mut body = Vec::new();
/// to_writer(Template::from(42), &mut body).unwrap();
/// assert_eq!(body, b"42");
/// ```
///
/// # Errors
///
/// Returns an error if the skeleton cannot be encoded, a region's source
/// fails, or the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(template: Template, writer: &mut W) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(template, writer, StreamOptions::default())
}

/// Streams a template to a writer with custom options.
///
/// # Examples
///
/// ```rust
/// use json_drip::{to_writer_with_options, StreamOptions, Template};
///
/// let options = StreamOptions::new().with_flush_threshold(10);
/// let mut body = Vec::new();
/// to_writer_with_options(Template::from("x"), &mut body, options).unwrap();
/// ```
///
/// # Errors
///
/// Returns an error if the skeleton cannot be encoded, a region's source
/// fails, or the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W>(
    template: Template,
    writer: &mut W,
    options: StreamOptions,
) -> Result<()>
where
    W: io::Write,
{
    encode(template, options)?.stream(writer)
}

/// Renders a template to a `String`, draining every lazy region.
///
/// Buffers the whole document, so this forfeits the streaming benefits;
/// useful for tests and small documents.
///
/// # Examples
///
/// ```rust
/// use json_drip::{to_string, template};
///
/// let out = to_string(template!({ "ok": true })).unwrap();
/// assert_eq!(out, r#"{"ok":true}"#);
/// ```
///
/// # Errors
///
/// Returns an error if encoding fails or a region's source fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(template: Template) -> Result<String> {
    to_string_with_options(template, StreamOptions::default())
}

/// Renders a template to a `String` with custom options.
///
/// # Errors
///
/// Returns an error if encoding fails or a region's source fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options(template: Template, options: StreamOptions) -> Result<String> {
    let mut buf = Vec::with_capacity(256);
    to_writer_with_options(template, &mut buf, options)?;
    String::from_utf8(buf).map_err(|e| Error::custom(e.to_string()))
}
