//! Lazy record sources and the regions that embed them in a template.
//!
//! A [`RecordSource`] is the external collaborator that produces a region's
//! data: a finite, single-pass, pull-based sequence of keyed records. Pulling
//! the next record may block (a row fetch, a disk read) and may fail. The
//! renderer pulls each record exactly once and never rewinds.
//!
//! The key of the *first* record decides the region's rendered shape:
//!
//! - [`RecordKey::Index(0)`](RecordKey): the region renders as a JSON
//!   array; subsequent keys are ignored and only values are emitted.
//! - Anything else: the region renders as a JSON object; every record's
//!   key and value are emitted.
//!
//! The decision is made once and is not re-validated against later records;
//! a source must keep a homogeneous key scheme for its whole lifetime.
//!
//! ## Examples
//!
//! ```rust
//! use json_drip::{LazyRegion, Template, to_string};
//!
//! // Positional records stream as an array
//! let region = LazyRegion::from_values(vec![
//!     Template::from(1),
//!     Template::from(2),
//! ]);
//! assert_eq!(to_string(Template::Lazy(region)).unwrap(), "[1,2]");
//!
//! // Named records stream as an object
//! let region = LazyRegion::from_entries(vec![
//!     ("a".to_string(), Template::from(1)),
//! ]);
//! assert_eq!(to_string(Template::Lazy(region)).unwrap(), "{\"a\":1}");
//! ```

use crate::{Result, Template};
use std::fmt;

/// The key of a streamed record.
///
/// Integer keys signal positional (array) data; string keys signal named
/// (object) data. An `Index` key rendered in object shape is emitted as its
/// decimal string form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordKey {
    /// Zero-based position within the sequence.
    Index(u64),
    /// Arbitrary member name.
    Name(String),
}

impl RecordKey {
    /// Returns `true` if this key marks the start of positional data.
    #[must_use]
    pub fn starts_list(&self) -> bool {
        matches!(self, RecordKey::Index(0))
    }
}

impl From<u64> for RecordKey {
    fn from(index: u64) -> Self {
        RecordKey::Index(index)
    }
}

impl From<String> for RecordKey {
    fn from(name: String) -> Self {
        RecordKey::Name(name)
    }
}

impl From<&str> for RecordKey {
    fn from(name: &str) -> Self {
        RecordKey::Name(name.to_string())
    }
}

/// One item of a lazy sequence: a key paired with a JSON-encodable value.
///
/// The value is any [`Template`] that does not itself contain a lazy region
/// (regions never nest; a nested region is reported as a streaming error).
#[derive(Debug, PartialEq)]
pub struct Record {
    pub key: RecordKey,
    pub value: Template,
}

impl Record {
    /// Creates a record from anything convertible to a key and a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_drip::{Record, RecordKey, Template};
    ///
    /// let rec = Record::new(0u64, Template::from("first"));
    /// assert_eq!(rec.key, RecordKey::Index(0));
    /// ```
    pub fn new(key: impl Into<RecordKey>, value: impl Into<Template>) -> Self {
        Record {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A pull-based producer of records for one lazy region.
///
/// Implementations typically wrap a database cursor, a paged API client, or
/// any other producer where materializing the whole sequence up front would
/// defeat the point of streaming.
///
/// Contract: the sequence is finite and single-pass. After `pull` returns
/// `None` it is never called again for that region. A `Some(Err(_))` aborts
/// the region (and the whole render) without further pulls.
pub trait RecordSource {
    /// Pulls the next record, or `None` when the sequence is exhausted.
    fn pull(&mut self) -> Option<Result<Record>>;
}

/// A marker embedding a lazy sequence at one position in a template.
///
/// The region owns its source; streaming a document consumes the template
/// and with it every region it contains. A region streams exactly once.
pub struct LazyRegion {
    source: Box<dyn RecordSource>,
}

impl LazyRegion {
    /// Wraps an arbitrary [`RecordSource`].
    pub fn new(source: impl RecordSource + 'static) -> Self {
        LazyRegion {
            source: Box::new(source),
        }
    }

    /// Builds a region from in-memory values, keyed positionally from zero.
    ///
    /// Mostly useful in tests and small documents; real call sites should
    /// wrap their cursor in a [`RecordSource`] instead.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Template>,
        I::IntoIter: 'static,
    {
        Self::new(ValueSource {
            iter: values.into_iter(),
            index: 0,
        })
    }

    /// Builds a region from in-memory `(key, value)` entries with string keys.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Template)>,
        I::IntoIter: 'static,
    {
        Self::new(EntrySource {
            iter: entries.into_iter(),
        })
    }

    /// Builds a region from a pull closure, e.g. a row-fetch callback.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_drip::{LazyRegion, Record, Template, to_string};
    ///
    /// let mut rows = (0u64..3).map(|i| Record::new(i, Template::from(i as i64)));
    /// let region = LazyRegion::from_fn(move || rows.next().map(Ok));
    /// assert_eq!(to_string(Template::Lazy(region)).unwrap(), "[0,1,2]");
    /// ```
    pub fn from_fn<F>(pull: F) -> Self
    where
        F: FnMut() -> Option<Result<Record>> + 'static,
    {
        Self::new(FnSource { pull })
    }

    pub(crate) fn into_source(self) -> Box<dyn RecordSource> {
        self.source
    }
}

impl fmt::Debug for LazyRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LazyRegion")
    }
}

struct ValueSource<I> {
    iter: I,
    index: u64,
}

impl<I: Iterator<Item = Template>> RecordSource for ValueSource<I> {
    fn pull(&mut self) -> Option<Result<Record>> {
        let value = self.iter.next()?;
        let key = RecordKey::Index(self.index);
        self.index += 1;
        Some(Ok(Record { key, value }))
    }
}

struct EntrySource<I> {
    iter: I,
}

impl<I: Iterator<Item = (String, Template)>> RecordSource for EntrySource<I> {
    fn pull(&mut self) -> Option<Result<Record>> {
        let (name, value) = self.iter.next()?;
        Some(Ok(Record {
            key: RecordKey::Name(name),
            value,
        }))
    }
}

struct FnSource<F> {
    pull: F,
}

impl<F: FnMut() -> Option<Result<Record>>> RecordSource for FnSource<F> {
    fn pull(&mut self) -> Option<Result<Record>> {
        (self.pull)()
    }
}
