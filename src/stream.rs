//! The sequence streamer.
//!
//! [`Skeleton::stream`] drives the second half of a render: it interleaves
//! the encoder's literal segments with the lazy regions between them, in
//! document order, writing everything to a single destination writer.
//!
//! Regions are processed strictly sequentially. A region is exhausted
//! before the next one starts, each record is pulled exactly once, and only
//! the record currently being encoded is held in memory, so a region of any
//! length streams in bounded space.
//!
//! Per region the streamer:
//!
//! 1. pulls the first record; an immediately-exhausted source renders `[]`,
//! 2. decides the shape (array vs object) from the first record's key,
//! 3. writes each record with separators (and keys for object shape),
//!    flushing the writer after every `flush_threshold` records as long as
//!    more records remain, never after the final one,
//! 4. closes the bracket once the source is exhausted.
//!
//! A source failure mid-region surfaces as [`Error::Streaming`]: bytes are
//! already committed, so the consumer ends up with a truncated document and
//! the error goes to the caller's reporting instead. Writer failures
//! surface as [`Error::Transport`] and stop everything immediately.

use crate::encode::{encode_item, write_json_string};
use crate::{Error, LazyRegion, RecordKey, Result, Skeleton, StreamOptions};
use std::io::Write;

/// Whether a region renders as a JSON array or object. Decided once per
/// region from the first record's key, then trusted for every later record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Shape {
    List,
    Map,
}

impl Shape {
    fn from_first_key(key: &RecordKey) -> Self {
        if key.starts_list() {
            Shape::List
        } else {
            Shape::Map
        }
    }

    const fn open(self) -> &'static [u8] {
        match self {
            Shape::List => b"[",
            Shape::Map => b"{",
        }
    }

    const fn close(self) -> &'static [u8] {
        match self {
            Shape::List => b"]",
            Shape::Map => b"}",
        }
    }
}

impl Skeleton {
    /// Streams the document to `writer`.
    ///
    /// Consumes the skeleton; a document streams exactly once. The
    /// concatenated output is valid JSON, identical in value to encoding
    /// the template with every region fully materialized.
    ///
    /// # Errors
    ///
    /// - [`Error::Streaming`] if a region's source fails or yields a value
    ///   that cannot be encoded. Output is already partially written; the
    ///   document on the wire is truncated.
    /// - [`Error::Transport`] if a write or flush fails (e.g. the client
    ///   disconnected). No further records are pulled.
    pub fn stream<W: Write>(self, writer: &mut W) -> Result<()> {
        let Skeleton {
            segments,
            regions,
            options,
        } = self;

        let mut segments = segments.into_iter();
        for (index, region) in regions.into_iter().enumerate() {
            if let Some(segment) = segments.next() {
                write_all(writer, segment.as_bytes())?;
            }
            stream_region(region, index, writer, &options)?;
        }
        for segment in segments {
            write_all(writer, segment.as_bytes())?;
        }
        Ok(())
    }
}

fn stream_region<W: Write>(
    region: LazyRegion,
    index: usize,
    writer: &mut W,
    options: &StreamOptions,
) -> Result<()> {
    let mut source = region.into_source();
    // The builder clamps 0 to 1, but the field is public and may bypass it.
    let flush_threshold = options.flush_threshold.max(1);

    let first = match source.pull() {
        None => {
            // No record observed: default to list shape.
            write_all(writer, b"[]")?;
            return Ok(());
        }
        Some(record) => record.map_err(|e| Error::streaming(index, &e.to_string()))?,
    };

    let shape = Shape::from_first_key(&first.key);
    write_all(writer, shape.open())?;

    let mut buf = String::with_capacity(128);
    let mut written: usize = 0;
    let mut pending = first;
    loop {
        buf.clear();
        if written > 0 {
            buf.push(',');
        }
        if shape == Shape::Map {
            match &pending.key {
                RecordKey::Name(name) => write_json_string(&mut buf, name, options),
                RecordKey::Index(i) => write_json_string(&mut buf, &i.to_string(), options),
            }
            buf.push(':');
        }
        let value = encode_item(pending.value, options)
            .map_err(|e| Error::streaming(index, &e.to_string()))?;
        buf.push_str(&value);
        write_all(writer, buf.as_bytes())?;
        written += 1;

        match source.pull() {
            None => break,
            Some(next) => {
                // More records follow, so a batch-boundary flush here is
                // never the redundant trailing one.
                if written % flush_threshold == 0 {
                    writer.flush().map_err(Error::transport)?;
                }
                pending = next.map_err(|e| Error::streaming(index, &e.to_string()))?;
            }
        }
    }

    write_all(writer, shape.close())?;
    Ok(())
}

fn write_all<W: Write>(writer: &mut W, bytes: &[u8]) -> Result<()> {
    writer.write_all(bytes).map_err(Error::transport)
}
