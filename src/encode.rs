//! The structure encoder.
//!
//! [`encode`] walks a [`Template`] once, pre-order and depth-first, and
//! serializes every non-lazy node to JSON text immediately. Each lazy region
//! ends the current text segment and is moved, in document order, into the
//! resulting [`Skeleton`]'s region list. The skeleton therefore holds N+1
//! literal segments around N regions; the position of every region is
//! tracked structurally as a segment boundary, so no placeholder string ever
//! appears in the text and no literal value can be mistaken for a marker.
//!
//! Encoding touches no region contents and writes nothing to any transport.
//! If it fails (the only non-representable input is a non-finite float),
//! the caller has sent zero bytes and can still respond with something else.
//!
//! ## Examples
//!
//! ```rust
//! use json_drip::{encode, LazyRegion, StreamOptions, Template};
//!
//! let doc = Template::Array(vec![
//!     Template::from("head"),
//!     Template::Lazy(LazyRegion::from_values(vec![Template::from(1)])),
//!     Template::from("tail"),
//! ]);
//!
//! let skeleton = encode(doc, StreamOptions::new()).unwrap();
//! assert_eq!(skeleton.region_count(), 1);
//!
//! let mut out = Vec::new();
//! skeleton.stream(&mut out).unwrap();
//! assert_eq!(out, b"[\"head\",[1],\"tail\"]");
//! ```

use crate::{Error, LazyRegion, Number, Result, StreamOptions, Template};

/// The output of the structure encoder: the fully encoded non-lazy text,
/// split at region boundaries, plus the regions themselves in document
/// order.
///
/// A skeleton is inert until [`Skeleton::stream`](Skeleton::stream) is
/// called; constructing it performs no I/O, which gives callers a window to
/// fail over cleanly (set response status, headers) before the first byte is
/// committed.
#[derive(Debug)]
pub struct Skeleton {
    pub(crate) segments: Vec<String>,
    pub(crate) regions: Vec<LazyRegion>,
    pub(crate) options: StreamOptions,
}

impl Skeleton {
    /// Returns the number of lazy regions recorded in document order.
    #[must_use]
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Returns the total byte length of the literal (non-region) text.
    #[must_use]
    pub fn literal_len(&self) -> usize {
        self.segments.iter().map(String::len).sum()
    }
}

/// Encodes a template into a [`Skeleton`].
///
/// The template is consumed: its lazy regions move into the skeleton so that
/// streaming can pull from them later.
///
/// # Errors
///
/// Returns [`Error::Encoding`] if any node outside a region is not
/// representable as JSON (a non-finite float). Nothing has been written when
/// this happens.
pub fn encode(template: Template, options: StreamOptions) -> Result<Skeleton> {
    let mut encoder = Encoder {
        options: &options,
        out: String::with_capacity(256),
        segments: Vec::new(),
        regions: Vec::new(),
        path: Vec::new(),
        allow_regions: true,
    };
    encoder.node(template)?;
    let mut segments = encoder.segments;
    segments.push(encoder.out);
    Ok(Skeleton {
        segments,
        regions: encoder.regions,
        options,
    })
}

/// Encodes one streamed item's value to JSON text.
///
/// Items may not contain lazy regions; regions never nest.
pub(crate) fn encode_item(value: Template, options: &StreamOptions) -> Result<String> {
    let mut encoder = Encoder {
        options,
        out: String::with_capacity(64),
        segments: Vec::new(),
        regions: Vec::new(),
        path: Vec::new(),
        allow_regions: false,
    };
    encoder.node(value)?;
    Ok(encoder.out)
}

enum PathSeg {
    Key(String),
    Index(usize),
}

struct Encoder<'a> {
    options: &'a StreamOptions,
    out: String,
    segments: Vec<String>,
    regions: Vec<LazyRegion>,
    path: Vec<PathSeg>,
    allow_regions: bool,
}

impl Encoder<'_> {
    fn node(&mut self, template: Template) -> Result<()> {
        match template {
            Template::Null => self.out.push_str("null"),
            Template::Bool(b) => self.out.push_str(if b { "true" } else { "false" }),
            Template::Number(n) => self.number(&n)?,
            Template::String(s) => write_json_string(&mut self.out, &s, self.options),
            Template::Array(items) => {
                self.out.push('[');
                for (i, item) in items.into_iter().enumerate() {
                    if i > 0 {
                        self.out.push(',');
                    }
                    self.path.push(PathSeg::Index(i));
                    self.node(item)?;
                    self.path.pop();
                }
                self.out.push(']');
            }
            Template::Object(map) => {
                self.out.push('{');
                for (i, (key, value)) in map.into_iter().enumerate() {
                    if i > 0 {
                        self.out.push(',');
                    }
                    write_json_string(&mut self.out, &key, self.options);
                    self.out.push(':');
                    self.path.push(PathSeg::Key(key));
                    self.node(value)?;
                    self.path.pop();
                }
                self.out.push('}');
            }
            Template::Lazy(region) => {
                if !self.allow_regions {
                    return Err(Error::custom("lazy regions cannot nest inside a streamed item"));
                }
                self.segments.push(std::mem::take(&mut self.out));
                self.regions.push(region);
            }
        }
        Ok(())
    }

    fn number(&mut self, n: &Number) -> Result<()> {
        if !n.is_finite() {
            return Err(Error::encoding(
                &self.path_string(),
                "non-finite number is not representable in JSON",
            ));
        }
        write_json_number(&mut self.out, n);
        Ok(())
    }

    fn path_string(&self) -> String {
        let mut rendered = String::from("$");
        for seg in &self.path {
            match seg {
                PathSeg::Key(k) => {
                    rendered.push('.');
                    rendered.push_str(k);
                }
                PathSeg::Index(i) => {
                    rendered.push('[');
                    rendered.push_str(&i.to_string());
                    rendered.push(']');
                }
            }
        }
        rendered
    }
}

/// Writes a number known to be finite.
pub(crate) fn write_json_number(out: &mut String, n: &Number) {
    match n {
        Number::Integer(i) => out.push_str(&i.to_string()),
        Number::Float(f) => out.push_str(&f.to_string()),
    }
}

/// Writes a JSON string literal, quotes included, honoring the escaping
/// options.
pub(crate) fn write_json_string(out: &mut String, s: &str, options: &StreamOptions) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '/' if options.escape_slashes => out.push_str("\\/"),
            c if (c as u32) < 0x20 => push_unicode_escape(out, c as u16),
            c if options.escape_non_ascii && !c.is_ascii() => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    push_unicode_escape(out, *unit);
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

fn push_unicode_escape(out: &mut String, unit: u16) {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    out.push_str("\\u");
    out.push(HEX[(unit >> 12 & 0xf) as usize] as char);
    out.push(HEX[(unit >> 8 & 0xf) as usize] as char);
    out.push(HEX[(unit >> 4 & 0xf) as usize] as char);
    out.push(HEX[(unit & 0xf) as usize] as char);
}
