//! An envelope document with one streamed collection.
//!
//! Run with: cargo run --example simple

use json_drip::{template, to_writer, LazyRegion, Template};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let articles = LazyRegion::from_values(vec![
        template!({ "id": 1, "title": "Streaming JSON" }),
        template!({ "id": 2, "title": "Bounded memory" }),
        template!({ "id": 3, "title": "Early first byte" }),
    ]);

    let doc = template!({
        "embedded": { "articles": (lazy articles) },
        "total": 3
    });

    // Stream straight to stdout; a server would hand over the response body.
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    to_writer(doc, &mut lock)?;
    println!();

    Ok(())
}
