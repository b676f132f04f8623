//! Streaming from a paged, fallible source.
//!
//! Simulates a data-access layer that fetches rows in pages, the way a
//! database cursor or paged HTTP API would. Each page fetch does bounded
//! work; the renderer pulls rows one at a time and only triggers the next
//! fetch when the current page runs out.
//!
//! Run with: cargo run --example paged_rows

use json_drip::{
    encode, template, to_template, LazyRegion, Record, RecordSource, StreamOptions,
};
use serde::Serialize;
use std::error::Error;

#[derive(Serialize)]
struct Row {
    id: u64,
    name: String,
}

/// A cursor over a paged backend.
struct PagedRows {
    next_id: u64,
    total: u64,
    page: Vec<Row>,
    page_size: usize,
}

impl PagedRows {
    fn fetch_page(&mut self) {
        // A real implementation would hit the database here.
        let remaining = self.total.saturating_sub(self.next_id);
        let count = (self.page_size as u64).min(remaining);
        self.page = (self.next_id..self.next_id + count)
            .map(|id| Row {
                id,
                name: format!("row-{id}"),
            })
            .collect();
        self.page.reverse();
    }
}

impl RecordSource for PagedRows {
    fn pull(&mut self) -> Option<json_drip::Result<Record>> {
        if self.page.is_empty() {
            self.fetch_page();
        }
        let row = self.page.pop()?;
        let index = self.next_id;
        self.next_id += 1;
        Some(to_template(&row).map(|value| Record::new(index, value)))
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let rows = PagedRows {
        next_id: 0,
        total: 12,
        page: Vec::new(),
        page_size: 5,
    };

    let doc = template!({
        "rows": (lazy LazyRegion::new(rows)),
        "page_size": 5
    });

    // Flush every 5 rows so a client sees each page as it completes.
    let skeleton = encode(doc, StreamOptions::new().with_flush_threshold(5))?;

    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    skeleton.stream(&mut lock)?;
    println!();

    Ok(())
}
