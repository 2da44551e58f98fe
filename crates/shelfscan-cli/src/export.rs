//! Streaming CSV output of catalog rows.
//!
//! The header is written on construction; rows are appended per
//! subcategory and flushed straight away, so a run that fails midway leaves
//! every completed subcategory on disk.

use std::io::Write;

use csv::{Terminator, WriterBuilder};
use shelfscan_core::CATALOG_COLUMNS;
use shelfscan_scraper::{hit_to_row, ProductHit};

pub(crate) struct CatalogWriter<W: Write> {
    inner: csv::Writer<W>,
    rows_written: u64,
}

impl<W: Write> CatalogWriter<W> {
    /// Wraps `writer` and emits the header row.
    pub(crate) fn new(writer: W) -> Result<Self, csv::Error> {
        let mut inner = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(writer);
        inner.write_record(CATALOG_COLUMNS)?;
        inner.flush()?;
        Ok(Self {
            inner,
            rows_written: 0,
        })
    }

    /// Appends one row per hit and flushes. Returns the number of rows written.
    pub(crate) fn write_hits(&mut self, hits: &[ProductHit]) -> Result<u64, csv::Error> {
        let mut written = 0u64;
        for hit in hits {
            self.inner.serialize(hit_to_row(hit))?;
            written += 1;
        }
        self.inner.flush()?;
        self.rows_written += written;
        Ok(written)
    }

    pub(crate) fn rows_written(&self) -> u64 {
        self.rows_written
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        match self.inner.into_inner() {
            Ok(writer) => writer,
            Err(err) => panic!("flush on into_inner failed: {err}"),
        }
    }
}
