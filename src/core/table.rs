//! Tabular projection of records.
//!
//! Flattens records into `(name, type, key, value)` rows sorted by record
//! name then key, and renders them as tab-aligned text.

use std::io::{self, Write};

use base64::Engine;

use crate::core::constants::{TABLE_HEADER, TAB_WIDTH};
use crate::core::domain::Record;
use crate::core::quote;

/// How values are shown in a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValueEncoding {
    /// Double-quoted literal, as in dotenv output
    #[default]
    Quoted,
    /// Standard base64
    Base64,
}

impl ValueEncoding {
    /// Pick the encoding from the `--base64` flag.
    pub fn from_flag(base64: bool) -> Self {
        if base64 {
            Self::Base64
        } else {
            Self::Quoted
        }
    }

    /// Encode one value.
    pub fn encode(self, value: &[u8]) -> String {
        match self {
            Self::Quoted => quote::quote(value),
            Self::Base64 => base64::engine::general_purpose::STANDARD.encode(value),
        }
    }
}

/// One display row of `k8sec list`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DisplayRow {
    pub name: String,
    pub kind: String,
    pub key: String,
    pub value: String,
}

impl DisplayRow {
    fn cells(&self) -> [&str; 4] {
        [&self.name, &self.kind, &self.key, &self.value]
    }
}

/// Flatten records into rows ordered by `(name, key)`.
pub fn flatten(records: &[Record], encoding: ValueEncoding) -> Vec<DisplayRow> {
    let mut rows: Vec<DisplayRow> = records
        .iter()
        .flat_map(|record| {
            record.data.iter().map(move |(key, value)| DisplayRow {
                name: record.name.clone(),
                kind: record.kind.clone(),
                key: key.clone(),
                value: encoding.encode(value),
            })
        })
        .collect();

    rows.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.key.cmp(&b.key)));
    rows
}

/// Render the header and rows as tab-aligned text.
///
/// Every column except the last is padded with tabs up to the next tab stop
/// past its widest cell, so columns line up with 8-column tab stops.
pub fn render(rows: &[DisplayRow], out: &mut dyn Write) -> io::Result<()> {
    let lines: Vec<[&str; 4]> = std::iter::once(TABLE_HEADER)
        .chain(rows.iter().map(DisplayRow::cells))
        .collect();

    let mut widths = [0usize; 3];
    for cells in &lines {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }
    let stops: Vec<usize> = widths
        .iter()
        .map(|w| (w / TAB_WIDTH + 1) * TAB_WIDTH)
        .collect();

    for cells in &lines {
        let mut line = String::new();
        for (cell, stop) in cells.iter().zip(&stops) {
            let pad = stop - cell.chars().count();
            line.push_str(cell);
            line.push_str(&"\t".repeat(pad.div_ceil(TAB_WIDTH)));
        }
        line.push_str(cells[3]);
        writeln!(out, "{}", line)?;
    }

    Ok(())
}
