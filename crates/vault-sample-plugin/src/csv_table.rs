//! `csv` code block renderer.
//!
//! Every non-blank line becomes a row and every delimiter-separated field a
//! cell. There is no quoting, no header row and no padding of ragged rows.

use crate::dom::Element;
use crate::registry::{CodeBlockProcessor, ProcessorContext};

pub const DEFAULT_DELIMITER: char = ',';

/// Rows of cells as they appeared in the source block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CsvTable {
    rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn parse(raw: &str) -> Self {
        Self::parse_with_delimiter(raw, DEFAULT_DELIMITER)
    }

    pub fn parse_with_delimiter(raw: &str, delimiter: char) -> Self {
        // Blank lines go before field splitting, so "," still yields a row.
        let rows = raw
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| line.split(delimiter).map(str::to_string).collect())
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Build `table > tbody > tr > td`, one `td` per cell with its literal text.
    pub fn render(&self) -> Element {
        let mut table = Element::new("table");
        let body = table.create_el("tbody");
        for row in &self.rows {
            let tr = body.create_el("tr");
            for cell in row {
                tr.create_el_with_text("td", cell.as_str());
            }
        }
        table
    }

    pub fn render_into(&self, el: &mut Element) {
        el.append(self.render());
    }
}

/// Code block processor registered for the `csv` language tag.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvBlockProcessor;

impl CsvBlockProcessor {
    pub const LANGUAGE: &'static str = "csv";
}

impl CodeBlockProcessor for CsvBlockProcessor {
    fn process(&self, source: &str, el: &mut Element, ctx: &ProcessorContext) {
        let table = CsvTable::parse(source);
        log::debug!(
            "Rendering csv block with {} rows{}",
            table.row_count(),
            ctx.source_path
                .as_ref()
                .map(|p| format!(" in {p}"))
                .unwrap_or_default()
        );
        table.render_into(el);
    }
}
