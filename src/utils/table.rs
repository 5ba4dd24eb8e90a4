//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::{pad_left, pad_right, visible_width};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub align: Align,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Left,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Right,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|cell| visible_width(cell))
                    .chain(std::iter::once(visible_width(&col.header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let cell = |text: &str, i: usize| match self.columns[i].align {
            Align::Left => pad_right(text, widths[i]),
            Align::Right => pad_left(text, widths[i]),
        };

        // Header
        for (i, col) in self.columns.iter().enumerate() {
            out.push_str(&cell(&col.header, i));
            out.push_str("  ");
        }
        out.push('\n');
        out.push_str(&"-".repeat(widths.iter().map(|w| w + 2).sum::<usize>()));
        out.push('\n');

        // Rows
        for row in &self.rows {
            for i in 0..self.columns.len() {
                out.push_str(&cell(row.get(i).map(String::as_str).unwrap_or(""), i));
                out.push_str("  ");
            }
            out.push('\n');
        }

        out
    }
}
