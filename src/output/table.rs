// vela-env: Environment and config registry for the vela CLI
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt::Write as _;

/// Text table with every cell padded to its column width.
///
/// ```text
/// NAME   <sep>CURRENT<sep>NAMESPACE
/// default<sep>       <sep>default
/// ```
///
/// Widths count characters. The last column is padded too, so blank cells
/// keep their width.
#[derive(Debug, Clone)]
pub struct Table {
    rows: Vec<Vec<String>>,
    separator: String,
}

impl Table {
    /// Table with a header row and a single-space separator.
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: vec![header.into_iter().map(Into::into).collect()],
            separator: " ".to_string(),
        }
    }

    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn add_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    fn widths(&self) -> Vec<usize> {
        let columns = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        (0..columns)
            .map(|col| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(col))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Renders all rows, each terminated by `\n`.
    #[must_use]
    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();
        for row in &self.rows {
            let line = widths
                .iter()
                .enumerate()
                .map(|(col, &width)| {
                    let cell = row.get(col).map_or("", String::as_str);
                    format!("{cell:<width$}")
                })
                .collect::<Vec<_>>()
                .join(&self.separator);
            let _ = writeln!(out, "{line}");
        }
        out
    }
}
