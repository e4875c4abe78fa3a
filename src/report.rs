//! Plain-text tables for the printer binary.

use std::fmt;

#[derive(Debug, Default)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Add a row. Short rows are padded with empty cells, extra cells are dropped.
    pub fn push_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cells: Vec<String> = row.into_iter().map(Into::into).collect();
        cells.resize(self.header.len(), String::new());
        self.rows.push(cells);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.header.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }
}

fn write_rule(f: &mut fmt::Formatter<'_>, widths: &[usize]) -> fmt::Result {
    for width in widths {
        write!(f, "+{}", "-".repeat(width + 2))?;
    }
    writeln!(f, "+")
}

fn write_cells(f: &mut fmt::Formatter<'_>, widths: &[usize], cells: &[String]) -> fmt::Result {
    for (width, cell) in widths.iter().zip(cells) {
        let pad = width - cell.chars().count();
        write!(f, "| {}{} ", cell, " ".repeat(pad))?;
    }
    writeln!(f, "|")
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();
        write_rule(f, &widths)?;
        write_cells(f, &widths, &self.header)?;
        write_rule(f, &widths)?;
        for row in &self.rows {
            write_cells(f, &widths, row)?;
        }
        if !self.rows.is_empty() {
            write_rule(f, &widths)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_aligned_columns() {
        let mut table = Table::new(["Key", "Value"]);
        table.push_row(["name", "John"]);
        table.push_row(["age", "30"]);
        let expected = "\
+------+-------+
| Key  | Value |
+------+-------+
| name | John  |
| age  | 30    |
+------+-------+
";
        assert_eq!(table.to_string(), expected);
    }

    #[test]
    fn pads_short_rows_and_handles_no_rows() {
        let mut table = Table::new(["A", "B"]);
        table.push_row(["x"]);
        assert!(table.to_string().contains("| x | "));

        let empty = Table::new(["Query String"]);
        assert_eq!(
            empty.to_string(),
            "+--------------+\n| Query String |\n+--------------+\n"
        );
    }
}
