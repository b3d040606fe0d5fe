//! Minimal markdown table rendering

/// Renders rows into a markdown table with uniform column widths and a
/// one-space margin around every cell.
pub struct MarkdownTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl MarkdownTable {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a data row. Missing cells render as empty; extra cells are
    /// ignored.
    pub fn push_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    /// Render the full table, ending with a trailing newline.
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        out.push_str(&render_line(&self.headers, &widths));
        out.push_str(&separator_line(&widths));
        for row in &self.rows {
            out.push_str(&render_line(row, &widths));
        }
        out
    }

    /// Per-column display width: the widest of the header and all cells
    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
        widths
    }
}

fn render_line(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, width) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        let pad = width.saturating_sub(cell.chars().count());
        line.push_str("| ");
        line.push_str(cell);
        line.push_str(&" ".repeat(pad));
        line.push(' ');
    }
    line.push_str("|\n");
    line
}

fn separator_line(widths: &[usize]) -> String {
    let mut line = String::new();
    for width in widths {
        line.push_str("| ");
        line.push_str(&"-".repeat(*width));
        line.push(' ');
    }
    line.push_str("|\n");
    line
}
