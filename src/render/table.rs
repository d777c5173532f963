//! Markdown pipe tables.
//!
//! Cells are written as given; `|` inside a cell is not escaped.

/// How table cells are laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TableStyle {
    /// `| a | b |` with no padding and `---` delimiters.
    #[default]
    Compact,
    /// Every cell padded to its column's widest cell, delimiters sized to match.
    Aligned,
}

/// Render `header` plus `rows` as a table, without a trailing newline.
///
/// Short rows are padded with empty cells up to the widest row.
pub fn render_table(header: &[String], rows: &[Vec<String>], style: TableStyle) -> String {
    let columns = rows
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0);

    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            std::iter::once(header)
                .chain(rows.iter().map(Vec::as_slice))
                .map(|row| row.get(col).map_or(0, |c| c.chars().count()))
                .max()
                .unwrap_or(0)
                .max(1)
        })
        .collect();

    let delimiter: Vec<String> = widths
        .iter()
        .map(|&w| match style {
            TableStyle::Compact => "---".to_string(),
            TableStyle::Aligned => "-".repeat(w),
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render_row(header, &widths, style));
    lines.push(render_row(&delimiter, &widths, style));
    for row in rows {
        lines.push(render_row(row, &widths, style));
    }
    lines.join("\n")
}

fn render_row(cells: &[String], widths: &[usize], style: TableStyle) -> String {
    let cells: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(i, &width)| {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            match style {
                TableStyle::Compact => cell.to_string(),
                TableStyle::Aligned => {
                    let pad = width.saturating_sub(cell.chars().count());
                    format!("{}{}", cell, " ".repeat(pad))
                }
            }
        })
        .collect();
    format!("| {} |", cells.join(" | "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn compact_table() {
        let out = render_table(
            &strings(&["Name", "Description"]),
            &[strings(&["build", "builds it"])],
            TableStyle::Compact,
        );
        assert_eq!(out, "| Name | Description |\n| --- | --- |\n| build | builds it |");
    }

    #[test]
    fn aligned_table() {
        let out = render_table(
            &strings(&["Name", "Description"]),
            &[strings(&["build", "builds it"])],
            TableStyle::Aligned,
        );
        assert_eq!(
            out,
            "| Name  | Description |\n| ----- | ----------- |\n| build | builds it   |"
        );
    }

    #[test]
    fn aligned_counts_chars_not_bytes() {
        let out = render_table(
            &strings(&["Name"]),
            &[strings(&["café"])],
            TableStyle::Aligned,
        );
        assert_eq!(out, "| Name |\n| ---- |\n| café |");
    }

    #[test]
    fn short_rows_get_empty_cells() {
        let out = render_table(
            &strings(&["Name", "Type", "Default"]),
            &[strings(&["port"])],
            TableStyle::Compact,
        );
        assert_eq!(out.lines().last(), Some("| port |  |  |"));
    }

    #[test]
    fn pipes_are_not_escaped() {
        let out = render_table(
            &strings(&["Name", "Type"]),
            &[strings(&["mode", "a|b"])],
            TableStyle::Compact,
        );
        assert!(out.ends_with("| mode | a|b |"));
    }
}
