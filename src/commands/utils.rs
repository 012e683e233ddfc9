//! Plain-text table formatting for terminal output.

/// Renders a header and rows as a width-padded text table.
pub(crate) fn format_table(header: &[String], rows: &[Vec<String>]) -> String {
    let columns = header.len().max(rows.iter().map(Vec::len).max().unwrap_or(0));
    let mut widths = vec![0usize; columns];
    for (i, label) in header.iter().enumerate() {
        widths[i] = label.chars().count();
    }
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule, &widths);
    for row in rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        let cell = cells.get(i).map_or("", String::as_str);
        out.push_str(cell);
        let padding = width.saturating_sub(cell.chars().count());
        if i + 1 < widths.len() {
            out.push_str(&" ".repeat(padding));
        }
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_line_up() {
        let header = vec!["Jugador".to_string(), "Enero".to_string()];
        let rows = vec![
            vec!["Ana Ruiz".to_string(), "50000".to_string()],
            vec!["Pedro".to_string(), "0".to_string()],
        ];
        let text = format_table(&header, &rows);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Jugador   Enero");
        assert_eq!(lines[1], "--------  -----");
        assert_eq!(lines[2], "Ana Ruiz  50000");
        assert_eq!(lines[3], "Pedro     0");
    }
}
