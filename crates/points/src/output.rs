use colored::Colorize;
use points_core::{Cell, Section, Table};

pub fn output_report(sections: &[Section]) {
    print!("{}", render_report(sections));
}

pub fn output_error(err: &anyhow::Error) {
    eprintln!("{}: {:#}", "Error".red().bold(), err);
}

pub fn render_report(sections: &[Section]) -> String {
    let mut out = String::new();
    for section in sections {
        if let Some(heading) = &section.heading {
            out.push_str(&format!("\n{}\n\n", format!("# {}", heading).bold()));
        }
        for table in &section.tables {
            out.push_str(&render_table(table));
            out.push('\n');
        }
    }
    out
}

/// Render a table as a boxed text grid
///
/// ```text
/// +-------+--------+
/// | ALL ISSUES     |
/// +-------+--------+
/// | ISSUE | POINTS |
/// +-------+--------+
/// | Fix   |      5 |
/// +-------+--------+
/// |       |      5 |
/// +-------+--------+
/// ```
pub fn render_table(table: &Table) -> String {
    let header: Vec<String> = table.columns.iter().map(|c| c.to_uppercase()).collect();
    let body: Vec<Vec<String>> = table.rows.iter().map(|r| plain_row(r)).collect();
    let footer: Vec<Vec<String>> = table.footer.iter().map(|r| plain_row(r)).collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in body.iter().chain(footer.iter()) {
        for (idx, cell) in row.iter().enumerate() {
            if idx < widths.len() {
                widths[idx] = widths[idx].max(cell.chars().count());
            }
        }
    }

    // The title spans every column; widen the last column if it does not fit
    let title = table.title.to_uppercase();
    let inner = inner_width(&widths);
    let title_len = title.chars().count();
    if title_len > inner {
        if let Some(last) = widths.last_mut() {
            *last += title_len - inner;
        }
    }

    let separator = rule(&widths);
    let mut out = String::new();
    out.push_str(&separator);
    out.push_str(&format!(
        "| {} |\n",
        pad(&title, inner_width(&widths), false).cyan().bold()
    ));
    out.push_str(&separator);
    out.push_str(&line(&header, &[], &widths, |s| s.bold().to_string()));
    out.push_str(&separator);
    if !body.is_empty() {
        for (row, cells) in body.iter().zip(&table.rows) {
            out.push_str(&line(row, &alignment(cells), &widths, |s| s.to_string()));
        }
        out.push_str(&separator);
    }
    if !footer.is_empty() {
        for (row, cells) in footer.iter().zip(&table.footer) {
            out.push_str(&line(row, &alignment(cells), &widths, |s| {
                s.bold().to_string()
            }));
        }
        out.push_str(&separator);
    }
    out
}

fn plain_row(cells: &[Cell]) -> Vec<String> {
    cells.iter().map(format_cell).collect()
}

pub fn format_cell(cell: &Cell) -> String {
    match cell {
        Cell::Empty => String::new(),
        Cell::Text(text) => text.clone(),
        Cell::Points(points) => points.to_string(),
        Cell::Decimal(value) => format!("{:.2}", value),
    }
}

/// Right-align numeric cells
fn alignment(cells: &[Cell]) -> Vec<bool> {
    cells.iter().map(Cell::is_numeric).collect()
}

/// Width between the outer borders when every column is joined
fn inner_width(widths: &[usize]) -> usize {
    widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1)
}

fn rule(widths: &[usize]) -> String {
    let mut out = String::from("+");
    for width in widths {
        out.push_str(&"-".repeat(width + 2));
        out.push('+');
    }
    out.push('\n');
    out
}

fn line(
    row: &[String],
    right: &[bool],
    widths: &[usize],
    style: impl Fn(&str) -> String,
) -> String {
    let mut out = String::from("|");
    for (idx, width) in widths.iter().enumerate() {
        let value = row.get(idx).map(String::as_str).unwrap_or("");
        let align_right = right.get(idx).copied().unwrap_or(false);
        out.push(' ');
        out.push_str(&style(&pad(value, *width, align_right)));
        out.push_str(" |");
    }
    out.push('\n');
    out
}

fn pad(value: &str, width: usize, align_right: bool) -> String {
    if align_right {
        format!("{:>width$}", value, width = width)
    } else {
        format!("{:<width$}", value, width = width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use points_core::{build_report, report::issues_table, Issue, View};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn renders_boxed_table() {
        plain();
        let issues = vec![Issue::new("Fix", "0.31", "alice", 5, "https://x/1")];
        let table = issues_table("All Issues", issues.iter().collect());

        let rendered = render_table(&table);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], lines[2]);
        assert!(lines[1].starts_with("| ALL ISSUES"));
        assert!(lines[3].starts_with("| ISSUE | MILESTONE | ASSIGNEE "));
        assert!(lines[5].starts_with("| Fix   | 0.31      | alice "));
        assert!(rendered.contains("| Total "));
        assert!(rendered.contains("Points for 0.31"));
        // Every line has the same width
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }

    #[test]
    fn numbers_are_right_aligned() {
        plain();
        let issues = vec![
            Issue::new("A", "m", "x", 500, "u"),
            Issue::new("B", "m", "x", 1, "u"),
        ];
        let table = issues_table("T", issues.iter().collect());
        let rendered = render_table(&table);
        assert!(rendered.contains("|    500 |"));
        assert!(rendered.contains("|      1 |"));
    }

    #[test]
    fn long_title_widens_table() {
        plain();
        let table = Table::new("A very long title for a tiny table", ["A"]);
        let rendered = render_table(&table);
        let lines: Vec<&str> = rendered.lines().collect();
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
        assert!(lines[1].contains("A VERY LONG TITLE FOR A TINY TABLE"));
    }

    #[test]
    fn empty_table_renders_zero_total() {
        plain();
        let table = issues_table("All Issues", Vec::new());
        let rendered = render_table(&table);
        assert!(rendered.contains("| Total "));
        assert!(rendered.contains(" 0 |"));
    }

    #[test]
    fn report_has_section_headings() {
        plain();
        let issues = vec![Issue::new("Fix", "0.31", "alice", 5, "u")];
        let rendered = render_report(&build_report(&issues, View::Summary));

        let assignee = rendered.find("# Points Per-Assignee").unwrap();
        let milestone = rendered.find("# Points Per-Milestone").unwrap();
        assert!(assignee < milestone);
        assert!(rendered.contains("ISSUES FOR ALICE"));
        assert!(rendered.contains("TOTAL FOR TEAM"));
    }

    #[test]
    fn decimal_cells_have_two_places() {
        assert_eq!(format_cell(&Cell::Decimal(4.25)), "4.25");
        assert_eq!(format_cell(&Cell::Decimal(5.0)), "5.00");
        assert_eq!(format_cell(&Cell::Points(7)), "7");
        assert_eq!(format_cell(&Cell::Empty), "");
    }
}
