/// A single table cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Points(u64),
    /// Real-valued figure such as an average
    Decimal(f64),
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    /// The point value held by this cell, if any
    pub fn points(&self) -> Option<u64> {
        match self {
            Cell::Points(p) => Some(*p),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Cell::Points(_) | Cell::Decimal(_))
    }
}

/// Render-agnostic table: a title, column headers, body rows and footer rows
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
    pub footer: Vec<Vec<Cell>>,
    /// Sum of every point value shown in the body
    pub total: u64,
}

impl Table {
    pub fn new<I, S>(title: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            footer: Vec::new(),
            total: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(pad(row, self.width()));
    }

    pub fn push_footer(&mut self, row: Vec<Cell>) {
        self.footer.push(pad(row, self.width()));
    }

    /// Footer row whose text cell equals `label`
    pub fn footer_row(&self, label: &str) -> Option<&[Cell]> {
        self.footer
            .iter()
            .find(|row| row.iter().any(|c| matches!(c, Cell::Text(t) if t == label)))
            .map(Vec::as_slice)
    }
}

fn pad(mut row: Vec<Cell>, width: usize) -> Vec<Cell> {
    if row.len() < width {
        row.resize(width, Cell::Empty);
    }
    row
}
