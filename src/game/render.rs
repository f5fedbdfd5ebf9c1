use std::fmt;

use super::{Cell, HexBoard};

/// Character drawn for a cell.
pub fn glyph(cell: Cell) -> char {
    match cell {
        Cell::Red => 'X',
        Cell::Blue => 'O',
        Cell::Empty => '.',
    }
}

/// Drawn between adjacent cells of a row.
pub const CELL_SEPARATOR: &str = " - ";

/// Column numbers above the first row.
pub fn column_header(extent: usize) -> String {
    let mut header = String::from("  0");
    for x in 1..extent {
        header.push_str(&format!("   {x}"));
    }
    header
}

/// `\ /` links drawn above row `y`, for `y >= 1`.
pub fn link_line(extent: usize, y: usize) -> String {
    let links: Vec<&str> = (0..2 * extent - 1)
        .map(|i| if i % 2 == 0 { "\\" } else { "/" })
        .collect();
    format!("{:indent$}   {}", "", links.join(" "), indent = 2 * y - 1)
}

/// Indentation and row number leading row `y`.
pub fn row_prefix(y: usize) -> String {
    format!("{:indent$}{y}  ", "", indent = 2 * y)
}

/// Rhombic text diagram: a column header, then one line per row with cells
/// joined by ` - `, separated by lines of `\ /` links. Each row is shifted two
/// columns right of the one above.
impl fmt::Display for HexBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let extent = self.extent();
        writeln!(f, "{}", column_header(extent))?;

        for y in 0..extent {
            if y > 0 {
                writeln!(f, "{}", link_line(extent, y))?;
            }

            let row: Vec<String> = (0..extent)
                .filter_map(|x| self.cell(x, y))
                .map(|cell| glyph(cell).to_string())
                .collect();
            writeln!(f, "{}{}", row_prefix(y), row.join(CELL_SEPARATOR))?;
        }

        Ok(())
    }
}
