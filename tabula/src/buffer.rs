use crate::style::{Rgb, TextStyle};
use crate::text::char_width;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: ' ',
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            style: TextStyle::new(),
            wide_continuation: false,
        }
    }
}

impl Cell {
    pub fn new(char: char) -> Self {
        Self {
            char,
            ..Default::default()
        }
    }
}

/// A grid of styled cells covering the terminal.
#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Write a string starting at (x, y), clipped to the buffer edge.
    /// Wide characters occupy two cells; the second is marked as a
    /// continuation so the diff writer can skip it.
    pub fn put_str(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        fg: Rgb,
        bg: Rgb,
        style: TextStyle,
    ) {
        let mut cx = x;
        for ch in text.chars() {
            let w = char_width(ch).max(1) as u16;
            if cx >= self.width || y >= self.height {
                break;
            }
            // Don't start a wide char that would be cut in half
            if w == 2 && cx + 1 >= self.width {
                break;
            }
            self.set(
                cx,
                y,
                Cell {
                    char: ch,
                    fg,
                    bg,
                    style,
                    wide_continuation: false,
                },
            );
            if w == 2 {
                self.set(
                    cx + 1,
                    y,
                    Cell {
                        char: ' ',
                        fg,
                        bg,
                        style,
                        wide_continuation: true,
                    },
                );
            }
            cx += w;
        }
    }

    /// Fill a horizontal run of cells with a background color.
    pub fn fill_row(&mut self, x: u16, y: u16, len: u16, bg: Rgb) {
        for cx in x..x.saturating_add(len).min(self.width) {
            if let Some(cell) = self.get(cx, y).copied() {
                self.set(cx, y, Cell { bg, ..cell });
            }
        }
    }

    /// Fill the whole buffer with a uniform background.
    pub fn fill(&mut self, fg: Rgb, bg: Rgb) {
        for cell in &mut self.cells {
            *cell = Cell {
                char: ' ',
                fg,
                bg,
                style: TextStyle::new(),
                wide_continuation: false,
            };
        }
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }

    /// Cells that differ from `other`, in row-major order.
    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    /// The text content of one row, trailing whitespace trimmed.
    /// Intended for tests and debugging.
    pub fn row_text(&self, y: u16) -> String {
        let mut s = String::new();
        for x in 0..self.width {
            if let Some(cell) = self.get(x, y) {
                if !cell.wide_continuation {
                    s.push(cell.char);
                }
            }
        }
        s.trim_end().to_string()
    }
}
