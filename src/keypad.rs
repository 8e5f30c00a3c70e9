//! Keypad layout
//!
//! The button grid as it appears on screen, plus the cursor used to move
//! across it with the arrow keys.
//!
//! ```text
//! AC  +/-  %  ÷
//! 7   8    9  ×
//! 4   5    6  -
//! 1   2    3  +
//! 0 (wide) .  =
//! ```

use crate::key::{Key, Operator};

/// Grid width in button units
pub const GRID_COLUMNS: u16 = 4;

/// Button rows, top to bottom
pub const KEYPAD_ROWS: [&[Key]; 5] = [
    &[
        Key::Clear,
        Key::ToggleSign,
        Key::Percent,
        Key::Operator(Operator::Divide),
    ],
    &[
        Key::Digit(7),
        Key::Digit(8),
        Key::Digit(9),
        Key::Operator(Operator::Multiply),
    ],
    &[
        Key::Digit(4),
        Key::Digit(5),
        Key::Digit(6),
        Key::Operator(Operator::Subtract),
    ],
    &[
        Key::Digit(1),
        Key::Digit(2),
        Key::Digit(3),
        Key::Operator(Operator::Add),
    ],
    &[Key::Digit(0), Key::Decimal, Key::Equals],
];

/// Visual category of a button, drives its colours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// AC, +/-, %
    Function,
    /// 0-9 and the decimal point
    Digit,
    /// + - × ÷ and =
    Operator,
}

impl ButtonKind {
    pub fn of(key: Key) -> Self {
        match key {
            Key::Clear | Key::ToggleSign | Key::Percent => Self::Function,
            Key::Digit(_) | Key::Decimal => Self::Digit,
            Key::Operator(_) | Key::Equals => Self::Operator,
        }
    }
}

/// Width of a button in grid units. Zero spans two columns.
pub fn button_width(key: Key) -> u16 {
    match key {
        Key::Digit(0) => 2,
        _ => 1,
    }
}

/// Selection cursor over [`KEYPAD_ROWS`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Default for Cursor {
    /// Starts on `=`
    fn default() -> Self {
        Self { row: 4, col: 2 }
    }
}

impl Cursor {
    /// Key under the cursor
    pub fn key(&self) -> Key {
        let row = KEYPAD_ROWS[self.row.min(KEYPAD_ROWS.len() - 1)];
        row[self.col.min(row.len() - 1)]
    }

    pub fn up(&mut self) {
        self.clamp();
        self.move_to_row(self.row.saturating_sub(1));
    }

    pub fn down(&mut self) {
        self.clamp();
        self.move_to_row((self.row + 1).min(KEYPAD_ROWS.len() - 1));
    }

    pub fn left(&mut self) {
        self.clamp();
        self.col = self.col.saturating_sub(1);
    }

    pub fn right(&mut self) {
        self.clamp();
        let last = KEYPAD_ROWS[self.row].len() - 1;
        self.col = (self.col + 1).min(last);
    }

    /// Pull a hand-built position back onto the pad
    fn clamp(&mut self) {
        self.row = self.row.min(KEYPAD_ROWS.len() - 1);
        self.col = self.col.min(KEYPAD_ROWS[self.row].len() - 1);
    }

    /// Change row, keeping the horizontal position in grid units so moving
    /// between the short bottom row and a full row lands on the button
    /// visually above or below.
    fn move_to_row(&mut self, row: usize) {
        if row == self.row {
            return;
        }
        let offset = grid_offset(self.row, self.col);
        self.row = row;
        self.col = column_at_offset(row, offset);
    }

    /// Place the cursor on a given key, if it is on the pad
    pub fn select(&mut self, key: Key) {
        for (r, row) in KEYPAD_ROWS.iter().enumerate() {
            if let Some(c) = row.iter().position(|k| *k == key) {
                self.row = r;
                self.col = c;
                return;
            }
        }
    }
}

/// Grid-unit offset of the left edge of a button
fn grid_offset(row: usize, col: usize) -> u16 {
    KEYPAD_ROWS[row][..col].iter().map(|k| button_width(*k)).sum()
}

/// Index of the button covering a grid-unit offset in a row
fn column_at_offset(row: usize, offset: u16) -> usize {
    let mut edge = 0;
    for (i, key) in KEYPAD_ROWS[row].iter().enumerate() {
        edge += button_width(*key);
        if offset < edge {
            return i;
        }
    }
    KEYPAD_ROWS[row].len() - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_is_on_the_pad_once() {
        for key in Key::ALL {
            let count = KEYPAD_ROWS
                .iter()
                .flat_map(|row| row.iter())
                .filter(|k| **k == key)
                .count();
            assert_eq!(count, 1, "{} should appear once", key);
        }
    }

    #[test]
    fn test_rows_fill_the_grid() {
        for row in KEYPAD_ROWS {
            let width: u16 = row.iter().map(|k| button_width(*k)).sum();
            assert_eq!(width, GRID_COLUMNS);
        }
    }

    #[test]
    fn test_button_kinds() {
        assert_eq!(ButtonKind::of(Key::Clear), ButtonKind::Function);
        assert_eq!(ButtonKind::of(Key::Decimal), ButtonKind::Digit);
        assert_eq!(ButtonKind::of(Key::Equals), ButtonKind::Operator);
    }

    #[test]
    fn test_cursor_starts_on_equals() {
        assert_eq!(Cursor::default().key(), Key::Equals);
    }

    #[test]
    fn test_cursor_moves_between_short_and_full_rows() {
        let mut cursor = Cursor::default();
        cursor.up();
        assert_eq!(cursor.key(), Key::Operator(Operator::Add));
        cursor.left();
        assert_eq!(cursor.key(), Key::Digit(3));
        cursor.down();
        assert_eq!(cursor.key(), Key::Decimal);
        cursor.right();
        assert_eq!(cursor.key(), Key::Equals);

        cursor.select(Key::Digit(2));
        cursor.down();
        assert_eq!(cursor.key(), Key::Digit(0));
        cursor.right();
        assert_eq!(cursor.key(), Key::Decimal);
    }

    #[test]
    fn test_cursor_clamps_at_edges() {
        let mut cursor = Cursor::default();
        cursor.select(Key::Clear);
        cursor.up();
        cursor.left();
        assert_eq!(cursor.key(), Key::Clear);

        cursor.select(Key::Equals);
        cursor.down();
        cursor.right();
        assert_eq!(cursor.key(), Key::Equals);
    }

    #[test]
    fn test_out_of_range_cursor_moves_from_nearest_button() {
        let mut cursor = Cursor { row: 10, col: 10 };
        cursor.right();
        assert_eq!(cursor.key(), Key::Equals);

        let mut cursor = Cursor { row: 10, col: 10 };
        cursor.up();
        assert_eq!(cursor.key(), Key::Operator(Operator::Add));

        let mut cursor = Cursor { row: 0, col: 9 };
        cursor.left();
        assert_eq!(cursor.key(), Key::Percent);

        let mut cursor = Cursor { row: 7, col: 0 };
        cursor.down();
        assert_eq!(cursor.key(), Key::Digit(0));
    }
}
