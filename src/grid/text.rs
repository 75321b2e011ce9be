// src/grid/text.rs
//! Текстовый формат карты: одна строка на ряд, ровно `width` символов в строке
//!
//! | Клетка       | Символ |
//! |--------------|--------|
//! | `Wall`       | `X`    |
//! | `Empty`      | ` `    |
//! | `Entrance`   | `E`    |
//! | `Road`       | `.`    |
//! | `Queue`      | `#`    |
//! | `Attraction` | `A`    |

use super::{Cell, Grid};
use crate::error::ParkGenError;
use std::fs;
use std::path::Path;

impl Cell {
    #[must_use]
    pub fn glyph(self) -> char {
        match self {
            Cell::Wall => 'X',
            Cell::Empty => ' ',
            Cell::Entrance => 'E',
            Cell::Road => '.',
            Cell::Queue => '#',
            Cell::Attraction => 'A',
        }
    }

    #[must_use]
    pub fn from_glyph(glyph: char) -> Option<Cell> {
        match glyph {
            'X' => Some(Cell::Wall),
            ' ' => Some(Cell::Empty),
            'E' => Some(Cell::Entrance),
            '.' => Some(Cell::Road),
            '#' => Some(Cell::Queue),
            'A' => Some(Cell::Attraction),
            _ => None,
        }
    }
}

impl Grid {
    /// Сериализует карту: каждая строка завершается `\n`
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.data.chunks(self.width.max(1)) {
            out.extend(row.iter().map(|c| c.glyph()));
            out.push('\n');
        }
        out
    }

    /// Записывает карту в текстовый файл
    pub fn save_as_txt<P: AsRef<Path>>(&self, path: P) -> Result<(), ParkGenError> {
        fs::write(path, self.to_text())?;
        Ok(())
    }

    /// Разбирает карту из текстового формата.
    ///
    /// Все строки должны иметь одинаковую длину; завершающий `\r` отбрасывается.
    pub fn from_text(text: &str) -> Result<Self, ParkGenError> {
        let mut width = None;
        let mut data = Vec::new();
        let mut height = 0;

        for (line_idx, line) in text.lines().enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let mut len = 0;
            for (col, glyph) in line.chars().enumerate() {
                let cell = Cell::from_glyph(glyph).ok_or(ParkGenError::Parse {
                    line: line_idx + 1,
                    column: col + 1,
                    glyph: Some(glyph),
                })?;
                data.push(cell);
                len += 1;
            }
            match width {
                None => width = Some(len),
                Some(w) if w != len => {
                    return Err(ParkGenError::Parse {
                        line: line_idx + 1,
                        column: len,
                        glyph: None,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        Ok(Self {
            width: width.unwrap_or(0),
            height,
            data,
        })
    }
}
