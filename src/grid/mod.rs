// src/grid/mod.rs
//! Холст парка: матрица клеток и построение внешней стены
//!
//! Все этапы конвейера читают и изменяют одну и ту же [`Grid`], передаваемую
//! по `&mut` от этапа к этапу. Координаты — пары `(row, col)`.
//!
//! ## Инварианты
//! - Клетки внешнего кольца и полосы шириной `margin` у каждого края — `Wall`
//!   сразу после [`Grid::with_boundary`]
//! - Последующие этапы пишут только в пустые (`Empty`) клетки, поэтому стена не меняется

pub mod png;
pub mod text;

use serde::{Deserialize, Serialize};

/// Ширина непроходимой полосы вдоль краёв карты
pub const MARGIN: usize = 3;

/// Четыре ортогональных направления `(d_row, d_col)`: вверх, вниз, влево, вправо
pub const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Состояние одной клетки карты
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Непроходимая граница парка
    Wall,
    /// Свободное место
    Empty,
    /// Вход в парк (на внутреннем кольце у стены)
    Entrance,
    /// Дорога
    Road,
    /// Очередь к аттракциону
    Queue,
    /// Сам аттракцион (конец очереди)
    Attraction,
}

impl Cell {
    /// Клетка, по которой можно ходить по дорожной сети
    #[must_use]
    pub fn is_walkable(self) -> bool {
        matches!(self, Cell::Road | Cell::Entrance)
    }
}

/// Координата клетки: строка и столбец
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Манхэттенское расстояние
    #[must_use]
    pub fn manhattan(self, other: Point) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Евклидово расстояние
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        let dr = self.row as f64 - other.row as f64;
        let dc = self.col as f64 - other.col as f64;
        (dr * dr + dc * dc).sqrt()
    }

    /// Сдвиг на `(d_row, d_col)`; `None`, если результат уходит в отрицательные координаты
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Point> {
        Some(Point {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

/// Прямоугольная карта парка `height × width`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    /// Клетки построчно, индекс `row * width + col`
    pub data: Vec<Cell>,
}

impl Grid {
    /// Карта, целиком заполненная `cell`
    #[must_use]
    pub fn filled(width: usize, height: usize, cell: Cell) -> Self {
        Self {
            width,
            height,
            data: vec![cell; width * height],
        }
    }

    /// Пустая карта с внешней стеной и полосой `margin` у каждого края.
    ///
    /// Если `width <= 2 * margin` или `height <= 2 * margin`, вся карта
    /// получается стеной: вырожденный, но корректный результат.
    #[must_use]
    pub fn with_boundary(width: usize, height: usize, margin: usize) -> Self {
        let mut grid = Self::filled(width, height, Cell::Empty);
        for row in 0..height {
            for col in 0..width {
                if grid.is_margin(Point::new(row, col), margin) {
                    grid.set(Point::new(row, col), Cell::Wall);
                }
            }
        }
        grid
    }

    /// Лежит ли клетка во внешнем кольце или в полосе `margin`
    #[must_use]
    pub fn is_margin(&self, p: Point, margin: usize) -> bool {
        let margin = margin.max(1);
        p.row < margin
            || p.col < margin
            || p.row + margin >= self.height
            || p.col + margin >= self.width
    }

    #[must_use]
    pub fn in_bounds(&self, p: Point) -> bool {
        p.row < self.height && p.col < self.width
    }

    /// Клетка по координате.
    ///
    /// # Паника
    /// Паникует, если координата вне карты.
    #[must_use]
    pub fn get(&self, p: Point) -> Cell {
        self.data[p.row * self.width + p.col]
    }

    /// Клетка по координате или `None` за пределами карты
    #[must_use]
    pub fn try_get(&self, p: Point) -> Option<Cell> {
        self.in_bounds(p).then(|| self.get(p))
    }

    pub fn set(&mut self, p: Point, cell: Cell) {
        let idx = p.row * self.width + p.col;
        self.data[idx] = cell;
    }

    /// Клетка со сдвигом `(d_row, d_col)` от `p`, если она на карте
    #[must_use]
    pub fn neighbor(&self, p: Point, d_row: isize, d_col: isize) -> Option<Point> {
        p.offset(d_row, d_col).filter(|&n| self.in_bounds(n))
    }

    /// Ортогональные соседи в пределах карты
    pub fn neighbors4(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        DIRECTIONS
            .iter()
            .filter_map(move |&(dr, dc)| self.neighbor(p, dr, dc))
    }

    /// Есть ли среди ортогональных соседей клетка `cell`
    #[must_use]
    pub fn touches(&self, p: Point, cell: Cell) -> bool {
        self.neighbors4(p).any(|n| self.get(n) == cell)
    }

    /// Количество клеток заданного типа
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.data.iter().filter(|&&c| c == cell).count()
    }

    /// Все координаты с клеткой `cell` в построчном порядке
    #[must_use]
    pub fn positions_of(&self, cell: Cell) -> Vec<Point> {
        self.data
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == cell)
            .map(|(idx, _)| Point::new(idx / self.width, idx % self.width))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_walls_margin_and_leaves_interior_empty() {
        let grid = Grid::with_boundary(12, 10, MARGIN);
        for row in 0..10 {
            for col in 0..12 {
                let expected = if (3..7).contains(&row) && (3..9).contains(&col) {
                    Cell::Empty
                } else {
                    Cell::Wall
                };
                assert_eq!(grid.get(Point::new(row, col)), expected, "({row}, {col})");
            }
        }
    }

    #[test]
    fn degenerate_extents_give_all_wall() {
        for (w, h) in [(6, 20), (20, 6), (0, 0), (1, 1), (7, 3)] {
            let grid = Grid::with_boundary(w, h, MARGIN);
            assert_eq!(grid.count(Cell::Wall), w * h, "{w}x{h}");
        }
    }

    #[test]
    fn smallest_valid_extent_has_single_empty_cell() {
        let grid = Grid::with_boundary(7, 7, MARGIN);
        assert_eq!(grid.count(Cell::Empty), 1);
        assert_eq!(grid.get(Point::new(3, 3)), Cell::Empty);
    }

    #[test]
    fn zero_margin_still_walls_outer_ring() {
        let grid = Grid::with_boundary(4, 4, 0);
        assert_eq!(grid.count(Cell::Wall), 12);
        assert_eq!(grid.count(Cell::Empty), 4);
    }

    #[test]
    fn neighbors_are_clipped_at_edges() {
        let grid = Grid::filled(3, 3, Cell::Empty);
        assert_eq!(grid.neighbors4(Point::new(0, 0)).count(), 2);
        assert_eq!(grid.neighbors4(Point::new(1, 1)).count(), 4);
        assert_eq!(grid.neighbors4(Point::new(2, 1)).count(), 3);
    }

    #[test]
    fn point_distances() {
        let a = Point::new(1, 2);
        let b = Point::new(4, 6);
        assert_eq!(a.manhattan(b), 7);
        assert!((a.distance(b) - 5.0).abs() < f64::EPSILON);
        assert_eq!(a.offset(-2, 0), None);
        assert_eq!(a.offset(-1, 1), Some(Point::new(0, 3)));
    }

    #[test]
    fn positions_of_is_row_major() {
        let mut grid = Grid::filled(3, 2, Cell::Empty);
        grid.set(Point::new(1, 0), Cell::Road);
        grid.set(Point::new(0, 2), Cell::Road);
        assert_eq!(
            grid.positions_of(Cell::Road),
            vec![Point::new(0, 2), Point::new(1, 0)]
        );
    }
}
