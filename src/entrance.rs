// src/entrance.rs
use crate::grid::{Cell, Grid, Point};
use log::debug;
use rand::Rng;

/// Сторона карты, на которой стоит вход
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

const SIDES: [Side; 4] = [Side::Left, Side::Right, Side::Top, Side::Bottom];

/// Ставит `count` входов на внутреннее кольцо у полосы `margin`.
///
/// Сторона выбирается равновероятно, затем координата вдоль неё — в
/// `[margin, extent - margin - 1]`. Совпадения не проверяются: повторный выбор
/// той же клетки просто перезаписывает её, а в возвращаемом списке остаётся дубль.
///
/// Если внутренняя область пуста, входы не ставятся.
pub fn place_entrances<R: Rng + ?Sized>(
    grid: &mut Grid,
    count: usize,
    margin: usize,
    rng: &mut R,
) -> Vec<Point> {
    if grid.width <= 2 * margin || grid.height <= 2 * margin {
        return Vec::new();
    }
    let last_row = grid.height - margin - 1;
    let last_col = grid.width - margin - 1;

    let mut entrances = Vec::with_capacity(count);
    for _ in 0..count {
        let side = SIDES[rng.gen_range(0..SIDES.len())];
        let p = match side {
            Side::Left => Point::new(rng.gen_range(margin..=last_row), margin),
            Side::Right => Point::new(rng.gen_range(margin..=last_row), last_col),
            Side::Top => Point::new(margin, rng.gen_range(margin..=last_col)),
            Side::Bottom => Point::new(last_row, rng.gen_range(margin..=last_col)),
        };
        debug!("вход {side:?} в ({}, {})", p.row, p.col);
        grid.set(p, Cell::Entrance);
        entrances.push(p);
    }
    entrances
}
