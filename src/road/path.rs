// src/road/path.rs
use crate::grid::{Cell, Grid, Point};

/// Один шаг `from` в сторону `to` по одной оси
fn step_toward(from: usize, to: usize) -> usize {
    if from < to { from + 1 } else { from - 1 }
}

/// Ступенчатый ортогональный путь от `a` к `b`.
///
/// Пока различаются обе оси, шаги чередуются: строка, столбец, строка, ...
/// Затем путь добирает остаток по единственной оставшейся оси.
/// Стартовая клетка `a` в путь не входит, последняя клетка всегда `b`;
/// длина пути равна манхэттенскому расстоянию.
#[must_use]
pub fn expand_orthogonal_path(a: Point, b: Point) -> Vec<Point> {
    let mut path = Vec::with_capacity(a.manhattan(b));
    let mut cur = a;

    while cur != b {
        if cur.row != b.row && cur.col != b.col {
            if path.len() % 2 == 0 {
                cur.row = step_toward(cur.row, b.row);
            } else {
                cur.col = step_toward(cur.col, b.col);
            }
        } else if cur.row != b.row {
            cur.row = step_toward(cur.row, b.row);
        } else {
            cur.col = step_toward(cur.col, b.col);
        }
        path.push(cur);
    }
    path
}

/// Смещения квадрата толщины `road_width`; при чётной ширине центр сдвинут к верхнему левому углу
fn brush(road_width: usize) -> std::ops::Range<isize> {
    let half = (road_width / 2) as isize;
    -half..(road_width as isize - half)
}

/// Рисует дорогу толщиной `road_width` вдоль `path`.
///
/// Перекрашиваются только пустые клетки; стены, входы, уже проложенные дороги,
/// очереди и аттракционы не трогаются. Возвращает число новых клеток дороги.
pub fn add_road<I>(grid: &mut Grid, path: I, road_width: usize) -> usize
where
    I: IntoIterator<Item = Point>,
{
    let mut painted = 0;
    for p in path {
        for dr in brush(road_width) {
            for dc in brush(road_width) {
                if let Some(n) = grid.neighbor(p, dr, dc) {
                    if grid.get(n) == Cell::Empty {
                        grid.set(n, Cell::Road);
                        painted += 1;
                    }
                }
            }
        }
    }
    painted
}
