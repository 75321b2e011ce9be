// src/gaps.rs
use crate::grid::{Cell, Grid, Point};
use log::{debug, info};

/// Диагональные пары вокруг клетки: (верх-лево, низ-право) и (верх-право, низ-лево)
const DIAGONAL_PAIRS: [((isize, isize), (isize, isize)); 2] = [((-1, -1), (1, 1)), ((-1, 1), (1, -1))];

fn is_bridge(grid: &Grid, p: Point) -> bool {
    let is_road = |dr, dc| grid.neighbor(p, dr, dc).map(|n| grid.get(n)) == Some(Cell::Road);
    let diagonal = DIAGONAL_PAIRS
        .iter()
        .any(|&((r1, c1), (r2, c2))| is_road(r1, c1) && is_road(r2, c2));
    diagonal && grid.neighbors4(p).all(|n| grid.get(n) == Cell::Empty)
}

/// Один проход по внутренним клеткам (без крайних строк и столбцов).
///
/// Пустая клетка становится дорогой, если обе клетки одной из диагональных пар —
/// дороги, а все четыре ортогональных соседа пусты. Изменения видны сразу же
/// в этом же проходе. Возвращает число повышенных клеток.
pub fn fix_road_gaps(grid: &mut Grid) -> usize {
    let mut promoted = 0;
    for row in 1..grid.height.saturating_sub(1) {
        for col in 1..grid.width.saturating_sub(1) {
            let p = Point::new(row, col);
            if grid.get(p) == Cell::Empty && is_bridge(grid, p) {
                grid.set(p, Cell::Road);
                promoted += 1;
            }
        }
    }
    promoted
}

/// Повторяет [`fix_road_gaps`] до неподвижной точки.
///
/// Возвращает `(всего повышено, число проходов)`; последний проход всегда нулевой.
pub fn repair_gaps(grid: &mut Grid) -> (usize, usize) {
    let mut total = 0;
    let mut sweeps = 0;
    loop {
        let promoted = fix_road_gaps(grid);
        sweeps += 1;
        debug!("проход {sweeps}: {promoted} клеток");
        if promoted == 0 {
            break;
        }
        total += promoted;
    }
    info!("Заделано {total} диагональных разрывов за {sweeps} проходов");
    (total, sweeps)
}
