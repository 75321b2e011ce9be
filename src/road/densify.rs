// src/road/densify.rs
use super::path::{add_road, expand_orthogonal_path};
use crate::grid::{Cell, Grid, Point};
use log::debug;
use std::collections::HashSet;

/// Один проход уплотнения дорожной сети.
///
/// Для каждой пары дорожных клеток с манхэттенским расстоянием `1 < d <= max_dist`
/// строится ступенчатый путь; если все клетки строго между концами пусты, путь
/// рисуется дорогой, а оба конца помечаются использованными. Каждая клетка
/// служит концом не более одной новой связи за проход. Возвращает число связей.
pub fn connect_nearby_roads(grid: &mut Grid, max_dist: usize, road_width: usize) -> usize {
    // построчный порядок: как только разница строк превышает max_dist, дальше искать незачем
    let roads = grid.positions_of(Cell::Road);
    let mut used: HashSet<Point> = HashSet::new();
    let mut links = 0;

    for (i, &a) in roads.iter().enumerate() {
        if used.contains(&a) {
            continue;
        }
        for &b in &roads[i + 1..] {
            if b.row - a.row > max_dist {
                break;
            }
            if used.contains(&b) {
                continue;
            }
            let d = a.manhattan(b);
            if d <= 1 || d > max_dist {
                continue;
            }
            let path = expand_orthogonal_path(a, b);
            let interior = &path[..path.len() - 1];
            if interior.iter().all(|&p| grid.get(p) == Cell::Empty) {
                add_road(grid, interior.iter().copied(), road_width);
                used.insert(a);
                used.insert(b);
                links += 1;
                break;
            }
        }
    }

    debug!("уплотнение (max_dist = {max_dist}): {links} новых связей");
    links
}

/// Выполняет проходы уплотнения с заданными `max_dist`; возвращает число связей по проходам
pub fn densify(grid: &mut Grid, passes: &[usize], road_width: usize) -> Vec<usize> {
    passes
        .iter()
        .map(|&max_dist| connect_nearby_roads(grid, max_dist, road_width))
        .collect()
}
