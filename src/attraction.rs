// src/attraction.rs
//! Размещение аттракционов с очередями
//!
//! Кластер — прямой отрезок из `queue_length` клеток от случайной опорной клетки
//! в одном из четырёх направлений. Опорная клетка — вход в очередь, она примыкает
//! к дороге; дальний конец становится аттракционом.
//!
//! ## Условия размещения
//! 1. Все клетки отрезка пусты
//! 2. Опорная клетка ортогонально касается хотя бы одной дороги
//! 3. Остальные клетки отрезка (включая аттракцион) дорог не касаются; при
//!    `queue_length = 1` аттракцион и есть опорная клетка, и действует условие 2
//! 4. Аттракцион не ближе `min_dist` (евклидово) к уже поставленным
//!
//! Неудачная попытка ничего не меняет на карте. После [`MAX_PLACEMENT_ATTEMPTS`]
//! неудачных опорных клеток размещение прекращается: аттракционов может
//! оказаться меньше запрошенного, и это не ошибка.

use crate::grid::{Cell, Grid, Point};
use log::{info, warn};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

/// Предел неудачных попыток выбора опорной клетки
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Направление очереди от входа к аттракциону
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    #[must_use]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Поставленный аттракцион
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attraction {
    pub id: usize,
    pub position: Point,
    pub direction: Direction,
    /// Клетки очереди от входа (у дороги) до клетки перед аттракционом
    pub queue: Vec<Point>,
}

impl Attraction {
    /// Вход в очередь; для очереди нулевой длины — сам аттракцион
    #[must_use]
    pub fn entry(&self) -> Point {
        self.queue.first().copied().unwrap_or(self.position)
    }
}

/// Отрезок кластера от `anchor` в направлении `direction`, если он проходит все проверки
#[must_use]
pub fn try_cluster(
    grid: &Grid,
    anchor: Point,
    direction: Direction,
    queue_length: usize,
    min_dist: f64,
    placed: &[Attraction],
) -> Option<Vec<Point>> {
    if queue_length == 0 {
        return None;
    }
    let (dr, dc) = direction.delta();
    let mut cells = Vec::with_capacity(queue_length);
    let mut cur = anchor;
    for i in 0..queue_length {
        if i > 0 {
            cur = grid.neighbor(cur, dr, dc)?;
        }
        if grid.try_get(cur)? != Cell::Empty {
            return None;
        }
        cells.push(cur);
    }

    if !grid.touches(anchor, Cell::Road) {
        return None;
    }
    if cells[1..].iter().any(|&c| grid.touches(c, Cell::Road)) {
        return None;
    }

    let target = *cells.last()?;
    if placed.iter().any(|a| target.distance(a.position) < min_dist) {
        return None;
    }
    Some(cells)
}

/// Размещает до `nb_attraction` кластеров «очередь + аттракцион».
///
/// Опорные клетки выбираются в `[margin, extent - margin - 1]`; для каждой
/// направления перебираются в случайном порядке, принимается первое подходящее.
pub fn place_attractions<R: Rng + ?Sized>(
    grid: &mut Grid,
    nb_attraction: usize,
    queue_length: usize,
    min_dist: f64,
    margin: usize,
    rng: &mut R,
) -> Vec<Attraction> {
    let mut placed: Vec<Attraction> = Vec::with_capacity(nb_attraction);
    if queue_length == 0 || grid.width <= 2 * margin || grid.height <= 2 * margin {
        return placed;
    }
    let last_row = grid.height - margin - 1;
    let last_col = grid.width - margin - 1;
    let mut failures = 0;

    while placed.len() < nb_attraction && failures < MAX_PLACEMENT_ATTEMPTS {
        let anchor = Point::new(
            rng.gen_range(margin..=last_row),
            rng.gen_range(margin..=last_col),
        );
        let mut directions = Direction::ALL;
        directions.shuffle(rng);

        let found = directions.iter().find_map(|&direction| {
            try_cluster(grid, anchor, direction, queue_length, min_dist, &placed)
                .map(|cells| (direction, cells))
        });

        let Some((direction, mut cells)) = found else {
            failures += 1;
            continue;
        };

        let position = cells.pop().unwrap_or(anchor);
        for &c in &cells {
            grid.set(c, Cell::Queue);
        }
        grid.set(position, Cell::Attraction);
        placed.push(Attraction {
            id: placed.len(),
            position,
            direction,
            queue: cells,
        });
    }

    if placed.len() < nb_attraction {
        warn!(
            "Поставлено {} аттракционов из {} ({} неудачных попыток)",
            placed.len(),
            nb_attraction,
            failures
        );
    } else {
        info!("Поставлено {} аттракционов", placed.len());
    }
    placed
}
