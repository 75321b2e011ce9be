// src/road/network.rs
//! Каркас дорожной сети: минимальное остовное дерево Краскала над входами и
//! случайными внутренними узлами
//!
//! Каждое принятое ребро растеризуется ступенчатым путём и утолщается до
//! `road_width`. После прохода все узлы лежат в одной компоненте.

use super::path::{add_road, expand_orthogonal_path};
use crate::grid::{Grid, Point};
use log::info;
use rand::Rng;
use std::collections::HashMap;

/// Отступ внутренних узлов от края карты
pub const NODE_INSET: usize = 5;

/// Система непересекающихся множеств с ключом-координатой.
///
/// `find` просто поднимается до корня, без сжатия путей; `union` подвешивает
/// корень `u` к корню `v`.
#[derive(Debug, Default)]
pub struct DisjointSet {
    parent: HashMap<Point, Point>,
}

impl DisjointSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn find(&self, mut u: Point) -> Point {
        while let Some(&p) = self.parent.get(&u) {
            if p == u {
                break;
            }
            u = p;
        }
        u
    }

    pub fn union(&mut self, u: Point, v: Point) {
        let ru = self.find(u);
        let rv = self.find(v);
        self.parent.insert(ru, rv);
    }
}

/// Ребро-кандидат между двумя узлами, вес — манхэттенское расстояние
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub weight: usize,
    pub a: Point,
    pub b: Point,
}

/// Все рёбра `(i, j)`, `i < j`, отсортированные по `(вес, a, b)`.
///
/// Рёбра равного веса упорядочены по координатам концов (строка, затем столбец).
#[must_use]
pub fn candidate_edges(points: &[Point]) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(points.len() * points.len().saturating_sub(1) / 2);
    for (i, &a) in points.iter().enumerate() {
        for &b in &points[i + 1..] {
            edges.push(Edge {
                weight: a.manhattan(b),
                a,
                b,
            });
        }
    }
    edges.sort_by_key(|e| (e.weight, e.a, e.b));
    edges
}

/// Случайные внутренние узлы в `[NODE_INSET, extent - NODE_INSET - 1]` по каждой оси.
///
/// Узлы не обязаны попадать на пустые клетки. При пустом диапазоне узлов нет.
pub fn sample_internal_nodes<R: Rng + ?Sized>(grid: &Grid, count: usize, rng: &mut R) -> Vec<Point> {
    if grid.height < 2 * NODE_INSET + 1 || grid.width < 2 * NODE_INSET + 1 {
        return Vec::new();
    }
    let last_row = grid.height - NODE_INSET - 1;
    let last_col = grid.width - NODE_INSET - 1;
    (0..count)
        .map(|_| {
            let row = rng.gen_range(NODE_INSET..=last_row);
            let col = rng.gen_range(NODE_INSET..=last_col);
            Point::new(row, col)
        })
        .collect()
}

/// Строит остовное дерево над `points` и рисует его дорогами.
///
/// Возвращает принятые рёбра в порядке принятия. Растеризуется и стартовая
/// точка ребра, и весь путь до конечной.
pub fn build_road_network(grid: &mut Grid, points: &[Point], road_width: usize) -> Vec<Edge> {
    let mut sets = DisjointSet::new();
    let mut accepted = Vec::new();

    for edge in candidate_edges(points) {
        if sets.find(edge.a) == sets.find(edge.b) {
            continue;
        }
        let path = expand_orthogonal_path(edge.a, edge.b);
        add_road(grid, std::iter::once(edge.a).chain(path), road_width);
        sets.union(edge.a, edge.b);
        accepted.push(edge);
    }

    info!(
        "Каркас дорог: {} узлов, {} рёбер остовного дерева",
        points.len(),
        accepted.len()
    );
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Cell, MARGIN};
    use crate::road::graph::reachable_from;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn p(row: usize, col: usize) -> Point {
        Point::new(row, col)
    }

    #[test]
    fn disjoint_set_tracks_components() {
        let mut sets = DisjointSet::new();
        assert_eq!(sets.find(p(1, 1)), p(1, 1));
        sets.union(p(1, 1), p(2, 2));
        sets.union(p(3, 3), p(2, 2));
        assert_eq!(sets.find(p(1, 1)), sets.find(p(3, 3)));
        assert_ne!(sets.find(p(1, 1)), sets.find(p(4, 4)));
        // корень u подвешивается к корню v
        assert_eq!(sets.find(p(1, 1)), p(2, 2));
    }

    #[test]
    fn edges_are_sorted_by_weight_then_endpoints() {
        let points = [p(0, 2), p(0, 0), p(0, 1), p(5, 5)];
        let edges = candidate_edges(&points);
        assert_eq!(edges.len(), 6);
        assert!(edges.windows(2).all(|w| w[0].weight <= w[1].weight));
        // вес 1: (0,2)-(0,1) сгенерировано раньше, но (0,0)-(0,1) меньше по координатам
        assert_eq!((edges[0].a, edges[0].b), (p(0, 0), p(0, 1)));
        assert_eq!((edges[1].a, edges[1].b), (p(0, 2), p(0, 1)));
    }

    #[test]
    fn equal_weight_ties_pick_edges_by_coordinates() {
        let (a, b, c) = (p(10, 10), p(10, 12), p(11, 11));
        let mut grid = Grid::with_boundary(30, 30, MARGIN);
        let accepted: Vec<(Point, Point)> = build_road_network(&mut grid, &[c, b, a], 1)
            .iter()
            .map(|e| (e.a, e.b))
            .collect();
        assert_eq!(accepted, vec![(b, a), (c, a)]);
    }

    #[test]
    fn tree_has_n_minus_one_edges_for_distinct_points() {
        let mut grid = Grid::with_boundary(30, 30, MARGIN);
        let points = [p(5, 5), p(5, 20), p(20, 5), p(20, 20), p(12, 12)];
        let edges = build_road_network(&mut grid, &points, 1);
        assert_eq!(edges.len(), points.len() - 1);
    }

    #[test]
    fn duplicate_points_add_no_edge() {
        let mut grid = Grid::with_boundary(20, 20, MARGIN);
        let points = [p(6, 6), p(6, 6), p(10, 10)];
        let edges = build_road_network(&mut grid, &points, 1);
        assert_eq!(edges.len(), 1);
    }

    #[test]
    fn opposite_edges_from_one_node_stay_connected() {
        let mut grid = Grid::with_boundary(30, 30, MARGIN);
        // центр оказывается стартом обоих рёбер, уходящих в разные стороны
        let points = [p(15, 15), p(8, 15), p(22, 15)];
        build_road_network(&mut grid, &points, 1);
        let reached = reachable_from(&grid, p(15, 15));
        assert!(points.iter().all(|q| reached.contains(q)));
    }

    #[test]
    fn sampled_nodes_stay_inside_inset() {
        let grid = Grid::with_boundary(40, 22, MARGIN);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let nodes = sample_internal_nodes(&grid, 200, &mut rng);
        assert_eq!(nodes.len(), 200);
        for n in nodes {
            assert!((NODE_INSET..=22 - NODE_INSET - 1).contains(&n.row));
            assert!((NODE_INSET..=40 - NODE_INSET - 1).contains(&n.col));
            assert_eq!(grid.get(n), Cell::Empty);
        }
    }

    #[test]
    fn small_grid_has_no_internal_nodes() {
        let grid = Grid::with_boundary(10, 30, MARGIN);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert!(sample_internal_nodes(&grid, 10, &mut rng).is_empty());
    }
}
