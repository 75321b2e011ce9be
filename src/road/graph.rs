// src/road/graph.rs
use crate::grid::{Grid, Point};
use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::Bfs;
use std::collections::{HashMap, HashSet};

/// Граф проходимых клеток (дороги и входы) с рёбрами между ортогональными соседями
pub struct RoadGraph {
    pub graph: UnGraph<Point, ()>,
    pub node_of: HashMap<Point, NodeIndex>,
}

#[must_use]
pub fn build_road_graph(grid: &Grid) -> RoadGraph {
    let mut graph = UnGraph::new_undirected();
    let mut node_of = HashMap::new();

    for row in 0..grid.height {
        for col in 0..grid.width {
            let p = Point::new(row, col);
            if grid.get(p).is_walkable() {
                node_of.insert(p, graph.add_node(p));
            }
        }
    }

    // достаточно соседей снизу и справа: каждое ребро добавляется один раз
    for (&p, &node) in &node_of {
        for (dr, dc) in [(1, 0), (0, 1)] {
            if let Some(&other) = grid.neighbor(p, dr, dc).and_then(|n| node_of.get(&n)) {
                graph.add_edge(node, other, ());
            }
        }
    }

    RoadGraph { graph, node_of }
}

/// Число компонент связности проходимых клеток
#[must_use]
pub fn count_road_components(grid: &Grid) -> usize {
    connected_components(&build_road_graph(grid).graph)
}

/// Все проходимые клетки, достижимые из `start`; пусто, если `start` непроходима
#[must_use]
pub fn reachable_from(grid: &Grid, start: Point) -> HashSet<Point> {
    let road = build_road_graph(grid);
    let mut reached = HashSet::new();
    let Some(&start_node) = road.node_of.get(&start) else {
        return reached;
    };
    let mut bfs = Bfs::new(&road.graph, start_node);
    while let Some(node) = bfs.next(&road.graph) {
        reached.insert(road.graph[node]);
    }
    reached
}

/// Лежат ли все `points` в одной компоненте проходимых клеток
#[must_use]
pub fn all_connected(grid: &Grid, points: &[Point]) -> bool {
    let Some(&first) = points.first() else {
        return true;
    };
    let reached = reachable_from(grid, first);
    points.iter().all(|p| reached.contains(p))
}
