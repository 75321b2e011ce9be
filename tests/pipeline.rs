use parkgen::gaps::fix_road_gaps;
use parkgen::road::graph::all_connected;
use parkgen::road::{build_road_network, expand_orthogonal_path, sample_internal_nodes};
use parkgen::{Cell, Grid, MARGIN, ParkGenError, ParkGenerationParams, Point, generate_park};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

fn scenario(seed: u64) -> ParkGenerationParams {
    ParkGenerationParams {
        seed: Some(seed),
        width: 20,
        height: 20,
        entries: 1,
        nodes: 5,
        road_width: 1,
        queue_length: 3,
        attractions: 2,
        min_attraction_distance: 4.0,
        densify_passes: vec![8],
    }
}

fn assert_boundary_intact(grid: &Grid) {
    for row in 0..grid.height {
        for col in 0..grid.width {
            let p = Point::new(row, col);
            if grid.is_margin(p, MARGIN) {
                assert_eq!(grid.get(p), Cell::Wall, "{p:?}");
            } else {
                assert_ne!(grid.get(p), Cell::Wall, "{p:?}");
            }
        }
    }
}

fn assert_clusters_valid(park: &parkgen::Park, min_dist: f64) {
    let grid = &park.grid;
    for (i, a) in park.attractions.iter().enumerate() {
        assert_eq!(grid.get(a.position), Cell::Attraction);
        assert!(grid.touches(a.entry(), Cell::Road), "cluster {i} entry");
        // опорная клетка обязана касаться дороги; при пустой очереди это сам аттракцион
        let far_end = (!a.queue.is_empty()).then_some(&a.position);
        let rest = a.queue.iter().skip(1).chain(far_end);
        for &c in rest {
            assert!(!grid.touches(c, Cell::Road), "cluster {i} leaks at {c:?}");
        }
        for &c in &a.queue {
            assert_eq!(grid.get(c), Cell::Queue);
        }
        for b in &park.attractions[..i] {
            assert!(a.position.distance(b.position) >= min_dist);
        }
    }
}

#[test]
fn fixed_seed_reproduces_the_same_grid() {
    let first = generate_park(&scenario(2024)).unwrap();
    let second = generate_park(&scenario(2024)).unwrap();
    assert_eq!(first.grid.to_text(), second.grid.to_text());
    assert_eq!(first.attractions, second.attractions);
    assert_eq!(first.report, second.report);
}

#[test]
fn scenario_grid_keeps_walls_and_connects_seed_points() {
    let park = generate_park(&scenario(7)).unwrap();
    assert_boundary_intact(&park.grid);
    assert_eq!(park.seed_points.len(), 6);
    assert!(all_connected(&park.grid, &park.seed_points));
    assert_clusters_valid(&park, 4.0);
}

#[test]
fn single_cell_clusters_sit_next_to_roads() {
    let park = generate_park(&ParkGenerationParams {
        width: 12,
        height: 12,
        entries: 1,
        nodes: 1,
        road_width: 1,
        queue_length: 1,
        attractions: 1,
        ..scenario(0)
    })
    .unwrap();
    assert_clusters_valid(&park, 4.0);
    for a in &park.attractions {
        assert!(a.queue.is_empty());
        assert!(park.grid.touches(a.position, Cell::Road));
    }
}

#[test]
fn zero_attractions_means_no_queue_or_attraction_cells() {
    let with = generate_park(&scenario(11)).unwrap();
    let without = generate_park(&ParkGenerationParams {
        attractions: 0,
        ..scenario(11)
    })
    .unwrap();

    assert_eq!(without.grid.count(Cell::Attraction), 0);
    assert_eq!(without.grid.count(Cell::Queue), 0);
    assert!(without.attractions.is_empty());
    assert_eq!(
        with.grid.positions_of(Cell::Entrance),
        without.grid.positions_of(Cell::Entrance)
    );
    assert_eq!(with.report.mst_edges, without.report.mst_edges);
    assert!(all_connected(&without.grid, &without.seed_points));
}

#[test]
fn unit_road_width_paints_exactly_the_rasterized_cells() {
    let mut grid = Grid::with_boundary(30, 24, MARGIN);
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut points = parkgen::entrance::place_entrances(&mut grid, 2, MARGIN, &mut rng);
    points.extend(sample_internal_nodes(&grid, 8, &mut rng));
    let entrances: HashSet<Point> = grid.positions_of(Cell::Entrance).into_iter().collect();

    let edges = build_road_network(&mut grid, &points, 1);

    let mut expected = HashSet::new();
    for e in &edges {
        expected.insert(e.a);
        expected.extend(expand_orthogonal_path(e.a, e.b));
    }
    let expected: HashSet<Point> = expected.difference(&entrances).copied().collect();
    let painted: HashSet<Point> = grid.positions_of(Cell::Road).into_iter().collect();
    assert_eq!(painted, expected);
}

#[test]
fn gap_repair_leaves_a_fixpoint() {
    let mut park = generate_park(&ParkGenerationParams {
        seed: Some(9),
        width: 80,
        height: 40,
        nodes: 60,
        ..ParkGenerationParams::default()
    })
    .unwrap();
    assert!(park.report.gap_sweeps >= 1);
    assert_eq!(fix_road_gaps(&mut park.grid), 0);
}

#[test]
fn export_is_one_fixed_width_line_per_row() {
    let park = generate_park(&scenario(3)).unwrap();
    let text = park.grid.to_text();
    let lines: Vec<&str> = text.split_terminator('\n').collect();
    assert_eq!(lines.len(), 20);
    for line in &lines {
        assert_eq!(line.chars().count(), 20);
        assert!(line.chars().all(|c| "X E.#A".contains(c)));
    }
    assert_eq!(Grid::from_text(&text).unwrap(), park.grid);
}

#[test]
fn export_writes_file() {
    let park = generate_park(&scenario(4)).unwrap();
    let path = std::env::temp_dir().join(format!("parkgen_{}.txt", std::process::id()));
    park.grid.save_as_txt(&path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(written, park.grid.to_text());
}

#[test]
fn too_small_map_is_rejected_before_generation() {
    let err = generate_park(&ParkGenerationParams {
        width: 6,
        ..scenario(1)
    })
    .unwrap_err();
    assert!(matches!(err, ParkGenError::InvalidConfig(_)));
}

#[test]
fn export_to_missing_directory_is_an_io_error() {
    let park = generate_park(&scenario(1)).unwrap();
    let err = park
        .grid
        .save_as_txt("/nonexistent-parkgen-dir/park.txt")
        .unwrap_err();
    assert!(matches!(err, ParkGenError::Io(_)));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn generated_parks_hold_structural_invariants(
        seed in any::<u64>(),
        width in 12usize..48,
        height in 12usize..32,
        entries in 1usize..4,
        nodes in 0usize..25,
        road_width in 1usize..4,
        queue_length in 1usize..6,
        attractions in 0usize..8,
    ) {
        let params = ParkGenerationParams {
            seed: Some(seed),
            width,
            height,
            entries,
            nodes,
            road_width,
            queue_length,
            attractions,
            min_attraction_distance: 4.0,
            ..ParkGenerationParams::default()
        };
        let mut park = generate_park(&params).unwrap();
        assert_boundary_intact(&park.grid);
        prop_assert!(all_connected(&park.grid, &park.seed_points));
        prop_assert!(park.attractions.len() <= attractions);
        assert_clusters_valid(&park, 4.0);
        prop_assert_eq!(fix_road_gaps(&mut park.grid), 0);
    }
}
