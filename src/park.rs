// src/park.rs
//! Конвейер генерации парка
//!
//! Этапы выполняются строго по порядку, каждый получает карту по `&mut`:
//! 1. Стена и полоса `MARGIN` ([`Grid::with_boundary`])
//! 2. Входы ([`place_entrances`])
//! 3. Каркас дорог — остовное дерево над входами и внутренними узлами
//! 4. Уплотнение дорог (по проходу на каждый `densify_passes`)
//! 5. Аттракционы с очередями
//! 6. Заделка диагональных разрывов до неподвижной точки
//!
//! Все случайные решения берутся из одного `ChaCha8Rng`, засеянного `params.seed` (0, если сид не задан).

use crate::attraction::{Attraction, place_attractions};
use crate::config::ParkGenerationParams;
use crate::entrance::place_entrances;
use crate::error::ParkGenError;
use crate::gaps::repair_gaps;
use crate::grid::{Cell, Grid, MARGIN, Point};
use crate::road::graph::count_road_components;
use crate::road::{build_road_network, densify, sample_internal_nodes};
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Сводка одного запуска генерации
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationReport {
    pub seed: u64,
    pub width: usize,
    pub height: usize,
    pub entrances: Vec<Point>,
    /// Входы плюс внутренние узлы
    pub seed_points: usize,
    pub mst_edges: usize,
    /// Новые связи по каждому проходу уплотнения
    pub densify_links: Vec<usize>,
    pub attractions_requested: usize,
    pub attractions_placed: usize,
    pub gap_repairs: usize,
    pub gap_sweeps: usize,
    pub road_cells: usize,
    /// Компоненты связности дорог и входов на итоговой карте
    pub road_components: usize,
}

/// Результат генерации: карта, аттракционы и сводка
#[derive(Debug, Clone)]
pub struct Park {
    pub grid: Grid,
    pub seed_points: Vec<Point>,
    pub attractions: Vec<Attraction>,
    pub report: GenerationReport,
}

#[derive(Serialize)]
struct Summary<'a> {
    report: &'a GenerationReport,
    attractions: &'a [Attraction],
}

impl Park {
    /// Сохраняет сводку и список аттракционов в JSON
    pub fn save_summary<P: AsRef<Path>>(&self, path: P) -> Result<(), ParkGenError> {
        let summary = Summary {
            report: &self.report,
            attractions: &self.attractions,
        };
        fs::write(path, serde_json::to_string_pretty(&summary)?)?;
        Ok(())
    }
}

/// Генерирует парк по параметрам.
///
/// Параметры проверяются до выделения карты; после проверки генерация не может
/// завершиться ошибкой.
pub fn generate_park(params: &ParkGenerationParams) -> Result<Park, ParkGenError> {
    let errors = params.validate();
    if !errors.is_empty() {
        return Err(ParkGenError::InvalidConfig(errors));
    }

    let seed = params.seed.unwrap_or_default();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut grid = Grid::with_boundary(params.width, params.height, MARGIN);

    let entrances = place_entrances(&mut grid, params.entries, MARGIN, &mut rng);
    info!("Поставлено {} входов", entrances.len());

    let mut seed_points = entrances.clone();
    seed_points.extend(sample_internal_nodes(&grid, params.nodes, &mut rng));
    let edges = build_road_network(&mut grid, &seed_points, params.road_width);

    let densify_links = densify(&mut grid, &params.densify_passes, params.road_width);
    info!("Уплотнение дорог: {densify_links:?} новых связей по проходам");

    let attractions = place_attractions(
        &mut grid,
        params.attractions,
        params.queue_length,
        params.min_attraction_distance,
        MARGIN,
        &mut rng,
    );

    let (gap_repairs, gap_sweeps) = repair_gaps(&mut grid);

    let report = GenerationReport {
        seed,
        width: params.width,
        height: params.height,
        entrances,
        seed_points: seed_points.len(),
        mst_edges: edges.len(),
        densify_links,
        attractions_requested: params.attractions,
        attractions_placed: attractions.len(),
        gap_repairs,
        gap_sweeps,
        road_cells: grid.count(Cell::Road),
        road_components: count_road_components(&grid),
    };

    Ok(Park {
        grid,
        seed_points,
        attractions,
        report,
    })
}
