// src/config.rs
//! Конфигурация генерации парка
//!
//! Этот модуль определяет параметры, управляющие процедурной генерацией:
//! - Размер карты и число входов
//! - Плотность каркаса дорог (число внутренних узлов) и ширина дорог
//! - Число аттракционов, длина очередей и расстояние между аттракционами
//! - Проходы уплотнения дорожной сети
//!
//! Основные параметры обязательны: у них нет значений по умолчанию ни в TOML,
//! ни в CLI. Перед генерацией параметры проверяются [`ParkGenerationParams::validate`].

use crate::error::{ConfigError, ParkGenError};
use crate::grid::MARGIN;
use crate::road::network::NODE_INSET;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Параметры генерации одного парка
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkGenerationParams {
    /// Сид генератора случайных чисел (детерминированная генерация).
    ///
    /// `None` — сид не задан: CLI выбирает случайный, [`crate::generate_park`] берёт 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Ширина карты в клетках
    pub width: usize,

    /// Высота карты в клетках
    pub height: usize,

    /// Число входов на кольце у стены
    pub entries: usize,

    /// Число случайных внутренних узлов каркаса дорог
    pub nodes: usize,

    /// Толщина дороги в клетках
    pub road_width: usize,

    /// Длина кластера «очередь + аттракцион» в клетках
    pub queue_length: usize,

    /// Желаемое число аттракционов
    pub attractions: usize,

    /// Минимальное евклидово расстояние между аттракционами
    #[serde(default = "default_min_attraction_distance")]
    pub min_attraction_distance: f64,

    /// Проходы уплотнения: по одному на элемент, элемент — `max_dist` прохода
    #[serde(default = "default_densify_passes")]
    pub densify_passes: Vec<usize>,
}

fn default_min_attraction_distance() -> f64 {
    6.0
}
fn default_densify_passes() -> Vec<usize> {
    vec![8, 8, 12]
}

impl ParkGenerationParams {
    /// Загружает параметры из TOML-файла
    ///
    /// # Пример
    /// ```toml
    /// # park.toml
    /// seed = 42
    /// width = 150
    /// height = 50
    /// entries = 3
    /// nodes = 400
    /// road_width = 2
    /// queue_length = 5
    /// attractions = 20
    /// ```
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParkGenError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ParkGenError> {
        Ok(toml::from_str(contents)?)
    }

    /// Минимальный размер карты по каждой оси
    #[must_use]
    pub const fn min_extent() -> usize {
        2 * MARGIN + 1
    }

    /// Проверяет параметры и возвращает все найденные нарушения
    #[must_use]
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let min = Self::min_extent();

        if self.width < min {
            errors.push(ConfigError::ExtentTooSmall {
                axis: "width",
                value: self.width,
                min,
            });
        }
        if self.height < min {
            errors.push(ConfigError::ExtentTooSmall {
                axis: "height",
                value: self.height,
                min,
            });
        }
        if self.nodes > 0 && (self.width < 2 * NODE_INSET + 1 || self.height < 2 * NODE_INSET + 1)
        {
            errors.push(ConfigError::NodeAreaEmpty {
                width: self.width,
                height: self.height,
            });
        }
        if self.entries == 0 {
            errors.push(ConfigError::NoEntrances);
        }
        if self.road_width == 0 {
            errors.push(ConfigError::ZeroRoadWidth);
        }
        if self.queue_length == 0 {
            errors.push(ConfigError::ZeroQueueLength);
        }
        if !self.min_attraction_distance.is_finite() || self.min_attraction_distance < 0.0 {
            errors.push(ConfigError::InvalidMinDistance(self.min_attraction_distance));
        }
        for (pass, &max_dist) in self.densify_passes.iter().enumerate() {
            if max_dist == 0 {
                errors.push(ConfigError::ZeroDensifyDistance { pass });
            }
        }

        errors
    }
}

impl Default for ParkGenerationParams {
    fn default() -> Self {
        Self {
            seed: None,
            width: 150,
            height: 50,
            entries: 3,
            nodes: 400,
            road_width: 2,
            queue_length: 5,
            attractions: 20,
            min_attraction_distance: 6.0,
            densify_passes: default_densify_passes(),
        }
    }
}
