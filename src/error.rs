//! Ошибки генератора парка
//!
//! Сама генерация не имеет восстанавливаемых ошибок: нехватка аттракционов или
//! отсутствие пар для уплотнения дорог — нормальный исход. Фатальны только
//! некорректные параметры (проверяются до выделения карты) и ввод-вывод на границе.

use std::fmt;

/// Нарушение правила проверки параметров генерации
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Размер карты по оси меньше `2 * MARGIN + 1`
    ExtentTooSmall {
        axis: &'static str,
        value: usize,
        min: usize,
    },
    /// Внутренние узлы запрошены, но диапазон их выборки пуст
    NodeAreaEmpty { width: usize, height: usize },
    /// Парк без входов
    NoEntrances,
    /// Нулевая ширина дороги
    ZeroRoadWidth,
    /// Нулевая длина очереди
    ZeroQueueLength,
    /// Отрицательное или нечисловое минимальное расстояние между аттракционами
    InvalidMinDistance(f64),
    /// Проход уплотнения с `max_dist == 0`
    ZeroDensifyDistance { pass: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExtentTooSmall { axis, value, min } => {
                write!(f, "{axis} = {value} is too small, need at least {min}")
            }
            Self::NodeAreaEmpty { width, height } => write!(
                f,
                "a {width}x{height} map has no room for internal road nodes"
            ),
            Self::NoEntrances => write!(f, "entries must be at least 1"),
            Self::ZeroRoadWidth => write!(f, "road_width must be at least 1"),
            Self::ZeroQueueLength => write!(f, "queue_length must be at least 1"),
            Self::InvalidMinDistance(d) => {
                write!(f, "min_attraction_distance must be finite and >= 0, got {d}")
            }
            Self::ZeroDensifyDistance { pass } => {
                write!(f, "densify pass {pass} has max_dist 0")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Ошибки верхнего уровня: конфигурация и ввод-вывод
#[derive(Debug)]
pub enum ParkGenError {
    /// Параметры не прошли проверку; содержит все найденные нарушения
    InvalidConfig(Vec<ConfigError>),
    /// Ошибка чтения или записи файла
    Io(std::io::Error),
    /// Некорректный TOML-файл конфигурации
    ConfigParse(toml::de::Error),
    /// Ошибка кодирования PNG
    Image(image::ImageError),
    /// Ошибка сериализации сводки
    Json(serde_json::Error),
    /// Неизвестный символ или рваная строка при чтении текстовой карты
    Parse {
        line: usize,
        column: usize,
        glyph: Option<char>,
    },
}

impl fmt::Display for ParkGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(errors) => {
                write!(f, "invalid parameters: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{e}")?;
                }
                Ok(())
            }
            Self::Io(e) => write!(f, "i/o error: {e}"),
            Self::ConfigParse(e) => write!(f, "config parse error: {e}"),
            Self::Image(e) => write!(f, "image error: {e}"),
            Self::Json(e) => write!(f, "json error: {e}"),
            Self::Parse {
                line,
                column,
                glyph: Some(glyph),
            } => write!(f, "unknown glyph {glyph:?} at line {line}, column {column}"),
            Self::Parse {
                line,
                column,
                glyph: None,
            } => write!(f, "line {line} ends at column {column}, row width mismatch"),
        }
    }
}

impl std::error::Error for ParkGenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            Self::Image(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::InvalidConfig(_) | Self::Parse { .. } => None,
        }
    }
}

impl From<std::io::Error> for ParkGenError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ParkGenError {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}

impl From<image::ImageError> for ParkGenError {
    fn from(e: image::ImageError) -> Self {
        Self::Image(e)
    }
}

impl From<serde_json::Error> for ParkGenError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<Vec<ConfigError>> for ParkGenError {
    fn from(errors: Vec<ConfigError>) -> Self {
        Self::InvalidConfig(errors)
    }
}
