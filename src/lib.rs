pub mod attraction;
pub mod config;
pub mod entrance;
pub mod error;
pub mod gaps;
pub mod grid;
pub mod park;
pub mod road;

pub use attraction::{Attraction, Direction};
pub use config::ParkGenerationParams;
pub use error::{ConfigError, ParkGenError};
pub use grid::{Cell, Grid, MARGIN, Point};
pub use park::{GenerationReport, Park, generate_park};
