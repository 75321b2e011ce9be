//! Дорожная сеть парка
//!
//! - [`path`] — растеризация ступенчатого пути и утолщение дороги
//! - [`network`] — остовное дерево Краскала над входами и внутренними узлами
//! - [`densify`] — дополнительные короткие связи между близкими дорогами
//! - [`graph`] — граф проходимых клеток для проверок связности

pub mod densify;
pub mod graph;
pub mod network;
pub mod path;

pub use densify::{connect_nearby_roads, densify};
pub use network::{DisjointSet, Edge, build_road_network, sample_internal_nodes};
pub use path::{add_road, expand_orthogonal_path};
