use clap::Parser;
use parkgen::{ParkGenerationParams, generate_park};
use std::path::PathBuf;

/// Генератор карт тематического парка
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Путь к конфигурационному файлу в формате TOML (заменяет числовые флаги)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Ширина карты в клетках
    #[arg(long, required_unless_present = "config", conflicts_with = "config")]
    width: Option<usize>,

    /// Высота карты в клетках
    #[arg(long, required_unless_present = "config", conflicts_with = "config")]
    height: Option<usize>,

    /// Число входов
    #[arg(long, required_unless_present = "config", conflicts_with = "config")]
    entries: Option<usize>,

    /// Число внутренних узлов каркаса дорог
    #[arg(long, required_unless_present = "config", conflicts_with = "config")]
    nodes: Option<usize>,

    /// Толщина дороги
    #[arg(long, required_unless_present = "config", conflicts_with = "config")]
    road_width: Option<usize>,

    /// Длина очереди вместе с аттракционом
    #[arg(long, required_unless_present = "config", conflicts_with = "config")]
    queue_length: Option<usize>,

    /// Желаемое число аттракционов
    #[arg(long, required_unless_present = "config", conflicts_with = "config")]
    attractions: Option<usize>,

    /// Сид генератора (по умолчанию случайный)
    #[arg(long)]
    seed: Option<u64>,

    /// Минимальное расстояние между аттракционами
    #[arg(long)]
    min_dist: Option<f64>,

    /// Путь для сохранения текстовой карты
    #[arg(short, long, default_value = "park_ascii.txt")]
    output: PathBuf,

    /// Путь для JSON-сводки (аттракционы и статистика)
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Путь для PNG-превью
    #[arg(long)]
    png: Option<PathBuf>,

    /// Размер клетки в пикселях для PNG-превью
    #[arg(long, default_value_t = 8)]
    cell_size: u32,
}

impl Cli {
    fn params(&self) -> Result<ParkGenerationParams, Box<dyn std::error::Error>> {
        let mut params = if let Some(path) = &self.config {
            println!("🔍 Загрузка конфигурации из {}...", path.display());
            ParkGenerationParams::from_toml_file(path)?
        } else {
            ParkGenerationParams {
                seed: None,
                width: self.width.ok_or("--width is required")?,
                height: self.height.ok_or("--height is required")?,
                entries: self.entries.ok_or("--entries is required")?,
                nodes: self.nodes.ok_or("--nodes is required")?,
                road_width: self.road_width.ok_or("--road-width is required")?,
                queue_length: self.queue_length.ok_or("--queue-length is required")?,
                attractions: self.attractions.ok_or("--attractions is required")?,
                ..ParkGenerationParams::default()
            }
        };
        // флаг важнее ключа из файла; без обоих сид случайный
        params.seed = Some(self.seed.or(params.seed).unwrap_or_else(rand::random));
        if let Some(min_dist) = self.min_dist {
            params.min_attraction_distance = min_dist;
        }
        Ok(params)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();
    let params = cli.params()?;

    println!(
        "Генерация парка (размер: {}×{}, сид: {})...",
        params.width,
        params.height,
        params.seed.unwrap_or_default()
    );
    let park = generate_park(&params)?;
    let report = &park.report;
    println!(
        "Аттракционов: {} из {}, клеток дороги: {}",
        report.attractions_placed, report.attractions_requested, report.road_cells
    );

    println!("Сохранение в {:?}", cli.output);
    park.grid.save_as_txt(&cli.output)?;

    if let Some(path) = &cli.summary {
        println!("Сохранение сводки в {path:?}");
        park.save_summary(path)?;
    }
    if let Some(path) = &cli.png {
        println!("Сохранение превью в {path:?}");
        park.grid.save_as_png(path, cli.cell_size)?;
    }

    println!("\nГотово! Карта парка сохранена.");
    Ok(())
}
