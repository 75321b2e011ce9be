// src/grid/png.rs
//! Превью карты парка в PNG: каждая клетка — цветной квадрат `cell_size × cell_size`

use super::{Cell, Grid};
use crate::error::ParkGenError;
use image::{ImageBuffer, Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use std::path::Path;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl Cell {
    #[must_use]
    pub fn to_rgb(self) -> [u8; 3] {
        match self {
            Cell::Wall => [40, 40, 40],
            Cell::Empty => [120, 180, 90],
            Cell::Entrance => [220, 60, 60],
            Cell::Road => [210, 200, 170],
            Cell::Queue => [90, 110, 200],
            Cell::Attraction => [240, 190, 40],
        }
    }
}

impl Grid {
    /// Сырые RGB-байты, по одному пикселю на клетку
    #[must_use]
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        #[cfg(feature = "parallel")]
        let bytes = self.data.par_iter().flat_map_iter(|c| c.to_rgb()).collect();
        #[cfg(not(feature = "parallel"))]
        let bytes = self.data.iter().flat_map(|c| c.to_rgb()).collect();
        bytes
    }

    /// Изображение, в котором клетка занимает квадрат `cell_size` пикселей
    pub fn to_image(&self, cell_size: u32) -> Result<RgbImage, ParkGenError> {
        let base: RgbImage =
            ImageBuffer::from_raw(self.width as u32, self.height as u32, self.to_rgb_bytes())
                .ok_or(ParkGenError::Image(image::ImageError::Parameter(
                    image::error::ParameterError::from_kind(
                        image::error::ParameterErrorKind::DimensionMismatch,
                    ),
                )))?;
        if cell_size <= 1 {
            return Ok(base);
        }

        let mut img = RgbImage::new(self.width as u32 * cell_size, self.height as u32 * cell_size);
        for (x, y, pixel) in base.enumerate_pixels() {
            draw_filled_rect_mut(
                &mut img,
                Rect::at((x * cell_size) as i32, (y * cell_size) as i32).of_size(cell_size, cell_size),
                Rgb(pixel.0),
            );
        }
        Ok(img)
    }

    pub fn save_as_png<P: AsRef<Path>>(&self, path: P, cell_size: u32) -> Result<(), ParkGenError> {
        self.to_image(cell_size)?.save(path)?;
        Ok(())
    }
}
