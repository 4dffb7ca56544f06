//! Background-Map-Loader: Graustufen-Raster im Map-Frame.

use anyhow::{Context, Result};
use glam::DVec2;
use image::{DynamicImage, GenericImageView, GrayImage, ImageReader};
use std::io::BufReader;
use std::path::Path;

use super::MapMetadata;

/// Achsenparalleler Bereich in Weltkoordinaten (Meter).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl WorldBounds {
    /// Kleinster Bereich, der alle Punkte enthält. `None` bei leerer Liste.
    pub fn from_points(points: &[DVec2]) -> Option<Self> {
        let first = points.first()?;
        let mut bounds = Self {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        for p in &points[1..] {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.min_y = bounds.min_y.min(p.y);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.max_y = bounds.max_y.max(p.y);
        }
        Some(bounds)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(
            (self.min_x + self.max_x) * 0.5,
            (self.min_y + self.max_y) * 0.5,
        )
    }

    /// Prüft, ob ein Punkt im Bereich liegt (Ränder inklusive).
    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

/// Map-Raster mit Platzierung im Map-Frame.
pub struct BackgroundMap {
    /// 8-Bit-Graustufen, Zeile 0 = obere Bildkante
    image: GrayImage,
    resolution: f64,
    origin: DVec2,
}

impl BackgroundMap {
    /// Lädt das Rasterbild, auf das die Metadaten verweisen.
    pub fn load(meta: &MapMetadata) -> Result<Self> {
        let image = Self::open_image(&meta.image_path)?;
        Ok(Self::from_image(
            image,
            meta.resolution,
            DVec2::new(meta.origin.0, meta.origin.1),
        ))
    }

    fn open_image(path: &Path) -> Result<DynamicImage> {
        // Erst über die Dateiendung, dann über Magic Bytes (z.B. .pgm ohne Endung)
        match image::open(path) {
            Ok(img) => Ok(img),
            Err(ext_err) => {
                log::warn!(
                    "Format-Erkennung via Dateiendung fehlgeschlagen für '{}': {}. Versuche Erkennung via Dateiinhalt...",
                    path.display(),
                    ext_err
                );
                let file = std::fs::File::open(path)
                    .with_context(|| format!("Map-Bild nicht gefunden: {}", path.display()))?;
                let reader = ImageReader::new(BufReader::new(file))
                    .with_guessed_format()
                    .with_context(|| {
                        format!("Format-Erkennung fehlgeschlagen für: {}", path.display())
                    })?;
                reader.decode().with_context(|| {
                    format!("Fehler beim Dekodieren des Map-Bilds: {}", path.display())
                })
            }
        }
    }

    /// Erstellt eine BackgroundMap aus einem bereits dekodierten Bild.
    pub fn from_image(image: DynamicImage, resolution: f64, origin: DVec2) -> Self {
        let (width, height) = image.dimensions();
        let map = Self {
            image: image.into_luma8(),
            resolution,
            origin,
        };
        let bounds = map.world_bounds();
        log::info!(
            "Map geladen: size={}x{}, scale={}, offset=({}, {}), Welt ({:.2}, {:.2}) bis ({:.2}, {:.2})",
            width,
            height,
            resolution,
            origin.x,
            origin.y,
            bounds.min_x,
            bounds.min_y,
            bounds.max_x,
            bounds.max_y
        );
        map
    }

    pub fn image(&self) -> &GrayImage {
        &self.image
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Weltbereich `[ox, ox + w·res] × [oy, oy + h·res]`.
    pub fn world_bounds(&self) -> WorldBounds {
        let (w, h) = self.image.dimensions();
        WorldBounds {
            min_x: self.origin.x,
            min_y: self.origin.y,
            max_x: self.origin.x + f64::from(w) * self.resolution,
            max_y: self.origin.y + f64::from(h) * self.resolution,
        }
    }

    /// Weltkoordinate → kontinuierliche Pixelkoordinate (Zeile 0 oben).
    pub fn world_to_pixel(&self, world: DVec2) -> DVec2 {
        let (_, h) = self.image.dimensions();
        DVec2::new(
            (world.x - self.origin.x) / self.resolution,
            f64::from(h) - (world.y - self.origin.y) / self.resolution,
        )
    }

    /// Ganzzahliges Pixel `(Spalte, Zeile)` unter einer Weltkoordinate.
    ///
    /// `None` außerhalb des Rasters.
    pub fn pixel_at(&self, world: DVec2) -> Option<(u32, u32)> {
        let (w, h) = self.image.dimensions();
        let px = self.world_to_pixel(world).floor();
        if px.x < 0.0 || px.y < 0.0 || px.x >= f64::from(w) || px.y >= f64::from(h) {
            return None;
        }
        Some((px.x as u32, px.y as u32))
    }
}
