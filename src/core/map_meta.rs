//! Map-Beschreibung im ROS-map_server-Format (YAML).
//!
//! Enthält Bildpfad, Auflösung (m/Pixel) und Ursprung der linken unteren
//! Bildecke im Map-Frame.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Rohform der YAML-Datei.
#[derive(Debug, Clone, Deserialize)]
struct RawMapYaml {
    image: String,
    resolution: f64,
    origin: Vec<f64>,
    #[serde(default)]
    negate: Option<i64>,
    #[serde(default)]
    occupied_thresh: Option<f64>,
    #[serde(default)]
    free_thresh: Option<f64>,
}

/// Geprüfte Map-Metadaten.
#[derive(Debug, Clone, PartialEq)]
pub struct MapMetadata {
    /// Bildpfad, relativ zur YAML-Datei aufgelöst
    pub image_path: PathBuf,
    /// Meter pro Pixel
    pub resolution: f64,
    /// Weltposition der linken unteren Bildecke (x, y)
    pub origin: (f64, f64),
    /// Orientierung des Ursprungs (rad), nur informativ
    pub origin_yaw: f64,
    /// Invertierte Belegung (ROS `negate`)
    pub negate: bool,
    pub occupied_thresh: Option<f64>,
    pub free_thresh: Option<f64>,
}

impl MapMetadata {
    /// Lädt und prüft eine Map-YAML-Datei.
    pub fn load(yaml_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(yaml_path)
            .with_context(|| format!("Map-YAML nicht lesbar: {}", yaml_path.display()))?;
        let base_dir = yaml_path.parent().unwrap_or_else(|| Path::new("."));
        Self::parse(&content, base_dir)
            .with_context(|| format!("Map-YAML fehlerhaft: {}", yaml_path.display()))
    }

    /// Parst YAML-Inhalt; `base_dir` dient zur Auflösung relativer Bildpfade.
    pub fn parse(content: &str, base_dir: &Path) -> Result<Self> {
        let raw: RawMapYaml = serde_yaml::from_str(content)?;

        if !raw.resolution.is_finite() || raw.resolution <= 0.0 {
            bail!("resolution muss positiv sein (gefunden: {})", raw.resolution);
        }
        if raw.origin.len() < 2 {
            bail!(
                "origin braucht mindestens x und y (gefunden: {} Werte)",
                raw.origin.len()
            );
        }
        if raw.image.trim().is_empty() {
            bail!("image ist leer");
        }

        let image = Path::new(raw.image.trim());
        let image_path = if image.is_absolute() {
            image.to_path_buf()
        } else {
            base_dir.join(image)
        };

        Ok(Self {
            image_path,
            resolution: raw.resolution,
            origin: (raw.origin[0], raw.origin[1]),
            origin_yaw: raw.origin.get(2).copied().unwrap_or(0.0),
            negate: raw.negate.unwrap_or(0) != 0,
            occupied_thresh: raw.occupied_thresh,
            free_thresh: raw.free_thresh,
        })
    }

    /// Map-Name = Bild-Dateiname bis zum ersten Punkt (`my_map.pgm` → `my_map`).
    pub fn map_name(&self) -> String {
        self.image_path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.split('.').next())
            .filter(|name| !name.is_empty())
            .unwrap_or("unnamed")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "image: track.pgm\nresolution: 0.05\norigin: [-12.5, -3.0, 0.0]\nnegate: 0\noccupied_thresh: 0.65\nfree_thresh: 0.196\n";

    #[test]
    fn test_parse_ros_map_yaml() {
        let meta = MapMetadata::parse(SAMPLE, Path::new("/maps")).unwrap();
        assert_eq!(meta.image_path, PathBuf::from("/maps/track.pgm"));
        assert_eq!(meta.resolution, 0.05);
        assert_eq!(meta.origin, (-12.5, -3.0));
        assert_eq!(meta.origin_yaw, 0.0);
        assert!(!meta.negate);
        assert_eq!(meta.occupied_thresh, Some(0.65));
        assert_eq!(meta.free_thresh, Some(0.196));
    }

    #[test]
    fn test_optional_fields_may_be_missing() {
        let yaml = "image: a.png\nresolution: 0.1\norigin: [1.0, 2.0]\n";
        let meta = MapMetadata::parse(yaml, Path::new(".")).unwrap();
        assert_eq!(meta.origin, (1.0, 2.0));
        assert_eq!(meta.occupied_thresh, None);
    }

    #[test]
    fn test_absolute_image_path_is_kept() {
        let yaml = "image: /data/maps/hall.pgm\nresolution: 0.05\norigin: [0, 0, 0]\n";
        let meta = MapMetadata::parse(yaml, Path::new("/elsewhere")).unwrap();
        assert_eq!(meta.image_path, PathBuf::from("/data/maps/hall.pgm"));
        assert_eq!(meta.map_name(), "hall");
    }

    #[test]
    fn test_map_name_strips_everything_after_first_dot() {
        let yaml = "image: levine.blocked.pgm\nresolution: 0.05\norigin: [0, 0, 0]\n";
        let meta = MapMetadata::parse(yaml, Path::new(".")).unwrap();
        assert_eq!(meta.map_name(), "levine");
    }

    #[test]
    fn test_missing_resolution_is_an_error() {
        let yaml = "image: a.pgm\norigin: [0, 0, 0]\n";
        assert!(MapMetadata::parse(yaml, Path::new(".")).is_err());
    }

    #[test]
    fn test_non_positive_resolution_is_an_error() {
        let yaml = "image: a.pgm\nresolution: 0\norigin: [0, 0, 0]\n";
        assert!(MapMetadata::parse(yaml, Path::new(".")).is_err());
    }

    #[test]
    fn test_short_origin_is_an_error() {
        let yaml = "image: a.pgm\nresolution: 0.05\norigin: [3.0]\n";
        assert!(MapMetadata::parse(yaml, Path::new(".")).is_err());
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let err = MapMetadata::load(Path::new("/nonexistent/dir/map.yaml")).unwrap_err();
        assert!(format!("{:#}", err).contains("map.yaml"));
    }
}
