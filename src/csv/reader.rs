//! Reader für Referenz-Mittellinien (Overlay im Editor).
//!
//! Format: erste Zeile ist Kopfzeile, danach `x, y, ...` pro Zeile.

use anyhow::{anyhow, Context, Result};
use glam::DVec2;
use std::path::Path;

/// Parst eine Mittellinie. Kopfzeile und Leerzeilen werden übersprungen,
/// zusätzliche Spalten hinter `x, y` ignoriert.
pub fn parse_centerline(content: &str) -> Result<Vec<DVec2>> {
    let mut points = Vec::new();

    for (index, line) in content.lines().enumerate().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let line_no = index + 1;
        let mut columns = line.split(',').map(str::trim);
        let x = parse_column(columns.next(), "x", line_no)?;
        let y = parse_column(columns.next(), "y", line_no)?;
        points.push(DVec2::new(x, y));
    }

    Ok(points)
}

fn parse_column(column: Option<&str>, name: &str, line_no: usize) -> Result<f64> {
    let raw = column
        .filter(|c| !c.is_empty())
        .ok_or_else(|| anyhow!("Zeile {}: Spalte {} fehlt", line_no, name))?;
    let value: f64 = raw
        .parse()
        .with_context(|| format!("Zeile {}: ungültiger Wert für {}: '{}'", line_no, name, raw))?;
    if !value.is_finite() {
        return Err(anyhow!("Zeile {}: {} ist nicht endlich", line_no, name));
    }
    Ok(value)
}

/// Lädt eine Mittellinie aus einer Datei.
///
/// Gibt `Ok(None)` zurück, wenn die Datei nicht existiert.
pub fn load_centerline(path: &Path) -> Result<Option<Vec<DVec2>>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("Keine Mittellinie unter {}", path.display());
            return Ok(None);
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Mittellinie nicht lesbar: {}", path.display()));
        }
    };
    let points = parse_centerline(&content)
        .with_context(|| format!("Mittellinie fehlerhaft: {}", path.display()))?;
    log::info!(
        "Mittellinie geladen: {} Punkte aus {}",
        points.len(),
        path.display()
    );
    Ok(Some(points))
}
