//! Writer für Trajektorien-Dateien (`s, x, y, psi, kappa, vx, ax`).

use crate::core::TrajectorySample;
use anyhow::{Context, Result};
use std::path::Path;

/// Formatiert Trajektorien-Zeilen als CSV ohne Kopfzeile.
pub fn write_trajectory_csv(samples: &[TrajectorySample]) -> String {
    let mut output = String::with_capacity(samples.len() * 96);
    for row in samples {
        let fields = [row.s, row.x, row.y, row.psi, row.kappa, row.vx, row.ax];
        let line = fields
            .iter()
            .map(|&value| format_float(value))
            .collect::<Vec<String>>()
            .join(",");
        output.push_str(&line);
        output.push('\n');
    }
    output
}

/// Schreibt die Trajektorie nach `path` und legt fehlende Verzeichnisse an.
pub fn save_trajectory(path: &Path, samples: &[TrajectorySample]) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Ausgabeverzeichnis nicht anlegbar: {}", dir.display()))?;
    }
    std::fs::write(path, write_trajectory_csv(samples))
        .with_context(|| format!("Trajektorie nicht schreibbar: {}", path.display()))?;
    log::info!("Saved trajectory to {}", path.display());
    Ok(())
}

/// Kürzeste verlustfreie Darstellung, ganze Zahlen mit `.0`.
///
/// Exponenten werden mit Vorzeichen und mindestens zwei Ziffern geschrieben
/// (`1e-07`, `1e+16`), wie es bestehende Trajektorien-Dateien enthalten.
fn format_float(value: f64) -> String {
    let text = format!("{:?}", value);
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return text;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{}e{}{:0>2}", mantissa, sign, digits)
}
