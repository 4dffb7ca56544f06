//! Trajektorien-Geometrie für geschlossene Pfade.
//!
//! Berechnet pro Wegpunkt Bogenlänge `s`, Heading `psi` (Richtung zum
//! Nachfolger) und Krümmung `kappa` (Umkreis durch Vorgänger, Punkt und
//! Nachfolger). Indizes laufen modulo N, der Pfad gilt als geschlossen.

use glam::DVec2;
use thiserror::Error;

/// Unterhalb dieses Betrags gilt die Umkreis-Determinante als kollinear.
pub const COLLINEAR_EPSILON: f64 = 1e-10;

/// Fehler der Trajektorien-Berechnung.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrajectoryError {
    /// Pfad ohne Wegpunkte
    #[error("No points to save!")]
    EmptyPath,
    /// Punkt- und Geschwindigkeitsliste unterschiedlich lang
    #[error("Punktanzahl ({points}) passt nicht zur Geschwindigkeitsanzahl ({velocities})")]
    LengthMismatch { points: usize, velocities: usize },
}

/// Eine Zeile der exportierten Trajektorie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectorySample {
    /// Kumulierte Bogenlänge ab Startpunkt (m)
    pub s: f64,
    /// X-Position im Map-Frame (m)
    pub x: f64,
    /// Y-Position im Map-Frame (m)
    pub y: f64,
    /// Heading zum nächsten Punkt (rad)
    pub psi: f64,
    /// Krümmung (1/m), 0 bei geraden/entarteten Abschnitten
    pub kappa: f64,
    /// Sollgeschwindigkeit (m/s)
    pub vx: f64,
    /// Beschleunigung, wird nicht berechnet und ist immer 0.0
    pub ax: f64,
}

/// Berechnet die Trajektorie eines geschlossenen Pfads.
///
/// Liefert N Zeilen plus eine Schlusszeile, die Punkt 0 wiederholt.
/// Entartete Geometrie (kollineare oder doppelte Punkte) ergibt `kappa = 0`
/// und führt nie zu einem Fehler.
pub fn compute(
    points: &[DVec2],
    velocities: &[f64],
) -> Result<Vec<TrajectorySample>, TrajectoryError> {
    if points.is_empty() {
        return Err(TrajectoryError::EmptyPath);
    }
    if points.len() != velocities.len() {
        return Err(TrajectoryError::LengthMismatch {
            points: points.len(),
            velocities: velocities.len(),
        });
    }

    let s = arc_lengths(points);
    let psi = headings(points);
    let kappa = curvatures(points);

    let mut samples: Vec<TrajectorySample> = points
        .iter()
        .zip(velocities)
        .enumerate()
        .map(|(i, (point, &vx))| TrajectorySample {
            s: s[i],
            x: point.x,
            y: point.y,
            psi: psi[i],
            kappa: kappa[i],
            vx,
            ax: 0.0,
        })
        .collect();

    // Schlusszeile: Bogenlänge bleibt bei s[N-1], das Rücksegment zu Punkt 0
    // wird nicht addiert. Vermutlich ein Fehler im Exportformat (erwartet wäre
    // die volle Rundenlänge), bleibt aber für bestehende Auswerter erhalten.
    let first = samples[0];
    samples.push(TrajectorySample {
        s: s[s.len() - 1],
        ..first
    });

    Ok(samples)
}

/// Kumulierte Bogenlängen entlang des offenen Polygonzugs (ohne Rücksegment).
pub fn arc_lengths(points: &[DVec2]) -> Vec<f64> {
    let mut lengths = Vec::with_capacity(points.len());
    let mut cumsum = 0.0;
    for (i, point) in points.iter().enumerate() {
        if i > 0 {
            cumsum += point.distance(points[i - 1]);
        }
        lengths.push(cumsum);
    }
    lengths
}

/// Heading jedes Punkts zum Nachfolger, der letzte Punkt zeigt auf Punkt 0.
pub fn headings(points: &[DVec2]) -> Vec<f64> {
    let n = points.len();
    (0..n)
        .map(|i| {
            let delta = points[(i + 1) % n] - points[i];
            delta.y.atan2(delta.x)
        })
        .collect()
}

/// Krümmung an jedem Punkt aus dem Umkreis mit seinen Nachbarn.
pub fn curvatures(points: &[DVec2]) -> Vec<f64> {
    let n = points.len();
    (0..n)
        .map(|i| {
            let prev = points[(i + n - 1) % n];
            let next = points[(i + 1) % n];
            circumcircle_curvature(prev, points[i], next)
        })
        .collect()
}

/// Krümmung `1/r` des Kreises durch drei Punkte, bewertet am mittleren Punkt.
///
/// Gibt 0.0 zurück, wenn die Punkte (nahezu) kollinear sind.
pub fn circumcircle_curvature(p1: DVec2, p2: DVec2, p3: DVec2) -> f64 {
    let (x1, y1) = (p1.x, p1.y);
    let (x2, y2) = (p2.x, p2.y);
    let (x3, y3) = (p3.x, p3.y);

    let d = 2.0 * (x1 * (y2 - y3) + x2 * (y3 - y1) + x3 * (y1 - y2));
    if d.abs() <= COLLINEAR_EPSILON {
        return 0.0;
    }

    let sq1 = x1 * x1 + y1 * y1;
    let sq2 = x2 * x2 + y2 * y2;
    let sq3 = x3 * x3 + y3 * y3;
    let ux = (sq1 * (y2 - y3) + sq2 * (y3 - y1) + sq3 * (y1 - y2)) / d;
    let uy = (sq1 * (x3 - x2) + sq2 * (x1 - x3) + sq3 * (x2 - x1)) / d;

    let r = p2.distance(DVec2::new(ux, uy));
    if r > 0.0 {
        1.0 / r
    } else {
        0.0
    }
}
