#![no_main]

use libfuzzer_sys::fuzz_target;
use race_waypoint_editor::{compute, parse_centerline};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(points) = parse_centerline(content) {
            // Mittellinie als Pfad: Geometrie darf bei beliebigen Punkten nicht paniken
            let velocities = vec![1.0; points.len()];
            if let Ok(samples) = compute(&points, &velocities) {
                assert_eq!(samples.len(), points.len() + 1);
            }
        }
    }
});
