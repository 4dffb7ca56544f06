#![no_main]

use libfuzzer_sys::fuzz_target;
use race_waypoint_editor::MapMetadata;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(meta) = MapMetadata::parse(content, Path::new("maps")) {
            assert!(meta.resolution > 0.0);
            let _ = meta.map_name();
        }
    }
});
