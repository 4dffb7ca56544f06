use glam::DVec2;
use race_waypoint_editor::{compute, save_trajectory, write_trajectory_csv, WaypointPath};

fn square() -> Vec<DVec2> {
    vec![
        DVec2::new(0.0, 0.0),
        DVec2::new(10.0, 0.0),
        DVec2::new(10.0, 10.0),
        DVec2::new(0.0, 10.0),
    ]
}

/// Zerlegt eine CSV-Zeile in Zahlen.
fn parse_row(line: &str) -> Vec<f64> {
    line.split(',')
        .map(|field| field.parse().expect("Feld sollte eine Zahl sein"))
        .collect()
}

#[test]
fn test_two_point_loop_exact_text() {
    let points = [DVec2::new(0.0, 0.0), DVec2::new(10.0, 0.0)];
    let samples = compute(&points, &[1.0, 1.0]).expect("Trajektorie sollte berechenbar sein");

    assert_eq!(
        write_trajectory_csv(&samples),
        "0.0,0.0,0.0,0.0,0.0,1.0,0.0\n\
         10.0,10.0,0.0,3.141592653589793,0.0,1.0,0.0\n\
         10.0,0.0,0.0,0.0,0.0,1.0,0.0\n"
    );
}

#[test]
fn test_square_rows_match_expected_values() {
    let samples = compute(&square(), &[1.0; 4]).expect("Trajektorie sollte berechenbar sein");
    let text = write_trajectory_csv(&samples);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 5);

    let kappa = 1.0 / 50f64.sqrt();
    let expected = [
        [0.0, 0.0, 0.0, 0.0, kappa, 1.0, 0.0],
        [10.0, 10.0, 0.0, std::f64::consts::FRAC_PI_2, kappa, 1.0, 0.0],
        [20.0, 10.0, 10.0, std::f64::consts::PI, kappa, 1.0, 0.0],
        [30.0, 0.0, 10.0, -std::f64::consts::FRAC_PI_2, kappa, 1.0, 0.0],
        [30.0, 0.0, 0.0, 0.0, kappa, 1.0, 0.0],
    ];

    for (line, expected_row) in lines.iter().zip(expected.iter()) {
        let row = parse_row(line);
        assert_eq!(row.len(), 7, "Zeile '{}' sollte 7 Spalten haben", line);
        for (value, want) in row.iter().zip(expected_row) {
            assert!(
                (value - want).abs() < 1e-12,
                "Zeile '{}': {} != {}",
                line,
                value,
                want
            );
        }
    }

    assert_eq!(
        text,
        "0.0,0.0,0.0,0.0,0.1414213562373095,1.0,0.0\n\
         10.0,10.0,0.0,1.5707963267948966,0.1414213562373095,1.0,0.0\n\
         20.0,10.0,10.0,3.141592653589793,0.1414213562373095,1.0,0.0\n\
         30.0,0.0,10.0,-1.5707963267948966,0.1414213562373095,1.0,0.0\n\
         30.0,0.0,0.0,0.0,0.1414213562373095,1.0,0.0\n"
    );
}

#[test]
fn test_closing_row_reuses_last_arc_length() {
    let samples =
        compute(&square(), &[2.0, 1.0, 1.0, 1.0]).expect("Trajektorie sollte berechenbar sein");
    let closing = samples.last().expect("Schlusszeile sollte existieren");

    assert_eq!(closing.s, 30.0);
    assert_eq!((closing.x, closing.y), (0.0, 0.0));
    assert_eq!(closing.vx, 2.0);
    assert_eq!(closing.ax, 0.0);
}

#[test]
fn test_waypoint_path_saves_through_writer() {
    let dir = std::env::temp_dir().join(format!("rwe_export_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    let path = dir.join("nested").join("traj_race_cl.csv");

    let mut waypoints = WaypointPath::new();
    for point in square() {
        waypoints.append(point);
    }
    let samples = waypoints
        .compute_trajectory()
        .expect("Trajektorie sollte berechenbar sein");

    save_trajectory(&path, &samples).expect("Speichern sollte Verzeichnisse anlegen");

    let content = std::fs::read_to_string(&path).expect("Datei sollte lesbar sein");
    assert_eq!(content, write_trajectory_csv(&samples));
    assert!(!content.contains("s,x,y"), "Ausgabe hat keine Kopfzeile");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_empty_path_produces_no_rows() {
    let result = compute(&[], &[]);

    assert!(result.is_err());
    assert_eq!(
        result.map_err(|e| e.to_string()).unwrap_err(),
        "No points to save!"
    );
}
