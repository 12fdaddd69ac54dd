//! Integration tests for the command-line workflow

use std::fs;
use std::path::PathBuf;

use geospatial::commands::{
    build_cli, Command, CommandFactory, DestinationCommand, DistanceCommand,
    GeospatialCommandFactory, ShapesCommand,
};
use geospatial::utils::shape_file::ShapeFile;
use geospatial::{Coordinate, CoordinateFormat, Distance, GeoError};

const SHAPES: &str = r#"
[[shape]]
name = "depot"
type = "circle"
center = [-25.824906, 28.259757]
radius_m = 5000

[[shape]]
name = "square"
type = "polygon"
vertices = "0,0,10,0,10,10,0,10,0,0"

[[shape]]
type = "line"
vertices = "28.25,-25.82,28.26,-25.86"
tolerance_m = 100
"#;

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("geospatial-{}-{}", std::process::id(), name));
    fs::write(&path, contents).unwrap();
    path
}

fn run_cli(args: &[&str]) -> Result<String, GeoError> {
    let matches = build_cli().try_get_matches_from(args.iter().copied()).unwrap();
    GeospatialCommandFactory::new().create_command(&matches)?.run()
}

#[test]
fn test_distance_from_cli() {
    let report = run_cli(&[
        "geospatial",
        "--from", "-25.824906,28.259757",
        "--to", "-25.864751,28.257087",
    ])
    .unwrap();

    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines[0], "From:     -25.824906,28.259757");
    assert_eq!(lines[1], "To:       -25.864751,28.257087");
    assert_eq!(lines[2], "Distance: 4.439 km (2.758 mi)");
    assert_eq!(lines[3], "Bearing:  183.451°");
}

#[test]
fn test_distance_in_dms() {
    let from = Coordinate::new(-25.824906, 28.259757).unwrap();
    let to = Coordinate::new(-25.864751, 28.257087).unwrap();
    let report = DistanceCommand::from_coordinates(from, to, CoordinateFormat::DegreesMinutesSeconds)
        .run()
        .unwrap();

    assert!(report.starts_with("From:     25° 49' 29.6616\" S, 28° 15' 35.1252\" E\n"));
}

#[test]
fn test_destination_from_cli() {
    let report = run_cli(&[
        "geospatial",
        "--from", "-25.824906,28.259757",
        "--distance", "4.438618395",
        "--bearing", "183.4505874",
    ])
    .unwrap();

    let destination = report
        .lines()
        .find_map(|line| line.strip_prefix("Destination: "))
        .unwrap()
        .parse::<Coordinate>()
        .unwrap();
    assert!((destination.latitude() - -25.864751).abs() < 1e-4);
    assert!((destination.longitude() - 28.257087).abs() < 1e-4);
}

#[test]
fn test_destination_across_antimeridian() {
    let from = Coordinate::new(0.0, 179.9).unwrap();
    let report = DestinationCommand::from_parts(
        from,
        Distance::from_kilometers(50.0),
        90.0,
        CoordinateFormat::DecimalDegrees,
    )
    .run()
    .unwrap();

    let destination = report.lines().nth(1).unwrap();
    assert!(destination.contains(",-179."), "{}", destination);
}

#[test]
fn test_shapes_from_cli() {
    let path = temp_file("shapes.toml", SHAPES);
    let result = run_cli(&[
        "geospatial",
        "--shapes", path.to_str().unwrap(),
        "--point", "-25.83,28.26",
        "-v",
    ]);
    fs::remove_file(&path).unwrap();

    let report = result.unwrap();
    assert!(report.contains("depot (circle)"));
    assert!(report.contains("square (polygon)"));
    assert!(report.contains("line #2 (line)"));
    assert!(report.contains("Inner bounds: n/a (inner bounds of a circle is not supported)"));
    assert!(report.contains("Area: n/a (area of a buffered line is not supported)"));
    assert!(report.contains("Contains -25.830000,28.260000: yes"));
    assert!(report.contains("Contains -25.830000,28.260000: no"));
}

#[test]
fn test_shapes_command_without_shapes() {
    let command = ShapesCommand::from_shape_file(ShapeFile::default(), None, false);
    assert!(matches!(command.run(), Err(GeoError::EmptyInput(_))));
}

#[test]
fn test_invalid_coordinate_argument() {
    let result = run_cli(&["geospatial", "--from", "95,0", "--to", "0,0"]);
    assert!(matches!(result, Err(GeoError::LatitudeOutOfRange(_))));

    let result = run_cli(&["geospatial", "--from", "north", "--to", "0,0"]);
    assert!(matches!(result, Err(GeoError::MalformedInput(_))));
}

#[test]
fn test_nothing_to_do() {
    let matches = build_cli().try_get_matches_from(["geospatial"]).unwrap();
    let result = GeospatialCommandFactory::new().create_command(&matches);
    assert!(matches!(result, Err(GeoError::GenericError(_))));
}

#[test]
fn test_distance_requires_bearing() {
    let result = build_cli().try_get_matches_from(["geospatial", "--from", "0,0", "--distance", "5"]);
    assert!(result.is_err());
}
