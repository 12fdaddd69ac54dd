//! Tests for parsing helpers, shape files and the file logger

use std::fs;

use log::{Level, Log, Record};

use super::logger::Logger;
use super::parse_utils::{parse_number, parse_pair};
use super::shape_file::ShapeFile;
use crate::errors::GeoError;
use crate::measurement::Distance;
use crate::shapes::{Shape, ShapeKind};
use crate::test_utils::{assert_close, coord};

const SHAPES: &str = r#"
[[shape]]
name = "depot"
type = "circle"
center = [-25.824906, 28.259757]
radius_m = 500

[[shape]]
type = "line"
vertices = "0,0,1,0,1,1"
tolerance_m = 250.5

[[shape]]
name = "square"
type = "polygon"
vertices = "0,0,10,0,10,10,0,10,0,0"

[[shape]]
type = "rectangle"
bottom = -10
left = 170
top = 10
right = -170
"#;

#[test]
fn test_parse_pair() {
    assert_eq!(parse_pair("1.5,-2").unwrap(), (1.5, -2.0));
    assert_eq!(parse_pair("  -.5 , +3. ").unwrap(), (-0.5, 3.0));
    assert!(matches!(parse_pair("1.5"), Err(GeoError::MalformedInput(_))));
    assert!(matches!(parse_pair("1,2,3"), Err(GeoError::MalformedInput(_))));
    assert!(matches!(parse_pair("x,2"), Err(GeoError::MalformedInput(_))));
}

#[test]
fn test_parse_number() {
    assert_eq!(parse_number(" 42.25 ").unwrap(), 42.25);
    assert!(matches!(parse_number("forty"), Err(GeoError::MalformedInput(_))));
}

#[test]
fn test_shape_file_parses_every_type() {
    let file = SHAPES.parse::<ShapeFile>().unwrap();
    assert_eq!(file.shapes.len(), 4);

    let names: Vec<&str> = file.shapes.iter().map(|s| s.shape.name()).collect();
    assert_eq!(names, vec!["circle", "line", "polygon", "rectangle"]);

    assert_eq!(file.shapes[0].label(0), "depot");
    assert_eq!(file.shapes[1].label(1), "line #1");

    match &file.shapes[0].shape {
        ShapeKind::Circle(circle) => {
            assert_eq!(circle.center, coord(-25.824906, 28.259757));
            assert_eq!(circle.radius, Distance::from_meters(500.0));
        },
        other => panic!("expected a circle, got {:?}", other),
    }
    match &file.shapes[1].shape {
        ShapeKind::Line(line) => {
            assert_eq!(line.vertices.len(), 3);
            assert_close(line.tolerance.meters(), 250.5, 1e-12);
        },
        other => panic!("expected a line, got {:?}", other),
    }

    let square = &file.shapes[2].shape;
    assert!(square.contains(&coord(5.0, 5.0)));
    assert!(file.shapes[3].shape.outer_bounds().unwrap().crosses_antimeridian());
}

#[test]
fn test_shape_file_line_without_tolerance() {
    let file = "[[shape]]\ntype = \"line\"\nvertices = \"0,0,1,1\"\n".parse::<ShapeFile>().unwrap();
    match &file.shapes[0].shape {
        ShapeKind::Line(line) => assert_eq!(line.tolerance, Distance::zero()),
        other => panic!("expected a line, got {:?}", other),
    }
}

#[test]
fn test_empty_shape_file() {
    assert!("".parse::<ShapeFile>().unwrap().shapes.is_empty());
}

#[test]
fn test_shape_file_errors() {
    let cases = [
        "not toml at all = = =",
        "shape = 5",
        "[[shape]]\nname = \"untyped\"",
        "[[shape]]\ntype = \"hexagon\"",
        "[[shape]]\ntype = \"circle\"\ncenter = [1.0]\nradius_m = 5",
        "[[shape]]\ntype = \"circle\"\ncenter = [1.0, 2.0]\nradius_m = \"far\"",
        "[[shape]]\ntype = \"polygon\"\nvertices = \"1,2,3\"",
        "[[shape]]\ntype = \"rectangle\"\nbottom = 10\nleft = 0\ntop = 0\nright = 10",
    ];
    for case in cases {
        let result = case.parse::<ShapeFile>();
        assert!(matches!(result, Err(GeoError::MalformedInput(_))), "accepted: {}", case);
    }
}

#[test]
fn test_shape_file_error_names_the_entry() {
    let content = "[[shape]]\ntype = \"polygon\"\nvertices = \"0,0\"\n\n[[shape]]\ntype = \"blob\"\n";
    match content.parse::<ShapeFile>() {
        Err(GeoError::MalformedInput(message)) => assert!(message.starts_with("shape #1:"), "{}", message),
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn test_shape_file_missing_file() {
    let result = ShapeFile::from_file("/nonexistent/geospatial/shapes.toml");
    assert!(matches!(result, Err(GeoError::IoError(_))));
}

#[test]
fn test_file_logger_writes_records() {
    let path = std::env::temp_dir().join(format!("geospatial-logger-{}.log", std::process::id()));
    let path_str = path.to_str().unwrap();

    let logger = Logger::new(path_str, Level::Info).unwrap();
    logger.log(&Record::builder().level(Level::Info).args(format_args!("loaded shapes")).build());
    logger.log(&Record::builder().level(Level::Debug).args(format_args!("too verbose")).build());

    let contents = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert!(contents.contains("[INFO] loaded shapes"));
    assert!(!contents.contains("too verbose"));
}
