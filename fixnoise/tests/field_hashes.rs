//! Noise field regression tests.
//!
//! Samples fixed grids of the 2D and 3D fields and compares an MD5 of the raw
//! little-endian Q16.16 values against recorded hashes, plus a handful of exact
//! point values. Any change to the tables, gradients or blending shows up here.

use std::fmt::Write;
use std::thread;

use fixnoise::{Fixed, noise2d, noise3d};
use serde::Deserialize;

#[derive(Deserialize)]
struct FieldHashesJson {
    fields: Vec<FieldHash>,
    points: Vec<PointValue>,
}

/// A `width` x `height` grid starting at `origin`, spaced `step` apart on x and y.
#[derive(Deserialize)]
struct FieldHash {
    name: String,
    dims: u8,
    origin: [Fixed; 3],
    step: Fixed,
    width: i32,
    height: i32,
    hash: String,
}

#[derive(Deserialize)]
struct PointValue {
    x: Fixed,
    y: Fixed,
    z: Fixed,
    noise2d: Fixed,
    noise3d: Fixed,
}

fn load_expected() -> FieldHashesJson {
    let json_str = include_str!("../test_assets/field_hashes.json");
    serde_json::from_str(json_str).expect("Failed to parse field_hashes.json")
}

/// Hash a grid row by row (y outer, x inner); 3D grids are a z slice at `origin[2]`.
fn field_hash(field: &FieldHash) -> String {
    let [ox, oy, oz] = field.origin;
    let mut ctx = md5::Context::new();
    for j in 0..field.height {
        for i in 0..field.width {
            let x = ox + i * field.step;
            let y = oy + j * field.step;
            let value = match field.dims {
                2 => noise2d(x, y),
                3 => noise3d(x, y, oz),
                other => panic!("{}: unsupported dimension count {other}", field.name),
            };
            ctx.consume(value.to_le_bytes());
        }
    }
    format!("{:x}", ctx.finalize())
}

#[test]
fn field_hashes_match_recorded() {
    let expected = load_expected();
    let mut mismatches = String::new();

    for field in &expected.fields {
        let actual = field_hash(field);
        if actual != field.hash {
            let _ = writeln!(
                mismatches,
                "  {}: expected {} got {actual}",
                field.name, field.hash
            );
        }
    }

    assert!(mismatches.is_empty(), "field hashes MISMATCHED:\n{mismatches}");
}

#[test]
fn point_values_match_recorded() {
    let expected = load_expected();

    for point in &expected.points {
        assert_eq!(
            noise2d(point.x, point.y),
            point.noise2d,
            "noise2d({}, {})",
            point.x,
            point.y
        );
        assert_eq!(
            noise3d(point.x, point.y, point.z),
            point.noise3d,
            "noise3d({}, {}, {})",
            point.x,
            point.y,
            point.z
        );
    }
}

#[test]
fn evaluation_is_identical_across_threads() {
    let expected = load_expected();
    let field = &expected.fields[0];
    let reference = field_hash(field);

    let hashes: Vec<String> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| field_hash(field))).collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("sampling thread panicked"))
            .collect()
    });

    assert!(hashes.iter().all(|hash| *hash == reference));
}
