//! Image and series integration tests
//!
//! Tests for nearest-neighbor rotation, histogram equalization and the
//! trailing rolling mean.

mod common;

use common::{create_cpu_client, random_matrix, seeded_rng};
use numkern::prelude::*;

// ============================================================================
// Rotation
// ============================================================================

#[test]
fn test_rotate_zero_degrees_is_identity() {
    let client = create_cpu_client();
    let mut rng = seeded_rng(1);
    let image = random_matrix(&mut rng, 5, 7);
    assert_eq!(client.rotate(&image, 0.0), image);
}

#[test]
fn test_rotate_square_quarter_turns() {
    let client = create_cpu_client();
    let image = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]).unwrap();

    let quarter = client.rotate(&image, 90.0);
    assert_eq!(
        quarter.to_rows(),
        vec![vec![7.0, 4.0, 1.0], vec![8.0, 5.0, 2.0], vec![9.0, 6.0, 3.0]]
    );

    let half = client.rotate(&image, 180.0);
    assert_eq!(
        half.to_rows(),
        vec![vec![9.0, 8.0, 7.0], vec![6.0, 5.0, 4.0], vec![3.0, 2.0, 1.0]]
    );

    let full = client.rotate(&client.rotate(&quarter, 90.0), 180.0);
    assert_eq!(full, image);
}

#[test]
fn test_rotate_keeps_shape_and_fills_outside_with_zero() {
    let client = create_cpu_client();
    let image = Matrix::from_fn(2, 6, |_, _| 1.0);

    let rotated = client.rotate(&image, 90.0);
    assert_eq!(rotated.shape(), [2, 6]);
    // A wide strip rotated a quarter turn cannot cover its own far columns
    assert_eq!(rotated[(0, 0)], 0.0);
    assert_eq!(rotated[(1, 5)], 0.0);
}

#[test]
fn test_rotate_empty_image() {
    let client = create_cpu_client();
    assert!(client.rotate(&Matrix::zeros(0, 0), 45.0).is_empty());
}

// ============================================================================
// Histogram Equalization
// ============================================================================

#[test]
fn test_histogram_equalization_known_values() {
    let client = create_cpu_client();

    // cdf: 0 -> 1, 100 -> 3, 200 -> 4; cdf_min = 1, total = 4
    let image = Matrix::from_rows(&[[0.0, 100.0], [100.0, 200.0]]).unwrap();
    let out = client.histogram_equalization(&image);
    assert_eq!(out.as_slice(), &[0.0, 170.0, 170.0, 255.0]);
}

#[test]
fn test_histogram_equalization_in_range() {
    let client = create_cpu_client();
    let image = Matrix::from_fn(16, 16, |i, j| ((i * 37 + j * 11) % 300) as f64 - 20.0);

    let out = client.histogram_equalization(&image);
    assert_eq!(out.shape(), image.shape());
    for &v in out.as_slice() {
        assert!((0.0..=255.0).contains(&v), "{v}");
        assert_eq!(v, v.round());
    }
    assert_eq!(out.as_slice().iter().cloned().fold(f64::MIN, f64::max), 255.0);
}

#[test]
fn test_histogram_equalization_uniform_image() {
    let client = create_cpu_client();
    let image = Matrix::from_fn(3, 3, |_, _| 42.4);
    let out = client.histogram_equalization(&image);
    assert!(out.as_slice().iter().all(|&v| v == 42.0));
}

// ============================================================================
// Rolling Mean
// ============================================================================

#[test]
fn test_rolling_mean_window_three() {
    let client = create_cpu_client();
    let out = client.rolling_mean(&[1.0, 2.0, 3.0, 4.0, 5.0], 3).unwrap();

    assert_eq!(out.len(), 5);
    assert!(out[0].is_nan());
    assert!(out[1].is_nan());
    assert_eq!(&out[2..], &[2.0, 3.0, 4.0]);
}

#[test]
fn test_rolling_mean_edge_windows() {
    let client = create_cpu_client();

    assert_eq!(client.rolling_mean(&[1.0, 5.0], 1).unwrap(), vec![1.0, 5.0]);
    assert!(
        client
            .rolling_mean(&[1.0, 2.0], 4)
            .unwrap()
            .iter()
            .all(|v| v.is_nan())
    );
    assert!(matches!(
        client.rolling_mean(&[1.0], 0),
        Err(Error::InvalidArgument { arg: "window", .. })
    ));
}
