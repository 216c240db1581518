//! Matrix and vector integration tests

mod common;

use common::{assert_allclose_f64, assert_matrix_close, create_cpu_client, random_matrix, seeded_rng};
use numkern::prelude::*;

#[test]
fn test_matmul_known_values() {
    let client = create_cpu_client();

    // [[1, 2], [3, 4]] @ [[5, 6], [7, 8]] = [[19, 22], [43, 50]]
    let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    let b = Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]]).unwrap();
    let c = client.matmul(&a, &b).unwrap();
    assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
}

#[test]
fn test_matmul_rectangular() {
    let client = create_cpu_client();
    let a = Matrix::from_rows(&[[1.0, 2.0, 3.0]]).unwrap();
    let b = Matrix::column_vector(&[4.0, 5.0, 6.0]);

    let c = client.matmul(&a, &b).unwrap();
    assert_eq!(c.shape(), [1, 1]);
    assert_eq!(c[(0, 0)], 32.0);

    let outer = client.matmul(&b, &a).unwrap();
    assert_eq!(outer.shape(), [3, 3]);
    assert_eq!(outer[(2, 1)], 12.0);
}

#[test]
fn test_matmul_identity_and_mismatch() {
    let client = create_cpu_client();
    let mut rng = seeded_rng(2);
    let a = random_matrix(&mut rng, 4, 3);

    assert_eq!(client.matmul(&a, &Matrix::identity(3)).unwrap(), a);
    assert_eq!(client.matmul(&Matrix::identity(4), &a).unwrap(), a);
    assert!(matches!(
        client.matmul(&a, &a),
        Err(Error::ShapeMismatch { .. })
    ));
}

#[test]
fn test_matmul_parallel_matches_serial() {
    let mut rng = seeded_rng(19);
    let a = random_matrix(&mut rng, 70, 40);
    let b = random_matrix(&mut rng, 40, 80);

    let serial = CpuClient::with_config(KernelConfig::SERIAL);
    let parallel = CpuClient::with_config(KernelConfig::default().with_parallel_threshold(1));

    let expected = serial.matmul(&a, &b).unwrap();
    let got = parallel.matmul(&a, &b).unwrap();
    assert_matrix_close(&got, &expected, 1e-12, "parallel matmul");
}

#[test]
fn test_add_and_scalar_mul() {
    let client = create_cpu_client();
    let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    let b = Matrix::from_rows(&[[0.5, -2.0], [1.0, 0.0]]).unwrap();

    assert_eq!(client.add(&a, &b).unwrap().as_slice(), &[1.5, 0.0, 4.0, 4.0]);
    assert_eq!(client.scalar_mul(&a, -2.0).as_slice(), &[-2.0, -4.0, -6.0, -8.0]);
    assert!(client.add(&a, &Matrix::zeros(2, 3)).is_err());
}

#[test]
fn test_transpose() {
    let client = create_cpu_client();
    let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();

    let t = client.transpose(&a);
    assert_eq!(t.shape(), [3, 2]);
    assert_eq!(t.to_rows(), vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]);
    assert_eq!(client.transpose(&t), a);
}

#[test]
fn test_dot_and_magnitude() {
    let client = create_cpu_client();

    assert_eq!(client.dot(&[1.0, 2.0, 3.0], &[4.0, -5.0, 6.0]).unwrap(), 12.0);
    assert!(matches!(
        client.dot(&[1.0, 2.0], &[1.0]),
        Err(Error::ShapeMismatch { .. })
    ));
    assert_eq!(client.magnitude(&[3.0, 4.0]), 5.0);
    assert_eq!(client.magnitude(&[]), 0.0);
}

#[test]
fn test_normalize() {
    let client = create_cpu_client();

    let unit = client.normalize(&[3.0, 4.0]);
    assert_allclose_f64(&unit, &[0.6, 0.8], 0.0, 1e-12, "normalize");
    assert!((client.magnitude(&unit) - 1.0).abs() < 1e-12);

    // The zero vector has no direction and comes back unchanged
    assert_eq!(client.normalize(&[0.0, 0.0, 0.0]), vec![0.0, 0.0, 0.0]);
}
