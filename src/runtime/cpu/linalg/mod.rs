//! CPU implementation of linear algebra algorithms
//!
//! This module implements the [`LinearAlgebraAlgorithms`] trait for CPU.
//! Each algorithm follows the contract documented on the trait.

mod decompositions;
mod matrix_ops;
mod solvers;


use super::CpuClient;
use crate::algorithm::linalg::{LinearAlgebraAlgorithms, LuDecomposition};
use crate::error::Result;
use crate::matrix::Matrix;

impl LinearAlgebraAlgorithms for CpuClient {
    fn inverse(&self, a: &Matrix) -> Result<Matrix> {
        matrix_ops::inverse_impl(self, a)
    }

    fn det(&self, a: &Matrix) -> Result<f64> {
        matrix_ops::det_impl(a)
    }

    fn lu_decompose(&self, a: &Matrix) -> Result<LuDecomposition> {
        decompositions::lu_decompose_impl(self, a)
    }

    fn solve(&self, a: &Matrix, b: &[f64]) -> Result<Vec<f64>> {
        solvers::solve_impl(self, a, b)
    }

    fn trace(&self, a: &Matrix) -> Result<f64> {
        matrix_ops::trace_impl(a)
    }
}
