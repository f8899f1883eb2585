//! Dense matrices and the pivoted rotation primitive.

use crate::error::DrawError;
use crate::geometry::coord::{Coordinate, to_pixel};

/// A dense row-major matrix of `f64` values.
///
/// Only 2x2 rotations against 2x1 column vectors are exercised by the shape
/// transforms, but multiplication is implemented for arbitrary compatible
/// dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Builds a matrix from rows of values.
    ///
    /// Fails with [`DrawError::IncompatibleDimensions`] when the input is
    /// empty or the rows have differing lengths.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, DrawError> {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, Vec::len);
        if row_count == 0 || col_count == 0 || rows.iter().any(|row| row.len() != col_count) {
            return Err(DrawError::IncompatibleDimensions {
                left_rows: row_count,
                left_cols: col_count,
                right_rows: 0,
                right_cols: 0,
            });
        }
        Ok(Self {
            rows: row_count,
            cols: col_count,
            data: rows.into_iter().flatten().collect(),
        })
    }

    /// An all-zero matrix of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// The `n`x`n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::zeros(n, n);
        for i in 0..n {
            matrix.data[i * n + i] = 1.0;
        }
        matrix
    }

    /// The 2x2 counter-clockwise rotation matrix for `theta` radians:
    /// `[[cos, -sin], [sin, cos]]`.
    pub fn rotation(theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self {
            rows: 2,
            cols: 2,
            data: vec![cos, -sin, sin, cos],
        }
    }

    /// A 2x1 column vector.
    pub fn column(x: f64, y: f64) -> Self {
        Self {
            rows: 2,
            cols: 1,
            data: vec![x, y],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The value at row `i`, column `j`.
    ///
    /// # Panics
    /// Panics when the indices are out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.rows && j < self.cols, "matrix index out of bounds");
        self.data[i * self.cols + j]
    }

    /// Multiplies `self * other`.
    ///
    /// `result[i][j] = sum over k of self[i][k] * other[k][j]`. Fails with
    /// [`DrawError::IncompatibleDimensions`] when `self.cols() !=
    /// other.rows()`.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, DrawError> {
        if self.cols != other.rows {
            return Err(DrawError::IncompatibleDimensions {
                left_rows: self.rows,
                left_cols: self.cols,
                right_rows: other.rows,
                right_cols: other.cols,
            });
        }

        let mut result = Matrix::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.get(i, k) * other.get(k, j);
                }
                result.data[i * result.cols + j] = sum;
            }
        }
        Ok(result)
    }
}

/// Rotates `point` about the pivot `(pivot_x, pivot_y)`.
///
/// The point is translated so the pivot sits at the origin, multiplied by
/// `rotation` as a column vector, translated back, and truncated to pixel
/// coordinates.
pub fn rotate_about(
    point: Coordinate,
    pivot_x: f64,
    pivot_y: f64,
    rotation: &Matrix,
) -> Result<Coordinate, DrawError> {
    let translated = Matrix::column(point.x as f64 - pivot_x, point.y as f64 - pivot_y);
    let rotated = rotation.multiply(&translated)?;
    Ok(Coordinate::new(
        to_pixel(rotated.get(0, 0) + pivot_x),
        to_pixel(rotated.get(1, 0) + pivot_y),
    ))
}
