//! The affine transform value type.

use crate::error::{Result, Status};
use drawkit_engine::RawMatrix;

/// A 2D affine transformation mapping `(x, y)` to
/// `(xx·x + xy·y + x0, yx·x + yy·y + y0)`.
///
/// `Matrix` is a plain value: every query that returns one hands out an
/// independent copy.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Matrix(RawMatrix);

impl Matrix {
    pub fn new(xx: f64, yx: f64, xy: f64, yy: f64, x0: f64, y0: f64) -> Self {
        Matrix(RawMatrix::new(xx, yx, xy, yy, x0, y0))
    }

    pub fn identity() -> Self {
        Matrix(RawMatrix::identity())
    }

    pub fn translation(tx: f64, ty: f64) -> Self {
        Matrix(RawMatrix::translation(tx, ty))
    }

    pub fn scaling(sx: f64, sy: f64) -> Self {
        Matrix(RawMatrix::scaling(sx, sy))
    }

    pub fn rotation(radians: f64) -> Self {
        Matrix(RawMatrix::rotation(radians))
    }

    pub fn xx(&self) -> f64 {
        self.0.a
    }

    pub fn yx(&self) -> f64 {
        self.0.b
    }

    pub fn xy(&self) -> f64 {
        self.0.c
    }

    pub fn yy(&self) -> f64 {
        self.0.d
    }

    pub fn x0(&self) -> f64 {
        self.0.e
    }

    pub fn y0(&self) -> f64 {
        self.0.f
    }

    /// The six coefficients as `[xx, yx, xy, yy, x0, y0]`.
    pub fn to_array(&self) -> [f64; 6] {
        [self.0.a, self.0.b, self.0.c, self.0.d, self.0.e, self.0.f]
    }

    /// Compose: the result applies `other` first, then `self`.
    pub fn multiply(&self, other: &Matrix) -> Matrix {
        Matrix(self.0.multiply(&other.0))
    }

    /// This transform followed by a translation.
    pub fn translate(&self, tx: f64, ty: f64) -> Matrix {
        Matrix::translation(tx, ty).multiply(self)
    }

    /// This transform followed by a scale.
    pub fn scale(&self, sx: f64, sy: f64) -> Matrix {
        Matrix::scaling(sx, sy).multiply(self)
    }

    /// This transform followed by a rotation.
    pub fn rotate(&self, radians: f64) -> Matrix {
        Matrix::rotation(radians).multiply(self)
    }

    /// The inverse transform; singular or non-finite matrices fail with
    /// `InvalidMatrix`.
    pub fn invert(&self) -> Result<Matrix> {
        self.0
            .invert()
            .map(Matrix)
            .ok_or(Status::InvalidMatrix.into())
    }

    pub fn is_invertible(&self) -> bool {
        self.0.is_invertible()
    }

    pub fn transform_point(&self, x: f64, y: f64) -> (f64, f64) {
        self.0.transform_point(x, y)
    }

    /// Transform a distance vector; translation does not apply.
    pub fn transform_distance(&self, dx: f64, dy: f64) -> (f64, f64) {
        self.0.transform_distance(dx, dy)
    }

    pub(crate) fn raw(&self) -> &RawMatrix {
        &self.0
    }
}

impl From<RawMatrix> for Matrix {
    fn from(raw: RawMatrix) -> Self {
        Matrix(raw)
    }
}

impl From<Matrix> for RawMatrix {
    fn from(matrix: Matrix) -> Self {
        matrix.0
    }
}
