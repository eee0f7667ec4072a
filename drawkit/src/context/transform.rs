//! The current transformation matrix.

use super::Context;
use crate::matrix::Matrix;

impl Context {
    /// Translate user space. The translation applies after the existing
    /// transform.
    pub fn translate(&self, tx: f64, ty: f64) {
        self.write(|ctx| ctx.translate(tx, ty));
    }

    /// Scale user space. A zero factor enters `InvalidMatrix`.
    pub fn scale(&self, sx: f64, sy: f64) {
        self.write(|ctx| ctx.scale(sx, sy));
    }

    /// Rotate user space by `angle` radians.
    pub fn rotate(&self, angle: f64) {
        self.write(|ctx| ctx.rotate(angle));
    }

    /// Compose `matrix` onto the CTM, applied after the existing transform.
    pub fn transform(&self, matrix: &Matrix) {
        self.write(|ctx| ctx.transform(matrix.raw()));
    }

    /// Replace the CTM. Non-invertible matrices enter `InvalidMatrix`.
    pub fn set_matrix(&self, matrix: &Matrix) {
        self.write(|ctx| ctx.set_matrix(matrix.raw()));
    }

    pub fn identity_matrix(&self) {
        self.write(|ctx| ctx.identity_matrix());
    }

    /// A copy of the CTM.
    pub fn matrix(&self) -> Matrix {
        self.read(Matrix::identity(), |ctx| ctx.matrix().into())
    }

    pub fn user_to_device(&self, x: f64, y: f64) -> (f64, f64) {
        self.read((x, y), |ctx| ctx.user_to_device(x, y))
    }

    pub fn user_to_device_distance(&self, dx: f64, dy: f64) -> (f64, f64) {
        self.read((dx, dy), |ctx| ctx.user_to_device_distance(dx, dy))
    }

    pub fn device_to_user(&self, x: f64, y: f64) -> (f64, f64) {
        self.read((x, y), |ctx| ctx.device_to_user(x, y))
    }

    pub fn device_to_user_distance(&self, dx: f64, dy: f64) -> (f64, f64) {
        self.read((dx, dy), |ctx| ctx.device_to_user_distance(dx, dy))
    }
}

#[cfg(test)]
mod tests {
    use crate::context::tests::new_context;
    use crate::error::Status;
    use crate::matrix::Matrix;

    #[test]
    fn test_translate_then_scale() {
        let (_surface, ctx) = new_context(10, 10);
        ctx.translate(10.0, 20.0);
        ctx.scale(2.0, 3.0);
        assert_eq!(ctx.user_to_device(1.0, 1.0), (22.0, 63.0));
    }

    #[test]
    fn test_matrix_is_a_copy() {
        let (_surface, ctx) = new_context(10, 10);
        let m = ctx.matrix().translate(5.0, 5.0);
        assert_eq!(m, Matrix::translation(5.0, 5.0));
        assert_eq!(ctx.matrix(), Matrix::identity());
    }

    #[test]
    fn test_set_matrix_and_transform() {
        let (_surface, ctx) = new_context(10, 10);
        ctx.set_matrix(&Matrix::scaling(2.0, 2.0));
        ctx.transform(&Matrix::translation(1.0, 0.0));
        assert_eq!(ctx.user_to_device(0.0, 0.0), (1.0, 0.0));
        assert_eq!(ctx.user_to_device(1.0, 1.0), (3.0, 2.0));
        ctx.identity_matrix();
        assert_eq!(ctx.matrix(), Matrix::identity());
    }

    #[test]
    fn test_singular_scale_is_error() {
        let (_surface, ctx) = new_context(10, 10);
        ctx.translate(3.0, 4.0);
        ctx.scale(0.0, 1.0);
        assert_eq!(ctx.status(), Status::InvalidMatrix);
        assert_eq!(ctx.matrix(), Matrix::translation(3.0, 4.0));
    }

    #[test]
    fn test_device_round_trip() {
        let (_surface, ctx) = new_context(10, 10);
        ctx.rotate(0.3);
        ctx.translate(2.0, -7.0);
        ctx.scale(1.5, 0.5);
        let (dx, dy) = ctx.user_to_device(4.0, 9.0);
        let (ux, uy) = ctx.device_to_user(dx, dy);
        assert!((ux - 4.0).abs() < 1e-9);
        assert!((uy - 9.0).abs() < 1e-9);

        let (ddx, ddy) = ctx.user_to_device_distance(1.0, 0.0);
        let (udx, udy) = ctx.device_to_user_distance(ddx, ddy);
        assert!((udx - 1.0).abs() < 1e-9);
        assert!(udy.abs() < 1e-9);
    }
}
