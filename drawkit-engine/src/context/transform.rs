//! Transform operations for RawContext.
//!
//! Every operation composes as `new = op · old`: the existing CTM is applied
//! to a user-space point first and the new operation after it.

use super::RawContext;
use crate::matrix::RawMatrix;
use crate::status;

impl RawContext {
    fn apply_transform(&mut self, op: RawMatrix) {
        if !self.is_ok() {
            return;
        }
        let ctm = op.multiply(&self.state.ctm);
        if !self.state.set_ctm(ctm) {
            self.set_error(status::INVALID_MATRIX);
        }
    }

    /// Translate user space.
    pub fn translate(&mut self, tx: f64, ty: f64) {
        log::debug!(target: "drawkit", "translate {} {}", tx, ty);
        self.apply_transform(RawMatrix::translation(tx, ty));
    }

    /// Scale user space. A zero factor sets `INVALID_MATRIX`.
    pub fn scale(&mut self, sx: f64, sy: f64) {
        log::debug!(target: "drawkit", "scale {} {}", sx, sy);
        self.apply_transform(RawMatrix::scaling(sx, sy));
    }

    /// Rotate user space by `angle` radians.
    pub fn rotate(&mut self, angle: f64) {
        log::debug!(target: "drawkit", "rotate {}", angle);
        self.apply_transform(RawMatrix::rotation(angle));
    }

    /// Compose `matrix` onto the CTM.
    pub fn transform(&mut self, matrix: &RawMatrix) {
        if !self.is_ok() {
            return;
        }
        log::debug!(target: "drawkit", "transform {:?}", matrix);
        if !matrix.is_invertible() {
            self.set_error(status::INVALID_MATRIX);
            return;
        }
        self.apply_transform(*matrix);
    }

    /// Replace the CTM.
    pub fn set_matrix(&mut self, matrix: &RawMatrix) {
        if !self.is_ok() {
            return;
        }
        log::debug!(target: "drawkit", "set_matrix {:?}", matrix);
        if !self.state.set_ctm(*matrix) {
            self.set_error(status::INVALID_MATRIX);
        }
    }

    /// Reset the CTM to identity.
    pub fn identity_matrix(&mut self) {
        self.set_matrix(&RawMatrix::identity());
    }

    /// A copy of the current transformation matrix.
    pub fn matrix(&self) -> RawMatrix {
        self.state.ctm
    }

    pub fn user_to_device(&self, x: f64, y: f64) -> (f64, f64) {
        self.state.ctm.transform_point(x, y)
    }

    pub fn user_to_device_distance(&self, dx: f64, dy: f64) -> (f64, f64) {
        self.state.ctm.transform_distance(dx, dy)
    }

    pub fn device_to_user(&self, x: f64, y: f64) -> (f64, f64) {
        self.state.ctm_inverse.transform_point(x, y)
    }

    pub fn device_to_user_distance(&self, dx: f64, dy: f64) -> (f64, f64) {
        self.state.ctm_inverse.transform_distance(dx, dy)
    }
}
