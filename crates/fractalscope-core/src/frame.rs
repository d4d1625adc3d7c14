use std::fmt;

use crate::basis::Basis;
use crate::error::FrameError;

/// Tolerance used by the debug-build orthogonality warning in [`CoordinateFrame::inverse`].
const ORTHOGONALITY_TOLERANCE: f64 = 1e-9;

/// An N-dimensional coordinate frame: a position plus an orientation basis.
///
/// Frames are values. Every operation returns a new frame and leaves its inputs alone.
///
/// The basis is expected to be orthogonal (a rotation or reflection). This is not
/// enforced at construction, since callers may want shear or scale bases for other
/// purposes, but [`inverse`](Self::inverse) and everything built on it is only correct
/// when it holds.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateFrame {
    position: Vec<f64>,
    basis: Basis,
}

impl CoordinateFrame {
    /// Build a frame from an explicit position and basis.
    pub fn new(position: Vec<f64>, basis: Basis) -> Result<Self, FrameError> {
        FrameError::check_dims(position.len(), basis.dims())?;
        Ok(Self { position, basis })
    }

    /// A frame at the origin with no rotation.
    pub fn identity(dims: usize) -> Self {
        Self {
            position: vec![0.0; dims],
            basis: Basis::identity(dims),
        }
    }

    /// A frame at `position` with no rotation.
    pub fn from_position(position: impl Into<Vec<f64>>) -> Self {
        let position = position.into();
        let basis = Basis::identity(position.len());
        Self { position, basis }
    }

    /// A pure rotation by `angle` radians in the plane spanned by `axis_i` and `axis_j`.
    ///
    /// Positive angles rotate `axis_i` towards `axis_j`. Every other axis is left fixed.
    pub fn from_rotation_plane(
        axis_i: usize,
        axis_j: usize,
        angle: f64,
        dims: usize,
    ) -> Result<Self, FrameError> {
        if axis_i == axis_j {
            return Err(FrameError::InvalidArgument(format!(
                "rotation plane needs two distinct axes, got {axis_i} twice"
            )));
        }
        if axis_i >= dims || axis_j >= dims {
            return Err(FrameError::InvalidArgument(format!(
                "rotation axes ({axis_i}, {axis_j}) out of range for {dims} dimensions"
            )));
        }

        let (s, c) = angle.sin_cos();
        let mut basis = Basis::identity(dims);
        basis.set(axis_i, axis_i, c);
        basis.set(axis_i, axis_j, -s);
        basis.set(axis_j, axis_i, s);
        basis.set(axis_j, axis_j, c);

        Ok(Self {
            position: vec![0.0; dims],
            basis,
        })
    }

    pub fn dims(&self) -> usize {
        self.position.len()
    }

    pub fn position(&self) -> &[f64] {
        &self.position
    }

    pub fn basis(&self) -> &Basis {
        &self.basis
    }

    /// `self * other`: apply `self`, then `other` expressed in `self`'s frame.
    pub fn compose(&self, other: &CoordinateFrame) -> Result<CoordinateFrame, FrameError> {
        FrameError::check_dims(self.dims(), other.dims())?;
        let basis = self.basis.mul(&other.basis)?;
        let position = self.apply_to_point(&other.position)?;
        Ok(CoordinateFrame { position, basis })
    }

    /// Map a point from this frame's local space into the embedding space.
    pub fn apply_to_point(&self, point: &[f64]) -> Result<Vec<f64>, FrameError> {
        let rotated = self.basis.mul_vec(point)?;
        Ok(rotated
            .into_iter()
            .zip(&self.position)
            .map(|(r, p)| p + r)
            .collect())
    }

    /// Rotate a direction vector by this frame's basis, ignoring the position.
    pub fn apply_to_vector(&self, vector: &[f64]) -> Result<Vec<f64>, FrameError> {
        self.basis.mul_vec(vector)
    }

    /// The inverse transformation.
    ///
    /// Uses the transpose of the basis, so the result is only a true inverse when the
    /// basis is orthogonal. A non-orthogonal basis yields a silently wrong frame; debug
    /// builds log a warning when that happens.
    pub fn inverse(&self) -> CoordinateFrame {
        if cfg!(debug_assertions) {
            let error = self.basis.orthogonality_error();
            if error > ORTHOGONALITY_TOLERANCE {
                log::warn!(
                    "Inverting a {}-D frame whose basis is not orthogonal (error {:.3e})",
                    self.dims(),
                    error
                );
            }
        }

        let basis = self.basis.transpose();
        let n = self.dims();
        let position = (0..n)
            .map(|i| {
                -basis
                    .row(i)
                    .iter()
                    .zip(&self.position)
                    .map(|(b, p)| b * p)
                    .sum::<f64>()
            })
            .collect();
        CoordinateFrame { position, basis }
    }

    /// Re-express `other` relative to this frame's local coordinate system.
    pub fn to_object_space(&self, other: &CoordinateFrame) -> Result<CoordinateFrame, FrameError> {
        self.inverse().compose(other)
    }

    /// Map a point from the embedding space into this frame's local space.
    pub fn point_to_object_space(&self, point: &[f64]) -> Result<Vec<f64>, FrameError> {
        self.inverse().apply_to_point(point)
    }

    /// Position and basis match entry-wise within `tolerance`.
    pub fn approx_eq(&self, other: &CoordinateFrame, tolerance: f64) -> bool {
        self.dims() == other.dims()
            && self
                .position
                .iter()
                .zip(&other.position)
                .all(|(a, b)| (a - b).abs() <= tolerance)
            && self.basis.approx_eq(&other.basis, tolerance)
    }
}

impl fmt::Display for CoordinateFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CoordinateFrame(dims={}, pos={:?})", self.dims(), self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_rotation_quarter_turn() {
        let r = CoordinateFrame::from_rotation_plane(0, 1, FRAC_PI_2, 2).unwrap();
        let p = r.apply_to_point(&[1.0, 0.0]).unwrap();
        assert!((p[0] - 0.0).abs() < EPS);
        assert!((p[1] - 1.0).abs() < EPS);
    }

    #[test]
    fn test_rotation_leaves_other_axes_fixed() {
        let r = CoordinateFrame::from_rotation_plane(1, 3, 0.7, 4).unwrap();
        let p = r.apply_to_point(&[2.0, 0.0, -5.0, 0.0]).unwrap();
        assert!((p[0] - 2.0).abs() < EPS);
        assert!((p[2] + 5.0).abs() < EPS);
        assert!(r.basis().is_orthogonal(EPS));
    }

    #[test]
    fn test_rotation_plane_rejects_bad_axes() {
        assert!(matches!(
            CoordinateFrame::from_rotation_plane(1, 1, 0.3, 3),
            Err(FrameError::InvalidArgument(_))
        ));
        assert!(matches!(
            CoordinateFrame::from_rotation_plane(0, 3, 0.3, 3),
            Err(FrameError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_from_position_translates() {
        let t = CoordinateFrame::from_position(vec![10.0, 20.0, 30.0]);
        assert_eq!(t.dims(), 3);
        let p = t.apply_to_point(&[1.0, 1.0, 1.0]).unwrap();
        assert_eq!(p, vec![11.0, 21.0, 31.0]);
    }

    #[test]
    fn test_compose_translation_then_rotation() {
        // Move to (1, 0), then turn a quarter: local x now points along world y.
        let a = CoordinateFrame::from_position(vec![1.0, 0.0]);
        let r = CoordinateFrame::from_rotation_plane(0, 1, FRAC_PI_2, 2).unwrap();
        let ar = a.compose(&r).unwrap();
        let p = ar.apply_to_point(&[2.0, 0.0]).unwrap();
        assert!((p[0] - 1.0).abs() < EPS);
        assert!((p[1] - 2.0).abs() < EPS);
    }

    #[test]
    fn test_compose_dimension_mismatch() {
        let a = CoordinateFrame::identity(2);
        let b = CoordinateFrame::identity(3);
        assert_eq!(
            a.compose(&b).unwrap_err(),
            FrameError::DimensionMismatch {
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn test_apply_to_point_dimension_mismatch() {
        let a = CoordinateFrame::identity(3);
        assert!(matches!(
            a.apply_to_point(&[1.0, 2.0]),
            Err(FrameError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_new_rejects_mismatched_basis() {
        let err = CoordinateFrame::new(vec![0.0, 0.0, 0.0], Basis::identity(2)).unwrap_err();
        assert!(matches!(err, FrameError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_to_object_space_of_self_is_identity() {
        let a = CoordinateFrame::from_position(vec![3.0, -1.0, 2.0])
            .compose(&CoordinateFrame::from_rotation_plane(0, 2, 1.1, 3).unwrap())
            .unwrap();
        let rel = a.to_object_space(&a).unwrap();
        assert!(rel.approx_eq(&CoordinateFrame::identity(3), EPS));
    }

    #[test]
    fn test_point_to_object_space_undoes_apply() {
        let a = CoordinateFrame::from_rotation_plane(0, 1, 0.4, 2)
            .unwrap()
            .compose(&CoordinateFrame::from_position(vec![5.0, 7.0]))
            .unwrap();
        let world = a.apply_to_point(&[0.25, -3.0]).unwrap();
        let local = a.point_to_object_space(&world).unwrap();
        assert!((local[0] - 0.25).abs() < EPS);
        assert!((local[1] + 3.0).abs() < EPS);
    }

    #[test]
    fn test_apply_to_vector_ignores_position() {
        let a = CoordinateFrame::from_position(vec![100.0, 100.0]);
        assert_eq!(a.apply_to_vector(&[1.0, 2.0]).unwrap(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_inverse_of_shear_is_not_an_inverse() {
        let shear = Basis::from_rows(&[vec![1.0, 1.0], vec![0.0, 1.0]]).unwrap();
        let a = CoordinateFrame::new(vec![0.0, 0.0], shear).unwrap();
        let product = a.compose(&a.inverse()).unwrap();
        assert!(!product.approx_eq(&CoordinateFrame::identity(2), 1e-3));
    }

    #[test]
    fn test_zero_dimensional_frames_are_trivial() {
        let id = CoordinateFrame::identity(0);
        let empty = CoordinateFrame::from_position(Vec::<f64>::new());
        assert_eq!(id, empty);
        assert_eq!(id.dims(), 0);

        let composed = id.compose(&empty).unwrap();
        assert_eq!(composed.dims(), 0);
        assert!(empty.inverse().approx_eq(&id, EPS));
        assert!(id.to_object_space(&empty).unwrap().approx_eq(&id, EPS));
        assert!(id.apply_to_point(&[]).unwrap().is_empty());
        assert!(matches!(
            id.compose(&CoordinateFrame::identity(1)),
            Err(FrameError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_display() {
        let a = CoordinateFrame::from_position(vec![1.0, 2.0]);
        assert_eq!(a.to_string(), "CoordinateFrame(dims=2, pos=[1.0, 2.0])");
    }
}
