use crate::error::FrameError;

/// A square `dims × dims` matrix stored row-major.
///
/// Used as the linear part of a [`CoordinateFrame`](crate::CoordinateFrame). Nothing
/// here requires the matrix to be orthogonal; [`Basis::is_orthogonal`] lets callers
/// check when they care.
#[derive(Debug, Clone, PartialEq)]
pub struct Basis {
    dims: usize,
    data: Vec<f64>,
}

impl Basis {
    pub fn identity(dims: usize) -> Self {
        let mut data = vec![0.0; dims * dims];
        for i in 0..dims {
            data[i * dims + i] = 1.0;
        }
        Self { dims, data }
    }

    /// Build from a row-major buffer of `dims * dims` entries.
    pub fn from_row_major(dims: usize, data: Vec<f64>) -> Result<Self, FrameError> {
        let len = dims.checked_mul(dims).ok_or_else(|| {
            FrameError::InvalidArgument(format!("{dims} dimensions overflow the entry count"))
        })?;
        FrameError::check_dims(len, data.len())?;
        Ok(Self { dims, data })
    }

    /// Build from a list of rows. Every row must be as long as the row count.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, FrameError> {
        let dims = rows.len();
        let mut data = Vec::with_capacity(dims * dims);
        for row in rows {
            FrameError::check_dims(dims, row.len())?;
            data.extend_from_slice(row);
        }
        Ok(Self { dims, data })
    }

    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Entry at `(row, col)`. Panics when either index is out of range.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.dims && col < self.dims, "basis index out of range");
        self.data[row * self.dims + col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.dims + col] = value;
    }

    /// Row `row` as a slice.
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.dims..(row + 1) * self.dims]
    }

    /// Matrix product `self · other`.
    pub fn mul(&self, other: &Basis) -> Result<Basis, FrameError> {
        FrameError::check_dims(self.dims, other.dims)?;
        let n = self.dims;
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for k in 0..n {
                let a = self.data[i * n + k];
                for j in 0..n {
                    data[i * n + j] += a * other.data[k * n + j];
                }
            }
        }
        Ok(Basis { dims: n, data })
    }

    /// Matrix-vector product `self · v`.
    pub fn mul_vec(&self, v: &[f64]) -> Result<Vec<f64>, FrameError> {
        FrameError::check_dims(self.dims, v.len())?;
        Ok((0..self.dims)
            .map(|i| self.row(i).iter().zip(v).map(|(a, b)| a * b).sum())
            .collect())
    }

    pub fn transpose(&self) -> Basis {
        let n = self.dims;
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in 0..n {
                data[j * n + i] = self.data[i * n + j];
            }
        }
        Basis { dims: n, data }
    }

    /// Largest absolute entry of `selfᵀ · self − I`. Zero for an exact rotation or
    /// reflection.
    pub fn orthogonality_error(&self) -> f64 {
        let n = self.dims;
        let mut worst: f64 = 0.0;
        for i in 0..n {
            for j in 0..n {
                // (Bᵀ·B)[i][j] is the dot product of columns i and j.
                let dot: f64 = (0..n)
                    .map(|k| self.data[k * n + i] * self.data[k * n + j])
                    .sum();
                let expected = if i == j { 1.0 } else { 0.0 };
                worst = worst.max((dot - expected).abs());
            }
        }
        worst
    }

    pub fn is_orthogonal(&self, tolerance: f64) -> bool {
        self.orthogonality_error() <= tolerance
    }

    /// Entry-wise comparison within `tolerance`. Bases of different sizes are never equal.
    pub fn approx_eq(&self, other: &Basis, tolerance: f64) -> bool {
        self.dims == other.dims
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_orthogonal() {
        let b = Basis::identity(4);
        assert_eq!(b.orthogonality_error(), 0.0);
        assert_eq!(b.get(2, 2), 1.0);
        assert_eq!(b.get(2, 3), 0.0);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = Basis::from_rows(&[vec![1.0, 0.0], vec![0.0]]).unwrap_err();
        assert_eq!(
            err,
            FrameError::DimensionMismatch {
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_mul_and_transpose() {
        let a = Basis::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Basis::from_rows(&[vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
        let ab = a.mul(&b).unwrap();
        assert_eq!(ab.row(0), &[2.0, 1.0]);
        assert_eq!(ab.row(1), &[4.0, 3.0]);

        let t = a.transpose();
        assert_eq!(t.row(0), &[1.0, 3.0]);
        assert_eq!(t.row(1), &[2.0, 4.0]);
    }

    #[test]
    fn test_from_row_major() {
        let b = Basis::from_row_major(2, vec![0.0, -1.0, 1.0, 0.0]).unwrap();
        assert_eq!(b.row(1), &[1.0, 0.0]);
        assert!(b.is_orthogonal(1e-12));

        assert_eq!(
            Basis::from_row_major(2, vec![1.0, 0.0, 0.0]).unwrap_err(),
            FrameError::DimensionMismatch {
                expected: 4,
                found: 3
            }
        );
    }

    #[test]
    fn test_from_row_major_rejects_overflowing_dims() {
        let dims = (usize::MAX >> (usize::BITS / 2)) + 1;
        assert!(matches!(
            Basis::from_row_major(dims, Vec::new()),
            Err(FrameError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_mul_propagates_non_finite_entries() {
        let inf = Basis::from_rows(&[vec![f64::INFINITY, 0.0], vec![0.0, 1.0]]).unwrap();
        let product = Basis::identity(2).mul(&inf).unwrap();
        // The 0 · inf term makes the off-diagonal entry NaN.
        assert!(product.get(0, 0).is_infinite());
        assert!(product.get(1, 0).is_nan());
        assert_eq!(product.get(1, 1), 1.0);
    }

    #[test]
    fn test_mul_vec() {
        let a = Basis::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(a.mul_vec(&[1.0, 1.0]).unwrap(), vec![3.0, 7.0]);
        assert!(a.mul_vec(&[1.0, 1.0, 1.0]).is_err());
    }

    #[test]
    fn test_shear_is_not_orthogonal() {
        let shear = Basis::from_rows(&[vec![1.0, 0.5], vec![0.0, 1.0]]).unwrap();
        assert!(!shear.is_orthogonal(1e-9));
        assert!((shear.orthogonality_error() - 0.5).abs() < 1e-12);
    }
}
