use crate::error::{GeomError, Result};
use crate::scalar::{lerp, Numeric};

use super::bezier::{bezier_eval, BezierSample};
use super::{axis_fraction, bracket};

/// Largest permitted 1D length.
pub const MAX_LEN_1D: usize = 1_000_000;

fn check_len(len: usize) -> Result<()> {
    if len == 0 || len > MAX_LEN_1D {
        return Err(GeomError::InvalidSize {
            size: len,
            max: MAX_LEN_1D,
        });
    }
    Ok(())
}

/// Dense 1D numeric series.
///
/// Invariants:
/// - Constructed with `1 <= len <= MAX_LEN_1D`; `push`/`resize` keep the upper bound.
/// - `remove_at` may drain it to empty; aggregates then report `InsufficientPoints`.
#[derive(Clone, Debug, PartialEq)]
pub struct NumericArray1D<T> {
    data: Vec<T>,
}

impl<T: Numeric> NumericArray1D<T> {
    /// Zero-filled array of `len` samples.
    pub fn new(len: usize) -> Result<Self> {
        check_len(len)?;
        Ok(Self {
            data: vec![T::zero(); len],
        })
    }

    pub fn from_vec(values: Vec<T>) -> Result<Self> {
        check_len(values.len())?;
        Ok(Self { data: values })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Raw samples (the persistence contract: length + values).
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.data
    }

    pub fn get(&self, index: usize) -> Result<T> {
        self.data
            .get(index)
            .copied()
            .ok_or(GeomError::IndexOutOfBounds {
                index,
                len: self.data.len(),
            })
    }

    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.data.len();
        let slot = self
            .data
            .get_mut(index)
            .ok_or(GeomError::IndexOutOfBounds { index, len })?;
        *slot = value;
        Ok(())
    }

    /// Append a sample.
    pub fn push(&mut self, value: T) -> Result<()> {
        check_len(self.data.len() + 1)?;
        self.data.push(value);
        Ok(())
    }

    /// Remove and return the sample at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        if index >= self.data.len() {
            return Err(GeomError::IndexOutOfBounds {
                index,
                len: self.data.len(),
            });
        }
        Ok(self.data.remove(index))
    }

    /// Truncate, or grow with zeros.
    pub fn resize(&mut self, len: usize) -> Result<()> {
        check_len(len)?;
        self.data.resize(len, T::zero());
        Ok(())
    }

    fn non_empty(&self) -> Result<()> {
        if self.data.is_empty() {
            return Err(GeomError::InsufficientPoints {
                required: 1,
                actual: 0,
            });
        }
        Ok(())
    }

    pub fn min(&self) -> Result<T> {
        self.non_empty()?;
        Ok(self
            .data
            .iter()
            .copied()
            .fold(self.data[0], |m, v| if v < m { v } else { m }))
    }

    pub fn max(&self) -> Result<T> {
        self.non_empty()?;
        Ok(self
            .data
            .iter()
            .copied()
            .fold(self.data[0], |m, v| if v > m { v } else { m }))
    }

    pub fn sum(&self) -> T {
        self.data.iter().copied().fold(T::zero(), |acc, v| acc + v)
    }

    /// Mean in `f64` (integer series do not truncate).
    pub fn average(&self) -> Result<f64> {
        self.non_empty()?;
        let total: f64 = self.data.iter().map(|v| v.as_f64()).sum();
        Ok(total / self.data.len() as f64)
    }

    #[inline]
    pub fn index_to_fraction(&self, index: usize) -> f64 {
        axis_fraction(index, self.data.len())
    }

    #[inline]
    pub fn fraction_to_index(&self, fraction: f64) -> f64 {
        fraction * self.data.len().saturating_sub(1) as f64
    }

    /// Linear interpolation between the two samples bracketing `fraction`.
    ///
    /// Fractions outside `[0, 1]` are clamped.
    pub fn interpolate_at_fraction(&self, fraction: f64) -> Result<T> {
        self.non_empty()?;
        let (i0, i1, t) = bracket(fraction, self.data.len());
        Ok(lerp(self.data[i0], self.data[i1], t))
    }

    /// Resample to `len` evenly spaced samples.
    pub fn resampled(&self, len: usize) -> Result<Self> {
        check_len(len)?;
        self.non_empty()?;
        let data = (0..len)
            .map(|i| {
                let (i0, i1, t) = bracket(axis_fraction(i, len), self.data.len());
                lerp(self.data[i0], self.data[i1], t)
            })
            .collect();
        tracing::trace!(from = self.data.len(), to = len, "resampled 1d series");
        Ok(Self { data })
    }

    fn zip_with(&self, other: &Self, f: impl Fn(T, T) -> T) -> Result<Self> {
        if self.data.len() != other.data.len() {
            return Err(GeomError::LengthMismatch {
                left: self.data.len(),
                right: other.data.len(),
            });
        }
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        })
    }

    /// Element-wise sum; lengths must match.
    pub fn add_elementwise(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Element-wise difference; lengths must match.
    pub fn sub_elementwise(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Multiply every sample by `factor` (evaluated in `f64`).
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            data: self
                .data
                .iter()
                .map(|v| T::cast_from_f64(v.as_f64() * factor))
                .collect(),
        }
    }

    /// Treat the samples as Bézier control values (3, 4 or 5 of them).
    pub fn bezier(&self, t: f64) -> Result<BezierSample> {
        bezier_eval(&self.data, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_limits() {
        assert!(NumericArray1D::<f64>::new(0).is_err());
        assert!(NumericArray1D::<f64>::new(MAX_LEN_1D + 1).is_err());
        let a = NumericArray1D::<i32>::new(3).unwrap();
        assert_eq!(a.values(), &[0, 0, 0]);
    }

    #[test]
    fn append_remove_resize() {
        let mut a = NumericArray1D::from_vec(vec![1.0, 2.0, 3.0]).unwrap();
        a.push(4.0).unwrap();
        assert_eq!(a.len(), 4);
        assert_eq!(a.remove_at(0).unwrap(), 1.0);
        assert!(a.remove_at(10).is_err());
        a.resize(5).unwrap();
        assert_eq!(a.values(), &[2.0, 3.0, 4.0, 0.0, 0.0]);
        a.resize(2).unwrap();
        assert_eq!(a.values(), &[2.0, 3.0]);
        assert!(a.set(2, 1.0).is_err());
        assert!(matches!(a.get(7), Err(GeomError::IndexOutOfBounds { index: 7, len: 2 })));
    }

    #[test]
    fn aggregates() {
        let a = NumericArray1D::from_vec(vec![3, -1, 7, 2]).unwrap();
        assert_eq!(a.min().unwrap(), -1);
        assert_eq!(a.max().unwrap(), 7);
        assert_eq!(a.sum(), 11);
        assert!((a.average().unwrap() - 2.75).abs() < 1e-12);

        let mut one = NumericArray1D::from_vec(vec![5u8]).unwrap();
        one.remove_at(0).unwrap();
        assert!(one.min().is_err());
        assert!(one.interpolate_at_fraction(0.5).is_err());
    }

    #[test]
    fn interpolation_brackets_samples() {
        let a = NumericArray1D::from_vec(vec![0.0_f64, 10.0, 20.0]).unwrap();
        assert_eq!(a.interpolate_at_fraction(0.0).unwrap(), 0.0);
        assert_eq!(a.interpolate_at_fraction(1.0).unwrap(), 20.0);
        assert!((a.interpolate_at_fraction(0.25).unwrap() - 5.0).abs() < 1e-12);
        assert!((a.interpolate_at_fraction(0.75).unwrap() - 15.0).abs() < 1e-12);
        // clamped
        assert_eq!(a.interpolate_at_fraction(-3.0).unwrap(), 0.0);
        assert_eq!(a.interpolate_at_fraction(3.0).unwrap(), 20.0);
        assert!((a.index_to_fraction(1) - 0.5).abs() < 1e-12);
        assert!((a.fraction_to_index(0.5) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn resample_keeps_endpoints() {
        let a = NumericArray1D::from_vec(vec![1.0, 3.0]).unwrap();
        let r = a.resampled(5).unwrap();
        assert_eq!(r.values(), &[1.0, 1.5, 2.0, 2.5, 3.0]);
    }

    #[test]
    fn elementwise_requires_matching_lengths() {
        let a = NumericArray1D::from_vec(vec![1, 2, 3]).unwrap();
        let b = NumericArray1D::from_vec(vec![10, 20, 30]).unwrap();
        assert_eq!(a.add_elementwise(&b).unwrap().values(), &[11, 22, 33]);
        assert_eq!(b.sub_elementwise(&a).unwrap().values(), &[9, 18, 27]);
        let c = NumericArray1D::from_vec(vec![1, 2]).unwrap();
        assert!(matches!(
            a.add_elementwise(&c),
            Err(GeomError::LengthMismatch { left: 3, right: 2 })
        ));
        assert_eq!(a.scaled(2.0).values(), &[2, 4, 6]);
    }
}
