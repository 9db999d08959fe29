//! Row-major 2D grid of numeric samples.
//!
//! Sizes are bounded by [`MAX_DIM_2D`] per axis. Resizing is bilinear and
//! maps corner samples onto corner samples; the overlapping tile helpers
//! resize once and slice so that neighbouring tiles share their edge rows.

use crate::error::{GeomError, Result};
use crate::scalar::Numeric;

use super::{axis_fraction, bracket};

/// Largest permitted width or height.
pub const MAX_DIM_2D: usize = 10_000;

fn check_dims(width: usize, height: usize) -> Result<()> {
    for size in [width, height] {
        if size == 0 || size > MAX_DIM_2D {
            return Err(GeomError::InvalidSize {
                size,
                max: MAX_DIM_2D,
            });
        }
    }
    Ok(())
}

/// Grid border selector for edge access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Row `y = 0`.
    Top,
    /// Row `y = height - 1`.
    Bottom,
    /// Column `x = 0`.
    Left,
    /// Column `x = width - 1`.
    Right,
}

/// Dense row-major 2D grid.
///
/// Invariants:
/// - `1 <= width, height <= MAX_DIM_2D` and `data.len() == width * height`.
/// - `populated` is false for a freshly allocated grid and flips on the first
///   write (`set`, `fill`, `populate_with`, row/column/edge setters).
#[derive(Clone, Debug, PartialEq)]
pub struct NumericArray2D<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
    populated: bool,
}

impl<T: Numeric> NumericArray2D<T> {
    /// Zero-filled, unpopulated grid.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        check_dims(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![T::zero(); width * height],
            populated: false,
        })
    }

    /// Grid from row-major values; `values.len()` must equal `width * height`.
    pub fn from_vec(width: usize, height: usize, values: Vec<T>) -> Result<Self> {
        check_dims(width, height)?;
        if values.len() != width * height {
            return Err(GeomError::LengthMismatch {
                left: width * height,
                right: values.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data: values,
            populated: true,
        })
    }

    /// Grid from equally long rows (`rows[y][x]`).
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        check_dims(width, height)?;
        let mut data = Vec::with_capacity(width * height);
        for row in rows {
            if row.len() != width {
                return Err(GeomError::LengthMismatch {
                    left: width,
                    right: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Self::from_vec(width, height, data)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }
    #[inline]
    pub fn is_populated(&self) -> bool {
        self.populated
    }
    /// Raw row-major values (the persistence contract: width, height, values).
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.data
    }

    fn index(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.width {
            return Err(GeomError::IndexOutOfBounds {
                index: x,
                len: self.width,
            });
        }
        if y >= self.height {
            return Err(GeomError::IndexOutOfBounds {
                index: y,
                len: self.height,
            });
        }
        Ok(y * self.width + x)
    }

    pub fn get(&self, x: usize, y: usize) -> Result<T> {
        Ok(self.data[self.index(x, y)?])
    }

    pub fn set(&mut self, x: usize, y: usize, value: T) -> Result<()> {
        let i = self.index(x, y)?;
        self.data[i] = value;
        self.populated = true;
        Ok(())
    }

    pub fn fill(&mut self, value: T) {
        self.data.iter_mut().for_each(|v| *v = value);
        self.populated = true;
    }

    /// Fill every cell from `f(x, y)`.
    pub fn populate_with(&mut self, mut f: impl FnMut(usize, usize) -> T) {
        for y in 0..self.height {
            for x in 0..self.width {
                self.data[y * self.width + x] = f(x, y);
            }
        }
        self.populated = true;
    }

    pub fn row(&self, y: usize) -> Result<Vec<T>> {
        self.index(0, y)?;
        let start = y * self.width;
        Ok(self.data[start..start + self.width].to_vec())
    }

    pub fn column(&self, x: usize) -> Result<Vec<T>> {
        self.index(x, 0)?;
        Ok((0..self.height)
            .map(|y| self.data[y * self.width + x])
            .collect())
    }

    pub fn set_row(&mut self, y: usize, values: &[T]) -> Result<()> {
        self.index(0, y)?;
        if values.len() != self.width {
            return Err(GeomError::LengthMismatch {
                left: self.width,
                right: values.len(),
            });
        }
        let start = y * self.width;
        self.data[start..start + self.width].copy_from_slice(values);
        self.populated = true;
        Ok(())
    }

    pub fn set_column(&mut self, x: usize, values: &[T]) -> Result<()> {
        self.index(x, 0)?;
        if values.len() != self.height {
            return Err(GeomError::LengthMismatch {
                left: self.height,
                right: values.len(),
            });
        }
        for (y, &v) in values.iter().enumerate() {
            self.data[y * self.width + x] = v;
        }
        self.populated = true;
        Ok(())
    }

    pub fn edge(&self, edge: Edge) -> Vec<T> {
        // Indices are in range by construction (width, height >= 1).
        let (w, h) = (self.width, self.height);
        match edge {
            Edge::Top => self.data[0..w].to_vec(),
            Edge::Bottom => self.data[(h - 1) * w..h * w].to_vec(),
            Edge::Left => (0..h).map(|y| self.data[y * w]).collect(),
            Edge::Right => (0..h).map(|y| self.data[y * w + w - 1]).collect(),
        }
    }

    pub fn set_edge(&mut self, edge: Edge, values: &[T]) -> Result<()> {
        match edge {
            Edge::Top => self.set_row(0, values),
            Edge::Bottom => self.set_row(self.height - 1, values),
            Edge::Left => self.set_column(0, values),
            Edge::Right => self.set_column(self.width - 1, values),
        }
    }

    pub fn min(&self) -> T {
        self.data
            .iter()
            .copied()
            .fold(self.data[0], |m, v| if v < m { v } else { m })
    }

    pub fn max(&self) -> T {
        self.data
            .iter()
            .copied()
            .fold(self.data[0], |m, v| if v > m { v } else { m })
    }

    pub fn sum(&self) -> T {
        self.data.iter().copied().fold(T::zero(), |acc, v| acc + v)
    }

    pub fn average(&self) -> f64 {
        self.data.iter().map(|v| v.as_f64()).sum::<f64>() / self.data.len() as f64
    }

    /// Bilinear sample at fractional position `(fx, fy)` over `[0, 1]²`.
    ///
    /// Fractions are clamped, not wrapped: `(0, 0)` is cell `(0, 0)` and
    /// `(1, 1)` is cell `(width - 1, height - 1)`.
    pub fn interpolated_value(&self, fx: f64, fy: f64) -> T {
        let (x0, x1, tx) = bracket(fx, self.width);
        let (y0, y1, ty) = bracket(fy, self.height);
        let at = |x: usize, y: usize| self.data[y * self.width + x].as_f64();
        let (v00, v10, v01, v11) = (at(x0, y0), at(x1, y0), at(x0, y1), at(x1, y1));
        if tx == 0.0 && ty == 0.0 {
            return self.data[y0 * self.width + x0];
        }
        let top = v00 + (v10 - v00) * tx;
        let bottom = v01 + (v11 - v01) * tx;
        T::cast_from_f64(top + (bottom - top) * ty)
    }

    /// Bilinear resize to `width × height`.
    pub fn interpolated_grid(&self, width: usize, height: usize) -> Result<Self> {
        check_dims(width, height)?;
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            let fy = axis_fraction(y, height);
            for x in 0..width {
                data.push(self.interpolated_value(axis_fraction(x, width), fy));
            }
        }
        tracing::debug!(
            from_w = self.width,
            from_h = self.height,
            to_w = width,
            to_h = height,
            "bilinear grid resize"
        );
        Ok(Self {
            width,
            height,
            data,
            populated: self.populated,
        })
    }

    /// Copy of the `width × height` block whose top-left cell is `(x, y)`.
    pub fn subgrid(&self, x: usize, y: usize, width: usize, height: usize) -> Result<Self> {
        check_dims(width, height)?;
        for (start, size, len) in [(x, width, self.width), (y, height, self.height)] {
            match start.checked_add(size) {
                Some(end) if end <= len => {}
                _ => {
                    return Err(GeomError::IndexOutOfBounds {
                        index: start.saturating_add(size - 1),
                        len,
                    })
                }
            }
        }
        let mut data = Vec::with_capacity(width * height);
        for row in y..y + height {
            let start = row * self.width + x;
            data.extend_from_slice(&self.data[start..start + width]);
        }
        Ok(Self {
            width,
            height,
            data,
            populated: self.populated,
        })
    }

    fn overlap_dims(cells_x: usize, cells_y: usize, cell_res: usize) -> Result<(usize, usize)> {
        if cells_x == 0 || cells_y == 0 {
            return Err(GeomError::InvalidTiling {
                reason: "cell counts must be at least 1",
            });
        }
        if cell_res < 2 {
            return Err(GeomError::InvalidTiling {
                reason: "cell resolution must be at least 2",
            });
        }
        let span = |cells: usize| {
            cells
                .checked_mul(cell_res - 1)
                .and_then(|v| v.checked_add(1))
                .filter(|&v| v <= MAX_DIM_2D)
                .ok_or(GeomError::InvalidTiling {
                    reason: "tiling exceeds the maximum grid size",
                })
        };
        Ok((span(cells_x)?, span(cells_y)?))
    }

    /// One `cell_res × cell_res` tile of a `cells_x × cells_y` decomposition.
    ///
    /// The grid is resized once to `cells * (cell_res - 1) + 1` samples per
    /// axis and sliced so that neighbouring tiles share their edge samples.
    pub fn interpolated_subgrid_cell_with_overlap(
        &self,
        cell_x: usize,
        cell_y: usize,
        cells_x: usize,
        cells_y: usize,
        cell_res: usize,
    ) -> Result<Self> {
        let (total_w, total_h) = Self::overlap_dims(cells_x, cells_y, cell_res)?;
        if cell_x >= cells_x {
            return Err(GeomError::IndexOutOfBounds {
                index: cell_x,
                len: cells_x,
            });
        }
        if cell_y >= cells_y {
            return Err(GeomError::IndexOutOfBounds {
                index: cell_y,
                len: cells_y,
            });
        }
        let resized = self.interpolated_grid(total_w, total_h)?;
        let step = cell_res - 1;
        resized.subgrid(cell_x * step, cell_y * step, cell_res, cell_res)
    }

    /// All tiles of the overlapping decomposition, row-major by cell.
    pub fn interpolated_tiles_with_overlap(
        &self,
        cells_x: usize,
        cells_y: usize,
        cell_res: usize,
    ) -> Result<Vec<Self>> {
        let (total_w, total_h) = Self::overlap_dims(cells_x, cells_y, cell_res)?;
        let resized = self.interpolated_grid(total_w, total_h)?;
        let step = cell_res - 1;
        let mut tiles = Vec::with_capacity(cells_x * cells_y);
        for cy in 0..cells_y {
            for cx in 0..cells_x {
                tiles.push(resized.subgrid(cx * step, cy * step, cell_res, cell_res)?);
            }
        }
        Ok(tiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(w: usize, h: usize) -> NumericArray2D<f64> {
        let mut g = NumericArray2D::new(w, h).unwrap();
        g.populate_with(|x, y| (x + 10 * y) as f64);
        g
    }

    #[test]
    fn dims_and_population() {
        assert!(NumericArray2D::<f64>::new(0, 3).is_err());
        assert!(NumericArray2D::<f64>::new(3, MAX_DIM_2D + 1).is_err());
        let mut g = NumericArray2D::<i32>::new(3, 2).unwrap();
        assert!(!g.is_populated());
        g.set(2, 1, 9).unwrap();
        assert!(g.is_populated());
        assert_eq!(g.get(2, 1).unwrap(), 9);
        assert!(g.get(3, 0).is_err());
        assert!(NumericArray2D::from_vec(2, 2, vec![1, 2, 3]).is_err());
    }

    #[test]
    fn rows_columns_edges() {
        let mut g = ramp(3, 2);
        assert_eq!(g.row(1).unwrap(), vec![10.0, 11.0, 12.0]);
        assert_eq!(g.column(2).unwrap(), vec![2.0, 12.0]);
        assert_eq!(g.edge(Edge::Left), vec![0.0, 10.0]);
        assert_eq!(g.edge(Edge::Bottom), vec![10.0, 11.0, 12.0]);
        g.set_edge(Edge::Right, &[7.0, 8.0]).unwrap();
        assert_eq!(g.edge(Edge::Right), vec![7.0, 8.0]);
        assert!(g.set_row(0, &[1.0]).is_err());
        assert!(g.row(2).is_err());
    }

    #[test]
    fn aggregates() {
        let g = NumericArray2D::from_rows(&[vec![1, 5], vec![-2, 4]]).unwrap();
        assert_eq!(g.min(), -2);
        assert_eq!(g.max(), 5);
        assert_eq!(g.sum(), 8);
        assert!((g.average() - 2.0).abs() < 1e-12);
        assert!(NumericArray2D::from_rows(&[vec![1, 5], vec![4]]).is_err());
    }

    #[test]
    fn bilinear_corners_and_clamping() {
        let g = ramp(4, 3);
        assert_eq!(g.interpolated_value(0.0, 0.0), 0.0);
        assert_eq!(g.interpolated_value(1.0, 1.0), 23.0);
        assert_eq!(g.interpolated_value(2.0, -1.0), 3.0);
        // centre of a planar ramp is the mean of the corners
        assert!((g.interpolated_value(0.5, 0.5) - 11.5).abs() < 1e-12);
    }

    #[test]
    fn resize_and_subgrid() {
        let g = ramp(2, 2);
        let r = g.interpolated_grid(3, 3).unwrap();
        assert_eq!(r.row(1).unwrap(), vec![5.0, 5.5, 6.0]);
        let s = ramp(4, 4).subgrid(1, 2, 2, 2).unwrap();
        assert_eq!(s.values(), &[21.0, 22.0, 31.0, 32.0]);
        assert!(ramp(4, 4).subgrid(3, 0, 2, 1).is_err());
    }

    #[test]
    fn overlapping_tiles_share_edges() {
        let g = ramp(5, 5);
        let left = g.interpolated_subgrid_cell_with_overlap(0, 0, 2, 2, 3).unwrap();
        let right = g.interpolated_subgrid_cell_with_overlap(1, 0, 2, 2, 3).unwrap();
        assert_eq!(left.edge(Edge::Right), right.edge(Edge::Left));
        let tiles = g.interpolated_tiles_with_overlap(2, 2, 3).unwrap();
        assert_eq!(tiles.len(), 4);
        assert_eq!(tiles[1], right);
        assert_eq!(tiles[0].edge(Edge::Bottom), tiles[2].edge(Edge::Top));
        assert!(g.interpolated_subgrid_cell_with_overlap(2, 0, 2, 2, 3).is_err());
        assert!(matches!(
            g.interpolated_tiles_with_overlap(2, 2, 1),
            Err(GeomError::InvalidTiling { .. })
        ));
    }

    #[test]
    fn oversized_tilings_are_rejected() {
        let g = ramp(2, 2);
        assert!(matches!(
            g.interpolated_subgrid_cell_with_overlap(0, 0, usize::MAX / 2, 1, 5),
            Err(GeomError::InvalidTiling { .. })
        ));
        assert!(matches!(
            g.interpolated_tiles_with_overlap(1, usize::MAX, 3),
            Err(GeomError::InvalidTiling { .. })
        ));
        // fits in usize but not in a grid
        assert!(matches!(
            g.interpolated_tiles_with_overlap(MAX_DIM_2D, 1, 2),
            Err(GeomError::InvalidTiling { .. })
        ));
        assert_eq!(
            NumericArray2D::<f64>::overlap_dims(MAX_DIM_2D - 1, 3, 2),
            Ok((MAX_DIM_2D, 4))
        );
    }

    #[test]
    fn subgrid_rejects_offsets_past_the_end() {
        let g = ramp(3, 3);
        assert!(matches!(
            g.subgrid(usize::MAX, 0, 2, 1),
            Err(GeomError::IndexOutOfBounds { len: 3, .. })
        ));
        assert!(g.subgrid(0, 2, 1, 2).is_err());
        assert_eq!(g.subgrid(1, 1, 2, 2).unwrap().width(), 2);
    }
}
