//! Dense distance matrix.

use crate::models::Coordinate;

use super::haversine_km;

/// A dense n×n distance matrix (kilometers) stored in row-major order.
///
/// Built from coordinates with the haversine distance, so it is always
/// symmetric with a zero diagonal.
///
/// # Examples
///
/// ```
/// use route_sequencer::models::Coordinate;
/// use route_sequencer::distance::{haversine_km, DistanceMatrix};
///
/// let points = vec![
///     Coordinate::new(-42.0, -73.0),
///     Coordinate::new(-42.01, -73.0),
///     Coordinate::new(-42.02, -73.0),
/// ];
/// let dm = DistanceMatrix::from_coordinates(&points);
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(0, 1), haversine_km(&points[0], &points[1]));
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes a haversine distance matrix from coordinates.
    pub fn from_coordinates(points: &[Coordinate]) -> Self {
        let size = points.len();
        let mut data = vec![0.0; size * size];
        for i in 0..size {
            for j in (i + 1)..size {
                let d = haversine_km(&points[i], &points[j]);
                data[i * size + j] = d;
                data[j * size + i] = d;
            }
        }
        Self { data, size }
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the nearest of `candidates` to `from`.
    ///
    /// Ties go to the candidate that appears first. Returns `None` if
    /// `candidates` is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for &c in candidates {
            let d = self.get(from, c);
            if best.map_or(true, |(_, best_d)| d < best_d) {
                best = Some((c, d));
            }
        }
        best.map(|(c, _)| c)
    }

    /// Length of the open path visiting `path` in order.
    pub fn path_length(&self, path: &[usize]) -> f64 {
        path.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }
}
