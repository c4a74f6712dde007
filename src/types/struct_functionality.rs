use std::{ fmt, io::Write };

use ndarray::Array2;

use crate::error::{ GraphError, Result };
use super::Graph;

impl Graph {
    pub fn new(size: usize) -> Result<Graph> {
        if size == 0 {
            return Err(GraphError::InvalidSize(size));
        }

        return Ok(Graph {
            size,
            weights: Array2::<f32>::zeros((size, size)),
        });
    }

    pub fn size(&self) -> usize {
        return self.size;
    }

    /// Weight of the edge `row -> col`, `None` if there is no such edge.
    pub fn weight(&self, row: usize, col: usize) -> Option<f32> {
        return self.weights
            .get((row, col))
            .copied()
            .filter(|weight| *weight != 0.0);
    }

    pub fn has_edge(&self, row: usize, col: usize) -> bool {
        return self.weight(row, col).is_some();
    }

    /// Iterates over every edge as `(row, col, weight)` in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f32)> + '_ {
        return self.weights
            .indexed_iter()
            .filter(|(_, weight)| **weight != 0.0)
            .map(|((row, col), weight)| (row, col, *weight));
    }

    pub fn edge_count(&self) -> usize {
        return self.edges().count();
    }

    pub fn clear(&mut self) {
        self.weights.fill(0.0);
    }

    /// Writes the matrix to `out`, one row per line.
    pub fn display<W: Write>(&self, out: &mut W) -> Result<()> {
        write!(out, "{}", self)?;

        return Ok(());
    }

    pub(crate) fn set_weight(&mut self, row: usize, col: usize, weight: f32) {
        debug_assert!(row != col, "the diagonal never holds an edge");
        self.weights[[row, col]] = weight;
    }

    pub(crate) fn weight_rows(&self) -> Vec<Vec<f32>> {
        return self.weights.rows().into_iter().map(|row| row.to_vec()).collect();
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.weights.rows() {
            let line = row
                .iter()
                .map(|weight| weight.to_string())
                .collect::<Vec<String>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }

        return Ok(());
    }
}
