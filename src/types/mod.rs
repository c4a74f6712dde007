use ndarray::Array2;

mod helpers;
mod serialization;
mod struct_functionality;

pub use helpers::max_directed_edges;

/// Directed graph stored as a dense `size x size` weight matrix.
///
/// A weight of `0` means there is no edge between the two nodes, any positive
/// weight is a directed edge from the row node to the column node. The
/// diagonal is never populated.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    size: usize,
    weights: Array2<f32>,
}

/// Arguments of a random edge generation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeParams {
    pub density: f64,
    pub lower_bound: i32,
    pub upper_bound: i32,
}

/// What a generation run did to reach its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationSummary {
    pub target_edges: usize,
    pub samples_drawn: u64,
    pub rejected_self_loops: u64,
    pub rejected_occupied: u64,
}
