mod random;

use rand::Rng;
use tracing::{ info, warn };

use crate::error::{ GraphError, Result };
use crate::types::{ max_directed_edges, EdgeParams, GenerationSummary, Graph };
use random::place_random_edges;

/// Largest weight bound an `f32` cell stores exactly; every integer up to 2^24 is representable.
pub const MAX_EXACT_WEIGHT: i32 = 1 << 24;

/// Slack added before flooring so products such as `90.0 * 0.7` (62.99999999999999) count as 63.
const TARGET_TOLERANCE: f64 = 1e-9;

/// Checks `0 < density <= 1` and `0 < lower_bound <= upper_bound <= MAX_EXACT_WEIGHT`.
pub fn validate_edge_params(params: &EdgeParams) -> Result<()> {
    // Written so that a NaN density fails the check as well
    if !(params.density > 0.0 && params.density <= 1.0) {
        return Err(GraphError::InvalidDensity(params.density));
    }
    if params.lower_bound <= 0 {
        return Err(GraphError::InvalidLowerBound(params.lower_bound));
    }
    if params.upper_bound < params.lower_bound {
        return Err(GraphError::InvalidBounds {
            lower: params.lower_bound,
            upper: params.upper_bound,
        });
    }
    if params.upper_bound > MAX_EXACT_WEIGHT {
        return Err(GraphError::WeightNotRepresentable {
            bound: params.upper_bound,
            max: MAX_EXACT_WEIGHT,
        });
    }

    return Ok(());
}

/// `floor(size * (size - 1) * density)`, never more than the off-diagonal cell count.
pub fn target_edge_count(size: usize, density: f64) -> usize {
    let max_edges = max_directed_edges(size);
    let target = ((max_edges as f64) * density + TARGET_TOLERANCE).floor() as usize;

    return target.min(max_edges);
}

impl Graph {
    /// Replaces the edges of the graph with `floor(size * (size - 1) * density)`
    /// randomly placed directed edges.
    ///
    /// Invalid parameters are rejected before anything is touched. On success the
    /// returned summary carries the target edge count.
    pub fn generate_edges<R: Rng + ?Sized>(
        &mut self,
        params: &EdgeParams,
        rng: &mut R,
    ) -> Result<GenerationSummary> {
        if let Err(e) = validate_edge_params(params) {
            warn!(error = %e, "rejected edge generation parameters");
            return Err(e);
        }

        let target_edges = target_edge_count(self.size(), params.density);
        info!(
            size = self.size(),
            density = params.density,
            target_edges,
            "generating random edges"
        );

        // Start from an empty grid so the target is always reachable
        self.clear();
        let summary = place_random_edges(
            self,
            target_edges,
            params.lower_bound,
            params.upper_bound,
            rng,
        );

        return Ok(summary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{ rngs::StdRng, SeedableRng };

    fn params(density: f64, lower_bound: i32, upper_bound: i32) -> EdgeParams {
        EdgeParams {
            density,
            lower_bound,
            upper_bound,
        }
    }

    fn assert_generated(graph: &Graph, params: &EdgeParams) {
        assert_eq!(
            graph.edge_count(),
            target_edge_count(graph.size(), params.density)
        );
        for (row, col, weight) in graph.edges() {
            assert_ne!(row, col);
            assert!(weight >= params.lower_bound as f32);
            assert!(weight <= params.upper_bound as f32);
            assert_eq!(weight.fract(), 0.0);
        }
        for i in 0..graph.size() {
            assert!(!graph.has_edge(i, i));
        }
    }

    #[test]
    fn test_target_edge_count() {
        assert_eq!(target_edge_count(10, 1.0), 90);
        assert_eq!(target_edge_count(10, 0.5), 45);
        assert_eq!(target_edge_count(3, 0.5), 3);
        assert_eq!(target_edge_count(4, 0.3), 3);
        assert_eq!(target_edge_count(1, 1.0), 0);
    }

    #[test]
    fn test_target_edge_count_decimal_densities() {
        // 90.0 * 0.7 is 62.99999999999999 in f64
        assert_eq!(target_edge_count(10, 0.7), 63);
        assert_eq!(target_edge_count(10, 0.1), 9);
        assert_eq!(target_edge_count(10, 0.3), 27);
        assert_eq!(target_edge_count(20, 0.7), 266);
        assert_eq!(target_edge_count(10, 0.99), 89);
    }

    #[test]
    fn test_decimal_density_places_full_target() {
        let mut graph = Graph::new(10).unwrap();
        let mut rng = StdRng::seed_from_u64(70);

        let summary = graph.generate_edges(&params(0.7, 5, 10), &mut rng).unwrap();
        assert_eq!(summary.target_edges, 63);
        assert_eq!(graph.edge_count(), 63);
    }

    #[test]
    fn test_largest_exact_weight_is_stored_exactly() {
        let mut graph = Graph::new(2).unwrap();
        let mut rng = StdRng::seed_from_u64(24);
        let p = params(1.0, MAX_EXACT_WEIGHT, MAX_EXACT_WEIGHT);

        graph.generate_edges(&p, &mut rng).unwrap();
        assert_eq!(graph.weight(0, 1), Some(16_777_216.0));
        assert_eq!(graph.weight(1, 0), Some(16_777_216.0));
        assert_generated(&graph, &p);
    }

    #[test]
    fn test_unrepresentable_weight_is_rejected() {
        let mut graph = Graph::new(2).unwrap();
        let mut rng = StdRng::seed_from_u64(25);

        let err = graph
            .generate_edges(&params(1.0, 16_777_217, 16_777_217), &mut rng)
            .unwrap_err();
        assert!(matches!(
            err,
            GraphError::WeightNotRepresentable { bound: 16_777_217, .. }
        ));
        assert!(err.is_invalid_argument());
        assert_eq!(graph.edge_count(), 0);

        let err = validate_edge_params(&params(0.5, 1, i32::MAX)).unwrap_err();
        assert!(matches!(err, GraphError::WeightNotRepresentable { .. }));
    }

    #[test]
    fn test_generated_graph_properties() {
        let cases = [
            (2, params(1.0, 1, 1)),
            (5, params(0.25, 3, 8)),
            (10, params(1.0, 5, 10)),
            (12, params(0.6, 1, 100)),
            (30, params(0.05, 7, 7)),
        ];

        for seed in 0..5 {
            let mut rng = StdRng::seed_from_u64(seed);
            for (size, params) in &cases {
                let mut graph = Graph::new(*size).unwrap();
                let summary = graph.generate_edges(params, &mut rng).unwrap();

                assert_eq!(summary.target_edges, target_edge_count(*size, params.density));
                assert_generated(&graph, params);
            }
        }
    }

    #[test]
    fn test_full_density_with_fixed_weight() {
        let mut graph = Graph::new(3).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let summary = graph.generate_edges(&params(1.0, 1, 1), &mut rng).unwrap();
        assert_eq!(summary.target_edges, 6);
        assert_eq!(graph.to_string(), "0 1 1\n1 0 1\n1 1 0\n");
    }

    #[test]
    fn test_single_node_graph() {
        let mut graph = Graph::new(1).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let summary = graph.generate_edges(&params(1.0, 5, 10), &mut rng).unwrap();
        assert_eq!(summary.target_edges, 0);
        assert_eq!(summary.samples_drawn, 0);
        assert_eq!(graph.to_string(), "0\n");
    }

    #[test]
    fn test_invalid_params_leave_graph_untouched() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut graph = Graph::new(5).unwrap();
        graph.generate_edges(&params(0.5, 2, 4), &mut rng).unwrap();
        let before = graph.clone();

        let invalid = [
            params(0.0, 5, 10),
            params(1.5, 5, 10),
            params(-0.2, 5, 10),
            params(f64::NAN, 5, 10),
            params(0.5, 0, 10),
            params(0.5, -3, 10),
            params(0.5, 10, 5),
            params(0.5, 1, MAX_EXACT_WEIGHT + 1),
        ];
        for params in &invalid {
            let err = graph.generate_edges(params, &mut rng).unwrap_err();
            assert!(err.is_invalid_argument());
            assert_eq!(graph, before);
        }
    }

    #[test]
    fn test_invalid_param_messages() {
        let err = validate_edge_params(&params(2.0, 1, 1)).unwrap_err();
        assert!(matches!(err, GraphError::InvalidDensity(d) if d == 2.0));

        let err = validate_edge_params(&params(1.0, 0, 1)).unwrap_err();
        assert!(matches!(err, GraphError::InvalidLowerBound(0)));

        let err = validate_edge_params(&params(1.0, 4, 3)).unwrap_err();
        assert!(matches!(err, GraphError::InvalidBounds { lower: 4, upper: 3 }));
        assert!(err.to_string().contains("lower bound"));
    }

    #[test]
    fn test_same_seed_same_graph() {
        let p = params(0.4, 1, 50);

        let mut first = Graph::new(15).unwrap();
        first.generate_edges(&p, &mut StdRng::seed_from_u64(123)).unwrap();
        let mut second = Graph::new(15).unwrap();
        second.generate_edges(&p, &mut StdRng::seed_from_u64(123)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_regeneration_replaces_edges() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut graph = Graph::new(8).unwrap();

        graph.generate_edges(&params(1.0, 1, 3), &mut rng).unwrap();
        assert_eq!(graph.edge_count(), 56);

        let p = params(0.25, 1, 3);
        graph.generate_edges(&p, &mut rng).unwrap();
        assert_generated(&graph, &p);
        assert_eq!(graph.edge_count(), 14);
    }
}
