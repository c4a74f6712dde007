use clap::{ value_parser, Arg, ArgAction, ArgMatches, Command };
use rand::{ rngs::StdRng, SeedableRng };

use crate::types::EdgeParams;

/// Settings for one run of the generator. The defaults reproduce the fixed
/// demonstration: a 10 node graph, fully dense, weights between 5 and 10.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    pub size: usize,
    pub density: f64,
    pub lower_bound: i32,
    pub upper_bound: i32,
    /// Random seed for reproducible matrices (None = seeded from the OS)
    pub seed: Option<u64>,
    pub json: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        return Self {
            size: 10,
            density: 1.0,
            lower_bound: 5,
            upper_bound: 10,
            seed: None,
            json: false,
        };
    }
}

impl GenerationConfig {
    pub fn from_matches(matches: &ArgMatches) -> GenerationConfig {
        let defaults = GenerationConfig::default();

        return GenerationConfig {
            size: matches.get_one::<usize>("size").copied().unwrap_or(defaults.size),
            density: matches.get_one::<f64>("density").copied().unwrap_or(defaults.density),
            lower_bound: matches
                .get_one::<i32>("lower")
                .copied()
                .unwrap_or(defaults.lower_bound),
            upper_bound: matches
                .get_one::<i32>("upper")
                .copied()
                .unwrap_or(defaults.upper_bound),
            seed: matches.get_one::<u64>("seed").copied(),
            json: matches.get_flag("json"),
        };
    }

    pub fn edge_params(&self) -> EdgeParams {
        return EdgeParams {
            density: self.density,
            lower_bound: self.lower_bound,
            upper_bound: self.upper_bound,
        };
    }

    pub fn build_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => {
                return StdRng::seed_from_u64(seed);
            }
            None => {
                return StdRng::from_entropy();
            }
        }
    }
}

pub fn build_command() -> Command {
    // Graph size
    let size_arg = Arg::new("size")
        .short('n')
        .action(ArgAction::Set)
        .required(false)
        .value_parser(value_parser!(usize))
        .help("Number of nodes in the graph. The adjacency matrix will be size x size. Defaults to 10.");
    // Fraction of the possible directed edges to generate
    let density_arg = Arg::new("density")
        .short('p')
        .action(ArgAction::Set)
        .required(false)
        .allow_negative_numbers(true)
        .value_parser(value_parser!(f64))
        .help("Fraction of the size*(size-1) possible directed edges to generate, in (0,1]. Defaults to 1.");
    // Weight range
    let lower_arg = Arg::new("lower")
        .short('l')
        .action(ArgAction::Set)
        .required(false)
        .allow_negative_numbers(true)
        .value_parser(value_parser!(i32))
        .help("Smallest edge weight (inclusive), must be greater than 0. Defaults to 5.");
    let upper_arg = Arg::new("upper")
        .short('u')
        .action(ArgAction::Set)
        .required(false)
        .allow_negative_numbers(true)
        .value_parser(value_parser!(i32))
        .help("Largest edge weight (inclusive), between the lower bound and 16777216. Defaults to 10.");
    let seed_arg = Arg::new("seed")
        .short('s')
        .action(ArgAction::Set)
        .required(false)
        .value_parser(value_parser!(u64))
        .help("Seed for the random generator. The same seed always produces the same matrix.");
    let json_arg = Arg::new("json")
        .short('j')
        .action(ArgAction::SetTrue)
        .required(false)
        .help("Print the generated graph as JSON instead of a text matrix.");

    return Command::new("adjacency-gen")
        .about("Generates a random weighted directed graph as an adjacency matrix")
        .arg(size_arg)
        .arg(density_arg)
        .arg(lower_arg)
        .arg(upper_arg)
        .arg(seed_arg)
        .arg(json_arg);
}
