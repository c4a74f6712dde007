use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Graph size must be a positive number, got {0}")]
    InvalidSize(usize),

    #[error("Density should be in (0,1], got {0}")]
    InvalidDensity(f64),

    #[error("Lower weight bound should be greater than 0, got {0}")]
    InvalidLowerBound(i32),

    #[error("Upper weight bound ({upper}) should not be less than the lower bound ({lower})")]
    InvalidBounds { lower: i32, upper: i32 },

    #[error("Weight bound {bound} cannot be stored exactly, bounds should not exceed {max}")]
    WeightNotRepresentable { bound: i32, max: i32 },

    #[error("Failed to serialize graph: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// True for every rejection of caller supplied generation arguments.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            GraphError::InvalidSize(_)
            | GraphError::InvalidDensity(_)
            | GraphError::InvalidLowerBound(_)
            | GraphError::InvalidBounds { .. }
            | GraphError::WeightNotRepresentable { .. } => {
                return true;
            }
            GraphError::Serialization(_) | GraphError::Io(_) => {
                return false;
            }
        }
    }
}
