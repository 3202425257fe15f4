//! Error types for dubins_routing

use std::fmt;

/// Main error type for Dubins path-length computations
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DubinsError {
    /// Pose pair closer than the minimum separation required for a valid
    /// tangent construction (three times the turn radius)
    DistanceTooShort { distance: f64, required: f64 },
    /// An inverse-trigonometric argument fell outside [-1, 1]; the assumed
    /// tangent type does not exist for this circle configuration
    DegenerateAngle { ratio: f64 },
    /// Heading between two coincident points is undefined
    CoincidentPoses,
    /// Turn radius must be strictly positive
    InvalidTurnRadius { radius: f64 },
}

impl fmt::Display for DubinsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DubinsError::DistanceTooShort { distance, required } => {
                write!(f, "distance {} is below the required minimum {} (3 * turn radius)",
                    distance, required)
            }
            DubinsError::DegenerateAngle { ratio } => {
                write!(f, "inverse trigonometric argument {} is outside [-1, 1]", ratio)
            }
            DubinsError::CoincidentPoses => {
                write!(f, "heading between coincident points is undefined")
            }
            DubinsError::InvalidTurnRadius { radius } => {
                write!(f, "turn radius {} must be positive", radius)
            }
        }
    }
}

impl std::error::Error for DubinsError {}

/// Result type alias for Dubins computations
pub type DubinsResult<T> = Result<T, DubinsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DubinsError::DistanceTooShort { distance: 1.0, required: 3.0 };
        assert_eq!(
            format!("{}", err),
            "distance 1 is below the required minimum 3 (3 * turn radius)"
        );
    }

    #[test]
    fn test_error_matches() {
        let err = DubinsError::InvalidTurnRadius { radius: -1.0 };
        assert!(matches!(err, DubinsError::InvalidTurnRadius { .. }));
    }
}
