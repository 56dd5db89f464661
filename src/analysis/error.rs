use std::fmt;

/// Failures of one analysis request. None of them are fatal to the process.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Window, multiplier, symbol or date range rejected before any work is done
    InvalidParameter(String),
    /// Not enough rows to fill a single window
    InsufficientData { required: usize, available: usize },
    /// A column is absent or does not line up with the rest of the series
    MissingField(&'static str),
    /// Every price source failed
    DataUnavailable(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            AnalysisError::InsufficientData {
                required,
                available,
            } => write!(
                f,
                "Insufficient data: need at least {} valid rows, got {}",
                required, available
            ),
            AnalysisError::MissingField(name) => {
                write!(f, "Missing or misaligned column: {}", name)
            }
            AnalysisError::DataUnavailable(msg) => write!(f, "Data unavailable: {}", msg),
        }
    }
}

impl std::error::Error for AnalysisError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = AnalysisError::InsufficientData {
            required: 20,
            available: 3,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient data: need at least 20 valid rows, got 3"
        );
        assert_eq!(
            AnalysisError::MissingField("close").to_string(),
            "Missing or misaligned column: close"
        );

        // Usable through anyhow in the binaries
        let any: anyhow::Error = AnalysisError::DataUnavailable("offline".into()).into();
        assert!(any.to_string().contains("offline"));
    }
}
