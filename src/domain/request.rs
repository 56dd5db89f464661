use chrono::NaiveDate;

use crate::analysis::AnalysisError;
use crate::config::ANALYSIS;

/// Bollinger Band parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandParams {
    pub window: usize,
    pub std_multiplier: f64,
}

impl Default for BandParams {
    fn default() -> Self {
        Self {
            window: ANALYSIS.bands.window,
            std_multiplier: ANALYSIS.bands.std_multiplier,
        }
    }
}

impl BandParams {
    pub fn new(window: usize, std_multiplier: f64) -> Self {
        Self {
            window,
            std_multiplier,
        }
    }

    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.window < 1 {
            return Err(AnalysisError::InvalidParameter(format!(
                "window must be at least 1 (got {})",
                self.window
            )));
        }
        if !self.std_multiplier.is_finite() || self.std_multiplier < 0.0 {
            return Err(AnalysisError::InvalidParameter(format!(
                "std multiplier must be a finite value >= 0 (got {})",
                self.std_multiplier
            )));
        }
        Ok(())
    }
}

/// Everything one Analyze action needs. Built from the UI inputs (or CLI args)
/// and handed to the pipeline; nothing is read from ambient state.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub symbol: String,
    pub start_date: NaiveDate,
    /// Exclusive, as with the provider's `period2`
    pub end_date: NaiveDate,
    pub params: BandParams,
}

impl AnalysisRequest {
    pub fn new(
        symbol: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        params: BandParams,
    ) -> Self {
        Self {
            symbol: symbol.trim().to_uppercase(),
            start_date,
            end_date,
            params,
        }
    }

    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.symbol.is_empty() {
            return Err(AnalysisError::InvalidParameter(
                "symbol must not be empty".to_string(),
            ));
        }
        if self.start_date >= self.end_date {
            return Err(AnalysisError::InvalidParameter(format!(
                "start date {} must be before end date {}",
                self.start_date, self.end_date
            )));
        }
        self.params.validate()
    }
}

impl std::fmt::Display for AnalysisRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} {}..{} (window {}, k {})",
            self.symbol, self.start_date, self.end_date, self.params.window, self.params.std_multiplier
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_symbol_is_normalised() {
        let request = AnalysisRequest::new(" aapl ", date(2023, 1, 1), date(2023, 6, 1), BandParams::default());
        assert_eq!(request.symbol, "AAPL");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_invalid_requests() {
        let params = BandParams::default();
        let empty = AnalysisRequest::new("  ", date(2023, 1, 1), date(2023, 6, 1), params);
        assert!(matches!(empty.validate(), Err(AnalysisError::InvalidParameter(_))));

        let reversed = AnalysisRequest::new("AAPL", date(2023, 6, 1), date(2023, 1, 1), params);
        assert!(matches!(reversed.validate(), Err(AnalysisError::InvalidParameter(_))));

        let same_day = AnalysisRequest::new("AAPL", date(2023, 6, 1), date(2023, 6, 1), params);
        assert!(same_day.validate().is_err());
    }

    #[test]
    fn test_band_params_validation() {
        assert!(BandParams::new(20, 2.0).validate().is_ok());
        assert!(BandParams::new(1, 0.0).validate().is_ok());
        assert!(matches!(
            BandParams::new(0, 2.0).validate(),
            Err(AnalysisError::InvalidParameter(_))
        ));
        assert!(BandParams::new(20, -0.5).validate().is_err());
        assert!(BandParams::new(20, f64::NAN).validate().is_err());
        assert!(BandParams::new(20, f64::INFINITY).validate().is_err());
    }
}
