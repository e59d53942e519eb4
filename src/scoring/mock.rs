use std::sync::Mutex;

use crate::errors::ScoringError;
use crate::scoring::{CreditScorer, ScoreResult};

/// mock credit scorer for testing
pub struct MockCreditScorer {
    score: u32,
    failure: Option<ScoringError>,
    score_result: ScoreResult,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockCreditScorer {
    /// scorer that stores `score` on every calculation
    pub fn returning(score: u32) -> Self {
        Self {
            score,
            failure: None,
            score_result: ScoreResult::default(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// scorer whose calculations always fail
    pub fn failing(error: ScoringError) -> Self {
        Self {
            failure: Some(error),
            ..Self::returning(0)
        }
    }

    /// (name, address) pairs passed to `calculate_score`
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn calculate_count(&self) -> usize {
        self.calls().len()
    }

    /// how many times the stored score has been read
    pub fn read_count(&self) -> u32 {
        self.score_result.score_value().read_count()
    }
}

impl CreditScorer for MockCreditScorer {
    fn calculate_score(&self, applicant_name: &str, applicant_address: &str) -> Result<(), ScoringError> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((applicant_name.to_string(), applicant_address.to_string()));

        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        self.score_result.score_value().store(self.score);
        Ok(())
    }

    fn score_result(&self) -> &ScoreResult {
        &self.score_result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculation_stores_configured_score() {
        let scorer = MockCreditScorer::returning(300);

        scorer.calculate_score("Sarah", "Draper").unwrap();

        assert_eq!(scorer.calls(), vec![("Sarah".to_string(), "Draper".to_string())]);
        assert_eq!(scorer.read_count(), 0);
        assert_eq!(scorer.score_result().score_value().score(), 300);
        assert_eq!(scorer.read_count(), 1);
    }

    #[test]
    fn test_failing_scorer_reports_error() {
        let scorer = MockCreditScorer::failing(ScoringError::Processing {
            message: "Test Exception".to_string(),
        });

        let err = scorer.calculate_score("Sarah", "Draper").unwrap_err();

        assert_eq!(err.to_string(), "score processing failed: Test Exception");
        assert_eq!(scorer.calculate_count(), 1);
    }
}
