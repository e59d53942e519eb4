pub mod mock;

use std::sync::atomic::{AtomicU32, Ordering};

use crate::errors::ScoringError;

pub use mock::MockCreditScorer;

/// computes an applicant's credit score
pub trait CreditScorer {
    /// calculate and store the score for an applicant
    fn calculate_score(&self, applicant_name: &str, applicant_address: &str) -> Result<(), ScoringError>;

    /// the stored result of the last calculation
    fn score_result(&self) -> &ScoreResult;
}

/// read model for a calculated score
#[derive(Debug, Default)]
pub struct ScoreResult {
    score_value: ScoreValue,
}

impl ScoreResult {
    pub fn with_score(score: u32) -> Self {
        Self {
            score_value: ScoreValue::new(score),
        }
    }

    pub fn score_value(&self) -> &ScoreValue {
        &self.score_value
    }
}

/// a score that counts how often it has been read
#[derive(Debug, Default)]
pub struct ScoreValue {
    score: AtomicU32,
    reads: AtomicU32,
}

impl ScoreValue {
    pub fn new(score: u32) -> Self {
        Self {
            score: AtomicU32::new(score),
            reads: AtomicU32::new(0),
        }
    }

    /// read the score; every read is counted
    pub fn score(&self) -> u32 {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.score.load(Ordering::SeqCst)
    }

    /// replace the stored score
    pub fn store(&self, score: u32) {
        self.score.store(score, Ordering::SeqCst);
    }

    /// number of times `score` has been called
    pub fn read_count(&self) -> u32 {
        self.reads.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_are_counted() {
        let result = ScoreResult::with_score(300);
        assert_eq!(result.score_value().read_count(), 0);

        assert_eq!(result.score_value().score(), 300);
        assert_eq!(result.score_value().score(), 300);
        assert_eq!(result.score_value().read_count(), 2);
    }

    #[test]
    fn test_store_does_not_count_as_read() {
        let value = ScoreValue::default();
        value.store(720);

        assert_eq!(value.read_count(), 0);
        assert_eq!(value.score(), 720);
        assert_eq!(value.read_count(), 1);
    }
}
