//! Errors for the fallible edges of the engine: parsing topic keys, building
//! difficulties and loading quiz plans.
//!
//! Generation itself never fails.  A topic without a generator is reported as
//! `None` by dispatch, not as an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("unknown topic key '{0}'")]
    UnknownTopic(String),

    #[error("unknown subject '{0}'")]
    UnknownSubject(String),

    #[error("difficulty {0} is outside 1..=5")]
    DifficultyOutOfRange(i64),

    #[error("invalid quiz plan: {0}")]
    InvalidPlan(String),

    #[error("failed to parse quiz plan: {0}")]
    PlanSyntax(#[from] toml::de::Error),

    #[error("failed to read quiz plan: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert!(QuizError::UnknownTopic("maths.calculus".into())
            .to_string()
            .contains("maths.calculus"));
        assert!(QuizError::DifficultyOutOfRange(9).to_string().contains('9'));
    }
}
