use finbti_domain::AnswerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Invalid answer: {0}")]
    InvalidAnswer(#[from] AnswerError),
    #[error("Unknown question index: {0}")]
    UnknownQuestion(usize),
}
