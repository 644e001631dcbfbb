use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown sex: {0}")]
    UnknownSex(String),
    #[error("unknown demographic bucket: {0}")]
    UnknownBucket(String),
    #[error("invalid reference range: {message}")]
    InvalidRange { message: String },
    #[error("invalid patient age {age}: expected 0 to {max} years")]
    InvalidAge { age: f64, max: f64 },
}

pub type Result<T> = std::result::Result<T, ModelError>;
