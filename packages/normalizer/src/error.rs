use thiserror::Error;

pub type NormalizeResult<T> = Result<T, NormalizeError>;

#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Missing structure: '{key}' is absent or not an object")]
    MissingStructure { key: &'static str },
}

impl NormalizeError {
    pub fn missing_structure(key: &'static str) -> Self {
        Self::MissingStructure { key }
    }
}
