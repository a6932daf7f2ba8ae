use thiserror::Error;

#[derive(Debug, Error)]
pub enum SalutaError {
    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),
}
