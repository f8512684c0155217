use thiserror::Error;

#[derive(Error, Debug)]
pub enum FoodieError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
