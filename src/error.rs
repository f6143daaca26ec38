#[derive(thiserror::Error, Debug)]
pub enum DeckError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid vowel table: {0}")]
    Table(String),
    #[error("Invalid config: {0}")]
    Config(String),
}
