#[derive(thiserror::Error, Debug)]
pub enum PrintError {
    #[error("failed to write to stdout: {0}")]
    Io(#[from] std::io::Error),
    #[error("received a null string")]
    NullString,
}
