use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ColorizeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to open input file '{}': {source}", path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create output file '{}': {source}", path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
