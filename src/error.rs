pub type AppResult<T> = Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An identity, feed or report call failed: transport error or non-2xx.
    #[error("remote call failed: {0}")]
    Remote(#[from] reqwest::Error),

    /// A judgment was attempted with nothing left to judge.
    #[error("no dev left to judge")]
    InvalidState,

    #[error("local storage: {0}")]
    Persistence(#[from] sqlx::Error),

    /// The match subscription could not be established or broke.
    #[error("match channel: {0}")]
    Channel(#[from] tokio_tungstenite::tungstenite::Error),
}
