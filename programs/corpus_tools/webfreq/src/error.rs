use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unexpected status code {0}")]
    Status(i32),

    #[error("request failed: {0}")]
    Http(#[from] minreq::Error),

    #[error("bad translation response: {0}")]
    Translation(String),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed record: {0}")]
    Record(String),
}
