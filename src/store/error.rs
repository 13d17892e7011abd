use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Missing fields")]
    MissingFields,

    #[error("Not found")]
    NotFound,
}
