use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectorError {
    #[error("there is more than one pointer target selector in the scene")]
    AlreadyInitialized,

    #[error("no {0} marker found in the scene")]
    MissingMarker(&'static str),

    #[error("more than one {0} marker found in the scene")]
    DuplicateMarker(&'static str),

    #[error("no active world camera, crosshair update skipped")]
    NoActiveCamera,

    #[error("invalid selector config: {0}")]
    InvalidConfig(String),
}
