//! Error types for the activity API, image rendering and command options.

use std::path::PathBuf;

/// Failure talking to the remote activity API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("GET request to `{url}` failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: TransportCause,
    },
    #[error("response from `{url}` is not an activity: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// JSON that parses but does not describe an activity.
#[derive(Debug, thiserror::Error)]
pub enum ShapeError {
    #[error("missing field `{0}`")]
    Missing(&'static str),
    #[error("activity has no participants")]
    NoParticipants,
    #[error("activity has an empty key")]
    EmptyKey,
}

/// Underlying cause of an [`ApiError::Transport`].
#[derive(Debug, thiserror::Error)]
pub enum TransportCause {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("body is not JSON: {0}")]
    Body(#[from] serde_json::Error),
}

/// Failure loading or producing an image.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("could not load template image `{}`: {source}", path.display())]
    Template {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("could not read font `{}`: {source}", path.display())]
    Font {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("font `{}` is not a valid TrueType/OpenType font", path.display())]
    InvalidFont { path: PathBuf },
    #[error("could not encode PNG: {0}")]
    Encode(#[source] image::ImageError),
    #[error("render task did not complete: {0}")]
    Interrupted(String),
}

/// A command option value that does not belong to its choice list.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("invalid value `{value}` for option `{name}`")]
    InvalidOption { name: String, value: String },
}

/// The custom id does not carry a transcript token.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("not a transcript token")]
pub struct NotAToken;
