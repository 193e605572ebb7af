use thiserror::Error;

/// Rejected carousel construction parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CarouselError {
    #[error("base speed must be a positive finite number, got {0}")]
    InvalidSpeed(f64),

    #[error(
        "repeat factor {got} is below the minimum of {min} for {mode} motion"
    )]
    RepeatFactorTooLow {
        got: usize,
        min: usize,
        mode: &'static str,
    },

    #[error("damping must be in (0, 1], got {0}")]
    InvalidDamping(f64),

    #[error("snap epsilon must be a positive finite number, got {0}")]
    InvalidEpsilon(f64),

    #[error("deadzone must be in [0, 1), got {0}")]
    InvalidDeadzone(f64),

    #[error("zone gain must be a positive finite number, got {0}")]
    InvalidGain(f64),
}

/// Reasons a layout report could not be turned into a pass width. None of
/// these are fatal: the engine keeps waiting for the next layout pass.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeasureError {
    #[error("nothing is mounted to measure")]
    NothingMounted,

    #[error("layout reports {measured} items but {expected} are mounted")]
    ItemCountMismatch { expected: usize, measured: usize },

    #[error("invalid width {0}")]
    InvalidWidth(f64),

    #[error("pass width is not positive")]
    ZeroWidth,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("invalid endpoint for resource `{resource}`: {source}")]
    Endpoint {
        resource: String,
        #[source]
        source: url::ParseError,
    },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ApiError>;
