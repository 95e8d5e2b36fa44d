use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid image dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("landmark list has {actual} points, expected {expected}")]
    LandmarkCount { expected: usize, actual: usize },

    #[error("degenerate anchor geometry: normalization factor {factor} is too small")]
    DegenerateAnchors { factor: f64 },

    #[error("metrics not computed: no landmark set has been applied yet")]
    MetricsNotReady,
}

pub type Result<T> = std::result::Result<T, Error>;
