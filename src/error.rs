use thiserror::Error;

/// Errors raised when drawing settings cannot be turned into a stroke or canvas
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("Section count must be a finite number, got {0}")]
    NonFiniteSections(f64),

    #[error("Section count must be a whole number, got {0}")]
    FractionalSections(f64),

    #[error("Section count must be at least 1, got {0}")]
    TooFewSections(f64),

    #[error("Section count must be at most {max}, got {0}", max = crate::symmetry::MAX_SECTIONS)]
    TooManySections(f64),

    #[error("Stroke thickness must be a positive number, got {0}")]
    InvalidThickness(f32),

    #[error("Canvas size must be at least 1x1, got {width}x{height}")]
    EmptyCanvas { width: u32, height: u32 },
}

/// Errors that can occur while writing the canvas to an image file
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to encode canvas image: {0}")]
    Image(#[from] image::ImageError),
}
