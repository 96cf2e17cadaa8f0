/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the data length does not match the image shape.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when two images are expected to have the same size.
    #[error("Invalid image size ({0}x{1}) expected ({2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when a pixel value cannot be cast to the target type.
    #[error("Failed to cast the pixel data")]
    CastError,

    /// Error when the histogram bin count is out of range.
    #[error("Invalid number of histogram bins ({0})")]
    InvalidHistogramBins(usize),
}
