use std::io;
use std::path::PathBuf;
use thiserror::Error;

//===========================================================================//

/// Malformed input to the container encoder.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ValidationError {
    /// No images were given.
    #[error("Cannot encode an icon container with no images")]
    Empty,
    /// More images than the 16-bit count field can describe.
    #[error("Too many images (was {count}, but max is {})", u16::MAX)]
    TooManyEntries {
        /// Number of images given.
        count: usize,
    },
    /// An image size outside of 1-256.
    #[error(
        "Invalid size for image {index} (was {size}, but must be 1 to 256)"
    )]
    InvalidSize {
        /// Position of the offending image in the input.
        index: usize,
        /// The rejected size.
        size: u32,
    },
    /// A payload whose length does not fit in 32 bits.
    #[error("Payload of image {index} is too large ({len} bytes)")]
    PayloadTooLarge {
        /// Position of the offending image in the input.
        index: usize,
        /// Length of its payload, in bytes.
        len: usize,
    },
    /// The payloads together run past the last offset a 32-bit field holds.
    #[error("Icon container would exceed {} bytes", u32::MAX)]
    ContainerTooLarge,
}

impl From<ValidationError> for io::Error {
    fn from(error: ValidationError) -> io::Error {
        io::Error::new(io::ErrorKind::InvalidInput, error)
    }
}

//===========================================================================//

/// A failure to rasterize a vector source.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The SVG data could not be parsed.
    #[error("Malformed SVG data: {0}")]
    Svg(#[from] resvg::usvg::Error),
    /// The SVG declares an empty or degenerate view box.
    #[error("SVG has no drawable area")]
    EmptySource,
    /// A requested raster size of zero.
    #[error("Invalid raster size (was {0}, but must be at least 1)")]
    InvalidSize(u32),
    /// The pixel buffer could not be allocated.
    #[error("Failed to allocate a {0}x{0} pixmap")]
    Pixmap(u32),
    /// The raster could not be encoded as a PNG.
    #[error("PNG encoding failed: {0}")]
    Png(#[from] png::EncodingError),
}

//===========================================================================//

/// A failure during one generation run.  All of these are terminal for the
/// run.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Rendering one of the images failed.
    #[error(transparent)]
    Render(#[from] RenderError),
    /// The rendered images could not be packed into a container.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
}

impl GenerateError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        GenerateError::Io { path: path.into(), source }
    }
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::ValidationError;
    use std::io;

    #[test]
    fn validation_error_becomes_invalid_input() {
        let error: io::Error = ValidationError::Empty.into();
        assert_eq!(error.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn validation_error_messages() {
        let error = ValidationError::InvalidSize { index: 2, size: 300 };
        assert_eq!(
            error.to_string(),
            "Invalid size for image 2 (was 300, but must be 1 to 256)"
        );
        let error = ValidationError::TooManyEntries { count: 70000 };
        assert_eq!(
            error.to_string(),
            "Too many images (was 70000, but max is 65535)"
        );
    }
}

//===========================================================================//
