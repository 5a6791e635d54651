//! Errors

use std::fmt;

/// Errors returned by host side entry points
///
/// The accumulation itself cannot fail; these are reported before any
/// pixel is written, or while reading and writing image files.
#[derive(Debug)]
pub enum Error {
    /// Atlas width or shelf height was zero
    ZeroDimension { atlas_width: usize, shelf_height: usize },
    /// Output atlas cannot hold the requested shelves
    AtlasTooSmall {
        /// Required (width, height) in pixels
        required: (usize, usize),
        /// Actual (width, height) of the atlas
        actual: (usize, usize),
    },
    /// shelves * atlas width (or shelves * shelf height) overflows
    DispatchOverflow { shelves: usize },
    /// Image width or height does not fit the file format's `u32` limit
    DimensionTooLarge { width: usize, height: usize },
    /// Reading or writing an image file failed
    Image(image::ImageError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ZeroDimension { atlas_width, shelf_height } => write!(
                f,
                "atlas width ({}) and shelf height ({}) must be non-zero",
                atlas_width, shelf_height
            ),
            Error::AtlasTooSmall { required, actual } => write!(
                f,
                "atlas is {}x{} but the dispatch needs at least {}x{}",
                actual.0, actual.1, required.0, required.1
            ),
            Error::DispatchOverflow { shelves } => {
                write!(f, "dispatch of {} shelves overflows", shelves)
            }
            Error::DimensionTooLarge { width, height } => write!(
                f,
                "image of {}x{} is too large to encode",
                width, height
            ),
            Error::Image(e) => write!(f, "image error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Image(e) => Some(e),
            _ => None,
        }
    }
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Image(e)
    }
}

#[cfg(test)]
mod tests {
    use super::Error;
    use std::error::Error as _;

    #[test]
    fn error_display() {
        let e = Error::AtlasTooSmall { required: (4, 6), actual: (4, 3) };
        assert_eq!(e.to_string(), "atlas is 4x3 but the dispatch needs at least 4x6");
        assert!(e.source().is_none());

        let e = Error::ZeroDimension { atlas_width: 0, shelf_height: 3 };
        assert_eq!(e.to_string(), "atlas width (0) and shelf height (3) must be non-zero");

        let e = Error::DimensionTooLarge { width: 5, height: 7 };
        assert_eq!(e.to_string(), "image of 5x7 is too large to encode");
        assert!(e.source().is_none());

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let e = Error::from(image::ImageError::IoError(io));
        assert!(e.source().is_some());
        assert!(e.to_string().starts_with("image error"));
    }
}
