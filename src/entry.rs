use crate::error::ValidationError;
use crate::format::{size_to_byte, PNG_SIGNATURE};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

//===========================================================================//

/// One square raster image destined for an icon container.
///
/// The payload is an already-encoded image (normally a PNG) and is never
/// inspected by the encoder beyond its length.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct ImageEntry {
    size: u32,
    payload: Vec<u8>,
}

impl ImageEntry {
    /// Creates a new entry.  No validation happens here; out-of-range sizes
    /// are reported when the entry is encoded.
    pub fn new(size: u32, payload: Vec<u8>) -> ImageEntry {
        ImageEntry { size, payload }
    }

    /// Returns the width (and height) of the image, in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Returns the raw, encoded image data.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Returns true if the payload is encoded as a PNG.
    pub fn is_png(&self) -> bool {
        self.payload.starts_with(PNG_SIGNATURE)
    }

    /// Checks this entry against the container's field widths, returning the
    /// width/height byte and the payload length as they will be written.
    pub(crate) fn validate(
        &self,
        index: usize,
    ) -> Result<(u8, u32), ValidationError> {
        let size_byte = match size_to_byte(self.size) {
            Some(byte) => byte,
            None => {
                return Err(ValidationError::InvalidSize {
                    index,
                    size: self.size,
                })
            }
        };
        let len = match u32::try_from(self.payload.len()) {
            Ok(len) => len,
            Err(_) => {
                return Err(ValidationError::PayloadTooLarge {
                    index,
                    len: self.payload.len(),
                })
            }
        };
        Ok((size_byte, len))
    }
}

//===========================================================================//


//===========================================================================//
