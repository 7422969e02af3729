//! Field widths and constants of the ICO container layout.

//===========================================================================//

/// Length of the container header, in bytes.
pub const HEADER_LEN: u32 = 6;

/// Length of one directory entry, in bytes.
pub const DIR_ENTRY_LEN: u32 = 16;

/// The format tag identifying an icon (as opposed to cursor) container.
pub const ICON_FORMAT_TAG: u16 = 1;

/// Every entry is written as true color with alpha.
pub(crate) const BITS_PER_PIXEL: u16 = 32;
pub(crate) const COLOR_PLANES: u16 = 1;

/// The smallest image size a container holds, in pixels.
pub const MIN_SIZE: u32 = 1;
/// The largest image size a container holds, in pixels.
pub const MAX_SIZE: u32 = 256;

// The signature that all PNG files start with.
pub(crate) const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G'];

//===========================================================================//

/// Returns the byte stored in a directory entry's width/height field for an
/// image of the given size.  The field is one byte wide, so 256 is stored as
/// zero.  Returns `None` for sizes outside of `MIN_SIZE..=MAX_SIZE`.
pub fn size_to_byte(size: u32) -> Option<u8> {
    match size {
        MAX_SIZE => Some(0),
        MIN_SIZE..=255 => Some(size as u8),
        _ => None,
    }
}

/// Inverse of `size_to_byte`.
pub fn size_from_byte(byte: u8) -> u32 {
    if byte == 0 {
        MAX_SIZE
    } else {
        byte as u32
    }
}

/// Returns the offset of the first payload in a container holding `count`
/// images.
pub(crate) fn first_payload_offset(count: u32) -> u32 {
    HEADER_LEN + DIR_ENTRY_LEN * count
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::{first_payload_offset, size_from_byte, size_to_byte};

    #[test]
    fn size_byte_round_trip() {
        for size in 1..=256 {
            let byte = size_to_byte(size).unwrap();
            assert_eq!(size_from_byte(byte), size);
        }
    }

    #[test]
    fn size_256_is_stored_as_zero() {
        assert_eq!(size_to_byte(256), Some(0));
        assert_eq!(size_to_byte(255), Some(255));
        assert_eq!(size_to_byte(1), Some(1));
    }

    #[test]
    fn out_of_range_sizes_have_no_byte() {
        assert_eq!(size_to_byte(0), None);
        assert_eq!(size_to_byte(257), None);
        assert_eq!(size_to_byte(512), None);
    }

    #[test]
    fn payloads_start_after_directory() {
        assert_eq!(first_payload_offset(0), 6);
        assert_eq!(first_payload_offset(2), 38);
        assert_eq!(first_payload_offset(3), 54);
    }
}

//===========================================================================//
