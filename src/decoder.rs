use crate::format::{size_from_byte, ICON_FORMAT_TAG, PNG_SIGNATURE};
use byteorder::{LittleEndian, ReadBytesExt};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::io::{self, Read, Seek, SeekFrom};

//===========================================================================//

/// The decoded contents of an ICO file.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct IconContainer {
    entries: Vec<DirectoryEntry>,
}

impl IconContainer {
    /// Returns the entries in the order the directory lists them.
    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    /// Reads an ICO file into memory.  Payloads are extracted verbatim from
    /// their declared offset and length; they are not decoded.
    pub fn read<R: Read + Seek>(mut reader: R) -> io::Result<IconContainer> {
        let reserved = reader.read_u16::<LittleEndian>()?;
        if reserved != 0 {
            invalid_data!(
                "Invalid reserved field value in header \
                 (was {}, but must be 0)",
                reserved
            );
        }
        let format_tag = reader.read_u16::<LittleEndian>()?;
        if format_tag != ICON_FORMAT_TAG {
            invalid_data!(
                "Unsupported format tag (was {}, but must be {})",
                format_tag,
                ICON_FORMAT_TAG
            );
        }
        let count = reader.read_u16::<LittleEndian>()? as usize;
        let mut entries = Vec::<DirectoryEntry>::with_capacity(count);
        let mut spans = Vec::<(u32, u32)>::with_capacity(count);
        for index in 0..count {
            let width_byte = reader.read_u8()?;
            let height_byte = reader.read_u8()?;
            let num_colors = reader.read_u8()?;
            let reserved = reader.read_u8()?;
            if reserved != 0 {
                invalid_data!(
                    "Invalid reserved field value in directory entry {} \
                     (was {}, but must be 0)",
                    index,
                    reserved
                );
            }
            let color_planes = reader.read_u16::<LittleEndian>()?;
            let bits_per_pixel = reader.read_u16::<LittleEndian>()?;
            let data_size = reader.read_u32::<LittleEndian>()?;
            let data_offset = reader.read_u32::<LittleEndian>()?;
            spans.push((data_offset, data_size));
            entries.push(DirectoryEntry {
                width: size_from_byte(width_byte),
                height: size_from_byte(height_byte),
                num_colors,
                color_planes,
                bits_per_pixel,
                offset: data_offset,
                payload: Vec::new(),
            });
        }
        for (entry, &(data_offset, data_size)) in
            entries.iter_mut().zip(spans.iter())
        {
            reader.seek(SeekFrom::Start(data_offset as u64))?;
            let mut payload = vec![0u8; data_size as usize];
            reader.read_exact(&mut payload)?;
            entry.payload = payload;
        }
        Ok(IconContainer { entries })
    }
}

//===========================================================================//

/// One directory record of an ICO file, together with its payload.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct DirectoryEntry {
    width: u32,
    height: u32,
    num_colors: u8,
    color_planes: u16,
    bits_per_pixel: u16,
    offset: u32,
    payload: Vec<u8>,
}

impl DirectoryEntry {
    /// Returns the width of the image, in pixels.  A width byte of zero is
    /// read as 256.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the image, in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the palette size, or zero if the image has no palette.
    pub fn num_colors(&self) -> u8 {
        self.num_colors
    }

    /// Returns the color plane count.
    pub fn color_planes(&self) -> u16 {
        self.color_planes
    }

    /// Returns the bits-per-pixel (color depth) of the image.
    pub fn bits_per_pixel(&self) -> u16 {
        self.bits_per_pixel
    }

    /// Returns the absolute offset of the payload within the file.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Returns the raw, encoded image data.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Returns true if the image is encoded as a PNG, or false if it is
    /// encoded as a BMP.
    pub fn is_png(&self) -> bool {
        self.payload.starts_with(PNG_SIGNATURE)
    }
}

//===========================================================================//


//===========================================================================//
