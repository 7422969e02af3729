use crate::entry::ImageEntry;
use crate::error::ValidationError;
use crate::format::{
    first_payload_offset, BITS_PER_PIXEL, COLOR_PLANES, DIR_ENTRY_LEN,
    HEADER_LEN, ICON_FORMAT_TAG,
};
use byteorder::{ByteOrder, LittleEndian};
use std::io::{self, Write};

//===========================================================================//

/// Packs the given images into a single ICO container.
///
/// The output is a 6-byte header, one 16-byte directory entry per image, and
/// then every payload, all in input order with no padding.  All entries are
/// validated before any output is produced, so this either returns a complete
/// container or an error.  An empty `entries` slice is rejected with
/// `ValidationError::Empty`.
pub fn encode(entries: &[ImageEntry]) -> Result<Vec<u8>, ValidationError> {
    if entries.is_empty() {
        return Err(ValidationError::Empty);
    }
    if entries.len() > (u16::MAX as usize) {
        return Err(ValidationError::TooManyEntries { count: entries.len() });
    }
    let count = entries.len() as u16;

    // Validate every entry and lay out the payload offsets up front.
    let mut fields = Vec::<(u8, u32, u32)>::with_capacity(entries.len());
    let mut data_offset = first_payload_offset(count as u32);
    for (index, entry) in entries.iter().enumerate() {
        let (size_byte, data_size) = entry.validate(index)?;
        fields.push((size_byte, data_size, data_offset));
        data_offset = match data_offset.checked_add(data_size) {
            Some(offset) => offset,
            None => return Err(ValidationError::ContainerTooLarge),
        };
    }
    let total_len = data_offset as usize;

    let mut buffer = vec![0u8; total_len];
    LittleEndian::write_u16(&mut buffer[0..], 0); // reserved
    LittleEndian::write_u16(&mut buffer[2..], ICON_FORMAT_TAG);
    LittleEndian::write_u16(&mut buffer[4..], count);

    let mut start = HEADER_LEN as usize;
    for (index, &(size_byte, data_size, data_offset)) in
        fields.iter().enumerate()
    {
        let record = &mut buffer[start..][..DIR_ENTRY_LEN as usize];
        record[0] = size_byte; // width
        record[1] = size_byte; // height
        record[2] = 0; // no palette
        record[3] = 0; // reserved
        LittleEndian::write_u16(&mut record[4..], COLOR_PLANES);
        LittleEndian::write_u16(&mut record[6..], BITS_PER_PIXEL);
        LittleEndian::write_u32(&mut record[8..], data_size);
        LittleEndian::write_u32(&mut record[12..], data_offset);
        log::debug!(
            "Entry {}: {}x{}, {} bytes at offset {}",
            index,
            entries[index].size(),
            entries[index].size(),
            data_size,
            data_offset
        );
        start += DIR_ENTRY_LEN as usize;
    }

    for (entry, &(_, data_size, data_offset)) in entries.iter().zip(&fields) {
        let start = data_offset as usize;
        buffer[start..][..data_size as usize].copy_from_slice(entry.payload());
    }
    Ok(buffer)
}

/// Encodes the given images and writes the container out in one piece.
/// Invalid input is reported as an `io::ErrorKind::InvalidInput` error, and
/// nothing is written in that case.
pub fn write_container<W: Write>(
    entries: &[ImageEntry],
    mut writer: W,
) -> io::Result<()> {
    let data = encode(entries)?;
    writer.write_all(&data)?;
    Ok(())
}

//===========================================================================//


//===========================================================================//
