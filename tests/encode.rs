extern crate favicon_kit;

use favicon_kit::{encode, ImageEntry, ValidationError};

//===========================================================================//

fn read_u16(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

fn payload(len: usize, seed: u8) -> Vec<u8> {
    (0..len).map(|index| seed.wrapping_add(index as u8)).collect()
}

//===========================================================================//

#[test]
fn encode_two_entries() {
    let entries = vec![
        ImageEntry::new(16, payload(10, 1)),
        ImageEntry::new(32, payload(20, 100)),
    ];
    let data = encode(&entries).unwrap();
    assert_eq!(data.len(), 68);
    // Header:
    assert_eq!(read_u16(&data, 0), 0);
    assert_eq!(read_u16(&data, 2), 1);
    assert_eq!(read_u16(&data, 4), 2);
    // First directory entry:
    assert_eq!(&data[6..10], &[16, 16, 0, 0]);
    assert_eq!(read_u16(&data, 10), 1);
    assert_eq!(read_u16(&data, 12), 32);
    assert_eq!(read_u32(&data, 14), 10);
    assert_eq!(read_u32(&data, 18), 38);
    // Second directory entry:
    assert_eq!(&data[22..26], &[32, 32, 0, 0]);
    assert_eq!(read_u32(&data, 30), 20);
    assert_eq!(read_u32(&data, 34), 48);
    // Payloads, packed in order:
    assert_eq!(&data[38..48], entries[0].payload());
    assert_eq!(&data[48..68], entries[1].payload());
}

#[test]
fn encode_256_pixel_entry() {
    let entries = vec![ImageEntry::new(256, payload(5, 7))];
    let data = encode(&entries).unwrap();
    assert_eq!(data.len(), 27);
    assert_eq!(data[6], 0);
    assert_eq!(data[7], 0);
    assert_eq!(read_u32(&data, 14), 5);
    assert_eq!(read_u32(&data, 18), 22);
}

#[test]
fn encode_length_and_payload_spans() {
    let sizes_and_lens: &[(u32, usize)] =
        &[(1, 0), (16, 3), (48, 250), (255, 1), (256, 64), (128, 17)];
    let entries: Vec<ImageEntry> = sizes_and_lens
        .iter()
        .enumerate()
        .map(|(index, &(size, len))| {
            ImageEntry::new(size, payload(len, index as u8 * 31))
        })
        .collect();
    let data = encode(&entries).unwrap();
    let total: usize = sizes_and_lens.iter().map(|&(_, len)| len).sum();
    assert_eq!(data.len(), 6 + 16 * entries.len() + total);
    assert_eq!(read_u16(&data, 4) as usize, entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let record = 6 + 16 * index;
        let expected_byte = if entry.size() == 256 { 0 } else { entry.size() };
        assert_eq!(data[record] as u32, expected_byte);
        assert_eq!(data[record + 1] as u32, expected_byte);
        let len = read_u32(&data, record + 8) as usize;
        let offset = read_u32(&data, record + 12) as usize;
        assert_eq!(&data[offset..][..len], entry.payload());
    }
}

#[test]
fn encode_is_deterministic() {
    let entries = vec![
        ImageEntry::new(48, payload(33, 3)),
        ImageEntry::new(16, payload(12, 9)),
    ];
    assert_eq!(encode(&entries).unwrap(), encode(&entries).unwrap());
}

//===========================================================================//

#[test]
fn encode_rejects_empty_input() {
    for _ in 0..3 {
        assert_eq!(encode(&[]), Err(ValidationError::Empty));
    }
}

#[test]
fn encode_rejects_out_of_range_sizes() {
    let entries = vec![ImageEntry::new(0, payload(4, 0))];
    assert_eq!(
        encode(&entries),
        Err(ValidationError::InvalidSize { index: 0, size: 0 })
    );
    let entries = vec![
        ImageEntry::new(32, payload(4, 0)),
        ImageEntry::new(257, payload(4, 0)),
    ];
    assert_eq!(
        encode(&entries),
        Err(ValidationError::InvalidSize { index: 1, size: 257 })
    );
}

//===========================================================================//
