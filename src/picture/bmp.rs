//! 24-bit uncompressed BMP, decoded one row at a time

use super::{Area, PicError, PictureTarget, Placement};
use crate::color::Color;
use crate::storage::PictureFile;
use alloc::vec::Vec;
use log::debug;

const FILE_HEADER_LEN: usize = 14;
const INFO_HEADER_LEN: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Header {
    pixel_offset: u32,
    width: u32,
    height: u32,
    top_down: bool,
}

impl Header {
    fn row_size(&self) -> u64 {
        row_size(self.width)
    }
}

/// Bytes per stored row, padded to 4.
fn row_size(width: u32) -> u64 {
    (width as u64 * 3 + 3) & !3
}

fn le_u16(b: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([b[at], b[at + 1]])
}

fn le_u32(b: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([b[at], b[at + 1], b[at + 2], b[at + 3]])
}

fn read_header<F: PictureFile + ?Sized>(file: &mut F) -> Result<Header, PicError> {
    let mut head = [0u8; FILE_HEADER_LEN + INFO_HEADER_LEN];
    file.seek(0)?;
    file.read_exact(&mut head[..FILE_HEADER_LEN + 4])?;
    if &head[..2] != b"BM" {
        return Err(PicError::Format);
    }
    let info_len = le_u32(&head, FILE_HEADER_LEN) as usize;
    if info_len < INFO_HEADER_LEN {
        // OS/2 core headers
        return Err(PicError::Unsupported);
    }
    file.read_exact(&mut head[FILE_HEADER_LEN + 4..])?;

    let info = &head[FILE_HEADER_LEN..];
    let width = le_u32(info, 4) as i32;
    let height = le_u32(info, 8) as i32;
    let bpp = le_u16(info, 14);
    let compression = le_u32(info, 16);
    debug!(
        "[BMP] {}x{} {}bpp compression={}",
        width, height, bpp, compression
    );

    if bpp != 24 || compression != 0 {
        return Err(PicError::Unsupported);
    }
    if width <= 0 || height == 0 || height == i32::MIN {
        return Err(PicError::Decode("bad bmp dimensions"));
    }
    let header = Header {
        pixel_offset: le_u32(&head, 10),
        width: width as u32,
        height: height.unsigned_abs(),
        top_down: height < 0,
    };
    // every row must be addressable in a FAT file
    let end = header.pixel_offset as u64 + header.row_size() * header.height as u64;
    if end > u32::MAX as u64 {
        return Err(PicError::Decode("bmp larger than 4 GiB"));
    }
    Ok(header)
}

/// Draw a BMP centred in `area`, cropping whichever axis is larger than it.
pub fn decode<T, F>(target: &mut T, file: &mut F, area: Area) -> Result<(), PicError>
where
    T: PictureTarget + ?Sized,
    F: PictureFile + ?Sized,
{
    let header = read_header(file)?;
    let cols = Placement::center(area.w as u32, header.width);
    let rows = Placement::center(area.h as u32, header.height);

    let visible = cols.visible as usize;
    let mut raw: Vec<u8> = Vec::new();
    raw.try_reserve_exact(visible * 3)
        .map_err(|_| PicError::Memory)?;
    raw.resize(visible * 3, 0);
    let mut line: Vec<Color> = Vec::new();
    line.try_reserve_exact(visible)
        .map_err(|_| PicError::Memory)?;

    let x = area.x + cols.offset as u16;
    for i in 0..rows.visible {
        let image_row = rows.skip + i;
        let stored_row = if header.top_down {
            image_row
        } else {
            header.height - 1 - image_row
        };
        let pos = header.pixel_offset as u64
            + stored_row as u64 * header.row_size()
            + cols.skip as u64 * 3;
        let pos = u32::try_from(pos).map_err(|_| PicError::Decode("bmp offset overflow"))?;
        file.seek(pos)?;
        file.read_exact(&mut raw)?;

        line.clear();
        line.extend(raw.chunks_exact(3).map(|p| Color::from_rgb888(p[2], p[1], p[0])));
        target.fill_row(x, area.y + (rows.offset + i) as u16, &line)?;
    }
    Ok(())
}

/// Build a bottom-up 24-bit BMP from a pixel function returning (r, g, b).
pub fn encode<P>(width: u32, height: u32, pixel: P) -> Result<Vec<u8>, PicError>
where
    P: Fn(u32, u32) -> (u8, u8, u8),
{
    let too_large = PicError::Decode("bmp dimensions too large");
    if width > i32::MAX as u32 || height > i32::MAX as u32 {
        return Err(too_large);
    }
    let row_size = row_size(width);
    let offset = (FILE_HEADER_LEN + INFO_HEADER_LEN) as u32;
    let data_len = row_size
        .checked_mul(height as u64)
        .and_then(|n| u32::try_from(n).ok())
        .ok_or(too_large)?;
    let file_len = offset.checked_add(data_len).ok_or(too_large)?;

    let mut out = Vec::new();
    out.try_reserve_exact(file_len as usize)
        .map_err(|_| PicError::Memory)?;
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&file_len.to_le_bytes());
    out.extend_from_slice(&[0; 4]);
    out.extend_from_slice(&offset.to_le_bytes());

    out.extend_from_slice(&(INFO_HEADER_LEN as u32).to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    out.extend_from_slice(&(height as i32).to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&24u16.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&data_len.to_le_bytes());
    out.extend_from_slice(&2835u32.to_le_bytes());
    out.extend_from_slice(&2835u32.to_le_bytes());
    out.extend_from_slice(&[0; 8]);

    for y in (0..height).rev() {
        let start = out.len();
        for x in 0..width {
            let (r, g, b) = pixel(x, y);
            out.extend_from_slice(&[b, g, r]);
        }
        out.resize(start + row_size as usize, 0);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picture::testing::Frame;
    use crate::storage::{MemStorage, Storage};

    fn run(data: Vec<u8>, frame: &mut Frame, area: Area) -> Result<(), PicError> {
        let mut storage = MemStorage::new();
        storage.insert("T.BMP", data);
        let mut file = storage.open("T.BMP").unwrap();
        decode(frame, &mut file, area)
    }

    /// Distinct colour per coordinate, exact in RGB565.
    fn coord(x: u32, y: u32) -> (u8, u8, u8) {
        ((x * 8) as u8, (y * 4) as u8, 0x80)
    }

    fn coord_color(x: u32, y: u32) -> Color {
        let (r, g, b) = coord(x, y);
        Color::from_rgb888(r, g, b)
    }

    #[test]
    fn two_by_two_matches_source_bytes() {
        let src = [[(0xFF, 0x00, 0x00), (0x00, 0xFF, 0x00)], [(0x00, 0x00, 0xFF), (0x12, 0x34, 0x56)]];
        let data = encode(2, 2, |x, y| src[y as usize][x as usize]).unwrap();
        let mut frame = Frame::new(2, 2);
        run(data, &mut frame, Area::new(0, 0, 2, 2)).unwrap();

        assert_eq!(frame.at(0, 0), Some(Color::RED));
        assert_eq!(frame.at(1, 0), Some(Color::GREEN));
        assert_eq!(frame.at(0, 1), Some(Color::BLUE));
        assert_eq!(frame.at(1, 1), Some(Color(0x11AA)));
    }

    #[test]
    fn larger_image_is_cropped_around_the_centre() {
        let data = encode(8, 6, coord).unwrap();
        let mut frame = Frame::new(10, 10);
        run(data, &mut frame, Area::new(1, 2, 4, 2)).unwrap();

        assert_eq!(frame.written(), 8);
        for j in 0..2u16 {
            for i in 0..4u16 {
                assert_eq!(
                    frame.at(1 + i, 2 + j),
                    Some(coord_color(2 + i as u32, 2 + j as u32))
                );
            }
        }
        // one window per row, only visible columns
        assert_eq!(frame.rows, vec![(1, 2, 4), (1, 3, 4)]);
    }

    #[test]
    fn smaller_image_is_padded_into_the_centre() {
        let data = encode(3, 2, coord).unwrap();
        let mut frame = Frame::new(10, 10);
        run(data, &mut frame, Area::new(1, 1, 8, 6)).unwrap();

        assert_eq!(frame.written(), 6);
        assert_eq!(frame.at(3, 3), Some(coord_color(0, 0)));
        assert_eq!(frame.at(5, 4), Some(coord_color(2, 1)));
        assert_eq!(frame.at(2, 3), None);
    }

    #[test]
    fn top_down_rows_are_supported() {
        let mut data = encode(2, 3, coord).unwrap();
        // flip to top-down: negative height, rows reversed
        data[22..26].copy_from_slice(&(-3i32).to_le_bytes());
        let rows: Vec<Vec<u8>> = data[54..].chunks(8).map(|r| r.to_vec()).collect();
        let flipped: Vec<u8> = rows.into_iter().rev().flatten().collect();
        data.truncate(54);
        data.extend(flipped);

        let mut frame = Frame::new(2, 3);
        run(data, &mut frame, Area::new(0, 0, 2, 3)).unwrap();
        assert_eq!(frame.at(0, 0), Some(coord_color(0, 0)));
        assert_eq!(frame.at(1, 2), Some(coord_color(1, 2)));
    }

    #[test]
    fn rejects_other_depths_and_bad_magic() {
        let mut data = encode(2, 2, coord).unwrap();
        data[28] = 1;
        let mut frame = Frame::new(4, 4);
        assert_eq!(run(data, &mut frame, Area::new(0, 0, 4, 4)), Err(PicError::Unsupported));

        let mut data = encode(2, 2, coord).unwrap();
        data[30] = 1;
        assert_eq!(run(data, &mut frame, Area::new(0, 0, 4, 4)), Err(PicError::Unsupported));

        let mut data = encode(2, 2, coord).unwrap();
        data[0] = b'X';
        assert_eq!(run(data, &mut frame, Area::new(0, 0, 4, 4)), Err(PicError::Format));
        assert_eq!(frame.written(), 0);
    }

    #[test]
    fn truncated_pixels_are_a_decode_error() {
        let mut data = encode(4, 4, coord).unwrap();
        data.truncate(54 + 12 * 2);
        let mut frame = Frame::new(4, 4);
        let err = run(data, &mut frame, Area::new(0, 0, 4, 4));
        assert!(matches!(err, Err(PicError::Decode(_))));
    }

    #[test]
    fn width_with_overflowing_row_size_is_rejected() {
        let mut data = encode(2, 2, coord).unwrap();
        data[18..22].copy_from_slice(&0x7FFF_FFFFu32.to_le_bytes());
        let mut frame = Frame::new(4, 4);
        let err = run(data, &mut frame, Area::new(0, 0, 4, 4));
        assert!(matches!(err, Err(PicError::Decode(_))));
        assert_eq!(frame.written(), 0);

        // 2^31 - 1 rows of 4 bytes cannot be addressed either
        let mut data = encode(1, 1, coord).unwrap();
        data[22..26].copy_from_slice(&i32::MAX.to_le_bytes());
        let err = run(data, &mut frame, Area::new(0, 0, 4, 4));
        assert!(matches!(err, Err(PicError::Decode(_))));
    }

    #[test]
    fn encode_refuses_unaddressable_sizes() {
        assert!(matches!(encode(0x7FFF_FFFF, 1, |_, _| (0, 0, 0)), Err(PicError::Decode(_))));
        assert!(matches!(encode(u32::MAX, 1, |_, _| (0, 0, 0)), Err(PicError::Decode(_))));
        assert!(matches!(encode(40_000, 40_000, |_, _| (0, 0, 0)), Err(PicError::Decode(_))));
        assert_eq!(encode(3, 1, coord).unwrap().len(), 54 + 12);
    }
}
