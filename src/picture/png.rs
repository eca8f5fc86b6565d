//! Streaming PNG decoder
//!
//! The file is read through a fixed [`FEED_LEN`]-byte buffer. [`PngDecoder::feed`]
//! consumes as much as it can and reports how many bytes it used; the caller
//! keeps the unused tail at the front of the buffer for the next round. IDAT
//! data is inflated as it arrives, so only two scanlines are held at a time.
//!
//! All colour types and bit depths are accepted, as is Adam7 interlacing.
//! Alpha is dropped and gamma is not applied.

use super::{Area, Canvas, PicError, PictureTarget};
use crate::color::Color;
use crate::storage::PictureFile;
use alloc::boxed::Box;
use alloc::vec::Vec;
use crc::{Crc, Digest, CRC_32_ISO_HDLC};
use log::debug;
use miniz_oxide::inflate::stream::{inflate, InflateState};
use miniz_oxide::{DataFormat, MZError, MZFlush, MZStatus};

pub const FEED_LEN: usize = 1024;

/// Largest accepted image side
pub const MAX_DIMENSION: u32 = 8192;

const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

static PNG_CRC: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

const ADAM7: [(u32, u32, u32, u32); 7] = [
    (0, 0, 8, 8),
    (4, 0, 8, 8),
    (0, 4, 4, 8),
    (2, 0, 4, 4),
    (0, 2, 2, 4),
    (1, 0, 2, 2),
    (0, 1, 1, 2),
];

const PROGRESSIVE: [(u32, u32, u32, u32); 1] = [(0, 0, 1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub width: u32,
    pub height: u32,
    pub depth: u8,
    pub color_type: u8,
    pub interlaced: bool,
}

impl Header {
    fn parse(b: &[u8]) -> Result<Self, PicError> {
        let width = u32::from_be_bytes([b[0], b[1], b[2], b[3]]);
        let height = u32::from_be_bytes([b[4], b[5], b[6], b[7]]);
        let (depth, color_type) = (b[8], b[9]);
        let (compression, filter, interlace) = (b[10], b[11], b[12]);

        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(PicError::Decode("bad png dimensions"));
        }
        let depth_ok = match color_type {
            0 => matches!(depth, 1 | 2 | 4 | 8 | 16),
            3 => matches!(depth, 1 | 2 | 4 | 8),
            2 | 4 | 6 => matches!(depth, 8 | 16),
            _ => false,
        };
        if !depth_ok || compression != 0 || filter != 0 || interlace > 1 {
            return Err(PicError::Unsupported);
        }
        Ok(Self {
            width,
            height,
            depth,
            color_type,
            interlaced: interlace == 1,
        })
    }

    fn channels(&self) -> usize {
        match self.color_type {
            2 => 3,
            4 => 2,
            6 => 4,
            _ => 1,
        }
    }

    fn bits_per_pixel(&self) -> usize {
        self.channels() * self.depth as usize
    }

    /// Byte distance to the corresponding byte of the previous pixel.
    fn filter_stride(&self) -> usize {
        (self.bits_per_pixel() / 8).max(1)
    }

    fn line_bytes(&self, width: u32) -> usize {
        (width as usize * self.bits_per_pixel()).div_ceil(8)
    }

    fn passes(&self) -> &'static [(u32, u32, u32, u32)] {
        if self.interlaced { &ADAM7 } else { &PROGRESSIVE }
    }
}

/// Receives decoded pixels
pub trait PngSink {
    /// Called once the header is known, before any pixel.
    fn init(&mut self, header: &Header) -> Result<(), PicError>;

    fn draw(&mut self, x: u32, y: u32, rgb: [u8; 3]);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Signature,
    ChunkHeader,
    ChunkData,
    ChunkCrc,
    End,
}

pub struct PngDecoder {
    stage: Stage,
    chunk_type: [u8; 4],
    chunk_left: u32,
    crc: Digest<'static, u32>,
    header: Option<Header>,
    palette: Vec<[u8; 3]>,
    inflater: Option<Box<InflateState>>,
    inflate_done: bool,
    line: Vec<u8>,
    prev: Vec<u8>,
    line_len: usize,
    filled: usize,
    pass: usize,
    pass_width: u32,
    pass_height: u32,
    pass_row: u32,
}

impl Default for PngDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl PngDecoder {
    pub fn new() -> Self {
        Self {
            stage: Stage::Signature,
            chunk_type: [0; 4],
            chunk_left: 0,
            crc: PNG_CRC.digest(),
            header: None,
            palette: Vec::new(),
            inflater: None,
            inflate_done: false,
            line: Vec::new(),
            prev: Vec::new(),
            line_len: 0,
            filled: 0,
            pass: 0,
            pass_width: 0,
            pass_height: 0,
            pass_row: 0,
        }
    }

    pub fn header(&self) -> Option<&Header> {
        self.header.as_ref()
    }

    /// IEND seen.
    pub fn is_done(&self) -> bool {
        self.stage == Stage::End
    }

    fn image_complete(&self) -> bool {
        self.header
            .map(|h| self.pass >= h.passes().len())
            .unwrap_or(false)
    }

    /// Consume as much of `data` as possible; returns the number of bytes used.
    pub fn feed<S: PngSink + ?Sized>(&mut self, data: &[u8], sink: &mut S) -> Result<usize, PicError> {
        let mut pos = 0;
        loop {
            let rest = &data[pos..];
            match self.stage {
                Stage::Signature => {
                    if rest.len() < SIGNATURE.len() {
                        return Ok(pos);
                    }
                    if rest[..8] != SIGNATURE {
                        return Err(PicError::Format);
                    }
                    pos += 8;
                    self.stage = Stage::ChunkHeader;
                }
                Stage::ChunkHeader => {
                    if rest.len() < 8 {
                        return Ok(pos);
                    }
                    let len = u32::from_be_bytes([rest[0], rest[1], rest[2], rest[3]]);
                    self.chunk_type.copy_from_slice(&rest[4..8]);
                    self.begin_chunk(len)?;
                    self.crc = PNG_CRC.digest();
                    self.crc.update(&self.chunk_type);
                    pos += 8;
                    self.stage = Stage::ChunkData;
                }
                Stage::ChunkData => {
                    let avail = rest.len().min(self.chunk_left as usize);
                    let kind = self.chunk_type;
                    let used = match &kind {
                        b"IHDR" | b"PLTE" => {
                            // needed whole
                            if avail < self.chunk_left as usize {
                                return Ok(pos);
                            }
                            self.small_chunk(&rest[..avail], sink)?;
                            avail
                        }
                        b"IDAT" => {
                            self.inflate_chunk(&rest[..avail], sink)?;
                            avail
                        }
                        _ => avail,
                    };
                    self.crc.update(&rest[..used]);
                    pos += used;
                    self.chunk_left -= used as u32;
                    if self.chunk_left == 0 {
                        self.stage = Stage::ChunkCrc;
                    } else {
                        return Ok(pos);
                    }
                }
                Stage::ChunkCrc => {
                    if rest.len() < 4 {
                        return Ok(pos);
                    }
                    let expected = u32::from_be_bytes([rest[0], rest[1], rest[2], rest[3]]);
                    let digest = core::mem::replace(&mut self.crc, PNG_CRC.digest());
                    if digest.finalize() != expected {
                        return Err(PicError::Decode("png crc mismatch"));
                    }
                    pos += 4;
                    if &self.chunk_type == b"IEND" {
                        if !self.image_complete() {
                            return Err(PicError::Decode("png image data incomplete"));
                        }
                        self.stage = Stage::End;
                    } else {
                        self.stage = Stage::ChunkHeader;
                    }
                }
                Stage::End => return Ok(data.len()),
            }
        }
    }

    /// Validate a chunk header against what has been seen so far.
    fn begin_chunk(&mut self, len: u32) -> Result<(), PicError> {
        if len > 0x7FFF_FFFF {
            return Err(PicError::Decode("bad png chunk length"));
        }
        self.chunk_left = len;
        let kind = &self.chunk_type;
        if self.header.is_none() && kind != b"IHDR" {
            return Err(PicError::Decode("png missing IHDR"));
        }
        match kind {
            b"IHDR" if self.header.is_some() || len != 13 => {
                Err(PicError::Decode("bad png IHDR"))
            }
            b"IDAT" => {
                let Some(header) = self.header else {
                    return Err(PicError::Decode("png missing IHDR"));
                };
                if header.color_type == 3 && self.palette.is_empty() {
                    return Err(PicError::Decode("png missing palette"));
                }
                Ok(())
            }
            b"IHDR" | b"PLTE" | b"IEND" => Ok(()),
            _ if kind[0] & 0x20 == 0 => {
                debug!("[PNG] unknown critical chunk {:?}", kind);
                Err(PicError::Unsupported)
            }
            _ => Ok(()),
        }
    }

    fn small_chunk<S: PngSink + ?Sized>(&mut self, data: &[u8], sink: &mut S) -> Result<(), PicError> {
        if &self.chunk_type == b"PLTE" {
            if data.len() % 3 != 0 || data.len() > 256 * 3 || data.is_empty() {
                return Err(PicError::Decode("bad png palette"));
            }
            self.palette.clear();
            self.palette
                .try_reserve_exact(data.len() / 3)
                .map_err(|_| PicError::Memory)?;
            self.palette
                .extend(data.chunks_exact(3).map(|c| [c[0], c[1], c[2]]));
            return Ok(());
        }

        let header = Header::parse(data)?;
        debug!(
            "[PNG] {}x{} depth {} type {} interlaced {}",
            header.width, header.height, header.depth, header.color_type, header.interlaced
        );
        let max_line = header.line_bytes(header.width);
        for buf in [&mut self.line, &mut self.prev] {
            buf.try_reserve_exact(max_line + 1)
                .map_err(|_| PicError::Memory)?;
            buf.resize(max_line + 1, 0);
        }
        self.header = Some(header);
        self.inflater = Some(InflateState::new_boxed(DataFormat::Zlib));
        sink.init(&header)?;
        self.pass = 0;
        self.start_pass();
        Ok(())
    }

    /// Move to the next pass that has pixels, from `self.pass` on.
    fn start_pass(&mut self) {
        let Some(header) = self.header else {
            return;
        };
        let passes = header.passes();
        while self.pass < passes.len() {
            let (x0, y0, dx, dy) = passes[self.pass];
            let w = (header.width + dx - 1 - x0) / dx;
            let h = (header.height + dy - 1 - y0) / dy;
            if header.width > x0 && header.height > y0 && w > 0 && h > 0 {
                self.pass_width = w;
                self.pass_height = h;
                self.pass_row = 0;
                self.filled = 0;
                self.line_len = 1 + header.line_bytes(w);
                self.prev[..self.line_len].fill(0);
                return;
            }
            self.pass += 1;
        }
    }

    fn inflate_chunk<S: PngSink + ?Sized>(&mut self, mut input: &[u8], sink: &mut S) -> Result<(), PicError> {
        let mut out = [0u8; 512];
        while !self.inflate_done {
            let Some(state) = self.inflater.as_mut() else {
                return Err(PicError::Decode("png missing IHDR"));
            };
            let res = inflate(state, input, &mut out, MZFlush::None);
            input = &input[res.bytes_consumed..];
            self.push_bytes(&out[..res.bytes_written], sink)?;

            match res.status {
                Ok(MZStatus::StreamEnd) => self.inflate_done = true,
                Ok(_) | Err(MZError::Buf) => {}
                Err(_) => return Err(PicError::Decode("bad png zlib data")),
            }
            let stalled = res.bytes_consumed == 0 && res.bytes_written == 0;
            if input.is_empty() && (stalled || res.bytes_written < out.len()) {
                break;
            }
            if stalled {
                return Err(PicError::Decode("png inflate stalled"));
            }
        }
        Ok(())
    }

    fn push_bytes<S: PngSink + ?Sized>(&mut self, mut data: &[u8], sink: &mut S) -> Result<(), PicError> {
        while !data.is_empty() && !self.image_complete() {
            let n = (self.line_len - self.filled).min(data.len());
            self.line[self.filled..self.filled + n].copy_from_slice(&data[..n]);
            self.filled += n;
            data = &data[n..];
            if self.filled == self.line_len {
                self.finish_row(sink)?;
            }
        }
        Ok(())
    }

    fn finish_row<S: PngSink + ?Sized>(&mut self, sink: &mut S) -> Result<(), PicError> {
        let Some(header) = self.header else {
            return Err(PicError::Decode("png missing IHDR"));
        };
        let len = self.line_len;
        let kind = self.line[0];
        unfilter(kind, &mut self.line[1..len], &self.prev[1..len], header.filter_stride())?;

        let (x0, y0, dx, dy) = header.passes()[self.pass];
        let y = y0 + self.pass_row * dy;
        let row = &self.line[1..len];
        for i in 0..self.pass_width as usize {
            let rgb = sample(&header, &self.palette, row, i)?;
            sink.draw(x0 + i as u32 * dx, y, rgb);
        }

        self.prev[1..len].copy_from_slice(&self.line[1..len]);
        self.filled = 0;
        self.pass_row += 1;
        if self.pass_row == self.pass_height {
            self.pass += 1;
            self.start_pass();
        }
        Ok(())
    }
}

fn paeth(a: u8, b: u8, c: u8) -> u8 {
    let p = a as i16 + b as i16 - c as i16;
    let (pa, pb, pc) = ((p - a as i16).abs(), (p - b as i16).abs(), (p - c as i16).abs());
    if pa <= pb && pa <= pc {
        a
    } else if pb <= pc {
        b
    } else {
        c
    }
}

fn unfilter(kind: u8, cur: &mut [u8], prev: &[u8], bpp: usize) -> Result<(), PicError> {
    match kind {
        0 => {}
        1 => {
            for i in bpp..cur.len() {
                cur[i] = cur[i].wrapping_add(cur[i - bpp]);
            }
        }
        2 => {
            for (c, p) in cur.iter_mut().zip(prev) {
                *c = c.wrapping_add(*p);
            }
        }
        3 => {
            for i in 0..cur.len() {
                let left = if i >= bpp { cur[i - bpp] } else { 0 };
                cur[i] = cur[i].wrapping_add(((left as u16 + prev[i] as u16) / 2) as u8);
            }
        }
        4 => {
            for i in 0..cur.len() {
                let (left, up_left) = if i >= bpp {
                    (cur[i - bpp], prev[i - bpp])
                } else {
                    (0, 0)
                };
                cur[i] = cur[i].wrapping_add(paeth(left, prev[i], up_left));
            }
        }
        _ => return Err(PicError::Decode("bad png filter")),
    }
    Ok(())
}

/// Sample `i` of a row, high byte only for 16-bit data.
fn sample_bits(row: &[u8], i: usize, depth: u8) -> u8 {
    match depth {
        8 => row[i],
        16 => row[i * 2],
        d => {
            let bit = i * d as usize;
            let shift = 8 - d as usize - bit % 8;
            (row[bit / 8] >> shift) & ((1u8 << d) - 1)
        }
    }
}

fn sample(header: &Header, palette: &[[u8; 3]], row: &[u8], i: usize) -> Result<[u8; 3], PicError> {
    let step = if header.depth == 16 { 2 } else { 1 };
    let channels = header.channels();
    Ok(match header.color_type {
        0 => {
            let v = sample_bits(row, i, header.depth);
            let v = match header.depth {
                1 => v * 0xFF,
                2 => v * 0x55,
                4 => v * 0x11,
                _ => v,
            };
            [v, v, v]
        }
        3 => {
            let idx = sample_bits(row, i, header.depth) as usize;
            *palette.get(idx).ok_or(PicError::Decode("png palette index"))?
        }
        4 => {
            let v = row[i * channels * step];
            [v, v, v]
        }
        _ => {
            let base = i * channels * step;
            [row[base], row[base + step], row[base + 2 * step]]
        }
    })
}

/// Collects pixels into an area-sized canvas, shrinking images that do not fit.
struct AreaSink {
    area: Area,
    canvas: Option<Canvas>,
    num: u64,
    den: u64,
    image_w: u32,
    image_h: u32,
}

impl AreaSink {
    fn new(area: Area) -> Self {
        Self {
            area,
            canvas: None,
            num: 1,
            den: 1,
            image_w: 0,
            image_h: 0,
        }
    }

    fn flush<T: PictureTarget + ?Sized>(&self, target: &mut T) -> Result<(), PicError> {
        match &self.canvas {
            Some(canvas) => canvas.flush(target, self.area, self.image_w, self.image_h),
            None => Err(PicError::Decode("png without image")),
        }
    }
}

impl PngSink for AreaSink {
    fn init(&mut self, header: &Header) -> Result<(), PicError> {
        let (aw, ah) = (self.area.w as u64, self.area.h as u64);
        let (iw, ih) = (header.width as u64, header.height as u64);
        if iw > aw || ih > ah {
            // smaller of aw/iw and ah/ih
            (self.num, self.den) = if aw * ih <= ah * iw { (aw, iw) } else { (ah, ih) };
        }
        self.image_w = (iw * self.num / self.den) as u32;
        self.image_h = (ih * self.num / self.den) as u32;
        debug!(
            "[PNG] reduced to {}x{} in {}x{}",
            self.image_w, self.image_h, aw, ah
        );
        self.canvas = Some(Canvas::new(self.area.w, self.area.h)?);
        Ok(())
    }

    fn draw(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let x = (x as u64 * self.num / self.den) as u32;
        let y = (y as u64 * self.num / self.den) as u32;
        if let Some(canvas) = self.canvas.as_mut() {
            canvas.put(x, y, Color::from_rgb888(rgb[0], rgb[1], rgb[2]));
        }
    }
}

/// Stream a PNG from `file` through `decoder`, keeping unconsumed bytes
/// between reads.
fn pump<F, S>(file: &mut F, decoder: &mut PngDecoder, sink: &mut S) -> Result<(), PicError>
where
    F: PictureFile + ?Sized,
    S: PngSink + ?Sized,
{
    let mut buf = [0u8; FEED_LEN];
    let mut remain = 0;
    loop {
        if remain >= buf.len() {
            return Err(PicError::BufferExceeded);
        }
        let len = file.read(&mut buf[remain..])?;
        if len == 0 {
            break;
        }
        let fed = decoder.feed(&buf[..remain + len], sink)?;
        remain = remain + len - fed;
        if remain > 0 {
            buf.copy_within(fed..fed + remain, 0);
        }
        if decoder.is_done() {
            break;
        }
    }
    if decoder.is_done() {
        Ok(())
    } else {
        Err(PicError::Decode("truncated png"))
    }
}

pub fn decode<T, F>(target: &mut T, file: &mut F, area: Area) -> Result<(), PicError>
where
    T: PictureTarget + ?Sized,
    F: PictureFile + ?Sized,
{
    file.seek(0)?;
    let mut decoder = PngDecoder::new();
    let mut sink = AreaSink::new(area);
    pump(file, &mut decoder, &mut sink)?;
    drop(decoder);
    sink.flush(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picture::testing::Frame;
    use crate::storage::{MemStorage, Storage};
    use miniz_oxide::deflate::compress_to_vec_zlib;

    const PYTHON_PNG: &[u8] = include_bytes!("../../tests/fixtures/python.png");
    const PYTHON_PPM: &[u8] = include_bytes!("../../tests/fixtures/python.ppm");

    fn chunk(out: &mut Vec<u8>, kind: &[u8; 4], data: &[u8]) {
        out.extend_from_slice(&(data.len() as u32).to_be_bytes());
        out.extend_from_slice(kind);
        out.extend_from_slice(data);
        let mut digest = PNG_CRC.digest();
        digest.update(kind);
        digest.update(data);
        out.extend_from_slice(&digest.finalize().to_be_bytes());
    }

    /// Assemble a PNG from already filtered scanline bytes.
    fn build(w: u32, h: u32, depth: u8, color_type: u8, interlace: u8, palette: Option<&[u8]>, raw: &[u8]) -> Vec<u8> {
        let mut out = SIGNATURE.to_vec();
        let mut ihdr = Vec::new();
        ihdr.extend_from_slice(&w.to_be_bytes());
        ihdr.extend_from_slice(&h.to_be_bytes());
        ihdr.extend_from_slice(&[depth, color_type, 0, 0, interlace]);
        chunk(&mut out, b"IHDR", &ihdr);
        if let Some(p) = palette {
            chunk(&mut out, b"PLTE", p);
        }
        chunk(&mut out, b"tEXt", b"Comment\0test");
        let z = compress_to_vec_zlib(raw, 6);
        // split IDAT to exercise chunk boundaries
        let mid = z.len() / 2;
        chunk(&mut out, b"IDAT", &z[..mid]);
        chunk(&mut out, b"IDAT", &z[mid..]);
        chunk(&mut out, b"IEND", &[]);
        out
    }

    /// Forward filter of one scanline, for building test images.
    fn filter_row(kind: u8, cur: &[u8], prev: &[u8], bpp: usize) -> Vec<u8> {
        let mut out = vec![kind];
        for i in 0..cur.len() {
            let a = if i >= bpp { cur[i - bpp] } else { 0 };
            let b = prev[i];
            let c = if i >= bpp { prev[i - bpp] } else { 0 };
            let pred = match kind {
                0 => 0,
                1 => a,
                2 => b,
                3 => ((a as u16 + b as u16) / 2) as u8,
                _ => paeth(a, b, c),
            };
            out.push(cur[i].wrapping_sub(pred));
        }
        out
    }

    fn rgb_at(x: u32, y: u32) -> [u8; 3] {
        [(x * 16) as u8, (y * 32) as u8, ((x + y) * 8) as u8]
    }

    fn run(data: Vec<u8>, area: Area) -> (Frame, Result<(), PicError>) {
        let mut frame = Frame::new(area.x + area.w, area.y + area.h);
        let mut storage = MemStorage::new();
        storage.insert("T.PNG", data);
        let mut file = storage.open("T.PNG").unwrap();
        let res = decode(&mut frame, &mut file, area);
        (frame, res)
    }

    fn expect_rgb(frame: &Frame, x: u16, y: u16, rgb: [u8; 3]) {
        assert_eq!(
            frame.at(x, y),
            Some(Color::from_rgb888(rgb[0], rgb[1], rgb[2])),
            "pixel ({}, {})",
            x,
            y
        );
    }

    #[test]
    fn palette_fixture_matches_reference() {
        let (frame, res) = run(PYTHON_PNG.to_vec(), Area::new(0, 0, 16, 16));
        res.unwrap();
        let body = &PYTHON_PPM[PYTHON_PPM.len() - 16 * 16 * 3..];
        for y in 0..16u16 {
            for x in 0..16u16 {
                let p = &body[(y as usize * 16 + x as usize) * 3..];
                expect_rgb(&frame, x, y, [p[0], p[1], p[2]]);
            }
        }
    }

    #[test]
    fn every_filter_type_round_trips() {
        let (w, h) = (5u32, 5u32);
        let mut raw = Vec::new();
        let mut prev = vec![0u8; w as usize * 3];
        for y in 0..h {
            let cur: Vec<u8> = (0..w).flat_map(|x| rgb_at(x, y)).collect();
            raw.extend(filter_row(y as u8, &cur, &prev, 3));
            prev = cur;
        }
        let (frame, res) = run(build(w, h, 8, 2, 0, None, &raw), Area::new(0, 0, 5, 5));
        res.unwrap();
        for y in 0..h {
            for x in 0..w {
                expect_rgb(&frame, x as u16, y as u16, rgb_at(x, y));
            }
        }
    }

    #[test]
    fn gray_and_alpha_colour_types() {
        // 1-bit gray: 1 0 1 0 1 0 1 0 1 -> two bytes per row
        let raw = [0, 0b1010_1010, 0b1000_0000];
        let (frame, res) = run(build(9, 1, 1, 0, 0, None, &raw), Area::new(0, 0, 9, 1));
        res.unwrap();
        expect_rgb(&frame, 0, 0, [255; 3]);
        expect_rgb(&frame, 1, 0, [0; 3]);
        expect_rgb(&frame, 8, 0, [255; 3]);

        // 4-bit gray
        let raw = [0, 0x3F];
        let (frame, res) = run(build(2, 1, 4, 0, 0, None, &raw), Area::new(0, 0, 2, 1));
        res.unwrap();
        expect_rgb(&frame, 0, 0, [0x33; 3]);
        expect_rgb(&frame, 1, 0, [0xFF; 3]);

        // 16-bit gray + alpha
        let raw = [0, 0x80, 0x01, 0x00, 0x00, 0x40, 0xFF, 0xFF, 0xFF];
        let (frame, res) = run(build(2, 1, 16, 4, 0, None, &raw), Area::new(0, 0, 2, 1));
        res.unwrap();
        expect_rgb(&frame, 0, 0, [0x80; 3]);
        expect_rgb(&frame, 1, 0, [0x40; 3]);

        // 8-bit RGBA, alpha dropped
        let raw = [0, 0x12, 0x34, 0x56, 0x00, 0xFF, 0x00, 0x00, 0xFF];
        let (frame, res) = run(build(2, 1, 8, 6, 0, None, &raw), Area::new(0, 0, 2, 1));
        res.unwrap();
        expect_rgb(&frame, 0, 0, [0x12, 0x34, 0x56]);
        expect_rgb(&frame, 1, 0, [0xFF, 0, 0]);

        // 16-bit RGB
        let raw = [0, 0xF8, 0x00, 0x04, 0x00, 0x08, 0x00];
        let (frame, res) = run(build(1, 1, 16, 2, 0, None, &raw), Area::new(0, 0, 1, 1));
        res.unwrap();
        expect_rgb(&frame, 0, 0, [0xF8, 0x04, 0x08]);
    }

    #[test]
    fn packed_palette_indices() {
        let palette = [0, 0, 0, 255, 0, 0, 0, 255, 0, 0, 0, 255];
        // 2-bit indices 0 1 2 3 | 3
        let raw = [0, 0b0001_1011, 0b1100_0000];
        let (frame, res) = run(build(5, 1, 2, 3, 0, Some(&palette), &raw), Area::new(0, 0, 5, 1));
        res.unwrap();
        expect_rgb(&frame, 0, 0, [0, 0, 0]);
        expect_rgb(&frame, 1, 0, [255, 0, 0]);
        expect_rgb(&frame, 3, 0, [0, 0, 255]);
        expect_rgb(&frame, 4, 0, [0, 0, 255]);

        // index past the palette
        let raw = [0, 0b1100_0000];
        let (_, res) = run(build(1, 1, 2, 3, 0, Some(&palette[..6]), &raw), Area::new(0, 0, 1, 1));
        assert!(matches!(res, Err(PicError::Decode(_))));
    }

    #[test]
    fn adam7_matches_progressive() {
        let (w, h) = (11u32, 9u32);
        let mut raw = Vec::new();
        for &(x0, y0, dx, dy) in ADAM7.iter() {
            if x0 >= w || y0 >= h {
                continue;
            }
            let mut y = y0;
            while y < h {
                raw.push(0);
                let mut x = x0;
                while x < w {
                    raw.extend_from_slice(&rgb_at(x, y));
                    x += dx;
                }
                y += dy;
            }
        }
        let (frame, res) = run(build(w, h, 8, 2, 1, None, &raw), Area::new(0, 0, 11, 9));
        res.unwrap();
        assert_eq!(frame.written(), (w * h) as usize);
        for y in 0..h {
            for x in 0..w {
                expect_rgb(&frame, x as u16, y as u16, rgb_at(x, y));
            }
        }
    }

    #[test]
    fn large_image_is_reduced_and_centred() {
        let (w, h) = (8u32, 4u32);
        let mut raw = Vec::new();
        for y in 0..h {
            raw.push(0);
            for x in 0..w {
                raw.extend_from_slice(&rgb_at(x, y));
            }
        }
        let (frame, res) = run(build(w, h, 8, 2, 0, None, &raw), Area::new(0, 0, 4, 4));
        res.unwrap();
        // scale 1/2 -> 4x2, rows centred at y = 1
        assert_eq!(frame.rows, vec![(0, 1, 4), (0, 2, 4)]);
        expect_rgb(&frame, 0, 1, rgb_at(1, 1));
        expect_rgb(&frame, 3, 2, rgb_at(7, 3));
    }

    #[test]
    fn small_image_is_centred_in_area() {
        let raw = [0, 1, 2, 3];
        let (frame, res) = run(build(1, 1, 8, 2, 0, None, &raw), Area::new(2, 3, 5, 5));
        res.unwrap();
        assert_eq!(frame.rows, vec![(4, 5, 1)]);
    }

    #[test]
    fn crc_mismatch_is_rejected() {
        let mut data = PYTHON_PNG.to_vec();
        // last byte of the IHDR crc
        data[8 + 8 + 13 + 3] ^= 0xFF;
        let (frame, res) = run(data, Area::new(0, 0, 16, 16));
        assert_eq!(res, Err(PicError::Decode("png crc mismatch")));
        assert_eq!(frame.written(), 0);
    }

    #[test]
    fn bad_signature_and_truncation() {
        let mut data = PYTHON_PNG.to_vec();
        data[1] = b'X';
        assert_eq!(run(data, Area::new(0, 0, 16, 16)).1, Err(PicError::Format));

        let data = PYTHON_PNG[..PYTHON_PNG.len() - 20].to_vec();
        assert_eq!(run(data, Area::new(0, 0, 16, 16)).1, Err(PicError::Decode("truncated png")));
    }

    #[test]
    fn unknown_critical_chunk_is_unsupported() {
        let mut out = SIGNATURE.to_vec();
        chunk(&mut out, b"IHDR", &[0, 0, 0, 1, 0, 0, 0, 1, 8, 0, 0, 0, 0]);
        chunk(&mut out, b"ABCD", &[1, 2, 3]);
        assert_eq!(run(out, Area::new(0, 0, 1, 1)).1, Err(PicError::Unsupported));
    }

    #[test]
    fn oversized_atomic_chunk_exceeds_feed_buffer() {
        let mut out = SIGNATURE.to_vec();
        chunk(&mut out, b"IHDR", &[0, 0, 0, 1, 0, 0, 0, 1, 8, 3, 0, 0, 0]);
        chunk(&mut out, b"PLTE", &[0u8; 1500]);
        chunk(&mut out, b"IEND", &[]);
        assert_eq!(run(out, Area::new(0, 0, 1, 1)).1, Err(PicError::BufferExceeded));
    }

    #[test]
    fn byte_at_a_time_feeding_gives_same_pixels() {
        struct Collect(Vec<(u32, u32, [u8; 3])>);
        impl PngSink for Collect {
            fn init(&mut self, _: &Header) -> Result<(), PicError> {
                Ok(())
            }
            fn draw(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
                self.0.push((x, y, rgb));
            }
        }

        let mut whole = Collect(Vec::new());
        let mut decoder = PngDecoder::new();
        assert_eq!(decoder.feed(PYTHON_PNG, &mut whole).unwrap(), PYTHON_PNG.len());
        assert!(decoder.is_done());

        let mut slow = Collect(Vec::new());
        let mut decoder = PngDecoder::new();
        let mut pending = Vec::new();
        for &b in PYTHON_PNG {
            pending.push(b);
            let fed = decoder.feed(&pending, &mut slow).unwrap();
            pending.drain(..fed);
            // PLTE is the largest unit held back
            assert!(pending.len() <= 453 + 8);
        }
        assert!(decoder.is_done());
        assert_eq!(decoder.header().map(|h| (h.width, h.height)), Some((16, 16)));
        assert_eq!(whole.0.len(), 256);
        assert_eq!(whole.0, slow.0);
    }
}
