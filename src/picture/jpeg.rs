//! Baseline JPEG
//!
//! The file is pulled through a [`JpegFeed`]: marker segments byte by byte,
//! entropy data in small chunks. APPn/COM payloads are seeked over (EXIF
//! thumbnails can be larger than the picture). Every MCU is decoded, shrunk by
//! 1, 1/2, 1/4 or 1/8 and written straight into a canvas the size of the
//! visible part of the area, so memory follows the area and not the image.

use super::{Area, Canvas, PicError, PictureTarget, Placement};
use crate::color::Color;
use crate::storage::PictureFile;
use alloc::vec::Vec;
use log::{debug, warn};

const READ_CHUNK: usize = 512;

const M_SOF0: u8 = 0xC0;
const M_SOF1: u8 = 0xC1;
const M_DHT: u8 = 0xC4;
const M_SOI: u8 = 0xD8;
const M_EOI: u8 = 0xD9;
const M_SOS: u8 = 0xDA;
const M_DQT: u8 = 0xDB;
const M_DRI: u8 = 0xDD;
const M_APP14: u8 = 0xEE;
const M_COM: u8 = 0xFE;

/// Natural-order index of the n-th zigzag coefficient
#[rustfmt::skip]
const ZIGZAG: [u8; 64] = [
     0,  1,  8, 16,  9,  2,  3, 10,
    17, 24, 32, 25, 18, 11,  4,  5,
    12, 19, 26, 33, 40, 48, 41, 34,
    27, 20, 13,  6,  7, 14, 21, 28,
    35, 42, 49, 56, 57, 50, 43, 36,
    29, 22, 15, 23, 30, 37, 44, 51,
    58, 59, 52, 45, 38, 31, 39, 46,
    53, 60, 61, 54, 47, 55, 62, 63,
];

/// `4096 * C(u) / 2 * cos((2x + 1) u pi / 16)`, indexed [x][u]
const IDCT: [[i32; 8]; 8] = [
    [1448, 2009, 1892, 1703, 1448, 1138, 784, 400],
    [1448, 1703, 784, -400, -1448, -2009, -1892, -1138],
    [1448, 1138, -784, -2009, -1448, 400, 1892, 1703],
    [1448, 400, -1892, -1138, 1448, 1703, -784, -2009],
    [1448, -400, -1892, 1138, 1448, -1703, -784, 2009],
    [1448, -1138, -784, 2009, -1448, -400, 1892, -1703],
    [1448, -1703, 784, 400, -1448, 2009, -1892, 1138],
    [1448, -2009, 1892, -1703, 1448, -1138, 784, -400],
];

/// Byte source for the decoder: reads into a buffer, or seeks forward when
/// no buffer is given.
pub struct JpegFeed<'f, F: PictureFile + ?Sized> {
    file: &'f mut F,
}

impl<'f, F: PictureFile + ?Sized> JpegFeed<'f, F> {
    pub fn new(file: &'f mut F) -> Self {
        Self { file }
    }

    /// Returns the number of bytes read or skipped; short only at end of file.
    pub fn feed(&mut self, buf: Option<&mut [u8]>, len: usize) -> Result<usize, PicError> {
        match buf {
            Some(buf) => {
                let len = len.min(buf.len());
                let mut done = 0;
                while done < len {
                    let n = self.file.read(&mut buf[done..len])?;
                    if n == 0 {
                        break;
                    }
                    done += n;
                }
                Ok(done)
            }
            None => {
                let start = self.file.position();
                self.file.skip(u32::try_from(len).unwrap_or(u32::MAX))?;
                Ok((self.file.position() - start) as usize)
            }
        }
    }

    fn byte(&mut self) -> Result<u8, PicError> {
        let mut b = [0u8; 1];
        match self.feed(Some(&mut b), 1)? {
            1 => Ok(b[0]),
            _ => Err(PicError::Decode("truncated jpeg")),
        }
    }

    fn be_u16(&mut self) -> Result<u16, PicError> {
        Ok(u16::from_be_bytes([self.byte()?, self.byte()?]))
    }

    fn skip_exact(&mut self, len: usize) -> Result<(), PicError> {
        if self.feed(None, len)? != len {
            return Err(PicError::Decode("truncated jpeg"));
        }
        Ok(())
    }
}

/// Canonical Huffman table in the JPEG Annex F form.
struct Huffman {
    maxcode: [i32; 17],
    mincode: [i32; 17],
    valptr: [i32; 17],
    values: Vec<u8>,
}

impl Huffman {
    fn new(counts: &[u8; 16], values: Vec<u8>) -> Result<Self, PicError> {
        let mut table = Self {
            maxcode: [-1; 17],
            mincode: [0; 17],
            valptr: [0; 17],
            values,
        };
        let mut code = 0i32;
        let mut k = 0i32;
        for len in 1..=16 {
            let n = counts[len - 1] as i32;
            if n > 0 {
                table.valptr[len] = k;
                table.mincode[len] = code;
                code += n;
                k += n;
                table.maxcode[len] = code - 1;
            }
            if code > 1 << len {
                return Err(PicError::Decode("bad huffman table"));
            }
            code <<= 1;
        }
        Ok(table)
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Component {
    id: u8,
    h: u8,
    v: u8,
    tq: u8,
    td: u8,
    ta: u8,
}

/// Everything read from the marker segments up to SOS.
struct Header {
    width: u32,
    height: u32,
    components: Vec<Component>,
    quant: [[u16; 64]; 4],
    dc: [Option<Huffman>; 4],
    ac: [Option<Huffman>; 4],
    restart_interval: u16,
    /// Adobe APP14 colour transform, 0 means plain RGB
    transform: Option<u8>,
}

fn read_dqt<F: PictureFile + ?Sized>(
    feed: &mut JpegFeed<'_, F>,
    mut left: usize,
    quant: &mut [[u16; 64]; 4],
) -> Result<(), PicError> {
    while left > 0 {
        let pq_tq = feed.byte()?;
        let wide = pq_tq >> 4 != 0;
        let table = quant
            .get_mut((pq_tq & 0x0F) as usize)
            .ok_or(PicError::Decode("bad quantisation table"))?;
        for q in table.iter_mut() {
            *q = if wide { feed.be_u16()? } else { feed.byte()? as u16 };
        }
        left = left
            .checked_sub(if wide { 129 } else { 65 })
            .ok_or(PicError::Decode("bad quantisation table"))?;
    }
    Ok(())
}

fn read_dht<F: PictureFile + ?Sized>(
    feed: &mut JpegFeed<'_, F>,
    mut left: usize,
    header: &mut Header,
) -> Result<(), PicError> {
    while left > 0 {
        let tc_th = feed.byte()?;
        let mut counts = [0u8; 16];
        for c in counts.iter_mut() {
            *c = feed.byte()?;
        }
        let total: usize = counts.iter().map(|&c| c as usize).sum();
        if total > 256 {
            return Err(PicError::Decode("bad huffman table"));
        }
        let mut values = Vec::new();
        values.try_reserve_exact(total).map_err(|_| PicError::Memory)?;
        for _ in 0..total {
            values.push(feed.byte()?);
        }
        left = left
            .checked_sub(17 + total)
            .ok_or(PicError::Decode("bad huffman table"))?;

        let slot = match tc_th >> 4 {
            0 => header.dc.get_mut((tc_th & 0x0F) as usize),
            1 => header.ac.get_mut((tc_th & 0x0F) as usize),
            _ => None,
        }
        .ok_or(PicError::Decode("bad huffman table"))?;
        *slot = Some(Huffman::new(&counts, values)?);
    }
    Ok(())
}

fn read_sof<F: PictureFile + ?Sized>(feed: &mut JpegFeed<'_, F>, header: &mut Header) -> Result<(), PicError> {
    if feed.byte()? != 8 {
        return Err(PicError::Unsupported);
    }
    header.height = feed.be_u16()? as u32;
    header.width = feed.be_u16()? as u32;
    let count = feed.byte()?;
    if header.height == 0 {
        // height given later by DNL
        return Err(PicError::Unsupported);
    }
    if header.width == 0 {
        return Err(PicError::Decode("jpeg without width"));
    }
    if count != 1 && count != 3 {
        warn!("[JPEG] {} components", count);
        return Err(PicError::Unsupported);
    }
    header.components.clear();
    for _ in 0..count {
        let id = feed.byte()?;
        let hv = feed.byte()?;
        let tq = feed.byte()?;
        let (h, v) = (hv >> 4, hv & 0x0F);
        if !(1..=2).contains(&h) || !(1..=2).contains(&v) || tq > 3 {
            return Err(PicError::Unsupported);
        }
        header.components.push(Component {
            id,
            h,
            v,
            tq,
            ..Component::default()
        });
    }
    if count == 1 {
        // a single-component scan is not interleaved
        header.components[0].h = 1;
        header.components[0].v = 1;
    }
    Ok(())
}

fn read_sos<F: PictureFile + ?Sized>(feed: &mut JpegFeed<'_, F>, header: &mut Header) -> Result<(), PicError> {
    if header.components.is_empty() {
        return Err(PicError::Decode("scan before frame"));
    }
    let count = feed.byte()? as usize;
    if count != header.components.len() {
        return Err(PicError::Unsupported);
    }
    for _ in 0..count {
        let id = feed.byte()?;
        let tables = feed.byte()?;
        let comp = header
            .components
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(PicError::Decode("unknown scan component"))?;
        comp.td = (tables >> 4).min(3);
        comp.ta = (tables & 0x0F).min(3);
    }
    // spectral selection and approximation, fixed for baseline
    feed.skip_exact(3)
}

/// Parse marker segments up to and including SOS.
fn read_header<F: PictureFile + ?Sized>(feed: &mut JpegFeed<'_, F>) -> Result<Header, PicError> {
    if feed.byte()? != 0xFF || feed.byte()? != M_SOI {
        return Err(PicError::Format);
    }
    let mut header = Header {
        width: 0,
        height: 0,
        components: Vec::new(),
        quant: [[1; 64]; 4],
        dc: [None, None, None, None],
        ac: [None, None, None, None],
        restart_interval: 0,
        transform: None,
    };

    loop {
        while feed.byte()? != 0xFF {}
        let mut marker = feed.byte()?;
        while marker == 0xFF {
            marker = feed.byte()?;
        }

        match marker {
            0x00 | 0x01 | M_SOI | 0xD0..=0xD7 => continue,
            M_EOI => return Err(PicError::Decode("jpeg without scan")),
            _ => {}
        }

        let len = feed.be_u16()?;
        if len < 2 {
            return Err(PicError::Decode("bad jpeg segment length"));
        }
        let payload = (len - 2) as usize;

        match marker {
            M_SOF0 | M_SOF1 => read_sof(feed, &mut header)?,
            // progressive, lossless, arithmetic coding
            0xC2 | 0xC3 | 0xC5..=0xC7 | 0xC9..=0xCB | 0xCD..=0xCF => {
                warn!("[JPEG] frame type {:02X} not supported", marker);
                return Err(PicError::Unsupported);
            }
            M_DHT => read_dht(feed, payload, &mut header)?,
            M_DQT => read_dqt(feed, payload, &mut header.quant)?,
            M_DRI => {
                if payload != 2 {
                    return Err(PicError::Decode("bad restart interval"));
                }
                header.restart_interval = feed.be_u16()?;
            }
            M_SOS => {
                read_sos(feed, &mut header)?;
                return Ok(header);
            }
            M_APP14 if payload >= 12 => {
                let mut adobe = [0u8; 12];
                if feed.feed(Some(&mut adobe), 12)? != 12 {
                    return Err(PicError::Decode("truncated jpeg"));
                }
                if &adobe[..5] == b"Adobe" {
                    header.transform = Some(adobe[11]);
                }
                feed.skip_exact(payload - 12)?;
            }
            _ => {
                feed.skip_exact(payload)?;
                if matches!(marker, 0xE0..=0xEF) || marker == M_COM {
                    debug!("[JPEG] skipped marker {:02X} ({} bytes)", marker, payload);
                }
            }
        }
    }
}

/// Entropy-coded data with byte stuffing removed. Bits are kept MSB-aligned
/// in `acc`; after a marker the stream reads as zeros.
struct BitReader<'a, 'f, F: PictureFile + ?Sized> {
    feed: &'a mut JpegFeed<'f, F>,
    buf: [u8; READ_CHUNK],
    pos: usize,
    len: usize,
    acc: u32,
    bits: u32,
    marker: Option<u8>,
}

impl<'a, 'f, F: PictureFile + ?Sized> BitReader<'a, 'f, F> {
    fn new(feed: &'a mut JpegFeed<'f, F>) -> Self {
        Self {
            feed,
            buf: [0; READ_CHUNK],
            pos: 0,
            len: 0,
            acc: 0,
            bits: 0,
            marker: None,
        }
    }

    fn next_byte(&mut self) -> Result<u8, PicError> {
        if self.pos == self.len {
            self.len = self.feed.feed(Some(&mut self.buf), READ_CHUNK)?;
            self.pos = 0;
            if self.len == 0 {
                return Err(PicError::Decode("truncated jpeg"));
            }
        }
        let b = self.buf[self.pos];
        self.pos += 1;
        Ok(b)
    }

    fn fill(&mut self) -> Result<(), PicError> {
        while self.bits <= 24 {
            let mut b = 0;
            if self.marker.is_none() {
                b = self.next_byte()?;
                if b == 0xFF {
                    let mut m = self.next_byte()?;
                    while m == 0xFF {
                        m = self.next_byte()?;
                    }
                    if m != 0 {
                        self.marker = Some(m);
                        b = 0;
                    }
                }
            }
            self.acc |= (b as u32) << (24 - self.bits);
            self.bits += 8;
        }
        Ok(())
    }

    fn bit(&mut self) -> Result<i32, PicError> {
        if self.bits == 0 {
            self.fill()?;
        }
        let b = self.acc >> 31;
        self.acc <<= 1;
        self.bits -= 1;
        Ok(b as i32)
    }

    /// Next `n` (at most 16) bits as an unsigned value.
    fn receive(&mut self, n: u8) -> Result<u32, PicError> {
        if n == 0 {
            return Ok(0);
        }
        let n = n as u32;
        if self.bits < n {
            self.fill()?;
        }
        let v = self.acc >> (32 - n);
        self.acc <<= n;
        self.bits -= n;
        Ok(v)
    }

    fn decode(&mut self, table: &Huffman) -> Result<u8, PicError> {
        let mut code = 0i32;
        for len in 1..=16 {
            code = (code << 1) | self.bit()?;
            if code <= table.maxcode[len] {
                let i = table.valptr[len] + code - table.mincode[len];
                return table
                    .values
                    .get(i as usize)
                    .copied()
                    .ok_or(PicError::Decode("bad huffman code"));
            }
        }
        Err(PicError::Decode("bad huffman code"))
    }

    /// Drop buffered bits and consume the next RSTn marker.
    fn restart(&mut self) -> Result<(), PicError> {
        self.acc = 0;
        self.bits = 0;
        let marker = match self.marker.take() {
            Some(m) => m,
            None => loop {
                if self.next_byte()? != 0xFF {
                    continue;
                }
                let mut m = self.next_byte()?;
                while m == 0xFF {
                    m = self.next_byte()?;
                }
                if m != 0 {
                    break m;
                }
            },
        };
        if !(0xD0..=0xD7).contains(&marker) {
            return Err(PicError::Decode("missing restart marker"));
        }
        Ok(())
    }
}

/// Sign-extend a received magnitude of `size` bits.
fn extend(v: u32, size: u8) -> i32 {
    let v = v as i32;
    if size == 0 {
        0
    } else if v < 1 << (size - 1) {
        v - (1 << size) + 1
    } else {
        v
    }
}

fn idct(coef: &[i32; 64], out: &mut [u8]) {
    let mut tmp = [0i64; 64];
    for y in 0..8 {
        for x in 0..8 {
            tmp[y * 8 + x] = (0..8)
                .map(|u| IDCT[x][u] as i64 * coef[y * 8 + u] as i64)
                .sum();
        }
    }
    for x in 0..8 {
        for y in 0..8 {
            let s: i64 = (0..8).map(|v| IDCT[y][v] as i64 * tmp[v * 8 + x]).sum();
            let p = ((s + (1 << 23)) >> 24) + 128;
            out[y * 8 + x] = p.clamp(0, 255) as u8;
        }
    }
}

fn ycc_to_rgb(y: u8, cb: u8, cr: u8) -> [u8; 3] {
    let (y, cb, cr) = (y as i32, cb as i32 - 128, cr as i32 - 128);
    let r = y + ((91881 * cr + 32768) >> 16);
    let g = y + ((-22554 * cb - 46802 * cr + 32768) >> 16);
    let b = y + ((116130 * cb + 32768) >> 16);
    [r, g, b].map(|c| c.clamp(0, 255) as u8)
}

/// Shrink factor as a power of two: 0 when the image fits, otherwise 1..=3
/// depending on how many times larger than the area it is.
pub fn scale_for(area_w: u32, area_h: u32, image_w: u32, image_h: u32) -> u8 {
    let fits = |k: u32| image_w <= area_w * k && image_h <= area_h * k;
    if fits(1) {
        0
    } else if fits(2) {
        1
    } else if fits(4) {
        2
    } else {
        3
    }
}

/// Samples of one MCU, one 16x16 plane per component.
struct Mcu {
    planes: [[u8; 256]; 3],
}

/// Decode state for one scan.
struct Scan<'h> {
    header: &'h Header,
    preds: [i32; 3],
    coef: [i32; 64],
    block: [u8; 64],
    mcu: Mcu,
}

impl<'h> Scan<'h> {
    fn new(header: &'h Header) -> Self {
        Self {
            header,
            preds: [0; 3],
            coef: [0; 64],
            block: [0; 64],
            mcu: Mcu {
                planes: [[0; 256]; 3],
            },
        }
    }

    fn decode_block<F: PictureFile + ?Sized>(
        &mut self,
        bits: &mut BitReader<'_, '_, F>,
        index: usize,
    ) -> Result<(), PicError> {
        let comp = self.header.components[index];
        let missing = PicError::Decode("missing huffman table");
        let dc = self.header.dc[comp.td as usize].as_ref().ok_or(missing)?;
        let ac = self.header.ac[comp.ta as usize].as_ref().ok_or(missing)?;
        let q = &self.header.quant[comp.tq as usize];

        self.coef = [0; 64];
        let size = bits.decode(dc)?;
        if size > 11 {
            return Err(PicError::Decode("bad dc coefficient"));
        }
        let diff = extend(bits.receive(size)?, size);
        self.preds[index] = self.preds[index].wrapping_add(diff);
        self.coef[0] = self.preds[index].wrapping_mul(q[0] as i32);

        let mut k = 1;
        while k < 64 {
            let rs = bits.decode(ac)?;
            let (run, size) = ((rs >> 4) as usize, rs & 0x0F);
            if size == 0 {
                if run == 15 {
                    k += 16;
                    continue;
                }
                break;
            }
            k += run;
            if k > 63 || size > 10 {
                return Err(PicError::Decode("bad ac coefficient"));
            }
            self.coef[ZIGZAG[k] as usize] = extend(bits.receive(size)?, size) * q[k] as i32;
            k += 1;
        }
        idct(&self.coef, &mut self.block);
        Ok(())
    }

    fn decode_mcu<F: PictureFile + ?Sized>(&mut self, bits: &mut BitReader<'_, '_, F>) -> Result<(), PicError> {
        for index in 0..self.header.components.len() {
            let comp = self.header.components[index];
            let stride = comp.h as usize * 8;
            for by in 0..comp.v as usize {
                for bx in 0..comp.h as usize {
                    self.decode_block(bits, index)?;
                    for (row, line) in self.block.chunks_exact(8).enumerate() {
                        let start = (by * 8 + row) * stride + bx * 8;
                        self.mcu.planes[index][start..start + 8].copy_from_slice(line);
                    }
                }
            }
        }
        Ok(())
    }

    /// Colour of pixel (x, y) of the MCU, chroma upsampled by repetition.
    fn pixel(&self, x: usize, y: usize, hmax: usize, vmax: usize) -> [u8; 3] {
        let comps = &self.header.components;
        let sample = |i: usize| {
            let c = comps[i];
            let (h, v) = (c.h as usize, c.v as usize);
            self.mcu.planes[i][(y * v / vmax) * h * 8 + x * h / hmax]
        };
        if comps.len() == 1 {
            let g = sample(0);
            return [g, g, g];
        }
        let (a, b, c) = (sample(0), sample(1), sample(2));
        match self.header.transform {
            Some(0) => [a, b, c],
            _ => ycc_to_rgb(a, b, c),
        }
    }
}

/// Reduced image size and its placement in the area.
struct Layout {
    scale: u8,
    out_w: u32,
    out_h: u32,
    cols: Placement,
    rows: Placement,
}

/// Decode into a canvas holding only the visible reduced pixels.
fn render<F: PictureFile + ?Sized>(file: &mut F, area: Area) -> Result<(Canvas, Layout), PicError> {
    file.seek(0)?;
    let mut feed = JpegFeed::new(file);
    let header = read_header(&mut feed)?;

    let scale = scale_for(area.w as u32, area.h as u32, header.width, header.height);
    let (out_w, out_h) = (header.width >> scale, header.height >> scale);
    let cols = Placement::center(area.w as u32, out_w);
    let rows = Placement::center(area.h as u32, out_h);
    debug!(
        "[JPEG] {}x{} {} component(s), scale 1/{}",
        header.width,
        header.height,
        header.components.len(),
        1u32 << scale
    );

    let mut canvas = Canvas::new(cols.visible as u16, rows.visible as u16)?;

    let hmax = header.components.iter().map(|c| c.h).max().unwrap_or(1) as usize;
    let vmax = header.components.iter().map(|c| c.v).max().unwrap_or(1) as usize;
    let (mcu_w, mcu_h) = (hmax * 8, vmax * 8);
    let mcus_x = (header.width as usize).div_ceil(mcu_w);
    let mcus_y = (header.height as usize).div_ceil(mcu_h);
    let f = 1usize << scale;
    let n = (f * f) as u32;
    let visible_x = cols.skip..cols.skip + cols.visible;
    let visible_y = rows.skip..rows.skip + rows.visible;

    let mut bits = BitReader::new(&mut feed);
    let mut scan = Scan::new(&header);
    let interval = header.restart_interval as usize;
    let mut count = 0usize;

    for my in 0..mcus_y {
        if ((my * mcu_h / f) as u32) >= visible_y.end {
            break;
        }
        for mx in 0..mcus_x {
            if interval > 0 && count > 0 && count % interval == 0 {
                bits.restart()?;
                scan.preds = [0; 3];
            }
            count += 1;
            scan.decode_mcu(&mut bits)?;

            for by in 0..mcu_h / f {
                let oy = (my * mcu_h / f + by) as u32;
                if oy >= out_h || !visible_y.contains(&oy) {
                    continue;
                }
                for bx in 0..mcu_w / f {
                    let ox = (mx * mcu_w / f + bx) as u32;
                    if ox >= out_w || !visible_x.contains(&ox) {
                        continue;
                    }
                    let mut sum = [0u32; 3];
                    for dy in 0..f {
                        for dx in 0..f {
                            let px = scan.pixel(bx * f + dx, by * f + dy, hmax, vmax);
                            for (s, c) in sum.iter_mut().zip(px) {
                                *s += c as u32;
                            }
                        }
                    }
                    let color = Color::from_rgb888((sum[0] / n) as u8, (sum[1] / n) as u8, (sum[2] / n) as u8);
                    canvas.put(ox - cols.skip, oy - rows.skip, color);
                }
            }
        }
    }

    Ok((
        canvas,
        Layout {
            scale,
            out_w,
            out_h,
            cols,
            rows,
        },
    ))
}

pub fn decode<T, F>(target: &mut T, file: &mut F, area: Area) -> Result<(), PicError>
where
    T: PictureTarget + ?Sized,
    F: PictureFile + ?Sized,
{
    let (canvas, layout) = render(file, area)?;
    debug!(
        "[JPEG] showing {}x{} of {}x{} at 1/{}",
        layout.cols.visible,
        layout.rows.visible,
        layout.out_w,
        layout.out_h,
        1u32 << layout.scale
    );
    canvas.flush(target, area, layout.out_w, layout.out_h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picture::testing::Frame;
    use crate::storage::{MemStorage, Storage};
    use alloc::vec;

    const GRAY: &[u8] = include_bytes!("../../tests/fixtures/gray_2x2.jpg");
    const PYTHON: &[u8] = include_bytes!("../../tests/fixtures/python.jpg");
    const PYTHON_PPM: &[u8] = include_bytes!("../../tests/fixtures/python.ppm");
    /// Red, green, blue and white stripes 500 px wide, 4:2:0, restart every 20 MCUs
    const STRIPES: &[u8] = include_bytes!("../../tests/fixtures/stripes_2000x200.jpg");

    fn run(data: &[u8], frame: &mut Frame, area: Area) -> Result<(), PicError> {
        let mut storage = MemStorage::new();
        storage.insert("T.JPG", data.to_vec());
        let mut file = storage.open("T.JPG").unwrap();
        decode(frame, &mut file, area)
    }

    fn render_bytes(data: &[u8], area: Area) -> Result<(Canvas, Layout), PicError> {
        let mut storage = MemStorage::new();
        storage.insert("T.JPG", data.to_vec());
        let mut file = storage.open("T.JPG").unwrap();
        render(&mut file, area)
    }

    #[test]
    fn scale_selection_is_exact() {
        assert_eq!(scale_for(160, 80, 160, 80), 0);
        assert_eq!(scale_for(160, 80, 100, 20), 0);
        assert_eq!(scale_for(160, 80, 320, 160), 1);
        assert_eq!(scale_for(160, 80, 321, 80), 2);
        assert_eq!(scale_for(160, 80, 640, 320), 2);
        assert_eq!(scale_for(160, 80, 160, 321), 3);
        assert_eq!(scale_for(160, 80, 4000, 3000), 3);
    }

    #[test]
    fn huffman_codes_are_canonical() {
        // lengths 2, 2, 3: codes 00, 01, 100
        let mut counts = [0u8; 16];
        counts[1] = 2;
        counts[2] = 1;
        let table = Huffman::new(&counts, vec![7, 8, 9]).unwrap();
        assert_eq!(table.maxcode[2], 1);
        assert_eq!(table.mincode[3], 4);
        assert_eq!(table.maxcode[3], 4);

        // three codes of length 1 cannot exist
        let mut bad = [0u8; 16];
        bad[0] = 3;
        assert!(Huffman::new(&bad, vec![0, 1, 2]).is_err());
    }

    #[test]
    fn magnitude_is_sign_extended() {
        assert_eq!(extend(0, 0), 0);
        assert_eq!(extend(0, 1), -1);
        assert_eq!(extend(1, 1), 1);
        assert_eq!(extend(0b010, 3), -5);
        assert_eq!(extend(0b110, 3), 6);
    }

    #[test]
    fn dc_only_block_is_flat() {
        let mut coef = [0i32; 64];
        coef[0] = 8 * (200 - 128);
        let mut out = [0u8; 64];
        idct(&coef, &mut out);
        assert!(out.iter().all(|&p| p == 200));
    }

    #[test]
    fn gray_fixture_decodes_to_mid_gray() {
        let mut frame = Frame::new(2, 2);
        run(GRAY, &mut frame, Area::new(0, 0, 2, 2)).unwrap();
        let mid = Color::from_rgb888(128, 128, 128);
        for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            assert_eq!(frame.at(x, y), Some(mid));
        }
    }

    #[test]
    fn small_image_is_centred() {
        let mut frame = Frame::new(20, 10);
        run(GRAY, &mut frame, Area::new(4, 2, 10, 6)).unwrap();
        assert_eq!(frame.written(), 4);
        assert!(frame.at(8, 4).is_some());
        assert!(frame.at(9, 5).is_some());
        assert_eq!(frame.rows, vec![(8, 4, 2), (8, 5, 2)]);
    }

    #[test]
    fn colour_fixture_matches_reference() {
        let mut frame = Frame::new(16, 16);
        run(PYTHON, &mut frame, Area::new(0, 0, 16, 16)).unwrap();
        assert_eq!(frame.written(), 256);
        assert_eq!(frame.rows.len(), 16);

        // lossy 4:2:0 against the lossless original
        let pixels = &PYTHON_PPM[PYTHON_PPM.len() - 16 * 16 * 3..];
        let mut total = 0u32;
        for (i, rgb) in pixels.chunks_exact(3).enumerate() {
            let (x, y) = ((i % 16) as u16, (i / 16) as u16);
            let (r, g, b) = frame.at(x, y).unwrap().to_rgb888();
            total += r.abs_diff(rgb[0]) as u32 + g.abs_diff(rgb[1]) as u32 + b.abs_diff(rgb[2]) as u32;
        }
        assert!(total / (256 * 3) < 20, "mean error {}", total / (256 * 3));
    }

    #[test]
    fn large_image_is_reduced() {
        for (side, expect) in [(8u16, 8usize), (5, 4), (2, 2)] {
            let mut frame = Frame::new(side, side);
            run(PYTHON, &mut frame, Area::new(0, 0, side, side)).unwrap();
            assert_eq!(frame.rows.len(), expect, "area {}", side);
            assert!(frame.rows.iter().all(|r| r.2 == expect));
        }
    }

    #[test]
    fn wide_photo_is_scaled_to_an_eighth_and_centre_cropped() {
        let mut frame = Frame::new(160, 80);
        run(STRIPES, &mut frame, Area::new(0, 0, 160, 80)).unwrap();

        // 250x25 after 1/8, middle 160 columns shown, rows centred
        assert_eq!(frame.rows.len(), 25);
        assert!(frame.rows.iter().all(|&(x, _, len)| x == 0 && len == 160));
        assert_eq!(frame.rows[0].1, 27);
        assert_eq!(frame.written(), 25 * 160);

        for y in [27, 39, 51] {
            // reduced column 45 + x, eight source pixels each
            assert_eq!(frame.at(0, y), Some(Color::RED));
            assert_eq!(frame.at(35, y), Some(Color::GREEN));
            assert_eq!(frame.at(100, y), Some(Color::BLUE));
            assert_eq!(frame.at(159, y), Some(Color::WHITE));
        }
        assert_eq!(frame.at(0, 26), None);
        assert_eq!(frame.at(0, 52), None);
    }

    #[test]
    fn canvas_holds_only_visible_pixels() {
        let (canvas, layout) = render_bytes(STRIPES, Area::new(0, 0, 160, 80)).unwrap();
        assert_eq!(layout.scale, 3);
        assert_eq!((layout.out_w, layout.out_h), (250, 25));
        assert_eq!(canvas.size(), (160, 25));

        let (canvas, layout) = render_bytes(STRIPES, Area::new(0, 0, 1000, 100)).unwrap();
        assert_eq!(layout.scale, 1);
        assert_eq!(canvas.size(), (1000, 100));
    }

    #[test]
    fn half_scale_keeps_restart_sync() {
        let mut frame = Frame::new(1000, 100);
        run(STRIPES, &mut frame, Area::new(0, 0, 1000, 100)).unwrap();
        assert_eq!(frame.written(), 1000 * 100);
        for y in [0, 50, 99] {
            assert_eq!(frame.at(0, y), Some(Color::RED));
            assert_eq!(frame.at(300, y), Some(Color::GREEN));
            assert_eq!(frame.at(600, y), Some(Color::BLUE));
            assert_eq!(frame.at(999, y), Some(Color::WHITE));
        }
    }

    #[test]
    fn app_segments_are_skipped_by_the_feed() {
        // insert a large APP1 after SOI
        let mut data = vec![0xFF, 0xD8, 0xFF, 0xE1, 0x10, 0x02];
        data.extend(core::iter::repeat(0xAB).take(0x1000));
        data.extend_from_slice(&GRAY[2..]);

        let mut frame = Frame::new(2, 2);
        run(&data, &mut frame, Area::new(0, 0, 2, 2)).unwrap();
        assert_eq!(frame.at(1, 1), Some(Color::from_rgb888(128, 128, 128)));
    }

    #[test]
    fn feed_skip_mode_seeks() {
        let mut storage = MemStorage::new();
        storage.insert("T.JPG", vec![1, 2, 3, 4, 5, 6]);
        let mut file = storage.open("T.JPG").unwrap();
        let mut feed = JpegFeed::new(&mut file);
        assert_eq!(feed.feed(None, 4).unwrap(), 4);
        let mut buf = [0u8; 4];
        assert_eq!(feed.feed(Some(&mut buf), 4).unwrap(), 2);
        assert_eq!(&buf[..2], &[5, 6]);
        assert_eq!(feed.feed(None, 10).unwrap(), 0);
    }

    #[test]
    fn progressive_frames_are_unsupported() {
        let mut data = GRAY.to_vec();
        let sof = data.windows(2).position(|w| w == [0xFF, M_SOF0]).unwrap();
        data[sof + 1] = 0xC2;
        let mut frame = Frame::new(2, 2);
        assert_eq!(run(&data, &mut frame, Area::new(0, 0, 2, 2)), Err(PicError::Unsupported));
        assert_eq!(frame.written(), 0);
    }

    #[test]
    fn not_a_jpeg() {
        let mut frame = Frame::new(4, 4);
        assert_eq!(run(b"GIF89a", &mut frame, Area::new(0, 0, 4, 4)), Err(PicError::Format));
        for cut in [100, GRAY.len() - 3] {
            assert!(matches!(
                run(&GRAY[..cut], &mut frame, Area::new(0, 0, 4, 4)),
                Err(PicError::Decode(_))
            ));
        }
        let mut frame = Frame::new(1000, 100);
        assert_eq!(
            run(&STRIPES[..STRIPES.len() / 2], &mut frame, Area::new(0, 0, 1000, 100)),
            Err(PicError::Decode("truncated jpeg"))
        );
    }
}
