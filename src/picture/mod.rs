//! Picture decoding onto the LCD
//!
//! [`PictureLib::load_picture`] checks the target rectangle, picks a decoder by
//! file extension and streams the decoded rows to a [`PictureTarget`].

pub mod bmp;
pub mod jpeg;
pub mod png;

use crate::bus::BusError;
use crate::color::Color;
use crate::storage::{Storage, StorageError};
use log::{info, warn};

/// Legacy status codes
pub const PIC_OK: u8 = 0x00;
pub const PIC_IO_ERR: u8 = 0x01;
pub const PIC_MEM_ERR: u8 = 0x11;
pub const PIC_FORMAT_ERR: u8 = 0x27;
pub const PIC_SIZE_ERR: u8 = 0x28;
pub const PIC_WINDOW_ERR: u8 = 0x29;
pub const PIC_BUS_ERR: u8 = 0xFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PicError {
    /// File could not be opened
    Open,
    /// Not a picture this library handles
    Format,
    /// Recognised format, unsupported variant
    Unsupported,
    /// Corrupt or truncated data
    Decode(&'static str),
    /// Decode buffers could not be allocated
    Memory,
    /// Streaming remainder filled the whole feed buffer
    BufferExceeded,
    /// Target rectangle outside the panel
    Window,
    /// Read or seek failure
    Io,
    /// LCD transport failure
    Bus,
}

impl PicError {
    pub fn code(&self) -> u8 {
        match self {
            PicError::Format | PicError::Unsupported | PicError::Decode(_) => PIC_FORMAT_ERR,
            PicError::BufferExceeded => PIC_SIZE_ERR,
            PicError::Window => PIC_WINDOW_ERR,
            PicError::Memory => PIC_MEM_ERR,
            PicError::Open | PicError::Io => PIC_IO_ERR,
            PicError::Bus => PIC_BUS_ERR,
        }
    }
}

impl core::fmt::Display for PicError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PicError::Open => f.write_str("cannot open file"),
            PicError::Format => f.write_str("unknown picture format"),
            PicError::Unsupported => f.write_str("unsupported picture variant"),
            PicError::Decode(why) => write!(f, "decode error: {}", why),
            PicError::Memory => f.write_str("out of memory"),
            PicError::BufferExceeded => f.write_str("feed buffer exceeded"),
            PicError::Window => f.write_str("window outside panel"),
            PicError::Io => f.write_str("read error"),
            PicError::Bus => f.write_str("lcd bus error"),
        }
    }
}

impl From<BusError> for PicError {
    fn from(_: BusError) -> Self {
        PicError::Bus
    }
}

impl From<StorageError> for PicError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::UnexpectedEof => PicError::Decode("truncated file"),
            _ => PicError::Io,
        }
    }
}

/// Where decoded rows go
pub trait PictureTarget {
    /// Current panel width and height.
    fn size(&self) -> (u16, u16);

    /// Write one horizontal run of pixels starting at (x, y).
    fn fill_row(&mut self, x: u16, y: u16, colors: &[Color]) -> Result<(), BusError>;
}

/// Destination rectangle on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Area {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Area {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }
}

/// Centring of an image along one axis of the area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Pixels between the area edge and the image
    pub offset: u32,
    /// Image pixels cut before the first visible one
    pub skip: u32,
    /// Image pixels shown
    pub visible: u32,
}

impl Placement {
    pub fn center(area: u32, image: u32) -> Self {
        if area >= image {
            Self {
                offset: (area - image) / 2,
                skip: 0,
                visible: image,
            }
        } else {
            Self {
                offset: 0,
                skip: (image - area) / 2,
                visible: area,
            }
        }
    }
}

/// Area-sized pixel buffer the JPEG and PNG decoders render into.
pub(crate) struct Canvas {
    width: usize,
    rows: alloc::vec::Vec<alloc::vec::Vec<Color>>,
}

impl Canvas {
    pub(crate) fn new(width: u16, height: u16) -> Result<Self, PicError> {
        let mut rows = alloc::vec::Vec::new();
        rows.try_reserve_exact(height as usize)
            .map_err(|_| PicError::Memory)?;
        for _ in 0..height {
            let mut row = alloc::vec::Vec::new();
            row.try_reserve_exact(width as usize)
                .map_err(|_| PicError::Memory)?;
            row.resize(width as usize, Color::BLACK);
            rows.push(row);
        }
        Ok(Self {
            width: width as usize,
            rows,
        })
    }

    #[cfg(test)]
    pub(crate) fn size(&self) -> (usize, usize) {
        (self.width, self.rows.len())
    }

    /// Pixels outside the canvas are dropped.
    pub(crate) fn put(&mut self, x: u32, y: u32, color: Color) {
        if let Some(row) = self.rows.get_mut(y as usize) {
            if let Some(px) = row.get_mut(x as usize) {
                *px = color;
            }
        }
    }

    /// Send the top-left `image_w` x `image_h` pixels to the area, centred when
    /// the image is the smaller one.
    pub(crate) fn flush<T: PictureTarget + ?Sized>(
        &self,
        target: &mut T,
        area: Area,
        image_w: u32,
        image_h: u32,
    ) -> Result<(), PicError> {
        let cols = Placement::center(area.w as u32, image_w);
        let rows = Placement::center(area.h as u32, image_h);
        let cols_visible = (cols.visible as usize).min(self.width);
        for (i, row) in self.rows.iter().take(rows.visible as usize).enumerate() {
            target.fill_row(
                area.x + cols.offset as u16,
                area.y + (rows.offset as usize + i) as u16,
                &row[..cols_visible],
            )?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Bmp,
    Jpeg,
    Png,
    Gif,
    Unknown,
}

impl FileType {
    pub fn is_picture(self) -> bool {
        matches!(self, FileType::Bmp | FileType::Jpeg | FileType::Png)
    }
}

/// Classify a file name by its extension, ignoring case.
pub fn file_type(name: &str) -> FileType {
    let Some((_, ext)) = name.rsplit_once('.') else {
        return FileType::Unknown;
    };
    if ext.contains('/') {
        return FileType::Unknown;
    }
    if ext.eq_ignore_ascii_case("bmp") {
        FileType::Bmp
    } else if ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg") {
        FileType::Jpeg
    } else if ext.eq_ignore_ascii_case("png") {
        FileType::Png
    } else if ext.eq_ignore_ascii_case("gif") {
        FileType::Gif
    } else {
        FileType::Unknown
    }
}

/// Panel size captured when the library was created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PictureInfo {
    pub lcd_width: u16,
    pub lcd_height: u16,
}

pub struct PictureLib {
    info: PictureInfo,
}

impl PictureLib {
    pub fn new<T: PictureTarget + ?Sized>(target: &T) -> Self {
        let (lcd_width, lcd_height) = target.size();
        Self {
            info: PictureInfo {
                lcd_width,
                lcd_height,
            },
        }
    }

    pub fn info(&self) -> PictureInfo {
        self.info
    }

    /// Decode `name` into the rectangle at (x, y) of size w x h.
    #[allow(clippy::too_many_arguments)]
    pub fn load_picture<T, S>(
        &self,
        target: &mut T,
        storage: &mut S,
        name: &str,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
    ) -> Result<(), PicError>
    where
        T: PictureTarget + ?Sized,
        S: Storage + ?Sized,
    {
        if x as u32 + w as u32 > self.info.lcd_width as u32
            || y as u32 + h as u32 > self.info.lcd_height as u32
            || w == 0
            || h == 0
        {
            return Err(PicError::Window);
        }

        let kind = file_type(name);
        if !kind.is_picture() {
            warn!("[PIC] {} is not a picture ({:?})", name, kind);
            return Err(PicError::Format);
        }

        let mut file = storage.open(name).map_err(|e| match e {
            StorageError::NotFound => PicError::Open,
            other => PicError::from(other),
        })?;
        let area = Area::new(x, y, w, h);
        info!("[PIC] {} {:?} -> {:?}", name, kind, area);

        match kind {
            FileType::Bmp => bmp::decode(target, &mut file, area),
            FileType::Jpeg => jpeg::decode(target, &mut file, area),
            FileType::Png => png::decode(target, &mut file, area),
            FileType::Gif | FileType::Unknown => Err(PicError::Format),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Recording target for decoder tests.

    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    pub struct Frame {
        pub width: u16,
        pub height: u16,
        pub pixels: Vec<Option<Color>>,
        pub rows: Vec<(u16, u16, usize)>,
    }

    impl Frame {
        pub fn new(width: u16, height: u16) -> Self {
            Self {
                width,
                height,
                pixels: vec![None; width as usize * height as usize],
                rows: Vec::new(),
            }
        }

        pub fn at(&self, x: u16, y: u16) -> Option<Color> {
            self.pixels[y as usize * self.width as usize + x as usize]
        }

        pub fn written(&self) -> usize {
            self.pixels.iter().filter(|p| p.is_some()).count()
        }
    }

    impl PictureTarget for Frame {
        fn size(&self) -> (u16, u16) {
            (self.width, self.height)
        }

        fn fill_row(&mut self, x: u16, y: u16, colors: &[Color]) -> Result<(), BusError> {
            assert!(y < self.height, "row {} below the frame", y);
            assert!(x as usize + colors.len() <= self.width as usize, "row {} too long", y);
            self.rows.push((x, y, colors.len()));
            let start = y as usize * self.width as usize + x as usize;
            for (dst, c) in self.pixels[start..start + colors.len()].iter_mut().zip(colors) {
                *dst = Some(*c);
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::Frame;
    use super::*;
    use crate::storage::MemStorage;

    #[test]
    fn extension_is_case_insensitive() {
        assert_eq!(file_type("PICTURE/A.BMP"), FileType::Bmp);
        assert_eq!(file_type("x.Jpeg"), FileType::Jpeg);
        assert_eq!(file_type("x.jpg"), FileType::Jpeg);
        assert_eq!(file_type("x.png"), FileType::Png);
        assert_eq!(file_type("x.gif"), FileType::Gif);
        assert_eq!(file_type("x.txt"), FileType::Unknown);
        assert_eq!(file_type("noext"), FileType::Unknown);
        assert_eq!(file_type("dir.bmp/file"), FileType::Unknown);
    }

    #[test]
    fn unknown_extension_is_format_error_without_open() {
        let mut frame = Frame::new(160, 80);
        let lib = PictureLib::new(&frame);
        let mut storage = MemStorage::new();
        storage.insert("A.GIF", vec![0x47, 0x49, 0x46]);
        storage.insert("A.TXT", vec![]);

        for name in ["A.GIF", "A.TXT"] {
            let err = lib.load_picture(&mut frame, &mut storage, name, 0, 0, 160, 80);
            assert_eq!(err, Err(PicError::Format));
        }
        assert_eq!(storage.open_count(), 0);
        assert_eq!(PicError::Format.code(), PIC_FORMAT_ERR);
    }

    #[test]
    fn oversized_window_is_rejected_without_open() {
        let mut frame = Frame::new(160, 80);
        let lib = PictureLib::new(&frame);
        assert_eq!(lib.info(), PictureInfo { lcd_width: 160, lcd_height: 80 });
        let mut storage = MemStorage::new();
        storage.insert("A.BMP", vec![]);

        for (x, y, w, h) in [(1, 0, 160, 80), (0, 1, 160, 80), (0, 0, 0, 10), (0, 0, 10, 0)] {
            let err = lib.load_picture(&mut frame, &mut storage, "A.BMP", x, y, w, h);
            assert_eq!(err, Err(PicError::Window));
        }
        assert_eq!(storage.open_count(), 0);
        assert_eq!(PicError::Window.code(), 0x29);
    }

    #[test]
    fn missing_file_is_open_error() {
        let mut frame = Frame::new(160, 80);
        let lib = PictureLib::new(&frame);
        let mut storage = MemStorage::new();
        let err = lib.load_picture(&mut frame, &mut storage, "NONE.PNG", 0, 0, 160, 80);
        assert_eq!(err, Err(PicError::Open));
    }

    #[test]
    fn dispatches_bmp_into_area() {
        let mut frame = Frame::new(160, 80);
        let lib = PictureLib::new(&frame);
        let mut storage = MemStorage::new();
        storage.insert("P/RED.BMP", bmp::encode(4, 2, |_, _| (0xFF, 0, 0)).unwrap());

        lib.load_picture(&mut frame, &mut storage, "P/RED.BMP", 10, 20, 4, 2)
            .unwrap();
        assert_eq!(frame.written(), 8);
        assert_eq!(frame.at(10, 20), Some(Color::RED));
        assert_eq!(frame.at(13, 21), Some(Color::RED));
    }

    #[test]
    fn placement_centres_both_ways() {
        assert_eq!(Placement::center(10, 4), Placement { offset: 3, skip: 0, visible: 4 });
        assert_eq!(Placement::center(4, 10), Placement { offset: 0, skip: 3, visible: 4 });
        assert_eq!(Placement::center(5, 5), Placement { offset: 0, skip: 0, visible: 5 });
    }

    #[test]
    fn error_codes() {
        assert_eq!(PicError::Decode("x").code(), 0x27);
        assert_eq!(PicError::Unsupported.code(), 0x27);
        assert_eq!(PicError::BufferExceeded.code(), 0x28);
        assert_eq!(PicError::Memory.code(), 0x11);
        assert_eq!(PicError::Io.code(), 0x01);
        assert_eq!(PicError::Bus.code(), 0xFF);
        assert_eq!(PicError::from(BusError::Spi), PicError::Bus);
    }
}
