//! File access for the picture decoders
//!
//! [`SdStorage`] reads FAT volumes on the SD card through `embedded-sdmmc`;
//! [`MemStorage`] keeps files in RAM for host tests and built-in images.
//! Paths use `/` separators and 8.3 names, e.g. `PICTURE/LOGO.BMP`.

use alloc::string::String;
use alloc::vec::Vec;
use embedded_sdmmc::{
    BlockDevice, Mode, RawDirectory, RawFile, RawVolume, ShortFileName, TimeSource, Timestamp,
    VolumeIdx, VolumeManager,
};
use log::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    /// No such file or directory
    NotFound,
    /// Filesystem error (bad name, too many open handles, corrupt FAT)
    Io,
    /// Block device failure
    Device,
    /// File ended before the requested bytes
    UnexpectedEof,
}

impl core::fmt::Display for StorageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StorageError::NotFound => f.write_str("not found"),
            StorageError::Io => f.write_str("filesystem error"),
            StorageError::Device => f.write_str("block device error"),
            StorageError::UnexpectedEof => f.write_str("unexpected end of file"),
        }
    }
}

impl<E: core::fmt::Debug> From<embedded_sdmmc::Error<E>> for StorageError {
    fn from(e: embedded_sdmmc::Error<E>) -> Self {
        match e {
            embedded_sdmmc::Error::NotFound => StorageError::NotFound,
            embedded_sdmmc::Error::DeviceError(_) => StorageError::Device,
            other => {
                warn!("[SD] {:?}", other);
                StorageError::Io
            }
        }
    }
}

/// An open, seekable, read-only file
pub trait PictureFile {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, StorageError>;

    /// Move to an absolute offset, clamped to the file length.
    fn seek(&mut self, pos: u32) -> Result<(), StorageError>;

    fn position(&self) -> u32;

    fn len(&self) -> u32;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_eof(&self) -> bool {
        self.position() >= self.len()
    }

    /// Seek forward `n` bytes.
    fn skip(&mut self, n: u32) -> Result<(), StorageError> {
        let target = self.position().saturating_add(n).min(self.len());
        self.seek(target)
    }

    fn read_exact(&mut self, mut buf: &mut [u8]) -> Result<(), StorageError> {
        while !buf.is_empty() {
            let n = self.read(buf)?;
            if n == 0 {
                return Err(StorageError::UnexpectedEof);
            }
            buf = &mut buf[n..];
        }
        Ok(())
    }
}

/// Somewhere picture files can be opened by name
pub trait Storage {
    type File<'a>: PictureFile
    where
        Self: 'a;

    fn open(&mut self, name: &str) -> Result<Self::File<'_>, StorageError>;

    /// Call `f` with the name of every regular file in `dir`.
    fn list(&mut self, dir: &str, f: &mut dyn FnMut(&str)) -> Result<(), StorageError>;
}

/// Fixed timestamp for the FAT layer; the card is only read.
pub struct FixedTime;

impl TimeSource for FixedTime {
    fn get_timestamp(&self) -> Timestamp {
        Timestamp {
            year_since_1970: 54,
            zero_indexed_month: 0,
            zero_indexed_day: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
        }
    }
}

/// Failed [`SdStorage::mount`]
pub struct MountError<D, T> {
    pub error: StorageError,
    pub device: D,
    pub time: T,
}

impl<D, T> core::fmt::Debug for MountError<D, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MountError").field("error", &self.error).finish()
    }
}

/// First FAT volume of an SD card
pub struct SdStorage<D, T>
where
    D: BlockDevice,
    T: TimeSource,
{
    mgr: VolumeManager<D, T>,
    volume: RawVolume,
    root: RawDirectory,
}

impl<D, T> SdStorage<D, T>
where
    D: BlockDevice,
    T: TimeSource,
{
    /// Open volume 0 and its root directory. On failure the device and time
    /// source are handed back so the card can be probed again.
    pub fn mount(device: D, time: T) -> Result<Self, MountError<D, T>> {
        let blocks = match device.num_blocks() {
            Ok(blocks) => blocks,
            Err(e) => {
                warn!("[SD] card not responding: {:?}", e);
                return Err(MountError {
                    error: StorageError::Device,
                    device,
                    time,
                });
            }
        };
        info!("[SD] card size {} MB", blocks.0 as u64 * 512 / (1024 * 1024));

        let mgr = VolumeManager::new(device, time);
        let opened = mgr.open_raw_volume(VolumeIdx(0)).and_then(|volume| {
            match mgr.open_root_dir(volume) {
                Ok(root) => Ok((volume, root)),
                Err(e) => {
                    let _ = mgr.close_volume(volume);
                    Err(e)
                }
            }
        });
        match opened {
            Ok((volume, root)) => {
                info!("[SD] volume 0 mounted");
                Ok(Self { mgr, volume, root })
            }
            Err(e) => {
                let error = StorageError::from(e);
                let (device, time) = mgr.free();
                Err(MountError {
                    error,
                    device,
                    time,
                })
            }
        }
    }

    /// Close all handles and give the block device back.
    pub fn unmount(self) -> D {
        let _ = self.mgr.close_dir(self.root);
        let _ = self.mgr.close_volume(self.volume);
        let (device, _time) = self.mgr.free();
        device
    }

    /// Open the directory holding the last path component.
    fn open_parent<'p>(&self, path: &'p str) -> Result<(Option<RawDirectory>, &'p str), StorageError> {
        let path = path.trim_start_matches('/');
        let (dirs, leaf) = match path.rfind('/') {
            Some(i) => (&path[..i], &path[i + 1..]),
            None => return Ok((None, path)),
        };
        Ok((Some(self.open_path(dirs)?), leaf))
    }

    /// Walk `a/b/c` from the root, closing each intermediate handle.
    fn open_path(&self, path: &str) -> Result<RawDirectory, StorageError> {
        let mut current: Option<RawDirectory> = None;
        for part in path.split('/').filter(|p| !p.is_empty()) {
            let parent = current.unwrap_or(self.root);
            let next = self.mgr.open_dir(parent, part);
            if let Some(dir) = current {
                let _ = self.mgr.close_dir(dir);
            }
            current = Some(next?);
        }
        current.ok_or(StorageError::NotFound)
    }
}

pub struct SdFile<'a, D, T>
where
    D: BlockDevice,
    T: TimeSource,
{
    mgr: &'a VolumeManager<D, T>,
    file: RawFile,
    dir: Option<RawDirectory>,
    pos: u32,
    len: u32,
}

impl<D, T> PictureFile for SdFile<'_, D, T>
where
    D: BlockDevice,
    T: TimeSource,
{
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, StorageError> {
        if self.pos >= self.len || buf.is_empty() {
            return Ok(0);
        }
        let n = self.mgr.read(self.file, buf)?;
        self.pos += n as u32;
        Ok(n)
    }

    fn seek(&mut self, pos: u32) -> Result<(), StorageError> {
        let pos = pos.min(self.len);
        self.mgr.file_seek_from_start(self.file, pos)?;
        self.pos = pos;
        Ok(())
    }

    fn position(&self) -> u32 {
        self.pos
    }

    fn len(&self) -> u32 {
        self.len
    }
}

impl<D, T> Drop for SdFile<'_, D, T>
where
    D: BlockDevice,
    T: TimeSource,
{
    fn drop(&mut self) {
        if self.mgr.close_file(self.file).is_err() {
            warn!("[SD] close file failed");
        }
        if let Some(dir) = self.dir.take() {
            let _ = self.mgr.close_dir(dir);
        }
    }
}

impl<D, T> Storage for SdStorage<D, T>
where
    D: BlockDevice,
    T: TimeSource,
{
    type File<'a>
        = SdFile<'a, D, T>
    where
        Self: 'a;

    fn open(&mut self, name: &str) -> Result<Self::File<'_>, StorageError> {
        let (dir, leaf) = self.open_parent(name)?;
        let file = match self
            .mgr
            .open_file_in_dir(dir.unwrap_or(self.root), leaf, Mode::ReadOnly)
        {
            Ok(file) => file,
            Err(e) => {
                if let Some(dir) = dir {
                    let _ = self.mgr.close_dir(dir);
                }
                return Err(e.into());
            }
        };
        let len = self.mgr.file_length(file).unwrap_or(0);
        Ok(SdFile {
            mgr: &self.mgr,
            file,
            dir,
            pos: 0,
            len,
        })
    }

    fn list(&mut self, dir: &str, f: &mut dyn FnMut(&str)) -> Result<(), StorageError> {
        let handle = self.open_path(dir)?;
        let result = self.mgr.iterate_dir(handle, |entry| {
            if entry.attributes.is_directory() || entry.attributes.is_volume() {
                return;
            }
            let name = short_name(&entry.name);
            f(&name);
        });
        let _ = self.mgr.close_dir(handle);
        result.map_err(StorageError::from)
    }
}

/// `BASE.EXT` form of an 8.3 directory entry name.
fn short_name(name: &ShortFileName) -> heapless::String<12> {
    let mut out = heapless::String::new();
    for &b in name.base_name() {
        let _ = out.push(b as char);
    }
    let ext = name.extension();
    if !ext.is_empty() {
        let _ = out.push('.');
        for &b in ext {
            let _ = out.push(b as char);
        }
    }
    out
}

/// Files held in RAM
#[derive(Default)]
pub struct MemStorage {
    files: Vec<(String, Vec<u8>)>,
    opens: usize,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, data: Vec<u8>) {
        self.files.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
        self.files.push((String::from(name), data));
    }

    /// How many times a file was opened successfully.
    pub fn open_count(&self) -> usize {
        self.opens
    }
}

pub struct MemFile<'a> {
    data: &'a [u8],
    pos: u32,
}

impl PictureFile for MemFile<'_> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, StorageError> {
        let start = (self.pos as usize).min(self.data.len());
        let n = buf.len().min(self.data.len() - start);
        buf[..n].copy_from_slice(&self.data[start..start + n]);
        self.pos += n as u32;
        Ok(n)
    }

    fn seek(&mut self, pos: u32) -> Result<(), StorageError> {
        self.pos = pos.min(self.len());
        Ok(())
    }

    fn position(&self) -> u32 {
        self.pos
    }

    fn len(&self) -> u32 {
        self.data.len() as u32
    }
}

impl Storage for MemStorage {
    type File<'a> = MemFile<'a>;

    fn open(&mut self, name: &str) -> Result<Self::File<'_>, StorageError> {
        let name = name.trim_start_matches('/');
        let (_, data) = self
            .files
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .ok_or(StorageError::NotFound)?;
        self.opens += 1;
        Ok(MemFile { data, pos: 0 })
    }

    fn list(&mut self, dir: &str, f: &mut dyn FnMut(&str)) -> Result<(), StorageError> {
        let dir = dir.trim_matches('/');
        let mut found = dir.is_empty();
        for (name, _) in &self.files {
            let rest = if dir.is_empty() {
                Some(name.as_str())
            } else {
                name.get(..dir.len())
                    .filter(|head| head.eq_ignore_ascii_case(dir))
                    .and_then(|_| name[dir.len()..].strip_prefix('/'))
            };
            if let Some(rest) = rest {
                found = true;
                if !rest.contains('/') {
                    f(rest);
                }
            }
        }
        if found { Ok(()) } else { Err(StorageError::NotFound) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_sdmmc::{Block, BlockCount, BlockIdx};

    fn storage() -> MemStorage {
        let mut s = MemStorage::new();
        s.insert("PICTURE/A.BMP", vec![1, 2, 3, 4, 5]);
        s.insert("PICTURE/SUB/B.PNG", vec![9]);
        s.insert("README.TXT", vec![]);
        s
    }

    #[test]
    fn open_is_case_insensitive_and_counted() {
        let mut s = storage();
        assert!(s.open("picture/a.bmp").is_ok());
        assert_eq!(s.open("PICTURE/NONE.BMP").err(), Some(StorageError::NotFound));
        assert_eq!(s.open_count(), 1);
    }

    #[test]
    fn file_reads_seeks_and_skips() {
        let mut s = storage();
        let mut f = s.open("PICTURE/A.BMP").unwrap();
        let mut buf = [0u8; 2];
        f.read_exact(&mut buf).unwrap();
        assert_eq!(buf, [1, 2]);
        f.skip(1).unwrap();
        assert_eq!(f.position(), 3);
        assert_eq!(f.read(&mut buf).unwrap(), 2);
        assert_eq!(buf, [4, 5]);
        assert!(f.is_eof());
        assert_eq!(f.read(&mut buf).unwrap(), 0);
        assert_eq!(f.read_exact(&mut buf), Err(StorageError::UnexpectedEof));

        f.seek(100).unwrap();
        assert_eq!(f.position(), 5);
        f.seek(1).unwrap();
        f.skip(100).unwrap();
        assert!(f.is_eof());
    }

    #[test]
    fn list_yields_direct_children_only() {
        let mut s = storage();
        let mut names = Vec::new();
        s.list("PICTURE", &mut |n| names.push(String::from(n))).unwrap();
        assert_eq!(names, vec!["A.BMP"]);

        names.clear();
        s.list("/", &mut |n| names.push(String::from(n))).unwrap();
        assert_eq!(names, vec!["README.TXT"]);

        assert_eq!(s.list("MISSING", &mut |_| {}), Err(StorageError::NotFound));
    }

    /// Card of blank blocks, or one that never answers.
    struct BlankCard {
        present: bool,
    }

    impl BlockDevice for BlankCard {
        type Error = ();

        fn read(&self, blocks: &mut [Block], _start: BlockIdx) -> Result<(), ()> {
            if !self.present {
                return Err(());
            }
            for block in blocks {
                block.contents.fill(0);
            }
            Ok(())
        }

        fn write(&self, _blocks: &[Block], _start: BlockIdx) -> Result<(), ()> {
            Err(())
        }

        fn num_blocks(&self) -> Result<BlockCount, ()> {
            if self.present { Ok(BlockCount(2048)) } else { Err(()) }
        }
    }

    #[test]
    fn failed_mount_returns_the_device() {
        let err = SdStorage::mount(BlankCard { present: false }, FixedTime)
            .err()
            .unwrap();
        assert_eq!(err.error, StorageError::Device);
        assert!(!err.device.present);

        // no MBR signature
        let err = SdStorage::mount(BlankCard { present: true }, FixedTime)
            .err()
            .unwrap();
        assert_eq!(err.error, StorageError::Io);
        assert!(err.device.present);
    }
}
