//! File and stream I/O for the driver: `load`, `save`, and their
//! `Read`/`Write` counterparts.

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use enough::Unstoppable;

use crate::error::PpmError;
use crate::limits::Limits;
use crate::pixel::PixelBuffer;

/// Read and decode a P6 file.
///
/// The file handle is closed before decoding starts, so a format error
/// never holds it open.
pub fn load(path: impl AsRef<Path>) -> Result<PixelBuffer, PpmError> {
    load_with_limits(path, &Limits::default())
}

/// [`load`] with resource limits.
pub fn load_with_limits(path: impl AsRef<Path>, limits: &Limits) -> Result<PixelBuffer, PpmError> {
    let path = path.as_ref();
    let data = fs::read(path)?;
    log::debug!("read {} bytes from {}", data.len(), path.display());
    crate::DecodeRequest::new(&data)
        .with_limits(limits)
        .decode(Unstoppable)
}

/// Decode a P6 image from any reader, consuming it to the end.
pub fn read_from(mut reader: impl Read) -> Result<PixelBuffer, PpmError> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    crate::decode(&data, Unstoppable)
}

/// Write a P6 image to any writer.
pub fn write_to(mut writer: impl Write, buf: &PixelBuffer) -> Result<(), PpmError> {
    writer.write_all(crate::ppm::header(buf).as_bytes())?;
    writer.write_all(buf.samples())?;
    writer.flush()?;
    Ok(())
}

/// Encode and write a P6 file.
///
/// The image goes to a temporary file next to `path` that is renamed into
/// place once fully written. On any error the temporary file is removed and
/// `path` is left as it was.
pub fn save(path: impl AsRef<Path>, buf: &PixelBuffer) -> Result<(), PpmError> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    write_to(&mut tmp, buf)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| PpmError::Io(e.error))?;
    log::debug!(
        "wrote {}x{} image to {}",
        buf.width(),
        buf.height(),
        path.display()
    );
    Ok(())
}
