use std::path::Path;

use crate::buffer::PixelBuffer;
use crate::error::{Error, Result};

/// Decode an image file, keeping the channel count stored in the file.
///
/// # Errors
///
/// [`Error::FileNotFound`] if nothing exists at `path`, [`Error::Decode`] if the
/// file is not a supported image.
pub fn open(path: impl AsRef<Path>) -> Result<PixelBuffer> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let img = image::open(path).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::trace!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        color = ?img.color(),
        "decoded"
    );

    Ok(PixelBuffer::from(img))
}
