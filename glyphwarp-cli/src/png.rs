//! Grayscale PNG input and output for rasters.

use std::fs;
use std::path::Path;

use glyphwarp_graphics::Raster;
use image::GrayImage;
use log::debug;

use crate::error::CliError;

/// Write `raster` as an 8-bit grayscale PNG, creating parent directories.
pub fn write(raster: &Raster, path: &Path) -> Result<(), CliError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| CliError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let (w, h) = raster.dims();
    let img = GrayImage::from_raw(w, h, raster.pixels().to_vec())
        .ok_or_else(|| CliError::Encode(path.to_path_buf()))?;
    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|source| CliError::Image {
            path: path.to_path_buf(),
            source,
        })?;
    debug!("wrote {w}x{h} raster to {}", path.display());
    Ok(())
}

/// Read any PNG as a grayscale raster (color input is converted to luma).
pub fn read(path: &Path) -> Result<Raster, CliError> {
    let img = image::open(path)
        .map_err(|source| CliError::Image {
            path: path.to_path_buf(),
            source,
        })?
        .into_luma8();
    let (w, h) = img.dimensions();
    Ok(Raster::from_vec(w, h, img.into_raw())?)
}
