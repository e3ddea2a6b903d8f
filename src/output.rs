//! Frame buffer serialization.
//!
//! `.ppm` paths are written as binary P6 by hand so the header is exactly
//! `P6\n<w> <h>\n255\n`; any other extension goes through the `image` crate.

use crate::{renderer::FrameBuffer, tonemap};
use image::{Rgb, RgbImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Encode error: {0}")]
    Encode(#[from] image::ImageError),
}

/// Tone maps every pixel into an 8-bit image.
pub fn to_image(frame: &FrameBuffer) -> RgbImage {
    let mut img = RgbImage::new(frame.width, frame.height);
    for (x, y, px) in img.enumerate_pixels_mut() {
        *px = Rgb(tonemap::to_rgb8(frame.get(x, y)));
    }
    img
}

pub fn write_ppm<W: Write>(mut out: W, img: &RgbImage) -> Result<(), OutputError> {
    write!(out, "P6\n{} {}\n255\n", img.width(), img.height())?;
    out.write_all(img.as_raw())?;
    out.flush()?;
    Ok(())
}

pub fn save<P: AsRef<Path>>(path: P, frame: &FrameBuffer) -> Result<(), OutputError> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }

    let img = to_image(frame);
    let is_ppm = path
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("ppm"));

    if is_ppm {
        write_ppm(BufWriter::new(File::create(path)?), &img)?;
    } else {
        img.save(path)?;
    }
    log::info!("saved {}x{} image to {}", frame.width, frame.height, path.display());
    Ok(())
}
