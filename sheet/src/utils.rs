use std::{ffi::OsStr, path::Path};

use image::{Rgb, RgbImage, Rgba, RgbaImage};

use crate::{
    error::SheetError,
    palette::{index_to_rgb, index_to_rgba},
    Container, Frame, FramePixels, IndexedImage,
};

impl<'a> Container<&'a [u8]> {
    pub fn open_from_bytes(i: &'a [u8]) -> Result<Self, SheetError> {
        Self::open(i)
    }
}

impl Container {
    /// Reads the whole file into memory.
    pub fn open_from_file(path: impl AsRef<OsStr> + AsRef<Path>) -> Result<Self, SheetError> {
        let file = std::fs::read(path)?;

        Self::open(file)
    }
}

impl IndexedImage {
    pub fn to_rgb8(&self) -> RgbImage {
        RgbImage::from_fn(self.width(), self.height(), |x, y| {
            index_to_rgb(self.get_index(x, y).unwrap_or_default())
        })
    }

    pub fn to_rgba8(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width(), self.height(), |x, y| {
            index_to_rgba(self.get_index(x, y).unwrap_or_default())
        })
    }
}

impl FramePixels {
    pub fn to_rgb8(&self) -> RgbImage {
        match self {
            FramePixels::Indexed(image) => image.to_rgb8(),
            FramePixels::Rgb(image) => image.clone(),
            FramePixels::Rgba(image) => RgbImage::from_fn(image.width(), image.height(), |x, y| {
                let [r, g, b, _] = image.get_pixel(x, y).0;
                Rgb([r, g, b])
            }),
        }
    }

    /// Indexed and RGB pixels come out opaque.
    pub fn to_rgba8(&self) -> RgbaImage {
        match self {
            FramePixels::Indexed(image) => image.to_rgba8(),
            FramePixels::Rgb(image) => RgbaImage::from_fn(image.width(), image.height(), |x, y| {
                let [r, g, b] = image.get_pixel(x, y).0;
                Rgba([r, g, b, 0xff])
            }),
            FramePixels::Rgba(image) => image.clone(),
        }
    }
}

impl Frame {
    pub fn to_rgb8(&self) -> RgbImage {
        self.pixels.to_rgb8()
    }

    pub fn to_rgba8(&self) -> RgbaImage {
        self.pixels.to_rgba8()
    }

    /// Palette indices, for frames of 8-bit sprites.
    pub fn palette_indices(&self) -> Option<&[u8]> {
        match &self.pixels {
            FramePixels::Indexed(image) => Some(image.indices()),
            _ => None,
        }
    }

    /// Format is picked from the extension.
    pub fn save_image(&self, path: impl AsRef<Path>) -> Result<(), SheetError> {
        self.to_rgba8().save(path)?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn indexed_resolves_through_palette() {
        let image = IndexedImage::from_raw(2, 1, vec![0x01, 0xfe]).unwrap();
        let rgba = image.to_rgba8();

        assert_eq!(rgba.get_pixel(0, 0).0, [0x00, 0x00, 0xaa, 0xff]);
        assert_eq!(image.to_rgb8().get_pixel(0, 0).0, [0x00, 0x00, 0xaa]);
    }

    #[test]
    fn rgba_to_rgb_drops_alpha() {
        let pixels = FramePixels::Rgba(RgbaImage::from_pixel(1, 1, Rgba([1, 2, 3, 0])));

        assert_eq!(pixels.to_rgb8().get_pixel(0, 0).0, [1, 2, 3]);
    }

    #[test]
    fn rgb_to_rgba_is_opaque() {
        let pixels = FramePixels::Rgb(RgbImage::from_pixel(1, 1, Rgb([1, 2, 3])));

        assert_eq!(pixels.to_rgba8().get_pixel(0, 0).0, [1, 2, 3, 0xff]);
    }
}
