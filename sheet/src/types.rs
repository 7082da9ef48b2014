use image::{RgbImage, RgbaImage};

use crate::{constants::*, error::SheetError};

/// Pixel encoding of a sprite, stored as the first header field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signature {
    Palette8,
    Rgb32,
    Rgba32,
}

/// Absolute offsets of the fields whose position depends on the signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub total_data_size: u64,
    pub canvas_width: u64,
    pub canvas_height: u64,
    pub pixel_data: u64,
}

static PALETTE8_LAYOUT: Layout = Layout {
    total_data_size: PALETTE8_TOTAL_DATA_SIZE_OFFSET,
    canvas_width: PALETTE8_CANVAS_WIDTH_OFFSET,
    canvas_height: PALETTE8_CANVAS_HEIGHT_OFFSET,
    pixel_data: PALETTE8_PIXEL_DATA_OFFSET,
};

static TRUE_COLOR_LAYOUT: Layout = Layout {
    total_data_size: TRUE_COLOR_TOTAL_DATA_SIZE_OFFSET,
    canvas_width: TRUE_COLOR_CANVAS_WIDTH_OFFSET,
    canvas_height: TRUE_COLOR_CANVAS_HEIGHT_OFFSET,
    pixel_data: TRUE_COLOR_PIXEL_DATA_OFFSET,
};

impl Signature {
    pub fn value(self) -> u32 {
        match self {
            Signature::Palette8 => PALETTE8_SIGNATURE,
            Signature::Rgb32 => RGB32_SIGNATURE,
            Signature::Rgba32 => RGBA32_SIGNATURE,
        }
    }

    pub fn layout(self) -> &'static Layout {
        match self {
            Signature::Palette8 => &PALETTE8_LAYOUT,
            Signature::Rgb32 | Signature::Rgba32 => &TRUE_COLOR_LAYOUT,
        }
    }

    pub fn color_bits(self) -> u32 {
        match self {
            Signature::Palette8 => 8,
            Signature::Rgb32 | Signature::Rgba32 => 32,
        }
    }

    pub fn has_alpha(self) -> bool {
        matches!(self, Signature::Rgba32)
    }

    /// 8-bit sprites can only be read.
    pub fn is_encodable(self) -> bool {
        !matches!(self, Signature::Palette8)
    }
}

impl TryFrom<u32> for Signature {
    type Error = SheetError;

    fn try_from(signature: u32) -> Result<Self, Self::Error> {
        match signature {
            PALETTE8_SIGNATURE => Ok(Signature::Palette8),
            RGB32_SIGNATURE => Ok(Signature::Rgb32),
            RGBA32_SIGNATURE => Ok(Signature::Rgba32),
            signature => Err(SheetError::UnknownSignature { signature }),
        }
    }
}

/// The fixed 16 bytes at the start of every sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetHeader {
    pub signature: u32,
    pub frame_width: u32,
    pub frame_height: u32,
    pub frame_count: u32,
}

/// Grid of palette indices, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedImage {
    width: u32,
    height: u32,
    indices: Vec<u8>,
}

impl IndexedImage {
    /// Returns `None` when `indices` does not hold exactly `width * height` entries.
    pub fn from_raw(width: u32, height: u32, indices: Vec<u8>) -> Option<Self> {
        if indices.len() as u64 != width as u64 * height as u64 {
            return None;
        }

        Some(Self {
            width,
            height,
            indices,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get_index(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }

        self.indices
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    pub fn indices(&self) -> &[u8] {
        &self.indices
    }
}

/// Decoded raster, in the natural representation of each signature.
#[derive(Debug, Clone, PartialEq)]
pub enum FramePixels {
    Indexed(IndexedImage),
    Rgb(RgbImage),
    Rgba(RgbaImage),
}

impl FramePixels {
    pub fn width(&self) -> u32 {
        match self {
            FramePixels::Indexed(image) => image.width(),
            FramePixels::Rgb(image) => image.width(),
            FramePixels::Rgba(image) => image.width(),
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            FramePixels::Indexed(image) => image.height(),
            FramePixels::Rgb(image) => image.height(),
            FramePixels::Rgba(image) => image.height(),
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }
}

impl From<IndexedImage> for FramePixels {
    fn from(value: IndexedImage) -> Self {
        FramePixels::Indexed(value)
    }
}

impl From<RgbImage> for FramePixels {
    fn from(value: RgbImage) -> Self {
        FramePixels::Rgb(value)
    }
}

impl From<RgbaImage> for FramePixels {
    fn from(value: RgbaImage) -> Self {
        FramePixels::Rgba(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub(crate) index: usize,
    pub(crate) pixels: FramePixels,
}

impl Frame {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &FramePixels {
        &self.pixels
    }
}

/// 8-bit record. The escape byte is followed by a repeat count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Palette8Record {
    Index(u8),
    Escape { count: u8 },
}

/// `count` opaque pixels of one color. Stored as count, blue, green, red.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rgb32Record {
    pub count: u8,
    pub blue: u8,
    pub green: u8,
    pub red: u8,
}

impl Rgb32Record {
    pub fn to_bytes(self) -> [u8; 4] {
        [self.count, self.blue, self.green, self.red]
    }
}

/// Either one pixel, or a run of `red` transparent pixels when alpha, green and blue are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rgba32Record {
    pub alpha: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgba32Record {
    pub fn transparent_run(count: u8) -> Self {
        Self {
            alpha: 0,
            red: count,
            green: 0,
            blue: 0,
        }
    }

    pub fn transparent_run_length(self) -> Option<u8> {
        (self.alpha == 0 && self.green == 0 && self.blue == 0).then_some(self.red)
    }

    pub fn to_bytes(self) -> [u8; 4] {
        [self.alpha, self.red, self.green, self.blue]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn signature_values() {
        for signature in [Signature::Palette8, Signature::Rgb32, Signature::Rgba32] {
            assert_eq!(Signature::try_from(signature.value()).unwrap(), signature);
        }

        assert_eq!(Signature::Palette8.color_bits(), 8);
        assert_eq!(Signature::Rgba32.color_bits(), 32);
        assert!(Signature::Rgba32.has_alpha());
        assert!(!Signature::Rgb32.has_alpha());
        assert!(!Signature::Palette8.is_encodable());
        assert!(Signature::Rgb32.is_encodable());
        assert!(Signature::Rgba32.is_encodable());
    }

    #[test]
    fn unknown_signature_names_value() {
        let err = Signature::try_from(0x10).unwrap_err();

        assert!(matches!(
            err,
            SheetError::UnknownSignature { signature: 0x10 }
        ));
        assert!(err.to_string().contains("0x10"));
    }

    #[test]
    fn true_color_layouts_are_shared() {
        assert_eq!(Signature::Rgb32.layout(), Signature::Rgba32.layout());
        assert_eq!(Signature::Palette8.layout().pixel_data, 0xbf4);
        assert_eq!(Signature::Rgba32.layout().canvas_width, 0xe24);
    }

    #[test]
    fn indexed_image_bounds() {
        assert!(IndexedImage::from_raw(2, 2, vec![0; 3]).is_none());

        let image = IndexedImage::from_raw(2, 2, vec![1, 2, 3, 4]).unwrap();

        assert_eq!(image.get_index(1, 1), Some(4));
        assert_eq!(image.get_index(2, 0), None);
    }

    #[test]
    fn rgba32_transparency_marker() {
        assert_eq!(Rgba32Record::transparent_run(3).transparent_run_length(), Some(3));

        let opaque = Rgba32Record {
            alpha: 0xff,
            red: 0x10,
            green: 0,
            blue: 0,
        };
        assert_eq!(opaque.transparent_run_length(), None);
    }
}
