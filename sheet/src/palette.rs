//! Fixed color table for 8-bit sprites.
//!
//! 8-bit sprites carry no palette of their own. Every index resolves through this table,
//! which is the default VGA mode 13h palette widened from 6-bit to 8-bit channels.

use image::{Rgb, Rgba};

pub const PALETTE_LENGTH: usize = 256;

pub static PALETTE: [[u8; 3]; PALETTE_LENGTH] = [
    [0x00, 0x00, 0x00], [0x00, 0x00, 0xaa], [0x00, 0xaa, 0x00], [0x00, 0xaa, 0xaa],
    [0xaa, 0x00, 0x00], [0xaa, 0x00, 0xaa], [0xaa, 0x55, 0x00], [0xaa, 0xaa, 0xaa],
    [0x55, 0x55, 0x55], [0x55, 0x55, 0xff], [0x55, 0xff, 0x55], [0x55, 0xff, 0xff],
    [0xff, 0x55, 0x55], [0xff, 0x55, 0xff], [0xff, 0xff, 0x55], [0xff, 0xff, 0xff],
    [0x00, 0x00, 0x00], [0x14, 0x14, 0x14], [0x20, 0x20, 0x20], [0x2c, 0x2c, 0x2c],
    [0x38, 0x38, 0x38], [0x45, 0x45, 0x45], [0x51, 0x51, 0x51], [0x61, 0x61, 0x61],
    [0x71, 0x71, 0x71], [0x82, 0x82, 0x82], [0x92, 0x92, 0x92], [0xa2, 0xa2, 0xa2],
    [0xb6, 0xb6, 0xb6], [0xcb, 0xcb, 0xcb], [0xe3, 0xe3, 0xe3], [0xff, 0xff, 0xff],
    [0x00, 0x00, 0xff], [0x41, 0x00, 0xff], [0x7d, 0x00, 0xff], [0xbe, 0x00, 0xff],
    [0xff, 0x00, 0xff], [0xff, 0x00, 0xbe], [0xff, 0x00, 0x7d], [0xff, 0x00, 0x41],
    [0xff, 0x00, 0x00], [0xff, 0x41, 0x00], [0xff, 0x7d, 0x00], [0xff, 0xbe, 0x00],
    [0xff, 0xff, 0x00], [0xbe, 0xff, 0x00], [0x7d, 0xff, 0x00], [0x41, 0xff, 0x00],
    [0x00, 0xff, 0x00], [0x00, 0xff, 0x41], [0x00, 0xff, 0x7d], [0x00, 0xff, 0xbe],
    [0x00, 0xff, 0xff], [0x00, 0xbe, 0xff], [0x00, 0x7d, 0xff], [0x00, 0x41, 0xff],
    [0x7d, 0x7d, 0xff], [0x9e, 0x7d, 0xff], [0xbe, 0x7d, 0xff], [0xdf, 0x7d, 0xff],
    [0xff, 0x7d, 0xff], [0xff, 0x7d, 0xdf], [0xff, 0x7d, 0xbe], [0xff, 0x7d, 0x9e],
    [0xff, 0x7d, 0x7d], [0xff, 0x9e, 0x7d], [0xff, 0xbe, 0x7d], [0xff, 0xdf, 0x7d],
    [0xff, 0xff, 0x7d], [0xdf, 0xff, 0x7d], [0xbe, 0xff, 0x7d], [0x9e, 0xff, 0x7d],
    [0x7d, 0xff, 0x7d], [0x7d, 0xff, 0x9e], [0x7d, 0xff, 0xbe], [0x7d, 0xff, 0xdf],
    [0x7d, 0xff, 0xff], [0x7d, 0xdf, 0xff], [0x7d, 0xbe, 0xff], [0x7d, 0x9e, 0xff],
    [0xb6, 0xb6, 0xff], [0xc7, 0xb6, 0xff], [0xdb, 0xb6, 0xff], [0xeb, 0xb6, 0xff],
    [0xff, 0xb6, 0xff], [0xff, 0xb6, 0xeb], [0xff, 0xb6, 0xdb], [0xff, 0xb6, 0xc7],
    [0xff, 0xb6, 0xb6], [0xff, 0xc7, 0xb6], [0xff, 0xdb, 0xb6], [0xff, 0xeb, 0xb6],
    [0xff, 0xff, 0xb6], [0xeb, 0xff, 0xb6], [0xdb, 0xff, 0xb6], [0xc7, 0xff, 0xb6],
    [0xb6, 0xff, 0xb6], [0xb6, 0xff, 0xc7], [0xb6, 0xff, 0xdb], [0xb6, 0xff, 0xeb],
    [0xb6, 0xff, 0xff], [0xb6, 0xeb, 0xff], [0xb6, 0xdb, 0xff], [0xb6, 0xc7, 0xff],
    [0x00, 0x00, 0x71], [0x1c, 0x00, 0x71], [0x38, 0x00, 0x71], [0x55, 0x00, 0x71],
    [0x71, 0x00, 0x71], [0x71, 0x00, 0x55], [0x71, 0x00, 0x38], [0x71, 0x00, 0x1c],
    [0x71, 0x00, 0x00], [0x71, 0x1c, 0x00], [0x71, 0x38, 0x00], [0x71, 0x55, 0x00],
    [0x71, 0x71, 0x00], [0x55, 0x71, 0x00], [0x38, 0x71, 0x00], [0x1c, 0x71, 0x00],
    [0x00, 0x71, 0x00], [0x00, 0x71, 0x1c], [0x00, 0x71, 0x38], [0x00, 0x71, 0x55],
    [0x00, 0x71, 0x71], [0x00, 0x55, 0x71], [0x00, 0x38, 0x71], [0x00, 0x1c, 0x71],
    [0x38, 0x38, 0x71], [0x45, 0x38, 0x71], [0x55, 0x38, 0x71], [0x61, 0x38, 0x71],
    [0x71, 0x38, 0x71], [0x71, 0x38, 0x61], [0x71, 0x38, 0x55], [0x71, 0x38, 0x45],
    [0x71, 0x38, 0x38], [0x71, 0x45, 0x38], [0x71, 0x55, 0x38], [0x71, 0x61, 0x38],
    [0x71, 0x71, 0x38], [0x61, 0x71, 0x38], [0x55, 0x71, 0x38], [0x45, 0x71, 0x38],
    [0x38, 0x71, 0x38], [0x38, 0x71, 0x45], [0x38, 0x71, 0x55], [0x38, 0x71, 0x61],
    [0x38, 0x71, 0x71], [0x38, 0x61, 0x71], [0x38, 0x55, 0x71], [0x38, 0x45, 0x71],
    [0x51, 0x51, 0x71], [0x59, 0x51, 0x71], [0x61, 0x51, 0x71], [0x69, 0x51, 0x71],
    [0x71, 0x51, 0x71], [0x71, 0x51, 0x69], [0x71, 0x51, 0x61], [0x71, 0x51, 0x59],
    [0x71, 0x51, 0x51], [0x71, 0x59, 0x51], [0x71, 0x61, 0x51], [0x71, 0x69, 0x51],
    [0x71, 0x71, 0x51], [0x69, 0x71, 0x51], [0x61, 0x71, 0x51], [0x59, 0x71, 0x51],
    [0x51, 0x71, 0x51], [0x51, 0x71, 0x59], [0x51, 0x71, 0x61], [0x51, 0x71, 0x69],
    [0x51, 0x71, 0x71], [0x51, 0x69, 0x71], [0x51, 0x61, 0x71], [0x51, 0x59, 0x71],
    [0x00, 0x00, 0x41], [0x10, 0x00, 0x41], [0x20, 0x00, 0x41], [0x30, 0x00, 0x41],
    [0x41, 0x00, 0x41], [0x41, 0x00, 0x30], [0x41, 0x00, 0x20], [0x41, 0x00, 0x10],
    [0x41, 0x00, 0x00], [0x41, 0x10, 0x00], [0x41, 0x20, 0x00], [0x41, 0x30, 0x00],
    [0x41, 0x41, 0x00], [0x30, 0x41, 0x00], [0x20, 0x41, 0x00], [0x10, 0x41, 0x00],
    [0x00, 0x41, 0x00], [0x00, 0x41, 0x10], [0x00, 0x41, 0x20], [0x00, 0x41, 0x30],
    [0x00, 0x41, 0x41], [0x00, 0x30, 0x41], [0x00, 0x20, 0x41], [0x00, 0x10, 0x41],
    [0x20, 0x20, 0x41], [0x28, 0x20, 0x41], [0x30, 0x20, 0x41], [0x38, 0x20, 0x41],
    [0x41, 0x20, 0x41], [0x41, 0x20, 0x38], [0x41, 0x20, 0x30], [0x41, 0x20, 0x28],
    [0x41, 0x20, 0x20], [0x41, 0x28, 0x20], [0x41, 0x30, 0x20], [0x41, 0x38, 0x20],
    [0x41, 0x41, 0x20], [0x38, 0x41, 0x20], [0x30, 0x41, 0x20], [0x28, 0x41, 0x20],
    [0x20, 0x41, 0x20], [0x20, 0x41, 0x28], [0x20, 0x41, 0x30], [0x20, 0x41, 0x38],
    [0x20, 0x41, 0x41], [0x20, 0x38, 0x41], [0x20, 0x30, 0x41], [0x20, 0x28, 0x41],
    [0x2c, 0x2c, 0x41], [0x30, 0x2c, 0x41], [0x34, 0x2c, 0x41], [0x3c, 0x2c, 0x41],
    [0x41, 0x2c, 0x41], [0x41, 0x2c, 0x3c], [0x41, 0x2c, 0x34], [0x41, 0x2c, 0x30],
    [0x41, 0x2c, 0x2c], [0x41, 0x30, 0x2c], [0x41, 0x34, 0x2c], [0x41, 0x3c, 0x2c],
    [0x41, 0x41, 0x2c], [0x3c, 0x41, 0x2c], [0x34, 0x41, 0x2c], [0x30, 0x41, 0x2c],
    [0x2c, 0x41, 0x2c], [0x2c, 0x41, 0x30], [0x2c, 0x41, 0x34], [0x2c, 0x41, 0x3c],
    [0x2c, 0x41, 0x41], [0x2c, 0x3c, 0x41], [0x2c, 0x34, 0x41], [0x2c, 0x30, 0x41],
    [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00],
];

pub fn index_to_rgb(index: u8) -> Rgb<u8> {
    Rgb(PALETTE[index as usize])
}

/// Palette colors are always opaque.
pub fn index_to_rgba(index: u8) -> Rgba<u8> {
    let [r, g, b] = PALETTE[index as usize];
    Rgba([r, g, b, 0xff])
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ega_block() {
        assert_eq!(index_to_rgb(0x01), Rgb([0x00, 0x00, 0xaa]));
        assert_eq!(index_to_rgb(0x0f), Rgb([0xff, 0xff, 0xff]));
    }

    #[test]
    fn gray_ramp_is_monotonic() {
        let grays = &PALETTE[0x10..0x20];

        assert!(grays.iter().all(|[r, g, b]| r == g && g == b));
        assert!(grays.windows(2).all(|pair| pair[0][0] < pair[1][0]));
        assert_eq!(grays[15], [0xff, 0xff, 0xff]);
    }

    #[test]
    fn alpha_is_opaque() {
        assert!((0..=255u8).all(|index| index_to_rgba(index)[3] == 0xff));
    }
}
