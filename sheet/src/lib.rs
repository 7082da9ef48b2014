//! Sprite sheet container codec.
//!
//! A sprite holds a fixed number of same-sized frames, stored with one of three run-length
//! pixel encodings selected by the header signature:
//!
//! - `0x09`, 8-bit palette indices. Read only.
//! - `0x0F`, 32-bit RGB.
//! - `0x19`, 32-bit RGB with alpha.
//!
//! Header and tables sit at fixed absolute offsets, see [`constants`].
pub mod constants;
mod container;
mod decoder;
pub mod error;
pub mod palette;
mod parser;
mod source;
mod types;
mod utils;
mod writer;

pub use container::Container;
pub use error::SheetError;
pub use source::{ByteSource, SeekSource};
pub use types::*;

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use crate::{palette::PALETTE, Container, SeekSource, SheetError, Signature};

    const ARROW: &[u8] = include_bytes!("../test/arrow.spr");
    const BUTTON: &[u8] = include_bytes!("../test/button.s32");
    const GLOW: &[u8] = include_bytes!("../test/glow.s32");

    fn check_bookkeeping<S: crate::ByteSource>(container: &Container<S>) {
        assert_eq!(container.frame_offset(0).unwrap(), 0);

        let mut expected_offset = 0;

        for index in 0..container.frame_count() {
            let offset = container.frame_offset(index).unwrap();

            assert_eq!(offset, expected_offset);
            expected_offset += container.frame_size(index).unwrap();
        }

        let last = container.frame_count() - 1;
        let end = container.frame_offset(last).unwrap() + container.frame_size(last).unwrap();

        assert_eq!(expected_offset, end);
        assert_eq!(end, container.total_data_size().unwrap());
    }

    fn check_frames<S: crate::ByteSource>(container: &Container<S>) {
        for frame in container.frames() {
            let frame = frame.unwrap();

            assert_eq!(frame.width(), container.frame_width());
            assert_eq!(frame.height(), container.frame_height());
            assert_eq!(
                frame.pixels().pixel_count(),
                (container.frame_width() * container.frame_height()) as usize
            );
        }
    }

    #[test]
    fn parse_arrow() {
        let spr = Container::open_from_bytes(ARROW).unwrap();

        assert_eq!(spr.signature(), Signature::Palette8);
        assert_eq!(spr.color_bits(), 8);
        assert!(!spr.has_alpha());
        assert_eq!(spr.frame_width(), 20);
        assert_eq!(spr.frame_height(), 20);
        assert_eq!(spr.frame_count(), 10);
        assert_eq!(spr.canvas_width(), 200);
        assert_eq!(spr.canvas_height(), 20);

        assert_eq!(spr.frame_offset(3).unwrap(), 324);
        assert_eq!(spr.total_data_size().unwrap(), 1080);

        check_bookkeeping(&spr);
        check_frames(&spr);
    }

    #[test]
    fn arrow_pixels() {
        let spr = Container::open_from_bytes(ARROW).unwrap();
        let frame = spr.frame(3).unwrap();

        let indices = frame.palette_indices().unwrap();
        let index_at = |x: usize, y: usize| indices[y * 20 + x];

        // shaft, head, background
        assert_eq!(index_at(5, 10), 0x13);
        assert_eq!(index_at(15, 8), 0x23);
        assert_eq!(index_at(0, 0), 0xfe);

        let [r, g, b] = PALETTE[0x13];
        assert_eq!(frame.to_rgba8().get_pixel(5, 10).0, [r, g, b, 0xff]);
    }

    #[test]
    fn arrow_is_read_only() {
        let spr = Container::open_from_bytes(ARROW).unwrap();

        assert!(matches!(
            spr.write_to_bytes(),
            Err(SheetError::ReadOnlyVariant { .. })
        ));
    }

    #[test]
    fn parse_button() {
        let spr = Container::open_from_bytes(BUTTON).unwrap();

        assert_eq!(spr.signature(), Signature::Rgb32);
        assert_eq!(spr.color_bits(), 32);
        assert!(!spr.has_alpha());
        assert_eq!(spr.frame_width(), 24);
        assert_eq!(spr.frame_height(), 52);
        assert_eq!(spr.frame_count(), 2);
        assert_eq!(spr.canvas_width(), 48);
        assert_eq!(spr.canvas_height(), 52);

        assert_eq!(spr.frame_size(0).unwrap(), 940);
        assert_eq!(spr.total_data_size().unwrap(), 1880);

        check_bookkeeping(&spr);
        check_frames(&spr);

        let frame = spr.frame(1).unwrap().to_rgb8();
        assert_eq!(frame.get_pixel(0, 0).0, [0x30, 0x00, 0x80]);
        assert_eq!(frame.get_pixel(5, 30).0, [0x00, 0xff, 0x00]);
        assert_eq!(frame.get_pixel(0, 51).0, [1, 2, 3]);
    }

    #[test]
    fn parse_glow() {
        let spr = Container::open_from_bytes(GLOW).unwrap();

        assert_eq!(spr.signature(), Signature::Rgba32);
        assert!(spr.has_alpha());
        assert_eq!(spr.frame_width(), 16);
        assert_eq!(spr.frame_height(), 8);
        assert_eq!(spr.frame_count(), 3);
        assert_eq!(spr.canvas_width(), 48);
        assert_eq!(spr.canvas_height(), 8);

        check_bookkeeping(&spr);
        check_frames(&spr);

        let frame = spr.frame(2).unwrap().to_rgba8();
        assert_eq!(frame.get_pixel(0, 0).0, [0xfc, 0xe0, 0xfc, 0]);
        assert_eq!(frame.get_pixel(3, 4).0, [0x20, 48, 128, 0x5c]);

        let frame = spr.frame(0).unwrap().to_rgba8();
        assert_eq!(frame.get_pixel(0, 1).0, [0xfc, 0xe0, 0xfc, 0]);
    }

    #[test]
    fn button_round_trip() {
        let spr = Container::open_from_bytes(BUTTON).unwrap();
        let bytes = spr.write_to_bytes().unwrap();

        assert_eq!(bytes.len(), BUTTON.len());
        assert!(bytes == BUTTON);
    }

    #[test]
    fn glow_round_trip() {
        let spr = Container::open_from_bytes(GLOW).unwrap();
        let bytes = spr.write_to_bytes().unwrap();

        assert_eq!(bytes.len(), GLOW.len());
        assert!(bytes == GLOW);
    }

    #[test]
    fn round_trip_after_partial_access() {
        let spr = Container::open_from_bytes(GLOW).unwrap();

        // one frame cached, the rest decoded during save
        spr.frame(1).unwrap();

        assert!(spr.write_to_bytes().unwrap() == GLOW);
    }

    #[test]
    fn modified_frame_changes_output() {
        let mut spr = Container::open_from_bytes(BUTTON).unwrap();

        let mut image = spr.frame(0).unwrap().to_rgb8();
        image.put_pixel(0, 0, image::Rgb([9, 9, 9]));
        spr.set_frame(0, image).unwrap();

        let reopened = Container::open(spr.write_to_bytes().unwrap()).unwrap();

        assert_eq!(reopened.canvas_width(), 48);
        assert_eq!(
            reopened.frame(0).unwrap().to_rgb8().get_pixel(0, 0).0,
            [9, 9, 9]
        );
        // first row now opens with a single pixel record
        assert_eq!(
            reopened.frame_size(0).unwrap(),
            spr.frame_size(0).unwrap() + 4
        );
    }

    #[test]
    fn open_from_seekable_reader() {
        let source = SeekSource::new(Cursor::new(GLOW.to_vec())).unwrap();
        let spr = Container::open(source).unwrap();

        assert_eq!(spr.frame_count(), 3);
        assert!(spr.write_to_bytes().unwrap() == GLOW);
    }

    #[test]
    fn out_of_range_frame() {
        let spr = Container::open_from_bytes(ARROW).unwrap();

        assert!(matches!(
            spr.frame(10),
            Err(SheetError::IndexOutOfRange {
                index: 10,
                frame_count: 10
            })
        ));
        // -1 as an index
        assert!(matches!(
            spr.frame(usize::MAX),
            Err(SheetError::IndexOutOfRange { .. })
        ));
        assert!(spr.frame_offset(10).is_err());
    }
}
