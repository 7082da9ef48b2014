use std::path::Path;

use eyre::WrapErr;
use sheet::{Container, Signature};

use crate::err;

pub struct PackOptions {
    /// Rgba32 instead of Rgb32.
    pub alpha: bool,
    pub canvas_width: Option<u32>,
    pub canvas_height: Option<u32>,
}

/// Builds a sprite out of same-sized images, one frame per image in the given order.
pub fn pack(
    images: &[impl AsRef<Path>],
    out_path: impl AsRef<Path>,
    options: &PackOptions,
) -> eyre::Result<()> {
    let out_path = out_path.as_ref();

    if images.is_empty() {
        return err!("no images to pack");
    }

    let frames = images
        .iter()
        .map(|path| {
            let path = path.as_ref();

            image::open(path)
                .map(|image| image.to_rgba8())
                .wrap_err_with(|| format!("cannot open image `{}`", path.display()))
        })
        .collect::<eyre::Result<Vec<_>>>()?;

    let (frame_width, frame_height) = frames[0].dimensions();

    if let Some((index, frame)) = frames
        .iter()
        .enumerate()
        .find(|(_, frame)| frame.dimensions() != (frame_width, frame_height))
    {
        return err!(
            "`{}` is {}x{}, expected {}x{}",
            images[index].as_ref().display(),
            frame.width(),
            frame.height(),
            frame_width,
            frame_height
        );
    }

    let signature = if options.alpha {
        Signature::Rgba32
    } else {
        Signature::Rgb32
    };

    let frame_count = frames.len();

    let mut spr = Container::new(
        signature,
        frame_width,
        frame_height,
        frame_count,
        options
            .canvas_width
            .unwrap_or(frame_width.saturating_mul(frame_count as u32)),
        options.canvas_height.unwrap_or(frame_height),
    );

    for (index, frame) in frames.into_iter().enumerate() {
        spr.set_frame(index, frame)?;
    }

    spr.write_to_file(out_path)
        .wrap_err_with(|| format!("cannot write `{}`", out_path.display()))?;

    Ok(())
}

#[cfg(test)]
mod test {
    use image::{Rgba, RgbaImage};

    use super::*;
    use crate::modules::test_fixtures::scratch_dir;

    fn write_frames(
        dir: &Path,
        colors: &[[u8; 4]],
        width: u32,
        height: u32,
    ) -> Vec<std::path::PathBuf> {
        colors
            .iter()
            .enumerate()
            .map(|(index, color)| {
                let path = dir.join(format!("frame_{index}.png"));

                RgbaImage::from_pixel(width, height, Rgba(*color))
                    .save(&path)
                    .unwrap();

                path
            })
            .collect()
    }

    #[test]
    fn pack_rgba32() {
        let dir = scratch_dir("pack_rgba32");
        let images = write_frames(&dir, &[[0, 0, 0, 0], [1, 2, 3, 0xff]], 4, 2);
        let out = dir.join("out.s32");

        let options = PackOptions {
            alpha: true,
            canvas_width: None,
            canvas_height: None,
        };

        pack(&images, &out, &options).unwrap();

        let spr = Container::open_from_file(&out).unwrap();

        assert_eq!(spr.signature(), Signature::Rgba32);
        assert_eq!(spr.frame_count(), 2);
        assert_eq!(spr.canvas_width(), 8);
        assert_eq!(spr.canvas_height(), 2);
        // two transparent runs of 4
        assert_eq!(spr.frame_size(0).unwrap(), 8);
        assert_eq!(
            spr.frame(1).unwrap().to_rgba8().get_pixel(3, 1).0,
            [1, 2, 3, 0xff]
        );
    }

    #[test]
    fn pack_rgb32_with_canvas() {
        let dir = scratch_dir("pack_rgb32");
        let images = write_frames(&dir, &[[9, 8, 7, 0xff]], 3, 3);
        let out = dir.join("out.s32");

        let options = PackOptions {
            alpha: false,
            canvas_width: Some(64),
            canvas_height: Some(32),
        };

        pack(&images, &out, &options).unwrap();

        let spr = Container::open_from_file(&out).unwrap();

        assert_eq!(spr.signature(), Signature::Rgb32);
        assert_eq!(spr.canvas_width(), 64);
        assert_eq!(spr.canvas_height(), 32);
        assert_eq!(spr.frame(0).unwrap().to_rgb8().get_pixel(2, 2).0, [9, 8, 7]);
    }

    #[test]
    fn mismatched_sizes() {
        let dir = scratch_dir("pack_mismatch");
        let mut images = write_frames(&dir, &[[0, 0, 0, 0xff]], 4, 4);
        let other = dir.join("other.png");

        RgbaImage::new(2, 2).save(&other).unwrap();
        images.push(other);

        let options = PackOptions {
            alpha: false,
            canvas_width: None,
            canvas_height: None,
        };

        let err = pack(&images, dir.join("out.s32"), &options).unwrap_err();

        assert!(err.to_string().contains("is 2x2, expected 4x4"));
    }
}
