use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use byte_writer::ByteWriter;
use image::{Rgb, RgbaImage};

use crate::{
    constants::{
        FRAME_OFFSET_TABLE_OFFSET, FRAME_SIZE_TABLE_OFFSET, MAX_FRAME_COUNT, RGB32_MAX_RUN,
        RGBA32_MAX_TRANSPARENT_RUN,
    },
    error::SheetError,
    source::ByteSource,
    types::{Rgb32Record, Rgba32Record},
    Container, Signature,
};

type FrameEncoder = fn(&RgbaImage, &mut ByteWriter);

fn frame_encoder(signature: Signature) -> Result<FrameEncoder, SheetError> {
    if !signature.is_encodable() {
        return Err(SheetError::ReadOnlyVariant { signature });
    }

    if signature.has_alpha() {
        Ok(encode_rgba32_frame)
    } else {
        Ok(encode_rgb32_frame)
    }
}

/// Run-length encodes each row on its own. Alpha is dropped.
///
/// A pixel that matches its right neighbour opens or extends a run. Opening a run counts
/// both pixels, so the counter starts at 2, and this includes a run opening at column 0.
/// The last pixel of a row always flushes.
pub(crate) fn encode_rgb32_frame(image: &RgbaImage, writer: &mut ByteWriter) {
    for row in image.rows() {
        let row: Vec<Rgb<u8>> = row.map(|pixel| Rgb([pixel[0], pixel[1], pixel[2]])).collect();
        let mut run: u8 = 0;

        for (x, pixel) in row.iter().enumerate() {
            let matches_next = row.get(x + 1).is_some_and(|next| next == pixel);

            if matches_next && run < RGB32_MAX_RUN {
                run = if run == 0 { 2 } else { run + 1 };
                continue;
            }

            let [red, green, blue] = pixel.0;
            let record = Rgb32Record {
                count: run.max(1),
                blue,
                green,
                red,
            };

            writer.append_u8_slice(&record.to_bytes());
            run = 0;
        }
    }
}

fn flush_transparent_run(run: &mut u8, writer: &mut ByteWriter) {
    if *run > 0 {
        writer.append_u8_slice(&Rgba32Record::transparent_run(*run).to_bytes());
        *run = 0;
    }
}

/// Only transparency is run-length encoded. Every visible pixel gets its own record.
pub(crate) fn encode_rgba32_frame(image: &RgbaImage, writer: &mut ByteWriter) {
    for row in image.rows() {
        let mut run: u8 = 0;

        for pixel in row {
            let [red, green, blue, alpha] = pixel.0;

            if alpha == 0 {
                if run == RGBA32_MAX_TRANSPARENT_RUN {
                    flush_transparent_run(&mut run, writer);
                }

                run += 1;
                continue;
            }

            flush_transparent_run(&mut run, writer);

            let record = Rgba32Record {
                alpha,
                red,
                green,
                blue,
            };
            writer.append_u8_slice(&record.to_bytes());
        }

        flush_transparent_run(&mut run, writer);
    }
}

impl<S: ByteSource> Container<S> {
    /// Encodes every frame and lays out a complete 32-bit sprite.
    ///
    /// Frames not accessed yet are decoded from the source first.
    pub fn write_to_bytes(&self) -> Result<Vec<u8>, SheetError> {
        let signature = self.signature();
        let encode_frame = frame_encoder(signature)?;
        let frame_count = self.frame_count();

        if frame_count > MAX_FRAME_COUNT {
            return Err(SheetError::TooManyFrames {
                frame_count,
                max: MAX_FRAME_COUNT,
            });
        }

        let mut pixel_data = ByteWriter::new();
        let mut offsets = Vec::with_capacity(frame_count);
        let mut sizes = Vec::with_capacity(frame_count);

        for frame_index in 0..frame_count {
            let frame = self.frame(frame_index)?;

            if frame.width() != self.frame_width() || frame.height() != self.frame_height() {
                return Err(SheetError::DimensionMismatch {
                    frame_index,
                    expected_width: self.frame_width(),
                    expected_height: self.frame_height(),
                    width: frame.width(),
                    height: frame.height(),
                });
            }

            let start = pixel_data.get_offset();
            encode_frame(&frame.to_rgba8(), &mut pixel_data);

            offsets.push(start as u32);
            sizes.push((pixel_data.get_offset() - start) as u32);
        }

        // equal to the last offset plus the last size
        let total_data_size = pixel_data.get_offset() as u32;
        let layout = self.layout();

        let mut writer =
            ByteWriter::with_capacity(layout.pixel_data as usize + pixel_data.data.len());

        writer.append_u32(signature.value());
        writer.append_u32(self.frame_width());
        writer.append_u32(self.frame_height());
        writer.append_u32(frame_count as u32);

        writer.pad_to(FRAME_OFFSET_TABLE_OFFSET as usize);
        writer.append_u32_slice(&offsets);

        writer.pad_to(FRAME_SIZE_TABLE_OFFSET as usize);
        sizes.iter().for_each(|size| writer.append_u32(size / 4));

        writer.pad_to(layout.total_data_size as usize);
        writer.append_u32(total_data_size);
        writer.append_u32(self.canvas_width());
        writer.append_u32(self.canvas_height());

        writer.pad_to(layout.pixel_data as usize);
        writer.append_u8_slice(&pixel_data.data);

        log::debug!(
            "encoded {signature:?} sprite: {frame_count} frames, {total_data_size} bytes of pixel data"
        );

        Ok(writer.data)
    }

    pub fn save(&self, writer: &mut impl Write) -> Result<(), SheetError> {
        let bytes = self.write_to_bytes()?;

        writer.write_all(&bytes)?;
        writer.flush()?;

        Ok(())
    }

    pub fn write_to_file(&self, path: impl AsRef<Path> + Into<PathBuf>) -> Result<(), SheetError> {
        // nothing is written when encoding fails
        let bytes = self.write_to_bytes()?;

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        file.write_all(&bytes)?;
        file.flush()?;

        Ok(())
    }
}
