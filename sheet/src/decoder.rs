//! Run-length decoding of a single frame's pixel stream.
//!
//! Pixels are produced row-major until the frame is full. A run that would overshoot the frame
//! is corruption, running out of bytes first is truncation.

use image::{RgbImage, RgbaImage};

use crate::{
    constants::{PALETTE8_ESCAPE_INDEX, TRANSPARENT_SENTINEL},
    error::SheetError,
    parser::{parse_palette8_record, parse_rgb32_record, parse_rgba32_record, IResult},
    types::{FramePixels, IndexedImage, Palette8Record},
    Signature,
};

/// Compressed bytes of one frame and where they came from.
pub(crate) struct FrameRegion<'a> {
    pub index: usize,
    /// Absolute offset of `data` in the source.
    pub start: u64,
    pub data: &'a [u8],
    pub width: u32,
    pub height: u32,
}

impl<'a> FrameRegion<'a> {
    fn pixel_count(&self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }

    /// Runs one record parser at `i`, reporting failure at the absolute offset of `i`.
    fn next_record<T>(
        &self,
        i: &'a [u8],
        record_length: usize,
        parser: impl Fn(&'a [u8]) -> IResult<'a, T>,
    ) -> Result<(&'a [u8], T), SheetError> {
        parser(i).map_err(|_| SheetError::TruncatedInput {
            offset: self.start + (self.data.len() - i.len()) as u64,
            length: record_length,
        })
    }

    fn overshoot(&self, produced: usize) -> SheetError {
        SheetError::CorruptFrame {
            frame_index: self.index,
            expected: self.pixel_count(),
            produced,
        }
    }

    fn check_trailing(&self, rest: &[u8]) {
        if !rest.is_empty() {
            log::warn!(
                "frame #{} has {} trailing bytes after its last pixel",
                self.index,
                rest.len()
            );
        }
    }
}

/// Pixels accumulated so far, with the frame size as a hard limit.
struct PixelSink {
    bytes: Vec<u8>,
    channels: usize,
    pixel_count: usize,
}

impl PixelSink {
    fn new(region: &FrameRegion, channels: usize) -> Self {
        let pixel_count = region.pixel_count();
        // a run record yields at most 255 pixels, so the data length bounds the useful capacity
        let capacity = pixel_count.min(region.data.len().saturating_mul(255));

        Self {
            bytes: Vec::with_capacity(capacity.saturating_mul(channels)),
            channels,
            pixel_count,
        }
    }

    fn produced(&self) -> usize {
        self.bytes.len() / self.channels
    }

    fn is_full(&self) -> bool {
        self.produced() >= self.pixel_count
    }

    fn push_run(
        &mut self,
        region: &FrameRegion,
        pixel: &[u8],
        count: u8,
    ) -> Result<(), SheetError> {
        let produced = self.produced() + count as usize;

        if produced > self.pixel_count {
            return Err(region.overshoot(produced));
        }

        (0..count).for_each(|_| self.bytes.extend_from_slice(pixel));

        Ok(())
    }
}

pub(crate) fn decode_frame(
    signature: Signature,
    region: &FrameRegion,
) -> Result<FramePixels, SheetError> {
    match signature {
        Signature::Palette8 => decode_palette8(region).map(FramePixels::Indexed),
        Signature::Rgb32 => decode_rgb32(region).map(FramePixels::Rgb),
        Signature::Rgba32 => decode_rgba32(region).map(FramePixels::Rgba),
    }
}

pub(crate) fn decode_palette8(region: &FrameRegion) -> Result<IndexedImage, SheetError> {
    let mut sink = PixelSink::new(region, 1);
    let mut i = region.data;

    while !sink.is_full() {
        let (rest, record) = region.next_record(i, 1, parse_palette8_record)?;

        match record {
            Palette8Record::Index(index) => sink.push_run(region, &[index], 1)?,
            Palette8Record::Escape { count } => {
                sink.push_run(region, &[PALETTE8_ESCAPE_INDEX], count)?
            }
        }

        i = rest;
    }

    region.check_trailing(i);

    let produced = sink.produced();
    IndexedImage::from_raw(region.width, region.height, sink.bytes)
        .ok_or_else(|| region.overshoot(produced))
}

pub(crate) fn decode_rgb32(region: &FrameRegion) -> Result<RgbImage, SheetError> {
    let mut sink = PixelSink::new(region, 3);
    let mut i = region.data;

    while !sink.is_full() {
        let (rest, record) = region.next_record(i, 4, parse_rgb32_record)?;

        sink.push_run(region, &[record.red, record.green, record.blue], record.count)?;

        i = rest;
    }

    region.check_trailing(i);

    let produced = sink.produced();
    RgbImage::from_raw(region.width, region.height, sink.bytes)
        .ok_or_else(|| region.overshoot(produced))
}

pub(crate) fn decode_rgba32(region: &FrameRegion) -> Result<RgbaImage, SheetError> {
    let [sentinel_red, sentinel_green, sentinel_blue] = TRANSPARENT_SENTINEL;
    let transparent = [sentinel_red, sentinel_green, sentinel_blue, 0];

    let mut sink = PixelSink::new(region, 4);
    let mut i = region.data;

    while !sink.is_full() {
        let (rest, record) = region.next_record(i, 4, parse_rgba32_record)?;

        match record.transparent_run_length() {
            Some(count) => sink.push_run(region, &transparent, count)?,
            None => sink.push_run(
                region,
                &[record.red, record.green, record.blue, record.alpha],
                1,
            )?,
        }

        i = rest;
    }

    region.check_trailing(i);

    let produced = sink.produced();
    RgbaImage::from_raw(region.width, region.height, sink.bytes)
        .ok_or_else(|| region.overshoot(produced))
}
