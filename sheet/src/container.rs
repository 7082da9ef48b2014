use std::cell::OnceCell;

use crate::{
    constants::{FRAME_OFFSET_TABLE_OFFSET, HEADER_LENGTH},
    decoder::{decode_frame, FrameRegion},
    error::SheetError,
    parser::{parse_frame_offsets, parse_header, parse_u32},
    source::ByteSource,
    types::{Frame, FramePixels, SheetHeader},
    Layout, Signature,
};

/// A sprite sheet: a grid of same-sized frames behind one signature.
///
/// Frames decode on first access and stay cached for the life of the container. The cache
/// makes a container `!Sync`, so it has one owner at a time.
#[derive(Debug)]
pub struct Container<S = Vec<u8>> {
    /// `None` for containers assembled in memory.
    source: Option<S>,
    signature: Signature,
    frame_width: u32,
    frame_height: u32,
    canvas_width: u32,
    canvas_height: u32,
    frame_offsets: Vec<u32>,
    total_data_size: OnceCell<u32>,
    frames: Vec<OnceCell<Frame>>,
}

fn read_u32_at(source: &impl ByteSource, offset: u64) -> Result<u32, SheetError> {
    let bytes = source.read_at(offset, 4)?;

    parse_u32(&bytes)
        .map(|(_, val)| val)
        .map_err(|_| SheetError::TruncatedInput { offset, length: 4 })
}

impl Container {
    /// Creates an empty container to be filled with [`Container::set_frame`] before saving.
    ///
    /// The offset table stays zeroed until the container is saved and opened again.
    pub fn new(
        signature: Signature,
        frame_width: u32,
        frame_height: u32,
        frame_count: usize,
        canvas_width: u32,
        canvas_height: u32,
    ) -> Self {
        Self {
            source: None,
            signature,
            frame_width,
            frame_height,
            canvas_width,
            canvas_height,
            frame_offsets: vec![0; frame_count],
            total_data_size: OnceCell::from(0),
            frames: (0..frame_count).map(|_| OnceCell::new()).collect(),
        }
    }
}

impl<S: ByteSource> Container<S> {
    /// Reads the header, offset table and canvas size. Frames are decoded later, on access.
    pub fn open(source: S) -> Result<Self, SheetError> {
        let header = parse_header(&source.read_at(0, HEADER_LENGTH)?)
            .map(|(_, header)| header)
            .map_err(|_| SheetError::TruncatedInput {
                offset: 0,
                length: HEADER_LENGTH,
            })?;

        let SheetHeader {
            signature,
            frame_width,
            frame_height,
            frame_count,
        } = header;

        let signature = Signature::try_from(signature)?;
        let layout = signature.layout();
        let frame_count = frame_count as usize;

        let table_length = frame_count.saturating_mul(4);
        let frame_offsets = parse_frame_offsets(
            &source.read_at(FRAME_OFFSET_TABLE_OFFSET, table_length)?,
            frame_count,
        )
        .map(|(_, offsets)| offsets)
        .map_err(|_| SheetError::TruncatedInput {
            offset: FRAME_OFFSET_TABLE_OFFSET,
            length: table_length,
        })?;

        let canvas_width = read_u32_at(&source, layout.canvas_width)?;
        let canvas_height = read_u32_at(&source, layout.canvas_height)?;

        log::debug!(
            "opened {signature:?} sprite: {frame_count} frames of {frame_width}x{frame_height}, canvas {canvas_width}x{canvas_height}"
        );

        Ok(Self {
            source: Some(source),
            signature,
            frame_width,
            frame_height,
            canvas_width,
            canvas_height,
            frame_offsets,
            total_data_size: OnceCell::new(),
            frames: (0..frame_count).map(|_| OnceCell::new()).collect(),
        })
    }

    pub fn signature(&self) -> Signature {
        self.signature
    }

    pub fn layout(&self) -> &'static Layout {
        self.signature.layout()
    }

    pub fn color_bits(&self) -> u32 {
        self.signature.color_bits()
    }

    pub fn has_alpha(&self) -> bool {
        self.signature.has_alpha()
    }

    pub fn frame_width(&self) -> u32 {
        self.frame_width
    }

    pub fn frame_height(&self) -> u32 {
        self.frame_height
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn canvas_width(&self) -> u32 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> u32 {
        self.canvas_height
    }

    pub fn source(&self) -> Option<&S> {
        self.source.as_ref()
    }

    fn check_index(&self, index: usize) -> Result<(), SheetError> {
        if index < self.frame_count() {
            Ok(())
        } else {
            Err(SheetError::IndexOutOfRange {
                index,
                frame_count: self.frame_count(),
            })
        }
    }

    /// Offset of the frame's data, relative to the start of the pixel data.
    pub fn frame_offset(&self, index: usize) -> Result<u32, SheetError> {
        self.check_index(index)?;

        Ok(self.frame_offsets[index])
    }

    /// Compressed length of the frame's data.
    ///
    /// The last frame is measured against the stored total data size, read on first use.
    pub fn frame_size(&self, index: usize) -> Result<u32, SheetError> {
        let start = self.frame_offset(index)?;

        let end = match self.frame_offsets.get(index + 1) {
            Some(next) => *next,
            None => self.total_data_size()?,
        };

        end.checked_sub(start)
            .ok_or(SheetError::CorruptOffsets { index })
    }

    pub fn total_data_size(&self) -> Result<u32, SheetError> {
        if let Some(size) = self.total_data_size.get() {
            return Ok(*size);
        }

        let size = match &self.source {
            Some(source) => read_u32_at(source, self.layout().total_data_size)?,
            None => 0,
        };

        Ok(*self.total_data_size.get_or_init(|| size))
    }

    /// Returns the frame at `index`, decoding it on first access.
    pub fn frame(&self, index: usize) -> Result<&Frame, SheetError> {
        self.check_index(index)?;

        let slot = &self.frames[index];

        if let Some(frame) = slot.get() {
            return Ok(frame);
        }

        let frame = self.decode(index)?;

        Ok(slot.get_or_init(|| frame))
    }

    pub fn frames(&self) -> impl Iterator<Item = Result<&Frame, SheetError>> + '_ {
        (0..self.frame_count()).map(|index| self.frame(index))
    }

    /// Decodes every frame now instead of on access.
    pub fn decode_all(&self) -> Result<(), SheetError> {
        self.frames().try_for_each(|frame| frame.map(|_| ()))
    }

    /// Whether the frame is already decoded or was set by the caller.
    pub fn is_frame_loaded(&self, index: usize) -> bool {
        self.frames
            .get(index)
            .is_some_and(|slot| slot.get().is_some())
    }

    /// Replaces the frame at `index`.
    ///
    /// Dimensions are checked when the container is saved, not here.
    pub fn set_frame(
        &mut self,
        index: usize,
        pixels: impl Into<FramePixels>,
    ) -> Result<(), SheetError> {
        self.check_index(index)?;

        self.frames[index] = OnceCell::from(Frame {
            index,
            pixels: pixels.into(),
        });

        Ok(())
    }

    fn decode(&self, index: usize) -> Result<Frame, SheetError> {
        let Some(source) = &self.source else {
            return Err(SheetError::IncompleteContainer { frame_index: index });
        };

        let start = self.layout().pixel_data + self.frame_offset(index)? as u64;
        let size = self.frame_size(index)? as usize;
        let data = source.read_at(start, size)?;

        let region = FrameRegion {
            index,
            start,
            data: &data,
            width: self.frame_width,
            height: self.frame_height,
        };

        let pixels = decode_frame(self.signature, &region)?;

        Ok(Frame { index, pixels })
    }
}
