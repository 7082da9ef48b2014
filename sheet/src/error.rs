use crate::Signature;

#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("Unknown sprite signature: {signature:#04x}")]
    UnknownSignature { signature: u32 },
    #[error("Truncated input: cannot read {length} bytes at offset {offset:#x}")]
    TruncatedInput { offset: u64, length: usize },
    #[error("Frame index {index} is out of range. Frame count ({frame_count})")]
    IndexOutOfRange { index: usize, frame_count: usize },
    #[error("Frame #{frame_index} decodes to {produced} pixels. Expect ({expected})")]
    CorruptFrame {
        frame_index: usize,
        expected: usize,
        produced: usize,
    },
    #[error("Frame offset table decreases after frame #{index}")]
    CorruptOffsets { index: usize },
    #[error(
        "Frame #{frame_index} is {width}x{height}. Expect ({expected_width}x{expected_height})"
    )]
    DimensionMismatch {
        frame_index: usize,
        expected_width: u32,
        expected_height: u32,
        width: u32,
        height: u32,
    },
    #[error("Frame #{frame_index} is empty")]
    IncompleteContainer { frame_index: usize },
    #[error("Cannot encode {signature:?} sprites")]
    ReadOnlyVariant { signature: Signature },
    #[error("Too many frames to encode: {frame_count}. Max ({max})")]
    TooManyFrames { frame_count: usize, max: usize },
    #[error("IOError: {source}")]
    IOError {
        #[from]
        source: std::io::Error,
    },
    #[error("Error writing image: {source}")]
    ImageError {
        #[from]
        source: image::ImageError,
    },
}
