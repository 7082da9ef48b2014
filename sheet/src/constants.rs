/// Signature, frame width, frame height, frame count.
pub const HEADER_LENGTH: usize = 16;

pub const FRAME_OFFSET_TABLE_OFFSET: u64 = 0x4c0;
/// Encoded frame sizes divided by 4. Only written by 32-bit sprites.
pub const FRAME_SIZE_TABLE_OFFSET: u64 = 0x970;

/// Offset table entries that fit before the size table.
pub const MAX_FRAME_COUNT: usize =
    ((FRAME_SIZE_TABLE_OFFSET - FRAME_OFFSET_TABLE_OFFSET) / 4) as usize;

pub const PALETTE8_SIGNATURE: u32 = 0x09;
pub const RGB32_SIGNATURE: u32 = 0x0f;
pub const RGBA32_SIGNATURE: u32 = 0x19;

pub const PALETTE8_TOTAL_DATA_SIZE_OFFSET: u64 = 0xbc8;
pub const PALETTE8_CANVAS_WIDTH_OFFSET: u64 = 0xbcc;
pub const PALETTE8_CANVAS_HEIGHT_OFFSET: u64 = 0xbd0;
pub const PALETTE8_PIXEL_DATA_OFFSET: u64 = 0xbf4;

pub const TRUE_COLOR_TOTAL_DATA_SIZE_OFFSET: u64 = 0xe20;
pub const TRUE_COLOR_CANVAS_WIDTH_OFFSET: u64 = 0xe24;
pub const TRUE_COLOR_CANVAS_HEIGHT_OFFSET: u64 = 0xe28;
pub const TRUE_COLOR_PIXEL_DATA_OFFSET: u64 = 0xe4c;

/// 8-bit escape byte. Followed by a count, always repeats this same index.
pub const PALETTE8_ESCAPE_INDEX: u8 = 0xfe;

pub const RGB32_MAX_RUN: u8 = 0xff;
pub const RGBA32_MAX_TRANSPARENT_RUN: u8 = 254;

/// Color given to transparent pixels on decode.
pub const TRANSPARENT_SENTINEL: [u8; 3] = [0xfc, 0xe0, 0xfc];
