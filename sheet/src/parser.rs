use nom::{
    combinator::map,
    multi::count,
    number::complete::{le_u32, le_u8},
    IResult as _IResult, Parser,
};

use crate::{
    constants::PALETTE8_ESCAPE_INDEX,
    types::{Palette8Record, Rgb32Record, Rgba32Record, SheetHeader},
};

pub type IResult<'a, T> = _IResult<&'a [u8], T>;

pub fn parse_header(i: &'_ [u8]) -> IResult<'_, SheetHeader> {
    map(
        (le_u32, le_u32, le_u32, le_u32),
        |(signature, frame_width, frame_height, frame_count)| SheetHeader {
            signature,
            frame_width,
            frame_height,
            frame_count,
        },
    )
    .parse(i)
}

pub fn parse_frame_offsets(i: &'_ [u8], frame_count: usize) -> IResult<'_, Vec<u32>> {
    count(le_u32, frame_count).parse(i)
}

pub fn parse_u32(i: &'_ [u8]) -> IResult<'_, u32> {
    le_u32(i)
}

pub fn parse_palette8_record(i: &'_ [u8]) -> IResult<'_, Palette8Record> {
    let (i, index) = le_u8(i)?;

    if index != PALETTE8_ESCAPE_INDEX {
        return Ok((i, Palette8Record::Index(index)));
    }

    // a dangling escape byte is truncation, not a plain index
    map(le_u8, |count| Palette8Record::Escape { count }).parse(i)
}

pub fn parse_rgb32_record(i: &'_ [u8]) -> IResult<'_, Rgb32Record> {
    map(
        (le_u8, le_u8, le_u8, le_u8),
        |(count, blue, green, red)| Rgb32Record {
            count,
            blue,
            green,
            red,
        },
    )
    .parse(i)
}

pub fn parse_rgba32_record(i: &'_ [u8]) -> IResult<'_, Rgba32Record> {
    map(
        (le_u8, le_u8, le_u8, le_u8),
        |(alpha, red, green, blue)| Rgba32Record {
            alpha,
            red,
            green,
            blue,
        },
    )
    .parse(i)
}
