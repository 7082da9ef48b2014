use std::{fmt::Write, path::Path};

use eyre::WrapErr;
use sheet::Container;

/// Human readable summary of a sprite and its frame table.
pub fn sprite_info(path: impl AsRef<Path>) -> eyre::Result<String> {
    let path = path.as_ref();

    let spr = Container::open_from_file(path)
        .wrap_err_with(|| format!("cannot open sprite `{}`", path.display()))?;

    let mut res = String::new();

    writeln!(res, "{}", path.display())?;
    writeln!(
        res,
        "signature: {:#04x} ({:?}, {} bit{})",
        spr.signature().value(),
        spr.signature(),
        spr.color_bits(),
        if spr.has_alpha() { ", alpha" } else { "" }
    )?;
    writeln!(
        res,
        "frame: {}x{}, {} frames",
        spr.frame_width(),
        spr.frame_height(),
        spr.frame_count()
    )?;
    writeln!(res, "canvas: {}x{}", spr.canvas_width(), spr.canvas_height())?;
    writeln!(res, "pixel data: {} bytes", spr.total_data_size()?)?;

    for index in 0..spr.frame_count() {
        writeln!(
            res,
            "#{:<4} offset {:<8} size {}",
            index,
            spr.frame_offset(index)?,
            spr.frame_size(index)?
        )?;
    }

    Ok(res)
}
