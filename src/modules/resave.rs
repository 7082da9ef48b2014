use std::path::Path;

use eyre::WrapErr;
use sheet::Container;

use crate::{err, utils::misc::first_difference};

/// Opens a sprite and saves it again.
///
/// With `check`, the output must match the input byte for byte, otherwise nothing is written.
pub fn resave(
    path: impl AsRef<Path>,
    out_path: impl AsRef<Path>,
    check: bool,
) -> eyre::Result<()> {
    let path = path.as_ref();
    let out_path = out_path.as_ref();

    let input = std::fs::read(path).wrap_err_with(|| format!("cannot read `{}`", path.display()))?;

    let spr = Container::open_from_bytes(&input)
        .wrap_err_with(|| format!("cannot open sprite `{}`", path.display()))?;
    let bytes = spr.write_to_bytes().wrap_err("cannot encode sprite")?;

    if check {
        if let Some(offset) = first_difference(&input, &bytes) {
            return err!(
                "output differs from `{}` at offset {:#x} ({} bytes in, {} bytes out)",
                path.display(),
                offset,
                input.len(),
                bytes.len()
            );
        }
    }

    std::fs::write(out_path, bytes)
        .wrap_err_with(|| format!("cannot write `{}`", out_path.display()))?;

    Ok(())
}
