use std::path::{Path, PathBuf};

use eyre::WrapErr;
use sheet::Container;

use crate::utils::misc::frame_file_path;

/// Saves every frame as `<stem>_<index>.png` inside `out_dir`.
pub fn extract_frames(
    path: impl AsRef<Path>,
    out_dir: impl AsRef<Path>,
) -> eyre::Result<Vec<PathBuf>> {
    let path = path.as_ref();
    let out_dir = out_dir.as_ref();

    let spr = Container::open_from_file(path)
        .wrap_err_with(|| format!("cannot open sprite `{}`", path.display()))?;

    if !out_dir.is_dir() {
        std::fs::create_dir_all(out_dir)
            .wrap_err_with(|| format!("cannot create `{}`", out_dir.display()))?;
    }

    spr.frames()
        .enumerate()
        .map(|(index, frame)| -> eyre::Result<PathBuf> {
            let frame = frame.wrap_err_with(|| format!("cannot decode frame #{index}"))?;
            let out_path = frame_file_path(path, out_dir, index);

            frame
                .save_image(&out_path)
                .wrap_err_with(|| format!("cannot save `{}`", out_path.display()))?;

            Ok(out_path)
        })
        .collect()
}
