use std::path::{Path, PathBuf};

#[macro_export]
macro_rules! err {
    ($e: ident) => {{
        use eyre::eyre;

        Err(eyre!($e))
    }};

    ($format_string: literal) => {{
        use eyre::eyre;

        Err(eyre!($format_string))
    }};

    ($($arg:tt)*) => {{
        use eyre::eyre;

        Err(eyre!($($arg)*))
    }};
}

/// `<out_dir>/<sprite stem>_<index>.png`
pub fn frame_file_path(sprite_path: &Path, out_dir: &Path, frame_index: usize) -> PathBuf {
    let stem = sprite_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sprite".to_string());

    out_dir.join(format!("{stem}_{frame_index}.png"))
}

/// Offset of the first differing byte, or of the end of the shorter slice when one is a prefix.
pub fn first_difference(left: &[u8], right: &[u8]) -> Option<usize> {
    left.iter()
        .zip(right)
        .position(|(l, r)| l != r)
        .or_else(|| (left.len() != right.len()).then_some(left.len().min(right.len())))
}
