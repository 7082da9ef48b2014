pub mod extract;
pub mod info;
pub mod pack;
pub mod resave;

#[cfg(test)]
pub(crate) mod test_fixtures {
    use std::path::PathBuf;

    pub fn fixture(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("sheet")
            .join("test")
            .join(name)
    }

    /// Fresh directory under the system temp dir.
    pub fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("sprtool_{}_{}", name, std::process::id()));

        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        dir
    }
}
