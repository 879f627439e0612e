//! Per-user directories used by the pipeline.
#[derive(Debug)]
pub enum FsAccess {
    Config,
}

impl FsAccess {
    /// Retrieves the base path for the specified directory type with the `rdd` subdirectory appended.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - The base path for the directory.
    fn get_path(&self) -> anyhow::Result<std::path::PathBuf> {
        let base_path = match self {
            FsAccess::Config => dirs::config_dir(),
        };

        let mut path = base_path.ok_or_else(|| {
            anyhow::anyhow!("Unsupported operating system. Supported OS: Linux, MacOS, Windows.")
        })?;

        path.push("rdd");
        Ok(path)
    }

    /// Returns the default path for the `rdd` directory, e.g. `~/.config/rdd`.
    /// Nothing is created.
    pub fn path(&self) -> anyhow::Result<std::path::PathBuf> {
        self.get_path()
    }

    /// Creates the specified directory if it does not exist.
    pub fn create_directory(path: &std::path::Path) -> anyhow::Result<()> {
        if !path.exists() {
            std::fs::create_dir_all(path)?;
        }
        Ok(())
    }
}
