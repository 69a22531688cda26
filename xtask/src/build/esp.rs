use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Fallback boot path the firmware probes on x86_64.
pub const BOOT_FILE: &str = "BootX64.efi";
pub const STARTUP_SCRIPT: &str = "startup.nsh";
/// Makes the UEFI shell launch the app on its own.
pub const STARTUP_COMMAND: &str = r"\EFI\BOOT\BOOTX64.EFI";

/// A directory laid out like an EFI system partition.
pub struct EspDir {
    root: PathBuf,
}

impl EspDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn boot_dir(&self) -> PathBuf {
        self.root.join("EFI").join("BOOT")
    }

    pub fn boot_file(&self) -> PathBuf {
        self.boot_dir().join(BOOT_FILE)
    }

    pub fn startup_script(&self) -> PathBuf {
        self.root.join(STARTUP_SCRIPT)
    }

    /// Install `app` as the default boot file and write the startup script.
    /// Existing files are overwritten.
    pub fn populate(&self, app: &Path) -> Result<()> {
        let boot_dir = self.boot_dir();
        fs::create_dir_all(&boot_dir)
            .with_context(|| format!("Failed to create {}", boot_dir.display()))?;

        let boot_file = self.boot_file();
        fs::copy(app, &boot_file).with_context(|| {
            format!(
                "Failed to copy {} to {}",
                app.display(),
                boot_file.display()
            )
        })?;
        log::debug!("{} -> {}", app.display(), boot_file.display());

        let script = self.startup_script();
        fs::write(&script, STARTUP_COMMAND)
            .with_context(|| format!("Failed to write {}", script.display()))?;
        Ok(())
    }
}
