use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

use crate::build::{APP_NAME, PROFILE, TARGET};

pub fn repo_root() -> Result<PathBuf> {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask is expected at <repo>/xtask")
}

/// Where things live on disk for one invocation.
#[derive(Clone, Debug)]
pub struct Layout {
    workspace: PathBuf,
    target_dir: PathBuf,
}

impl Layout {
    /// Resolve the layout rooted at `workspace`, honouring `CARGO_TARGET_DIR`.
    pub fn new(workspace: impl AsRef<Path>) -> Result<Self> {
        let target_dir = env::var_os("CARGO_TARGET_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);
        Self::with_target_dir(workspace, target_dir)
    }

    fn with_target_dir(workspace: impl AsRef<Path>, target_dir: Option<PathBuf>) -> Result<Self> {
        let workspace = std::path::absolute(workspace.as_ref()).with_context(|| {
            format!("Failed to resolve workspace {}", workspace.as_ref().display())
        })?;
        let target_dir = match target_dir {
            Some(dir) => workspace.join(dir),
            None => workspace.join("target"),
        };
        Ok(Self {
            workspace,
            target_dir,
        })
    }

    pub fn workspace(&self) -> &Path {
        &self.workspace
    }

    /// Directory QEMU mounts as a FAT drive.
    pub fn build_dir(&self) -> PathBuf {
        self.workspace.join("build")
    }

    pub fn cargo_output_dir(&self) -> PathBuf {
        self.target_dir.join(TARGET).join(PROFILE)
    }

    /// The `.efi` image cargo leaves behind for the UEFI app.
    pub fn built_app(&self) -> PathBuf {
        self.cargo_output_dir().join(format!("{APP_NAME}.efi"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let layout = Layout::with_target_dir("/work/uefi", None).unwrap();
        assert_eq!(layout.build_dir(), PathBuf::from("/work/uefi/build"));
        assert_eq!(
            layout.built_app(),
            PathBuf::from("/work/uefi/target/x86_64-unknown-uefi/debug/device-path-rs.efi")
        );
    }

    #[test]
    fn test_relative_target_dir_is_under_workspace() {
        let layout = Layout::with_target_dir("/work/uefi", Some("out".into())).unwrap();
        assert_eq!(
            layout.cargo_output_dir(),
            PathBuf::from("/work/uefi/out/x86_64-unknown-uefi/debug")
        );
    }

    #[test]
    fn test_absolute_target_dir_wins() {
        let layout = Layout::with_target_dir("/work/uefi", Some("/tmp/tgt".into())).unwrap();
        assert_eq!(
            layout.cargo_output_dir(),
            PathBuf::from("/tmp/tgt/x86_64-unknown-uefi/debug")
        );
    }

    #[test]
    fn test_relative_workspace_is_made_absolute() {
        let layout = Layout::with_target_dir("uefi", None).unwrap();
        assert!(layout.workspace().is_absolute());
        assert!(layout.workspace().ends_with("uefi"));
    }

    #[test]
    fn test_repo_root_holds_xtask() {
        let root = repo_root().unwrap();
        assert!(root.join("xtask").join("Cargo.toml").is_file());
    }
}
