use std::path::Path;
use std::process::Command;

/// Pins the toolchain environment so the UEFI build does not depend on the caller's shell.
///
/// `RUSTFLAGS` is blanked and `RUST_TARGET_PATH` points at the workspace, where
/// custom target definitions are looked up.
pub fn apply_to_command(cmd: &mut Command, workspace: &Path) {
    cmd.env("RUSTFLAGS", "");
    cmd.env("RUST_TARGET_PATH", workspace);
}
