//! Building the UEFI app and laying out the boot directory.
//!
//! - `esp` - the FAT directory tree QEMU boots from

mod esp;

pub use esp::EspDir;

use anyhow::{bail, Result};
use std::env;
use std::ffi::OsString;
use std::process::Command;

use crate::util::process::run_checked;
use crate::util::repo::Layout;

pub const ARCH: &str = "x86_64";
pub const TARGET: &str = "x86_64-unknown-uefi";
pub const PROFILE: &str = "debug";
pub const APP_NAME: &str = "device-path-rs";

/// `cargo build` for the UEFI app, with the pinned toolchain environment.
pub fn cargo_build_command(layout: &Layout) -> Command {
    let cargo = env::var_os("CARGO").unwrap_or_else(|| OsString::from("cargo"));
    let mut cmd = Command::new(cargo);
    cmd.current_dir(layout.workspace())
        .args(["build", "--package", APP_NAME, "--target", TARGET]);
    crate::util::tools_env::apply_to_command(&mut cmd, layout.workspace());
    cmd
}

pub fn run(layout: &Layout) -> Result<()> {
    log::info!("Building {APP_NAME} for {ARCH} ({TARGET}, {PROFILE})");
    run_checked(&mut cargo_build_command(layout))?;

    let built = layout.built_app();
    if !built.is_file() {
        bail!(
            "cargo reported success but {} was not produced",
            built.display()
        );
    }

    let esp = EspDir::new(layout.build_dir());
    esp.populate(&built)?;
    log::info!("Boot directory ready at {}", esp.root().display());
    Ok(())
}
