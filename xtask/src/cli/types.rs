use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "xtask")]
#[command(about = "Build script for the device-path-rs UEFI app")]
pub struct Cli {
    /// Workspace holding the UEFI app and the `build/` boot directory.
    ///
    /// Defaults to the repository this xtask lives in.
    #[arg(
        long = "workspace-dir",
        env = "UEFI_WORKSPACE_DIR",
        value_name = "PATH",
        global = true
    )]
    pub workspace: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Build the UEFI app and lay out `build/` as a bootable FAT directory.
    Build,

    /// Boot `build/` in QEMU with OVMF firmware.
    ///
    /// Usage:
    ///   cargo xtask run --ovmf-code OVMF_CODE.fd --ovmf-vars OVMF_VARS.fd
    Run(RunArgs),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// OVMF firmware code image, attached read-only.
    #[arg(long = "ovmf-code", env = "OVMF_CODE", value_name = "PATH")]
    pub ovmf_code: PathBuf,

    /// OVMF variable store image, attached read-write.
    #[arg(long = "ovmf-vars", env = "OVMF_VARS", value_name = "PATH")]
    pub ovmf_vars: PathBuf,

    /// Host USB bus of the device to pass through (needs --hostaddr).
    #[arg(long, value_name = "ID")]
    pub hostbus: Option<String>,

    /// Host USB address of the device to pass through (needs --hostbus).
    #[arg(long, value_name = "ID")]
    pub hostaddr: Option<String>,

    /// USB vendor id of the device to pass through (needs --productid).
    #[arg(long, value_name = "ID")]
    pub vendorid: Option<String>,

    /// USB product id of the device to pass through (needs --vendorid).
    #[arg(long, value_name = "ID")]
    pub productid: Option<String>,

    /// QEMU system emulator to launch.
    #[arg(
        long = "qemu",
        env = "QEMU",
        value_name = "PATH",
        default_value = crate::qemu::QEMU_BINARY
    )]
    pub qemu: PathBuf,
}
