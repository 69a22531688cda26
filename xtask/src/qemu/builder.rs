//! QEMU command builder

use super::UsbPassthrough;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// q35 with KVM, falling back to TCG when KVM is unavailable.
const MACHINE: &str = "q35,accel=kvm:tcg";
const MEMORY: &str = "128M";
/// The monitor gets its own virtual console so serial can own stdio.
const MONITOR: &str = "vc:1024x768";

/// QEMU command builder with fluent API
#[derive(Clone, Debug)]
pub struct QemuBuilder {
    qemu: PathBuf,
    ovmf_code: PathBuf,
    ovmf_vars: PathBuf,
    fat_dir: PathBuf,
    usb: Option<UsbPassthrough>,
}

impl QemuBuilder {
    /// Boot `fat_dir` as a FAT drive under the given OVMF images.
    pub fn new(
        qemu: impl Into<PathBuf>,
        ovmf_code: impl Into<PathBuf>,
        ovmf_vars: impl Into<PathBuf>,
        fat_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            qemu: qemu.into(),
            ovmf_code: ovmf_code.into(),
            ovmf_vars: ovmf_vars.into(),
            fat_dir: fat_dir.into(),
            usb: None,
        }
    }

    /// Attach a host USB device behind an xHCI controller.
    pub fn usb(mut self, usb: Option<UsbPassthrough>) -> Self {
        self.usb = usb;
        self
    }

    /// Build the QEMU command
    pub fn build(self) -> Command {
        let mut cmd = Command::new(&self.qemu);

        cmd.arg("-nographic");
        // QEMU's default devices only slow the boot down.
        cmd.arg("-nodefaults");
        cmd.args(["-vga", "std"]);
        cmd.args(["-machine", MACHINE]);
        cmd.args(["-m", MEMORY]);

        // OVMF
        cmd.arg("-drive").arg(drive_spec(
            "if=pflash,format=raw,readonly=on,file=",
            &self.ovmf_code,
        ));
        cmd.arg("-drive").arg(drive_spec(
            "if=pflash,format=raw,file=",
            &self.ovmf_vars,
        ));

        // Boot directory as a writable FAT partition
        cmd.arg("-drive").arg(drive_spec(
            "format=raw,file=fat:rw:",
            &self.fat_dir,
        ));

        // OVMF routes the UEFI console to the serial port.
        cmd.args(["-serial", "stdio"]);
        cmd.args(["-monitor", MONITOR]);

        if let Some(ref usb) = self.usb {
            cmd.args(["-device", "qemu-xhci,id=xhci"]);
            cmd.args(["-device", &usb.device_spec()]);
        }

        cmd
    }
}

/// `prefix` followed by `path`, with commas doubled so QEMU's option parser
/// keeps them in the file name.
fn drive_spec(prefix: &str, path: &Path) -> OsString {
    let mut spec = OsString::from(prefix);
    match path.to_str() {
        Some(path) => spec.push(path.replace(',', ",,")),
        None => spec.push(path),
    }
    spec
}
