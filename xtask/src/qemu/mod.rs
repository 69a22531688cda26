//! QEMU command construction for booting the UEFI app.

mod builder;
mod usb;

pub use builder::QemuBuilder;
pub use usb::UsbPassthrough;

/// Emulator launched when `--qemu` is not given.
pub const QEMU_BINARY: &str = "qemu-system-x86_64";
