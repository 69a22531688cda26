use anyhow::Result;
use std::process::Command;

use crate::cli::RunArgs;
use crate::qemu::{QemuBuilder, UsbPassthrough};
use crate::util::process::run_checked;
use crate::util::repo::Layout;

pub fn qemu_command(layout: &Layout, args: &RunArgs) -> Command {
    let usb = UsbPassthrough::select(
        args.hostbus.as_deref(),
        args.hostaddr.as_deref(),
        args.vendorid.as_deref(),
        args.productid.as_deref(),
    );

    QemuBuilder::new(
        &args.qemu,
        &args.ovmf_code,
        &args.ovmf_vars,
        layout.build_dir(),
    )
    .usb(usb)
    .build()
}

/// Boot the current `build/` directory and block until QEMU exits.
pub fn run(layout: &Layout, args: &RunArgs) -> Result<()> {
    let mut cmd = qemu_command(layout, args);
    log::info!("Starting QEMU on {}", layout.build_dir().display());
    log::debug!("{cmd:?}");
    run_checked(&mut cmd)?;
    Ok(())
}
