use anyhow::Result;

use crate::util::repo::Layout;

pub fn run(cli: crate::cli::Cli) -> Result<()> {
    let workspace = match cli.workspace {
        Some(dir) => dir,
        None => crate::util::repo::repo_root()?,
    };
    let layout = Layout::new(workspace)?;
    log::debug!("workspace: {}", layout.workspace().display());

    match cli.cmd {
        crate::cli::Cmd::Build => crate::build::run(&layout),
        crate::cli::Cmd::Run(args) => crate::run::run(&layout, &args),
    }
}
