use std::process::ExitCode;

use clap::Parser;

mod app;
mod build;
mod cli;
mod qemu;
mod run;
mod util;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli = crate::cli::Cli::parse();
    match crate::app::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            let code = err
                .downcast_ref::<crate::util::process::ProcessError>()
                .map_or(1, crate::util::process::ProcessError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
