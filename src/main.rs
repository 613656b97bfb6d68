mod cli;
mod error;
mod job;
mod toolchain;
mod worker;
mod worklist;

use std::process;

use env_logger::Env;
use log::info;
use structopt::StructOpt;

use crate::cli::Cli;
use crate::toolchain::Toolchain;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::from_args();
    let toolchain = Toolchain::new(cli.transform_cmd, cli.compile_cmd);

    match worker::run(&cli.output_dir, cli.jobs, &toolchain).await {
        Ok(completed) => info!("transpiled {} file(s)", completed),
        Err(error) => {
            eprintln!("error: {}", error);
            process::exit(1);
        }
    }
}
