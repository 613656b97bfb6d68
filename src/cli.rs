use std::path::PathBuf;

use structopt::StructOpt;

use crate::toolchain::ExternalCommand;

/// Transpiles CJSX sources to JavaScript through a transform and a compile step.
#[derive(StructOpt)]
#[structopt(name = "cjsxc")]
pub struct Cli {
    /// The directory to create before any job runs
    #[structopt(parse(from_os_str))]
    pub output_dir: PathBuf,

    /// Jobs of the form <source>=<destination>, processed in order
    pub jobs: Vec<String>,

    /// Command that turns CJSX on stdin into CoffeeScript on stdout
    #[structopt(
        long,
        env = "CJSXC_TRANSFORM_CMD",
        default_value = crate::toolchain::DEFAULT_TRANSFORM_CMD
    )]
    pub transform_cmd: ExternalCommand,

    /// Command that turns CoffeeScript on stdin into JavaScript on stdout
    #[structopt(
        long,
        env = "CJSXC_COMPILE_CMD",
        default_value = crate::toolchain::DEFAULT_COMPILE_CMD
    )]
    pub compile_cmd: ExternalCommand,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_directory_and_jobs_in_order() {
        let cli = Cli::from_iter_safe(&["cjsxc", "out", "a.cjsx=out/a.js", "b.cjsx=out/b.js"])
            .unwrap();
        assert_eq!(cli.output_dir, PathBuf::from("out"));
        assert_eq!(cli.jobs, vec!["a.cjsx=out/a.js", "b.cjsx=out/b.js"]);
    }

    #[test]
    fn accepts_zero_jobs() {
        let cli = Cli::from_iter_safe(&["cjsxc", "out"]).unwrap();
        assert!(cli.jobs.is_empty());
    }

    #[test]
    fn leaves_malformed_job_for_the_worker() {
        let cli = Cli::from_iter_safe(&["cjsxc", "out", "a.cjsx"]).unwrap();
        assert_eq!(cli.jobs, vec!["a.cjsx"]);
    }

    #[test]
    fn collaborator_commands_can_be_overridden() {
        let cli = Cli::from_iter_safe(&["cjsxc", "--compile-cmd", "coffee -bsp", "out"]).unwrap();
        assert_eq!(
            cli.compile_cmd,
            ExternalCommand::new("coffee", vec!["-bsp".to_string()])
        );
    }
}
