use std::process::Stdio;
use std::str::FromStr;

use log::{debug, warn};
use tokio::io::AsyncWriteExt;
use tokio::process::{ChildStdin, Command};

use crate::error::StageError;

pub const DEFAULT_TRANSFORM_CMD: &str = "cjsx-transform";
pub const DEFAULT_COMPILE_CMD: &str = "coffee --stdio --print --compile";

/// Converts the extended markup syntax into plain scripting-language source.
pub trait Transform {
    async fn transform(&self, source: &str) -> Result<String, StageError>;
}

/// Converts plain scripting-language source into the target language.
pub trait Compile {
    async fn compile(&self, source: &str) -> Result<String, StageError>;
}

/// The two collaborators a job is piped through, in order.
pub struct Toolchain<T, C> {
    pub transform: T,
    pub compile: C,
}

impl<T: Transform, C: Compile> Toolchain<T, C> {
    pub fn new(transform: T, compile: C) -> Self {
        Self { transform, compile }
    }
}

/// A collaborator backed by a child process: input on stdin, output on stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    program: String,
    args: Vec<String>,
}

impl ExternalCommand {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    async fn run(&self, input: &str) -> Result<String, StageError> {
        debug!("running {} {:?}", self.program, self.args);

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|error| StageError::new(format!("failed to run '{}': {}", self.program, error)))?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| StageError::new(format!("no stdin for '{}'", self.program)))?;

        // stdin is fed while stdout and stderr are being collected.
        let (written, output) = tokio::join!(write_input(stdin, input), child.wait_with_output());
        let output = output
            .map_err(|error| StageError::new(format!("failed to wait for '{}': {}", self.program, error)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            return Err(StageError::new(if stderr.is_empty() {
                format!("'{}' exited with {}", self.program, output.status)
            } else {
                stderr.to_string()
            }));
        }
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        if !stderr.is_empty() {
            warn!("{}: {}", self.program, stderr);
        }
        written.map_err(|error| {
            StageError::new(format!("failed to write to '{}': {}", self.program, error))
        })?;

        String::from_utf8(output.stdout)
            .map_err(|_| StageError::new(format!("'{}' produced non-UTF-8 output", self.program)))
    }
}

async fn write_input(mut stdin: ChildStdin, input: &str) -> std::io::Result<()> {
    stdin.write_all(input.as_bytes()).await?;
    stdin.shutdown().await
}

impl FromStr for ExternalCommand {
    type Err = String;

    /// Splits a command line on whitespace into program and arguments.
    fn from_str(command_line: &str) -> Result<Self, Self::Err> {
        let mut words = command_line.split_whitespace().map(str::to_string);
        match words.next() {
            Some(program) => Ok(ExternalCommand::new(program, words.collect())),
            None => Err("empty command".to_string()),
        }
    }
}

impl Transform for ExternalCommand {
    async fn transform(&self, source: &str) -> Result<String, StageError> {
        self.run(source).await
    }
}

impl Compile for ExternalCommand {
    async fn compile(&self, source: &str) -> Result<String, StageError> {
        self.run(source).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_command_line() {
        let command: ExternalCommand = DEFAULT_COMPILE_CMD.parse().unwrap();
        assert_eq!(
            command,
            ExternalCommand::new(
                "coffee",
                vec!["--stdio".into(), "--print".into(), "--compile".into()]
            )
        );
    }

    #[test]
    fn rejects_blank_command_line() {
        assert!("   ".parse::<ExternalCommand>().is_err());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn pipes_text_through_child() {
        let upper: ExternalCommand = "tr a-z A-Z".parse().unwrap();
        assert_eq!(upper.compile("render: ->\n").await.unwrap(), "RENDER: ->\n");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn stderr_of_successful_child_is_not_a_rejection() {
        let chatty = ExternalCommand::new(
            "sh",
            vec!["-c".into(), "cat; echo 'deprecated syntax' >&2".into()],
        );
        assert_eq!(chatty.compile("x = 1\n").await.unwrap(), "x = 1\n");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn nonzero_exit_is_a_rejection() {
        let failing: ExternalCommand = "false".parse().unwrap();
        let err = failing.transform("x").await.unwrap_err();
        assert!(err.0.contains("'false' exited with"), "{}", err);
    }

    #[tokio::test]
    async fn missing_program_is_a_rejection() {
        let missing: ExternalCommand = "cjsxc-no-such-program".parse().unwrap();
        let err = missing.transform("x").await.unwrap_err();
        assert!(err.0.starts_with("failed to run 'cjsxc-no-such-program'"));
    }
}
