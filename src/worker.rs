use std::path::Path;

use log::{debug, info};
use tokio::fs;

use crate::error::TranspileError;
use crate::job::Job;
use crate::toolchain::{Compile, Toolchain, Transform};
use crate::worklist::Worklist;

/// Drains a worklist one job at a time, stopping at the first failure.
pub struct Worker<'a, T, C> {
    toolchain: &'a Toolchain<T, C>,
    worklist: Worklist,
}

impl<'a, T: Transform, C: Compile> Worker<'a, T, C> {
    pub fn new(toolchain: &'a Toolchain<T, C>, worklist: Worklist) -> Self {
        Self {
            toolchain,
            worklist,
        }
    }

    /// Reads, transforms, compiles and writes a single job.
    async fn transpile_file(&self, job: Job) -> Result<(), TranspileError> {
        let (source, destination) = job.into_inner();

        let text = fs::read_to_string(&source)
            .await
            .map_err(|error| TranspileError::Io {
                path: source.clone(),
                source: error,
            })?;

        debug!("transforming {}", source.display());
        let intermediate = self
            .toolchain
            .transform
            .transform(&text)
            .await
            .map_err(|error| TranspileError::Transform {
                path: source.clone(),
                message: error.0,
            })?;

        debug!("compiling {}", source.display());
        let output = self
            .toolchain
            .compile
            .compile(&intermediate)
            .await
            .map_err(|error| TranspileError::Compile {
                path: source.clone(),
                message: error.0,
            })?;

        fs::write(&destination, output)
            .await
            .map_err(|error| TranspileError::Io {
                path: destination.clone(),
                source: error,
            })?;

        info!("{} -> {}", source.display(), destination.display());
        Ok(())
    }

    /// Processes every queued job in order and returns how many were written.
    pub async fn process_jobs(&self) -> Result<usize, TranspileError> {
        let mut completed = 0;
        while let Some(token) = self.worklist.next() {
            let job: Job = token.parse()?;
            self.transpile_file(job).await?;
            completed += 1;
        }
        Ok(completed)
    }
}

/// Runs one batch: creates `output_dir`, then transpiles the `source=destination`
/// job tokens sequentially.
pub async fn run<T, C>(
    output_dir: &Path,
    jobs: Vec<String>,
    toolchain: &Toolchain<T, C>,
) -> Result<usize, TranspileError>
where
    T: Transform,
    C: Compile,
{
    fs::create_dir_all(output_dir)
        .await
        .map_err(|error| TranspileError::DirectoryCreation {
            path: output_dir.to_path_buf(),
            source: error,
        })?;

    let worklist: Worklist = jobs.into_iter().collect();
    if worklist.is_empty() {
        info!("no jobs for {}", output_dir.display());
    } else {
        debug!("{} job(s) queued", worklist.len());
    }
    Worker::new(toolchain, worklist).process_jobs().await
}
