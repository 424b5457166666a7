//! Invocation of the external `exonerate` aligner.
//!
//! Exonerate owns the alignment itself; this module only finds the binary,
//! builds the argument list, and redirects the summary output into a report
//! file that [`crate::parsing::report`] understands.

use std::env;
use std::ffi::OsString;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;
use tracing::debug;

/// Name of the external executable searched for on `PATH`.
pub const TOOL_NAME: &str = "exonerate";

/// Report file written into the output directory on each run.
pub const REPORT_FILE_NAME: &str = "exonerate.out";

/// `--ryo` template requesting one record line per alignment.
///
/// The backslash escapes are passed through literally; exonerate expands
/// them itself when formatting each line. Column order is the contract the
/// report parser relies on: sentinel, query id, target id, percent
/// identity, query start/end, target start/end, query length, score.
const RYO_TEMPLATE: &str = "@\\t%qi\\t%ti\\t%pi\\t%qab\\t%qae\\t%tab\\t%tae\\t%ql\\t%s\\n";

#[derive(Error, Debug)]
pub enum ExonerateError {
    #[error("cannot find `{0}` on PATH")]
    ToolNotFound(String),

    #[error("input file not found: {0}")]
    InputMissing(PathBuf),

    #[error("exonerate failed ({status}): {stderr}")]
    AlignmentFailed { status: ExitStatus, stderr: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Search the `PATH` environment variable for the exonerate executable.
///
/// # Errors
///
/// Returns `ExonerateError::ToolNotFound` if no searched directory holds an
/// executable file with the expected name.
pub fn locate() -> Result<PathBuf, ExonerateError> {
    let path_var = env::var_os("PATH").unwrap_or_default();
    locate_in(env::split_paths(&path_var))
        .ok_or_else(|| ExonerateError::ToolNotFound(TOOL_NAME.to_string()))
}

/// Search an explicit list of directories instead of the ambient `PATH`.
fn locate_in(dirs: impl IntoIterator<Item = PathBuf>) -> Option<PathBuf> {
    dirs.into_iter()
        .map(|dir| dir.join(TOOL_NAME))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Handle to a resolved exonerate binary plus the directory the report is
/// written into.
#[derive(Debug, Clone)]
pub struct Exonerate {
    executable: PathBuf,
    output_dir: PathBuf,
}

impl Exonerate {
    /// Resolve the executable from `PATH` and bind it to an output
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns `ExonerateError::ToolNotFound` if the binary cannot be
    /// located.
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self, ExonerateError> {
        Ok(Self {
            executable: locate()?,
            output_dir: output_dir.into(),
        })
    }

    /// Bind an already-resolved executable path, skipping `PATH` discovery.
    ///
    /// This is also the seam for pointing the invoker at a stand-in tool in
    /// tests.
    pub fn with_executable(executable: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            output_dir: output_dir.into(),
        }
    }

    #[must_use]
    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Path the next [`Exonerate::run`] call will write the report to.
    #[must_use]
    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join(REPORT_FILE_NAME)
    }

    /// Align `query` (the assembly) against `target` (the genome).
    ///
    /// Blocks until exonerate exits; genome-scale inputs can take a long
    /// time and no timeout is imposed here. The summary output is
    /// redirected to [`Exonerate::report_path`], creating or overwriting
    /// that file. Returns the report path on success.
    ///
    /// # Errors
    ///
    /// Returns `ExonerateError::InputMissing` if either input path does not
    /// name a file, `ExonerateError::Io` if the report file or subprocess
    /// cannot be created, or `ExonerateError::AlignmentFailed` with the
    /// captured stderr if exonerate exits non-zero.
    pub fn run(&self, query: &Path, target: &Path) -> Result<PathBuf, ExonerateError> {
        for input in [query, target] {
            if !input.is_file() {
                return Err(ExonerateError::InputMissing(input.to_path_buf()));
            }
        }

        let report = self.report_path();
        let stdout = File::create(&report)?;

        debug!(
            executable = %self.executable.display(),
            query = %query.display(),
            target = %target.display(),
            report = %report.display(),
            "Running exonerate"
        );

        let output = Command::new(&self.executable)
            .args(build_args(query, target))
            .stdin(Stdio::null())
            .stdout(Stdio::from(stdout))
            .stderr(Stdio::piped())
            .output()?;

        if !output.status.success() {
            return Err(ExonerateError::AlignmentFailed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(report)
    }
}

/// Argument list for one alignment run: est2genome model, record-line
/// output only, alignment and vulgar dumps suppressed.
fn build_args(query: &Path, target: &Path) -> Vec<OsString> {
    vec![
        OsString::from("--model"),
        OsString::from("est2genome"),
        OsString::from("--ryo"),
        OsString::from(RYO_TEMPLATE),
        OsString::from("--showalignment"),
        OsString::from("false"),
        OsString::from("--showvulgar"),
        OsString::from("false"),
        OsString::from("--query"),
        query.as_os_str().to_os_string(),
        OsString::from("--target"),
        target.as_os_str().to_os_string(),
    ]
}
