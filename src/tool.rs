//! Run external tools and check their exit status

/* std use */

/* crate use */

/* project use */
use crate::error;

/// Path of each external tool
#[derive(std::fmt::Debug, Clone)]
pub struct ToolSet {
    kmc: std::path::PathBuf,
    kmc_dump: std::path::PathBuf,
    sort: std::path::PathBuf,
    diff: std::path::PathBuf,
}

impl Default for ToolSet {
    fn default() -> Self {
        Self::new("kmc".into(), "kmc_dump".into(), "sort".into(), "diff".into())
    }
}

impl ToolSet {
    /// Create a new ToolSet
    pub fn new(
        kmc: std::path::PathBuf,
        kmc_dump: std::path::PathBuf,
        sort: std::path::PathBuf,
        diff: std::path::PathBuf,
    ) -> Self {
        Self {
            kmc,
            kmc_dump,
            sort,
            diff,
        }
    }

    /// Get kmc path
    pub fn kmc(&self) -> &std::path::Path {
        &self.kmc
    }

    /// Get kmc_dump path
    pub fn kmc_dump(&self) -> &std::path::Path {
        &self.kmc_dump
    }

    /// Get sort path
    pub fn sort(&self) -> &std::path::Path {
        &self.sort
    }

    /// Get diff path
    pub fn diff(&self) -> &std::path::Path {
        &self.diff
    }
}

/// Build a process::Command, LC_ALL is fixed so sort and diff agree on byte order
fn command<S>(tool: &std::path::Path, args: &[S]) -> std::process::Command
where
    S: AsRef<std::ffi::OsStr>,
{
    let mut cmd = std::process::Command::new(tool);
    cmd.args(args).env("LC_ALL", "C");

    cmd
}

/// Run tool until it exit, its stdout and stderr are captured
pub(crate) fn output<S>(tool: &std::path::Path, args: &[S]) -> error::Result<std::process::Output>
where
    S: AsRef<std::ffi::OsStr>,
{
    log::debug!("Run {}", command_line(tool, args));

    command(tool, args)
        .output()
        .map_err(|source| {
            error::Error::ToolNotLaunched {
                tool: tool.display().to_string(),
                source,
            }
            .into()
        })
}

/// Run tool and return an error if exit status isn't a success
pub fn run<S>(tool: &std::path::Path, args: &[S]) -> error::Result<std::process::Output>
where
    S: AsRef<std::ffi::OsStr>,
{
    let output = output(tool, args)?;

    if output.status.success() {
        Ok(output)
    } else {
        Err(failure(tool, args, &output).into())
    }
}

/// Build ToolInvocationFailed error, and log stderr of tool
pub(crate) fn failure<S>(
    tool: &std::path::Path,
    args: &[S],
    output: &std::process::Output,
) -> error::Error
where
    S: AsRef<std::ffi::OsStr>,
{
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
        log::error!("{} stderr:\n{}", tool.display(), stderr.trim_end());
    }

    error::Error::ToolInvocationFailed {
        tool: tool.display().to_string(),
        args: args
            .iter()
            .map(|a| a.as_ref().to_string_lossy().into_owned())
            .collect(),
        code: output.status.code(),
    }
}

fn command_line<S>(tool: &std::path::Path, args: &[S]) -> String
where
    S: AsRef<std::ffi::OsStr>,
{
    let mut line = tool.display().to_string();
    for arg in args {
        line.push(' ');
        line.push_str(&arg.as_ref().to_string_lossy());
    }

    line
}
