use std::io::ErrorKind;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::RunError;

/// A single external command. With `quiet` the child's stdio is nulled
/// (credential probes must not print or block on a prompt); otherwise the
/// child inherits our stdio so processors stream straight to the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub quiet: bool,
}

impl Invocation {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            quiet: false,
        }
    }

    pub fn quiet(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            quiet: true,
        }
    }
}

/// Runner trait: execute a command to completion and report how it exited.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, inv: &Invocation) -> Result<(), RunError>;
}

/// Runs commands on the host, one at a time. No timeout: a hung child hangs
/// the whole run.
pub struct LocalRunner;

impl LocalRunner {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl CommandRunner for LocalRunner {
    async fn run(&self, inv: &Invocation) -> Result<(), RunError> {
        let mut cmd = Command::new(&inv.program);
        cmd.args(&inv.args);
        if inv.quiet {
            cmd.stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null());
        }

        let status = cmd.status().await.map_err(|err| {
            if err.kind() == ErrorKind::NotFound {
                RunError::ToolMissing {
                    program: inv.program.clone(),
                }
            } else {
                RunError::Spawn {
                    program: inv.program.clone(),
                    source: err,
                }
            }
        })?;

        if status.success() {
            return Ok(());
        }
        match status.code() {
            Some(code) => Err(RunError::NonZero {
                program: inv.program.clone(),
                code,
            }),
            None => Err(RunError::Signalled {
                program: inv.program.clone(),
            }),
        }
    }
}
