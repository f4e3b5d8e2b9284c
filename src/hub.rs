use tracing::info;

use crate::error::{AuthError, RunError};
use crate::runner::{CommandRunner, Invocation};

/// Identity probes in preference order, current CLI first, legacy second.
const CANDIDATES: [(&str, &[&str]); 2] = [
    ("hf", &["auth", "whoami"]),
    ("huggingface-cli", &["whoami"]),
];

/// Check that a Hub CLI is installed and holds a logged-in identity, and
/// return the tool that answered. The identity itself is never read, only
/// whether one exists. Advisory gate: nothing is reserved or locked.
///
/// A missing binary falls through to the next candidate; an installed tool
/// that exits non-zero means the user is not logged in, which is not
/// something a fallback can fix.
pub async fn check_credentials(runner: &dyn CommandRunner) -> Result<&'static str, AuthError> {
    for (tool, args) in CANDIDATES {
        let inv = Invocation::quiet(tool, args.iter().map(|a| a.to_string()).collect());
        match runner.run(&inv).await {
            Ok(()) => {
                info!("hub credentials verified via '{}'", tool);
                return Ok(tool);
            }
            Err(RunError::ToolMissing { .. }) => continue,
            Err(RunError::NonZero { .. }) => {
                return Err(AuthError::NotLoggedIn {
                    tool: tool.to_string(),
                })
            }
            Err(err) => {
                return Err(AuthError::Probe {
                    tool: tool.to_string(),
                    source: err,
                })
            }
        }
    }

    let tried = CANDIDATES
        .iter()
        .map(|(tool, _)| *tool)
        .collect::<Vec<_>>()
        .join(", ");
    Err(AuthError::CliMissing { tried })
}
