use std::process::ExitStatus;

use anyhow::Result;
use tokio::process::Command;
use tokio::signal;

use crate::config::LaunchConfig;

/// How the delegated server run ended.
#[derive(Debug)]
pub enum Outcome {
    /// The child exited on its own, with whatever status it chose.
    Exited(ExitStatus),
    /// Ctrl+C arrived while the child was running.
    Interrupted,
}

/// Fire-and-forget install of the auxiliary HTTP client the dev tooling may
/// want around. Success or failure, the launch goes ahead; we only leave a
/// trace at debug level.
pub async fn install_http_client(config: &LaunchConfig) {
    let Some((program, args)) = config.setup_command.split_first() else {
        return;
    };

    match Command::new(program).args(args).status().await {
        Ok(status) => debug!("setup command exited: {}", status),
        Err(error) => debug!("setup command did not start: {}", error),
    }
}

/// Runs the dev server command in the configured directory, stdio inherited,
/// until it exits or the user interrupts. Only a failure to spawn is an
/// error; the child's own exit status is reported, not judged.
pub async fn run(config: &LaunchConfig) -> Result<Outcome> {
    let mut child = shell(&config.server_command)
        .current_dir(&config.workdir)
        // If Ctrl+C wins the race below, the server must not outlive us.
        .kill_on_drop(true)
        .spawn()?;

    // The terminal delivers Ctrl+C to the whole process group, so the child
    // often dies at the same moment the signal reaches us. Check the signal
    // first so an interrupt always reports as an interrupt.
    tokio::select! {
        biased;

        _ = signal::ctrl_c() => Ok(Outcome::Interrupted),
        status = child.wait() => Ok(Outcome::Exited(status?)),
    }
}

#[cfg(unix)]
fn shell(command_line: &str) -> Command {
    let mut command = Command::new("sh");
    command.arg("-c").arg(command_line);
    command
}

#[cfg(windows)]
fn shell(command_line: &str) -> Command {
    let mut command = Command::new("cmd");
    command.arg("/C").arg(command_line);
    command
}
