//! ``src/operators/player.rs``
//! ============================================================================
//! # Player Launch: Fire-and-Forget External Process
//!
//! The player is started in its own session with every standard stream
//! pointed at the null device, and no handle to it is kept. The browser never
//! learns whether playback worked; it only hears about failures to start the
//! process at all (e.g. the binary is missing).
//!
//! Exited players are reaped by the kernel because the child-exit signal is
//! ignored for the whole process; call [`ignore_child_exit`] once at startup.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{info, instrument};

use crate::error::AppError;

pub const SUB_FILE_OPTION: &str = "--sub-file=";

/// Ignore `SIGCHLD` so detached players never linger as zombies.
#[cfg(unix)]
pub fn ignore_child_exit() {
    // SAFETY: installing SIG_IGN has no handler code to race with and is done
    // before any child is spawned.
    unsafe {
        libc::signal(libc::SIGCHLD, libc::SIG_IGN);
    }
    info!(marker = "SIGCHLD_IGNORED", "Child exit signal ignored");
}

#[cfg(not(unix))]
pub fn ignore_child_exit() {}

/// What to play and with which command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    /// Player command template, e.g. `mpv --force-window`.
    pub command: String,

    pub target: PathBuf,

    pub subtitle: Option<PathBuf>,
}

impl LaunchRequest {
    #[must_use]
    pub fn new(command: &str, target: &Path, subtitle: Option<&Path>) -> Self {
        Self {
            command: command.to_string(),
            target: target.to_path_buf(),
            subtitle: subtitle.map(Path::to_path_buf),
        }
    }

    /// `<command> [--sub-file="<sub>"] "<target>"`, as shown in logs.
    #[must_use]
    pub fn command_line(&self) -> String {
        let mut line = self.command.clone();
        if let Some(sub) = &self.subtitle {
            line.push_str(&format!(" {SUB_FILE_OPTION}\"{}\"", sub.display()));
        }
        line.push_str(&format!(" \"{}\"", self.target.display()));
        line
    }

    /// Program and arguments: the template split with shell rules, then the
    /// subtitle option and the target as single arguments.
    pub fn argv(&self) -> Result<Vec<String>, AppError> {
        let mut argv = shlex::split(&self.command)
            .filter(|words| !words.is_empty())
            .ok_or_else(|| AppError::InvalidPlayerCommand(self.command.clone()))?;

        if let Some(sub) = &self.subtitle {
            argv.push(format!("{SUB_FILE_OPTION}{}", sub.display()));
        }
        argv.push(self.target.to_string_lossy().into_owned());

        Ok(argv)
    }
}

/// Seam between the controller and process creation.
pub trait PlayerLauncher {
    /// Start the player and return without waiting for it.
    fn launch(&mut self, request: &LaunchRequest) -> Result<(), AppError>;
}

/// Spawns a detached child process per launch.
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedLauncher;

impl PlayerLauncher for DetachedLauncher {
    #[instrument(level = "info", skip(self), fields(target = %request.target.display()))]
    fn launch(&mut self, request: &LaunchRequest) -> Result<(), AppError> {
        let argv = request.argv()?;
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| AppError::InvalidPlayerCommand(request.command.clone()))?;

        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        detach(&mut command);

        let child = command
            .spawn()
            .map_err(|e| AppError::launch(request.command_line(), e))?;

        info!(
            marker = "PLAYER_LAUNCHED",
            operation_type = "launch",
            pid = child.id(),
            "Launched {}",
            request.command_line()
        );

        // Dropping the handle neither waits for nor kills the child.
        drop(child);
        Ok(())
    }
}

#[cfg(unix)]
fn detach(command: &mut Command) {
    use std::os::unix::process::CommandExt;

    // SAFETY: setsid is async-signal-safe and touches no parent state.
    unsafe {
        command.pre_exec(|| {
            if libc::setsid() == -1 {
                return Err(std::io::Error::last_os_error());
            }
            Ok(())
        });
    }
}

#[cfg(not(unix))]
fn detach(_command: &mut Command) {}
