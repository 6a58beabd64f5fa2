//! Startup wiring: resolve the core binary, spawn it, assemble the shell.

use std::path::{Path, PathBuf};

use tokio::sync::mpsc;
use tracing::debug;

use plume_common::{ChannelError, ShellError};
use plume_config::PlumeConfig;
use plume_rpc::{CoreChannel, Dispatcher, Inbound};

use crate::alert::TerminalAlert;
use crate::shell::{Shell, ShellCommand};

/// Name of the core executable searched for next to the shell binary and
/// on `$PATH`.
pub const CORE_BINARY: &str = "plume-core";

/// Environment override for the core binary location.
pub const CORE_ENV: &str = "PLUME_CORE";

/// Resolve the core binary: CLI flag, then config, then `PLUME_CORE`,
/// then next to the shell executable, then `$PATH`.
///
/// An explicit override that does not exist is an error rather than a
/// fallthrough: a user who pointed at a core should not silently get a
/// different one. The shell cannot run without a core at all; failure
/// here is the one fatal startup condition.
pub fn locate_core(
    cli_override: Option<&Path>,
    config: &PlumeConfig,
) -> Result<PathBuf, ChannelError> {
    let explicit = cli_override
        .map(Path::to_path_buf)
        .or_else(|| config.core.path.clone())
        .or_else(|| std::env::var_os(CORE_ENV).map(PathBuf::from));
    if let Some(path) = explicit {
        return if path.is_file() {
            Ok(path)
        } else {
            Err(ChannelError::CoreNotFound(path))
        };
    }

    if let Ok(exe) = std::env::current_exe() {
        if let Some(sibling) = exe.parent().map(|dir| dir.join(CORE_BINARY)) {
            if sibling.is_file() {
                return Ok(sibling);
            }
        }
    }

    search_path(CORE_BINARY).ok_or_else(|| ChannelError::CoreNotFound(PathBuf::from(CORE_BINARY)))
}

fn search_path(name: &str) -> Option<PathBuf> {
    let path = std::env::var_os("PATH")?;
    std::env::split_paths(&path)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// Everything `main` needs to hand control to the shell loop.
pub struct Booted {
    pub shell: Shell,
    pub channel: CoreChannel,
    pub inbound: mpsc::Receiver<Inbound>,
    pub commands: mpsc::Sender<ShellCommand>,
    pub command_rx: mpsc::Receiver<ShellCommand>,
}

/// Spawn the core and assemble the shell with its initial windows.
pub fn boot(core: &Path, config: &PlumeConfig, open: &[PathBuf]) -> Result<Booted, ShellError> {
    let (channel, inbound) = CoreChannel::spawn(core, &config.core.args)?;
    let dispatcher = Dispatcher::new(channel.request_sender());
    let mut shell = Shell::new(dispatcher, Box::new(TerminalAlert));

    if config.startup.initial_window {
        shell.new_window();
    }
    for path in open {
        shell.open_file(path);
    }
    debug!(windows = shell.window_count(), "shell assembled");

    let (commands, command_rx) = mpsc::channel(16);
    Ok(Booted {
        shell,
        channel,
        inbound,
        commands,
        command_rx,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn explicit_override_that_is_missing_fails_with_that_path() {
        let config = PlumeConfig::default();
        let err = locate_core(Some(Path::new("/nonexistent/core")), &config).unwrap_err();
        match err {
            ChannelError::CoreNotFound(path) => {
                assert_eq!(path, Path::new("/nonexistent/core"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn config_path_wins_when_no_cli_flag_is_given() {
        let dir = tempfile::tempdir().unwrap();
        let core = dir.path().join("plume-core");
        let mut file = std::fs::File::create(&core).unwrap();
        writeln!(file, "#!/bin/sh").unwrap();

        let mut config = PlumeConfig::default();
        config.core.path = Some(core.clone());

        assert_eq!(locate_core(None, &config).unwrap(), core);
    }

    #[test]
    fn cli_flag_beats_the_config_path() {
        let dir = tempfile::tempdir().unwrap();
        let cli_core = dir.path().join("cli-core");
        std::fs::File::create(&cli_core).unwrap();

        let mut config = PlumeConfig::default();
        config.core.path = Some(dir.path().join("config-core"));

        assert_eq!(
            locate_core(Some(&cli_core), &config).unwrap(),
            cli_core
        );
    }

    #[tokio::test]
    async fn boot_opens_the_initial_window() {
        let config = PlumeConfig::default();
        let booted = boot(Path::new("/bin/cat"), &config, &[]).unwrap();

        assert_eq!(booted.shell.window_count(), 1);
        let focused = booted.shell.focused().unwrap();
        assert!(booted.shell.window(focused).unwrap().is_empty());

        booted.channel.shutdown().await;
    }

    #[tokio::test]
    async fn boot_reuses_the_initial_window_for_the_first_file() {
        let config = PlumeConfig::default();
        let files = vec![PathBuf::from("/tmp/a.txt"), PathBuf::from("/tmp/b.txt")];
        let booted = boot(Path::new("/bin/cat"), &config, &files).unwrap();

        // First file lands in the initial empty window, second gets its own.
        assert_eq!(booted.shell.window_count(), 2);

        booted.channel.shutdown().await;
    }

    #[tokio::test]
    async fn boot_without_initial_window_starts_bare() {
        let mut config = PlumeConfig::default();
        config.startup.initial_window = false;
        let booted = boot(Path::new("/bin/cat"), &config, &[]).unwrap();

        assert_eq!(booted.shell.window_count(), 0);

        booted.channel.shutdown().await;
    }
}
