// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `twirl run` and `twirl list`.

use std::io::{self, Write};
use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use twirl::{catalog, Spinner, SpinnerConfig, SpinnerError};

use crate::cli::RunArgs;
use crate::env;
use crate::output::{print_warning, write_catalog};

/// Failures that end `twirl run` before the command's own status is known.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Spinner(#[from] SpinnerError),

    #[error("Failed to run '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed waiting for '{command}': {source}")]
    Wait {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

impl RunError {
    /// Process exit code for this failure (127 when the command could not
    /// be started, as shells do).
    pub fn exit_code(&self) -> i32 {
        match self {
            RunError::Spawn { .. } => 127,
            _ => 1,
        }
    }
}

/// Merge the config file (if any), the command-line options and the color
/// environment switches.
pub fn load_config(args: &RunArgs) -> Result<SpinnerConfig, RunError> {
    let file = match &args.config {
        Some(path) => SpinnerConfig::load(path)?,
        None => SpinnerConfig::default(),
    };
    let mut config = args.overlay(file);
    if env::colors_disabled() {
        debug!("colors disabled by environment");
        strip_decoration(&mut config);
    }
    Ok(config)
}

pub fn strip_decoration(config: &mut SpinnerConfig) {
    config.color = None;
    config.on_color = None;
    config.attrs.clear();
}

/// Build the spinner; SIGINT and SIGTERM finalize it with `fail_glyph`.
pub fn build_spinner(config: SpinnerConfig, fail_glyph: &str) -> Result<Spinner, RunError> {
    let builder = config.builder();

    #[cfg(unix)]
    let builder = {
        use std::sync::Arc;
        use twirl::signals::{SIGINT, SIGTERM};
        let glyph = fail_glyph.to_string();
        let handler: twirl::SignalHandler = Arc::new(move |spinner: &Spinner, signal: i32| {
            debug!(signal, "interrupted");
            if let Err(e) = spinner.fail_with(&glyph) {
                warn!("failed to finalize spinner: {e}");
            }
        });
        builder
            .signal(SIGINT, Arc::clone(&handler))
            .signal(SIGTERM, handler)
    };
    #[cfg(not(unix))]
    let _ = fail_glyph;

    Ok(builder.build()?)
}

/// Run the command (or sleep) under the spinner. Returns the process exit
/// code: 0 on success, otherwise the command's own code.
pub async fn run(args: RunArgs) -> Result<i32, RunError> {
    let config = load_config(&args)?;
    let spinner = build_spinner(config, &args.fail_glyph)?;
    let guard = spinner.enter()?;

    let Some((program, rest)) = args.command.split_first() else {
        tokio::time::sleep(Duration::from_millis(args.duration_ms)).await;
        guard.spinner().ok_with(&args.ok_glyph)?;
        return Ok(0);
    };

    match run_child(guard.spinner(), program, rest).await {
        Ok(status) if status.success() => {
            guard.spinner().ok_with(&args.ok_glyph)?;
            Ok(0)
        }
        Ok(status) => {
            guard.spinner().fail_with(&args.fail_glyph)?;
            Ok(exit_code(status))
        }
        Err(e) => {
            guard.spinner().fail_with(&args.fail_glyph)?;
            Err(e)
        }
    }
}

/// Spawn the command with its output relayed above the animation.
async fn run_child(
    spinner: &Spinner,
    program: &str,
    args: &[String],
) -> Result<ExitStatus, RunError> {
    let command = std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ");

    let mut child = Command::new(program)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| RunError::Spawn {
            command: command.clone(),
            source,
        })?;
    info!(%command, "spawned");

    let relays: Vec<JoinHandle<()>> = [
        child.stdout.take().map(|out| relay(out, spinner.clone())),
        child.stderr.take().map(|err| relay(err, spinner.clone())),
    ]
    .into_iter()
    .flatten()
    .collect();

    let status = child
        .wait()
        .await
        .map_err(|source| RunError::Wait { command, source })?;

    for handle in relays {
        if let Err(e) = handle.await {
            warn!("output relay failed: {e}");
        }
    }
    debug!(%status, "command finished");
    Ok(status)
}

/// Forward each line the child prints as a persistent spinner line.
fn relay<R>(reader: R, spinner: Spinner) -> JoinHandle<()>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut lines = BufReader::new(reader).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if let Err(e) = spinner.write(&line) {
                        warn!("failed to relay output: {e}");
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    warn!("failed to read command output: {e}");
                    break;
                }
            }
        }
    })
}

/// Exit code to propagate; a signal death maps to `128 + signal`.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            print_warning(format_args!("command terminated by signal {signal}"));
            return 128 + signal;
        }
    }
    1
}

/// Print every built-in spinner.
pub fn list() -> Result<(), RunError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_catalog(&mut out, catalog::entries())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
