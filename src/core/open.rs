// src/core/open.rs
//
// Hand a link to the OS default handler.

use std::{
    process::Command,
    thread::{self, JoinHandle},
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpenError {
    #[error("Failed to spawn {program}: {source}")]
    Spawn {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Opening links is not supported on this platform")]
    Unsupported,
}

/// Cross-platform "open this URL in the default browser".
pub fn open_in_browser(link: &str) -> Result<(), OpenError> {
    let (program, args): (&'static str, Vec<&str>) = if cfg!(target_os = "windows") {
        ("explorer", vec![link])
    } else if cfg!(target_os = "macos") {
        ("open", vec![link])
    } else if cfg!(any(target_os = "linux", target_os = "freebsd", target_os = "openbsd")) {
        ("xdg-open", vec![link])
    } else {
        return Err(OpenError::Unsupported);
    };

    spawn_reaped(Command::new(program).args(&args), program)?;
    logf!("Opened link via {}: {}", program, link);
    Ok(())
}

/// Spawn `cmd` and wait on it from a detached thread so no zombie is left behind.
fn spawn_reaped(cmd: &mut Command, program: &'static str) -> Result<JoinHandle<()>, OpenError> {
    let mut child = cmd.spawn().map_err(|source| OpenError::Spawn { program, source })?;
    Ok(thread::spawn(move || {
        if let Err(e) = child.wait() {
            logw!("{} did not exit cleanly: {}", program, e);
        }
    }))
}
