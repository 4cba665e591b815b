//! Best-effort clipboard access.
//!
//! Platform utilities are looked up on `PATH` in a fixed order and the first one
//! found receives the text on stdin. When none is installed the native
//! clipboard is used through `arboard`.

use anyhow::{anyhow, bail, Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::Mutex;

/// Copy capability consumed by the dashboard.
pub trait Clipboard: Send + Sync {
    fn copy(&self, text: &str) -> Result<()>;
}

/// Clipboard utilities in preference order, with their arguments.
pub const CLIPBOARD_COMMANDS: [(&str, &[&str]); 4] = [
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("wl-copy", &[]),
    ("pbcopy", &[]),
];

/// Copies through a platform utility, else through a native clipboard handle.
///
/// The native handle is kept for the life of the process: on X11 and Wayland
/// the copied text is served by its owner and vanishes once the handle drops.
#[derive(Default)]
pub struct SystemClipboard {
    native: Mutex<Option<arboard::Clipboard>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn copy_with(&self, dirs: &[PathBuf], text: &str) -> Result<()> {
        match select_command(dirs) {
            Some((program, args)) => pipe_to(&program, args, text),
            None => {
                tracing::debug!("No clipboard utility on PATH, using native clipboard");
                self.copy_native(text)
            }
        }
    }

    fn copy_native(&self, text: &str) -> Result<()> {
        let mut native = self
            .native
            .lock()
            .map_err(|_| anyhow!("Clipboard handle poisoned"))?;
        if native.is_none() {
            *native = Some(arboard::Clipboard::new().context("No clipboard utility available")?);
        }
        match native.as_mut() {
            Some(clipboard) => clipboard.set_text(text.to_string())?,
            None => bail!("No clipboard utility available"),
        }
        Ok(())
    }

    #[cfg(test)]
    fn holds_native_handle(&self) -> bool {
        self.native.lock().map(|n| n.is_some()).unwrap_or(false)
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        let path = std::env::var_os("PATH").unwrap_or_default();
        let dirs: Vec<PathBuf> = std::env::split_paths(&path).collect();
        self.copy_with(&dirs, text)
    }
}

/// First clipboard utility present in any of `dirs`.
pub fn select_command(dirs: &[PathBuf]) -> Option<(PathBuf, &'static [&'static str])> {
    CLIPBOARD_COMMANDS.iter().find_map(|(name, args)| {
        dirs.iter()
            .map(|dir| dir.join(name))
            .find(|candidate| is_executable(candidate))
            .map(|program| (program, *args))
    })
}

fn is_executable(path: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        path.metadata()
            .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
    }
    #[cfg(not(unix))]
    {
        path.is_file()
    }
}

fn pipe_to(program: &Path, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to run {}", program.display()))?;

    // stdin drops at the end of this statement so the tool sees EOF
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };
    if written.is_err() {
        let _ = child.kill();
    }

    // Always reap the child, even when the write failed
    let status = child.wait()?;
    written.with_context(|| format!("Failed to write to {}", program.display()))?;
    if !status.success() {
        bail!("{} exited with {}", program.display(), status);
    }
    Ok(())
}
