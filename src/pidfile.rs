//! PID-file leasing shared by master and node start/stop.
//!
//! A PID file is a lease: its owner is alive iff a signal-0 probe succeeds.
//! Callers that read a PID file opportunistically remove it if the owner is
//! no longer alive.

use std::path::Path;
use tracing::debug;

/// True if `pid` names a live process, probed via a signal-0 `kill`.
///
/// `ESRCH` (no such process) is treated as dead; any other errno (most
/// commonly `EPERM`, a process owned by another user) is treated
/// conservatively as alive-but-inaccessible.
#[cfg(unix)]
pub fn is_process_alive(pid: u32) -> bool {
    use nix::sys::signal::kill;
    use nix::unistd::Pid;

    match kill(Pid::from_raw(pid as i32), None) {
        Ok(()) => true,
        Err(nix::errno::Errno::ESRCH) => false,
        Err(_) => true,
    }
}

#[cfg(not(unix))]
pub fn is_process_alive(_pid: u32) -> bool {
    // No portable signal-0 probe off Unix; assume alive to avoid spuriously
    // stealing another process's lease.
    true
}

/// Read the PID recorded at `path`, if any.
pub fn read_pid(path: &Path) -> Option<u32> {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|s| s.trim().parse::<u32>().ok())
}

/// Write `pid` to `path`, creating or truncating it.
pub fn write_pid(path: &Path, pid: u32) -> std::io::Result<()> {
    std::fs::write(path, pid.to_string())
}

/// Remove the PID file at `path` if its owner is not alive.
///
/// Returns `true` if the file still names a live process (i.e. it was kept).
pub fn remove_stale(path: &Path) -> bool {
    match read_pid(path) {
        Some(pid) if is_process_alive(pid) => true,
        Some(_) => {
            debug!(path = %path.display(), "removing stale pid file");
            let _ = std::fs::remove_file(path);
            false
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.pid");
        write_pid(&path, 4242).unwrap();
        assert_eq!(read_pid(&path), Some(4242));
    }

    #[test]
    fn read_pid_missing_file_is_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.pid");
        assert_eq!(read_pid(&path), None);
    }

    #[test]
    fn own_pid_is_alive() {
        assert!(is_process_alive(std::process::id()));
    }

    #[test]
    fn remove_stale_deletes_dead_pid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dead.pid");
        // PID 1 belongs to init on most systems, but a very high,
        // vanishingly-unlikely-to-exist PID is a more portable stand-in
        // for "a process that is not ours and is not alive".
        write_pid(&path, u32::MAX - 1).unwrap();
        let kept = remove_stale(&path);
        assert!(!kept);
        assert!(!path.exists());
    }
}
