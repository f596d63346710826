// Wed Jan 15 2026 - Alex

use crate::config::ExitStatus;
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

pub const DEFAULT_EXIT_CODE: i32 = 0;

/// Ends the host process once a report has been rendered.
pub trait ProcessControl {
    fn exit(&mut self, status: Option<&ExitStatus>);
}

pub struct SystemProcess;

impl ProcessControl for SystemProcess {
    fn exit(&mut self, status: Option<&ExitStatus>) {
        flush_output(&mut io::stdout());

        if let Some(ExitStatus::Signal(name)) = status {
            if let Some(signo) = signal_number(name) {
                log::info!("terminating with signal {}", name);
                raise_signal(signo);
            }
        }

        let code = exit_code_for(status);
        log::info!("terminating with exit code {}", code);
        std::process::exit(code);
    }
}

fn flush_output<W: Write>(out: &mut W) -> bool {
    match out.flush() {
        Ok(()) => true,
        Err(e) => {
            log::debug!("failed to flush output before exit: {}", e);
            false
        }
    }
}

/// Keeps every exit request instead of terminating.
#[derive(Debug, Clone, Default)]
pub struct RecordingProcess {
    calls: Arc<Mutex<Vec<Option<ExitStatus>>>>,
}

impl RecordingProcess {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Option<ExitStatus>> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl ProcessControl for RecordingProcess {
    fn exit(&mut self, status: Option<&ExitStatus>) {
        self.calls.lock().push(status.cloned());
    }
}

/// Numeric status for a report's exit value. Signals map to `128 + signo`,
/// unknown signal names to 1.
pub fn exit_code_for(status: Option<&ExitStatus>) -> i32 {
    match status {
        None => DEFAULT_EXIT_CODE,
        Some(ExitStatus::Code(code)) => *code,
        Some(ExitStatus::Signal(name)) => match signal_number(name) {
            Some(signo) => 128 + signo,
            None => 1,
        },
    }
}

fn signal_key(name: &str) -> String {
    let upper = name.trim().to_ascii_uppercase();
    upper.strip_prefix("SIG").map(str::to_string).unwrap_or(upper)
}

#[cfg(unix)]
pub fn signal_number(name: &str) -> Option<i32> {
    let signo = match signal_key(name).as_str() {
        "HUP" => libc::SIGHUP,
        "INT" => libc::SIGINT,
        "QUIT" => libc::SIGQUIT,
        "ILL" => libc::SIGILL,
        "TRAP" => libc::SIGTRAP,
        "ABRT" => libc::SIGABRT,
        "BUS" => libc::SIGBUS,
        "FPE" => libc::SIGFPE,
        "KILL" => libc::SIGKILL,
        "USR1" => libc::SIGUSR1,
        "SEGV" => libc::SIGSEGV,
        "USR2" => libc::SIGUSR2,
        "PIPE" => libc::SIGPIPE,
        "ALRM" => libc::SIGALRM,
        "TERM" => libc::SIGTERM,
        _ => return None,
    };
    Some(signo)
}

#[cfg(not(unix))]
pub fn signal_number(name: &str) -> Option<i32> {
    let signo = match signal_key(name).as_str() {
        "HUP" => 1,
        "INT" => 2,
        "QUIT" => 3,
        "ILL" => 4,
        "TRAP" => 5,
        "ABRT" => 6,
        "FPE" => 8,
        "KILL" => 9,
        "SEGV" => 11,
        "PIPE" => 13,
        "ALRM" => 14,
        "TERM" => 15,
        _ => return None,
    };
    Some(signo)
}

#[cfg(unix)]
fn raise_signal(signo: i32) {
    unsafe {
        libc::raise(signo);
    }
}

#[cfg(not(unix))]
fn raise_signal(_signo: i32) {}
