//! Operator progress reporting
//!
//! Deploy and configure operations block while a transaction confirms, which
//! on a testnet can take long enough that an operator watching stdout needs
//! an indication that work is in flight. The reporter is injected into the
//! orchestration context so task logic stays testable without a terminal.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Progress indication around a blocking wait.
///
/// `start` is called right before a transaction is submitted and `stop`
/// right after its confirmation arrives. Implementations must tolerate a
/// `stop` without a matching `start`.
pub trait ProgressReporter: Send + Sync {
    /// Announce the operation and begin indicating activity.
    fn start(&self, message: &str);

    /// Cease activity indication.
    fn stop(&self);
}

const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
const SPINNER_INTERVAL: Duration = Duration::from_millis(100);

/// Terminal spinner writing to stderr on a background thread.
#[derive(Default)]
pub struct Spinner {
    state: std::sync::Mutex<Option<SpinnerHandle>>,
}

struct SpinnerHandle {
    running: Arc<AtomicBool>,
    thread: JoinHandle<()>,
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressReporter for Spinner {
    fn start(&self, message: &str) {
        println!("ℹ️  {message}");
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);
        let thread = thread::spawn(move || {
            let mut frames = SPINNER_FRAMES.iter().cycle();
            while flag.load(Ordering::Relaxed) {
                // next() on a cycled non-empty iterator always yields
                let frame = frames.next().unwrap();
                eprint!("\r{frame}");
                let _ = io::stderr().flush();
                thread::sleep(SPINNER_INTERVAL);
            }
            eprint!("\r \r");
            let _ = io::stderr().flush();
        });
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        *state = Some(SpinnerHandle { running, thread });
    }

    fn stop(&self) {
        let handle = {
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            state.take()
        };
        if let Some(handle) = handle {
            handle.running.store(false, Ordering::Relaxed);
            let _ = handle.thread.join();
        }
    }
}

/// Reporter that does nothing; used where terminal output is unwanted.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl ProgressReporter for NoopProgress {
    fn start(&self, _message: &str) {}
    fn stop(&self) {}
}
