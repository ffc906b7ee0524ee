//! Tests for the diagnostic events emitted while capturing failures.

#![cfg(feature = "control")]

use attempt::control::Try;
use std::io;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

impl CapturedOutput {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedOutput {
    fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buffer);
        Ok(buffer.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn with_captured_logs<R>(body: impl FnOnce() -> R) -> (R, String) {
    let output = CapturedOutput::default();
    let writer = output.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let result = tracing::subscriber::with_default(subscriber, body);
    (result, output.contents())
}

#[test]
fn captured_panic_is_logged_at_debug() {
    let (result, logs) = with_captured_logs(|| Try::<i32>::catching(|| panic!("ledger locked")));
    assert_eq!(result, Try::error("ledger locked"));
    assert!(logs.contains("DEBUG"), "{logs}");
    assert!(logs.contains("captured panic as failure"), "{logs}");
    assert!(logs.contains("ledger locked"), "{logs}");
}

#[test]
fn success_path_is_silent() {
    let (result, logs) = with_captured_logs(|| Try::success(1).map(|n| n + 1));
    assert_eq!(result, Try::success(2));
    assert!(logs.is_empty(), "{logs}");
}

#[test]
fn re_raise_is_logged_at_trace() {
    let ((), logs) = with_captured_logs(|| {
        let failed: Try<i32> = Try::error("quota exceeded");
        let raised = catch_unwind(AssertUnwindSafe(|| failed.unwrap_or_raise()));
        assert!(raised.is_err());
    });
    assert!(logs.contains("TRACE"), "{logs}");
    assert!(logs.contains("re-raising captured failure"), "{logs}");
}
