//! Panic hook for crash reporting

use backtrace::Backtrace;
use chrono::Local;
use std::any::Any;
use std::panic::PanicHookInfo;

/// Initialize the panic hook for crash reporting
pub fn init_panic_hook() {
    std::panic::set_hook(Box::new(panic_handler));
    tracing::debug!("Panic hook initialized");
}

fn panic_handler(info: &PanicHookInfo) {
    let thread = std::thread::current();
    let report = crash_report(
        &Local::now().to_rfc3339(),
        thread.name().unwrap_or("<unnamed>"),
        &format!("{:?}", info.location()),
        payload_text(info.payload()),
        &format!("{:?}", Backtrace::new()),
    );

    // 1. stderr (always available)
    eprintln!("{}", report);

    // 2. tracing (may be gone during shutdown)
    tracing::error!("{}", report);

    // 3. Crash dump file
    let dump_filename = format!("photo_desk_crash_{}.txt", Local::now().format("%Y%m%d_%H%M%S"));
    let dump_path = std::env::temp_dir().join(&dump_filename);

    match std::fs::write(&dump_path, &report) {
        Ok(()) => eprintln!("Crash report written to {}", dump_path.display()),
        Err(e) => eprintln!("Failed to write crash dump: {}", e),
    }
}

/// Panic message for `&str` and `String` payloads
fn payload_text(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("<unknown>")
}

fn crash_report(timestamp: &str, thread: &str, location: &str, payload: &str, backtrace: &str) -> String {
    format!(
        "=== PHOTODESK CRASH ===\n\
         Timestamp: {}\n\
         Thread: {}\n\
         Location: {}\n\
         Payload: {}\n\n\
         Stack Trace:\n{}",
        timestamp, thread, location, payload, backtrace
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_text() {
        let literal: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(payload_text(literal.as_ref()), "boom");

        let owned: Box<dyn Any + Send> = Box::new(String::from("index out of range"));
        assert_eq!(payload_text(owned.as_ref()), "index out of range");

        let other: Box<dyn Any + Send> = Box::new(42u8);
        assert_eq!(payload_text(other.as_ref()), "<unknown>");
    }

    #[test]
    fn test_crash_report_layout() {
        let report = crash_report("2026-10-16T09:00:00+08:00", "main", "src/app.rs:10:5", "boom", "bt");
        assert!(report.starts_with("=== PHOTODESK CRASH ==="));
        assert!(report.contains("Thread: main"));
        assert!(report.contains("Payload: boom"));
        assert!(report.ends_with("Stack Trace:\nbt"));
    }
}
