use std::sync::{Mutex, MutexGuard};

static BUFFER: Mutex<Option<Vec<String>>> = Mutex::new(None);

fn lock() -> MutexGuard<'static, Option<Vec<String>>> {
    BUFFER.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Start holding back stderr output. Used while the TUI owns the terminal.
pub fn activate() {
    *lock() = Some(Vec::new());
}

/// Stop buffering and return everything collected since `activate`.
pub fn drain() -> Vec<String> {
    lock().take().unwrap_or_default()
}

/// Write a diagnostic line. Stored while buffering is active, printed to
/// stderr otherwise.
pub fn write(msg: String) {
    let mut guard = lock();
    if let Some(buf) = guard.as_mut() {
        buf.push(msg);
    } else {
        drop(guard);
        eprintln!("{}", msg);
    }
}

/// Like `eprintln!`, but routed through the stderr buffer when it is active.
#[macro_export]
macro_rules! buffered_eprintln {
    ($($arg:tt)*) => {
        $crate::stderr_buffer::write(format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_collects_while_active() {
        activate();
        crate::buffered_eprintln!("saved {}", "settings");
        write("second".to_string());
        let messages = drain();
        assert_eq!(messages, vec!["saved settings".to_string(), "second".to_string()]);
        assert!(drain().is_empty());
    }
}
