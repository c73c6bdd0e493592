// FFI boundary guard: wraps Rust callbacks to catch panics before they
// cross back into the engine (which is undefined behavior).

/// Execute `f` and catch any panic, returning `default` on failure.
///
/// Every `extern "C"` function the engine calls back into wraps its body in
/// this guard. The panic message is reported through `tracing`.
pub fn ffi_boundary<F, R>(default: R, f: F) -> R
where
    F: FnOnce() -> R + std::panic::UnwindSafe,
{
    match std::panic::catch_unwind(f) {
        Ok(value) => value,
        Err(payload) => {
            tracing::error!(target: "altdss::ffi", "{}", panic_message(&payload));
            default
        }
    }
}

/// Extract a human-readable message from a panic payload.
fn panic_message(payload: &Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("Rust panic in engine callback: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("Rust panic in engine callback: {s}")
    } else {
        "Rust panic in engine callback (unknown payload)".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ffi_boundary_returns_value_on_success() {
        assert_eq!(ffi_boundary(0i32, || 42), 42);
    }

    #[test]
    fn ffi_boundary_returns_default_on_panic() {
        let result = ffi_boundary(-1i32, || {
            panic!("callback failed");
        });
        assert_eq!(result, -1);
    }

    #[test]
    fn panic_message_includes_formatted_payload() {
        let payload = std::panic::catch_unwind(|| panic!("{} {}", "bus", 632)).unwrap_err();
        assert_eq!(panic_message(&payload), "Rust panic in engine callback: bus 632");
    }
}
