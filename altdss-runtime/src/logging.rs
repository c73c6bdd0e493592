// Bridge from engine messages to `tracing`.

use std::ffi::c_char;
use std::slice;
use std::sync::{Mutex, PoisonError};

use altdss_ffi::{ContextHandle, DssApi, message_type};

use crate::ffi_guard::ffi_boundary;
use crate::strings::copy_cstr;

/// Target used for every forwarded engine message.
pub const ENGINE_TARGET: &str = "altdss::engine";

// Engines forwarding through each registration entry point, keyed by that
// entry point's address. An engine library holds one registration of
// `forward_message` no matter how many `Engine`s share it.
static FORWARDERS: Mutex<Vec<(usize, usize)>> = Mutex::new(Vec::new());

/// Start forwarding for one more engine. Registers `forward_message` when
/// this is the first engine on that library. False when the engine cannot
/// register callbacks.
pub(crate) fn acquire_forwarding(api: &DssApi) -> bool {
    let Some(register) = api.memory.DSS_RegisterMessageCallback else {
        return false;
    };
    let key = register as usize;
    let mut forwarders = FORWARDERS.lock().unwrap_or_else(PoisonError::into_inner);
    match forwarders.iter_mut().find(|(k, _)| *k == key) {
        Some((_, users)) => *users += 1,
        None => {
            unsafe { register(Some(forward_message)) };
            forwarders.push((key, 1));
        }
    }
    true
}

/// Undo one `acquire_forwarding`. The last engine on a library unregisters.
pub(crate) fn release_forwarding(api: &DssApi) {
    let Some(register) = api.memory.DSS_RegisterMessageCallback else {
        return;
    };
    let key = register as usize;
    let mut forwarders = FORWARDERS.lock().unwrap_or_else(PoisonError::into_inner);
    let Some(pos) = forwarders.iter().position(|(k, _)| *k == key) else {
        return;
    };
    forwarders[pos].1 -= 1;
    if forwarders[pos].1 > 0 {
        return;
    }
    forwarders.swap_remove(pos);
    if let Some(unregister) = api.memory.DSS_UnregisterMessageCallback {
        unsafe { unregister(Some(forward_message)) };
    }
}

/// Message callback registered with `DSS_RegisterMessageCallback`.
///
/// Errors map to `error`, progress chatter to `trace`, everything else to
/// `info`. Always reports the message as handled.
///
/// # Safety
/// `message` must be null or point to `size` readable bytes (or a
/// NUL-terminated string when `size` is negative).
pub unsafe extern "C" fn forward_message(
    ctx: ContextHandle,
    message: *const c_char,
    kind: i32,
    size: i64,
    subtype: i32,
) -> i32 {
    ffi_boundary(0, move || {
        let text = unsafe { message_text(message, size) };
        let text = text.trim_end();
        let ctx = ctx.to_addr();
        match kind {
            message_type::ERROR => {
                tracing::error!(target: ENGINE_TARGET, ctx, subtype, "{text}")
            }
            message_type::PROGRESS
            | message_type::PROGRESS_CAPTION
            | message_type::PROGRESS_FORM_CAPTION
            | message_type::PROGRESS_PERCENT => {
                tracing::trace!(target: ENGINE_TARGET, ctx, kind, "{text}")
            }
            message_type::FIRE_OFF_EDITOR => {
                tracing::info!(target: ENGINE_TARGET, ctx, "engine requested an editor for {text}")
            }
            _ => tracing::info!(target: ENGINE_TARGET, ctx, kind, "{text}"),
        }
        0
    })
}

unsafe fn message_text(message: *const c_char, size: i64) -> String {
    if message.is_null() {
        return String::new();
    }
    if size < 0 {
        return unsafe { copy_cstr(message) };
    }
    let bytes = unsafe { slice::from_raw_parts(message.cast::<u8>(), size as usize) };
    let bytes = bytes.split(|b| *b == 0).next().unwrap_or_default();
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    #[test]
    fn sized_message_stops_at_size() {
        let raw = CString::new("Circuit solved").unwrap();
        assert_eq!(unsafe { message_text(raw.as_ptr(), 7) }, "Circuit");
    }

    #[test]
    fn unsized_message_reads_to_nul() {
        let raw = CString::new("done").unwrap();
        assert_eq!(unsafe { message_text(raw.as_ptr(), -1) }, "done");
        assert_eq!(unsafe { message_text(std::ptr::null(), 4) }, "");
    }

    #[test]
    fn forwarding_reports_handled() {
        let raw = CString::new("Warning: zero impedance").unwrap();
        let status = unsafe {
            forward_message(
                ContextHandle::NULL,
                raw.as_ptr(),
                message_type::ERROR,
                raw.as_bytes().len() as i64,
                0,
            )
        };
        assert_eq!(status, 0);
    }
}
