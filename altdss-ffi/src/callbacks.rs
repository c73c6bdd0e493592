use std::ffi::c_char;

use crate::handles::ContextHandle;

/// Engine -> Rust message callback, registered with `DSS_RegisterMessageCallback`.
///
/// `message` is NUL-terminated; `message_size` is its byte length. The return
/// value is passed back to the engine (0 = handled).
pub type DssMessageCallback = unsafe extern "C" fn(
    ctx: ContextHandle,
    message: *const c_char,
    message_type: i32,
    message_size: i64,
    message_subtype: i32,
) -> i32;

/// Message kinds reported through [`DssMessageCallback`].
pub mod message_type {
    pub const ERROR: i32 = -1;
    pub const GENERAL: i32 = 0;
    pub const INFO: i32 = 1;
    pub const HELP: i32 = 2;
    pub const PROGRESS: i32 = 3;
    pub const PROGRESS_CAPTION: i32 = 4;
    pub const PROGRESS_FORM_CAPTION: i32 = 5;
    pub const PROGRESS_PERCENT: i32 = 6;
    pub const FIRE_OFF_EDITOR: i32 = 7;
}
