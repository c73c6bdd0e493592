// Compile-time contract tests: ensure ABI sizes match the engine's expectations.
// These const assertions fail at compile time if sizes drift.

use std::mem::size_of;

use crate::gr::{GrPointers, GR_COUNT_SLOTS};
use crate::handles::{ContextHandle, DssBool};
use crate::callbacks::DssMessageCallback;

const _: () = assert!(size_of::<ContextHandle>() == size_of::<*mut u8>());
const _: () = assert!(size_of::<DssBool>() == 2);
const _: () = assert!(size_of::<GrPointers>() == 8 * size_of::<*mut u8>());
const _: () = assert!(GR_COUNT_SLOTS == 4);
// A nullable callback must stay pointer-sized to pass as a plain C function pointer.
const _: () = assert!(size_of::<Option<DssMessageCallback>>() == size_of::<*mut u8>());
