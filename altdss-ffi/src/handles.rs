use std::ffi::c_void;

/// Opaque handle to one DSS engine instance. Rust never dereferences it.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ContextHandle(pub *mut c_void);

impl ContextHandle {
    pub const NULL: ContextHandle = ContextHandle(std::ptr::null_mut());

    #[inline]
    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    #[inline]
    pub fn to_addr(&self) -> u64 {
        self.0 as u64
    }
}

// The handle is an identifier; the engine permits an instance to be driven
// from any thread as long as it is one thread at a time.
unsafe impl Send for ContextHandle {}
unsafe impl Sync for ContextHandle {}

/// Engine booleans cross the ABI as 16-bit words (0 = false, anything else = true).
pub type DssBool = u16;

pub const DSS_FALSE: DssBool = 0;
pub const DSS_TRUE: DssBool = 1;

/// Convert a Rust bool into the engine's word-sized boolean.
#[inline]
pub fn to_dss_bool(value: bool) -> DssBool {
    if value { DSS_TRUE } else { DSS_FALSE }
}
