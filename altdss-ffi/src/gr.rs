// Global-result ("GR") scratch-buffer registry.
//
// For every primitive result kind the engine keeps one growable buffer per
// context. `ctx_DSS_GetGRPointers` hands out the addresses of the slots where
// the engine stores the current buffer pointer and its count array. After a
// `*_GR` call the data lives at `**data_*` with `count_*[0]` elements, until
// the next call that reuses the same buffer.

use std::ffi::c_char;
use std::ptr;

/// Number of `i32` slots in every count array. Slot 0 is the element count,
/// slots 1..3 describe dimensions for matrix results.
pub const GR_COUNT_SLOTS: usize = 4;

/// Addresses of the scratch buffers and their count arrays for one context.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct GrPointers {
    pub data_string: *mut *mut *mut c_char,
    pub data_f64: *mut *mut f64,
    pub data_i32: *mut *mut i32,
    pub data_i8: *mut *mut i8,
    pub count_string: *mut i32,
    pub count_f64: *mut i32,
    pub count_i32: *mut i32,
    pub count_i8: *mut i32,
}

impl GrPointers {
    /// A registry with every slot null. Filled by `ctx_DSS_GetGRPointers`.
    pub const fn null() -> Self {
        GrPointers {
            data_string: ptr::null_mut(),
            data_f64: ptr::null_mut(),
            data_i32: ptr::null_mut(),
            data_i8: ptr::null_mut(),
            count_string: ptr::null_mut(),
            count_f64: ptr::null_mut(),
            count_i32: ptr::null_mut(),
            count_i8: ptr::null_mut(),
        }
    }

    /// True once the engine has populated every slot.
    pub fn is_populated(&self) -> bool {
        !self.data_string.is_null()
            && !self.data_f64.is_null()
            && !self.data_i32.is_null()
            && !self.data_i8.is_null()
            && !self.count_string.is_null()
            && !self.count_f64.is_null()
            && !self.count_i32.is_null()
            && !self.count_i8.is_null()
    }
}

impl Default for GrPointers {
    fn default() -> Self {
        GrPointers::null()
    }
}

// Raw addresses into engine memory. Owned by exactly one Context, which is
// never used from two threads at once.
unsafe impl Send for GrPointers {}
