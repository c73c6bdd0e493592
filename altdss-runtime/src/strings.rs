// String marshalling in both directions.
//
// Outbound (`CStringArray`): owned NUL-terminated copies plus a pointer array,
// alive for exactly the duration of one engine call and released on drop.
//
// Inbound (`NativeStringArray`): an engine-allocated `char**` and its count
// array. The strings are copied out and the native memory is handed back to
// the engine's dispose routine on drop, exactly once.

use std::ffi::{CStr, CString, c_char};
use std::ptr;

use altdss_ffi::GR_COUNT_SLOTS;

use crate::error::DssResult;

/// Signature of the engine routine that frees a `char**` and its strings.
pub type DisposeStringArray = unsafe extern "C" fn(data: *mut *mut *mut c_char, capacity: i32);

/// Copy a NUL-terminated engine string into an owned `String`.
/// Null maps to the empty string; invalid UTF-8 is replaced.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string that stays valid
/// for the duration of this call.
pub unsafe fn copy_cstr(ptr: *const c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
}

/// Owned C copy of a Rust string, rejecting interior NUL bytes.
pub fn to_cstring(value: &str) -> DssResult<CString> {
    Ok(CString::new(value)?)
}

// ---------------------------------------------------------------------------
// Outbound
// ---------------------------------------------------------------------------

/// A `const char**` view over owned copies of Rust strings.
///
/// Construct immediately before the engine call, pass [`as_ptr`](Self::as_ptr)
/// and [`len`](Self::len), and let it drop afterwards.
pub struct CStringArray {
    // Keeps the pointed-to storage alive; never read directly.
    _owned: Vec<CString>,
    ptrs: Vec<*const c_char>,
}

impl CStringArray {
    pub fn new<S: AsRef<str>>(items: &[S]) -> DssResult<Self> {
        let owned = items
            .iter()
            .map(|s| to_cstring(s.as_ref()))
            .collect::<DssResult<Vec<_>>>()?;
        let ptrs = owned.iter().map(|s| s.as_ptr()).collect();
        Ok(CStringArray { _owned: owned, ptrs })
    }

    /// Pointer to the first element (dangling but non-null when empty).
    #[inline]
    pub fn as_ptr(&self) -> *const *const c_char {
        self.ptrs.as_ptr()
    }

    /// Element count as the engine expects it.
    #[inline]
    pub fn len(&self) -> i32 {
        self.ptrs.len() as i32
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ptrs.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Inbound
// ---------------------------------------------------------------------------

/// An engine-allocated string array awaiting copy-out and release.
pub struct NativeStringArray {
    data: *mut *mut c_char,
    count: [i32; GR_COUNT_SLOTS],
    dispose: DisposeStringArray,
}

impl NativeStringArray {
    pub fn new(dispose: DisposeStringArray) -> Self {
        NativeStringArray {
            data: ptr::null_mut(),
            count: [0; GR_COUNT_SLOTS],
            dispose,
        }
    }

    /// Out-parameters for the engine call that fills this array.
    #[inline]
    pub fn out_params(&mut self) -> (*mut *mut *mut c_char, *mut i32) {
        (&mut self.data, self.count.as_mut_ptr())
    }

    /// Number of strings the engine reported.
    #[inline]
    pub fn len(&self) -> usize {
        self.count[0].max(0) as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy every string out of native memory.
    pub fn to_vec(&self) -> Vec<String> {
        if self.data.is_null() {
            return Vec::new();
        }
        (0..self.len())
            .map(|i| unsafe { copy_cstr(*self.data.add(i)) })
            .collect()
    }

    /// Allocated capacity reported in slot 1, falling back to the length.
    fn capacity(&self) -> i32 {
        if self.count[1] > 0 { self.count[1] } else { self.count[0] }
    }
}

impl Drop for NativeStringArray {
    fn drop(&mut self) {
        if self.data.is_null() {
            return;
        }
        let capacity = self.capacity();
        unsafe { (self.dispose)(&mut self.data, capacity) };
        self.data = ptr::null_mut();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static RELEASED_STRINGS: AtomicUsize = AtomicUsize::new(0);
    static RELEASED_ARRAYS: AtomicUsize = AtomicUsize::new(0);

    unsafe extern "C" fn test_dispose(data: *mut *mut *mut c_char, capacity: i32) {
        unsafe {
            let array = *data;
            for i in 0..capacity as usize {
                drop(CString::from_raw(*array.add(i)));
                RELEASED_STRINGS.fetch_add(1, Ordering::SeqCst);
            }
            let slice = ptr::slice_from_raw_parts_mut(array, capacity as usize);
            drop(Box::from_raw(slice));
            RELEASED_ARRAYS.fetch_add(1, Ordering::SeqCst);
            *data = ptr::null_mut();
        }
    }

    fn engine_fill(names: &[&str], data: *mut *mut *mut c_char, count: *mut i32) {
        let raw: Box<[*mut c_char]> = names
            .iter()
            .map(|n| CString::new(*n).unwrap().into_raw())
            .collect();
        let len = raw.len() as i32;
        unsafe {
            *data = Box::into_raw(raw) as *mut *mut c_char;
            *count = len;
            *count.add(1) = len;
        }
    }

    #[test]
    fn outbound_array_points_at_equal_strings() {
        let items = ["632", "671", "sourcebus"];
        let array = CStringArray::new(&items).unwrap();
        assert_eq!(array.len(), 3);
        let back: Vec<String> = (0..array.len() as usize)
            .map(|i| unsafe { copy_cstr(*array.as_ptr().add(i)) })
            .collect();
        assert_eq!(back, items);
    }

    #[test]
    fn outbound_array_rejects_interior_nul() {
        assert!(CStringArray::new(&["ok", "bad\0name"]).is_err());
    }

    #[test]
    fn empty_outbound_array_is_valid() {
        let array = CStringArray::new::<&str>(&[]).unwrap();
        assert!(array.is_empty());
        assert!(!array.as_ptr().is_null());
    }

    #[test]
    fn inbound_array_copies_then_releases_once() {
        let strings_before = RELEASED_STRINGS.load(Ordering::SeqCst);
        let arrays_before = RELEASED_ARRAYS.load(Ordering::SeqCst);
        {
            let mut native = NativeStringArray::new(test_dispose);
            let (data, count) = native.out_params();
            engine_fill(&["line.l1", "line.l2"], data, count);
            assert_eq!(native.to_vec(), vec!["line.l1", "line.l2"]);
        }
        assert_eq!(RELEASED_STRINGS.load(Ordering::SeqCst) - strings_before, 2);
        assert_eq!(RELEASED_ARRAYS.load(Ordering::SeqCst) - arrays_before, 1);
    }

    static UNEXPECTED_DISPOSE: AtomicUsize = AtomicUsize::new(0);

    unsafe extern "C" fn counting_dispose(_data: *mut *mut *mut c_char, _capacity: i32) {
        UNEXPECTED_DISPOSE.fetch_add(1, Ordering::SeqCst);
    }

    #[test]
    fn unfilled_inbound_array_is_not_released() {
        let native = NativeStringArray::new(counting_dispose);
        assert!(native.to_vec().is_empty());
        drop(native);
        assert_eq!(UNEXPECTED_DISPOSE.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn copy_cstr_handles_null() {
        assert_eq!(unsafe { copy_cstr(ptr::null()) }, "");
    }
}
