// One mock engine instance: scratch buffers, error cell, settings and the
// circuit it holds.
//
// Instances are boxed and handed out as raw `ContextHandle`s, so every field
// address (the error cell and the scratch-buffer slots in particular) stays
// fixed for the lifetime of the instance.

use std::cell::Cell;
use std::ffi::{CString, c_char};
use std::ptr;
use std::sync::atomic::{AtomicIsize, AtomicUsize, Ordering};

use altdss_ffi::{ContextHandle, GR_COUNT_SLOTS};

use crate::model::Circuit;

static LIVE_INSTANCES: AtomicUsize = AtomicUsize::new(0);
static OUTSTANDING_STRINGS: AtomicIsize = AtomicIsize::new(0);

thread_local! {
    // One prime per thread keeps parallel tests from sharing an instance.
    static PRIME: Cell<*mut Instance> = const { Cell::new(ptr::null_mut()) };
}

/// Engine-side failure: the error number and description the binding reads
/// back through the error channel.
#[derive(Debug, Clone, PartialEq)]
pub struct Fault {
    pub code: i32,
    pub message: String,
}

impl Fault {
    pub fn new(code: i32, message: impl Into<String>) -> Fault {
        Fault {
            code,
            message: message.into(),
        }
    }
}

pub type MockResult<T> = Result<T, Fault>;

/// Growable result buffer plus the slot and count array the binding reads.
pub(crate) struct GrBuffer<T> {
    slot: *mut T,
    count: [i32; GR_COUNT_SLOTS],
    values: Vec<T>,
}

impl<T> GrBuffer<T> {
    fn new() -> Self {
        let mut values = Vec::new();
        GrBuffer {
            slot: values.as_mut_ptr(),
            count: [0; GR_COUNT_SLOTS],
            values,
        }
    }

    pub(crate) fn store(&mut self, values: Vec<T>) {
        self.values = values;
        self.slot = self.values.as_mut_ptr();
        let len = self.values.len() as i32;
        self.count = [len, len, 0, 0];
    }
}

pub(crate) struct Instance {
    error_number: i32,
    error_description: CString,
    pub(crate) f64s: GrBuffer<f64>,
    pub(crate) i32s: GrBuffer<i32>,
    pub(crate) i8s: GrBuffer<i8>,
    strings: GrBuffer<*mut c_char>,
    returned: CString,
    pub(crate) circuit: Option<Circuit>,
    pub(crate) last_command: String,
    pub(crate) last_result: String,
    pub(crate) allow_forms: bool,
    pub(crate) extended_errors: bool,
    pub(crate) legacy_models: bool,
    pub(crate) compat_flags: u32,
    pub(crate) iterate_disabled: bool,
    pub(crate) solve_mode: i32,
}

impl Instance {
    fn new() -> Instance {
        Instance {
            error_number: 0,
            error_description: CString::default(),
            f64s: GrBuffer::new(),
            i32s: GrBuffer::new(),
            i8s: GrBuffer::new(),
            strings: GrBuffer::new(),
            returned: CString::default(),
            circuit: None,
            last_command: String::new(),
            last_result: String::new(),
            allow_forms: true,
            extended_errors: true,
            legacy_models: false,
            compat_flags: 0,
            iterate_disabled: false,
            solve_mode: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn detached() -> Instance {
        Instance::new()
    }

    /// Allocate a counted instance (`ctx_New`).
    pub(crate) fn allocate() -> ContextHandle {
        LIVE_INSTANCES.fetch_add(1, Ordering::SeqCst);
        ContextHandle(Box::into_raw(Box::new(Instance::new())).cast())
    }

    /// Release an instance from `allocate` (`ctx_Dispose`).
    ///
    /// # Safety
    /// `ctx` must come from `allocate` and not have been released before.
    pub(crate) unsafe fn release(ctx: ContextHandle) {
        if ctx.is_null() || ctx.0.cast::<Instance>() == PRIME.with(Cell::get) {
            return;
        }
        drop(unsafe { Box::from_raw(ctx.0.cast::<Instance>()) });
        LIVE_INSTANCES.fetch_sub(1, Ordering::SeqCst);
    }

    /// This thread's prime instance, created on first use. Not counted as
    /// live and never released.
    pub(crate) fn prime() -> ContextHandle {
        PRIME.with(|prime| {
            if prime.get().is_null() {
                prime.set(Box::into_raw(Box::new(Instance::new())));
            }
            ContextHandle(prime.get().cast())
        })
    }

    pub(crate) fn replace_prime(ctx: ContextHandle) -> ContextHandle {
        let previous = Instance::prime();
        if !ctx.is_null() {
            PRIME.with(|prime| prime.set(ctx.0.cast()));
        }
        previous
    }

    /// # Safety
    /// `ctx` must be null or a live instance not borrowed elsewhere.
    pub(crate) unsafe fn from_handle<'a>(ctx: ContextHandle) -> Option<&'a mut Instance> {
        unsafe { ctx.0.cast::<Instance>().as_mut() }
    }

    // ---- Error cell ----

    pub(crate) fn fail(&mut self, fault: &Fault) {
        self.error_number = fault.code;
        self.error_description = to_c(&fault.message);
    }

    pub(crate) fn error_cell(&mut self) -> *mut i32 {
        &raw mut self.error_number
    }

    /// Read the error number and clear it, as `ctx_Error_Get_Number` does.
    pub(crate) fn take_error_number(&mut self) -> i32 {
        std::mem::take(&mut self.error_number)
    }

    pub(crate) fn error_description(&self) -> *const c_char {
        self.error_description.as_ptr()
    }

    /// Keep `value` alive until the next string result.
    pub(crate) fn hold_string(&mut self, value: &str) -> *const c_char {
        self.returned = to_c(value);
        self.returned.as_ptr()
    }

    /// Publish the scratch-buffer slots (`ctx_DSS_GetGRPointers`).
    ///
    /// # Safety
    /// Every out-parameter must be null or writable.
    #[allow(clippy::too_many_arguments)]
    pub(crate) unsafe fn publish_pointers(
        &mut self,
        data_string: *mut *mut *mut *mut c_char,
        data_f64: *mut *mut *mut f64,
        data_i32: *mut *mut *mut i32,
        data_i8: *mut *mut *mut i8,
        count_string: *mut *mut i32,
        count_f64: *mut *mut i32,
        count_i32: *mut *mut i32,
        count_i8: *mut *mut i32,
    ) {
        unsafe {
            write(data_string, &raw mut self.strings.slot);
            write(data_f64, &raw mut self.f64s.slot);
            write(data_i32, &raw mut self.i32s.slot);
            write(data_i8, &raw mut self.i8s.slot);
            write(count_string, self.strings.count.as_mut_ptr());
            write(count_f64, self.f64s.count.as_mut_ptr());
            write(count_i32, self.i32s.count.as_mut_ptr());
            write(count_i8, self.i8s.count.as_mut_ptr());
        }
    }
}

unsafe fn write<T>(out: *mut T, value: T) {
    if !out.is_null() {
        unsafe { out.write(value) };
    }
}

pub(crate) fn to_c(value: &str) -> CString {
    CString::new(value.replace('\0', " ")).unwrap_or_default()
}

// ---- Engine-allocated string arrays ----

/// Hand `values` to the caller as a freshly allocated `char**`.
///
/// # Safety
/// `data` and `count` must be writable; `count` must have room for two slots.
pub(crate) unsafe fn fill_string_array(
    values: &[String],
    data: *mut *mut *mut c_char,
    count: *mut i32,
) {
    let raw: Box<[*mut c_char]> = values.iter().map(|v| to_c(v).into_raw()).collect();
    let len = raw.len() as i32;
    OUTSTANDING_STRINGS.fetch_add(raw.len() as isize, Ordering::SeqCst);
    unsafe {
        *data = Box::into_raw(raw).cast::<*mut c_char>();
        *count = len;
        *count.add(1) = len;
    }
}

/// Release an array from `fill_string_array` (`DSS_Dispose_PPAnsiChar`).
///
/// # Safety
/// `*data` must be null or an array from `fill_string_array` with exactly
/// `capacity` entries.
pub(crate) unsafe fn dispose_string_array(data: *mut *mut *mut c_char, capacity: i32) {
    if data.is_null() {
        return;
    }
    unsafe {
        let array = *data;
        if array.is_null() {
            return;
        }
        let capacity = capacity.max(0) as usize;
        for i in 0..capacity {
            drop(CString::from_raw(*array.add(i)));
        }
        drop(Box::from_raw(ptr::slice_from_raw_parts_mut(array, capacity)));
        *data = ptr::null_mut();
    }
    OUTSTANDING_STRINGS.fetch_sub(capacity.max(0) as isize, Ordering::SeqCst);
}

/// Instances created with `ctx_New` and not yet disposed.
pub fn live_instances() -> usize {
    LIVE_INSTANCES.load(Ordering::SeqCst)
}

/// Strings handed out in arrays and not yet released.
pub fn outstanding_strings() -> isize {
    OUTSTANDING_STRINGS.load(Ordering::SeqCst)
}
