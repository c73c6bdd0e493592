// Scratch-buffer copy-out.
//
// The engine owns the buffers behind `GrPointers` and reuses them on the next
// `*_GR` call, so every read here produces an owned container immediately.
// No slice into engine memory ever leaves this module.

use std::slice;

use altdss_ffi::GrPointers;
use num_complex::Complex64;

use crate::error::{DssError, DssResult};

/// Read-only view of one context's scratch-buffer registry.
#[derive(Clone, Copy, Debug)]
pub struct ScratchBuffers {
    gr: GrPointers,
}

impl ScratchBuffers {
    /// Wrap a registry populated by `ctx_DSS_GetGRPointers`.
    ///
    /// # Safety
    /// Every non-null slot must stay valid for as long as this value is used,
    /// i.e. for the lifetime of the owning engine context.
    pub unsafe fn new(gr: GrPointers) -> Self {
        ScratchBuffers { gr }
    }

    pub fn pointers(&self) -> &GrPointers {
        &self.gr
    }

    /// Copy the f64 buffer.
    pub fn copy_f64(&self) -> Vec<f64> {
        unsafe { read_buffer(self.gr.data_f64, self.gr.count_f64) }
    }

    /// Copy the i32 buffer.
    pub fn copy_i32(&self) -> Vec<i32> {
        unsafe { read_buffer(self.gr.data_i32, self.gr.count_i32) }
    }

    /// Copy the byte buffer.
    pub fn copy_i8(&self) -> Vec<i8> {
        unsafe { read_buffer(self.gr.data_i8, self.gr.count_i8) }
    }

    /// Copy the f64 buffer as (re, im) pairs.
    pub fn copy_complex(&self) -> Vec<Complex64> {
        complex_pairs(&self.copy_f64())
    }

    /// Copy the f64 buffer as exactly one complex value.
    pub fn copy_single_complex(&self) -> DssResult<Complex64> {
        single_complex(&self.copy_f64())
    }

    /// Element count of the f64 buffer (slot 0 of its count array).
    pub fn f64_count(&self) -> usize {
        unsafe { read_count(self.gr.count_f64) }
    }
}

/// Interpret a flat buffer as complex pairs.
///
/// A single value is the engine's encoding of "no complex elements" and
/// yields an empty vector; an odd trailing value is dropped.
pub fn complex_pairs(values: &[f64]) -> Vec<Complex64> {
    if values.len() == 1 {
        return Vec::new();
    }
    values
        .chunks_exact(2)
        .map(|pair| Complex64::new(pair[0], pair[1]))
        .collect()
}

/// Interpret a flat buffer as exactly one complex value.
pub fn single_complex(values: &[f64]) -> DssResult<Complex64> {
    match values {
        [re, im] => Ok(Complex64::new(*re, *im)),
        _ => Err(DssError::InvalidComplex {
            count: values.len(),
        }),
    }
}

unsafe fn read_count(count: *const i32) -> usize {
    if count.is_null() {
        return 0;
    }
    unsafe { count.read() }.max(0) as usize
}

/// # Safety
/// `data` and `count` must be null or point to the live slots of one buffer.
unsafe fn read_buffer<T: Copy>(data: *mut *mut T, count: *const i32) -> Vec<T> {
    if data.is_null() {
        return Vec::new();
    }
    let buffer = unsafe { data.read() };
    let len = unsafe { read_count(count) };
    if buffer.is_null() || len == 0 {
        return Vec::new();
    }
    unsafe { slice::from_raw_parts(buffer, len) }.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Engine-side storage for a fake f64 scratch buffer.
    struct FakeF64 {
        values: Vec<f64>,
        data: *mut f64,
        count: [i32; 4],
    }

    impl FakeF64 {
        fn new(values: Vec<f64>) -> Box<Self> {
            let mut fake = Box::new(FakeF64 {
                count: [values.len() as i32, 0, 0, 0],
                values,
                data: std::ptr::null_mut(),
            });
            fake.data = fake.values.as_mut_ptr();
            fake
        }

        fn buffers(&mut self) -> ScratchBuffers {
            let mut gr = GrPointers::null();
            gr.data_f64 = &mut self.data;
            gr.count_f64 = self.count.as_mut_ptr();
            unsafe { ScratchBuffers::new(gr) }
        }
    }

    #[test]
    fn single_value_decodes_to_no_complex_elements() {
        let mut fake = FakeF64::new(vec![1.0]);
        assert!(fake.buffers().copy_complex().is_empty());
    }

    #[test]
    fn pairs_decode_to_complex_values() {
        let mut fake = FakeF64::new(vec![1.0, -2.0, 3.5, 0.25]);
        assert_eq!(
            fake.buffers().copy_complex(),
            vec![Complex64::new(1.0, -2.0), Complex64::new(3.5, 0.25)]
        );
    }

    #[test]
    fn odd_count_drops_trailing_value() {
        assert_eq!(complex_pairs(&[1.0, 2.0, 3.0]), vec![Complex64::new(1.0, 2.0)]);
    }

    #[test]
    fn single_complex_requires_exactly_two_values() {
        let mut fake = FakeF64::new(vec![4.0, 5.0]);
        assert_eq!(fake.buffers().copy_single_complex().unwrap(), Complex64::new(4.0, 5.0));

        for bad in [vec![], vec![1.0], vec![1.0, 2.0, 3.0]] {
            let err = single_complex(&bad).unwrap_err();
            assert!(matches!(err, DssError::InvalidComplex { count } if count == bad.len()));
        }
    }

    #[test]
    fn copy_is_independent_of_engine_buffer() {
        let mut fake = FakeF64::new(vec![1.0, 2.0]);
        let copied = fake.buffers().copy_f64();
        fake.values[0] = 99.0;
        assert_eq!(copied, vec![1.0, 2.0]);
    }

    #[test]
    fn only_slot_zero_is_read() {
        let mut fake = FakeF64::new(vec![1.0, 2.0, 3.0, 4.0]);
        fake.count = [2, 2, 1, 0];
        assert_eq!(fake.buffers().copy_f64(), vec![1.0, 2.0]);
    }

    #[test]
    fn unpopulated_registry_reads_empty() {
        let buffers = unsafe { ScratchBuffers::new(GrPointers::null()) };
        assert!(buffers.copy_f64().is_empty());
        assert!(buffers.copy_i32().is_empty());
        assert!(buffers.copy_i8().is_empty());
        assert_eq!(buffers.f64_count(), 0);
    }

    #[test]
    fn integer_and_byte_buffers_copy_out() {
        let mut ints = vec![1i32, 2, 3];
        let mut ints_ptr = ints.as_mut_ptr();
        let mut ints_count = [3i32, 0, 0, 0];
        let mut bytes = vec![-1i8, 7];
        let mut bytes_ptr = bytes.as_mut_ptr();
        let mut bytes_count = [2i32, 0, 0, 0];

        let mut gr = GrPointers::null();
        gr.data_i32 = &mut ints_ptr;
        gr.count_i32 = ints_count.as_mut_ptr();
        gr.data_i8 = &mut bytes_ptr;
        gr.count_i8 = bytes_count.as_mut_ptr();
        let buffers = unsafe { ScratchBuffers::new(gr) };

        assert_eq!(buffers.copy_i32(), vec![1, 2, 3]);
        assert_eq!(buffers.copy_i8(), vec![-1, 7]);
    }
}
