// Typed call helpers: invoke one entry point, copy out whatever it produced,
// then check the error channel.
//
// String and scratch-buffer results are copied before the error check. The
// engine may reuse that memory while producing the error description.

use std::ffi::c_char;

use altdss_ffi::{ContextHandle, DSS_FALSE, to_dss_bool};
use num_complex::Complex64;

use crate::context::Context;
use crate::entries::{
    ActionFn, ArraySetFn, BoolGetFn, BoolSetFn, Entry, GetFn, SetFn, StringArrayGetFn,
    StringArraySetFn, StringGetFn, StringSetFn,
};
use crate::entry;
use crate::error::DssResult;
use crate::marshal::ScratchBuffers;
use crate::selection::{EntityKind, Selection};
use crate::strings::{CStringArray, NativeStringArray, copy_cstr, to_cstring};

impl Context {
    // ---- Scalars ----

    pub fn get<T>(&self, entry: Entry<GetFn<T>>) -> DssResult<T> {
        let f = entry.resolve()?;
        let value = unsafe { f(self.handle()) };
        self.check_error()?;
        Ok(value)
    }

    pub fn set<T>(&self, entry: Entry<SetFn<T>>, value: T) -> DssResult<()> {
        let f = entry.resolve()?;
        unsafe { f(self.handle(), value) };
        self.check_error()
    }

    pub fn get_bool(&self, entry: Entry<BoolGetFn>) -> DssResult<bool> {
        Ok(self.get(entry)? != DSS_FALSE)
    }

    pub fn set_bool(&self, entry: Entry<BoolSetFn>, value: bool) -> DssResult<()> {
        self.set(entry, to_dss_bool(value))
    }

    pub fn get_string(&self, entry: Entry<StringGetFn>) -> DssResult<String> {
        let f = entry.resolve()?;
        let value = unsafe { copy_cstr(f(self.handle())) };
        self.check_error()?;
        Ok(value)
    }

    pub fn set_string(&self, entry: Entry<StringSetFn>, value: &str) -> DssResult<()> {
        let value = to_cstring(value)?;
        let f = entry.resolve()?;
        unsafe { f(self.handle(), value.as_ptr()) };
        self.check_error()
    }

    /// Read a scalar without consulting the error channel. Only for entry
    /// points that themselves report on that channel.
    pub fn peek<T>(&self, entry: Entry<GetFn<T>>) -> DssResult<T> {
        let f = entry.resolve()?;
        Ok(unsafe { f(self.handle()) })
    }

    pub fn peek_string(&self, entry: Entry<StringGetFn>) -> DssResult<String> {
        let f = entry.resolve()?;
        Ok(unsafe { copy_cstr(f(self.handle())) })
    }

    /// Run an argument-less action.
    pub fn call(&self, entry: Entry<ActionFn>) -> DssResult<()> {
        let f = entry.resolve()?;
        unsafe { f(self.handle()) };
        self.check_error()
    }

    /// Escape hatch for signatures the typed helpers do not cover. `call`
    /// receives the resolved function and this context's handle.
    pub fn invoke<F: Copy, R>(
        &self,
        entry: Entry<F>,
        call: impl FnOnce(F, ContextHandle) -> R,
    ) -> DssResult<R> {
        let f = entry.resolve()?;
        let value = call(f, self.handle());
        self.check_error()?;
        Ok(value)
    }

    /// `invoke` for entry points returning a borrowed engine string.
    pub fn invoke_string<F: Copy>(
        &self,
        entry: Entry<F>,
        call: impl FnOnce(F, ContextHandle) -> *const c_char,
    ) -> DssResult<String> {
        let f = entry.resolve()?;
        let value = unsafe { copy_cstr(call(f, self.handle())) };
        self.check_error()?;
        Ok(value)
    }

    // ---- String arrays ----

    pub fn get_strings(&self, entry: Entry<StringArrayGetFn>) -> DssResult<Vec<String>> {
        self.collect_strings(entry, |f, ctx, data, count| unsafe { f(ctx, data, count) })
    }

    /// Call a string-array getter with extra arguments. The native array is
    /// released before the error check, on every path.
    pub fn collect_strings<F: Copy>(
        &self,
        entry: Entry<F>,
        fill: impl FnOnce(F, ContextHandle, *mut *mut *mut c_char, *mut i32),
    ) -> DssResult<Vec<String>> {
        let f = entry.resolve()?;
        let dispose = entry!(self, memory.DSS_Dispose_PPAnsiChar).resolve()?;
        let values = {
            let mut native = NativeStringArray::new(dispose);
            let (data, count) = native.out_params();
            fill(f, self.handle(), data, count);
            native.to_vec()
        };
        self.check_error()?;
        Ok(values)
    }

    pub fn set_strings<S: AsRef<str>>(
        &self,
        entry: Entry<StringArraySetFn>,
        values: &[S],
    ) -> DssResult<()> {
        let array = CStringArray::new(values)?;
        let f = entry.resolve()?;
        unsafe { f(self.handle(), array.as_ptr(), array.len()) };
        self.check_error()
    }

    // ---- Scratch-buffer results ----

    fn fill_then<F: Copy, R>(
        &self,
        entry: Entry<F>,
        fill: impl FnOnce(F, ContextHandle),
        read: impl FnOnce(&ScratchBuffers) -> R,
    ) -> DssResult<R> {
        let f = entry.resolve()?;
        fill(f, self.handle());
        let value = read(self.buffers());
        self.check_error()?;
        Ok(value)
    }

    pub fn get_f64s(&self, entry: Entry<ActionFn>) -> DssResult<Vec<f64>> {
        self.fill_f64s(entry, |f, ctx| unsafe { f(ctx) })
    }

    pub fn fill_f64s<F: Copy>(
        &self,
        entry: Entry<F>,
        fill: impl FnOnce(F, ContextHandle),
    ) -> DssResult<Vec<f64>> {
        self.fill_then(entry, fill, ScratchBuffers::copy_f64)
    }

    pub fn get_i32s(&self, entry: Entry<ActionFn>) -> DssResult<Vec<i32>> {
        self.fill_i32s(entry, |f, ctx| unsafe { f(ctx) })
    }

    pub fn fill_i32s<F: Copy>(
        &self,
        entry: Entry<F>,
        fill: impl FnOnce(F, ContextHandle),
    ) -> DssResult<Vec<i32>> {
        self.fill_then(entry, fill, ScratchBuffers::copy_i32)
    }

    pub fn get_i8s(&self, entry: Entry<ActionFn>) -> DssResult<Vec<i8>> {
        self.fill_then(entry, |f, ctx| unsafe { f(ctx) }, ScratchBuffers::copy_i8)
    }

    pub fn fill_i8s<F: Copy>(
        &self,
        entry: Entry<F>,
        fill: impl FnOnce(F, ContextHandle),
    ) -> DssResult<Vec<i8>> {
        self.fill_then(entry, fill, ScratchBuffers::copy_i8)
    }

    pub fn get_complexes(&self, entry: Entry<ActionFn>) -> DssResult<Vec<Complex64>> {
        self.fill_complexes(entry, |f, ctx| unsafe { f(ctx) })
    }

    pub fn fill_complexes<F: Copy>(
        &self,
        entry: Entry<F>,
        fill: impl FnOnce(F, ContextHandle),
    ) -> DssResult<Vec<Complex64>> {
        self.fill_then(entry, fill, ScratchBuffers::copy_complex)
    }

    pub fn get_complex(&self, entry: Entry<ActionFn>) -> DssResult<Complex64> {
        self.fill_complex(entry, |f, ctx| unsafe { f(ctx) })
    }

    /// Engine faults take precedence over a malformed result.
    pub fn fill_complex<F: Copy>(
        &self,
        entry: Entry<F>,
        fill: impl FnOnce(F, ContextHandle),
    ) -> DssResult<Complex64> {
        self.fill_then(entry, fill, ScratchBuffers::copy_single_complex)?
    }

    // ---- Array setters ----

    pub fn set_array<T>(&self, entry: Entry<ArraySetFn<T>>, values: &[T]) -> DssResult<()> {
        let f = entry.resolve()?;
        unsafe { f(self.handle(), values.as_ptr(), values.len() as i32) };
        self.check_error()
    }

    pub fn set_complex(&self, entry: Entry<ArraySetFn<f64>>, value: Complex64) -> DssResult<()> {
        self.set_array(entry, &[value.re, value.im])
    }

    pub fn set_complexes(
        &self,
        entry: Entry<ArraySetFn<f64>>,
        values: &[Complex64],
    ) -> DssResult<()> {
        let flat: Vec<f64> = values.iter().flat_map(|c| [c.re, c.im]).collect();
        self.set_array(entry, &flat)
    }

    // ---- Selection-aware cursor moves ----

    /// Run a First/Next style step. A nonzero result means an object of
    /// `kind` is now active; its index is read through `idx` when available.
    pub fn step(
        &self,
        entry: Entry<GetFn<i32>>,
        kind: EntityKind,
        idx: Option<Entry<GetFn<i32>>>,
    ) -> DssResult<i32> {
        let result = self.get(entry)?;
        if result != 0 {
            self.note_selected(kind, idx)?;
        }
        Ok(result)
    }

    /// Select an object of `kind` by name.
    pub fn select_name(
        &self,
        entry: Entry<StringSetFn>,
        kind: EntityKind,
        idx: Option<Entry<GetFn<i32>>>,
        name: &str,
    ) -> DssResult<()> {
        self.set_string(entry, name)?;
        self.note_selected(kind, idx)
    }

    /// Select an object of `kind` by its 1-based index.
    pub fn select_idx(
        &self,
        entry: Entry<SetFn<i32>>,
        kind: EntityKind,
        index: i32,
    ) -> DssResult<()> {
        self.set(entry, index)?;
        self.record_selection(Selection::new(kind, Some(index)));
        Ok(())
    }

    fn note_selected(&self, kind: EntityKind, idx: Option<Entry<GetFn<i32>>>) -> DssResult<()> {
        let index = match idx {
            Some(idx) if idx.is_resolved() => Some(self.get(idx)?),
            _ => None,
        };
        self.record_selection(Selection::new(kind, index));
        Ok(())
    }
}
