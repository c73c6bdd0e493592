// Named entry points.
//
// Table fields are `Option`s; an `Entry` pairs one with a readable name so an
// unresolved symbol turns into `DssError::MissingEntryPoint` at call time.

use std::ffi::c_char;

use altdss_ffi::{ContextHandle, DssBool};

use crate::error::{DssError, DssResult};

/// Scalar getter: `T f(ctx)`.
pub type GetFn<T> = unsafe extern "C" fn(ContextHandle) -> T;
/// Scalar setter: `void f(ctx, value)`.
pub type SetFn<T> = unsafe extern "C" fn(ContextHandle, T);
/// Action or `*_GR` getter: `void f(ctx)`.
pub type ActionFn = unsafe extern "C" fn(ContextHandle);
pub type BoolGetFn = GetFn<DssBool>;
pub type BoolSetFn = SetFn<DssBool>;
pub type StringGetFn = GetFn<*const c_char>;
pub type StringSetFn = SetFn<*const c_char>;
/// String-array getter filling a `char**` and a count array.
pub type StringArrayGetFn = unsafe extern "C" fn(ContextHandle, *mut *mut *mut c_char, *mut i32);
/// Array setter: `void f(ctx, const T* values, int count)`.
pub type ArraySetFn<T> = unsafe extern "C" fn(ContextHandle, *const T, i32);
pub type StringArraySetFn = unsafe extern "C" fn(ContextHandle, *const *const c_char, i32);

/// One entry point of the loaded engine, possibly unresolved.
#[derive(Clone, Copy)]
pub struct Entry<F> {
    name: &'static str,
    func: Option<F>,
}

impl<F: Copy> Entry<F> {
    pub const fn new(name: &'static str, func: Option<F>) -> Self {
        Entry { name, func }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_resolved(&self) -> bool {
        self.func.is_some()
    }

    /// The function pointer, or `MissingEntryPoint`.
    pub fn resolve(&self) -> DssResult<F> {
        self.func.ok_or(DssError::MissingEntryPoint(self.name))
    }
}

/// Look up `table.Function` in a context's entry-point table.
///
/// ```ignore
/// let count = ctx.get(entry!(ctx, lines.Get_Count))?;
/// ```
#[macro_export]
macro_rules! entry {
    ($ctx:expr, $table:ident . $func:ident) => {
        $crate::Entry::new(
            concat!(stringify!($table), ".", stringify!($func)),
            $ctx.api().$table.$func,
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    unsafe extern "C" fn seven(_ctx: ContextHandle) -> i32 {
        7
    }

    #[test]
    fn resolved_entry_returns_function() {
        let entry: Entry<GetFn<i32>> = Entry::new("probe.Get_Count", Some(seven));
        let f = entry.resolve().unwrap();
        assert_eq!(unsafe { f(ContextHandle::NULL) }, 7);
    }

    #[test]
    fn unresolved_entry_names_the_symbol() {
        let entry: Entry<GetFn<i32>> = Entry::new("lines.Get_Count", None);
        assert!(!entry.is_resolved());
        match entry.resolve() {
            Err(DssError::MissingEntryPoint(name)) => assert_eq!(name, "lines.Get_Count"),
            _ => panic!("expected MissingEntryPoint"),
        }
    }
}
