// Declarative builder for entry-point sub-tables.
//
// Each sub-table groups the C functions of one engine category. Every field is
// an `Option` so that an engine build lacking a symbol still loads; the
// runtime reports a missing entry point only when it is actually called.

/// Declare an entry-point sub-table.
///
/// ```ignore
/// dss_table! {
///     /// Lines category.
///     pub struct LinesApi : "ctx_Lines_" {
///         fn Get_Name(ctx: ContextHandle) -> *const c_char;
///         fn Set_Name(ctx: ContextHandle, value: *const c_char);
///     }
/// }
/// ```
///
/// The exported symbol of each field is the prefix followed by the field name
/// (`ctx_Lines_Get_Name` above).
#[macro_export]
macro_rules! dss_table {
    (
        $(#[$meta:meta])*
        pub struct $table:ident : $prefix:literal {
            $(
                $(#[$fmeta:meta])*
                fn $name:ident ( $($arg:ident : $ty:ty),* $(,)? ) $(-> $ret:ty)? ;
            )*
        }
    ) => {
        $(#[$meta])*
        #[allow(non_snake_case)]
        #[derive(Clone, Copy)]
        pub struct $table {
            $(
                $(#[$fmeta])*
                pub $name: Option<unsafe extern "C" fn($($arg: $ty),*) $(-> $ret)?>,
            )*
        }

        #[allow(non_snake_case)]
        impl $table {
            /// Exported symbol names, in declaration order.
            pub const SYMBOLS: &'static [&'static str] = &[
                $(concat!($prefix, stringify!($name)),)*
            ];

            /// A table with no resolved entry points.
            pub const fn empty() -> Self {
                $table {
                    $($name: None,)*
                }
            }

            /// Resolve every entry point through `resolve`, which maps an
            /// exported symbol name to its address (null when absent).
            ///
            /// # Safety
            /// Every non-null address returned by `resolve` must point to a
            /// function with exactly the declared signature.
            pub unsafe fn load_with(
                resolve: &mut dyn FnMut(&'static str) -> *const ::std::ffi::c_void,
            ) -> Self {
                $table {
                    $(
                        $name: {
                            let ptr = resolve(concat!($prefix, stringify!($name)));
                            if ptr.is_null() {
                                None
                            } else {
                                Some(unsafe {
                                    ::std::mem::transmute::<
                                        *const ::std::ffi::c_void,
                                        unsafe extern "C" fn($($arg: $ty),*) $(-> $ret)?,
                                    >(ptr)
                                })
                            }
                        },
                    )*
                }
            }

            /// Symbols that did not resolve.
            pub fn missing(&self) -> Vec<&'static str> {
                let mut out = Vec::new();
                $(
                    if self.$name.is_none() {
                        out.push(concat!($prefix, stringify!($name)));
                    }
                )*
                out
            }
        }

        impl Default for $table {
            fn default() -> Self {
                $table::empty()
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::ffi::c_void;

    use crate::handles::ContextHandle;

    crate::dss_table! {
        pub struct ProbeApi : "ctx_Probe_" {
            fn Get_Count(ctx: ContextHandle) -> i32;
            fn Set_Count(ctx: ContextHandle, value: i32);
        }
    }

    unsafe extern "C" fn probe_count(_ctx: ContextHandle) -> i32 {
        7
    }

    #[test]
    fn symbols_use_prefix() {
        assert_eq!(ProbeApi::SYMBOLS, &["ctx_Probe_Get_Count", "ctx_Probe_Set_Count"]);
    }

    #[test]
    fn load_with_resolves_by_name_and_reports_missing() {
        let mut seen = Vec::new();
        let table = unsafe {
            ProbeApi::load_with(&mut |name| {
                seen.push(name);
                if name == "ctx_Probe_Get_Count" {
                    probe_count as *const c_void
                } else {
                    std::ptr::null()
                }
            })
        };
        assert_eq!(seen.len(), 2);
        assert_eq!(table.missing(), vec!["ctx_Probe_Set_Count"]);
        let f = table.Get_Count.unwrap();
        assert_eq!(unsafe { f(ContextHandle::NULL) }, 7);
    }

    #[test]
    fn empty_table_misses_everything() {
        assert_eq!(ProbeApi::empty().missing().len(), ProbeApi::SYMBOLS.len());
    }
}
