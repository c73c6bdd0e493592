use std::ffi::c_char;

use crate::callbacks::DssMessageCallback;
use crate::dss_table;
use crate::handles::{ContextHandle, DssBool};

dss_table! {
    /// Engine instance lifecycle.
    pub struct LifecycleApi : "ctx_" {
        /// Create a new, independent engine instance. Null on failure.
        fn New() -> ContextHandle;
        /// Release an instance created by `ctx_New`.
        fn Dispose(ctx: ContextHandle);
        /// The process-wide default ("prime") instance.
        fn Get_Prime() -> ContextHandle;
        /// Replace the prime instance, returning the previous one.
        fn Set_Prime(ctx: ContextHandle) -> ContextHandle;
    }
}

dss_table! {
    /// Context-free memory and callback helpers.
    pub struct MemoryApi : "" {
        /// Release a `char**` array and every string in it.
        fn DSS_Dispose_PPAnsiChar(data: *mut *mut *mut c_char, capacity: i32);
        fn DSS_RegisterMessageCallback(callback: Option<DssMessageCallback>);
        fn DSS_UnregisterMessageCallback(callback: Option<DssMessageCallback>);
    }
}

dss_table! {
    /// Top-level DSS interface.
    pub struct DssInterfaceApi : "ctx_DSS_" {
        fn Start(ctx: ContextHandle, code: i32) -> DssBool;
        fn GetGRPointers(
            ctx: ContextHandle,
            data_string: *mut *mut *mut *mut c_char,
            data_f64: *mut *mut *mut f64,
            data_i32: *mut *mut *mut i32,
            data_i8: *mut *mut *mut i8,
            count_string: *mut *mut i32,
            count_f64: *mut *mut i32,
            count_i32: *mut *mut i32,
            count_i8: *mut *mut i32,
        );
        fn ClearAll(ctx: ContextHandle);
        fn Reset(ctx: ContextHandle);
        fn NewCircuit(ctx: ContextHandle, name: *const c_char);
        fn SetActiveClass(ctx: ContextHandle, class_name: *const c_char) -> i32;
        fn Get_Version(ctx: ContextHandle) -> *const c_char;
        fn Get_Classes(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_UserClasses(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_NumCircuits(ctx: ContextHandle) -> i32;
        fn Get_NumClasses(ctx: ContextHandle) -> i32;
        fn Get_NumUserClasses(ctx: ContextHandle) -> i32;
        fn Get_DataPath(ctx: ContextHandle) -> *const c_char;
        fn Set_DataPath(ctx: ContextHandle, value: *const c_char);
        fn Get_DefaultEditor(ctx: ContextHandle) -> *const c_char;
        fn Get_AllowForms(ctx: ContextHandle) -> DssBool;
        fn Set_AllowForms(ctx: ContextHandle, value: DssBool);
        fn Get_AllowEditor(ctx: ContextHandle) -> DssBool;
        fn Set_AllowEditor(ctx: ContextHandle, value: DssBool);
        fn Get_LegacyModels(ctx: ContextHandle) -> DssBool;
        fn Set_LegacyModels(ctx: ContextHandle, value: DssBool);
        fn Get_AllowChangeDir(ctx: ContextHandle) -> DssBool;
        fn Set_AllowChangeDir(ctx: ContextHandle, value: DssBool);
        fn Get_AllowDOScmd(ctx: ContextHandle) -> DssBool;
        fn Set_AllowDOScmd(ctx: ContextHandle, value: DssBool);
        fn Get_COMErrorResults(ctx: ContextHandle) -> DssBool;
        fn Set_COMErrorResults(ctx: ContextHandle, value: DssBool);
        fn Get_CompatFlags(ctx: ContextHandle) -> u32;
        fn Set_CompatFlags(ctx: ContextHandle, value: u32);
    }
}

dss_table! {
    /// Per-context error channel.
    pub struct ErrorApi : "ctx_Error_" {
        /// Address of the context's error-number cell.
        fn Get_NumberPtr(ctx: ContextHandle) -> *mut i32;
        fn Get_Number(ctx: ContextHandle) -> i32;
        fn Get_Description(ctx: ContextHandle) -> *const c_char;
        fn Get_EarlyAbort(ctx: ContextHandle) -> DssBool;
        fn Set_EarlyAbort(ctx: ContextHandle, value: DssBool);
        fn Get_ExtendedErrors(ctx: ContextHandle) -> DssBool;
        fn Set_ExtendedErrors(ctx: ContextHandle, value: DssBool);
    }
}

dss_table! {
    /// Script command interface.
    pub struct TextApi : "ctx_Text_" {
        fn Get_Command(ctx: ContextHandle) -> *const c_char;
        fn Set_Command(ctx: ContextHandle, value: *const c_char);
        fn Get_Result(ctx: ContextHandle) -> *const c_char;
        fn CommandBlock(ctx: ContextHandle, value: *const c_char);
        fn CommandArray(ctx: ContextHandle, value: *const *const c_char, count: i32);
    }
}
