use std::ffi::c_char;

use crate::dss_table;
use crate::handles::{ContextHandle, DssBool};

dss_table! {
    /// Class selected with `SetActiveClass`.
    pub struct ActiveClassApi : "ctx_ActiveClass_" {
        fn Get_ActiveClassName(ctx: ContextHandle) -> *const c_char;
        fn Get_ActiveClassParent(ctx: ContextHandle) -> *const c_char;
        fn Get_AllNames(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_Count(ctx: ContextHandle) -> i32;
        fn Get_First(ctx: ContextHandle) -> i32;
        fn Get_Next(ctx: ContextHandle) -> i32;
        fn Get_Name(ctx: ContextHandle) -> *const c_char;
        fn Set_Name(ctx: ContextHandle, value: *const c_char);
        fn Get_NumElements(ctx: ContextHandle) -> i32;
        fn ToJSON(ctx: ContextHandle, options: i32) -> *const c_char;
    }
}

dss_table! {
    /// Active DSS object, of any class.
    pub struct DSSElementApi : "ctx_DSSElement_" {
        fn Get_Name(ctx: ContextHandle) -> *const c_char;
        fn Get_NumProperties(ctx: ContextHandle) -> i32;
        fn Get_AllPropertyNames(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn ToJSON(ctx: ContextHandle, options: i32) -> *const c_char;
    }
}

dss_table! {
    /// Property of the active DSS object.
    pub struct DSSPropertyApi : "ctx_DSSProperty_" {
        fn Get_Name(ctx: ContextHandle) -> *const c_char;
        fn Get_Description(ctx: ContextHandle) -> *const c_char;
        fn Get_Val(ctx: ContextHandle) -> *const c_char;
        fn Set_Val(ctx: ContextHandle, value: *const c_char);
        fn Set_Index(ctx: ContextHandle, index: i32);
        fn Set_Name(ctx: ContextHandle, name: *const c_char);
    }
}

dss_table! {
    /// The engine's command-line parser.
    pub struct ParserApi : "ctx_Parser_" {
        fn Get_CmdString(ctx: ContextHandle) -> *const c_char;
        fn Set_CmdString(ctx: ContextHandle, value: *const c_char);
        fn Get_NextParam(ctx: ContextHandle) -> *const c_char;
        fn Get_AutoIncrement(ctx: ContextHandle) -> DssBool;
        fn Set_AutoIncrement(ctx: ContextHandle, value: DssBool);
        fn Get_Delimiters(ctx: ContextHandle) -> *const c_char;
        fn Set_Delimiters(ctx: ContextHandle, value: *const c_char);
        fn Get_WhiteSpace(ctx: ContextHandle) -> *const c_char;
        fn Set_WhiteSpace(ctx: ContextHandle, value: *const c_char);
        fn Get_BeginQuote(ctx: ContextHandle) -> *const c_char;
        fn Set_BeginQuote(ctx: ContextHandle, value: *const c_char);
        fn Get_EndQuote(ctx: ContextHandle) -> *const c_char;
        fn Set_EndQuote(ctx: ContextHandle, value: *const c_char);
        fn Get_StrValue(ctx: ContextHandle) -> *const c_char;
        fn Get_IntValue(ctx: ContextHandle) -> i32;
        fn Get_DblValue(ctx: ContextHandle) -> f64;
        fn Get_Matrix_GR(ctx: ContextHandle, expected_order: i32);
        fn Get_SymMatrix_GR(ctx: ContextHandle, expected_order: i32);
        fn Get_Vector_GR(ctx: ContextHandle, expected_size: i32);
        fn ResetDelimiters(ctx: ContextHandle);
    }
}

dss_table! {
    /// Command and option catalogue.
    pub struct ExecutiveApi : "ctx_DSS_Executive_" {
        fn Get_NumCommands(ctx: ContextHandle) -> i32;
        fn Get_NumOptions(ctx: ContextHandle) -> i32;
        fn Get_Command(ctx: ContextHandle, index: i32) -> *const c_char;
        fn Get_CommandHelp(ctx: ContextHandle, index: i32) -> *const c_char;
        fn Get_Option(ctx: ContextHandle, index: i32) -> *const c_char;
        fn Get_OptionHelp(ctx: ContextHandle, index: i32) -> *const c_char;
        fn Get_OptionValue(ctx: ContextHandle, index: i32) -> *const c_char;
    }
}

dss_table! {
    /// Scripts and data read from ZIP archives.
    pub struct ZIPApi : "ctx_ZIP_" {
        fn Open(ctx: ContextHandle, path: *const c_char);
        fn Close(ctx: ContextHandle);
        fn Redirect(ctx: ContextHandle, file_in_zip: *const c_char);
        fn Extract_GR(ctx: ContextHandle, file_name: *const c_char);
        fn Contains(ctx: ContextHandle, name: *const c_char) -> DssBool;
        fn List(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32, regexp: *const c_char);
    }
}

dss_table! {
    /// Engine-level parallel actors.
    pub struct ParallelApi : "ctx_Parallel_" {
        fn Get_NumCPUs(ctx: ContextHandle) -> i32;
        fn Get_NumCores(ctx: ContextHandle) -> i32;
        fn Get_NumOfActors(ctx: ContextHandle) -> i32;
        fn Get_ActiveActor(ctx: ContextHandle) -> i32;
        fn Set_ActiveActor(ctx: ContextHandle, value: i32);
        fn Get_ActorCPU(ctx: ContextHandle) -> i32;
        fn Set_ActorCPU(ctx: ContextHandle, value: i32);
        fn CreateActor(ctx: ContextHandle);
        fn Wait(ctx: ContextHandle);
        fn Get_ActorProgress_GR(ctx: ContextHandle);
        fn Get_ActorStatus_GR(ctx: ContextHandle);
        fn Get_ActiveParallel(ctx: ContextHandle) -> i32;
        fn Set_ActiveParallel(ctx: ContextHandle, value: i32);
        fn Get_ConcatenateReports(ctx: ContextHandle) -> i32;
        fn Set_ConcatenateReports(ctx: ContextHandle, value: i32);
    }
}

dss_table! {
    /// Complex arithmetic helpers evaluated by the engine.
    pub struct CmathLibApi : "ctx_CmathLib_" {
        fn Get_cmplx_GR(ctx: ContextHandle, real: f64, imag: f64);
        fn Get_cabs(ctx: ContextHandle, real: f64, imag: f64) -> f64;
        fn Get_cdang(ctx: ContextHandle, real: f64, imag: f64) -> f64;
        fn Get_ctopolardeg_GR(ctx: ContextHandle, real: f64, imag: f64);
        fn Get_pdegtocomplex_GR(ctx: ContextHandle, magnitude: f64, angle: f64);
        fn Get_cmul_GR(ctx: ContextHandle, a1: f64, b1: f64, a2: f64, b2: f64);
        fn Get_cdiv_GR(ctx: ContextHandle, a1: f64, b1: f64, a2: f64, b2: f64);
    }
}
