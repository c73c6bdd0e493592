// General (non-circuit) object categories: conductor and spacing data,
// line codes, shapes and curves.

use std::ffi::c_char;

use crate::dss_table;
use crate::handles::{ContextHandle, DssBool};

dss_table! {
    /// Line codes.
    pub struct LineCodesApi : "ctx_LineCodes_" {
        fn Get_AllNames(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_Count(ctx: ContextHandle) -> i32;
        fn Get_First(ctx: ContextHandle) -> i32;
        fn Get_Next(ctx: ContextHandle) -> i32;
        fn Get_Name(ctx: ContextHandle) -> *const c_char;
        fn Set_Name(ctx: ContextHandle, value: *const c_char);
        fn Get_idx(ctx: ContextHandle) -> i32;
        fn Set_idx(ctx: ContextHandle, value: i32);
        fn Get_Phases(ctx: ContextHandle) -> i32;
        fn Set_Phases(ctx: ContextHandle, value: i32);
        fn Get_Units(ctx: ContextHandle) -> i32;
        fn Set_Units(ctx: ContextHandle, value: i32);
        fn Get_R1(ctx: ContextHandle) -> f64;
        fn Set_R1(ctx: ContextHandle, value: f64);
        fn Get_X1(ctx: ContextHandle) -> f64;
        fn Set_X1(ctx: ContextHandle, value: f64);
        fn Get_R0(ctx: ContextHandle) -> f64;
        fn Set_R0(ctx: ContextHandle, value: f64);
        fn Get_X0(ctx: ContextHandle) -> f64;
        fn Set_X0(ctx: ContextHandle, value: f64);
        fn Get_C1(ctx: ContextHandle) -> f64;
        fn Set_C1(ctx: ContextHandle, value: f64);
        fn Get_C0(ctx: ContextHandle) -> f64;
        fn Set_C0(ctx: ContextHandle, value: f64);
        fn Get_Rmatrix_GR(ctx: ContextHandle);
        fn Set_Rmatrix(ctx: ContextHandle, value: *const f64, count: i32);
        fn Get_Xmatrix_GR(ctx: ContextHandle);
        fn Set_Xmatrix(ctx: ContextHandle, value: *const f64, count: i32);
        fn Get_Cmatrix_GR(ctx: ContextHandle);
        fn Set_Cmatrix(ctx: ContextHandle, value: *const f64, count: i32);
        fn Get_NormAmps(ctx: ContextHandle) -> f64;
        fn Set_NormAmps(ctx: ContextHandle, value: f64);
        fn Get_EmergAmps(ctx: ContextHandle) -> f64;
        fn Set_EmergAmps(ctx: ContextHandle, value: f64);
        fn Get_IsZ1Z0(ctx: ContextHandle) -> DssBool;
    }
}

dss_table! {
    /// Load shapes.
    pub struct LoadShapesApi : "ctx_LoadShapes_" {
        fn Get_AllNames(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_Count(ctx: ContextHandle) -> i32;
        fn Get_First(ctx: ContextHandle) -> i32;
        fn Get_Next(ctx: ContextHandle) -> i32;
        fn Get_Name(ctx: ContextHandle) -> *const c_char;
        fn Set_Name(ctx: ContextHandle, value: *const c_char);
        fn Get_idx(ctx: ContextHandle) -> i32;
        fn Set_idx(ctx: ContextHandle, value: i32);
        fn Get_Npts(ctx: ContextHandle) -> i32;
        fn Set_Npts(ctx: ContextHandle, value: i32);
        fn Get_Pmult_GR(ctx: ContextHandle);
        fn Set_Pmult(ctx: ContextHandle, value: *const f64, count: i32);
        fn Get_Qmult_GR(ctx: ContextHandle);
        fn Set_Qmult(ctx: ContextHandle, value: *const f64, count: i32);
        fn Get_TimeArray_GR(ctx: ContextHandle);
        fn Set_TimeArray(ctx: ContextHandle, value: *const f64, count: i32);
        fn Get_HrInterval(ctx: ContextHandle) -> f64;
        fn Set_HrInterval(ctx: ContextHandle, value: f64);
        fn Get_MinInterval(ctx: ContextHandle) -> f64;
        fn Set_MinInterval(ctx: ContextHandle, value: f64);
        fn Get_SInterval(ctx: ContextHandle) -> f64;
        fn Set_SInterval(ctx: ContextHandle, value: f64);
        fn Get_PBase(ctx: ContextHandle) -> f64;
        fn Set_PBase(ctx: ContextHandle, value: f64);
        fn Get_Qbase(ctx: ContextHandle) -> f64;
        fn Set_Qbase(ctx: ContextHandle, value: f64);
        fn Get_UseActual(ctx: ContextHandle) -> DssBool;
        fn Set_UseActual(ctx: ContextHandle, value: DssBool);
        fn Normalize(ctx: ContextHandle);
        fn UseFloat32(ctx: ContextHandle);
        fn UseFloat64(ctx: ContextHandle);
        fn New(ctx: ContextHandle, name: *const c_char) -> i32;
    }
}

dss_table! {
    /// XY curves.
    pub struct XYCurvesApi : "ctx_XYCurves_" {
        fn Get_AllNames(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_Count(ctx: ContextHandle) -> i32;
        fn Get_First(ctx: ContextHandle) -> i32;
        fn Get_Next(ctx: ContextHandle) -> i32;
        fn Get_Name(ctx: ContextHandle) -> *const c_char;
        fn Set_Name(ctx: ContextHandle, value: *const c_char);
        fn Get_idx(ctx: ContextHandle) -> i32;
        fn Set_idx(ctx: ContextHandle, value: i32);
        fn Get_Npts(ctx: ContextHandle) -> i32;
        fn Set_Npts(ctx: ContextHandle, value: i32);
        fn Get_Xarray_GR(ctx: ContextHandle);
        fn Set_Xarray(ctx: ContextHandle, value: *const f64, count: i32);
        fn Get_Yarray_GR(ctx: ContextHandle);
        fn Set_Yarray(ctx: ContextHandle, value: *const f64, count: i32);
        fn Get_x(ctx: ContextHandle) -> f64;
        fn Set_x(ctx: ContextHandle, value: f64);
        fn Get_y(ctx: ContextHandle) -> f64;
        fn Set_y(ctx: ContextHandle, value: f64);
        fn Get_Xscale(ctx: ContextHandle) -> f64;
        fn Set_Xscale(ctx: ContextHandle, value: f64);
        fn Get_Xshift(ctx: ContextHandle) -> f64;
        fn Set_Xshift(ctx: ContextHandle, value: f64);
        fn Get_Yscale(ctx: ContextHandle) -> f64;
        fn Set_Yscale(ctx: ContextHandle, value: f64);
        fn Get_Yshift(ctx: ContextHandle) -> f64;
        fn Set_Yshift(ctx: ContextHandle, value: f64);
    }
}

dss_table! {
    /// Line geometries.
    pub struct LineGeometriesApi : "ctx_LineGeometries_" {
        fn Get_AllNames(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_Count(ctx: ContextHandle) -> i32;
        fn Get_First(ctx: ContextHandle) -> i32;
        fn Get_Next(ctx: ContextHandle) -> i32;
        fn Get_Name(ctx: ContextHandle) -> *const c_char;
        fn Set_Name(ctx: ContextHandle, value: *const c_char);
        fn Get_idx(ctx: ContextHandle) -> i32;
        fn Set_idx(ctx: ContextHandle, value: i32);
        fn Get_Nconds(ctx: ContextHandle) -> i32;
        fn Set_Nconds(ctx: ContextHandle, value: i32);
        fn Get_Phases(ctx: ContextHandle) -> i32;
        fn Set_Phases(ctx: ContextHandle, value: i32);
        fn Get_Conductors(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_Units_GR(ctx: ContextHandle);
        fn Set_Units(ctx: ContextHandle, value: *const i32, count: i32);
        fn Get_Xcoords_GR(ctx: ContextHandle);
        fn Set_Xcoords(ctx: ContextHandle, value: *const f64, count: i32);
        fn Get_Ycoords_GR(ctx: ContextHandle);
        fn Set_Ycoords(ctx: ContextHandle, value: *const f64, count: i32);
        fn Get_RhoEarth(ctx: ContextHandle) -> f64;
        fn Set_RhoEarth(ctx: ContextHandle, value: f64);
        fn Get_Reduce(ctx: ContextHandle) -> DssBool;
        fn Set_Reduce(ctx: ContextHandle, value: DssBool);
        fn Get_NormAmps(ctx: ContextHandle) -> f64;
        fn Set_NormAmps(ctx: ContextHandle, value: f64);
        fn Get_EmergAmps(ctx: ContextHandle) -> f64;
        fn Set_EmergAmps(ctx: ContextHandle, value: f64);
        fn Get_Rmatrix_GR(ctx: ContextHandle, frequency: f64, length: f64, units: i32);
        fn Get_Xmatrix_GR(ctx: ContextHandle, frequency: f64, length: f64, units: i32);
        fn Get_Zmatrix_GR(ctx: ContextHandle, frequency: f64, length: f64, units: i32);
        fn Get_Cmatrix_GR(ctx: ContextHandle, frequency: f64, length: f64, units: i32);
    }
}

dss_table! {
    /// Line spacings.
    pub struct LineSpacingsApi : "ctx_LineSpacings_" {
        fn Get_AllNames(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_Count(ctx: ContextHandle) -> i32;
        fn Get_First(ctx: ContextHandle) -> i32;
        fn Get_Next(ctx: ContextHandle) -> i32;
        fn Get_Name(ctx: ContextHandle) -> *const c_char;
        fn Set_Name(ctx: ContextHandle, value: *const c_char);
        fn Get_idx(ctx: ContextHandle) -> i32;
        fn Set_idx(ctx: ContextHandle, value: i32);
        fn Get_Nconds(ctx: ContextHandle) -> i32;
        fn Set_Nconds(ctx: ContextHandle, value: i32);
        fn Get_Phases(ctx: ContextHandle) -> i32;
        fn Set_Phases(ctx: ContextHandle, value: i32);
        fn Get_Units(ctx: ContextHandle) -> i32;
        fn Set_Units(ctx: ContextHandle, value: i32);
        fn Get_Xcoords_GR(ctx: ContextHandle);
        fn Set_Xcoords(ctx: ContextHandle, value: *const f64, count: i32);
        fn Get_Ycoords_GR(ctx: ContextHandle);
        fn Set_Ycoords(ctx: ContextHandle, value: *const f64, count: i32);
    }
}

dss_table! {
    /// Bare conductor data.
    pub struct WireDataApi : "ctx_WireData_" {
        fn Get_AllNames(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_Count(ctx: ContextHandle) -> i32;
        fn Get_First(ctx: ContextHandle) -> i32;
        fn Get_Next(ctx: ContextHandle) -> i32;
        fn Get_Name(ctx: ContextHandle) -> *const c_char;
        fn Set_Name(ctx: ContextHandle, value: *const c_char);
        fn Get_idx(ctx: ContextHandle) -> i32;
        fn Set_idx(ctx: ContextHandle, value: i32);
        fn Get_Rdc(ctx: ContextHandle) -> f64;
        fn Set_Rdc(ctx: ContextHandle, value: f64);
        fn Get_Rac(ctx: ContextHandle) -> f64;
        fn Set_Rac(ctx: ContextHandle, value: f64);
        fn Get_GMRAC(ctx: ContextHandle) -> f64;
        fn Set_GMRAC(ctx: ContextHandle, value: f64);
        fn Get_GMRUnits(ctx: ContextHandle) -> i32;
        fn Set_GMRUnits(ctx: ContextHandle, value: i32);
        fn Get_Radius(ctx: ContextHandle) -> f64;
        fn Set_Radius(ctx: ContextHandle, value: f64);
        fn Get_RadiusUnits(ctx: ContextHandle) -> i32;
        fn Set_RadiusUnits(ctx: ContextHandle, value: i32);
        fn Get_ResistanceUnits(ctx: ContextHandle) -> i32;
        fn Set_ResistanceUnits(ctx: ContextHandle, value: i32);
        fn Get_Diameter(ctx: ContextHandle) -> f64;
        fn Set_Diameter(ctx: ContextHandle, value: f64);
        fn Get_NormAmps(ctx: ContextHandle) -> f64;
        fn Set_NormAmps(ctx: ContextHandle, value: f64);
        fn Get_EmergAmps(ctx: ContextHandle) -> f64;
        fn Set_EmergAmps(ctx: ContextHandle, value: f64);
        fn Get_CapRadius(ctx: ContextHandle) -> f64;
        fn Set_CapRadius(ctx: ContextHandle, value: f64);
    }
}

dss_table! {
    /// Concentric-neutral cable data.
    pub struct CNDataApi : "ctx_CNData_" {
        fn Get_AllNames(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_Count(ctx: ContextHandle) -> i32;
        fn Get_First(ctx: ContextHandle) -> i32;
        fn Get_Next(ctx: ContextHandle) -> i32;
        fn Get_Name(ctx: ContextHandle) -> *const c_char;
        fn Set_Name(ctx: ContextHandle, value: *const c_char);
        fn Get_idx(ctx: ContextHandle) -> i32;
        fn Set_idx(ctx: ContextHandle, value: i32);
        fn Get_Rdc(ctx: ContextHandle) -> f64;
        fn Set_Rdc(ctx: ContextHandle, value: f64);
        fn Get_Rac(ctx: ContextHandle) -> f64;
        fn Set_Rac(ctx: ContextHandle, value: f64);
        fn Get_GMRAC(ctx: ContextHandle) -> f64;
        fn Set_GMRAC(ctx: ContextHandle, value: f64);
        fn Get_GMRUnits(ctx: ContextHandle) -> i32;
        fn Set_GMRUnits(ctx: ContextHandle, value: i32);
        fn Get_Radius(ctx: ContextHandle) -> f64;
        fn Set_Radius(ctx: ContextHandle, value: f64);
        fn Get_RadiusUnits(ctx: ContextHandle) -> i32;
        fn Set_RadiusUnits(ctx: ContextHandle, value: i32);
        fn Get_ResistanceUnits(ctx: ContextHandle) -> i32;
        fn Set_ResistanceUnits(ctx: ContextHandle, value: i32);
        fn Get_Diameter(ctx: ContextHandle) -> f64;
        fn Set_Diameter(ctx: ContextHandle, value: f64);
        fn Get_NormAmps(ctx: ContextHandle) -> f64;
        fn Set_NormAmps(ctx: ContextHandle, value: f64);
        fn Get_EmergAmps(ctx: ContextHandle) -> f64;
        fn Set_EmergAmps(ctx: ContextHandle, value: f64);
        fn Get_CapRadius(ctx: ContextHandle) -> f64;
        fn Set_CapRadius(ctx: ContextHandle, value: f64);
        fn Get_EpsR(ctx: ContextHandle) -> f64;
        fn Set_EpsR(ctx: ContextHandle, value: f64);
        fn Get_InsLayer(ctx: ContextHandle) -> f64;
        fn Set_InsLayer(ctx: ContextHandle, value: f64);
        fn Get_DiaIns(ctx: ContextHandle) -> f64;
        fn Set_DiaIns(ctx: ContextHandle, value: f64);
        fn Get_DiaCable(ctx: ContextHandle) -> f64;
        fn Set_DiaCable(ctx: ContextHandle, value: f64);
        fn Get_k(ctx: ContextHandle) -> i32;
        fn Set_k(ctx: ContextHandle, value: i32);
        fn Get_DiaStrand(ctx: ContextHandle) -> f64;
        fn Set_DiaStrand(ctx: ContextHandle, value: f64);
        fn Get_GmrStrand(ctx: ContextHandle) -> f64;
        fn Set_GmrStrand(ctx: ContextHandle, value: f64);
        fn Get_RStrand(ctx: ContextHandle) -> f64;
        fn Set_RStrand(ctx: ContextHandle, value: f64);
    }
}

dss_table! {
    /// Tape-shield cable data.
    pub struct TSDataApi : "ctx_TSData_" {
        fn Get_AllNames(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_Count(ctx: ContextHandle) -> i32;
        fn Get_First(ctx: ContextHandle) -> i32;
        fn Get_Next(ctx: ContextHandle) -> i32;
        fn Get_Name(ctx: ContextHandle) -> *const c_char;
        fn Set_Name(ctx: ContextHandle, value: *const c_char);
        fn Get_idx(ctx: ContextHandle) -> i32;
        fn Set_idx(ctx: ContextHandle, value: i32);
        fn Get_Rdc(ctx: ContextHandle) -> f64;
        fn Set_Rdc(ctx: ContextHandle, value: f64);
        fn Get_Rac(ctx: ContextHandle) -> f64;
        fn Set_Rac(ctx: ContextHandle, value: f64);
        fn Get_GMRAC(ctx: ContextHandle) -> f64;
        fn Set_GMRAC(ctx: ContextHandle, value: f64);
        fn Get_GMRUnits(ctx: ContextHandle) -> i32;
        fn Set_GMRUnits(ctx: ContextHandle, value: i32);
        fn Get_Radius(ctx: ContextHandle) -> f64;
        fn Set_Radius(ctx: ContextHandle, value: f64);
        fn Get_RadiusUnits(ctx: ContextHandle) -> i32;
        fn Set_RadiusUnits(ctx: ContextHandle, value: i32);
        fn Get_ResistanceUnits(ctx: ContextHandle) -> i32;
        fn Set_ResistanceUnits(ctx: ContextHandle, value: i32);
        fn Get_Diameter(ctx: ContextHandle) -> f64;
        fn Set_Diameter(ctx: ContextHandle, value: f64);
        fn Get_NormAmps(ctx: ContextHandle) -> f64;
        fn Set_NormAmps(ctx: ContextHandle, value: f64);
        fn Get_EmergAmps(ctx: ContextHandle) -> f64;
        fn Set_EmergAmps(ctx: ContextHandle, value: f64);
        fn Get_CapRadius(ctx: ContextHandle) -> f64;
        fn Set_CapRadius(ctx: ContextHandle, value: f64);
        fn Get_EpsR(ctx: ContextHandle) -> f64;
        fn Set_EpsR(ctx: ContextHandle, value: f64);
        fn Get_InsLayer(ctx: ContextHandle) -> f64;
        fn Set_InsLayer(ctx: ContextHandle, value: f64);
        fn Get_DiaIns(ctx: ContextHandle) -> f64;
        fn Set_DiaIns(ctx: ContextHandle, value: f64);
        fn Get_DiaCable(ctx: ContextHandle) -> f64;
        fn Set_DiaCable(ctx: ContextHandle, value: f64);
        fn Get_DiaShield(ctx: ContextHandle) -> f64;
        fn Set_DiaShield(ctx: ContextHandle, value: f64);
        fn Get_TapeLayer(ctx: ContextHandle) -> f64;
        fn Set_TapeLayer(ctx: ContextHandle, value: f64);
        fn Get_TapeLap(ctx: ContextHandle) -> f64;
        fn Set_TapeLap(ctx: ContextHandle, value: f64);
    }
}
