// Circuit element categories. Every table opens with the common collection
// entry points (names, count, First/Next cursor, name and index selection).

use std::ffi::c_char;

use crate::dss_table;
use crate::handles::{ContextHandle, DssBool};

dss_table! {
    /// Line elements.
    pub struct LinesApi : "ctx_Lines_" {
        fn Get_AllNames(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_Count(ctx: ContextHandle) -> i32;
        fn Get_First(ctx: ContextHandle) -> i32;
        fn Get_Next(ctx: ContextHandle) -> i32;
        fn Get_Name(ctx: ContextHandle) -> *const c_char;
        fn Set_Name(ctx: ContextHandle, value: *const c_char);
        fn Get_idx(ctx: ContextHandle) -> i32;
        fn Set_idx(ctx: ContextHandle, value: i32);
        fn Get_Bus1(ctx: ContextHandle) -> *const c_char;
        fn Set_Bus1(ctx: ContextHandle, value: *const c_char);
        fn Get_Bus2(ctx: ContextHandle) -> *const c_char;
        fn Set_Bus2(ctx: ContextHandle, value: *const c_char);
        fn Get_LineCode(ctx: ContextHandle) -> *const c_char;
        fn Set_LineCode(ctx: ContextHandle, value: *const c_char);
        fn Get_Length(ctx: ContextHandle) -> f64;
        fn Set_Length(ctx: ContextHandle, value: f64);
        fn Get_Phases(ctx: ContextHandle) -> i32;
        fn Set_Phases(ctx: ContextHandle, value: i32);
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
        fn Get_Geometry(ctx: ContextHandle) -> *const c_char;
        fn Set_Geometry(ctx: ContextHandle, value: *const c_char);
        fn Get_Spacing(ctx: ContextHandle) -> *const c_char;
        fn Set_Spacing(ctx: ContextHandle, value: *const c_char);
        fn Get_Rg(ctx: ContextHandle) -> f64;
        fn Set_Rg(ctx: ContextHandle, value: f64);
        fn Get_Xg(ctx: ContextHandle) -> f64;
        fn Set_Xg(ctx: ContextHandle, value: f64);
        fn Get_Rho(ctx: ContextHandle) -> f64;
        fn Set_Rho(ctx: ContextHandle, value: f64);
        fn Get_Yprim_GR(ctx: ContextHandle);
        fn Set_Yprim(ctx: ContextHandle, value: *const f64, count: i32);
        fn Get_NumCust(ctx: ContextHandle) -> i32;
        fn Get_TotalCust(ctx: ContextHandle) -> i32;
        fn Get_Parent(ctx: ContextHandle) -> i32;
        fn Get_Units(ctx: ContextHandle) -> i32;
        fn Set_Units(ctx: ContextHandle, value: i32);
        fn Get_SeasonRating(ctx: ContextHandle) -> f64;
        fn Get_IsSwitch(ctx: ContextHandle) -> DssBool;
        fn Set_IsSwitch(ctx: ContextHandle, value: DssBool);
        fn New(ctx: ContextHandle, name: *const c_char) -> i32;
    }
}

dss_table! {
    /// Load elements.
    pub struct LoadsApi : "ctx_Loads_" {
        fn Get_AllNames(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_Count(ctx: ContextHandle) -> i32;
        fn Get_First(ctx: ContextHandle) -> i32;
        fn Get_Next(ctx: ContextHandle) -> i32;
        fn Get_Name(ctx: ContextHandle) -> *const c_char;
        fn Set_Name(ctx: ContextHandle, value: *const c_char);
        fn Get_idx(ctx: ContextHandle) -> i32;
        fn Set_idx(ctx: ContextHandle, value: i32);
        fn Get_kW(ctx: ContextHandle) -> f64;
        fn Set_kW(ctx: ContextHandle, value: f64);
        fn Get_kvar(ctx: ContextHandle) -> f64;
        fn Set_kvar(ctx: ContextHandle, value: f64);
        fn Get_kV(ctx: ContextHandle) -> f64;
        fn Set_kV(ctx: ContextHandle, value: f64);
        fn Get_kva(ctx: ContextHandle) -> f64;
        fn Set_kva(ctx: ContextHandle, value: f64);
        fn Get_PF(ctx: ContextHandle) -> f64;
        fn Set_PF(ctx: ContextHandle, value: f64);
        fn Get_Model(ctx: ContextHandle) -> i32;
        fn Set_Model(ctx: ContextHandle, value: i32);
        fn Get_Status(ctx: ContextHandle) -> i32;
        fn Set_Status(ctx: ContextHandle, value: i32);
        fn Get_Class_(ctx: ContextHandle) -> i32;
        fn Set_Class_(ctx: ContextHandle, value: i32);
        fn Get_IsDelta(ctx: ContextHandle) -> DssBool;
        fn Set_IsDelta(ctx: ContextHandle, value: DssBool);
        fn Get_Phases(ctx: ContextHandle) -> i32;
        fn Set_Phases(ctx: ContextHandle, value: i32);
        fn Get_Bus1(ctx: ContextHandle) -> *const c_char;
        fn Set_Bus1(ctx: ContextHandle, value: *const c_char);
        fn Get_AllocationFactor(ctx: ContextHandle) -> f64;
        fn Set_AllocationFactor(ctx: ContextHandle, value: f64);
        fn Get_Cfactor(ctx: ContextHandle) -> f64;
        fn Set_Cfactor(ctx: ContextHandle, value: f64);
        fn Get_CVRwatts(ctx: ContextHandle) -> f64;
        fn Set_CVRwatts(ctx: ContextHandle, value: f64);
        fn Get_CVRvars(ctx: ContextHandle) -> f64;
        fn Set_CVRvars(ctx: ContextHandle, value: f64);
        fn Get_CVRcurve(ctx: ContextHandle) -> *const c_char;
        fn Set_CVRcurve(ctx: ContextHandle, value: *const c_char);
        fn Get_Daily(ctx: ContextHandle) -> *const c_char;
        fn Set_Daily(ctx: ContextHandle, value: *const c_char);
        fn Get_Duty(ctx: ContextHandle) -> *const c_char;
        fn Set_Duty(ctx: ContextHandle, value: *const c_char);
        fn Get_Yearly(ctx: ContextHandle) -> *const c_char;
        fn Set_Yearly(ctx: ContextHandle, value: *const c_char);
        fn Get_Growth(ctx: ContextHandle) -> *const c_char;
        fn Set_Growth(ctx: ContextHandle, value: *const c_char);
        fn Get_Spectrum(ctx: ContextHandle) -> *const c_char;
        fn Set_Spectrum(ctx: ContextHandle, value: *const c_char);
        fn Get_Sensor(ctx: ContextHandle) -> *const c_char;
        fn Get_NumCust(ctx: ContextHandle) -> i32;
        fn Set_NumCust(ctx: ContextHandle, value: i32);
        fn Get_PctMean(ctx: ContextHandle) -> f64;
        fn Set_PctMean(ctx: ContextHandle, value: f64);
        fn Get_PctStdDev(ctx: ContextHandle) -> f64;
        fn Set_PctStdDev(ctx: ContextHandle, value: f64);
        fn Get_RelWeight(ctx: ContextHandle) -> f64;
        fn Set_RelWeight(ctx: ContextHandle, value: f64);
        fn Get_Rneut(ctx: ContextHandle) -> f64;
        fn Set_Rneut(ctx: ContextHandle, value: f64);
        fn Get_Xneut(ctx: ContextHandle) -> f64;
        fn Set_Xneut(ctx: ContextHandle, value: f64);
        fn Get_Vmaxpu(ctx: ContextHandle) -> f64;
        fn Set_Vmaxpu(ctx: ContextHandle, value: f64);
        fn Get_Vminpu(ctx: ContextHandle) -> f64;
        fn Set_Vminpu(ctx: ContextHandle, value: f64);
        fn Get_VminEmerg(ctx: ContextHandle) -> f64;
        fn Set_VminEmerg(ctx: ContextHandle, value: f64);
        fn Get_VminNorm(ctx: ContextHandle) -> f64;
        fn Set_VminNorm(ctx: ContextHandle, value: f64);
        fn Get_ZIPV_GR(ctx: ContextHandle);
        fn Set_ZIPV(ctx: ContextHandle, value: *const f64, count: i32);
        fn Get_kVABase(ctx: ContextHandle) -> f64;
        fn Set_kVABase(ctx: ContextHandle, value: f64);
        fn Get_kWh(ctx: ContextHandle) -> f64;
        fn Set_kWh(ctx: ContextHandle, value: f64);
        fn Get_kWhDays(ctx: ContextHandle) -> f64;
        fn Set_kWhDays(ctx: ContextHandle, value: f64);
        fn Get_pctSeriesRL(ctx: ContextHandle) -> f64;
        fn Set_pctSeriesRL(ctx: ContextHandle, value: f64);
        fn Get_xfkVA(ctx: ContextHandle) -> f64;
        fn Set_xfkVA(ctx: ContextHandle, value: f64);
    }
}

dss_table! {
    /// Transformer elements. Winding properties act on the winding selected with `Set_Wdg`.
    pub struct TransformersApi : "ctx_Transformers_" {
        fn Get_AllNames(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_Count(ctx: ContextHandle) -> i32;
        fn Get_First(ctx: ContextHandle) -> i32;
        fn Get_Next(ctx: ContextHandle) -> i32;
        fn Get_Name(ctx: ContextHandle) -> *const c_char;
        fn Set_Name(ctx: ContextHandle, value: *const c_char);
        fn Get_idx(ctx: ContextHandle) -> i32;
        fn Set_idx(ctx: ContextHandle, value: i32);
        fn Get_NumWindings(ctx: ContextHandle) -> i32;
        fn Set_NumWindings(ctx: ContextHandle, value: i32);
        fn Get_Wdg(ctx: ContextHandle) -> i32;
        fn Set_Wdg(ctx: ContextHandle, value: i32);
        fn Get_IsDelta(ctx: ContextHandle) -> DssBool;
        fn Set_IsDelta(ctx: ContextHandle, value: DssBool);
        fn Get_kV(ctx: ContextHandle) -> f64;
        fn Set_kV(ctx: ContextHandle, value: f64);
        fn Get_kVA(ctx: ContextHandle) -> f64;
        fn Set_kVA(ctx: ContextHandle, value: f64);
        fn Get_R(ctx: ContextHandle) -> f64;
        fn Set_R(ctx: ContextHandle, value: f64);
        fn Get_Rneut(ctx: ContextHandle) -> f64;
        fn Set_Rneut(ctx: ContextHandle, value: f64);
        fn Get_Xneut(ctx: ContextHandle) -> f64;
        fn Set_Xneut(ctx: ContextHandle, value: f64);
        fn Get_Tap(ctx: ContextHandle) -> f64;
        fn Set_Tap(ctx: ContextHandle, value: f64);
        fn Get_MinTap(ctx: ContextHandle) -> f64;
        fn Set_MinTap(ctx: ContextHandle, value: f64);
        fn Get_MaxTap(ctx: ContextHandle) -> f64;
        fn Set_MaxTap(ctx: ContextHandle, value: f64);
        fn Get_NumTaps(ctx: ContextHandle) -> i32;
        fn Set_NumTaps(ctx: ContextHandle, value: i32);
        fn Get_Xhl(ctx: ContextHandle) -> f64;
        fn Set_Xhl(ctx: ContextHandle, value: f64);
        fn Get_Xht(ctx: ContextHandle) -> f64;
        fn Set_Xht(ctx: ContextHandle, value: f64);
        fn Get_Xlt(ctx: ContextHandle) -> f64;
        fn Set_Xlt(ctx: ContextHandle, value: f64);
        fn Get_XfmrCode(ctx: ContextHandle) -> *const c_char;
        fn Set_XfmrCode(ctx: ContextHandle, value: *const c_char);
        fn Get_CoreType(ctx: ContextHandle) -> i32;
        fn Set_CoreType(ctx: ContextHandle, value: i32);
        fn Get_RdcOhms(ctx: ContextHandle) -> f64;
        fn Set_RdcOhms(ctx: ContextHandle, value: f64);
        fn Get_strWdgCurrents(ctx: ContextHandle) -> *const c_char;
        fn Get_WdgVoltages_GR(ctx: ContextHandle);
        fn Get_WdgCurrents_GR(ctx: ContextHandle);
        fn Get_LossesByType_GR(ctx: ContextHandle);
        fn Get_AllLossesByType_GR(ctx: ContextHandle);
    }
}

dss_table! {
    /// Shunt capacitor elements.
    pub struct CapacitorsApi : "ctx_Capacitors_" {
        fn Get_AllNames(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_Count(ctx: ContextHandle) -> i32;
        fn Get_First(ctx: ContextHandle) -> i32;
        fn Get_Next(ctx: ContextHandle) -> i32;
        fn Get_Name(ctx: ContextHandle) -> *const c_char;
        fn Set_Name(ctx: ContextHandle, value: *const c_char);
        fn Get_idx(ctx: ContextHandle) -> i32;
        fn Set_idx(ctx: ContextHandle, value: i32);
        fn Get_kV(ctx: ContextHandle) -> f64;
        fn Set_kV(ctx: ContextHandle, value: f64);
        fn Get_kvar(ctx: ContextHandle) -> f64;
        fn Set_kvar(ctx: ContextHandle, value: f64);
        fn Get_NumSteps(ctx: ContextHandle) -> i32;
        fn Set_NumSteps(ctx: ContextHandle, value: i32);
        fn Get_IsDelta(ctx: ContextHandle) -> DssBool;
        fn Set_IsDelta(ctx: ContextHandle, value: DssBool);
        fn Get_States_GR(ctx: ContextHandle);
        fn Set_States(ctx: ContextHandle, value: *const i32, count: i32);
        fn Get_AvailableSteps(ctx: ContextHandle) -> i32;
        fn AddStep(ctx: ContextHandle) -> DssBool;
        fn SubtractStep(ctx: ContextHandle) -> DssBool;
        fn Open(ctx: ContextHandle);
        fn Close(ctx: ContextHandle);
    }
}

dss_table! {
    /// Generator elements.
    pub struct GeneratorsApi : "ctx_Generators_" {
        fn Get_AllNames(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_Count(ctx: ContextHandle) -> i32;
        fn Get_First(ctx: ContextHandle) -> i32;
        fn Get_Next(ctx: ContextHandle) -> i32;
        fn Get_Name(ctx: ContextHandle) -> *const c_char;
        fn Set_Name(ctx: ContextHandle, value: *const c_char);
        fn Get_idx(ctx: ContextHandle) -> i32;
        fn Set_idx(ctx: ContextHandle, value: i32);
        fn Get_kW(ctx: ContextHandle) -> f64;
        fn Set_kW(ctx: ContextHandle, value: f64);
        fn Get_kvar(ctx: ContextHandle) -> f64;
        fn Set_kvar(ctx: ContextHandle, value: f64);
        fn Get_kV(ctx: ContextHandle) -> f64;
        fn Set_kV(ctx: ContextHandle, value: f64);
        fn Get_kVArated(ctx: ContextHandle) -> f64;
        fn Set_kVArated(ctx: ContextHandle, value: f64);
        fn Get_kva(ctx: ContextHandle) -> f64;
        fn Set_kva(ctx: ContextHandle, value: f64);
        fn Get_PF(ctx: ContextHandle) -> f64;
        fn Set_PF(ctx: ContextHandle, value: f64);
        fn Get_Model(ctx: ContextHandle) -> i32;
        fn Set_Model(ctx: ContextHandle, value: i32);
        fn Get_Phases(ctx: ContextHandle) -> i32;
        fn Set_Phases(ctx: ContextHandle, value: i32);
        fn Get_ForcedON(ctx: ContextHandle) -> DssBool;
        fn Set_ForcedON(ctx: ContextHandle, value: DssBool);
        fn Get_IsDelta(ctx: ContextHandle) -> DssBool;
        fn Set_IsDelta(ctx: ContextHandle, value: DssBool);
        fn Get_Vmaxpu(ctx: ContextHandle) -> f64;
        fn Set_Vmaxpu(ctx: ContextHandle, value: f64);
        fn Get_Vminpu(ctx: ContextHandle) -> f64;
        fn Set_Vminpu(ctx: ContextHandle, value: f64);
        fn Get_Bus1(ctx: ContextHandle) -> *const c_char;
        fn Set_Bus1(ctx: ContextHandle, value: *const c_char);
        fn Get_daily(ctx: ContextHandle) -> *const c_char;
        fn Set_daily(ctx: ContextHandle, value: *const c_char);
        fn Get_duty(ctx: ContextHandle) -> *const c_char;
        fn Set_duty(ctx: ContextHandle, value: *const c_char);
        fn Get_Yearly(ctx: ContextHandle) -> *const c_char;
        fn Set_Yearly(ctx: ContextHandle, value: *const c_char);
        fn Get_Status(ctx: ContextHandle) -> i32;
        fn Set_Status(ctx: ContextHandle, value: i32);
        fn Get_Class_(ctx: ContextHandle) -> i32;
        fn Set_Class_(ctx: ContextHandle, value: i32);
        fn Get_RegisterNames(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_RegisterValues_GR(ctx: ContextHandle);
    }
}

dss_table! {
    /// Energy meters.
    pub struct MetersApi : "ctx_Meters_" {
        fn Get_AllNames(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_Count(ctx: ContextHandle) -> i32;
        fn Get_First(ctx: ContextHandle) -> i32;
        fn Get_Next(ctx: ContextHandle) -> i32;
        fn Get_Name(ctx: ContextHandle) -> *const c_char;
        fn Set_Name(ctx: ContextHandle, value: *const c_char);
        fn Get_idx(ctx: ContextHandle) -> i32;
        fn Set_idx(ctx: ContextHandle, value: i32);
        fn Get_MeteredElement(ctx: ContextHandle) -> *const c_char;
        fn Set_MeteredElement(ctx: ContextHandle, value: *const c_char);
        fn Get_MeteredTerminal(ctx: ContextHandle) -> i32;
        fn Set_MeteredTerminal(ctx: ContextHandle, value: i32);
        fn Get_RegisterNames(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_RegisterValues_GR(ctx: ContextHandle);
        fn Get_Totals_GR(ctx: ContextHandle);
        fn Get_Peakcurrent_GR(ctx: ContextHandle);
        fn Set_Peakcurrent(ctx: ContextHandle, value: *const f64, count: i32);
        fn Get_CalcCurrent_GR(ctx: ContextHandle);
        fn Set_CalcCurrent(ctx: ContextHandle, value: *const f64, count: i32);
        fn Get_AllocFactors_GR(ctx: ContextHandle);
        fn Set_AllocFactors(ctx: ContextHandle, value: *const f64, count: i32);
        fn Get_AllBranchesInZone(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_AllEndElements(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_ZonePCE(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_CountBranches(ctx: ContextHandle) -> i32;
        fn Get_CountEndElements(ctx: ContextHandle) -> i32;
        fn Get_DIFilesAreOpen(ctx: ContextHandle) -> DssBool;
        fn Get_NumSections(ctx: ContextHandle) -> i32;
        fn Get_NumSectionBranches(ctx: ContextHandle) -> i32;
        fn Get_NumSectionCustomers(ctx: ContextHandle) -> i32;
        fn Get_OCPDeviceType(ctx: ContextHandle) -> i32;
        fn Get_SectSeqIdx(ctx: ContextHandle) -> i32;
        fn Get_SectTotalCust(ctx: ContextHandle) -> i32;
        fn Get_SeqListSize(ctx: ContextHandle) -> i32;
        fn Get_SequenceIndex(ctx: ContextHandle) -> i32;
        fn Set_SequenceIndex(ctx: ContextHandle, value: i32);
        fn Get_TotalCustomers(ctx: ContextHandle) -> i32;
        fn Get_AvgRepairTime(ctx: ContextHandle) -> f64;
        fn Get_CustInterrupts(ctx: ContextHandle) -> f64;
        fn Get_FaultRateXRepairHrs(ctx: ContextHandle) -> f64;
        fn Get_SumBranchFltRates(ctx: ContextHandle) -> f64;
        fn Get_SAIDI(ctx: ContextHandle) -> f64;
        fn Get_SAIFI(ctx: ContextHandle) -> f64;
        fn Get_SAIFIKW(ctx: ContextHandle) -> f64;
        fn Reset(ctx: ContextHandle);
        fn ResetAll(ctx: ContextHandle);
        fn Sample(ctx: ContextHandle);
        fn SampleAll(ctx: ContextHandle);
        fn Save(ctx: ContextHandle);
        fn SaveAll(ctx: ContextHandle);
        fn OpenAllDIFiles(ctx: ContextHandle);
        fn CloseAllDIFiles(ctx: ContextHandle);
        fn DoReliabilityCalc(ctx: ContextHandle, assume_restoration: DssBool);
        fn SetActiveSection(ctx: ContextHandle, section_index: i32);
    }
}

dss_table! {
    /// Monitors.
    pub struct MonitorsApi : "ctx_Monitors_" {
        fn Get_AllNames(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_Count(ctx: ContextHandle) -> i32;
        fn Get_First(ctx: ContextHandle) -> i32;
        fn Get_Next(ctx: ContextHandle) -> i32;
        fn Get_Name(ctx: ContextHandle) -> *const c_char;
        fn Set_Name(ctx: ContextHandle, value: *const c_char);
        fn Get_idx(ctx: ContextHandle) -> i32;
        fn Set_idx(ctx: ContextHandle, value: i32);
        fn Get_Element(ctx: ContextHandle) -> *const c_char;
        fn Set_Element(ctx: ContextHandle, value: *const c_char);
        fn Get_Terminal(ctx: ContextHandle) -> i32;
        fn Set_Terminal(ctx: ContextHandle, value: i32);
        fn Get_Mode(ctx: ContextHandle) -> i32;
        fn Set_Mode(ctx: ContextHandle, value: i32);
        fn Get_FileName(ctx: ContextHandle) -> *const c_char;
        fn Get_FileVersion(ctx: ContextHandle) -> i32;
        fn Get_Header(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_NumChannels(ctx: ContextHandle) -> i32;
        fn Get_RecordSize(ctx: ContextHandle) -> i32;
        fn Get_SampleCount(ctx: ContextHandle) -> i32;
        fn Get_dblHour_GR(ctx: ContextHandle);
        fn Get_dblFreq_GR(ctx: ContextHandle);
        fn Get_ByteStream_GR(ctx: ContextHandle);
        fn Get_Channel_GR(ctx: ContextHandle, index: i32);
        fn Process(ctx: ContextHandle);
        fn ProcessAll(ctx: ContextHandle);
        fn Reset(ctx: ContextHandle);
        fn ResetAll(ctx: ContextHandle);
        fn Sample(ctx: ContextHandle);
        fn SampleAll(ctx: ContextHandle);
        fn Save(ctx: ContextHandle);
        fn SaveAll(ctx: ContextHandle);
        fn Show(ctx: ContextHandle);
    }
}

dss_table! {
    /// Relays.
    pub struct RelaysApi : "ctx_Relays_" {
        fn Get_AllNames(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_Count(ctx: ContextHandle) -> i32;
        fn Get_First(ctx: ContextHandle) -> i32;
        fn Get_Next(ctx: ContextHandle) -> i32;
        fn Get_Name(ctx: ContextHandle) -> *const c_char;
        fn Set_Name(ctx: ContextHandle, value: *const c_char);
        fn Get_idx(ctx: ContextHandle) -> i32;
        fn Set_idx(ctx: ContextHandle, value: i32);
        fn Get_MonitoredObj(ctx: ContextHandle) -> *const c_char;
        fn Set_MonitoredObj(ctx: ContextHandle, value: *const c_char);
        fn Get_MonitoredTerm(ctx: ContextHandle) -> i32;
        fn Set_MonitoredTerm(ctx: ContextHandle, value: i32);
        fn Get_SwitchedObj(ctx: ContextHandle) -> *const c_char;
        fn Set_SwitchedObj(ctx: ContextHandle, value: *const c_char);
        fn Get_SwitchedTerm(ctx: ContextHandle) -> i32;
        fn Set_SwitchedTerm(ctx: ContextHandle, value: i32);
        fn Get_State(ctx: ContextHandle) -> i32;
        fn Set_State(ctx: ContextHandle, value: i32);
        fn Get_NormalState(ctx: ContextHandle) -> i32;
        fn Set_NormalState(ctx: ContextHandle, value: i32);
        fn Open(ctx: ContextHandle);
        fn Close(ctx: ContextHandle);
        fn Reset(ctx: ContextHandle);
    }
}

dss_table! {
    /// Reclosers.
    pub struct ReclosersApi : "ctx_Reclosers_" {
        fn Get_AllNames(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_Count(ctx: ContextHandle) -> i32;
        fn Get_First(ctx: ContextHandle) -> i32;
        fn Get_Next(ctx: ContextHandle) -> i32;
        fn Get_Name(ctx: ContextHandle) -> *const c_char;
        fn Set_Name(ctx: ContextHandle, value: *const c_char);
        fn Get_idx(ctx: ContextHandle) -> i32;
        fn Set_idx(ctx: ContextHandle, value: i32);
        fn Get_MonitoredObj(ctx: ContextHandle) -> *const c_char;
        fn Set_MonitoredObj(ctx: ContextHandle, value: *const c_char);
        fn Get_MonitoredTerm(ctx: ContextHandle) -> i32;
        fn Set_MonitoredTerm(ctx: ContextHandle, value: i32);
        fn Get_SwitchedObj(ctx: ContextHandle) -> *const c_char;
        fn Set_SwitchedObj(ctx: ContextHandle, value: *const c_char);
        fn Get_SwitchedTerm(ctx: ContextHandle) -> i32;
        fn Set_SwitchedTerm(ctx: ContextHandle, value: i32);
        fn Get_GroundInst(ctx: ContextHandle) -> f64;
        fn Set_GroundInst(ctx: ContextHandle, value: f64);
        fn Get_GroundTrip(ctx: ContextHandle) -> f64;
        fn Set_GroundTrip(ctx: ContextHandle, value: f64);
        fn Get_PhaseInst(ctx: ContextHandle) -> f64;
        fn Set_PhaseInst(ctx: ContextHandle, value: f64);
        fn Get_PhaseTrip(ctx: ContextHandle) -> f64;
        fn Set_PhaseTrip(ctx: ContextHandle, value: f64);
        fn Get_NumFast(ctx: ContextHandle) -> i32;
        fn Set_NumFast(ctx: ContextHandle, value: i32);
        fn Get_Shots(ctx: ContextHandle) -> i32;
        fn Set_Shots(ctx: ContextHandle, value: i32);
        fn Get_RecloseIntervals_GR(ctx: ContextHandle);
        fn Get_State(ctx: ContextHandle) -> i32;
        fn Set_State(ctx: ContextHandle, value: i32);
        fn Get_NormalState(ctx: ContextHandle) -> i32;
        fn Set_NormalState(ctx: ContextHandle, value: i32);
        fn Open(ctx: ContextHandle);
        fn Close(ctx: ContextHandle);
        fn Reset(ctx: ContextHandle);
    }
}

dss_table! {
    /// Sensors.
    pub struct SensorsApi : "ctx_Sensors_" {
        fn Get_AllNames(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_Count(ctx: ContextHandle) -> i32;
        fn Get_First(ctx: ContextHandle) -> i32;
        fn Get_Next(ctx: ContextHandle) -> i32;
        fn Get_Name(ctx: ContextHandle) -> *const c_char;
        fn Set_Name(ctx: ContextHandle, value: *const c_char);
        fn Get_idx(ctx: ContextHandle) -> i32;
        fn Set_idx(ctx: ContextHandle, value: i32);
        fn Get_MeteredElement(ctx: ContextHandle) -> *const c_char;
        fn Set_MeteredElement(ctx: ContextHandle, value: *const c_char);
        fn Get_MeteredTerminal(ctx: ContextHandle) -> i32;
        fn Set_MeteredTerminal(ctx: ContextHandle, value: i32);
        fn Get_Currents_GR(ctx: ContextHandle);
        fn Set_Currents(ctx: ContextHandle, value: *const f64, count: i32);
        fn Get_kVARS_GR(ctx: ContextHandle);
        fn Set_kVARS(ctx: ContextHandle, value: *const f64, count: i32);
        fn Get_kVS_GR(ctx: ContextHandle);
        fn Set_kVS(ctx: ContextHandle, value: *const f64, count: i32);
        fn Get_kWS_GR(ctx: ContextHandle);
        fn Set_kWS(ctx: ContextHandle, value: *const f64, count: i32);
        fn Get_kVbase(ctx: ContextHandle) -> f64;
        fn Set_kVbase(ctx: ContextHandle, value: f64);
        fn Get_IsDelta(ctx: ContextHandle) -> DssBool;
        fn Set_IsDelta(ctx: ContextHandle, value: DssBool);
        fn Get_ReverseDelta(ctx: ContextHandle) -> DssBool;
        fn Set_ReverseDelta(ctx: ContextHandle, value: DssBool);
        fn Get_PctError(ctx: ContextHandle) -> f64;
        fn Set_PctError(ctx: ContextHandle, value: f64);
        fn Get_Weight(ctx: ContextHandle) -> f64;
        fn Set_Weight(ctx: ContextHandle, value: f64);
        fn Get_AllocationFactor_GR(ctx: ContextHandle);
        fn Reset(ctx: ContextHandle);
        fn ResetAll(ctx: ContextHandle);
    }
}

dss_table! {
    /// Fuses.
    pub struct FusesApi : "ctx_Fuses_" {
        fn Get_AllNames(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_Count(ctx: ContextHandle) -> i32;
        fn Get_First(ctx: ContextHandle) -> i32;
        fn Get_Next(ctx: ContextHandle) -> i32;
        fn Get_Name(ctx: ContextHandle) -> *const c_char;
        fn Set_Name(ctx: ContextHandle, value: *const c_char);
        fn Get_idx(ctx: ContextHandle) -> i32;
        fn Set_idx(ctx: ContextHandle, value: i32);
        fn Get_MonitoredObj(ctx: ContextHandle) -> *const c_char;
        fn Set_MonitoredObj(ctx: ContextHandle, value: *const c_char);
        fn Get_MonitoredTerm(ctx: ContextHandle) -> i32;
        fn Set_MonitoredTerm(ctx: ContextHandle, value: i32);
        fn Get_SwitchedObj(ctx: ContextHandle) -> *const c_char;
        fn Set_SwitchedObj(ctx: ContextHandle, value: *const c_char);
        fn Get_SwitchedTerm(ctx: ContextHandle) -> i32;
        fn Set_SwitchedTerm(ctx: ContextHandle, value: i32);
        fn Get_TCCcurve(ctx: ContextHandle) -> *const c_char;
        fn Set_TCCcurve(ctx: ContextHandle, value: *const c_char);
        fn Get_RatedCurrent(ctx: ContextHandle) -> f64;
        fn Set_RatedCurrent(ctx: ContextHandle, value: f64);
        fn Get_Delay(ctx: ContextHandle) -> f64;
        fn Set_Delay(ctx: ContextHandle, value: f64);
        fn Get_NumPhases(ctx: ContextHandle) -> i32;
        fn Get_State(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Set_State(ctx: ContextHandle, value: *const *const c_char, count: i32);
        fn Get_NormalState(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Set_NormalState(ctx: ContextHandle, value: *const *const c_char, count: i32);
        fn IsBlown(ctx: ContextHandle) -> DssBool;
        fn Open(ctx: ContextHandle);
        fn Close(ctx: ContextHandle);
        fn Reset(ctx: ContextHandle);
    }
}

dss_table! {
    /// Switch controls.
    pub struct SwtControlsApi : "ctx_SwtControls_" {
        fn Get_AllNames(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_Count(ctx: ContextHandle) -> i32;
        fn Get_First(ctx: ContextHandle) -> i32;
        fn Get_Next(ctx: ContextHandle) -> i32;
        fn Get_Name(ctx: ContextHandle) -> *const c_char;
        fn Set_Name(ctx: ContextHandle, value: *const c_char);
        fn Get_idx(ctx: ContextHandle) -> i32;
        fn Set_idx(ctx: ContextHandle, value: i32);
        fn Get_SwitchedObj(ctx: ContextHandle) -> *const c_char;
        fn Set_SwitchedObj(ctx: ContextHandle, value: *const c_char);
        fn Get_SwitchedTerm(ctx: ContextHandle) -> i32;
        fn Set_SwitchedTerm(ctx: ContextHandle, value: i32);
        fn Get_Action(ctx: ContextHandle) -> i32;
        fn Set_Action(ctx: ContextHandle, value: i32);
        fn Get_Delay(ctx: ContextHandle) -> f64;
        fn Set_Delay(ctx: ContextHandle, value: f64);
        fn Get_IsLocked(ctx: ContextHandle) -> DssBool;
        fn Set_IsLocked(ctx: ContextHandle, value: DssBool);
        fn Get_State(ctx: ContextHandle) -> i32;
        fn Set_State(ctx: ContextHandle, value: i32);
        fn Get_NormalState(ctx: ContextHandle) -> i32;
        fn Set_NormalState(ctx: ContextHandle, value: i32);
        fn Reset(ctx: ContextHandle);
    }
}

dss_table! {
    /// Regulator controls.
    pub struct RegControlsApi : "ctx_RegControls_" {
        fn Get_AllNames(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_Count(ctx: ContextHandle) -> i32;
        fn Get_First(ctx: ContextHandle) -> i32;
        fn Get_Next(ctx: ContextHandle) -> i32;
        fn Get_Name(ctx: ContextHandle) -> *const c_char;
        fn Set_Name(ctx: ContextHandle, value: *const c_char);
        fn Get_idx(ctx: ContextHandle) -> i32;
        fn Set_idx(ctx: ContextHandle, value: i32);
        fn Get_Transformer(ctx: ContextHandle) -> *const c_char;
        fn Set_Transformer(ctx: ContextHandle, value: *const c_char);
        fn Get_Winding(ctx: ContextHandle) -> i32;
        fn Set_Winding(ctx: ContextHandle, value: i32);
        fn Get_MonitoredBus(ctx: ContextHandle) -> *const c_char;
        fn Set_MonitoredBus(ctx: ContextHandle, value: *const c_char);
        fn Get_CTPrimary(ctx: ContextHandle) -> f64;
        fn Set_CTPrimary(ctx: ContextHandle, value: f64);
        fn Get_PTratio(ctx: ContextHandle) -> f64;
        fn Set_PTratio(ctx: ContextHandle, value: f64);
        fn Get_Delay(ctx: ContextHandle) -> f64;
        fn Set_Delay(ctx: ContextHandle, value: f64);
        fn Get_TapDelay(ctx: ContextHandle) -> f64;
        fn Set_TapDelay(ctx: ContextHandle, value: f64);
        fn Get_ForwardBand(ctx: ContextHandle) -> f64;
        fn Set_ForwardBand(ctx: ContextHandle, value: f64);
        fn Get_ForwardR(ctx: ContextHandle) -> f64;
        fn Set_ForwardR(ctx: ContextHandle, value: f64);
        fn Get_ForwardVreg(ctx: ContextHandle) -> f64;
        fn Set_ForwardVreg(ctx: ContextHandle, value: f64);
        fn Get_ForwardX(ctx: ContextHandle) -> f64;
        fn Set_ForwardX(ctx: ContextHandle, value: f64);
        fn Get_ReverseBand(ctx: ContextHandle) -> f64;
        fn Set_ReverseBand(ctx: ContextHandle, value: f64);
        fn Get_ReverseR(ctx: ContextHandle) -> f64;
        fn Set_ReverseR(ctx: ContextHandle, value: f64);
        fn Get_ReverseVreg(ctx: ContextHandle) -> f64;
        fn Set_ReverseVreg(ctx: ContextHandle, value: f64);
        fn Get_ReverseX(ctx: ContextHandle) -> f64;
        fn Set_ReverseX(ctx: ContextHandle, value: f64);
        fn Get_IsInverseTime(ctx: ContextHandle) -> DssBool;
        fn Set_IsInverseTime(ctx: ContextHandle, value: DssBool);
        fn Get_IsReversible(ctx: ContextHandle) -> DssBool;
        fn Set_IsReversible(ctx: ContextHandle, value: DssBool);
        fn Get_MaxTapChange(ctx: ContextHandle) -> i32;
        fn Set_MaxTapChange(ctx: ContextHandle, value: i32);
        fn Get_TapNumber(ctx: ContextHandle) -> i32;
        fn Set_TapNumber(ctx: ContextHandle, value: i32);
        fn Get_TapWinding(ctx: ContextHandle) -> i32;
        fn Set_TapWinding(ctx: ContextHandle, value: i32);
        fn Get_VoltageLimit(ctx: ContextHandle) -> f64;
        fn Set_VoltageLimit(ctx: ContextHandle, value: f64);
        fn Reset(ctx: ContextHandle);
    }
}

dss_table! {
    /// Capacitor controls.
    pub struct CapControlsApi : "ctx_CapControls_" {
        fn Get_AllNames(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_Count(ctx: ContextHandle) -> i32;
        fn Get_First(ctx: ContextHandle) -> i32;
        fn Get_Next(ctx: ContextHandle) -> i32;
        fn Get_Name(ctx: ContextHandle) -> *const c_char;
        fn Set_Name(ctx: ContextHandle, value: *const c_char);
        fn Get_idx(ctx: ContextHandle) -> i32;
        fn Set_idx(ctx: ContextHandle, value: i32);
        fn Get_Capacitor(ctx: ContextHandle) -> *const c_char;
        fn Set_Capacitor(ctx: ContextHandle, value: *const c_char);
        fn Get_MonitoredObj(ctx: ContextHandle) -> *const c_char;
        fn Set_MonitoredObj(ctx: ContextHandle, value: *const c_char);
        fn Get_MonitoredTerm(ctx: ContextHandle) -> i32;
        fn Set_MonitoredTerm(ctx: ContextHandle, value: i32);
        fn Get_Mode(ctx: ContextHandle) -> i32;
        fn Set_Mode(ctx: ContextHandle, value: i32);
        fn Get_CTratio(ctx: ContextHandle) -> f64;
        fn Set_CTratio(ctx: ContextHandle, value: f64);
        fn Get_PTratio(ctx: ContextHandle) -> f64;
        fn Set_PTratio(ctx: ContextHandle, value: f64);
        fn Get_DeadTime(ctx: ContextHandle) -> f64;
        fn Set_DeadTime(ctx: ContextHandle, value: f64);
        fn Get_Delay(ctx: ContextHandle) -> f64;
        fn Set_Delay(ctx: ContextHandle, value: f64);
        fn Get_DelayOff(ctx: ContextHandle) -> f64;
        fn Set_DelayOff(ctx: ContextHandle, value: f64);
        fn Get_ONSetting(ctx: ContextHandle) -> f64;
        fn Set_ONSetting(ctx: ContextHandle, value: f64);
        fn Get_OFFSetting(ctx: ContextHandle) -> f64;
        fn Set_OFFSetting(ctx: ContextHandle, value: f64);
        fn Get_UseVoltOverride(ctx: ContextHandle) -> DssBool;
        fn Set_UseVoltOverride(ctx: ContextHandle, value: DssBool);
        fn Get_Vmax(ctx: ContextHandle) -> f64;
        fn Set_Vmax(ctx: ContextHandle, value: f64);
        fn Get_Vmin(ctx: ContextHandle) -> f64;
        fn Set_Vmin(ctx: ContextHandle, value: f64);
        fn Reset(ctx: ContextHandle);
    }
}

dss_table! {
    /// Photovoltaic systems.
    pub struct PVSystemsApi : "ctx_PVSystems_" {
        fn Get_AllNames(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_Count(ctx: ContextHandle) -> i32;
        fn Get_First(ctx: ContextHandle) -> i32;
        fn Get_Next(ctx: ContextHandle) -> i32;
        fn Get_Name(ctx: ContextHandle) -> *const c_char;
        fn Set_Name(ctx: ContextHandle, value: *const c_char);
        fn Get_idx(ctx: ContextHandle) -> i32;
        fn Set_idx(ctx: ContextHandle, value: i32);
        fn Get_Irradiance(ctx: ContextHandle) -> f64;
        fn Set_Irradiance(ctx: ContextHandle, value: f64);
        fn Get_IrradianceNow(ctx: ContextHandle) -> f64;
        fn Get_PF(ctx: ContextHandle) -> f64;
        fn Set_PF(ctx: ContextHandle, value: f64);
        fn Get_kVArated(ctx: ContextHandle) -> f64;
        fn Set_kVArated(ctx: ContextHandle, value: f64);
        fn Get_kW(ctx: ContextHandle) -> f64;
        fn Get_kvar(ctx: ContextHandle) -> f64;
        fn Set_kvar(ctx: ContextHandle, value: f64);
        fn Get_Pmpp(ctx: ContextHandle) -> f64;
        fn Set_Pmpp(ctx: ContextHandle, value: f64);
        fn Get_daily(ctx: ContextHandle) -> *const c_char;
        fn Set_daily(ctx: ContextHandle, value: *const c_char);
        fn Get_duty(ctx: ContextHandle) -> *const c_char;
        fn Set_duty(ctx: ContextHandle, value: *const c_char);
        fn Get_yearly(ctx: ContextHandle) -> *const c_char;
        fn Set_yearly(ctx: ContextHandle, value: *const c_char);
        fn Get_Tdaily(ctx: ContextHandle) -> *const c_char;
        fn Set_Tdaily(ctx: ContextHandle, value: *const c_char);
        fn Get_Tduty(ctx: ContextHandle) -> *const c_char;
        fn Set_Tduty(ctx: ContextHandle, value: *const c_char);
        fn Get_Tyearly(ctx: ContextHandle) -> *const c_char;
        fn Set_Tyearly(ctx: ContextHandle, value: *const c_char);
        fn Get_Sensor(ctx: ContextHandle) -> *const c_char;
        fn Get_RegisterNames(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_RegisterValues_GR(ctx: ContextHandle);
    }
}

dss_table! {
    /// Storage elements.
    pub struct StoragesApi : "ctx_Storages_" {
        fn Get_AllNames(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_Count(ctx: ContextHandle) -> i32;
        fn Get_First(ctx: ContextHandle) -> i32;
        fn Get_Next(ctx: ContextHandle) -> i32;
        fn Get_Name(ctx: ContextHandle) -> *const c_char;
        fn Set_Name(ctx: ContextHandle, value: *const c_char);
        fn Get_idx(ctx: ContextHandle) -> i32;
        fn Set_idx(ctx: ContextHandle, value: i32);
        fn Get_puSOC(ctx: ContextHandle) -> f64;
        fn Set_puSOC(ctx: ContextHandle, value: f64);
        fn Get_State(ctx: ContextHandle) -> i32;
        fn Set_State(ctx: ContextHandle, value: i32);
        fn Get_RegisterNames(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_RegisterValues_GR(ctx: ContextHandle);
    }
}

dss_table! {
    /// Voltage sources.
    pub struct VsourcesApi : "ctx_Vsources_" {
        fn Get_AllNames(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_Count(ctx: ContextHandle) -> i32;
        fn Get_First(ctx: ContextHandle) -> i32;
        fn Get_Next(ctx: ContextHandle) -> i32;
        fn Get_Name(ctx: ContextHandle) -> *const c_char;
        fn Set_Name(ctx: ContextHandle, value: *const c_char);
        fn Get_idx(ctx: ContextHandle) -> i32;
        fn Set_idx(ctx: ContextHandle, value: i32);
        fn Get_BasekV(ctx: ContextHandle) -> f64;
        fn Set_BasekV(ctx: ContextHandle, value: f64);
        fn Get_pu(ctx: ContextHandle) -> f64;
        fn Set_pu(ctx: ContextHandle, value: f64);
        fn Get_AngleDeg(ctx: ContextHandle) -> f64;
        fn Set_AngleDeg(ctx: ContextHandle, value: f64);
        fn Get_Frequency(ctx: ContextHandle) -> f64;
        fn Set_Frequency(ctx: ContextHandle, value: f64);
        fn Get_Phases(ctx: ContextHandle) -> i32;
        fn Set_Phases(ctx: ContextHandle, value: i32);
    }
}

dss_table! {
    /// Current sources.
    pub struct ISourcesApi : "ctx_ISources_" {
        fn Get_AllNames(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_Count(ctx: ContextHandle) -> i32;
        fn Get_First(ctx: ContextHandle) -> i32;
        fn Get_Next(ctx: ContextHandle) -> i32;
        fn Get_Name(ctx: ContextHandle) -> *const c_char;
        fn Set_Name(ctx: ContextHandle, value: *const c_char);
        fn Get_idx(ctx: ContextHandle) -> i32;
        fn Set_idx(ctx: ContextHandle, value: i32);
        fn Get_Amps(ctx: ContextHandle) -> f64;
        fn Set_Amps(ctx: ContextHandle, value: f64);
        fn Get_AngleDeg(ctx: ContextHandle) -> f64;
        fn Set_AngleDeg(ctx: ContextHandle, value: f64);
        fn Get_Frequency(ctx: ContextHandle) -> f64;
        fn Set_Frequency(ctx: ContextHandle, value: f64);
    }
}

dss_table! {
    /// Shunt and series reactors.
    pub struct ReactorsApi : "ctx_Reactors_" {
        fn Get_AllNames(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_Count(ctx: ContextHandle) -> i32;
        fn Get_First(ctx: ContextHandle) -> i32;
        fn Get_Next(ctx: ContextHandle) -> i32;
        fn Get_Name(ctx: ContextHandle) -> *const c_char;
        fn Set_Name(ctx: ContextHandle, value: *const c_char);
        fn Get_idx(ctx: ContextHandle) -> i32;
        fn Set_idx(ctx: ContextHandle, value: i32);
        fn Get_Bus1(ctx: ContextHandle) -> *const c_char;
        fn Set_Bus1(ctx: ContextHandle, value: *const c_char);
        fn Get_Bus2(ctx: ContextHandle) -> *const c_char;
        fn Set_Bus2(ctx: ContextHandle, value: *const c_char);
        fn Get_Phases(ctx: ContextHandle) -> i32;
        fn Set_Phases(ctx: ContextHandle, value: i32);
        fn Get_kV(ctx: ContextHandle) -> f64;
        fn Set_kV(ctx: ContextHandle, value: f64);
        fn Get_kvar(ctx: ContextHandle) -> f64;
        fn Set_kvar(ctx: ContextHandle, value: f64);
        fn Get_LmH(ctx: ContextHandle) -> f64;
        fn Set_LmH(ctx: ContextHandle, value: f64);
        fn Get_IsDelta(ctx: ContextHandle) -> DssBool;
        fn Set_IsDelta(ctx: ContextHandle, value: DssBool);
        fn Get_Parallel(ctx: ContextHandle) -> DssBool;
        fn Set_Parallel(ctx: ContextHandle, value: DssBool);
        fn Get_SpecType(ctx: ContextHandle) -> i32;
        fn Get_LCurve(ctx: ContextHandle) -> *const c_char;
        fn Set_LCurve(ctx: ContextHandle, value: *const c_char);
        fn Get_RCurve(ctx: ContextHandle) -> *const c_char;
        fn Set_RCurve(ctx: ContextHandle, value: *const c_char);
        fn Get_R(ctx: ContextHandle) -> f64;
        fn Set_R(ctx: ContextHandle, value: f64);
        fn Get_X(ctx: ContextHandle) -> f64;
        fn Set_X(ctx: ContextHandle, value: f64);
        fn Get_Rp(ctx: ContextHandle) -> f64;
        fn Set_Rp(ctx: ContextHandle, value: f64);
        fn Get_Rmatrix_GR(ctx: ContextHandle);
        fn Set_Rmatrix(ctx: ContextHandle, value: *const f64, count: i32);
        fn Get_Xmatrix_GR(ctx: ContextHandle);
        fn Set_Xmatrix(ctx: ContextHandle, value: *const f64, count: i32);
        fn Get_Z_GR(ctx: ContextHandle);
        fn Set_Z(ctx: ContextHandle, value: *const f64, count: i32);
        fn Get_Z1_GR(ctx: ContextHandle);
        fn Set_Z1(ctx: ContextHandle, value: *const f64, count: i32);
        fn Get_Z2_GR(ctx: ContextHandle);
        fn Set_Z2(ctx: ContextHandle, value: *const f64, count: i32);
        fn Get_Z0_GR(ctx: ContextHandle);
        fn Set_Z0(ctx: ContextHandle, value: *const f64, count: i32);
    }
}
