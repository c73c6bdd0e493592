use std::ffi::c_char;

use crate::dss_table;
use crate::handles::{ContextHandle, DssBool};

dss_table! {
    /// Active circuit.
    pub struct CircuitApi : "ctx_Circuit_" {
        fn Get_Name(ctx: ContextHandle) -> *const c_char;
        fn Get_NumCktElements(ctx: ContextHandle) -> i32;
        fn Get_NumBuses(ctx: ContextHandle) -> i32;
        fn Get_NumNodes(ctx: ContextHandle) -> i32;
        fn Get_AllBusNames(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_AllElementNames(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_AllNodeNames(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_YNodeOrder(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_AllNodeNamesByPhase(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32, phase: i32);
        fn Get_AllBusVmag_GR(ctx: ContextHandle);
        fn Get_AllBusVolts_GR(ctx: ContextHandle);
        fn Get_AllBusVmagPu_GR(ctx: ContextHandle);
        fn Get_AllBusDistances_GR(ctx: ContextHandle);
        fn Get_AllNodeDistances_GR(ctx: ContextHandle);
        fn Get_AllNodeVmagByPhase_GR(ctx: ContextHandle, phase: i32);
        fn Get_AllNodeVmagPUByPhase_GR(ctx: ContextHandle, phase: i32);
        fn Get_AllNodeDistancesByPhase_GR(ctx: ContextHandle, phase: i32);
        fn Get_AllElementLosses_GR(ctx: ContextHandle);
        fn Get_ElementLosses_GR(ctx: ContextHandle, indices: *const i32, count: i32);
        fn Get_LineLosses_GR(ctx: ContextHandle);
        fn Get_Losses_GR(ctx: ContextHandle);
        fn Get_SubstationLosses_GR(ctx: ContextHandle);
        fn Get_TotalPower_GR(ctx: ContextHandle);
        fn Get_YNodeVarray_GR(ctx: ContextHandle);
        fn Get_YCurrents_GR(ctx: ContextHandle);
        fn Get_SystemY_GR(ctx: ContextHandle);
        fn SetActiveBus(ctx: ContextHandle, name: *const c_char) -> i32;
        fn SetActiveBusi(ctx: ContextHandle, index: i32) -> i32;
        fn SetActiveElement(ctx: ContextHandle, full_name: *const c_char) -> i32;
        fn SetActiveClass(ctx: ContextHandle, class_name: *const c_char) -> i32;
        fn FirstElement(ctx: ContextHandle) -> i32;
        fn NextElement(ctx: ContextHandle) -> i32;
        fn FirstPCElement(ctx: ContextHandle) -> i32;
        fn NextPCElement(ctx: ContextHandle) -> i32;
        fn FirstPDElement(ctx: ContextHandle) -> i32;
        fn NextPDElement(ctx: ContextHandle) -> i32;
        fn Get_ParentPDElement(ctx: ContextHandle) -> i32;
        fn Disable(ctx: ContextHandle, name: *const c_char);
        fn Enable(ctx: ContextHandle, name: *const c_char);
        fn Sample(ctx: ContextHandle);
        fn SaveSample(ctx: ContextHandle);
        fn UpdateStorage(ctx: ContextHandle);
        fn EndOfTimeStepUpdate(ctx: ContextHandle);
        fn Capacity(ctx: ContextHandle, start: f64, increment: f64) -> f64;
    }
}

dss_table! {
    /// Active bus.
    pub struct BusApi : "ctx_Bus_" {
        fn Get_Name(ctx: ContextHandle) -> *const c_char;
        fn Get_NumNodes(ctx: ContextHandle) -> i32;
        fn Get_kVBase(ctx: ContextHandle) -> f64;
        fn Get_Distance(ctx: ContextHandle) -> f64;
        fn Get_x(ctx: ContextHandle) -> f64;
        fn Set_x(ctx: ContextHandle, value: f64);
        fn Get_y(ctx: ContextHandle) -> f64;
        fn Set_y(ctx: ContextHandle, value: f64);
        fn Get_Coorddefined(ctx: ContextHandle) -> DssBool;
        fn Get_Voltages_GR(ctx: ContextHandle);
        fn Get_VMagAngle_GR(ctx: ContextHandle);
        fn Get_puVoltages_GR(ctx: ContextHandle);
        fn Get_puVmagAngle_GR(ctx: ContextHandle);
        fn Get_VLL_GR(ctx: ContextHandle);
        fn Get_puVLL_GR(ctx: ContextHandle);
        fn Get_Nodes_GR(ctx: ContextHandle);
        fn Get_SeqVoltages_GR(ctx: ContextHandle);
        fn Get_CplxSeqVoltages_GR(ctx: ContextHandle);
        fn Get_Zsc0_GR(ctx: ContextHandle);
        fn Get_Zsc1_GR(ctx: ContextHandle);
        fn Get_ZscMatrix_GR(ctx: ContextHandle);
        fn Get_YscMatrix_GR(ctx: ContextHandle);
        fn Get_ZSC012Matrix_GR(ctx: ContextHandle);
        fn Get_Isc_GR(ctx: ContextHandle);
        fn Get_Voc_GR(ctx: ContextHandle);
        fn Get_Lambda(ctx: ContextHandle) -> f64;
        fn Get_N_interrupts(ctx: ContextHandle) -> f64;
        fn Get_Int_Duration(ctx: ContextHandle) -> f64;
        fn Get_Cust_Interrupts(ctx: ContextHandle) -> f64;
        fn Get_Cust_Duration(ctx: ContextHandle) -> f64;
        fn Get_N_Customers(ctx: ContextHandle) -> i32;
        fn Get_TotalMiles(ctx: ContextHandle) -> f64;
        fn Get_SectionID(ctx: ContextHandle) -> i32;
        fn Get_LineList(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_LoadList(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_AllPCEatBus(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_AllPDEatBus(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn GetUniqueNodeNumber(ctx: ContextHandle, start: i32) -> i32;
        fn ZscRefresh(ctx: ContextHandle) -> DssBool;
    }
}

dss_table! {
    /// Active circuit element.
    pub struct CktElementApi : "ctx_CktElement_" {
        fn Get_Name(ctx: ContextHandle) -> *const c_char;
        fn Get_NumTerminals(ctx: ContextHandle) -> i32;
        fn Get_NumConductors(ctx: ContextHandle) -> i32;
        fn Get_NumPhases(ctx: ContextHandle) -> i32;
        fn Get_BusNames(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Set_BusNames(ctx: ContextHandle, value: *const *const c_char, count: i32);
        fn Get_Enabled(ctx: ContextHandle) -> DssBool;
        fn Set_Enabled(ctx: ContextHandle, value: DssBool);
        fn Get_Voltages_GR(ctx: ContextHandle);
        fn Get_VoltagesMagAng_GR(ctx: ContextHandle);
        fn Get_Currents_GR(ctx: ContextHandle);
        fn Get_CurrentsMagAng_GR(ctx: ContextHandle);
        fn Get_Powers_GR(ctx: ContextHandle);
        fn Get_TotalPowers_GR(ctx: ContextHandle);
        fn Get_Losses_GR(ctx: ContextHandle);
        fn Get_PhaseLosses_GR(ctx: ContextHandle);
        fn Get_SeqVoltages_GR(ctx: ContextHandle);
        fn Get_CplxSeqVoltages_GR(ctx: ContextHandle);
        fn Get_SeqCurrents_GR(ctx: ContextHandle);
        fn Get_CplxSeqCurrents_GR(ctx: ContextHandle);
        fn Get_SeqPowers_GR(ctx: ContextHandle);
        fn Get_Residuals_GR(ctx: ContextHandle);
        fn Get_Yprim_GR(ctx: ContextHandle);
        fn Get_NodeOrder_GR(ctx: ContextHandle);
        fn Get_NodeRef_GR(ctx: ContextHandle);
        fn Get_HasSwitchControl(ctx: ContextHandle) -> DssBool;
        fn Get_HasVoltControl(ctx: ContextHandle) -> DssBool;
        fn Get_HasOCPDevice(ctx: ContextHandle) -> DssBool;
        fn Get_NumControls(ctx: ContextHandle) -> i32;
        fn Get_Controller(ctx: ContextHandle, index: i32) -> *const c_char;
        fn Get_OCPDevIndex(ctx: ContextHandle) -> i32;
        fn Get_OCPDevType(ctx: ContextHandle) -> i32;
        fn Get_EmergAmps(ctx: ContextHandle) -> f64;
        fn Set_EmergAmps(ctx: ContextHandle, value: f64);
        fn Get_NormalAmps(ctx: ContextHandle) -> f64;
        fn Set_NormalAmps(ctx: ContextHandle, value: f64);
        fn Get_DisplayName(ctx: ContextHandle) -> *const c_char;
        fn Set_DisplayName(ctx: ContextHandle, value: *const c_char);
        fn Get_GUID(ctx: ContextHandle) -> *const c_char;
        fn Get_Handle(ctx: ContextHandle) -> i32;
        fn Get_EnergyMeter(ctx: ContextHandle) -> *const c_char;
        fn Get_IsIsolated(ctx: ContextHandle) -> DssBool;
        fn Open(ctx: ContextHandle, terminal: i32, phase: i32);
        fn Close(ctx: ContextHandle, terminal: i32, phase: i32);
        fn IsOpen(ctx: ContextHandle, terminal: i32, phase: i32) -> DssBool;
        fn Get_AllPropertyNames(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_NumProperties(ctx: ContextHandle) -> i32;
        fn Get_AllVariableNames(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_AllVariableValues_GR(ctx: ContextHandle);
        fn Get_Variable(ctx: ContextHandle, name: *const c_char, code: *mut i32) -> f64;
        fn Get_Variablei(ctx: ContextHandle, index: i32, code: *mut i32) -> f64;
        fn Set_Variable(ctx: ContextHandle, name: *const c_char, code: *mut i32, value: f64);
        fn Set_Variablei(ctx: ContextHandle, index: i32, code: *mut i32, value: f64);
    }
}

dss_table! {
    /// Solution control.
    pub struct SolutionApi : "ctx_Solution_" {
        fn Solve(ctx: ContextHandle);
        fn SolveAll(ctx: ContextHandle);
        fn SolveDirect(ctx: ContextHandle);
        fn SolvePflow(ctx: ContextHandle);
        fn SolveNoControl(ctx: ContextHandle);
        fn SolvePlusControl(ctx: ContextHandle);
        fn SolveSnap(ctx: ContextHandle);
        fn CheckControls(ctx: ContextHandle);
        fn CheckFaultStatus(ctx: ContextHandle);
        fn DoControlActions(ctx: ContextHandle);
        fn FinishTimeStep(ctx: ContextHandle);
        fn InitSnap(ctx: ContextHandle);
        fn SampleControlDevices(ctx: ContextHandle);
        fn Sample_DoControlActions(ctx: ContextHandle);
        fn Cleanup(ctx: ContextHandle);
        fn BuildYMatrix(ctx: ContextHandle, build_option: i32, allocate_vi: i32);
        fn Get_Mode(ctx: ContextHandle) -> i32;
        fn Set_Mode(ctx: ContextHandle, value: i32);
        fn Get_ModeID(ctx: ContextHandle) -> *const c_char;
        fn Get_Number(ctx: ContextHandle) -> i32;
        fn Set_Number(ctx: ContextHandle, value: i32);
        fn Get_Hour(ctx: ContextHandle) -> i32;
        fn Set_Hour(ctx: ContextHandle, value: i32);
        fn Get_Seconds(ctx: ContextHandle) -> f64;
        fn Set_Seconds(ctx: ContextHandle, value: f64);
        fn Get_dblHour(ctx: ContextHandle) -> f64;
        fn Set_dblHour(ctx: ContextHandle, value: f64);
        fn Get_StepSize(ctx: ContextHandle) -> f64;
        fn Set_StepSize(ctx: ContextHandle, value: f64);
        fn Get_IntervalHrs(ctx: ContextHandle) -> f64;
        fn Set_IntervalHrs(ctx: ContextHandle, value: f64);
        fn Get_Year(ctx: ContextHandle) -> i32;
        fn Set_Year(ctx: ContextHandle, value: i32);
        fn Get_Converged(ctx: ContextHandle) -> DssBool;
        fn Set_Converged(ctx: ContextHandle, value: DssBool);
        fn Get_Iterations(ctx: ContextHandle) -> i32;
        fn Get_TotalIterations(ctx: ContextHandle) -> i32;
        fn Get_MostIterationsDone(ctx: ContextHandle) -> i32;
        fn Get_MaxIterations(ctx: ContextHandle) -> i32;
        fn Set_MaxIterations(ctx: ContextHandle, value: i32);
        fn Get_MinIterations(ctx: ContextHandle) -> i32;
        fn Set_MinIterations(ctx: ContextHandle, value: i32);
        fn Get_MaxControlIterations(ctx: ContextHandle) -> i32;
        fn Set_MaxControlIterations(ctx: ContextHandle, value: i32);
        fn Get_ControlIterations(ctx: ContextHandle) -> i32;
        fn Set_ControlIterations(ctx: ContextHandle, value: i32);
        fn Get_Tolerance(ctx: ContextHandle) -> f64;
        fn Set_Tolerance(ctx: ContextHandle, value: f64);
        fn Get_LoadMult(ctx: ContextHandle) -> f64;
        fn Set_LoadMult(ctx: ContextHandle, value: f64);
        fn Get_Frequency(ctx: ContextHandle) -> f64;
        fn Set_Frequency(ctx: ContextHandle, value: f64);
        fn Get_Capkvar(ctx: ContextHandle) -> f64;
        fn Set_Capkvar(ctx: ContextHandle, value: f64);
        fn Get_ControlMode(ctx: ContextHandle) -> i32;
        fn Set_ControlMode(ctx: ContextHandle, value: i32);
        fn Get_Algorithm(ctx: ContextHandle) -> i32;
        fn Set_Algorithm(ctx: ContextHandle, value: i32);
        fn Get_LoadModel(ctx: ContextHandle) -> i32;
        fn Set_LoadModel(ctx: ContextHandle, value: i32);
        fn Get_Random(ctx: ContextHandle) -> i32;
        fn Set_Random(ctx: ContextHandle, value: i32);
        fn Get_AddType(ctx: ContextHandle) -> i32;
        fn Set_AddType(ctx: ContextHandle, value: i32);
        fn Get_GenkW(ctx: ContextHandle) -> f64;
        fn Set_GenkW(ctx: ContextHandle, value: f64);
        fn Get_GenPF(ctx: ContextHandle) -> f64;
        fn Set_GenPF(ctx: ContextHandle, value: f64);
        fn Get_GenMult(ctx: ContextHandle) -> f64;
        fn Set_GenMult(ctx: ContextHandle, value: f64);
        fn Get_pctGrowth(ctx: ContextHandle) -> f64;
        fn Set_pctGrowth(ctx: ContextHandle, value: f64);
        fn Get_DefaultDaily(ctx: ContextHandle) -> *const c_char;
        fn Set_DefaultDaily(ctx: ContextHandle, value: *const c_char);
        fn Get_DefaultYearly(ctx: ContextHandle) -> *const c_char;
        fn Set_DefaultYearly(ctx: ContextHandle, value: *const c_char);
        fn Get_LDCurve(ctx: ContextHandle) -> *const c_char;
        fn Set_LDCurve(ctx: ContextHandle, value: *const c_char);
        fn Get_Process_Time(ctx: ContextHandle) -> f64;
        fn Get_Time_of_Step(ctx: ContextHandle) -> f64;
        fn Get_Total_Time(ctx: ContextHandle) -> f64;
        fn Set_Total_Time(ctx: ContextHandle, value: f64);
        fn Get_SystemYChanged(ctx: ContextHandle) -> DssBool;
        fn Get_EventLog(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_IncMatrix_GR(ctx: ContextHandle);
        fn Get_IncMatrixRows(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_IncMatrixCols(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_BusLevels_GR(ctx: ContextHandle);
        fn Get_Laplacian_GR(ctx: ContextHandle);
    }
}

dss_table! {
    /// Circuit-wide options.
    pub struct SettingsApi : "ctx_Settings_" {
        fn Get_AllowDuplicates(ctx: ContextHandle) -> DssBool;
        fn Set_AllowDuplicates(ctx: ContextHandle, value: DssBool);
        fn Get_AutoBusList(ctx: ContextHandle) -> *const c_char;
        fn Set_AutoBusList(ctx: ContextHandle, value: *const c_char);
        fn Get_CktModel(ctx: ContextHandle) -> i32;
        fn Set_CktModel(ctx: ContextHandle, value: i32);
        fn Get_ControlTrace(ctx: ContextHandle) -> DssBool;
        fn Set_ControlTrace(ctx: ContextHandle, value: DssBool);
        fn Get_EmergVmaxpu(ctx: ContextHandle) -> f64;
        fn Set_EmergVmaxpu(ctx: ContextHandle, value: f64);
        fn Get_EmergVminpu(ctx: ContextHandle) -> f64;
        fn Set_EmergVminpu(ctx: ContextHandle, value: f64);
        fn Get_NormVmaxpu(ctx: ContextHandle) -> f64;
        fn Set_NormVmaxpu(ctx: ContextHandle, value: f64);
        fn Get_NormVminpu(ctx: ContextHandle) -> f64;
        fn Set_NormVminpu(ctx: ContextHandle, value: f64);
        fn Get_LossRegs_GR(ctx: ContextHandle);
        fn Set_LossRegs(ctx: ContextHandle, value: *const i32, count: i32);
        fn Get_LossWeight(ctx: ContextHandle) -> f64;
        fn Set_LossWeight(ctx: ContextHandle, value: f64);
        fn Get_Trapezoidal(ctx: ContextHandle) -> DssBool;
        fn Set_Trapezoidal(ctx: ContextHandle, value: DssBool);
        fn Get_UEregs_GR(ctx: ContextHandle);
        fn Set_UEregs(ctx: ContextHandle, value: *const i32, count: i32);
        fn Get_UEweight(ctx: ContextHandle) -> f64;
        fn Set_UEweight(ctx: ContextHandle, value: f64);
        fn Get_VoltageBases_GR(ctx: ContextHandle);
        fn Set_VoltageBases(ctx: ContextHandle, value: *const f64, count: i32);
        fn Get_ZoneLock(ctx: ContextHandle) -> DssBool;
        fn Set_ZoneLock(ctx: ContextHandle, value: DssBool);
        fn Get_PriceSignal(ctx: ContextHandle) -> f64;
        fn Set_PriceSignal(ctx: ContextHandle, value: f64);
        fn Get_PriceCurve(ctx: ContextHandle) -> *const c_char;
        fn Set_PriceCurve(ctx: ContextHandle, value: *const c_char);
        fn Get_IterateDisabled(ctx: ContextHandle) -> i32;
        fn Set_IterateDisabled(ctx: ContextHandle, value: i32);
        fn SetPropertyNameStyle(ctx: ContextHandle, style: i32);
    }
}

dss_table! {
    /// Power-delivery elements, iterated as one collection.
    pub struct PDElementsApi : "ctx_PDElements_" {
        fn Get_Name(ctx: ContextHandle) -> *const c_char;
        fn Set_Name(ctx: ContextHandle, value: *const c_char);
        fn Get_Count(ctx: ContextHandle) -> i32;
        fn Get_First(ctx: ContextHandle) -> i32;
        fn Get_Next(ctx: ContextHandle) -> i32;
        fn Get_AllNames(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_IsShunt(ctx: ContextHandle) -> DssBool;
        fn Get_FaultRate(ctx: ContextHandle) -> f64;
        fn Set_FaultRate(ctx: ContextHandle, value: f64);
        fn Get_pctPermanent(ctx: ContextHandle) -> f64;
        fn Set_pctPermanent(ctx: ContextHandle, value: f64);
        fn Get_RepairTime(ctx: ContextHandle) -> f64;
        fn Set_RepairTime(ctx: ContextHandle, value: f64);
        fn Get_Lambda(ctx: ContextHandle) -> f64;
        fn Get_AccumulatedL(ctx: ContextHandle) -> f64;
        fn Get_Numcustomers(ctx: ContextHandle) -> i32;
        fn Get_Totalcustomers(ctx: ContextHandle) -> i32;
        fn Get_ParentPDElement(ctx: ContextHandle) -> i32;
        fn Get_FromTerminal(ctx: ContextHandle) -> i32;
        fn Get_TotalMiles(ctx: ContextHandle) -> f64;
        fn Get_SectionID(ctx: ContextHandle) -> i32;
        fn Get_AllMaxCurrents_GR(ctx: ContextHandle, all_nodes: DssBool);
        fn Get_AllPctNorm_GR(ctx: ContextHandle, all_nodes: DssBool);
        fn Get_AllPctEmerg_GR(ctx: ContextHandle, all_nodes: DssBool);
        fn Get_AllCurrents_GR(ctx: ContextHandle);
        fn Get_AllCurrentsMagAng_GR(ctx: ContextHandle);
        fn Get_AllCplxSeqCurrents_GR(ctx: ContextHandle);
        fn Get_AllSeqCurrents_GR(ctx: ContextHandle);
        fn Get_AllPowers_GR(ctx: ContextHandle);
        fn Get_AllSeqPowers_GR(ctx: ContextHandle);
        fn Get_AllNumPhases_GR(ctx: ContextHandle);
        fn Get_AllNumConductors_GR(ctx: ContextHandle);
        fn Get_AllNumTerminals_GR(ctx: ContextHandle);
    }
}

dss_table! {
    /// Radial topology walker.
    pub struct TopologyApi : "ctx_Topology_" {
        fn Get_NumLoops(ctx: ContextHandle) -> i32;
        fn Get_NumIsolatedBranches(ctx: ContextHandle) -> i32;
        fn Get_NumIsolatedLoads(ctx: ContextHandle) -> i32;
        fn Get_AllLoopedPairs(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_AllIsolatedBranches(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_AllIsolatedLoads(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Get_ActiveBranch(ctx: ContextHandle) -> i32;
        fn Get_ActiveLevel(ctx: ContextHandle) -> i32;
        fn Get_First(ctx: ContextHandle) -> i32;
        fn Get_Next(ctx: ContextHandle) -> i32;
        fn Get_FirstLoad(ctx: ContextHandle) -> i32;
        fn Get_NextLoad(ctx: ContextHandle) -> i32;
        fn Get_ForwardBranch(ctx: ContextHandle) -> i32;
        fn Get_BackwardBranch(ctx: ContextHandle) -> i32;
        fn Get_LoopedBranch(ctx: ContextHandle) -> i32;
        fn Get_ParallelBranch(ctx: ContextHandle) -> i32;
        fn Get_BranchName(ctx: ContextHandle) -> *const c_char;
        fn Set_BranchName(ctx: ContextHandle, value: *const c_char);
        fn Get_BusName(ctx: ContextHandle) -> *const c_char;
        fn Set_BusName(ctx: ContextHandle, value: *const c_char);
    }
}

dss_table! {
    /// Control action queue.
    pub struct CtrlQueueApi : "ctx_CtrlQueue_" {
        fn ClearQueue(ctx: ContextHandle);
        fn ClearActions(ctx: ContextHandle);
        fn Delete(ctx: ContextHandle, handle: i32);
        fn DoAllQueue(ctx: ContextHandle);
        fn Show(ctx: ContextHandle);
        fn Get_NumActions(ctx: ContextHandle) -> i32;
        fn Set_Action(ctx: ContextHandle, index: i32);
        fn Get_ActionCode(ctx: ContextHandle) -> i32;
        fn Get_DeviceHandle(ctx: ContextHandle) -> i32;
        fn Get_PopAction(ctx: ContextHandle) -> i32;
        fn Get_QueueSize(ctx: ContextHandle) -> i32;
        fn Get_Queue(ctx: ContextHandle, result: *mut *mut *mut c_char, count: *mut i32);
        fn Push(ctx: ContextHandle, hour: i32, seconds: f64, action_code: i32, device_handle: i32) -> i32;
    }
}

dss_table! {
    /// Circuit reduction.
    pub struct ReduceCktApi : "ctx_ReduceCkt_" {
        fn Get_Zmag(ctx: ContextHandle) -> f64;
        fn Set_Zmag(ctx: ContextHandle, value: f64);
        fn Get_KeepLoad(ctx: ContextHandle) -> DssBool;
        fn Set_KeepLoad(ctx: ContextHandle, value: DssBool);
        fn Get_EditString(ctx: ContextHandle) -> *const c_char;
        fn Set_EditString(ctx: ContextHandle, value: *const c_char);
        fn Get_StartPDElement(ctx: ContextHandle) -> *const c_char;
        fn Set_StartPDElement(ctx: ContextHandle, value: *const c_char);
        fn Get_EnergyMeter(ctx: ContextHandle) -> *const c_char;
        fn Set_EnergyMeter(ctx: ContextHandle, value: *const c_char);
        fn SaveCircuit(ctx: ContextHandle, dir_or_file: *const c_char);
        fn DoDefault(ctx: ContextHandle);
        fn DoShortLines(ctx: ContextHandle);
        fn DoDangling(ctx: ContextHandle);
        fn DoLoopBreak(ctx: ContextHandle);
        fn DoParallelLines(ctx: ContextHandle);
        fn DoSwitches(ctx: ContextHandle);
        fn Do1phLaterals(ctx: ContextHandle);
        fn DoBranchRemove(ctx: ContextHandle);
    }
}

dss_table! {
    /// System admittance matrix and low-level solver hooks.
    pub struct YMatrixApi : "ctx_YMatrix_" {
        fn ZeroInjCurr(ctx: ContextHandle);
        fn GetSourceInjCurrents(ctx: ContextHandle);
        fn GetPCInjCurr(ctx: ContextHandle);
        fn BuildYMatrixD(ctx: ContextHandle, build_ops: i32, allocate_vi: i32);
        fn SetGeneratordQdV(ctx: ContextHandle);
        fn CheckConvergence(ctx: ContextHandle) -> DssBool;
        fn Get_SystemYChanged(ctx: ContextHandle) -> DssBool;
        fn Set_SystemYChanged(ctx: ContextHandle, value: DssBool);
        fn Get_UseAuxCurrents(ctx: ContextHandle) -> DssBool;
        fn Set_UseAuxCurrents(ctx: ContextHandle, value: DssBool);
        fn Get_SolverOptions(ctx: ContextHandle) -> u64;
        fn Set_SolverOptions(ctx: ContextHandle, value: u64);
        fn Get_Iteration(ctx: ContextHandle) -> i32;
        fn Set_Iteration(ctx: ContextHandle, value: i32);
        fn Get_LoadsNeedUpdating(ctx: ContextHandle) -> DssBool;
        fn Set_LoadsNeedUpdating(ctx: ContextHandle, value: DssBool);
        fn Get_SolutionInitialized(ctx: ContextHandle) -> DssBool;
        fn Set_SolutionInitialized(ctx: ContextHandle, value: DssBool);
    }
}
