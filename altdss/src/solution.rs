use altdss_runtime::{Context, DssResult, entry};

use crate::enums::{ControlModes, SolutionAlgorithms, SolutionLoadModels, SolveModes};

/// Solution control for the active circuit.
pub struct Solution<'a> {
    ctx: &'a Context,
}

impl<'a> Solution<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        Solution { ctx }
    }

    /// Solve the circuit in the current mode.
    pub fn solve(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, solution.Solve))
    }

    pub fn solve_all(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, solution.SolveAll))
    }

    pub fn solve_direct(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, solution.SolveDirect))
    }

    pub fn solve_pflow(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, solution.SolvePflow))
    }

    pub fn solve_no_control(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, solution.SolveNoControl))
    }

    pub fn solve_plus_control(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, solution.SolvePlusControl))
    }

    pub fn solve_snap(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, solution.SolveSnap))
    }

    pub fn check_controls(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, solution.CheckControls))
    }

    pub fn check_fault_status(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, solution.CheckFaultStatus))
    }

    pub fn do_control_actions(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, solution.DoControlActions))
    }

    pub fn finish_time_step(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, solution.FinishTimeStep))
    }

    pub fn init_snap(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, solution.InitSnap))
    }

    pub fn sample_control_devices(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, solution.SampleControlDevices))
    }

    pub fn sample_do_control_actions(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, solution.Sample_DoControlActions))
    }

    pub fn cleanup(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, solution.Cleanup))
    }

    pub fn mode(&self) -> DssResult<SolveModes> {
        self.ctx.get(entry!(self.ctx, solution.Get_Mode)).and_then(SolveModes::try_from)
    }

    pub fn set_mode(&self, value: SolveModes) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, solution.Set_Mode), value as i32)
    }

    pub fn mode_id(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, solution.Get_ModeID))
    }

    pub fn number(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, solution.Get_Number))
    }

    pub fn set_number(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, solution.Set_Number), value)
    }

    pub fn hour(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, solution.Get_Hour))
    }

    pub fn set_hour(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, solution.Set_Hour), value)
    }

    pub fn seconds(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, solution.Get_Seconds))
    }

    pub fn set_seconds(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, solution.Set_Seconds), value)
    }

    /// Simulation time in hours, fractional.
    pub fn dbl_hour(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, solution.Get_dblHour))
    }

    pub fn set_dbl_hour(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, solution.Set_dblHour), value)
    }

    pub fn step_size(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, solution.Get_StepSize))
    }

    pub fn set_step_size(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, solution.Set_StepSize), value)
    }

    pub fn interval_hrs(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, solution.Get_IntervalHrs))
    }

    pub fn set_interval_hrs(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, solution.Set_IntervalHrs), value)
    }

    pub fn year(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, solution.Get_Year))
    }

    pub fn set_year(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, solution.Set_Year), value)
    }

    /// Whether the last solution converged.
    pub fn converged(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, solution.Get_Converged))
    }

    pub fn set_converged(&self, value: bool) -> DssResult<()> {
        self.ctx.set_bool(entry!(self.ctx, solution.Set_Converged), value)
    }

    pub fn iterations(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, solution.Get_Iterations))
    }

    pub fn total_iterations(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, solution.Get_TotalIterations))
    }

    pub fn most_iterations_done(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, solution.Get_MostIterationsDone))
    }

    pub fn max_iterations(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, solution.Get_MaxIterations))
    }

    pub fn set_max_iterations(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, solution.Set_MaxIterations), value)
    }

    pub fn min_iterations(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, solution.Get_MinIterations))
    }

    pub fn set_min_iterations(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, solution.Set_MinIterations), value)
    }

    pub fn max_control_iterations(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, solution.Get_MaxControlIterations))
    }

    pub fn set_max_control_iterations(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, solution.Set_MaxControlIterations), value)
    }

    pub fn control_iterations(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, solution.Get_ControlIterations))
    }

    pub fn set_control_iterations(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, solution.Set_ControlIterations), value)
    }

    pub fn tolerance(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, solution.Get_Tolerance))
    }

    pub fn set_tolerance(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, solution.Set_Tolerance), value)
    }

    pub fn load_mult(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, solution.Get_LoadMult))
    }

    pub fn set_load_mult(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, solution.Set_LoadMult), value)
    }

    pub fn frequency(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, solution.Get_Frequency))
    }

    pub fn set_frequency(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, solution.Set_Frequency), value)
    }

    pub fn cap_kvar(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, solution.Get_Capkvar))
    }

    pub fn set_cap_kvar(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, solution.Set_Capkvar), value)
    }

    pub fn control_mode(&self) -> DssResult<ControlModes> {
        self.ctx.get(entry!(self.ctx, solution.Get_ControlMode)).and_then(ControlModes::try_from)
    }

    pub fn set_control_mode(&self, value: ControlModes) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, solution.Set_ControlMode), value as i32)
    }

    pub fn algorithm(&self) -> DssResult<SolutionAlgorithms> {
        self.ctx.get(entry!(self.ctx, solution.Get_Algorithm)).and_then(SolutionAlgorithms::try_from)
    }

    pub fn set_algorithm(&self, value: SolutionAlgorithms) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, solution.Set_Algorithm), value as i32)
    }

    pub fn load_model(&self) -> DssResult<SolutionLoadModels> {
        self.ctx.get(entry!(self.ctx, solution.Get_LoadModel)).and_then(SolutionLoadModels::try_from)
    }

    pub fn set_load_model(&self, value: SolutionLoadModels) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, solution.Set_LoadModel), value as i32)
    }

    pub fn random(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, solution.Get_Random))
    }

    pub fn set_random(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, solution.Set_Random), value)
    }

    pub fn add_type(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, solution.Get_AddType))
    }

    pub fn set_add_type(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, solution.Set_AddType), value)
    }

    pub fn gen_kw(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, solution.Get_GenkW))
    }

    pub fn set_gen_kw(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, solution.Set_GenkW), value)
    }

    pub fn gen_pf(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, solution.Get_GenPF))
    }

    pub fn set_gen_pf(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, solution.Set_GenPF), value)
    }

    pub fn gen_mult(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, solution.Get_GenMult))
    }

    pub fn set_gen_mult(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, solution.Set_GenMult), value)
    }

    pub fn pct_growth(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, solution.Get_pctGrowth))
    }

    pub fn set_pct_growth(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, solution.Set_pctGrowth), value)
    }

    pub fn default_daily(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, solution.Get_DefaultDaily))
    }

    pub fn set_default_daily(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, solution.Set_DefaultDaily), value)
    }

    pub fn default_yearly(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, solution.Get_DefaultYearly))
    }

    pub fn set_default_yearly(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, solution.Set_DefaultYearly), value)
    }

    pub fn ld_curve(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, solution.Get_LDCurve))
    }

    pub fn set_ld_curve(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, solution.Set_LDCurve), value)
    }

    /// Duration of the last solve, microseconds.
    pub fn process_time(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, solution.Get_Process_Time))
    }

    pub fn time_of_step(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, solution.Get_Time_of_Step))
    }

    pub fn total_time(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, solution.Get_Total_Time))
    }

    pub fn set_total_time(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, solution.Set_Total_Time), value)
    }

    pub fn system_y_changed(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, solution.Get_SystemYChanged))
    }

    pub fn event_log(&self) -> DssResult<Vec<String>> {
        self.ctx.get_strings(entry!(self.ctx, solution.Get_EventLog))
    }

    /// Incidence matrix in sparse triplet form (row, column, value).
    pub fn inc_matrix(&self) -> DssResult<Vec<i32>> {
        self.ctx.get_i32s(entry!(self.ctx, solution.Get_IncMatrix_GR))
    }

    pub fn inc_matrix_rows(&self) -> DssResult<Vec<String>> {
        self.ctx.get_strings(entry!(self.ctx, solution.Get_IncMatrixRows))
    }

    pub fn inc_matrix_cols(&self) -> DssResult<Vec<String>> {
        self.ctx.get_strings(entry!(self.ctx, solution.Get_IncMatrixCols))
    }

    pub fn bus_levels(&self) -> DssResult<Vec<i32>> {
        self.ctx.get_i32s(entry!(self.ctx, solution.Get_BusLevels_GR))
    }

    pub fn laplacian(&self) -> DssResult<Vec<i32>> {
        self.ctx.get_i32s(entry!(self.ctx, solution.Get_Laplacian_GR))
    }

    /// Rebuild the system admittance matrix.
    pub fn build_y_matrix(&self, build_option: i32, allocate_vi: bool) -> DssResult<()> {
        self.ctx.invoke(entry!(self.ctx, solution.BuildYMatrix), |f, ctx| unsafe {
            f(ctx, build_option, i32::from(allocate_vi))
        })
    }
}
