use altdss_runtime::{Context, DssResult, entry};

/// Low-level access to the system admittance matrix and solver state.
pub struct YMatrix<'a> {
    ctx: &'a Context,
}

impl<'a> YMatrix<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        YMatrix { ctx }
    }

    pub fn zero_inj_curr(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, y_matrix.ZeroInjCurr))
    }

    pub fn get_source_inj_currents(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, y_matrix.GetSourceInjCurrents))
    }

    pub fn get_pc_inj_curr(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, y_matrix.GetPCInjCurr))
    }

    pub fn set_generator_dqdv(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, y_matrix.SetGeneratordQdV))
    }

    pub fn check_convergence(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, y_matrix.CheckConvergence))
    }

    pub fn system_y_changed(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, y_matrix.Get_SystemYChanged))
    }

    pub fn set_system_y_changed(&self, value: bool) -> DssResult<()> {
        self.ctx.set_bool(entry!(self.ctx, y_matrix.Set_SystemYChanged), value)
    }

    pub fn use_aux_currents(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, y_matrix.Get_UseAuxCurrents))
    }

    pub fn set_use_aux_currents(&self, value: bool) -> DssResult<()> {
        self.ctx.set_bool(entry!(self.ctx, y_matrix.Set_UseAuxCurrents), value)
    }

    pub fn solver_options(&self) -> DssResult<u64> {
        self.ctx.get(entry!(self.ctx, y_matrix.Get_SolverOptions))
    }

    pub fn set_solver_options(&self, value: u64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, y_matrix.Set_SolverOptions), value)
    }

    pub fn iteration(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, y_matrix.Get_Iteration))
    }

    pub fn set_iteration(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, y_matrix.Set_Iteration), value)
    }

    pub fn loads_need_updating(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, y_matrix.Get_LoadsNeedUpdating))
    }

    pub fn set_loads_need_updating(&self, value: bool) -> DssResult<()> {
        self.ctx.set_bool(entry!(self.ctx, y_matrix.Set_LoadsNeedUpdating), value)
    }

    pub fn solution_initialized(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, y_matrix.Get_SolutionInitialized))
    }

    pub fn set_solution_initialized(&self, value: bool) -> DssResult<()> {
        self.ctx.set_bool(entry!(self.ctx, y_matrix.Set_SolutionInitialized), value)
    }

    pub fn build_y_matrix_d(&self, build_ops: i32, allocate_vi: bool) -> DssResult<()> {
        self.ctx.invoke(entry!(self.ctx, y_matrix.BuildYMatrixD), |f, ctx| unsafe {
            f(ctx, build_ops, i32::from(allocate_vi))
        })
    }
}
