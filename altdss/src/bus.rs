use altdss_runtime::{Complex64, Context, DssResult, Selection, entry};

/// The active bus, selected with `Circuit::set_active_bus`.
pub struct Bus<'a> {
    ctx: &'a Context,
}

impl<'a> Bus<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        Bus { ctx }
    }

    pub fn name(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, bus.Get_Name))
    }

    pub fn num_nodes(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, bus.Get_NumNodes))
    }

    /// Line-to-neutral base voltage, kV.
    pub fn kv_base(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, bus.Get_kVBase))
    }

    pub fn distance(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, bus.Get_Distance))
    }

    pub fn x(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, bus.Get_x))
    }

    pub fn set_x(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, bus.Set_x), value)
    }

    pub fn y(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, bus.Get_y))
    }

    pub fn set_y(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, bus.Set_y), value)
    }

    pub fn coord_defined(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, bus.Get_Coorddefined))
    }

    /// Complex node voltages, volts.
    pub fn voltages(&self) -> DssResult<Vec<Complex64>> {
        self.ctx.get_complexes(entry!(self.ctx, bus.Get_Voltages_GR))
    }

    pub fn vmag_angle(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, bus.Get_VMagAngle_GR))
    }

    pub fn pu_voltages(&self) -> DssResult<Vec<Complex64>> {
        self.ctx.get_complexes(entry!(self.ctx, bus.Get_puVoltages_GR))
    }

    pub fn pu_vmag_angle(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, bus.Get_puVmagAngle_GR))
    }

    pub fn vll(&self) -> DssResult<Vec<Complex64>> {
        self.ctx.get_complexes(entry!(self.ctx, bus.Get_VLL_GR))
    }

    pub fn pu_vll(&self) -> DssResult<Vec<Complex64>> {
        self.ctx.get_complexes(entry!(self.ctx, bus.Get_puVLL_GR))
    }

    /// Node numbers in the same order as `voltages`.
    pub fn nodes(&self) -> DssResult<Vec<i32>> {
        self.ctx.get_i32s(entry!(self.ctx, bus.Get_Nodes_GR))
    }

    pub fn seq_voltages(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, bus.Get_SeqVoltages_GR))
    }

    pub fn cplx_seq_voltages(&self) -> DssResult<Vec<Complex64>> {
        self.ctx.get_complexes(entry!(self.ctx, bus.Get_CplxSeqVoltages_GR))
    }

    pub fn zsc0(&self) -> DssResult<Complex64> {
        self.ctx.get_complex(entry!(self.ctx, bus.Get_Zsc0_GR))
    }

    pub fn zsc1(&self) -> DssResult<Complex64> {
        self.ctx.get_complex(entry!(self.ctx, bus.Get_Zsc1_GR))
    }

    pub fn zsc_matrix(&self) -> DssResult<Vec<Complex64>> {
        self.ctx.get_complexes(entry!(self.ctx, bus.Get_ZscMatrix_GR))
    }

    pub fn ysc_matrix(&self) -> DssResult<Vec<Complex64>> {
        self.ctx.get_complexes(entry!(self.ctx, bus.Get_YscMatrix_GR))
    }

    pub fn zsc012_matrix(&self) -> DssResult<Vec<Complex64>> {
        self.ctx.get_complexes(entry!(self.ctx, bus.Get_ZSC012Matrix_GR))
    }

    pub fn isc(&self) -> DssResult<Vec<Complex64>> {
        self.ctx.get_complexes(entry!(self.ctx, bus.Get_Isc_GR))
    }

    pub fn voc(&self) -> DssResult<Vec<Complex64>> {
        self.ctx.get_complexes(entry!(self.ctx, bus.Get_Voc_GR))
    }

    pub fn lambda(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, bus.Get_Lambda))
    }

    pub fn n_interrupts(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, bus.Get_N_interrupts))
    }

    pub fn int_duration(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, bus.Get_Int_Duration))
    }

    pub fn cust_interrupts(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, bus.Get_Cust_Interrupts))
    }

    pub fn cust_duration(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, bus.Get_Cust_Duration))
    }

    pub fn n_customers(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, bus.Get_N_Customers))
    }

    pub fn total_miles(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, bus.Get_TotalMiles))
    }

    pub fn section_id(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, bus.Get_SectionID))
    }

    pub fn line_list(&self) -> DssResult<Vec<String>> {
        self.ctx.get_strings(entry!(self.ctx, bus.Get_LineList))
    }

    pub fn load_list(&self) -> DssResult<Vec<String>> {
        self.ctx.get_strings(entry!(self.ctx, bus.Get_LoadList))
    }

    pub fn all_pce_at_bus(&self) -> DssResult<Vec<String>> {
        self.ctx.get_strings(entry!(self.ctx, bus.Get_AllPCEatBus))
    }

    pub fn all_pde_at_bus(&self) -> DssResult<Vec<String>> {
        self.ctx.get_strings(entry!(self.ctx, bus.Get_AllPDEatBus))
    }

    /// Recompute the short-circuit matrices for this bus.
    pub fn zsc_refresh(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, bus.ZscRefresh))
    }

    /// Smallest node number at this bus not yet in use, starting at `start`.
    pub fn unique_node_number(&self, start: i32) -> DssResult<i32> {
        self.ctx.invoke(entry!(self.ctx, bus.GetUniqueNodeNumber), |f, ctx| unsafe {
            f(ctx, start)
        })
    }

    /// The bus the last selection made active.
    pub fn selection(&self) -> Option<Selection> {
        self.ctx.active_bus()
    }
}
