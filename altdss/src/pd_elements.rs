use altdss_ffi::to_dss_bool;
use altdss_runtime::{Complex64, Context, DssResult, entry};

use crate::collection::{NameIter, track_active_element};

/// Every power-delivery element of the circuit as one collection.
pub struct PDElements<'a> {
    ctx: &'a Context,
}

impl<'a> PDElements<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        PDElements { ctx }
    }

    pub fn name(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, pd_elements.Get_Name))
    }

    pub fn count(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, pd_elements.Get_Count))
    }

    pub fn all_names(&self) -> DssResult<Vec<String>> {
        self.ctx.get_strings(entry!(self.ctx, pd_elements.Get_AllNames))
    }

    pub fn is_shunt(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, pd_elements.Get_IsShunt))
    }

    pub fn fault_rate(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, pd_elements.Get_FaultRate))
    }

    pub fn set_fault_rate(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, pd_elements.Set_FaultRate), value)
    }

    pub fn pct_permanent(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, pd_elements.Get_pctPermanent))
    }

    pub fn set_pct_permanent(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, pd_elements.Set_pctPermanent), value)
    }

    pub fn repair_time(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, pd_elements.Get_RepairTime))
    }

    pub fn set_repair_time(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, pd_elements.Set_RepairTime), value)
    }

    pub fn lambda(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, pd_elements.Get_Lambda))
    }

    pub fn accumulated_l(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, pd_elements.Get_AccumulatedL))
    }

    pub fn num_customers(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, pd_elements.Get_Numcustomers))
    }

    pub fn total_customers(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, pd_elements.Get_Totalcustomers))
    }

    pub fn from_terminal(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, pd_elements.Get_FromTerminal))
    }

    pub fn total_miles(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, pd_elements.Get_TotalMiles))
    }

    pub fn section_id(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, pd_elements.Get_SectionID))
    }

    pub fn all_currents(&self) -> DssResult<Vec<Complex64>> {
        self.ctx.get_complexes(entry!(self.ctx, pd_elements.Get_AllCurrents_GR))
    }

    pub fn all_currents_mag_ang(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, pd_elements.Get_AllCurrentsMagAng_GR))
    }

    pub fn all_cplx_seq_currents(&self) -> DssResult<Vec<Complex64>> {
        self.ctx.get_complexes(entry!(self.ctx, pd_elements.Get_AllCplxSeqCurrents_GR))
    }

    pub fn all_seq_currents(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, pd_elements.Get_AllSeqCurrents_GR))
    }

    pub fn all_powers(&self) -> DssResult<Vec<Complex64>> {
        self.ctx.get_complexes(entry!(self.ctx, pd_elements.Get_AllPowers_GR))
    }

    pub fn all_seq_powers(&self) -> DssResult<Vec<Complex64>> {
        self.ctx.get_complexes(entry!(self.ctx, pd_elements.Get_AllSeqPowers_GR))
    }

    pub fn all_num_phases(&self) -> DssResult<Vec<i32>> {
        self.ctx.get_i32s(entry!(self.ctx, pd_elements.Get_AllNumPhases_GR))
    }

    pub fn all_num_conductors(&self) -> DssResult<Vec<i32>> {
        self.ctx.get_i32s(entry!(self.ctx, pd_elements.Get_AllNumConductors_GR))
    }

    pub fn all_num_terminals(&self) -> DssResult<Vec<i32>> {
        self.ctx.get_i32s(entry!(self.ctx, pd_elements.Get_AllNumTerminals_GR))
    }

    /// Select the first PD element. Unlike the per-class collections the
    /// class of the selected element is only known by name.
    pub fn first(&self) -> DssResult<i32> {
        let moved = self.ctx.get(entry!(self.ctx, pd_elements.Get_First))?;
        track_active_element(self.ctx, moved)
    }

    pub fn next(&self) -> DssResult<i32> {
        let moved = self.ctx.get(entry!(self.ctx, pd_elements.Get_Next))?;
        track_active_element(self.ctx, moved)
    }

    /// Select a PD element by full name.
    pub fn set_name(&self, name: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, pd_elements.Set_Name), name)?;
        track_active_element(self.ctx, 1).map(drop)
    }

    pub fn parent_pd_element(&self) -> DssResult<i32> {
        let moved = self.ctx.get(entry!(self.ctx, pd_elements.Get_ParentPDElement))?;
        track_active_element(self.ctx, moved)
    }

    pub fn iter(&self) -> NameIter<'a> {
        NameIter::new(
            self.ctx,
            |ctx, first| {
                let pd = PDElements::new(ctx);
                if first { pd.first() } else { pd.next() }
            },
            entry!(self.ctx, pd_elements.Get_Name),
        )
    }

    /// Maximum current magnitude of every PD element, over all conductors
    /// when `all_nodes` is set, otherwise over phase conductors only.
    pub fn all_max_currents(&self, all_nodes: bool) -> DssResult<Vec<f64>> {
        self.ctx.fill_f64s(entry!(self.ctx, pd_elements.Get_AllMaxCurrents_GR), |f, ctx| unsafe {
            f(ctx, to_dss_bool(all_nodes))
        })
    }

    pub fn all_pct_norm(&self, all_nodes: bool) -> DssResult<Vec<f64>> {
        self.ctx.fill_f64s(entry!(self.ctx, pd_elements.Get_AllPctNorm_GR), |f, ctx| unsafe {
            f(ctx, to_dss_bool(all_nodes))
        })
    }

    pub fn all_pct_emerg(&self, all_nodes: bool) -> DssResult<Vec<f64>> {
        self.ctx.fill_f64s(entry!(self.ctx, pd_elements.Get_AllPctEmerg_GR), |f, ctx| unsafe {
            f(ctx, to_dss_bool(all_nodes))
        })
    }
}
