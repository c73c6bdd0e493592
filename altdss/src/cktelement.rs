use std::ffi::CString;

use altdss_runtime::{Complex64, Context, DssResult, Selection, entry};

use crate::enums::OCPDevType;

/// The active circuit element.
///
/// Whichever proxy selected an element last decides what this one reads.
/// [`selection`](Self::selection) tells which that was.
pub struct CktElement<'a> {
    ctx: &'a Context,
}

impl<'a> CktElement<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        CktElement { ctx }
    }

    /// Full name, `Class.name`.
    pub fn name(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, ckt_element.Get_Name))
    }

    pub fn num_terminals(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, ckt_element.Get_NumTerminals))
    }

    pub fn num_conductors(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, ckt_element.Get_NumConductors))
    }

    pub fn num_phases(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, ckt_element.Get_NumPhases))
    }

    pub fn bus_names(&self) -> DssResult<Vec<String>> {
        self.ctx.get_strings(entry!(self.ctx, ckt_element.Get_BusNames))
    }

    pub fn set_bus_names<S: AsRef<str>>(&self, value: &[S]) -> DssResult<()> {
        self.ctx.set_strings(entry!(self.ctx, ckt_element.Set_BusNames), value)
    }

    pub fn enabled(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, ckt_element.Get_Enabled))
    }

    pub fn set_enabled(&self, value: bool) -> DssResult<()> {
        self.ctx.set_bool(entry!(self.ctx, ckt_element.Set_Enabled), value)
    }

    pub fn voltages(&self) -> DssResult<Vec<Complex64>> {
        self.ctx.get_complexes(entry!(self.ctx, ckt_element.Get_Voltages_GR))
    }

    pub fn voltages_mag_ang(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, ckt_element.Get_VoltagesMagAng_GR))
    }

    pub fn currents(&self) -> DssResult<Vec<Complex64>> {
        self.ctx.get_complexes(entry!(self.ctx, ckt_element.Get_Currents_GR))
    }

    pub fn currents_mag_ang(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, ckt_element.Get_CurrentsMagAng_GR))
    }

    pub fn powers(&self) -> DssResult<Vec<Complex64>> {
        self.ctx.get_complexes(entry!(self.ctx, ckt_element.Get_Powers_GR))
    }

    pub fn total_powers(&self) -> DssResult<Vec<Complex64>> {
        self.ctx.get_complexes(entry!(self.ctx, ckt_element.Get_TotalPowers_GR))
    }

    /// Total losses of the element, VA.
    pub fn losses(&self) -> DssResult<Complex64> {
        self.ctx.get_complex(entry!(self.ctx, ckt_element.Get_Losses_GR))
    }

    pub fn phase_losses(&self) -> DssResult<Vec<Complex64>> {
        self.ctx.get_complexes(entry!(self.ctx, ckt_element.Get_PhaseLosses_GR))
    }

    pub fn seq_voltages(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, ckt_element.Get_SeqVoltages_GR))
    }

    pub fn cplx_seq_voltages(&self) -> DssResult<Vec<Complex64>> {
        self.ctx.get_complexes(entry!(self.ctx, ckt_element.Get_CplxSeqVoltages_GR))
    }

    pub fn seq_currents(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, ckt_element.Get_SeqCurrents_GR))
    }

    pub fn cplx_seq_currents(&self) -> DssResult<Vec<Complex64>> {
        self.ctx.get_complexes(entry!(self.ctx, ckt_element.Get_CplxSeqCurrents_GR))
    }

    pub fn seq_powers(&self) -> DssResult<Vec<Complex64>> {
        self.ctx.get_complexes(entry!(self.ctx, ckt_element.Get_SeqPowers_GR))
    }

    pub fn residuals(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, ckt_element.Get_Residuals_GR))
    }

    /// Primitive admittance matrix, row order.
    pub fn yprim(&self) -> DssResult<Vec<Complex64>> {
        self.ctx.get_complexes(entry!(self.ctx, ckt_element.Get_Yprim_GR))
    }

    pub fn node_order(&self) -> DssResult<Vec<i32>> {
        self.ctx.get_i32s(entry!(self.ctx, ckt_element.Get_NodeOrder_GR))
    }

    /// Node reference array of the element.
    pub fn node_ref(&self) -> DssResult<Vec<i32>> {
        self.ctx.get_i32s(entry!(self.ctx, ckt_element.Get_NodeRef_GR))
    }

    pub fn has_switch_control(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, ckt_element.Get_HasSwitchControl))
    }

    pub fn has_volt_control(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, ckt_element.Get_HasVoltControl))
    }

    pub fn has_ocp_device(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, ckt_element.Get_HasOCPDevice))
    }

    pub fn num_controls(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, ckt_element.Get_NumControls))
    }

    pub fn ocp_dev_index(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, ckt_element.Get_OCPDevIndex))
    }

    pub fn ocp_dev_type(&self) -> DssResult<OCPDevType> {
        self.ctx.get(entry!(self.ctx, ckt_element.Get_OCPDevType)).and_then(OCPDevType::try_from)
    }

    pub fn emerg_amps(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, ckt_element.Get_EmergAmps))
    }

    pub fn set_emerg_amps(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, ckt_element.Set_EmergAmps), value)
    }

    pub fn normal_amps(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, ckt_element.Get_NormalAmps))
    }

    pub fn set_normal_amps(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, ckt_element.Set_NormalAmps), value)
    }

    pub fn display_name(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, ckt_element.Get_DisplayName))
    }

    pub fn set_display_name(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, ckt_element.Set_DisplayName), value)
    }

    pub fn guid(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, ckt_element.Get_GUID))
    }

    pub fn handle(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, ckt_element.Get_Handle))
    }

    pub fn energy_meter(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, ckt_element.Get_EnergyMeter))
    }

    pub fn is_isolated(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, ckt_element.Get_IsIsolated))
    }

    pub fn all_property_names(&self) -> DssResult<Vec<String>> {
        self.ctx.get_strings(entry!(self.ctx, ckt_element.Get_AllPropertyNames))
    }

    pub fn num_properties(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, ckt_element.Get_NumProperties))
    }

    pub fn all_variable_names(&self) -> DssResult<Vec<String>> {
        self.ctx.get_strings(entry!(self.ctx, ckt_element.Get_AllVariableNames))
    }

    pub fn all_variable_values(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, ckt_element.Get_AllVariableValues_GR))
    }

    /// The element the last selection made active, as mirrored by the binding.
    pub fn selection(&self) -> Option<Selection> {
        self.ctx.active_element()
    }

    /// Full name of the `index`-th (1-based) controller of this element.
    pub fn controller(&self, index: i32) -> DssResult<String> {
        self.ctx.invoke_string(entry!(self.ctx, ckt_element.Get_Controller), |f, ctx| unsafe {
            f(ctx, index)
        })
    }

    /// Open `phase` of `terminal`; phase 0 opens every phase.
    pub fn open(&self, terminal: i32, phase: i32) -> DssResult<()> {
        self.ctx.invoke(entry!(self.ctx, ckt_element.Open), |f, ctx| unsafe {
            f(ctx, terminal, phase)
        })
    }

    pub fn close(&self, terminal: i32, phase: i32) -> DssResult<()> {
        self.ctx.invoke(entry!(self.ctx, ckt_element.Close), |f, ctx| unsafe {
            f(ctx, terminal, phase)
        })
    }

    pub fn is_open(&self, terminal: i32, phase: i32) -> DssResult<bool> {
        let open = self.ctx.invoke(entry!(self.ctx, ckt_element.IsOpen), |f, ctx| unsafe {
            f(ctx, terminal, phase)
        })?;
        Ok(open != 0)
    }

    /// Value of the state variable `name`, `None` when the element has no
    /// such variable.
    pub fn variable(&self, name: &str) -> DssResult<Option<f64>> {
        let c_name = CString::new(name)?;
        let mut code = 0;
        let value = self.ctx.invoke(entry!(self.ctx, ckt_element.Get_Variable), |f, ctx| unsafe {
            f(ctx, c_name.as_ptr(), &mut code)
        })?;
        Ok((code == 0).then_some(value))
    }

    /// Value of the state variable at 1-based `index`.
    pub fn variable_by_index(&self, index: i32) -> DssResult<Option<f64>> {
        let mut code = 0;
        let value = self.ctx.invoke(entry!(self.ctx, ckt_element.Get_Variablei), |f, ctx| unsafe {
            f(ctx, index, &mut code)
        })?;
        Ok((code == 0).then_some(value))
    }

    /// Set a state variable. Returns false when the element has no such variable.
    pub fn set_variable(&self, name: &str, value: f64) -> DssResult<bool> {
        let c_name = CString::new(name)?;
        let mut code = 0;
        self.ctx.invoke(entry!(self.ctx, ckt_element.Set_Variable), |f, ctx| unsafe {
            f(ctx, c_name.as_ptr(), &mut code, value)
        })?;
        Ok(code == 0)
    }

    pub fn set_variable_by_index(&self, index: i32, value: f64) -> DssResult<bool> {
        let mut code = 0;
        self.ctx.invoke(entry!(self.ctx, ckt_element.Set_Variablei), |f, ctx| unsafe {
            f(ctx, index, &mut code, value)
        })?;
        Ok(code == 0)
    }
}
