use altdss_runtime::{Context, DssResult, entry};

use crate::enums::CktModels;

/// Circuit-wide options.
pub struct Settings<'a> {
    ctx: &'a Context,
}

impl<'a> Settings<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        Settings { ctx }
    }

    pub fn allow_duplicates(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, settings.Get_AllowDuplicates))
    }

    pub fn set_allow_duplicates(&self, value: bool) -> DssResult<()> {
        self.ctx.set_bool(entry!(self.ctx, settings.Set_AllowDuplicates), value)
    }

    pub fn auto_bus_list(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, settings.Get_AutoBusList))
    }

    pub fn set_auto_bus_list(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, settings.Set_AutoBusList), value)
    }

    pub fn ckt_model(&self) -> DssResult<CktModels> {
        self.ctx.get(entry!(self.ctx, settings.Get_CktModel)).and_then(CktModels::try_from)
    }

    pub fn set_ckt_model(&self, value: CktModels) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, settings.Set_CktModel), value as i32)
    }

    pub fn control_trace(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, settings.Get_ControlTrace))
    }

    pub fn set_control_trace(&self, value: bool) -> DssResult<()> {
        self.ctx.set_bool(entry!(self.ctx, settings.Set_ControlTrace), value)
    }

    pub fn emerg_vmaxpu(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, settings.Get_EmergVmaxpu))
    }

    pub fn set_emerg_vmaxpu(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, settings.Set_EmergVmaxpu), value)
    }

    pub fn emerg_vminpu(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, settings.Get_EmergVminpu))
    }

    pub fn set_emerg_vminpu(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, settings.Set_EmergVminpu), value)
    }

    pub fn norm_vmaxpu(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, settings.Get_NormVmaxpu))
    }

    pub fn set_norm_vmaxpu(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, settings.Set_NormVmaxpu), value)
    }

    pub fn norm_vminpu(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, settings.Get_NormVminpu))
    }

    pub fn set_norm_vminpu(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, settings.Set_NormVminpu), value)
    }

    pub fn loss_regs(&self) -> DssResult<Vec<i32>> {
        self.ctx.get_i32s(entry!(self.ctx, settings.Get_LossRegs_GR))
    }

    pub fn set_loss_regs(&self, value: &[i32]) -> DssResult<()> {
        self.ctx.set_array(entry!(self.ctx, settings.Set_LossRegs), value)
    }

    pub fn loss_weight(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, settings.Get_LossWeight))
    }

    pub fn set_loss_weight(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, settings.Set_LossWeight), value)
    }

    pub fn trapezoidal(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, settings.Get_Trapezoidal))
    }

    pub fn set_trapezoidal(&self, value: bool) -> DssResult<()> {
        self.ctx.set_bool(entry!(self.ctx, settings.Set_Trapezoidal), value)
    }

    pub fn ue_regs(&self) -> DssResult<Vec<i32>> {
        self.ctx.get_i32s(entry!(self.ctx, settings.Get_UEregs_GR))
    }

    pub fn set_ue_regs(&self, value: &[i32]) -> DssResult<()> {
        self.ctx.set_array(entry!(self.ctx, settings.Set_UEregs), value)
    }

    pub fn ue_weight(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, settings.Get_UEweight))
    }

    pub fn set_ue_weight(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, settings.Set_UEweight), value)
    }

    /// Base voltages (kV, line to line) used by `calcvoltagebases`.
    pub fn voltage_bases(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, settings.Get_VoltageBases_GR))
    }

    pub fn set_voltage_bases(&self, value: &[f64]) -> DssResult<()> {
        self.ctx.set_array(entry!(self.ctx, settings.Set_VoltageBases), value)
    }

    pub fn zone_lock(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, settings.Get_ZoneLock))
    }

    pub fn set_zone_lock(&self, value: bool) -> DssResult<()> {
        self.ctx.set_bool(entry!(self.ctx, settings.Set_ZoneLock), value)
    }

    pub fn price_signal(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, settings.Get_PriceSignal))
    }

    pub fn set_price_signal(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, settings.Set_PriceSignal), value)
    }

    pub fn price_curve(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, settings.Get_PriceCurve))
    }

    pub fn set_price_curve(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, settings.Set_PriceCurve), value)
    }

    /// Whether First/Next also visit disabled elements.
    pub fn iterate_disabled(&self) -> DssResult<bool> {
        Ok(self.ctx.get(entry!(self.ctx, settings.Get_IterateDisabled))? != 0)
    }

    pub fn set_iterate_disabled(&self, value: bool) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, settings.Set_IterateDisabled), i32::from(value))
    }

    /// Property-name casing used in exported scripts and JSON.
    pub fn set_property_name_style(&self, style: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, settings.SetPropertyNameStyle), style)
    }
}
