use altdss_runtime::{Context, DssResult, EntityKind, entry};

use crate::collection::collection_methods;

/// Voltage regulator controls.
pub struct RegControls<'a> {
    ctx: &'a Context,
}

impl<'a> RegControls<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        RegControls { ctx }
    }

    collection_methods!(RegControls, reg_controls, EntityKind::RegControl);

    pub fn transformer(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, reg_controls.Get_Transformer))
    }

    pub fn set_transformer(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, reg_controls.Set_Transformer), value)
    }

    pub fn winding(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, reg_controls.Get_Winding))
    }

    pub fn set_winding(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, reg_controls.Set_Winding), value)
    }

    pub fn monitored_bus(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, reg_controls.Get_MonitoredBus))
    }

    pub fn set_monitored_bus(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, reg_controls.Set_MonitoredBus), value)
    }

    pub fn ct_primary(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, reg_controls.Get_CTPrimary))
    }

    pub fn set_ct_primary(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, reg_controls.Set_CTPrimary), value)
    }

    pub fn pt_ratio(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, reg_controls.Get_PTratio))
    }

    pub fn set_pt_ratio(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, reg_controls.Set_PTratio), value)
    }

    pub fn delay(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, reg_controls.Get_Delay))
    }

    pub fn set_delay(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, reg_controls.Set_Delay), value)
    }

    pub fn tap_delay(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, reg_controls.Get_TapDelay))
    }

    pub fn set_tap_delay(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, reg_controls.Set_TapDelay), value)
    }

    pub fn forward_band(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, reg_controls.Get_ForwardBand))
    }

    pub fn set_forward_band(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, reg_controls.Set_ForwardBand), value)
    }

    pub fn forward_r(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, reg_controls.Get_ForwardR))
    }

    pub fn set_forward_r(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, reg_controls.Set_ForwardR), value)
    }

    pub fn forward_vreg(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, reg_controls.Get_ForwardVreg))
    }

    pub fn set_forward_vreg(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, reg_controls.Set_ForwardVreg), value)
    }

    pub fn forward_x(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, reg_controls.Get_ForwardX))
    }

    pub fn set_forward_x(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, reg_controls.Set_ForwardX), value)
    }

    pub fn reverse_band(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, reg_controls.Get_ReverseBand))
    }

    pub fn set_reverse_band(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, reg_controls.Set_ReverseBand), value)
    }

    pub fn reverse_r(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, reg_controls.Get_ReverseR))
    }

    pub fn set_reverse_r(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, reg_controls.Set_ReverseR), value)
    }

    pub fn reverse_vreg(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, reg_controls.Get_ReverseVreg))
    }

    pub fn set_reverse_vreg(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, reg_controls.Set_ReverseVreg), value)
    }

    pub fn reverse_x(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, reg_controls.Get_ReverseX))
    }

    pub fn set_reverse_x(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, reg_controls.Set_ReverseX), value)
    }

    pub fn is_inverse_time(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, reg_controls.Get_IsInverseTime))
    }

    pub fn set_is_inverse_time(&self, value: bool) -> DssResult<()> {
        self.ctx.set_bool(entry!(self.ctx, reg_controls.Set_IsInverseTime), value)
    }

    pub fn is_reversible(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, reg_controls.Get_IsReversible))
    }

    pub fn set_is_reversible(&self, value: bool) -> DssResult<()> {
        self.ctx.set_bool(entry!(self.ctx, reg_controls.Set_IsReversible), value)
    }

    pub fn max_tap_change(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, reg_controls.Get_MaxTapChange))
    }

    pub fn set_max_tap_change(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, reg_controls.Set_MaxTapChange), value)
    }

    pub fn tap_number(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, reg_controls.Get_TapNumber))
    }

    pub fn set_tap_number(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, reg_controls.Set_TapNumber), value)
    }

    pub fn tap_winding(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, reg_controls.Get_TapWinding))
    }

    pub fn set_tap_winding(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, reg_controls.Set_TapWinding), value)
    }

    pub fn voltage_limit(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, reg_controls.Get_VoltageLimit))
    }

    pub fn set_voltage_limit(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, reg_controls.Set_VoltageLimit), value)
    }

    pub fn reset(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, reg_controls.Reset))
    }
}
