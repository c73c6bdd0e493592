use altdss_runtime::{Context, DssResult, EntityKind, entry};

use crate::collection::collection_methods;
use crate::enums::CapControlModes;

/// Capacitor controls.
pub struct CapControls<'a> {
    ctx: &'a Context,
}

impl<'a> CapControls<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        CapControls { ctx }
    }

    collection_methods!(CapControls, cap_controls, EntityKind::CapControl);

    pub fn capacitor(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, cap_controls.Get_Capacitor))
    }

    pub fn set_capacitor(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, cap_controls.Set_Capacitor), value)
    }

    pub fn monitored_obj(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, cap_controls.Get_MonitoredObj))
    }

    pub fn set_monitored_obj(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, cap_controls.Set_MonitoredObj), value)
    }

    pub fn monitored_term(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, cap_controls.Get_MonitoredTerm))
    }

    pub fn set_monitored_term(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, cap_controls.Set_MonitoredTerm), value)
    }

    pub fn mode(&self) -> DssResult<CapControlModes> {
        self.ctx.get(entry!(self.ctx, cap_controls.Get_Mode)).and_then(CapControlModes::try_from)
    }

    pub fn set_mode(&self, value: CapControlModes) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, cap_controls.Set_Mode), value as i32)
    }

    pub fn ct_ratio(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, cap_controls.Get_CTratio))
    }

    pub fn set_ct_ratio(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, cap_controls.Set_CTratio), value)
    }

    pub fn pt_ratio(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, cap_controls.Get_PTratio))
    }

    pub fn set_pt_ratio(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, cap_controls.Set_PTratio), value)
    }

    pub fn dead_time(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, cap_controls.Get_DeadTime))
    }

    pub fn set_dead_time(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, cap_controls.Set_DeadTime), value)
    }

    pub fn delay(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, cap_controls.Get_Delay))
    }

    pub fn set_delay(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, cap_controls.Set_Delay), value)
    }

    pub fn delay_off(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, cap_controls.Get_DelayOff))
    }

    pub fn set_delay_off(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, cap_controls.Set_DelayOff), value)
    }

    pub fn on_setting(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, cap_controls.Get_ONSetting))
    }

    pub fn set_on_setting(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, cap_controls.Set_ONSetting), value)
    }

    pub fn off_setting(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, cap_controls.Get_OFFSetting))
    }

    pub fn set_off_setting(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, cap_controls.Set_OFFSetting), value)
    }

    pub fn use_volt_override(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, cap_controls.Get_UseVoltOverride))
    }

    pub fn set_use_volt_override(&self, value: bool) -> DssResult<()> {
        self.ctx.set_bool(entry!(self.ctx, cap_controls.Set_UseVoltOverride), value)
    }

    pub fn vmax(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, cap_controls.Get_Vmax))
    }

    pub fn set_vmax(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, cap_controls.Set_Vmax), value)
    }

    pub fn vmin(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, cap_controls.Get_Vmin))
    }

    pub fn set_vmin(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, cap_controls.Set_Vmin), value)
    }

    pub fn reset(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, cap_controls.Reset))
    }
}
