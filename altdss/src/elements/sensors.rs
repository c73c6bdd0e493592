use altdss_runtime::{Context, DssResult, EntityKind, entry};

use crate::collection::collection_methods;

/// Sensors used for load allocation and state estimation.
pub struct Sensors<'a> {
    ctx: &'a Context,
}

impl<'a> Sensors<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        Sensors { ctx }
    }

    collection_methods!(Sensors, sensors, EntityKind::Sensor);

    pub fn metered_element(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, sensors.Get_MeteredElement))
    }

    pub fn set_metered_element(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, sensors.Set_MeteredElement), value)
    }

    pub fn metered_terminal(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, sensors.Get_MeteredTerminal))
    }

    pub fn set_metered_terminal(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, sensors.Set_MeteredTerminal), value)
    }

    pub fn currents(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, sensors.Get_Currents_GR))
    }

    pub fn set_currents(&self, value: &[f64]) -> DssResult<()> {
        self.ctx.set_array(entry!(self.ctx, sensors.Set_Currents), value)
    }

    pub fn kvars(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, sensors.Get_kVARS_GR))
    }

    pub fn set_kvars(&self, value: &[f64]) -> DssResult<()> {
        self.ctx.set_array(entry!(self.ctx, sensors.Set_kVARS), value)
    }

    pub fn kvs(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, sensors.Get_kVS_GR))
    }

    pub fn set_kvs(&self, value: &[f64]) -> DssResult<()> {
        self.ctx.set_array(entry!(self.ctx, sensors.Set_kVS), value)
    }

    pub fn kws(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, sensors.Get_kWS_GR))
    }

    pub fn set_kws(&self, value: &[f64]) -> DssResult<()> {
        self.ctx.set_array(entry!(self.ctx, sensors.Set_kWS), value)
    }

    pub fn kv_base(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, sensors.Get_kVbase))
    }

    pub fn set_kv_base(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, sensors.Set_kVbase), value)
    }

    pub fn is_delta(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, sensors.Get_IsDelta))
    }

    pub fn set_is_delta(&self, value: bool) -> DssResult<()> {
        self.ctx.set_bool(entry!(self.ctx, sensors.Set_IsDelta), value)
    }

    pub fn reverse_delta(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, sensors.Get_ReverseDelta))
    }

    pub fn set_reverse_delta(&self, value: bool) -> DssResult<()> {
        self.ctx.set_bool(entry!(self.ctx, sensors.Set_ReverseDelta), value)
    }

    pub fn pct_error(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, sensors.Get_PctError))
    }

    pub fn set_pct_error(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, sensors.Set_PctError), value)
    }

    pub fn weight(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, sensors.Get_Weight))
    }

    pub fn set_weight(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, sensors.Set_Weight), value)
    }

    pub fn allocation_factor(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, sensors.Get_AllocationFactor_GR))
    }

    pub fn reset(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, sensors.Reset))
    }

    pub fn reset_all(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, sensors.ResetAll))
    }
}
