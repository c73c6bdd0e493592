use altdss_runtime::{Context, DssResult, EntityKind, entry};

use crate::collection::collection_methods;

/// Fuses.
pub struct Fuses<'a> {
    ctx: &'a Context,
}

impl<'a> Fuses<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        Fuses { ctx }
    }

    collection_methods!(Fuses, fuses, EntityKind::Fuse);

    pub fn monitored_obj(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, fuses.Get_MonitoredObj))
    }

    pub fn set_monitored_obj(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, fuses.Set_MonitoredObj), value)
    }

    pub fn monitored_term(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, fuses.Get_MonitoredTerm))
    }

    pub fn set_monitored_term(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, fuses.Set_MonitoredTerm), value)
    }

    pub fn switched_obj(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, fuses.Get_SwitchedObj))
    }

    pub fn set_switched_obj(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, fuses.Set_SwitchedObj), value)
    }

    pub fn switched_term(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, fuses.Get_SwitchedTerm))
    }

    pub fn set_switched_term(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, fuses.Set_SwitchedTerm), value)
    }

    pub fn tcc_curve(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, fuses.Get_TCCcurve))
    }

    pub fn set_tcc_curve(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, fuses.Set_TCCcurve), value)
    }

    pub fn rated_current(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, fuses.Get_RatedCurrent))
    }

    pub fn set_rated_current(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, fuses.Set_RatedCurrent), value)
    }

    pub fn delay(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, fuses.Get_Delay))
    }

    pub fn set_delay(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, fuses.Set_Delay), value)
    }

    pub fn num_phases(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, fuses.Get_NumPhases))
    }

    /// Per-phase state, "open" or "closed".
    pub fn state(&self) -> DssResult<Vec<String>> {
        self.ctx.get_strings(entry!(self.ctx, fuses.Get_State))
    }

    pub fn set_state<S: AsRef<str>>(&self, value: &[S]) -> DssResult<()> {
        self.ctx.set_strings(entry!(self.ctx, fuses.Set_State), value)
    }

    pub fn normal_state(&self) -> DssResult<Vec<String>> {
        self.ctx.get_strings(entry!(self.ctx, fuses.Get_NormalState))
    }

    pub fn set_normal_state<S: AsRef<str>>(&self, value: &[S]) -> DssResult<()> {
        self.ctx.set_strings(entry!(self.ctx, fuses.Set_NormalState), value)
    }

    /// Whether any phase of the fuse is open.
    pub fn is_blown(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, fuses.IsBlown))
    }

    pub fn open(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, fuses.Open))
    }

    pub fn close(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, fuses.Close))
    }

    pub fn reset(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, fuses.Reset))
    }
}
