use altdss_runtime::{Context, DssResult, EntityKind, entry};

use crate::collection::collection_methods;

/// Reclosers.
pub struct Reclosers<'a> {
    ctx: &'a Context,
}

impl<'a> Reclosers<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        Reclosers { ctx }
    }

    collection_methods!(Reclosers, reclosers, EntityKind::Recloser);

    pub fn monitored_obj(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, reclosers.Get_MonitoredObj))
    }

    pub fn set_monitored_obj(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, reclosers.Set_MonitoredObj), value)
    }

    pub fn monitored_term(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, reclosers.Get_MonitoredTerm))
    }

    pub fn set_monitored_term(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, reclosers.Set_MonitoredTerm), value)
    }

    pub fn switched_obj(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, reclosers.Get_SwitchedObj))
    }

    pub fn set_switched_obj(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, reclosers.Set_SwitchedObj), value)
    }

    pub fn switched_term(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, reclosers.Get_SwitchedTerm))
    }

    pub fn set_switched_term(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, reclosers.Set_SwitchedTerm), value)
    }

    pub fn ground_inst(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, reclosers.Get_GroundInst))
    }

    pub fn set_ground_inst(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, reclosers.Set_GroundInst), value)
    }

    pub fn ground_trip(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, reclosers.Get_GroundTrip))
    }

    pub fn set_ground_trip(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, reclosers.Set_GroundTrip), value)
    }

    pub fn phase_inst(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, reclosers.Get_PhaseInst))
    }

    pub fn set_phase_inst(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, reclosers.Set_PhaseInst), value)
    }

    pub fn phase_trip(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, reclosers.Get_PhaseTrip))
    }

    pub fn set_phase_trip(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, reclosers.Set_PhaseTrip), value)
    }

    pub fn num_fast(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, reclosers.Get_NumFast))
    }

    pub fn set_num_fast(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, reclosers.Set_NumFast), value)
    }

    pub fn shots(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, reclosers.Get_Shots))
    }

    pub fn set_shots(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, reclosers.Set_Shots), value)
    }

    pub fn reclose_intervals(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, reclosers.Get_RecloseIntervals_GR))
    }

    pub fn state(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, reclosers.Get_State))
    }

    pub fn set_state(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, reclosers.Set_State), value)
    }

    pub fn normal_state(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, reclosers.Get_NormalState))
    }

    pub fn set_normal_state(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, reclosers.Set_NormalState), value)
    }

    pub fn open(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, reclosers.Open))
    }

    pub fn close(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, reclosers.Close))
    }

    pub fn reset(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, reclosers.Reset))
    }
}
