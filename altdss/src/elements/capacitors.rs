use altdss_runtime::{Context, DssResult, EntityKind, entry};

use crate::collection::collection_methods;

/// Shunt capacitor banks.
pub struct Capacitors<'a> {
    ctx: &'a Context,
}

impl<'a> Capacitors<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        Capacitors { ctx }
    }

    collection_methods!(Capacitors, capacitors, EntityKind::Capacitor);

    pub fn kv(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, capacitors.Get_kV))
    }

    pub fn set_kv(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, capacitors.Set_kV), value)
    }

    pub fn kvar(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, capacitors.Get_kvar))
    }

    pub fn set_kvar(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, capacitors.Set_kvar), value)
    }

    pub fn num_steps(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, capacitors.Get_NumSteps))
    }

    pub fn set_num_steps(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, capacitors.Set_NumSteps), value)
    }

    pub fn is_delta(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, capacitors.Get_IsDelta))
    }

    pub fn set_is_delta(&self, value: bool) -> DssResult<()> {
        self.ctx.set_bool(entry!(self.ctx, capacitors.Set_IsDelta), value)
    }

    /// Per-step state, 1 = closed.
    pub fn states(&self) -> DssResult<Vec<i32>> {
        self.ctx.get_i32s(entry!(self.ctx, capacitors.Get_States_GR))
    }

    pub fn set_states(&self, value: &[i32]) -> DssResult<()> {
        self.ctx.set_array(entry!(self.ctx, capacitors.Set_States), value)
    }

    pub fn available_steps(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, capacitors.Get_AvailableSteps))
    }

    /// Close one more step. False when every step was already closed.
    pub fn add_step(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, capacitors.AddStep))
    }

    pub fn subtract_step(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, capacitors.SubtractStep))
    }

    pub fn open(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, capacitors.Open))
    }

    pub fn close(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, capacitors.Close))
    }
}
