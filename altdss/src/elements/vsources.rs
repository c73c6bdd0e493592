use altdss_runtime::{Context, DssResult, EntityKind, entry};

use crate::collection::collection_methods;

/// Voltage sources.
pub struct Vsources<'a> {
    ctx: &'a Context,
}

impl<'a> Vsources<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        Vsources { ctx }
    }

    collection_methods!(Vsources, vsources, EntityKind::Vsource);

    pub fn base_kv(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, vsources.Get_BasekV))
    }

    pub fn set_base_kv(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, vsources.Set_BasekV), value)
    }

    /// Per-unit voltage magnitude.
    pub fn pu(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, vsources.Get_pu))
    }

    pub fn set_pu(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, vsources.Set_pu), value)
    }

    pub fn angle_deg(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, vsources.Get_AngleDeg))
    }

    pub fn set_angle_deg(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, vsources.Set_AngleDeg), value)
    }

    pub fn frequency(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, vsources.Get_Frequency))
    }

    pub fn set_frequency(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, vsources.Set_Frequency), value)
    }

    pub fn phases(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, vsources.Get_Phases))
    }

    pub fn set_phases(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, vsources.Set_Phases), value)
    }
}
