use altdss_runtime::{Context, DssResult, EntityKind, entry};

use crate::collection::collection_methods;

/// Current sources.
pub struct ISources<'a> {
    ctx: &'a Context,
}

impl<'a> ISources<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        ISources { ctx }
    }

    collection_methods!(ISources, isources, EntityKind::Isource);

    pub fn amps(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, isources.Get_Amps))
    }

    pub fn set_amps(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, isources.Set_Amps), value)
    }

    pub fn angle_deg(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, isources.Get_AngleDeg))
    }

    pub fn set_angle_deg(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, isources.Set_AngleDeg), value)
    }

    pub fn frequency(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, isources.Get_Frequency))
    }

    pub fn set_frequency(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, isources.Set_Frequency), value)
    }
}
