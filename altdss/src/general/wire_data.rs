use altdss_runtime::{Context, DssResult, EntityKind, entry};

use crate::collection::collection_methods;

/// Bare overhead conductor data.
pub struct WireData<'a> {
    ctx: &'a Context,
}

impl<'a> WireData<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        WireData { ctx }
    }

    collection_methods!(WireData, wire_data, EntityKind::WireData);

    pub fn rdc(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, wire_data.Get_Rdc))
    }

    pub fn set_rdc(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, wire_data.Set_Rdc), value)
    }

    pub fn rac(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, wire_data.Get_Rac))
    }

    pub fn set_rac(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, wire_data.Set_Rac), value)
    }

    pub fn gmr_ac(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, wire_data.Get_GMRAC))
    }

    pub fn set_gmr_ac(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, wire_data.Set_GMRAC), value)
    }

    pub fn gmr_units(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, wire_data.Get_GMRUnits))
    }

    pub fn set_gmr_units(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, wire_data.Set_GMRUnits), value)
    }

    pub fn radius(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, wire_data.Get_Radius))
    }

    pub fn set_radius(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, wire_data.Set_Radius), value)
    }

    pub fn radius_units(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, wire_data.Get_RadiusUnits))
    }

    pub fn set_radius_units(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, wire_data.Set_RadiusUnits), value)
    }

    pub fn resistance_units(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, wire_data.Get_ResistanceUnits))
    }

    pub fn set_resistance_units(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, wire_data.Set_ResistanceUnits), value)
    }

    pub fn diameter(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, wire_data.Get_Diameter))
    }

    pub fn set_diameter(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, wire_data.Set_Diameter), value)
    }

    pub fn norm_amps(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, wire_data.Get_NormAmps))
    }

    pub fn set_norm_amps(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, wire_data.Set_NormAmps), value)
    }

    pub fn emerg_amps(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, wire_data.Get_EmergAmps))
    }

    pub fn set_emerg_amps(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, wire_data.Set_EmergAmps), value)
    }

    pub fn cap_radius(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, wire_data.Get_CapRadius))
    }

    pub fn set_cap_radius(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, wire_data.Set_CapRadius), value)
    }
}
