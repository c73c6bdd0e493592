use altdss_runtime::{Context, DssResult, EntityKind, entry};

use crate::collection::collection_methods;

/// Concentric-neutral cable data.
pub struct CNData<'a> {
    ctx: &'a Context,
}

impl<'a> CNData<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        CNData { ctx }
    }

    collection_methods!(CNData, cn_data, EntityKind::CNData);

    pub fn rdc(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, cn_data.Get_Rdc))
    }

    pub fn set_rdc(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, cn_data.Set_Rdc), value)
    }

    pub fn rac(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, cn_data.Get_Rac))
    }

    pub fn set_rac(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, cn_data.Set_Rac), value)
    }

    pub fn gmr_ac(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, cn_data.Get_GMRAC))
    }

    pub fn set_gmr_ac(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, cn_data.Set_GMRAC), value)
    }

    pub fn gmr_units(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, cn_data.Get_GMRUnits))
    }

    pub fn set_gmr_units(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, cn_data.Set_GMRUnits), value)
    }

    pub fn radius(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, cn_data.Get_Radius))
    }

    pub fn set_radius(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, cn_data.Set_Radius), value)
    }

    pub fn radius_units(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, cn_data.Get_RadiusUnits))
    }

    pub fn set_radius_units(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, cn_data.Set_RadiusUnits), value)
    }

    pub fn resistance_units(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, cn_data.Get_ResistanceUnits))
    }

    pub fn set_resistance_units(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, cn_data.Set_ResistanceUnits), value)
    }

    pub fn diameter(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, cn_data.Get_Diameter))
    }

    pub fn set_diameter(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, cn_data.Set_Diameter), value)
    }

    pub fn norm_amps(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, cn_data.Get_NormAmps))
    }

    pub fn set_norm_amps(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, cn_data.Set_NormAmps), value)
    }

    pub fn emerg_amps(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, cn_data.Get_EmergAmps))
    }

    pub fn set_emerg_amps(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, cn_data.Set_EmergAmps), value)
    }

    pub fn cap_radius(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, cn_data.Get_CapRadius))
    }

    pub fn set_cap_radius(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, cn_data.Set_CapRadius), value)
    }

    pub fn eps_r(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, cn_data.Get_EpsR))
    }

    pub fn set_eps_r(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, cn_data.Set_EpsR), value)
    }

    pub fn ins_layer(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, cn_data.Get_InsLayer))
    }

    pub fn set_ins_layer(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, cn_data.Set_InsLayer), value)
    }

    pub fn dia_ins(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, cn_data.Get_DiaIns))
    }

    pub fn set_dia_ins(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, cn_data.Set_DiaIns), value)
    }

    pub fn dia_cable(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, cn_data.Get_DiaCable))
    }

    pub fn set_dia_cable(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, cn_data.Set_DiaCable), value)
    }

    /// Number of neutral strands.
    pub fn k(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, cn_data.Get_k))
    }

    pub fn set_k(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, cn_data.Set_k), value)
    }

    pub fn dia_strand(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, cn_data.Get_DiaStrand))
    }

    pub fn set_dia_strand(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, cn_data.Set_DiaStrand), value)
    }

    pub fn gmr_strand(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, cn_data.Get_GmrStrand))
    }

    pub fn set_gmr_strand(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, cn_data.Set_GmrStrand), value)
    }

    pub fn r_strand(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, cn_data.Get_RStrand))
    }

    pub fn set_r_strand(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, cn_data.Set_RStrand), value)
    }
}
