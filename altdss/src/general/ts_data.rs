use altdss_runtime::{Context, DssResult, EntityKind, entry};

use crate::collection::collection_methods;

/// Tape-shield cable data.
pub struct TSData<'a> {
    ctx: &'a Context,
}

impl<'a> TSData<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        TSData { ctx }
    }

    collection_methods!(TSData, ts_data, EntityKind::TSData);

    pub fn rdc(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, ts_data.Get_Rdc))
    }

    pub fn set_rdc(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, ts_data.Set_Rdc), value)
    }

    pub fn rac(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, ts_data.Get_Rac))
    }

    pub fn set_rac(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, ts_data.Set_Rac), value)
    }

    pub fn gmr_ac(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, ts_data.Get_GMRAC))
    }

    pub fn set_gmr_ac(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, ts_data.Set_GMRAC), value)
    }

    pub fn gmr_units(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, ts_data.Get_GMRUnits))
    }

    pub fn set_gmr_units(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, ts_data.Set_GMRUnits), value)
    }

    pub fn radius(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, ts_data.Get_Radius))
    }

    pub fn set_radius(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, ts_data.Set_Radius), value)
    }

    pub fn radius_units(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, ts_data.Get_RadiusUnits))
    }

    pub fn set_radius_units(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, ts_data.Set_RadiusUnits), value)
    }

    pub fn resistance_units(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, ts_data.Get_ResistanceUnits))
    }

    pub fn set_resistance_units(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, ts_data.Set_ResistanceUnits), value)
    }

    pub fn diameter(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, ts_data.Get_Diameter))
    }

    pub fn set_diameter(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, ts_data.Set_Diameter), value)
    }

    pub fn norm_amps(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, ts_data.Get_NormAmps))
    }

    pub fn set_norm_amps(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, ts_data.Set_NormAmps), value)
    }

    pub fn emerg_amps(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, ts_data.Get_EmergAmps))
    }

    pub fn set_emerg_amps(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, ts_data.Set_EmergAmps), value)
    }

    pub fn cap_radius(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, ts_data.Get_CapRadius))
    }

    pub fn set_cap_radius(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, ts_data.Set_CapRadius), value)
    }

    pub fn eps_r(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, ts_data.Get_EpsR))
    }

    pub fn set_eps_r(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, ts_data.Set_EpsR), value)
    }

    pub fn ins_layer(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, ts_data.Get_InsLayer))
    }

    pub fn set_ins_layer(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, ts_data.Set_InsLayer), value)
    }

    pub fn dia_ins(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, ts_data.Get_DiaIns))
    }

    pub fn set_dia_ins(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, ts_data.Set_DiaIns), value)
    }

    pub fn dia_cable(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, ts_data.Get_DiaCable))
    }

    pub fn set_dia_cable(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, ts_data.Set_DiaCable), value)
    }

    pub fn dia_shield(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, ts_data.Get_DiaShield))
    }

    pub fn set_dia_shield(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, ts_data.Set_DiaShield), value)
    }

    pub fn tape_layer(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, ts_data.Get_TapeLayer))
    }

    pub fn set_tape_layer(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, ts_data.Set_TapeLayer), value)
    }

    pub fn tape_lap(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, ts_data.Get_TapeLap))
    }

    pub fn set_tape_lap(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, ts_data.Set_TapeLap), value)
    }
}
