use altdss_runtime::{Context, DssResult, EntityKind, entry};

use crate::collection::collection_methods;
use crate::enums::GeneratorStatus;

/// Generator elements.
pub struct Generators<'a> {
    ctx: &'a Context,
}

impl<'a> Generators<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        Generators { ctx }
    }

    collection_methods!(Generators, generators, EntityKind::Generator);

    pub fn kw(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, generators.Get_kW))
    }

    pub fn set_kw(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, generators.Set_kW), value)
    }

    pub fn kvar(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, generators.Get_kvar))
    }

    pub fn set_kvar(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, generators.Set_kvar), value)
    }

    pub fn kv(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, generators.Get_kV))
    }

    pub fn set_kv(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, generators.Set_kV), value)
    }

    pub fn kva_rated(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, generators.Get_kVArated))
    }

    pub fn set_kva_rated(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, generators.Set_kVArated), value)
    }

    pub fn kva(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, generators.Get_kva))
    }

    pub fn set_kva(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, generators.Set_kva), value)
    }

    pub fn pf(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, generators.Get_PF))
    }

    pub fn set_pf(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, generators.Set_PF), value)
    }

    pub fn model(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, generators.Get_Model))
    }

    pub fn set_model(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, generators.Set_Model), value)
    }

    pub fn phases(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, generators.Get_Phases))
    }

    pub fn set_phases(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, generators.Set_Phases), value)
    }

    pub fn forced_on(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, generators.Get_ForcedON))
    }

    pub fn set_forced_on(&self, value: bool) -> DssResult<()> {
        self.ctx.set_bool(entry!(self.ctx, generators.Set_ForcedON), value)
    }

    pub fn is_delta(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, generators.Get_IsDelta))
    }

    pub fn set_is_delta(&self, value: bool) -> DssResult<()> {
        self.ctx.set_bool(entry!(self.ctx, generators.Set_IsDelta), value)
    }

    pub fn vmaxpu(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, generators.Get_Vmaxpu))
    }

    pub fn set_vmaxpu(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, generators.Set_Vmaxpu), value)
    }

    pub fn vminpu(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, generators.Get_Vminpu))
    }

    pub fn set_vminpu(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, generators.Set_Vminpu), value)
    }

    pub fn bus1(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, generators.Get_Bus1))
    }

    pub fn set_bus1(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, generators.Set_Bus1), value)
    }

    pub fn daily(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, generators.Get_daily))
    }

    pub fn set_daily(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, generators.Set_daily), value)
    }

    pub fn duty(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, generators.Get_duty))
    }

    pub fn set_duty(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, generators.Set_duty), value)
    }

    pub fn yearly(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, generators.Get_Yearly))
    }

    pub fn set_yearly(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, generators.Set_Yearly), value)
    }

    pub fn status(&self) -> DssResult<GeneratorStatus> {
        self.ctx.get(entry!(self.ctx, generators.Get_Status)).and_then(GeneratorStatus::try_from)
    }

    pub fn set_status(&self, value: GeneratorStatus) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, generators.Set_Status), value as i32)
    }

    pub fn class_id(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, generators.Get_Class_))
    }

    pub fn set_class_id(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, generators.Set_Class_), value)
    }

    pub fn register_names(&self) -> DssResult<Vec<String>> {
        self.ctx.get_strings(entry!(self.ctx, generators.Get_RegisterNames))
    }

    pub fn register_values(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, generators.Get_RegisterValues_GR))
    }
}
