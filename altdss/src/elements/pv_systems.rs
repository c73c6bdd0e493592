use altdss_runtime::{Context, DssResult, EntityKind, entry};

use crate::collection::collection_methods;

/// Photovoltaic systems.
pub struct PVSystems<'a> {
    ctx: &'a Context,
}

impl<'a> PVSystems<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        PVSystems { ctx }
    }

    collection_methods!(PVSystems, pv_systems, EntityKind::PVSystem);

    pub fn irradiance(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, pv_systems.Get_Irradiance))
    }

    pub fn set_irradiance(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, pv_systems.Set_Irradiance), value)
    }

    pub fn irradiance_now(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, pv_systems.Get_IrradianceNow))
    }

    pub fn pf(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, pv_systems.Get_PF))
    }

    pub fn set_pf(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, pv_systems.Set_PF), value)
    }

    pub fn kva_rated(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, pv_systems.Get_kVArated))
    }

    pub fn set_kva_rated(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, pv_systems.Set_kVArated), value)
    }

    pub fn kw(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, pv_systems.Get_kW))
    }

    pub fn kvar(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, pv_systems.Get_kvar))
    }

    pub fn set_kvar(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, pv_systems.Set_kvar), value)
    }

    pub fn pmpp(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, pv_systems.Get_Pmpp))
    }

    pub fn set_pmpp(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, pv_systems.Set_Pmpp), value)
    }

    pub fn daily(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, pv_systems.Get_daily))
    }

    pub fn set_daily(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, pv_systems.Set_daily), value)
    }

    pub fn duty(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, pv_systems.Get_duty))
    }

    pub fn set_duty(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, pv_systems.Set_duty), value)
    }

    pub fn yearly(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, pv_systems.Get_yearly))
    }

    pub fn set_yearly(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, pv_systems.Set_yearly), value)
    }

    pub fn t_daily(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, pv_systems.Get_Tdaily))
    }

    pub fn set_t_daily(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, pv_systems.Set_Tdaily), value)
    }

    pub fn t_duty(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, pv_systems.Get_Tduty))
    }

    pub fn set_t_duty(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, pv_systems.Set_Tduty), value)
    }

    pub fn t_yearly(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, pv_systems.Get_Tyearly))
    }

    pub fn set_t_yearly(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, pv_systems.Set_Tyearly), value)
    }

    pub fn sensor(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, pv_systems.Get_Sensor))
    }

    pub fn register_names(&self) -> DssResult<Vec<String>> {
        self.ctx.get_strings(entry!(self.ctx, pv_systems.Get_RegisterNames))
    }

    pub fn register_values(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, pv_systems.Get_RegisterValues_GR))
    }
}
