use altdss_runtime::{Context, DssResult, EntityKind, entry};

use crate::collection::collection_methods;
use crate::enums::{LoadModels, LoadStatus};

/// Load elements of the active circuit.
pub struct Loads<'a> {
    ctx: &'a Context,
}

impl<'a> Loads<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        Loads { ctx }
    }

    collection_methods!(Loads, loads, EntityKind::Load);

    /// Nominal active power, kW.
    pub fn kw(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, loads.Get_kW))
    }

    pub fn set_kw(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, loads.Set_kW), value)
    }

    pub fn kvar(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, loads.Get_kvar))
    }

    pub fn set_kvar(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, loads.Set_kvar), value)
    }

    pub fn kv(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, loads.Get_kV))
    }

    pub fn set_kv(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, loads.Set_kV), value)
    }

    pub fn kva(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, loads.Get_kva))
    }

    pub fn set_kva(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, loads.Set_kva), value)
    }

    pub fn pf(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, loads.Get_PF))
    }

    pub fn set_pf(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, loads.Set_PF), value)
    }

    pub fn model(&self) -> DssResult<LoadModels> {
        self.ctx.get(entry!(self.ctx, loads.Get_Model)).and_then(LoadModels::try_from)
    }

    pub fn set_model(&self, value: LoadModels) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, loads.Set_Model), value as i32)
    }

    pub fn status(&self) -> DssResult<LoadStatus> {
        self.ctx.get(entry!(self.ctx, loads.Get_Status)).and_then(LoadStatus::try_from)
    }

    pub fn set_status(&self, value: LoadStatus) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, loads.Set_Status), value as i32)
    }

    /// Load class number, used by meters for demand allocation.
    pub fn class_id(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, loads.Get_Class_))
    }

    pub fn set_class_id(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, loads.Set_Class_), value)
    }

    pub fn is_delta(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, loads.Get_IsDelta))
    }

    pub fn set_is_delta(&self, value: bool) -> DssResult<()> {
        self.ctx.set_bool(entry!(self.ctx, loads.Set_IsDelta), value)
    }

    pub fn phases(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, loads.Get_Phases))
    }

    pub fn set_phases(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, loads.Set_Phases), value)
    }

    pub fn bus1(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, loads.Get_Bus1))
    }

    pub fn set_bus1(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, loads.Set_Bus1), value)
    }

    pub fn allocation_factor(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, loads.Get_AllocationFactor))
    }

    pub fn set_allocation_factor(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, loads.Set_AllocationFactor), value)
    }

    pub fn cfactor(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, loads.Get_Cfactor))
    }

    pub fn set_cfactor(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, loads.Set_Cfactor), value)
    }

    pub fn cvr_watts(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, loads.Get_CVRwatts))
    }

    pub fn set_cvr_watts(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, loads.Set_CVRwatts), value)
    }

    pub fn cvr_vars(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, loads.Get_CVRvars))
    }

    pub fn set_cvr_vars(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, loads.Set_CVRvars), value)
    }

    pub fn cvr_curve(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, loads.Get_CVRcurve))
    }

    pub fn set_cvr_curve(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, loads.Set_CVRcurve), value)
    }

    pub fn daily(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, loads.Get_Daily))
    }

    pub fn set_daily(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, loads.Set_Daily), value)
    }

    pub fn duty(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, loads.Get_Duty))
    }

    pub fn set_duty(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, loads.Set_Duty), value)
    }

    pub fn yearly(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, loads.Get_Yearly))
    }

    pub fn set_yearly(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, loads.Set_Yearly), value)
    }

    pub fn growth(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, loads.Get_Growth))
    }

    pub fn set_growth(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, loads.Set_Growth), value)
    }

    pub fn spectrum(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, loads.Get_Spectrum))
    }

    pub fn set_spectrum(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, loads.Set_Spectrum), value)
    }

    pub fn sensor(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, loads.Get_Sensor))
    }

    pub fn num_cust(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, loads.Get_NumCust))
    }

    pub fn set_num_cust(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, loads.Set_NumCust), value)
    }

    pub fn pct_mean(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, loads.Get_PctMean))
    }

    pub fn set_pct_mean(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, loads.Set_PctMean), value)
    }

    pub fn pct_std_dev(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, loads.Get_PctStdDev))
    }

    pub fn set_pct_std_dev(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, loads.Set_PctStdDev), value)
    }

    pub fn rel_weight(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, loads.Get_RelWeight))
    }

    pub fn set_rel_weight(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, loads.Set_RelWeight), value)
    }

    pub fn rneut(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, loads.Get_Rneut))
    }

    pub fn set_rneut(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, loads.Set_Rneut), value)
    }

    pub fn xneut(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, loads.Get_Xneut))
    }

    pub fn set_xneut(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, loads.Set_Xneut), value)
    }

    pub fn vmaxpu(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, loads.Get_Vmaxpu))
    }

    pub fn set_vmaxpu(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, loads.Set_Vmaxpu), value)
    }

    pub fn vminpu(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, loads.Get_Vminpu))
    }

    pub fn set_vminpu(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, loads.Set_Vminpu), value)
    }

    pub fn vmin_emerg(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, loads.Get_VminEmerg))
    }

    pub fn set_vmin_emerg(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, loads.Set_VminEmerg), value)
    }

    pub fn vmin_norm(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, loads.Get_VminNorm))
    }

    pub fn set_vmin_norm(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, loads.Set_VminNorm), value)
    }

    /// ZIP coefficients followed by the cutoff voltage (7 values).
    pub fn zipv(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, loads.Get_ZIPV_GR))
    }

    pub fn set_zipv(&self, value: &[f64]) -> DssResult<()> {
        self.ctx.set_array(entry!(self.ctx, loads.Set_ZIPV), value)
    }

    pub fn kva_base(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, loads.Get_kVABase))
    }

    pub fn set_kva_base(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, loads.Set_kVABase), value)
    }

    pub fn kwh(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, loads.Get_kWh))
    }

    pub fn set_kwh(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, loads.Set_kWh), value)
    }

    pub fn kwh_days(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, loads.Get_kWhDays))
    }

    pub fn set_kwh_days(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, loads.Set_kWhDays), value)
    }

    pub fn pct_series_rl(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, loads.Get_pctSeriesRL))
    }

    pub fn set_pct_series_rl(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, loads.Set_pctSeriesRL), value)
    }

    pub fn xfkva(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, loads.Get_xfkVA))
    }

    pub fn set_xfkva(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, loads.Set_xfkVA), value)
    }
}
