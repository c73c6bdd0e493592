use altdss_runtime::{Complex64, Context, DssResult, EntityKind, entry};

use crate::collection::collection_methods;
use crate::enums::CoreType;

/// Transformer elements of the active circuit.
///
/// Per-winding properties act on the winding selected with `set_wdg`.
pub struct Transformers<'a> {
    ctx: &'a Context,
}

impl<'a> Transformers<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        Transformers { ctx }
    }

    collection_methods!(Transformers, transformers, EntityKind::Transformer);

    pub fn num_windings(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, transformers.Get_NumWindings))
    }

    pub fn set_num_windings(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, transformers.Set_NumWindings), value)
    }

    /// Active winding, 1-based.
    pub fn wdg(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, transformers.Get_Wdg))
    }

    pub fn set_wdg(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, transformers.Set_Wdg), value)
    }

    pub fn is_delta(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, transformers.Get_IsDelta))
    }

    pub fn set_is_delta(&self, value: bool) -> DssResult<()> {
        self.ctx.set_bool(entry!(self.ctx, transformers.Set_IsDelta), value)
    }

    pub fn kv(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, transformers.Get_kV))
    }

    pub fn set_kv(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, transformers.Set_kV), value)
    }

    pub fn kva(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, transformers.Get_kVA))
    }

    pub fn set_kva(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, transformers.Set_kVA), value)
    }

    pub fn r(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, transformers.Get_R))
    }

    pub fn set_r(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, transformers.Set_R), value)
    }

    pub fn rneut(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, transformers.Get_Rneut))
    }

    pub fn set_rneut(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, transformers.Set_Rneut), value)
    }

    pub fn xneut(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, transformers.Get_Xneut))
    }

    pub fn set_xneut(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, transformers.Set_Xneut), value)
    }

    pub fn tap(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, transformers.Get_Tap))
    }

    pub fn set_tap(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, transformers.Set_Tap), value)
    }

    pub fn min_tap(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, transformers.Get_MinTap))
    }

    pub fn set_min_tap(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, transformers.Set_MinTap), value)
    }

    pub fn max_tap(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, transformers.Get_MaxTap))
    }

    pub fn set_max_tap(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, transformers.Set_MaxTap), value)
    }

    pub fn num_taps(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, transformers.Get_NumTaps))
    }

    pub fn set_num_taps(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, transformers.Set_NumTaps), value)
    }

    pub fn xhl(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, transformers.Get_Xhl))
    }

    pub fn set_xhl(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, transformers.Set_Xhl), value)
    }

    pub fn xht(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, transformers.Get_Xht))
    }

    pub fn set_xht(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, transformers.Set_Xht), value)
    }

    pub fn xlt(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, transformers.Get_Xlt))
    }

    pub fn set_xlt(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, transformers.Set_Xlt), value)
    }

    pub fn xfmr_code(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, transformers.Get_XfmrCode))
    }

    pub fn set_xfmr_code(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, transformers.Set_XfmrCode), value)
    }

    pub fn core_type(&self) -> DssResult<CoreType> {
        self.ctx.get(entry!(self.ctx, transformers.Get_CoreType)).and_then(CoreType::try_from)
    }

    pub fn set_core_type(&self, value: CoreType) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, transformers.Set_CoreType), value as i32)
    }

    pub fn rdc_ohms(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, transformers.Get_RdcOhms))
    }

    pub fn set_rdc_ohms(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, transformers.Set_RdcOhms), value)
    }

    /// Winding currents of the active transformer as a formatted text block.
    pub fn str_wdg_currents(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, transformers.Get_strWdgCurrents))
    }

    pub fn wdg_voltages(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, transformers.Get_WdgVoltages_GR))
    }

    pub fn wdg_currents(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, transformers.Get_WdgCurrents_GR))
    }

    /// Total, load and no-load losses of the active transformer.
    pub fn losses_by_type(&self) -> DssResult<Vec<Complex64>> {
        self.ctx.get_complexes(entry!(self.ctx, transformers.Get_LossesByType_GR))
    }

    /// Total, load and no-load losses of every transformer, in registration order.
    pub fn all_losses_by_type(&self) -> DssResult<Vec<Complex64>> {
        self.ctx.get_complexes(entry!(self.ctx, transformers.Get_AllLossesByType_GR))
    }
}
