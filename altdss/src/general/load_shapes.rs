use std::ffi::CString;

use altdss_runtime::{Context, DssResult, EntityKind, Selection, entry};

use crate::collection::collection_methods;

/// Load shapes.
pub struct LoadShapes<'a> {
    ctx: &'a Context,
}

impl<'a> LoadShapes<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        LoadShapes { ctx }
    }

    collection_methods!(LoadShapes, load_shapes, EntityKind::LoadShape);

    /// Number of points.
    pub fn npts(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, load_shapes.Get_Npts))
    }

    pub fn set_npts(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, load_shapes.Set_Npts), value)
    }

    pub fn pmult(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, load_shapes.Get_Pmult_GR))
    }

    pub fn set_pmult(&self, value: &[f64]) -> DssResult<()> {
        self.ctx.set_array(entry!(self.ctx, load_shapes.Set_Pmult), value)
    }

    pub fn qmult(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, load_shapes.Get_Qmult_GR))
    }

    pub fn set_qmult(&self, value: &[f64]) -> DssResult<()> {
        self.ctx.set_array(entry!(self.ctx, load_shapes.Set_Qmult), value)
    }

    pub fn time_array(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, load_shapes.Get_TimeArray_GR))
    }

    pub fn set_time_array(&self, value: &[f64]) -> DssResult<()> {
        self.ctx.set_array(entry!(self.ctx, load_shapes.Set_TimeArray), value)
    }

    /// Fixed interval in hours, 0 when the shape uses `time_array`.
    pub fn hr_interval(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, load_shapes.Get_HrInterval))
    }

    pub fn set_hr_interval(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, load_shapes.Set_HrInterval), value)
    }

    pub fn min_interval(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, load_shapes.Get_MinInterval))
    }

    pub fn set_min_interval(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, load_shapes.Set_MinInterval), value)
    }

    pub fn s_interval(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, load_shapes.Get_SInterval))
    }

    pub fn set_s_interval(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, load_shapes.Set_SInterval), value)
    }

    pub fn pbase(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, load_shapes.Get_PBase))
    }

    pub fn set_pbase(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, load_shapes.Set_PBase), value)
    }

    pub fn qbase(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, load_shapes.Get_Qbase))
    }

    pub fn set_qbase(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, load_shapes.Set_Qbase), value)
    }

    pub fn use_actual(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, load_shapes.Get_UseActual))
    }

    pub fn set_use_actual(&self, value: bool) -> DssResult<()> {
        self.ctx.set_bool(entry!(self.ctx, load_shapes.Set_UseActual), value)
    }

    pub fn normalize(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, load_shapes.Normalize))
    }

    pub fn use_float32(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, load_shapes.UseFloat32))
    }

    pub fn use_float64(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, load_shapes.UseFloat64))
    }

    /// Create a load shape named `name` and make it active. Returns its index.
    pub fn add(&self, name: &str) -> DssResult<i32> {
        let c_name = CString::new(name)?;
        let index = self.ctx.invoke(entry!(self.ctx, load_shapes.New), |f, ctx| unsafe {
            f(ctx, c_name.as_ptr())
        })?;
        self.ctx.record_selection(Selection::new(EntityKind::LoadShape, Some(index)));
        Ok(index)
    }
}
