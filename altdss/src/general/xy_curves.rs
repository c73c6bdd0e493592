use altdss_runtime::{Context, DssResult, EntityKind, entry};

use crate::collection::collection_methods;

/// XY curves.
pub struct XYCurves<'a> {
    ctx: &'a Context,
}

impl<'a> XYCurves<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        XYCurves { ctx }
    }

    collection_methods!(XYCurves, xy_curves, EntityKind::XYCurve);

    pub fn npts(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, xy_curves.Get_Npts))
    }

    pub fn set_npts(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, xy_curves.Set_Npts), value)
    }

    pub fn xarray(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, xy_curves.Get_Xarray_GR))
    }

    pub fn set_xarray(&self, value: &[f64]) -> DssResult<()> {
        self.ctx.set_array(entry!(self.ctx, xy_curves.Set_Xarray), value)
    }

    pub fn yarray(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, xy_curves.Get_Yarray_GR))
    }

    pub fn set_yarray(&self, value: &[f64]) -> DssResult<()> {
        self.ctx.set_array(entry!(self.ctx, xy_curves.Set_Yarray), value)
    }

    /// Set `x` to interpolate `y`, or read the abscissa for the current `y`.
    pub fn x(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, xy_curves.Get_x))
    }

    pub fn set_x(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, xy_curves.Set_x), value)
    }

    pub fn y(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, xy_curves.Get_y))
    }

    pub fn set_y(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, xy_curves.Set_y), value)
    }

    pub fn xscale(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, xy_curves.Get_Xscale))
    }

    pub fn set_xscale(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, xy_curves.Set_Xscale), value)
    }

    pub fn xshift(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, xy_curves.Get_Xshift))
    }

    pub fn set_xshift(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, xy_curves.Set_Xshift), value)
    }

    pub fn yscale(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, xy_curves.Get_Yscale))
    }

    pub fn set_yscale(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, xy_curves.Set_Yscale), value)
    }

    pub fn yshift(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, xy_curves.Get_Yshift))
    }

    pub fn set_yshift(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, xy_curves.Set_Yshift), value)
    }
}
