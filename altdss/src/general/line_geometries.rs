use altdss_runtime::{Complex64, Context, DssResult, EntityKind, entry};

use crate::collection::collection_methods;
use crate::enums::LineUnits;

/// Line geometries.
pub struct LineGeometries<'a> {
    ctx: &'a Context,
}

impl<'a> LineGeometries<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        LineGeometries { ctx }
    }

    collection_methods!(LineGeometries, line_geometries, EntityKind::LineGeometry);

    pub fn nconds(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, line_geometries.Get_Nconds))
    }

    pub fn set_nconds(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, line_geometries.Set_Nconds), value)
    }

    pub fn phases(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, line_geometries.Get_Phases))
    }

    pub fn set_phases(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, line_geometries.Set_Phases), value)
    }

    pub fn conductors(&self) -> DssResult<Vec<String>> {
        self.ctx.get_strings(entry!(self.ctx, line_geometries.Get_Conductors))
    }

    pub fn units(&self) -> DssResult<Vec<i32>> {
        self.ctx.get_i32s(entry!(self.ctx, line_geometries.Get_Units_GR))
    }

    pub fn set_units(&self, value: &[i32]) -> DssResult<()> {
        self.ctx.set_array(entry!(self.ctx, line_geometries.Set_Units), value)
    }

    pub fn xcoords(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, line_geometries.Get_Xcoords_GR))
    }

    pub fn set_xcoords(&self, value: &[f64]) -> DssResult<()> {
        self.ctx.set_array(entry!(self.ctx, line_geometries.Set_Xcoords), value)
    }

    pub fn ycoords(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, line_geometries.Get_Ycoords_GR))
    }

    pub fn set_ycoords(&self, value: &[f64]) -> DssResult<()> {
        self.ctx.set_array(entry!(self.ctx, line_geometries.Set_Ycoords), value)
    }

    pub fn rho_earth(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, line_geometries.Get_RhoEarth))
    }

    pub fn set_rho_earth(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, line_geometries.Set_RhoEarth), value)
    }

    pub fn reduce(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, line_geometries.Get_Reduce))
    }

    pub fn set_reduce(&self, value: bool) -> DssResult<()> {
        self.ctx.set_bool(entry!(self.ctx, line_geometries.Set_Reduce), value)
    }

    pub fn norm_amps(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, line_geometries.Get_NormAmps))
    }

    pub fn set_norm_amps(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, line_geometries.Set_NormAmps), value)
    }

    pub fn emerg_amps(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, line_geometries.Get_EmergAmps))
    }

    pub fn set_emerg_amps(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, line_geometries.Set_EmergAmps), value)
    }

    /// Resistance matrix at `frequency` for a line of `length` in `units`.
    pub fn rmatrix(&self, frequency: f64, length: f64, units: LineUnits) -> DssResult<Vec<f64>> {
        self.ctx.fill_f64s(entry!(self.ctx, line_geometries.Get_Rmatrix_GR), |f, ctx| unsafe {
            f(ctx, frequency, length, units as i32)
        })
    }

    pub fn xmatrix(&self, frequency: f64, length: f64, units: LineUnits) -> DssResult<Vec<f64>> {
        self.ctx.fill_f64s(entry!(self.ctx, line_geometries.Get_Xmatrix_GR), |f, ctx| unsafe {
            f(ctx, frequency, length, units as i32)
        })
    }

    pub fn zmatrix(&self, frequency: f64, length: f64, units: LineUnits) -> DssResult<Vec<Complex64>> {
        self.ctx.fill_complexes(entry!(self.ctx, line_geometries.Get_Zmatrix_GR), |f, ctx| unsafe {
            f(ctx, frequency, length, units as i32)
        })
    }

    pub fn cmatrix(&self, frequency: f64, length: f64, units: LineUnits) -> DssResult<Vec<f64>> {
        self.ctx.fill_f64s(entry!(self.ctx, line_geometries.Get_Cmatrix_GR), |f, ctx| unsafe {
            f(ctx, frequency, length, units as i32)
        })
    }
}
