use altdss_runtime::{Context, DssResult, EntityKind, entry};

use crate::collection::collection_methods;
use crate::enums::LineUnits;

/// Line codes.
pub struct LineCodes<'a> {
    ctx: &'a Context,
}

impl<'a> LineCodes<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        LineCodes { ctx }
    }

    collection_methods!(LineCodes, line_codes, EntityKind::LineCode);

    pub fn phases(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, line_codes.Get_Phases))
    }

    pub fn set_phases(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, line_codes.Set_Phases), value)
    }

    pub fn units(&self) -> DssResult<LineUnits> {
        self.ctx.get(entry!(self.ctx, line_codes.Get_Units)).and_then(LineUnits::try_from)
    }

    pub fn set_units(&self, value: LineUnits) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, line_codes.Set_Units), value as i32)
    }

    pub fn r1(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, line_codes.Get_R1))
    }

    pub fn set_r1(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, line_codes.Set_R1), value)
    }

    pub fn x1(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, line_codes.Get_X1))
    }

    pub fn set_x1(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, line_codes.Set_X1), value)
    }

    pub fn r0(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, line_codes.Get_R0))
    }

    pub fn set_r0(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, line_codes.Set_R0), value)
    }

    pub fn x0(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, line_codes.Get_X0))
    }

    pub fn set_x0(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, line_codes.Set_X0), value)
    }

    pub fn c1(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, line_codes.Get_C1))
    }

    pub fn set_c1(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, line_codes.Set_C1), value)
    }

    pub fn c0(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, line_codes.Get_C0))
    }

    pub fn set_c0(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, line_codes.Set_C0), value)
    }

    pub fn rmatrix(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, line_codes.Get_Rmatrix_GR))
    }

    pub fn set_rmatrix(&self, value: &[f64]) -> DssResult<()> {
        self.ctx.set_array(entry!(self.ctx, line_codes.Set_Rmatrix), value)
    }

    pub fn xmatrix(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, line_codes.Get_Xmatrix_GR))
    }

    pub fn set_xmatrix(&self, value: &[f64]) -> DssResult<()> {
        self.ctx.set_array(entry!(self.ctx, line_codes.Set_Xmatrix), value)
    }

    pub fn cmatrix(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, line_codes.Get_Cmatrix_GR))
    }

    pub fn set_cmatrix(&self, value: &[f64]) -> DssResult<()> {
        self.ctx.set_array(entry!(self.ctx, line_codes.Set_Cmatrix), value)
    }

    pub fn norm_amps(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, line_codes.Get_NormAmps))
    }

    pub fn set_norm_amps(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, line_codes.Set_NormAmps), value)
    }

    pub fn emerg_amps(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, line_codes.Get_EmergAmps))
    }

    pub fn set_emerg_amps(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, line_codes.Set_EmergAmps), value)
    }

    /// Whether the code was defined with sequence impedances rather than matrices.
    pub fn is_z1z0(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, line_codes.Get_IsZ1Z0))
    }
}
