use altdss_runtime::{Context, DssResult, EntityKind, entry};

use crate::collection::collection_methods;
use crate::enums::LineUnits;

/// Line spacings.
pub struct LineSpacings<'a> {
    ctx: &'a Context,
}

impl<'a> LineSpacings<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        LineSpacings { ctx }
    }

    collection_methods!(LineSpacings, line_spacings, EntityKind::LineSpacing);

    pub fn nconds(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, line_spacings.Get_Nconds))
    }

    pub fn set_nconds(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, line_spacings.Set_Nconds), value)
    }

    pub fn phases(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, line_spacings.Get_Phases))
    }

    pub fn set_phases(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, line_spacings.Set_Phases), value)
    }

    pub fn units(&self) -> DssResult<LineUnits> {
        self.ctx.get(entry!(self.ctx, line_spacings.Get_Units)).and_then(LineUnits::try_from)
    }

    pub fn set_units(&self, value: LineUnits) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, line_spacings.Set_Units), value as i32)
    }

    pub fn xcoords(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, line_spacings.Get_Xcoords_GR))
    }

    pub fn set_xcoords(&self, value: &[f64]) -> DssResult<()> {
        self.ctx.set_array(entry!(self.ctx, line_spacings.Set_Xcoords), value)
    }

    pub fn ycoords(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, line_spacings.Get_Ycoords_GR))
    }

    pub fn set_ycoords(&self, value: &[f64]) -> DssResult<()> {
        self.ctx.set_array(entry!(self.ctx, line_spacings.Set_Ycoords), value)
    }
}
