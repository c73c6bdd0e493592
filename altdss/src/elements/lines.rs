use std::ffi::CString;

use altdss_runtime::{Context, DssResult, EntityKind, Selection, entry};

use crate::collection::collection_methods;
use crate::enums::LineUnits;

/// Line elements of the active circuit.
pub struct Lines<'a> {
    ctx: &'a Context,
}

impl<'a> Lines<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        Lines { ctx }
    }

    collection_methods!(Lines, lines, EntityKind::Line);

    pub fn bus1(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, lines.Get_Bus1))
    }

    pub fn set_bus1(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, lines.Set_Bus1), value)
    }

    pub fn bus2(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, lines.Get_Bus2))
    }

    pub fn set_bus2(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, lines.Set_Bus2), value)
    }

    pub fn line_code(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, lines.Get_LineCode))
    }

    pub fn set_line_code(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, lines.Set_LineCode), value)
    }

    /// Length in `units()`.
    pub fn length(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, lines.Get_Length))
    }

    pub fn set_length(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, lines.Set_Length), value)
    }

    pub fn phases(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, lines.Get_Phases))
    }

    pub fn set_phases(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, lines.Set_Phases), value)
    }

    pub fn r1(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, lines.Get_R1))
    }

    pub fn set_r1(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, lines.Set_R1), value)
    }

    pub fn x1(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, lines.Get_X1))
    }

    pub fn set_x1(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, lines.Set_X1), value)
    }

    pub fn r0(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, lines.Get_R0))
    }

    pub fn set_r0(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, lines.Set_R0), value)
    }

    pub fn x0(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, lines.Get_X0))
    }

    pub fn set_x0(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, lines.Set_X0), value)
    }

    pub fn c1(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, lines.Get_C1))
    }

    pub fn set_c1(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, lines.Set_C1), value)
    }

    pub fn c0(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, lines.Get_C0))
    }

    pub fn set_c0(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, lines.Set_C0), value)
    }

    /// Series resistance matrix, row order, ohms per unit length.
    pub fn rmatrix(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, lines.Get_Rmatrix_GR))
    }

    pub fn set_rmatrix(&self, value: &[f64]) -> DssResult<()> {
        self.ctx.set_array(entry!(self.ctx, lines.Set_Rmatrix), value)
    }

    pub fn xmatrix(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, lines.Get_Xmatrix_GR))
    }

    pub fn set_xmatrix(&self, value: &[f64]) -> DssResult<()> {
        self.ctx.set_array(entry!(self.ctx, lines.Set_Xmatrix), value)
    }

    pub fn cmatrix(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, lines.Get_Cmatrix_GR))
    }

    pub fn set_cmatrix(&self, value: &[f64]) -> DssResult<()> {
        self.ctx.set_array(entry!(self.ctx, lines.Set_Cmatrix), value)
    }

    pub fn norm_amps(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, lines.Get_NormAmps))
    }

    pub fn set_norm_amps(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, lines.Set_NormAmps), value)
    }

    pub fn emerg_amps(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, lines.Get_EmergAmps))
    }

    pub fn set_emerg_amps(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, lines.Set_EmergAmps), value)
    }

    pub fn geometry(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, lines.Get_Geometry))
    }

    pub fn set_geometry(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, lines.Set_Geometry), value)
    }

    pub fn spacing(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, lines.Get_Spacing))
    }

    pub fn set_spacing(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, lines.Set_Spacing), value)
    }

    pub fn rg(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, lines.Get_Rg))
    }

    pub fn set_rg(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, lines.Set_Rg), value)
    }

    pub fn xg(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, lines.Get_Xg))
    }

    pub fn set_xg(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, lines.Set_Xg), value)
    }

    pub fn rho(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, lines.Get_Rho))
    }

    pub fn set_rho(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, lines.Set_Rho), value)
    }

    pub fn yprim(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, lines.Get_Yprim_GR))
    }

    pub fn set_yprim(&self, value: &[f64]) -> DssResult<()> {
        self.ctx.set_array(entry!(self.ctx, lines.Set_Yprim), value)
    }

    pub fn num_cust(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, lines.Get_NumCust))
    }

    pub fn total_cust(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, lines.Get_TotalCust))
    }

    /// Selects the parent PD element and returns its index, 0 at the feeder head.
    pub fn parent(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, lines.Get_Parent))
    }

    pub fn units(&self) -> DssResult<LineUnits> {
        self.ctx.get(entry!(self.ctx, lines.Get_Units)).and_then(LineUnits::try_from)
    }

    pub fn set_units(&self, value: LineUnits) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, lines.Set_Units), value as i32)
    }

    pub fn season_rating(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, lines.Get_SeasonRating))
    }

    /// Whether this line is modelled as a switch.
    pub fn is_switch(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, lines.Get_IsSwitch))
    }

    pub fn set_is_switch(&self, value: bool) -> DssResult<()> {
        self.ctx.set_bool(entry!(self.ctx, lines.Set_IsSwitch), value)
    }

    /// Create a line named `name` and make it active. Returns its index.
    pub fn add(&self, name: &str) -> DssResult<i32> {
        let c_name = CString::new(name)?;
        let index = self.ctx.invoke(entry!(self.ctx, lines.New), |f, ctx| unsafe {
            f(ctx, c_name.as_ptr())
        })?;
        self.ctx.record_selection(Selection::new(EntityKind::Line, Some(index)));
        Ok(index)
    }
}
