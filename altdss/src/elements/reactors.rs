use altdss_runtime::{Complex64, Context, DssResult, EntityKind, entry};

use crate::collection::collection_methods;

/// Shunt and series reactors.
pub struct Reactors<'a> {
    ctx: &'a Context,
}

impl<'a> Reactors<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        Reactors { ctx }
    }

    collection_methods!(Reactors, reactors, EntityKind::Reactor);

    pub fn bus1(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, reactors.Get_Bus1))
    }

    pub fn set_bus1(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, reactors.Set_Bus1), value)
    }

    pub fn bus2(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, reactors.Get_Bus2))
    }

    pub fn set_bus2(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, reactors.Set_Bus2), value)
    }

    pub fn phases(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, reactors.Get_Phases))
    }

    pub fn set_phases(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, reactors.Set_Phases), value)
    }

    pub fn kv(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, reactors.Get_kV))
    }

    pub fn set_kv(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, reactors.Set_kV), value)
    }

    pub fn kvar(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, reactors.Get_kvar))
    }

    pub fn set_kvar(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, reactors.Set_kvar), value)
    }

    pub fn lmh(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, reactors.Get_LmH))
    }

    pub fn set_lmh(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, reactors.Set_LmH), value)
    }

    pub fn is_delta(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, reactors.Get_IsDelta))
    }

    pub fn set_is_delta(&self, value: bool) -> DssResult<()> {
        self.ctx.set_bool(entry!(self.ctx, reactors.Set_IsDelta), value)
    }

    pub fn parallel(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, reactors.Get_Parallel))
    }

    pub fn set_parallel(&self, value: bool) -> DssResult<()> {
        self.ctx.set_bool(entry!(self.ctx, reactors.Set_Parallel), value)
    }

    /// How the impedance was specified (kvar, R+jX, matrices or symmetrical components).
    pub fn spec_type(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, reactors.Get_SpecType))
    }

    pub fn lcurve(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, reactors.Get_LCurve))
    }

    pub fn set_lcurve(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, reactors.Set_LCurve), value)
    }

    pub fn rcurve(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, reactors.Get_RCurve))
    }

    pub fn set_rcurve(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, reactors.Set_RCurve), value)
    }

    pub fn r(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, reactors.Get_R))
    }

    pub fn set_r(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, reactors.Set_R), value)
    }

    pub fn x(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, reactors.Get_X))
    }

    pub fn set_x(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, reactors.Set_X), value)
    }

    pub fn rp(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, reactors.Get_Rp))
    }

    pub fn set_rp(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, reactors.Set_Rp), value)
    }

    pub fn rmatrix(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, reactors.Get_Rmatrix_GR))
    }

    pub fn set_rmatrix(&self, value: &[f64]) -> DssResult<()> {
        self.ctx.set_array(entry!(self.ctx, reactors.Set_Rmatrix), value)
    }

    pub fn xmatrix(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, reactors.Get_Xmatrix_GR))
    }

    pub fn set_xmatrix(&self, value: &[f64]) -> DssResult<()> {
        self.ctx.set_array(entry!(self.ctx, reactors.Set_Xmatrix), value)
    }

    /// Series impedance, ohms.
    pub fn z(&self) -> DssResult<Complex64> {
        self.ctx.get_complex(entry!(self.ctx, reactors.Get_Z_GR))
    }

    pub fn set_z(&self, value: Complex64) -> DssResult<()> {
        self.ctx.set_complex(entry!(self.ctx, reactors.Set_Z), value)
    }

    pub fn z1(&self) -> DssResult<Complex64> {
        self.ctx.get_complex(entry!(self.ctx, reactors.Get_Z1_GR))
    }

    pub fn set_z1(&self, value: Complex64) -> DssResult<()> {
        self.ctx.set_complex(entry!(self.ctx, reactors.Set_Z1), value)
    }

    pub fn z2(&self) -> DssResult<Complex64> {
        self.ctx.get_complex(entry!(self.ctx, reactors.Get_Z2_GR))
    }

    pub fn set_z2(&self, value: Complex64) -> DssResult<()> {
        self.ctx.set_complex(entry!(self.ctx, reactors.Set_Z2), value)
    }

    pub fn z0(&self) -> DssResult<Complex64> {
        self.ctx.get_complex(entry!(self.ctx, reactors.Get_Z0_GR))
    }

    pub fn set_z0(&self, value: Complex64) -> DssResult<()> {
        self.ctx.set_complex(entry!(self.ctx, reactors.Set_Z0), value)
    }
}
