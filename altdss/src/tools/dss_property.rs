use altdss_runtime::{Context, DssResult, entry};

/// One property of the active DSS object, chosen by index or name.
pub struct DSSProperty<'a> {
    ctx: &'a Context,
}

impl<'a> DSSProperty<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        DSSProperty { ctx }
    }

    pub fn name(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, dss_property.Get_Name))
    }

    pub fn description(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, dss_property.Get_Description))
    }

    /// Current value in script syntax.
    pub fn value(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, dss_property.Get_Val))
    }

    pub fn set_value(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, dss_property.Set_Val), value)
    }

    pub fn set_index(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, dss_property.Set_Index), value)
    }

    pub fn set_name(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, dss_property.Set_Name), value)
    }
}
