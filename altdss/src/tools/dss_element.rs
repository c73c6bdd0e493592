use altdss_runtime::{Context, DssResult, Selection, entry};

use crate::flags::DSSJSONFlags;

/// The active DSS object, of any class.
pub struct DSSElement<'a> {
    ctx: &'a Context,
}

impl<'a> DSSElement<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        DSSElement { ctx }
    }

    pub fn name(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, dss_element.Get_Name))
    }

    pub fn num_properties(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, dss_element.Get_NumProperties))
    }

    pub fn all_property_names(&self) -> DssResult<Vec<String>> {
        self.ctx.get_strings(entry!(self.ctx, dss_element.Get_AllPropertyNames))
    }

    pub fn to_json(&self, options: DSSJSONFlags) -> DssResult<String> {
        self.ctx.invoke_string(entry!(self.ctx, dss_element.ToJSON), |f, ctx| unsafe {
            f(ctx, options.bits())
        })
    }

    /// [`to_json`](Self::to_json), parsed.
    pub fn to_json_value(&self, options: DSSJSONFlags) -> DssResult<serde_json::Value> {
        Ok(serde_json::from_str(&self.to_json(options)?)?)
    }

    /// The object the last selection made active.
    pub fn selection(&self) -> Option<Selection> {
        self.ctx.active_object()
    }
}
