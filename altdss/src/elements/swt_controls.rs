use altdss_runtime::{Context, DssResult, EntityKind, entry};

use crate::collection::collection_methods;
use crate::enums::ActionCodes;

/// Switch controls.
pub struct SwtControls<'a> {
    ctx: &'a Context,
}

impl<'a> SwtControls<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        SwtControls { ctx }
    }

    collection_methods!(SwtControls, swt_controls, EntityKind::SwtControl);

    pub fn switched_obj(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, swt_controls.Get_SwitchedObj))
    }

    pub fn set_switched_obj(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, swt_controls.Set_SwitchedObj), value)
    }

    pub fn switched_term(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, swt_controls.Get_SwitchedTerm))
    }

    pub fn set_switched_term(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, swt_controls.Set_SwitchedTerm), value)
    }

    pub fn action(&self) -> DssResult<ActionCodes> {
        self.ctx.get(entry!(self.ctx, swt_controls.Get_Action)).and_then(ActionCodes::try_from)
    }

    pub fn set_action(&self, value: ActionCodes) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, swt_controls.Set_Action), value as i32)
    }

    pub fn delay(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, swt_controls.Get_Delay))
    }

    pub fn set_delay(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, swt_controls.Set_Delay), value)
    }

    pub fn is_locked(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, swt_controls.Get_IsLocked))
    }

    pub fn set_is_locked(&self, value: bool) -> DssResult<()> {
        self.ctx.set_bool(entry!(self.ctx, swt_controls.Set_IsLocked), value)
    }

    pub fn state(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, swt_controls.Get_State))
    }

    pub fn set_state(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, swt_controls.Set_State), value)
    }

    pub fn normal_state(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, swt_controls.Get_NormalState))
    }

    pub fn set_normal_state(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, swt_controls.Set_NormalState), value)
    }

    pub fn reset(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, swt_controls.Reset))
    }
}
