use altdss_runtime::{Context, DssResult, EntityKind, entry};

use crate::collection::collection_methods;

/// Protective relays.
pub struct Relays<'a> {
    ctx: &'a Context,
}

impl<'a> Relays<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        Relays { ctx }
    }

    collection_methods!(Relays, relays, EntityKind::Relay);

    pub fn monitored_obj(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, relays.Get_MonitoredObj))
    }

    pub fn set_monitored_obj(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, relays.Set_MonitoredObj), value)
    }

    pub fn monitored_term(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, relays.Get_MonitoredTerm))
    }

    pub fn set_monitored_term(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, relays.Set_MonitoredTerm), value)
    }

    pub fn switched_obj(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, relays.Get_SwitchedObj))
    }

    pub fn set_switched_obj(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, relays.Set_SwitchedObj), value)
    }

    pub fn switched_term(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, relays.Get_SwitchedTerm))
    }

    pub fn set_switched_term(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, relays.Set_SwitchedTerm), value)
    }

    pub fn state(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, relays.Get_State))
    }

    pub fn set_state(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, relays.Set_State), value)
    }

    pub fn normal_state(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, relays.Get_NormalState))
    }

    pub fn set_normal_state(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, relays.Set_NormalState), value)
    }

    pub fn open(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, relays.Open))
    }

    pub fn close(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, relays.Close))
    }

    pub fn reset(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, relays.Reset))
    }
}
