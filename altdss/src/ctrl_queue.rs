use altdss_runtime::{Context, DssResult, entry};

/// The control action queue.
pub struct CtrlQueue<'a> {
    ctx: &'a Context,
}

impl<'a> CtrlQueue<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        CtrlQueue { ctx }
    }

    pub fn clear_queue(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, ctrl_queue.ClearQueue))
    }

    pub fn clear_actions(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, ctrl_queue.ClearActions))
    }

    pub fn do_all_queue(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, ctrl_queue.DoAllQueue))
    }

    pub fn show(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, ctrl_queue.Show))
    }

    pub fn num_actions(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, ctrl_queue.Get_NumActions))
    }

    pub fn set_action(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, ctrl_queue.Set_Action), value)
    }

    pub fn action_code(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, ctrl_queue.Get_ActionCode))
    }

    pub fn device_handle(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, ctrl_queue.Get_DeviceHandle))
    }

    /// Pop the next action off the queue; returns the remaining count.
    pub fn pop_action(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, ctrl_queue.Get_PopAction))
    }

    pub fn queue_size(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, ctrl_queue.Get_QueueSize))
    }

    pub fn queue(&self) -> DssResult<Vec<String>> {
        self.ctx.get_strings(entry!(self.ctx, ctrl_queue.Get_Queue))
    }

    pub fn delete(&self, handle: i32) -> DssResult<()> {
        self.ctx.invoke(entry!(self.ctx, ctrl_queue.Delete), |f, ctx| unsafe { f(ctx, handle) })
    }

    /// Queue an action for `device_handle` at the given time. Returns the
    /// queue handle of the new entry.
    pub fn push(&self, hour: i32, seconds: f64, action_code: i32, device_handle: i32) -> DssResult<i32> {
        self.ctx.invoke(entry!(self.ctx, ctrl_queue.Push), |f, ctx| unsafe {
            f(ctx, hour, seconds, action_code, device_handle)
        })
    }
}
