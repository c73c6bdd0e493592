use altdss_runtime::{CStringArray, Context, DssResult, entry};

use crate::collection::sync_active_element;

/// The script interface: run commands as if typed at the engine's prompt.
///
/// Commands can select objects behind the binding's back, so after every
/// call, failed ones included, the context's selection is re-read from the
/// engine.
pub struct Text<'a> {
    ctx: &'a Context,
}

impl<'a> Text<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        Text { ctx }
    }

    /// The last command run.
    pub fn command(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, text.Get_Command))
    }

    /// Run one command (or several, newline-separated).
    pub fn set_command(&self, command: &str) -> DssResult<()> {
        tracing::trace!(target: "altdss::text", command, "running command");
        let result = self.ctx.set_string(entry!(self.ctx, text.Set_Command), command);
        self.resync();
        result
    }

    /// Output of the last command, empty when it printed nothing.
    pub fn result(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, text.Get_Result))
    }

    /// Run each command in order. Stops at the first failing command.
    pub fn commands<S: AsRef<str>>(&self, commands: &[S]) -> DssResult<()> {
        tracing::trace!(target: "altdss::text", count = commands.len(), "running command array");
        let array = CStringArray::new(commands)?;
        let result = self.ctx.invoke(entry!(self.ctx, text.CommandArray), |f, ctx| unsafe {
            f(ctx, array.as_ptr(), array.len())
        });
        self.resync();
        result
    }

    /// Run a multi-line block of commands.
    pub fn command_block(&self, block: &str) -> DssResult<()> {
        let result = self.ctx.set_string(entry!(self.ctx, text.CommandBlock), block);
        self.resync();
        result
    }

    fn resync(&self) {
        sync_active_element(self.ctx);
        if self.ctx.active_bus().is_some()
            && self.ctx.get_string(entry!(self.ctx, bus.Get_Name)).is_err()
        {
            tracing::debug!(target: "altdss::text", "active bus gone after command");
            self.ctx.clear_active_bus();
        }
    }
}
