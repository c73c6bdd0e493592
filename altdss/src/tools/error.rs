use altdss_runtime::{Context, DssResult, entry};

/// Direct view of the context's error channel.
///
/// Reading `number` or `description` here does not clear the pending error;
/// every other call checks and clears it.
pub struct Error<'a> {
    ctx: &'a Context,
}

impl<'a> Error<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        Error { ctx }
    }

    /// Whether a failing command aborts the rest of a script.
    pub fn early_abort(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, error.Get_EarlyAbort))
    }

    pub fn set_early_abort(&self, value: bool) -> DssResult<()> {
        self.ctx.set_bool(entry!(self.ctx, error.Set_EarlyAbort), value)
    }

    /// Whether the engine reports extra errors for operations on missing objects.
    pub fn extended_errors(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, error.Get_ExtendedErrors))
    }

    pub fn set_extended_errors(&self, value: bool) -> DssResult<()> {
        self.ctx.set_bool(entry!(self.ctx, error.Set_ExtendedErrors), value)
    }

    /// Pending error number, 0 when none.
    pub fn number(&self) -> DssResult<i32> {
        self.ctx.peek(entry!(self.ctx, error.Get_Number))
    }

    pub fn description(&self) -> DssResult<String> {
        self.ctx.peek_string(entry!(self.ctx, error.Get_Description))
    }
}
