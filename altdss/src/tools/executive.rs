use altdss_runtime::{Context, DssResult, entry};

/// Catalogue of script commands and options, indexed from 1.
pub struct Executive<'a> {
    ctx: &'a Context,
}

impl<'a> Executive<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        Executive { ctx }
    }

    pub fn num_commands(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, executive.Get_NumCommands))
    }

    pub fn num_options(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, executive.Get_NumOptions))
    }

    /// Name of the `index`-th command.
    pub fn command(&self, index: i32) -> DssResult<String> {
        self.ctx.invoke_string(entry!(self.ctx, executive.Get_Command), |f, ctx| unsafe { f(ctx, index) })
    }

    pub fn command_help(&self, index: i32) -> DssResult<String> {
        self.ctx.invoke_string(entry!(self.ctx, executive.Get_CommandHelp), |f, ctx| unsafe { f(ctx, index) })
    }

    pub fn option(&self, index: i32) -> DssResult<String> {
        self.ctx.invoke_string(entry!(self.ctx, executive.Get_Option), |f, ctx| unsafe { f(ctx, index) })
    }

    pub fn option_help(&self, index: i32) -> DssResult<String> {
        self.ctx.invoke_string(entry!(self.ctx, executive.Get_OptionHelp), |f, ctx| unsafe { f(ctx, index) })
    }

    /// Current value of the `index`-th option.
    pub fn option_value(&self, index: i32) -> DssResult<String> {
        self.ctx.invoke_string(entry!(self.ctx, executive.Get_OptionValue), |f, ctx| unsafe { f(ctx, index) })
    }
}
