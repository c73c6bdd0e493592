use altdss_runtime::{Context, DssResult, entry};

/// The engine's command-line parser, usable on arbitrary strings.
pub struct Parser<'a> {
    ctx: &'a Context,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        Parser { ctx }
    }

    pub fn cmd_string(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, parser.Get_CmdString))
    }

    pub fn set_cmd_string(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, parser.Set_CmdString), value)
    }

    /// Advance to the next parameter; returns its name (empty when positional).
    pub fn next_param(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, parser.Get_NextParam))
    }

    pub fn auto_increment(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, parser.Get_AutoIncrement))
    }

    pub fn set_auto_increment(&self, value: bool) -> DssResult<()> {
        self.ctx.set_bool(entry!(self.ctx, parser.Set_AutoIncrement), value)
    }

    pub fn delimiters(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, parser.Get_Delimiters))
    }

    pub fn set_delimiters(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, parser.Set_Delimiters), value)
    }

    pub fn white_space(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, parser.Get_WhiteSpace))
    }

    pub fn set_white_space(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, parser.Set_WhiteSpace), value)
    }

    pub fn begin_quote(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, parser.Get_BeginQuote))
    }

    pub fn set_begin_quote(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, parser.Set_BeginQuote), value)
    }

    pub fn end_quote(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, parser.Get_EndQuote))
    }

    pub fn set_end_quote(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, parser.Set_EndQuote), value)
    }

    pub fn str_value(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, parser.Get_StrValue))
    }

    pub fn int_value(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, parser.Get_IntValue))
    }

    pub fn dbl_value(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, parser.Get_DblValue))
    }

    pub fn reset_delimiters(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, parser.ResetDelimiters))
    }

    /// Parse the current token as a square matrix of `expected_order`.
    pub fn matrix(&self, expected_order: i32) -> DssResult<Vec<f64>> {
        self.ctx.fill_f64s(entry!(self.ctx, parser.Get_Matrix_GR), |f, ctx| unsafe {
            f(ctx, expected_order)
        })
    }

    /// Parse the current token as a lower-triangular matrix, expanded to full.
    pub fn sym_matrix(&self, expected_order: i32) -> DssResult<Vec<f64>> {
        self.ctx.fill_f64s(entry!(self.ctx, parser.Get_SymMatrix_GR), |f, ctx| unsafe {
            f(ctx, expected_order)
        })
    }

    pub fn vector(&self, expected_size: i32) -> DssResult<Vec<f64>> {
        self.ctx.fill_f64s(entry!(self.ctx, parser.Get_Vector_GR), |f, ctx| unsafe {
            f(ctx, expected_size)
        })
    }
}
