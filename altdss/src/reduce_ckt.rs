use std::ffi::CString;

use altdss_runtime::{Context, DssResult, entry};

/// Circuit reduction.
pub struct ReduceCkt<'a> {
    ctx: &'a Context,
}

impl<'a> ReduceCkt<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        ReduceCkt { ctx }
    }

    /// Impedance magnitude below which `do_short_lines` merges a line.
    pub fn zmag(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, reduce_ckt.Get_Zmag))
    }

    pub fn set_zmag(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, reduce_ckt.Set_Zmag), value)
    }

    pub fn keep_load(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, reduce_ckt.Get_KeepLoad))
    }

    pub fn set_keep_load(&self, value: bool) -> DssResult<()> {
        self.ctx.set_bool(entry!(self.ctx, reduce_ckt.Set_KeepLoad), value)
    }

    pub fn edit_string(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, reduce_ckt.Get_EditString))
    }

    pub fn set_edit_string(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, reduce_ckt.Set_EditString), value)
    }

    pub fn start_pd_element(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, reduce_ckt.Get_StartPDElement))
    }

    pub fn set_start_pd_element(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, reduce_ckt.Set_StartPDElement), value)
    }

    pub fn energy_meter(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, reduce_ckt.Get_EnergyMeter))
    }

    pub fn set_energy_meter(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, reduce_ckt.Set_EnergyMeter), value)
    }

    pub fn do_default(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, reduce_ckt.DoDefault))
    }

    pub fn do_short_lines(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, reduce_ckt.DoShortLines))
    }

    pub fn do_dangling(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, reduce_ckt.DoDangling))
    }

    pub fn do_loop_break(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, reduce_ckt.DoLoopBreak))
    }

    pub fn do_parallel_lines(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, reduce_ckt.DoParallelLines))
    }

    pub fn do_switches(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, reduce_ckt.DoSwitches))
    }

    pub fn do_1ph_laterals(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, reduce_ckt.Do1phLaterals))
    }

    pub fn do_branch_remove(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, reduce_ckt.DoBranchRemove))
    }

    /// Save the reduced circuit to a directory or master file.
    pub fn save_circuit(&self, dir_or_file: &str) -> DssResult<()> {
        let path = CString::new(dir_or_file)?;
        self.ctx.invoke(entry!(self.ctx, reduce_ckt.SaveCircuit), |f, ctx| unsafe {
            f(ctx, path.as_ptr())
        })
    }
}
