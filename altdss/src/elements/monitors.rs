use altdss_runtime::{Context, DssResult, EntityKind, entry};

use crate::collection::collection_methods;
use crate::enums::MonitorModes;

/// Monitors and their recorded data.
pub struct Monitors<'a> {
    ctx: &'a Context,
}

impl<'a> Monitors<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        Monitors { ctx }
    }

    collection_methods!(Monitors, monitors, EntityKind::Monitor);

    pub fn element(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, monitors.Get_Element))
    }

    pub fn set_element(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, monitors.Set_Element), value)
    }

    pub fn terminal(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, monitors.Get_Terminal))
    }

    pub fn set_terminal(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, monitors.Set_Terminal), value)
    }

    /// Mode word: base mode plus option bits.
    pub fn mode(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, monitors.Get_Mode))
    }

    pub fn set_mode(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, monitors.Set_Mode), value)
    }

    pub fn file_name(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, monitors.Get_FileName))
    }

    pub fn file_version(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, monitors.Get_FileVersion))
    }

    pub fn header(&self) -> DssResult<Vec<String>> {
        self.ctx.get_strings(entry!(self.ctx, monitors.Get_Header))
    }

    pub fn num_channels(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, monitors.Get_NumChannels))
    }

    pub fn record_size(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, monitors.Get_RecordSize))
    }

    pub fn sample_count(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, monitors.Get_SampleCount))
    }

    pub fn dbl_hour(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, monitors.Get_dblHour_GR))
    }

    pub fn dbl_freq(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, monitors.Get_dblFreq_GR))
    }

    /// Raw recorded data in the engine's monitor file format.
    pub fn byte_stream(&self) -> DssResult<Vec<i8>> {
        self.ctx.get_i8s(entry!(self.ctx, monitors.Get_ByteStream_GR))
    }

    pub fn process(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, monitors.Process))
    }

    pub fn process_all(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, monitors.ProcessAll))
    }

    pub fn reset(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, monitors.Reset))
    }

    pub fn reset_all(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, monitors.ResetAll))
    }

    pub fn sample(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, monitors.Sample))
    }

    pub fn sample_all(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, monitors.SampleAll))
    }

    pub fn save(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, monitors.Save))
    }

    pub fn save_all(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, monitors.SaveAll))
    }

    pub fn show(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, monitors.Show))
    }

    /// Samples of one channel (1-based).
    pub fn channel(&self, index: i32) -> DssResult<Vec<f64>> {
        self.ctx.fill_f64s(entry!(self.ctx, monitors.Get_Channel_GR), |f, ctx| unsafe {
            f(ctx, index)
        })
    }

    /// Mode with the option bits masked off.
    pub fn base_mode(&self) -> DssResult<MonitorModes> {
        MonitorModes::try_from(self.mode()? & MonitorModes::BASE_MASK)
    }
}
