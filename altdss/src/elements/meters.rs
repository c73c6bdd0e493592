use altdss_ffi::to_dss_bool;
use altdss_runtime::{Context, DssResult, EntityKind, entry};

use crate::collection::collection_methods;

/// Energy meters and their zones.
pub struct Meters<'a> {
    ctx: &'a Context,
}

impl<'a> Meters<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        Meters { ctx }
    }

    collection_methods!(Meters, meters, EntityKind::EnergyMeter);

    pub fn metered_element(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, meters.Get_MeteredElement))
    }

    pub fn set_metered_element(&self, value: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, meters.Set_MeteredElement), value)
    }

    pub fn metered_terminal(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, meters.Get_MeteredTerminal))
    }

    pub fn set_metered_terminal(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, meters.Set_MeteredTerminal), value)
    }

    pub fn register_names(&self) -> DssResult<Vec<String>> {
        self.ctx.get_strings(entry!(self.ctx, meters.Get_RegisterNames))
    }

    pub fn register_values(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, meters.Get_RegisterValues_GR))
    }

    /// Sum of every meter register.
    pub fn totals(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, meters.Get_Totals_GR))
    }

    pub fn peak_current(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, meters.Get_Peakcurrent_GR))
    }

    pub fn set_peak_current(&self, value: &[f64]) -> DssResult<()> {
        self.ctx.set_array(entry!(self.ctx, meters.Set_Peakcurrent), value)
    }

    pub fn calc_current(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, meters.Get_CalcCurrent_GR))
    }

    pub fn set_calc_current(&self, value: &[f64]) -> DssResult<()> {
        self.ctx.set_array(entry!(self.ctx, meters.Set_CalcCurrent), value)
    }

    pub fn alloc_factors(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, meters.Get_AllocFactors_GR))
    }

    pub fn set_alloc_factors(&self, value: &[f64]) -> DssResult<()> {
        self.ctx.set_array(entry!(self.ctx, meters.Set_AllocFactors), value)
    }

    pub fn all_branches_in_zone(&self) -> DssResult<Vec<String>> {
        self.ctx.get_strings(entry!(self.ctx, meters.Get_AllBranchesInZone))
    }

    pub fn all_end_elements(&self) -> DssResult<Vec<String>> {
        self.ctx.get_strings(entry!(self.ctx, meters.Get_AllEndElements))
    }

    pub fn zone_pce(&self) -> DssResult<Vec<String>> {
        self.ctx.get_strings(entry!(self.ctx, meters.Get_ZonePCE))
    }

    pub fn count_branches(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, meters.Get_CountBranches))
    }

    pub fn count_end_elements(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, meters.Get_CountEndElements))
    }

    pub fn di_files_are_open(&self) -> DssResult<bool> {
        self.ctx.get_bool(entry!(self.ctx, meters.Get_DIFilesAreOpen))
    }

    pub fn num_sections(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, meters.Get_NumSections))
    }

    pub fn num_section_branches(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, meters.Get_NumSectionBranches))
    }

    pub fn num_section_customers(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, meters.Get_NumSectionCustomers))
    }

    pub fn ocp_device_type(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, meters.Get_OCPDeviceType))
    }

    pub fn sect_seq_idx(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, meters.Get_SectSeqIdx))
    }

    pub fn sect_total_cust(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, meters.Get_SectTotalCust))
    }

    pub fn seq_list_size(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, meters.Get_SeqListSize))
    }

    /// Index into the meter zone's branch sequence list.
    pub fn sequence_index(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, meters.Get_SequenceIndex))
    }

    pub fn set_sequence_index(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, meters.Set_SequenceIndex), value)
    }

    pub fn total_customers(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, meters.Get_TotalCustomers))
    }

    pub fn avg_repair_time(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, meters.Get_AvgRepairTime))
    }

    pub fn cust_interrupts(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, meters.Get_CustInterrupts))
    }

    pub fn fault_rate_x_repair_hrs(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, meters.Get_FaultRateXRepairHrs))
    }

    pub fn sum_branch_flt_rates(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, meters.Get_SumBranchFltRates))
    }

    pub fn saidi(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, meters.Get_SAIDI))
    }

    pub fn saifi(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, meters.Get_SAIFI))
    }

    pub fn saifi_kw(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, meters.Get_SAIFIKW))
    }

    pub fn reset(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, meters.Reset))
    }

    pub fn reset_all(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, meters.ResetAll))
    }

    pub fn sample(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, meters.Sample))
    }

    pub fn sample_all(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, meters.SampleAll))
    }

    pub fn save(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, meters.Save))
    }

    pub fn save_all(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, meters.SaveAll))
    }

    pub fn open_all_di_files(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, meters.OpenAllDIFiles))
    }

    pub fn close_all_di_files(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, meters.CloseAllDIFiles))
    }

    /// Run the reliability calculation for every meter zone.
    pub fn do_reliability_calc(&self, assume_restoration: bool) -> DssResult<()> {
        self.ctx.invoke(entry!(self.ctx, meters.DoReliabilityCalc), |f, ctx| unsafe {
            f(ctx, to_dss_bool(assume_restoration))
        })
    }

    pub fn set_active_section(&self, section: i32) -> DssResult<()> {
        self.ctx.invoke(entry!(self.ctx, meters.SetActiveSection), |f, ctx| unsafe {
            f(ctx, section)
        })
    }
}
