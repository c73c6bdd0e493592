use std::ffi::CString;

use altdss_runtime::{Complex64, Context, DssResult, EntityKind, Selection, entry};

use crate::bus::Bus;
use crate::cktelement::CktElement;
use crate::collection::track_active_element;
use crate::ctrl_queue::CtrlQueue;
use crate::elements::*;
use crate::general::*;
use crate::pd_elements::PDElements;
use crate::reduce_ckt::ReduceCkt;
use crate::settings::Settings;
use crate::solution::Solution;
use crate::tools::DSSElement;
use crate::topology::Topology;

/// The active circuit.
///
/// Also the entry point to every per-category proxy. All proxies borrow the
/// same context, so selecting through one is visible through the others.
pub struct Circuit<'a> {
    ctx: &'a Context,
}

impl<'a> Circuit<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        Circuit { ctx }
    }

    pub fn name(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, circuit.Get_Name))
    }

    pub fn num_ckt_elements(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, circuit.Get_NumCktElements))
    }

    pub fn num_buses(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, circuit.Get_NumBuses))
    }

    /// Total number of nodes (bus terminals) in the circuit.
    pub fn num_nodes(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, circuit.Get_NumNodes))
    }

    pub fn all_bus_names(&self) -> DssResult<Vec<String>> {
        self.ctx.get_strings(entry!(self.ctx, circuit.Get_AllBusNames))
    }

    pub fn all_element_names(&self) -> DssResult<Vec<String>> {
        self.ctx.get_strings(entry!(self.ctx, circuit.Get_AllElementNames))
    }

    /// `bus.node` names in the same order as `all_bus_vmag`.
    pub fn all_node_names(&self) -> DssResult<Vec<String>> {
        self.ctx.get_strings(entry!(self.ctx, circuit.Get_AllNodeNames))
    }

    pub fn y_node_order(&self) -> DssResult<Vec<String>> {
        self.ctx.get_strings(entry!(self.ctx, circuit.Get_YNodeOrder))
    }

    /// Voltage magnitude of every node, volts.
    pub fn all_bus_vmag(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, circuit.Get_AllBusVmag_GR))
    }

    /// Complex voltage of every node, volts.
    pub fn all_bus_volts(&self) -> DssResult<Vec<Complex64>> {
        self.ctx.get_complexes(entry!(self.ctx, circuit.Get_AllBusVolts_GR))
    }

    pub fn all_bus_vmag_pu(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, circuit.Get_AllBusVmagPu_GR))
    }

    pub fn all_bus_distances(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, circuit.Get_AllBusDistances_GR))
    }

    pub fn all_node_distances(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, circuit.Get_AllNodeDistances_GR))
    }

    pub fn all_element_losses(&self) -> DssResult<Vec<Complex64>> {
        self.ctx.get_complexes(entry!(self.ctx, circuit.Get_AllElementLosses_GR))
    }

    pub fn line_losses(&self) -> DssResult<Complex64> {
        self.ctx.get_complex(entry!(self.ctx, circuit.Get_LineLosses_GR))
    }

    /// Total losses, watts and vars.
    pub fn losses(&self) -> DssResult<Complex64> {
        self.ctx.get_complex(entry!(self.ctx, circuit.Get_Losses_GR))
    }

    pub fn substation_losses(&self) -> DssResult<Complex64> {
        self.ctx.get_complex(entry!(self.ctx, circuit.Get_SubstationLosses_GR))
    }

    /// Total power delivered by the sources, kVA.
    pub fn total_power(&self) -> DssResult<Complex64> {
        self.ctx.get_complex(entry!(self.ctx, circuit.Get_TotalPower_GR))
    }

    pub fn y_node_varray(&self) -> DssResult<Vec<Complex64>> {
        self.ctx.get_complexes(entry!(self.ctx, circuit.Get_YNodeVarray_GR))
    }

    pub fn y_currents(&self) -> DssResult<Vec<Complex64>> {
        self.ctx.get_complexes(entry!(self.ctx, circuit.Get_YCurrents_GR))
    }

    pub fn system_y(&self) -> DssResult<Vec<Complex64>> {
        self.ctx.get_complexes(entry!(self.ctx, circuit.Get_SystemY_GR))
    }

    pub fn sample(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, circuit.Sample))
    }

    pub fn save_sample(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, circuit.SaveSample))
    }

    pub fn update_storage(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, circuit.UpdateStorage))
    }

    pub fn end_of_time_step_update(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, circuit.EndOfTimeStepUpdate))
    }

    // ---- Proxies ----

    pub fn active_bus(&self) -> Bus<'a> {
        Bus::new(self.ctx)
    }

    pub fn active_cktelement(&self) -> CktElement<'a> {
        CktElement::new(self.ctx)
    }

    /// Same as [`active_cktelement`](Self::active_cktelement).
    pub fn active_element(&self) -> CktElement<'a> {
        CktElement::new(self.ctx)
    }

    pub fn active_dss_element(&self) -> DSSElement<'a> {
        DSSElement::new(self.ctx)
    }

    pub fn solution(&self) -> Solution<'a> {
        Solution::new(self.ctx)
    }

    pub fn settings(&self) -> Settings<'a> {
        Settings::new(self.ctx)
    }

    pub fn lines(&self) -> Lines<'a> {
        Lines::new(self.ctx)
    }

    pub fn loads(&self) -> Loads<'a> {
        Loads::new(self.ctx)
    }

    pub fn transformers(&self) -> Transformers<'a> {
        Transformers::new(self.ctx)
    }

    pub fn capacitors(&self) -> Capacitors<'a> {
        Capacitors::new(self.ctx)
    }

    pub fn generators(&self) -> Generators<'a> {
        Generators::new(self.ctx)
    }

    pub fn meters(&self) -> Meters<'a> {
        Meters::new(self.ctx)
    }

    pub fn monitors(&self) -> Monitors<'a> {
        Monitors::new(self.ctx)
    }

    pub fn relays(&self) -> Relays<'a> {
        Relays::new(self.ctx)
    }

    pub fn reclosers(&self) -> Reclosers<'a> {
        Reclosers::new(self.ctx)
    }

    pub fn sensors(&self) -> Sensors<'a> {
        Sensors::new(self.ctx)
    }

    pub fn fuses(&self) -> Fuses<'a> {
        Fuses::new(self.ctx)
    }

    pub fn swt_controls(&self) -> SwtControls<'a> {
        SwtControls::new(self.ctx)
    }

    pub fn reg_controls(&self) -> RegControls<'a> {
        RegControls::new(self.ctx)
    }

    pub fn cap_controls(&self) -> CapControls<'a> {
        CapControls::new(self.ctx)
    }

    pub fn pv_systems(&self) -> PVSystems<'a> {
        PVSystems::new(self.ctx)
    }

    pub fn storages(&self) -> Storages<'a> {
        Storages::new(self.ctx)
    }

    pub fn vsources(&self) -> Vsources<'a> {
        Vsources::new(self.ctx)
    }

    pub fn isources(&self) -> ISources<'a> {
        ISources::new(self.ctx)
    }

    pub fn reactors(&self) -> Reactors<'a> {
        Reactors::new(self.ctx)
    }

    pub fn line_codes(&self) -> LineCodes<'a> {
        LineCodes::new(self.ctx)
    }

    pub fn load_shapes(&self) -> LoadShapes<'a> {
        LoadShapes::new(self.ctx)
    }

    pub fn xy_curves(&self) -> XYCurves<'a> {
        XYCurves::new(self.ctx)
    }

    pub fn line_geometries(&self) -> LineGeometries<'a> {
        LineGeometries::new(self.ctx)
    }

    pub fn line_spacings(&self) -> LineSpacings<'a> {
        LineSpacings::new(self.ctx)
    }

    pub fn wire_data(&self) -> WireData<'a> {
        WireData::new(self.ctx)
    }

    pub fn cn_data(&self) -> CNData<'a> {
        CNData::new(self.ctx)
    }

    pub fn ts_data(&self) -> TSData<'a> {
        TSData::new(self.ctx)
    }

    pub fn pd_elements(&self) -> PDElements<'a> {
        PDElements::new(self.ctx)
    }

    pub fn topology(&self) -> Topology<'a> {
        Topology::new(self.ctx)
    }

    pub fn ctrl_queue(&self) -> CtrlQueue<'a> {
        CtrlQueue::new(self.ctx)
    }

    pub fn reduce_ckt(&self) -> ReduceCkt<'a> {
        ReduceCkt::new(self.ctx)
    }

    // ---- Selection ----

    /// Make bus `name` active. Returns its 0-based index, negative when the
    /// circuit has no such bus.
    pub fn set_active_bus(&self, name: &str) -> DssResult<i32> {
        let c_name = CString::new(name)?;
        let index = self.ctx.invoke(entry!(self.ctx, circuit.SetActiveBus), |f, ctx| unsafe {
            f(ctx, c_name.as_ptr())
        })?;
        if index >= 0 {
            self.ctx.record_selection(Selection::new(EntityKind::Bus, Some(index)));
        }
        Ok(index)
    }

    /// Make the bus at 0-based `index` active. Returns 0 on success.
    pub fn set_active_busi(&self, index: i32) -> DssResult<i32> {
        let result = self.ctx.invoke(entry!(self.ctx, circuit.SetActiveBusi), |f, ctx| unsafe {
            f(ctx, index)
        })?;
        if result >= 0 {
            self.ctx.record_selection(Selection::new(EntityKind::Bus, Some(index)));
        }
        Ok(result)
    }

    /// Make the element named `Class.name` the active circuit element.
    /// Returns its index among all elements, negative when not found.
    pub fn set_active_element(&self, full_name: &str) -> DssResult<i32> {
        let c_name = CString::new(full_name)?;
        let index = self.ctx.invoke(entry!(self.ctx, circuit.SetActiveElement), |f, ctx| unsafe {
            f(ctx, c_name.as_ptr())
        })?;
        if index >= 0 {
            let kind = EntityKind::from_full_name(full_name);
            self.ctx.record_active_element(Selection::new(kind, None));
        }
        Ok(index)
    }

    /// Make `class_name` the class iterated by `first_element`/`next_element`.
    pub fn set_active_class(&self, class_name: &str) -> DssResult<i32> {
        let c_name = CString::new(class_name)?;
        self.ctx.invoke(entry!(self.ctx, circuit.SetActiveClass), |f, ctx| unsafe {
            f(ctx, c_name.as_ptr())
        })
    }

    pub fn first_element(&self) -> DssResult<i32> {
        let moved = self.ctx.get(entry!(self.ctx, circuit.FirstElement))?;
        track_active_element(self.ctx, moved)
    }

    pub fn next_element(&self) -> DssResult<i32> {
        let moved = self.ctx.get(entry!(self.ctx, circuit.NextElement))?;
        track_active_element(self.ctx, moved)
    }

    pub fn first_pc_element(&self) -> DssResult<i32> {
        let moved = self.ctx.get(entry!(self.ctx, circuit.FirstPCElement))?;
        track_active_element(self.ctx, moved)
    }

    pub fn next_pc_element(&self) -> DssResult<i32> {
        let moved = self.ctx.get(entry!(self.ctx, circuit.NextPCElement))?;
        track_active_element(self.ctx, moved)
    }

    pub fn first_pd_element(&self) -> DssResult<i32> {
        let moved = self.ctx.get(entry!(self.ctx, circuit.FirstPDElement))?;
        track_active_element(self.ctx, moved)
    }

    pub fn next_pd_element(&self) -> DssResult<i32> {
        let moved = self.ctx.get(entry!(self.ctx, circuit.NextPDElement))?;
        track_active_element(self.ctx, moved)
    }

    /// Move to the parent of the active PD element.
    pub fn parent_pd_element(&self) -> DssResult<i32> {
        let moved = self.ctx.get(entry!(self.ctx, circuit.Get_ParentPDElement))?;
        track_active_element(self.ctx, moved)
    }

    // ---- Element state ----

    pub fn disable(&self, name: &str) -> DssResult<()> {
        let c_name = CString::new(name)?;
        self.ctx.invoke(entry!(self.ctx, circuit.Disable), |f, ctx| unsafe {
            f(ctx, c_name.as_ptr())
        })
    }

    pub fn enable(&self, name: &str) -> DssResult<()> {
        let c_name = CString::new(name)?;
        self.ctx.invoke(entry!(self.ctx, circuit.Enable), |f, ctx| unsafe {
            f(ctx, c_name.as_ptr())
        })
    }

    /// Load multiplier at which the first overload or voltage violation
    /// appears, stepping from `start` by `increment`.
    pub fn capacity(&self, start: f64, increment: f64) -> DssResult<f64> {
        self.ctx.invoke(entry!(self.ctx, circuit.Capacity), |f, ctx| unsafe {
            f(ctx, start, increment)
        })
    }

    // ---- Per-phase views ----

    pub fn all_node_names_by_phase(&self, phase: i32) -> DssResult<Vec<String>> {
        self.ctx.collect_strings(
            entry!(self.ctx, circuit.Get_AllNodeNamesByPhase),
            |f, ctx, data, count| unsafe { f(ctx, data, count, phase) },
        )
    }

    pub fn all_node_vmag_by_phase(&self, phase: i32) -> DssResult<Vec<f64>> {
        self.ctx.fill_f64s(entry!(self.ctx, circuit.Get_AllNodeVmagByPhase_GR), |f, ctx| unsafe {
            f(ctx, phase)
        })
    }

    pub fn all_node_vmag_pu_by_phase(&self, phase: i32) -> DssResult<Vec<f64>> {
        self.ctx.fill_f64s(entry!(self.ctx, circuit.Get_AllNodeVmagPUByPhase_GR), |f, ctx| unsafe {
            f(ctx, phase)
        })
    }

    pub fn all_node_distances_by_phase(&self, phase: i32) -> DssResult<Vec<f64>> {
        self.ctx.fill_f64s(entry!(self.ctx, circuit.Get_AllNodeDistancesByPhase_GR), |f, ctx| unsafe {
            f(ctx, phase)
        })
    }

    /// Losses of the elements at the given 0-based element indices.
    pub fn element_losses(&self, indices: &[i32]) -> DssResult<Vec<Complex64>> {
        self.ctx.fill_complexes(entry!(self.ctx, circuit.Get_ElementLosses_GR), |f, ctx| unsafe {
            f(ctx, indices.as_ptr(), indices.len() as i32)
        })
    }
}
