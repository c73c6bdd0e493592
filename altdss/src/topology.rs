use altdss_runtime::{Context, DssResult, entry};

use crate::collection::track_active_element;

/// Radial topology walker over the PD elements of the active circuit.
pub struct Topology<'a> {
    ctx: &'a Context,
}

impl<'a> Topology<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        Topology { ctx }
    }

    pub fn num_loops(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, topology.Get_NumLoops))
    }

    pub fn num_isolated_branches(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, topology.Get_NumIsolatedBranches))
    }

    pub fn num_isolated_loads(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, topology.Get_NumIsolatedLoads))
    }

    pub fn all_looped_pairs(&self) -> DssResult<Vec<String>> {
        self.ctx.get_strings(entry!(self.ctx, topology.Get_AllLoopedPairs))
    }

    pub fn all_isolated_branches(&self) -> DssResult<Vec<String>> {
        self.ctx.get_strings(entry!(self.ctx, topology.Get_AllIsolatedBranches))
    }

    pub fn all_isolated_loads(&self) -> DssResult<Vec<String>> {
        self.ctx.get_strings(entry!(self.ctx, topology.Get_AllIsolatedLoads))
    }

    pub fn active_branch(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, topology.Get_ActiveBranch))
    }

    /// Depth of the active branch from the feeder head.
    pub fn active_level(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, topology.Get_ActiveLevel))
    }

    pub fn branch_name(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, topology.Get_BranchName))
    }

    pub fn bus_name(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, topology.Get_BusName))
    }

    /// Select the first branch of the radial tree.
    pub fn first(&self) -> DssResult<i32> {
        let moved = self.ctx.get(entry!(self.ctx, topology.Get_First))?;
        track_active_element(self.ctx, moved)
    }

    pub fn next(&self) -> DssResult<i32> {
        let moved = self.ctx.get(entry!(self.ctx, topology.Get_Next))?;
        track_active_element(self.ctx, moved)
    }

    /// Select the first load at the active branch's bus.
    pub fn first_load(&self) -> DssResult<i32> {
        let moved = self.ctx.get(entry!(self.ctx, topology.Get_FirstLoad))?;
        track_active_element(self.ctx, moved)
    }

    pub fn next_load(&self) -> DssResult<i32> {
        let moved = self.ctx.get(entry!(self.ctx, topology.Get_NextLoad))?;
        track_active_element(self.ctx, moved)
    }

    pub fn forward_branch(&self) -> DssResult<i32> {
        let moved = self.ctx.get(entry!(self.ctx, topology.Get_ForwardBranch))?;
        track_active_element(self.ctx, moved)
    }

    pub fn backward_branch(&self) -> DssResult<i32> {
        let moved = self.ctx.get(entry!(self.ctx, topology.Get_BackwardBranch))?;
        track_active_element(self.ctx, moved)
    }

    pub fn looped_branch(&self) -> DssResult<i32> {
        let moved = self.ctx.get(entry!(self.ctx, topology.Get_LoopedBranch))?;
        track_active_element(self.ctx, moved)
    }

    pub fn parallel_branch(&self) -> DssResult<i32> {
        let moved = self.ctx.get(entry!(self.ctx, topology.Get_ParallelBranch))?;
        track_active_element(self.ctx, moved)
    }

    /// Make the named element the active branch.
    pub fn set_branch_name(&self, name: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, topology.Set_BranchName), name)?;
        track_active_element(self.ctx, 1).map(drop)
    }

    /// Make the first branch connected to bus `name` the active branch.
    pub fn set_bus_name(&self, name: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, topology.Set_BusName), name)?;
        track_active_element(self.ctx, 1).map(drop)
    }
}
