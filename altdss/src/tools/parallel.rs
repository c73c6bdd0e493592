use altdss_runtime::{Context, DssResult, entry};

/// Engine-level parallel actors.
pub struct Parallel<'a> {
    ctx: &'a Context,
}

impl<'a> Parallel<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        Parallel { ctx }
    }

    pub fn num_cpus(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, parallel.Get_NumCPUs))
    }

    pub fn num_cores(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, parallel.Get_NumCores))
    }

    pub fn num_of_actors(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, parallel.Get_NumOfActors))
    }

    pub fn active_actor(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, parallel.Get_ActiveActor))
    }

    pub fn set_active_actor(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, parallel.Set_ActiveActor), value)
    }

    pub fn actor_cpu(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, parallel.Get_ActorCPU))
    }

    pub fn set_actor_cpu(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, parallel.Set_ActorCPU), value)
    }

    pub fn create_actor(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, parallel.CreateActor))
    }

    pub fn wait(&self) -> DssResult<()> {
        self.ctx.call(entry!(self.ctx, parallel.Wait))
    }

    pub fn actor_progress(&self) -> DssResult<Vec<i32>> {
        self.ctx.get_i32s(entry!(self.ctx, parallel.Get_ActorProgress_GR))
    }

    pub fn actor_status(&self) -> DssResult<Vec<i32>> {
        self.ctx.get_i32s(entry!(self.ctx, parallel.Get_ActorStatus_GR))
    }

    pub fn active_parallel(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, parallel.Get_ActiveParallel))
    }

    pub fn set_active_parallel(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, parallel.Set_ActiveParallel), value)
    }

    pub fn concatenate_reports(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, parallel.Get_ConcatenateReports))
    }

    pub fn set_concatenate_reports(&self, value: i32) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, parallel.Set_ConcatenateReports), value)
    }
}
