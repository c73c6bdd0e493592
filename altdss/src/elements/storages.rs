use altdss_runtime::{Context, DssResult, EntityKind, entry};

use crate::collection::collection_methods;
use crate::enums::StorageStates;

/// Storage elements.
pub struct Storages<'a> {
    ctx: &'a Context,
}

impl<'a> Storages<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        Storages { ctx }
    }

    collection_methods!(Storages, storages, EntityKind::Storage);

    /// State of charge, per unit of rated energy.
    pub fn pu_soc(&self) -> DssResult<f64> {
        self.ctx.get(entry!(self.ctx, storages.Get_puSOC))
    }

    pub fn set_pu_soc(&self, value: f64) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, storages.Set_puSOC), value)
    }

    pub fn state(&self) -> DssResult<StorageStates> {
        self.ctx.get(entry!(self.ctx, storages.Get_State)).and_then(StorageStates::try_from)
    }

    pub fn set_state(&self, value: StorageStates) -> DssResult<()> {
        self.ctx.set(entry!(self.ctx, storages.Set_State), value as i32)
    }

    pub fn register_names(&self) -> DssResult<Vec<String>> {
        self.ctx.get_strings(entry!(self.ctx, storages.Get_RegisterNames))
    }

    pub fn register_values(&self) -> DssResult<Vec<f64>> {
        self.ctx.get_f64s(entry!(self.ctx, storages.Get_RegisterValues_GR))
    }
}
