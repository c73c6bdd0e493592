use altdss_runtime::{Context, DssResult, EntityKind, Selection, entry};

use crate::collection::NameIter;
use crate::flags::DSSJSONFlags;

/// The class chosen with `IDSS::set_active_class`, iterated generically.
pub struct ActiveClass<'a> {
    ctx: &'a Context,
}

impl<'a> ActiveClass<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        ActiveClass { ctx }
    }

    pub fn active_class_name(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, active_class.Get_ActiveClassName))
    }

    pub fn active_class_parent(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, active_class.Get_ActiveClassParent))
    }

    pub fn all_names(&self) -> DssResult<Vec<String>> {
        self.ctx.get_strings(entry!(self.ctx, active_class.Get_AllNames))
    }

    pub fn count(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, active_class.Get_Count))
    }

    pub fn name(&self) -> DssResult<String> {
        self.ctx.get_string(entry!(self.ctx, active_class.Get_Name))
    }

    pub fn num_elements(&self) -> DssResult<i32> {
        self.ctx.get(entry!(self.ctx, active_class.Get_NumElements))
    }

    pub fn first(&self) -> DssResult<i32> {
        let moved = self.ctx.get(entry!(self.ctx, active_class.Get_First))?;
        self.track(moved)
    }

    pub fn next(&self) -> DssResult<i32> {
        let moved = self.ctx.get(entry!(self.ctx, active_class.Get_Next))?;
        self.track(moved)
    }

    pub fn set_name(&self, name: &str) -> DssResult<()> {
        self.ctx.set_string(entry!(self.ctx, active_class.Set_Name), name)?;
        self.track(1).map(drop)
    }

    pub fn iter(&self) -> NameIter<'a> {
        NameIter::new(
            self.ctx,
            |ctx, first| {
                let class = ActiveClass::new(ctx);
                if first { class.first() } else { class.next() }
            },
            entry!(self.ctx, active_class.Get_Name),
        )
    }

    /// Every object of the class as a JSON array.
    pub fn to_json(&self, options: DSSJSONFlags) -> DssResult<String> {
        self.ctx.invoke_string(entry!(self.ctx, active_class.ToJSON), |f, ctx| unsafe {
            f(ctx, options.bits())
        })
    }

    pub fn to_json_value(&self, options: DSSJSONFlags) -> DssResult<serde_json::Value> {
        Ok(serde_json::from_str(&self.to_json(options)?)?)
    }

    fn track(&self, moved: i32) -> DssResult<i32> {
        if moved == 0 {
            return Ok(moved);
        }
        let class = self.active_class_name()?;
        let kind = EntityKind::from_class_name(&class);
        if kind != EntityKind::Other {
            self.ctx.record_selection(Selection::new(kind, None));
            return Ok(moved);
        }
        // A class without its own kind: it moved the active circuit element
        // only if the engine now reports this object there.
        let full_name = format!("{class}.{}", self.name()?);
        match self.ctx.get_string(entry!(self.ctx, ckt_element.Get_Name)) {
            Ok(active) if active.eq_ignore_ascii_case(&full_name) => {
                self.ctx.record_active_element(Selection::new(kind, None))
            }
            _ => self.ctx.record_selection(Selection::new(kind, None)),
        }
        Ok(moved)
    }
}
