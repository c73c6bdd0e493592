// Shared cursor protocol for every enumerable category.
//
// Each category table starts with the same eight entry points (AllNames,
// Count, First, Next, Name, idx and their setters). `collection_methods!`
// expands them into proxy methods that also keep the context's selection in
// step with the engine.

use altdss_runtime::{Context, DssResult, EntityKind, Entry, Selection, StringGetFn, entry};

macro_rules! collection_methods {
    ($proxy:ident, $table:ident, $kind:expr) => {
        /// Names of every object in this category.
        pub fn all_names(&self) -> ::altdss_runtime::DssResult<Vec<String>> {
            self.ctx.get_strings(::altdss_runtime::entry!(self.ctx, $table.Get_AllNames))
        }

        pub fn count(&self) -> ::altdss_runtime::DssResult<i32> {
            self.ctx.get(::altdss_runtime::entry!(self.ctx, $table.Get_Count))
        }

        /// Select the first object. Returns 0 when the category is empty.
        pub fn first(&self) -> ::altdss_runtime::DssResult<i32> {
            self.ctx.step(
                ::altdss_runtime::entry!(self.ctx, $table.Get_First),
                $kind,
                Some(::altdss_runtime::entry!(self.ctx, $table.Get_idx)),
            )
        }

        /// Select the next object. Returns 0 past the last one.
        pub fn next(&self) -> ::altdss_runtime::DssResult<i32> {
            self.ctx.step(
                ::altdss_runtime::entry!(self.ctx, $table.Get_Next),
                $kind,
                Some(::altdss_runtime::entry!(self.ctx, $table.Get_idx)),
            )
        }

        /// Name of the active object.
        pub fn name(&self) -> ::altdss_runtime::DssResult<String> {
            self.ctx.get_string(::altdss_runtime::entry!(self.ctx, $table.Get_Name))
        }

        /// Select an object by name.
        pub fn set_name(&self, name: &str) -> ::altdss_runtime::DssResult<()> {
            self.ctx.select_name(
                ::altdss_runtime::entry!(self.ctx, $table.Set_Name),
                $kind,
                Some(::altdss_runtime::entry!(self.ctx, $table.Get_idx)),
                name,
            )
        }

        /// 1-based index of the active object, 0 when none.
        pub fn idx(&self) -> ::altdss_runtime::DssResult<i32> {
            self.ctx.get(::altdss_runtime::entry!(self.ctx, $table.Get_idx))
        }

        /// Select an object by 1-based index.
        pub fn set_idx(&self, index: i32) -> ::altdss_runtime::DssResult<()> {
            self.ctx.select_idx(::altdss_runtime::entry!(self.ctx, $table.Set_idx), $kind, index)
        }

        /// Walk the category with First/Next, yielding each object's name.
        ///
        /// The walk moves the engine cursor; whatever was active before is
        /// not restored.
        pub fn iter(&self) -> $crate::collection::NameIter<'a> {
            $crate::collection::NameIter::new(
                self.ctx,
                |ctx, first| {
                    let proxy = $proxy::new(ctx);
                    if first { proxy.first() } else { proxy.next() }
                },
                ::altdss_runtime::entry!(self.ctx, $table.Get_Name),
            )
        }
    };
}

pub(crate) use collection_methods;

type StepFn = fn(&Context, bool) -> DssResult<i32>;

/// Iterator over the names of a category, driven by First/Next.
///
/// Stops at the first 0 from the engine. An error is yielded once and ends
/// the walk.
pub struct NameIter<'a> {
    ctx: &'a Context,
    step: StepFn,
    name: Entry<StringGetFn>,
    started: bool,
    finished: bool,
}

impl<'a> NameIter<'a> {
    pub(crate) fn new(ctx: &'a Context, step: StepFn, name: Entry<StringGetFn>) -> Self {
        NameIter {
            ctx,
            step,
            name,
            started: false,
            finished: false,
        }
    }
}

impl Iterator for NameIter<'_> {
    type Item = DssResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let first = !self.started;
        self.started = true;
        let moved = match (self.step)(self.ctx, first) {
            Ok(moved) => moved,
            Err(err) => {
                self.finished = true;
                return Some(Err(err));
            }
        };
        if moved == 0 {
            self.finished = true;
            return None;
        }
        let name = self.ctx.get_string(self.name);
        if name.is_err() {
            self.finished = true;
        }
        Some(name)
    }
}

impl std::iter::FusedIterator for NameIter<'_> {}

/// Record the active circuit element after a move whose target class is only
/// known by name (whole-circuit and topology walks).
pub(crate) fn track_active_element(ctx: &Context, moved: i32) -> DssResult<i32> {
    if moved > 0 {
        let name = ctx.get_string(entry!(ctx, ckt_element.Get_Name))?;
        ctx.record_active_element(Selection::new(EntityKind::from_full_name(&name), None));
    }
    Ok(moved)
}

/// Re-read the engine's active circuit element after an operation that may
/// have moved it in ways the binding cannot predict (scripts). Selections
/// are dropped when the engine reports no active element.
pub(crate) fn sync_active_element(ctx: &Context) {
    match ctx.get_string(entry!(ctx, ckt_element.Get_Name)) {
        Ok(name) if !name.is_empty() => {
            ctx.record_active_element(Selection::new(EntityKind::from_full_name(&name), None));
        }
        _ => ctx.clear_selections(),
    }
}
