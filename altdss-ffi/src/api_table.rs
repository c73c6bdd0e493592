use std::ffi::c_void;

use crate::tables::*;

// ---------------------------------------------------------------------------
// Main entry-point table
// ---------------------------------------------------------------------------

/// Every engine entry point this binding knows about, grouped by category.
///
/// Built once per loaded engine library (see `DssApi::load_with`) and then
/// only read. Fields are plain copies of function pointers, so the table is
/// `Send + Sync`.
#[derive(Clone, Copy, Default)]
pub struct DssApi {
    // ---- Lifecycle and infrastructure ----
    pub lifecycle: LifecycleApi,
    pub memory: MemoryApi,
    pub dss: DssInterfaceApi,
    pub error: ErrorApi,
    pub text: TextApi,

    // ---- Circuit-level interfaces ----
    pub circuit: CircuitApi,
    pub bus: BusApi,
    pub ckt_element: CktElementApi,
    pub solution: SolutionApi,
    pub settings: SettingsApi,
    pub pd_elements: PDElementsApi,
    pub topology: TopologyApi,
    pub ctrl_queue: CtrlQueueApi,
    pub reduce_ckt: ReduceCktApi,
    pub y_matrix: YMatrixApi,

    // ---- Circuit element categories ----
    pub lines: LinesApi,
    pub loads: LoadsApi,
    pub transformers: TransformersApi,
    pub capacitors: CapacitorsApi,
    pub generators: GeneratorsApi,
    pub meters: MetersApi,
    pub monitors: MonitorsApi,
    pub relays: RelaysApi,
    pub reclosers: ReclosersApi,
    pub sensors: SensorsApi,
    pub fuses: FusesApi,
    pub swt_controls: SwtControlsApi,
    pub reg_controls: RegControlsApi,
    pub cap_controls: CapControlsApi,
    pub pv_systems: PVSystemsApi,
    pub storages: StoragesApi,
    pub vsources: VsourcesApi,
    pub isources: ISourcesApi,
    pub reactors: ReactorsApi,

    // ---- General (non-circuit) object categories ----
    pub line_codes: LineCodesApi,
    pub load_shapes: LoadShapesApi,
    pub xy_curves: XYCurvesApi,
    pub line_geometries: LineGeometriesApi,
    pub line_spacings: LineSpacingsApi,
    pub wire_data: WireDataApi,
    pub cn_data: CNDataApi,
    pub ts_data: TSDataApi,

    // ---- Tools ----
    pub active_class: ActiveClassApi,
    pub dss_element: DSSElementApi,
    pub dss_property: DSSPropertyApi,
    pub parser: ParserApi,
    pub executive: ExecutiveApi,
    pub zip: ZIPApi,
    pub parallel: ParallelApi,
    pub cmath_lib: CmathLibApi,
}

macro_rules! for_each_table {
    ($mac:ident) => {
        $mac! {
            lifecycle: LifecycleApi,
            memory: MemoryApi,
            dss: DssInterfaceApi,
            error: ErrorApi,
            text: TextApi,
            circuit: CircuitApi,
            bus: BusApi,
            ckt_element: CktElementApi,
            solution: SolutionApi,
            settings: SettingsApi,
            pd_elements: PDElementsApi,
            topology: TopologyApi,
            ctrl_queue: CtrlQueueApi,
            reduce_ckt: ReduceCktApi,
            y_matrix: YMatrixApi,
            lines: LinesApi,
            loads: LoadsApi,
            transformers: TransformersApi,
            capacitors: CapacitorsApi,
            generators: GeneratorsApi,
            meters: MetersApi,
            monitors: MonitorsApi,
            relays: RelaysApi,
            reclosers: ReclosersApi,
            sensors: SensorsApi,
            fuses: FusesApi,
            swt_controls: SwtControlsApi,
            reg_controls: RegControlsApi,
            cap_controls: CapControlsApi,
            pv_systems: PVSystemsApi,
            storages: StoragesApi,
            vsources: VsourcesApi,
            isources: ISourcesApi,
            reactors: ReactorsApi,
            line_codes: LineCodesApi,
            load_shapes: LoadShapesApi,
            xy_curves: XYCurvesApi,
            line_geometries: LineGeometriesApi,
            line_spacings: LineSpacingsApi,
            wire_data: WireDataApi,
            cn_data: CNDataApi,
            ts_data: TSDataApi,
            active_class: ActiveClassApi,
            dss_element: DSSElementApi,
            dss_property: DSSPropertyApi,
            parser: ParserApi,
            executive: ExecutiveApi,
            zip: ZIPApi,
            parallel: ParallelApi,
            cmath_lib: CmathLibApi
        }
    };
}

macro_rules! impl_dss_api {
    ($($field:ident : $table:ident),* $(,)?) => {
        impl DssApi {
            /// A table with no resolved entry points.
            pub const fn empty() -> Self {
                DssApi {
                    $($field: $table::empty(),)*
                }
            }

            /// Resolve every entry point of every sub-table through `resolve`.
            ///
            /// # Safety
            /// Every non-null address returned by `resolve` must point to a
            /// function with the signature declared for that symbol.
            pub unsafe fn load_with(
                resolve: &mut dyn FnMut(&'static str) -> *const c_void,
            ) -> Self {
                DssApi {
                    $($field: unsafe { $table::load_with(resolve) },)*
                }
            }

            /// Every symbol that did not resolve, across all sub-tables.
            pub fn missing(&self) -> Vec<&'static str> {
                let mut out = Vec::new();
                $(out.extend(self.$field.missing());)*
                out
            }

            /// Total number of entry points declared across all sub-tables.
            pub fn symbol_count() -> usize {
                0 $(+ $table::SYMBOLS.len())*
            }
        }
    };
}

for_each_table!(impl_dss_api);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_reports_every_symbol_missing() {
        assert_eq!(DssApi::empty().missing().len(), DssApi::symbol_count());
    }

    #[test]
    fn core_symbols_follow_engine_naming() {
        assert!(LifecycleApi::SYMBOLS.contains(&"ctx_New"));
        assert!(DssInterfaceApi::SYMBOLS.contains(&"ctx_DSS_GetGRPointers"));
        assert!(ErrorApi::SYMBOLS.contains(&"ctx_Error_Get_NumberPtr"));
        assert!(MemoryApi::SYMBOLS.contains(&"DSS_Dispose_PPAnsiChar"));
        assert!(LinesApi::SYMBOLS.contains(&"ctx_Lines_Get_First"));
    }

    #[test]
    fn load_with_queries_every_symbol_once() {
        let mut queried = 0usize;
        let api = unsafe {
            DssApi::load_with(&mut |_name| {
                queried += 1;
                std::ptr::null()
            })
        };
        assert_eq!(queried, DssApi::symbol_count());
        assert!(api.lines.Get_First.is_none());
    }
}
