// General (non-circuit) objects: codes, shapes, curves and conductor data.

mod cn_data;
mod line_codes;
mod line_geometries;
mod line_spacings;
mod load_shapes;
mod ts_data;
mod wire_data;
mod xy_curves;

pub use cn_data::CNData;
pub use line_codes::LineCodes;
pub use line_geometries::LineGeometries;
pub use line_spacings::LineSpacings;
pub use load_shapes::LoadShapes;
pub use ts_data::TSData;
pub use wire_data::WireData;
pub use xy_curves::XYCurves;
