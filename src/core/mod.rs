pub mod axis;
pub mod limits;
pub mod mapper;
pub mod range;
pub mod scale;
pub mod types;
pub mod zoom;

pub use axis::AxisState;
pub use limits::AxisLimits;
pub use mapper::CoordinateMapper;
pub use range::Range;
pub use scale::{ScaleMode, from_scale_domain, to_scale_domain};
pub use types::{Orientation, PixelSpan, ScrollDirection, SeriesExtent, SeriesPoint, ZoomDirection};
pub use zoom::{BoundarySignal, NavTuning, RangeOutcome, ZoomScrollEngine};
