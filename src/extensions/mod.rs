pub mod compression;
pub mod observers;

pub use compression::{CompressionLevel, compress_series};
pub use observers::{AxisTarget, NavEvent, NavObserver};
