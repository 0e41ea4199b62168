//! exovision-pipeline — The data presentation pipeline.
//!
//! Pure, total transforms applied to catalog records before they reach a
//! view: field normalization, sorting, pagination, and the Pearson
//! correlation matrix. Every function here is side-effect free, accepts any
//! input without erroring, and is safe to re-run on every render.

pub mod correlate;
pub mod normalize;
pub mod paginate;
pub mod sort;

pub use correlate::{CorrelationMatrix, Feature};
pub use paginate::PageWindow;
pub use sort::{SortDirection, SortField, SortSpec};
