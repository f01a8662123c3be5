pub mod cost;
pub mod grid;
pub mod local_search;
pub mod placement;

pub use cost::CostEvaluator;
pub use grid::{Cell, Grid};
pub use local_search::{LocalSearch, SearchState, SearchStats, WindowSampler};
pub use placement::{Placement, Rotation};
