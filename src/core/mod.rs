pub mod grouper;
pub mod logic;
pub mod natural_sort;
pub mod sessions;

pub use grouper::{shot_key, split_shots};
pub use logic::{Core, ScanSettings};
pub use natural_sort::{compare_natural, natural_sort, natural_sort_paths};
pub use sessions::{TrailingBreak, cluster_sessions};
