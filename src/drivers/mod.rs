//! Bridge drivers: the debounced button watcher and the output mirror.

pub mod edge_watcher;
pub mod output_mirror;
