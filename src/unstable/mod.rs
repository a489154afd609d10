//! First-element pivot quicksorts. Both drivers share [`partition::crawl_partition`] and only
//! differ in how they schedule the pending sub-slices.

pub mod hoare_crawl;
pub mod hoare_crawl_stack;

pub(crate) mod partition;
