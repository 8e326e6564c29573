/// Row-range partitioning and execution.
pub(crate) mod scheduler;
