pub mod classifier;
pub mod night;
pub mod reconcile;
pub mod status;
pub mod summary;
pub mod timeline;
