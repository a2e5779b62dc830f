//! The activity sheet: schema check and parsing, the CSV-backed store and
//! the diff that pushes edits back.

pub mod diff;
pub mod store;
pub mod table;
pub mod view;

pub use diff::{ChangePlan, plan_changes};
pub use store::SheetStore;
pub use table::SheetTable;
