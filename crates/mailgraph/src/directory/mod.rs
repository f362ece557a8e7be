//! Directory lookups against the tenant's user list.

mod lookup;
mod model;

pub use model::{Contact, DirectoryUser};
