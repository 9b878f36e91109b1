//! Domain types.
//!
//! Values that flow through one run: fetched secrets and the variable
//! entries derived from them.

mod entry;
mod secret;

pub use entry::Entry;
pub use secret::Secret;
