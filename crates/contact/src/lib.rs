mod composer;
mod draft;
mod entry;
mod error;

pub use composer::Composer;
pub use draft::{Draft, Field};
pub use entry::{ENTRIES, Entry};
pub use error::ContactError;
