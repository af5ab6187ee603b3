//! The two persistent stores backing the site.
//!
//! `ContentStore` owns the `SiteData` document; `SessionStore` owns the admin
//! login record. Both write through to a shared [`Storage`](crate::storage::Storage)
//! under their own fixed key on every change.

mod content;
mod session;

pub use content::*;
pub use session::*;
