//! Data models for the Ole restaurant site content.
//!
//! Field names and shapes match the persisted site JSON exactly so documents
//! saved by earlier versions of the site round-trip without loss.

mod about;
mod contact;
mod event;
mod gallery;
mod hero;
mod menu;
mod platform;
mod review;
mod site;
mod user;

pub use about::*;
pub use contact::*;
pub use event::*;
pub use gallery::*;
pub use hero::*;
pub use menu::*;
pub use platform::*;
pub use review::*;
pub use site::*;
pub use user::*;
