//! Page abstraction shared by every enhancement.
//!
//! The enhancements never reach for browser globals directly. They talk to a
//! [`page::Page`] and look elements up through the [`bindings::Binding`]
//! table, which lets the whole behaviour run against an in-memory page in
//! tests and against `web-sys` in the browser build.

pub mod bindings;
pub mod page;

pub use bindings::{Binding, Capabilities, Capability, Selector};
pub use page::{Heading, Page};
