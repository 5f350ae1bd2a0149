//! Browser DOM helpers: checked element lookup, snapshots of live DOM
//! collections, widget-scoped identifiers, and a scroll-to-top button
//! behavior.

pub mod global;
pub mod query;
pub mod scroll_top;
pub mod widget;

pub use query::{LookupError, QueryRoot, element_by_id, elements_by_class, elements_by_tag};
pub use scroll_top::{ScrollTopMachine, Visibility, attach_scroll_top};
pub use widget::WidgetScope;
