// DOM glue for the rest of the portfolio page. Every hook quietly does nothing
// when its elements are missing.

pub mod debounce;
pub mod form;
pub mod menu;
pub mod nav;
pub mod notify;
pub mod reveal;
pub mod scroll;
pub mod theme;
