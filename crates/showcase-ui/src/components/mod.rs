//! Yew renderers for the showcase controllers.

pub(crate) mod accordion;
pub(crate) mod icons;
pub(crate) mod theme_toggle;
