//! Presentation layer: pure components receiving state plus callbacks.

pub mod browse;
pub mod card;
pub mod delete_view;
pub mod dropdown;
pub mod form;
pub mod grid;
pub mod icons;
pub mod navbar;
pub mod search_filter;
