//! Form rendering module
//!
//! - `field_renderer`: turns a field into styled, pre-wrapped lines
//! - `membership_form`: the scrolling form view with its submit button

mod field_renderer;
mod membership_form;

pub use membership_form::draw as draw_membership_form;
