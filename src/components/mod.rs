//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the reader chrome, the post list and the single-post
//! view. Navigation is passed in as callbacks; theme and config are read
//! from Leptos context.

pub mod back_button;
pub mod post_card;
pub mod post_list;
pub mod post_view;
pub mod site_header;
pub mod theme_toggle;
