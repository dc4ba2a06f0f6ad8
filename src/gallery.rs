//! Story gallery
//!
//! Interactive terminal harness that renders the notification under each of
//! its visual variants (message type, position).

mod gallery_events;
mod gallery_render;
mod gallery_state;
mod stories;

pub use gallery_state::GalleryApp;
pub use stories::{STORIES, Story, find_story, parse_story};
