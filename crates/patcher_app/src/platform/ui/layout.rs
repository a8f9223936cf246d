use patcher_core::AppState;

use super::constants::EXAMPLE_MODELS;
use super::input::EXAMPLE_COMMAND;
use super::render::render;
use crate::platform::context::Page;

/// The page as first shown: idle controller, no job, nothing to download.
pub fn initial_page() -> Page {
    let mut page = Page::default();
    for command in render(&AppState::new().view()) {
        page.apply(&command);
    }
    page
}

pub fn usage_lines() -> Vec<String> {
    vec![
        "Type a device model (5-20 characters) and press Enter to generate its 120FPS patch."
            .to_string(),
        format!(
            "Examples: {} (pick one with `{} <MODEL>`)",
            EXAMPLE_MODELS.join(", "),
            EXAMPLE_COMMAND
        ),
    ]
}
