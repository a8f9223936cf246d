use patcher_core::Msg;
use patcher_logging::patcher_warn;

use super::constants::EXAMPLE_MODELS;

pub const EXAMPLE_COMMAND: &str = ":example";

/// Maps one line typed on the terminal to UI messages.
///
/// `:example <MODEL|N>` clicks an example chip; anything else is typed into
/// the model input and the trigger is pressed.
pub fn parse_line(line: &str) -> Vec<Msg> {
    if let Some(rest) = line.trim().strip_prefix(EXAMPLE_COMMAND) {
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            return match find_example(rest.trim()) {
                Some(model) => vec![Msg::ExampleChosen(model.to_string())],
                None => {
                    patcher_warn!(
                        "Unknown example {:?}; choose one of {}",
                        rest.trim(),
                        EXAMPLE_MODELS.join(", ")
                    );
                    Vec::new()
                }
            };
        }
    }
    vec![Msg::InputChanged(line.to_string()), Msg::SubmitClicked]
}

fn find_example(wanted: &str) -> Option<&'static str> {
    if let Ok(index) = wanted.parse::<usize>() {
        return index.checked_sub(1).and_then(|i| EXAMPLE_MODELS.get(i)).copied();
    }
    EXAMPLE_MODELS
        .iter()
        .find(|model| model.eq_ignore_ascii_case(wanted))
        .copied()
}
