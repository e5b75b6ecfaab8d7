use termfolio_core::input::{ClickTarget, InputEvent, Key};

/// Result of reading one line from stdin.
#[derive(Debug, Clone, PartialEq)]
pub enum LineInput {
    Events(Vec<InputEvent>),
    Quit,
}

/// Map one stdin line to shell input events.
///
/// Plain lines are typed character by character and entered. Directives
/// starting with `:` stand in for keys a line-buffered terminal cannot
/// deliver: `:up`, `:down`, `:clear`, `:click`, `:quit`, and `:tab <text>`
/// which types `text` then presses Tab.
pub fn map_line(line: &str) -> LineInput {
    let line = line.trim_end_matches(['\r', '\n']);
    let key = |k| LineInput::Events(vec![InputEvent::KeyPress(k)]);
    match line {
        ":up" => key(Key::Up),
        ":down" => key(Key::Down),
        ":clear" => key(Key::ClearScreen),
        ":click" => LineInput::Events(vec![InputEvent::Click(ClickTarget::Outside)]),
        ":quit" => LineInput::Quit,
        _ => {
            if let Some(rest) = line.strip_prefix(":tab") {
                let mut events = typed(rest.trim_start());
                events.push(InputEvent::KeyPress(Key::Tab));
                return LineInput::Events(events);
            }
            let mut events = typed(line);
            events.push(InputEvent::KeyPress(Key::Enter));
            LineInput::Events(events)
        },
    }
}

fn typed(text: &str) -> Vec<InputEvent> {
    text.chars().map(InputEvent::TextInput).collect()
}
