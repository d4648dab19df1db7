use crate::components::common::Msg;
use tui_realm_stdlib::Phantom;
use tuirealm::event::{Key, KeyEvent, KeyModifiers};
use tuirealm::{Component, Event, MockComponent, NoUserEvent};

/// Sees every key event and turns the quit key into `Msg::RequestQuit`.
///
/// Suppressed while a dialog owns the keyboard, so typing the quit key into
/// an input field does not trigger it.
#[derive(MockComponent)]
pub struct GlobalKeyWatcher {
    component: Phantom,
    quit_key: char,
    suppressed: bool,
}

impl GlobalKeyWatcher {
    pub fn new(quit_key: char, suppressed: bool) -> Self {
        Self {
            component: Phantom::default(),
            quit_key,
            suppressed,
        }
    }
}

impl Component<Msg, NoUserEvent> for GlobalKeyWatcher {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        match ev {
            Event::Keyboard(KeyEvent {
                code: Key::Char('c'),
                modifiers: KeyModifiers::CONTROL,
            }) => Some(Msg::AppClose),
            Event::Keyboard(KeyEvent {
                code: Key::Char(c),
                modifiers: KeyModifiers::NONE,
            }) if !self.suppressed && c == self.quit_key => Some(Msg::RequestQuit),
            _ => None,
        }
    }
}
