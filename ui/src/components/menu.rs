use crate::components::base_popup::PopupStyle;
use crate::components::button::Button;
use crate::components::common::{MenuAction, MenuActivityMsg, Msg};
use crate::components::state::ComponentState;
use crate::theme::ThemeManager;
use tui_realm_stdlib::Paragraph;
use tuirealm::{
    Component, Event, MockComponent, NoUserEvent, State, StateValue,
    event::{Key, KeyEvent},
    props::{Alignment, TextSpan},
    ratatui::{
        Frame,
        layout::Rect,
        style::Style,
        text::{Line, Span, Text},
        widgets::Paragraph as RatatuiParagraph,
    },
};

/// One selectable menu button
#[derive(Debug, Clone)]
pub struct MenuEntry {
    pub button: Button,
    pub action: MenuAction,
}

impl MenuEntry {
    pub fn new(button: Button, action: MenuAction) -> Self {
        Self { button, action }
    }
}

/// Vertical list of buttons. Enter selects, Esc or the back key goes back.
pub struct DemoMenu {
    component: Paragraph,
    title: String,
    entries: Vec<MenuEntry>,
    selected: usize,
    back_key: char,
    is_mounted: bool,
}

impl DemoMenu {
    pub fn new(title: impl Into<String>, entries: Vec<MenuEntry>) -> Self {
        let title = title.into();
        Self {
            component: Paragraph::default()
                .alignment(Alignment::Center)
                .text([TextSpan::from(&title)]),
            title,
            entries,
            selected: 0,
            back_key: 'b',
            is_mounted: false,
        }
    }

    pub fn with_back_key(mut self, back_key: char) -> Self {
        self.back_key = back_key;
        self
    }

    pub fn selected_action(&self) -> Option<MenuAction> {
        self.entries.get(self.selected).map(|entry| entry.action)
    }

    fn move_selection(&mut self, forward: bool) {
        let len = self.entries.len();
        if len == 0 {
            return;
        }
        self.selected = if forward {
            (self.selected + 1) % len
        } else {
            (self.selected + len - 1) % len
        };
    }
}

impl MockComponent for DemoMenu {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let block = PopupStyle::default().block(&self.title);

        let mut lines = vec![Line::from("")];
        for (index, entry) in self.entries.iter().enumerate() {
            lines.push(Line::from(entry.button.span(index == self.selected)));
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            format!("Up/Down move  Enter select  Esc/{} back", self.back_key),
            Style::default().fg(ThemeManager::shortcut_description()),
        )));

        frame.render_widget(
            RatatuiParagraph::new(Text::from(lines))
                .block(block)
                .alignment(tuirealm::ratatui::layout::Alignment::Center),
            area,
        );
    }

    fn query(&self, attr: tuirealm::Attribute) -> Option<tuirealm::AttrValue> {
        self.component.query(attr)
    }

    fn attr(&mut self, attr: tuirealm::Attribute, value: tuirealm::AttrValue) {
        self.component.attr(attr, value);
    }

    fn state(&self) -> State {
        State::One(StateValue::Usize(self.selected))
    }

    fn perform(&mut self, cmd: tuirealm::command::Cmd) -> tuirealm::command::CmdResult {
        self.component.perform(cmd)
    }
}

impl Component<Msg, NoUserEvent> for DemoMenu {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        let Event::Keyboard(KeyEvent { code, .. }) = ev else {
            return None;
        };

        match code {
            Key::Down | Key::Tab => {
                self.move_selection(true);
                Some(Msg::ForceRedraw)
            }
            Key::Up | Key::BackTab => {
                self.move_selection(false);
                Some(Msg::ForceRedraw)
            }
            Key::Enter => self
                .selected_action()
                .map(|action| Msg::MenuActivity(MenuActivityMsg::Selected(action))),
            Key::Esc => Some(Msg::MenuActivity(MenuActivityMsg::Back)),
            Key::Char(c) if c == self.back_key => Some(Msg::MenuActivity(MenuActivityMsg::Back)),
            _ => None,
        }
    }
}

impl ComponentState for DemoMenu {
    fn mount(&mut self) -> crate::error::AppResult<()> {
        log::debug!("Mounting DemoMenu '{}'", self.title);

        if self.is_mounted {
            log::warn!("DemoMenu is already mounted");
            return Ok(());
        }

        self.is_mounted = true;
        Ok(())
    }
}

impl Drop for DemoMenu {
    fn drop(&mut self) {
        log::debug!("Dropping DemoMenu '{}'", self.title);
        self.is_mounted = false;
    }
}
