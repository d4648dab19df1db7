use crate::components::base_popup::PopupStyle;
use crate::components::button::{Button, ButtonVariant};
use crate::components::common::{Msg, PopupActivityMsg};
use crate::components::state::ComponentState;
use crate::theme::ThemeManager;
use tui_realm_stdlib::Paragraph;
use tuirealm::{
    Component, Event, MockComponent, NoUserEvent,
    event::{Key, KeyEvent},
    props::{Alignment, TextSpan},
    ratatui::{
        Frame,
        layout::Rect,
        style::{Modifier, Style},
        text::{Line, Span, Text},
        widgets::{Clear, Paragraph as RatatuiParagraph, Wrap},
    },
};

/// Content and styling of a yes/no confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YesNoOptions {
    pub message: String,
    pub yes_label: String,
    pub yes_variant: ButtonVariant,
    pub no_label: String,
    pub no_variant: ButtonVariant,
}

impl Default for YesNoOptions {
    fn default() -> Self {
        Self {
            message: "Are you sure?".to_string(),
            yes_label: "Confirm".to_string(),
            yes_variant: ButtonVariant::Success,
            no_label: "Cancel".to_string(),
            no_variant: ButtonVariant::Error,
        }
    }
}

impl YesNoOptions {
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_yes(mut self, label: impl Into<String>, variant: ButtonVariant) -> Self {
        self.yes_label = label.into();
        self.yes_variant = variant;
        self
    }

    pub fn with_no(mut self, label: impl Into<String>, variant: ButtonVariant) -> Self {
        self.no_label = label.into();
        self.no_variant = variant;
        self
    }
}

/// Modal asking a yes/no question. Answers with
/// `PopupActivityMsg::YesNoResult`.
pub struct YesNoPopup {
    component: Paragraph,
    message: String,
    yes_button: Button,
    no_button: Button,
    yes_focused: bool,
    yes_key: char,
    no_key: char,
    is_mounted: bool,
}

impl YesNoPopup {
    pub fn new(options: YesNoOptions) -> Self {
        Self {
            component: Paragraph::default()
                .alignment(Alignment::Center)
                .text([TextSpan::from(&options.message)]),
            message: options.message,
            yes_button: Button::new(options.yes_label, options.yes_variant),
            no_button: Button::new(options.no_label, options.no_variant),
            yes_focused: true,
            yes_key: 'y',
            no_key: 'n',
            is_mounted: false,
        }
    }

    /// Keys answering yes and no directly, matched case-insensitively
    pub fn with_keys(mut self, yes_key: char, no_key: char) -> Self {
        self.yes_key = yes_key;
        self.no_key = no_key;
        self
    }

    pub fn is_yes_focused(&self) -> bool {
        self.yes_focused
    }

    fn answer(yes: bool) -> Option<Msg> {
        Some(Msg::PopupActivity(PopupActivityMsg::YesNoResult(yes)))
    }
}

fn same_key(a: char, b: char) -> bool {
    a.to_lowercase().eq(b.to_lowercase())
}

impl MockComponent for YesNoPopup {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let style = PopupStyle::default();
        let block = style.block("Confirm");

        let mut lines = vec![Line::from("")];
        for line in self.message.lines() {
            lines.push(Line::from(line.to_string()));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            self.yes_button.span(self.yes_focused),
            Span::raw("    "),
            self.no_button.span(!self.yes_focused),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}]", self.yes_key.to_uppercase()),
                Style::default().fg(ThemeManager::shortcut_key()),
            ),
            Span::styled(
                format!(" {}  ", self.yes_button.label()),
                Style::default().fg(ThemeManager::shortcut_description()),
            ),
            Span::styled(
                format!("[{}]", self.no_key.to_uppercase()),
                Style::default().fg(ThemeManager::shortcut_key()),
            ),
            Span::styled(
                format!(" {}", self.no_button.label()),
                Style::default().fg(ThemeManager::shortcut_description()),
            ),
        ]));

        let paragraph = RatatuiParagraph::new(Text::from(lines))
            .block(block)
            .alignment(tuirealm::ratatui::layout::Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(
                Style::default()
                    .fg(ThemeManager::popup_text())
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_widget(Clear, area);
        frame.render_widget(paragraph, area);
    }

    fn query(&self, attr: tuirealm::Attribute) -> Option<tuirealm::AttrValue> {
        self.component.query(attr)
    }

    fn attr(&mut self, attr: tuirealm::Attribute, value: tuirealm::AttrValue) {
        self.component.attr(attr, value);
    }

    fn state(&self) -> tuirealm::State {
        self.component.state()
    }

    fn perform(&mut self, cmd: tuirealm::command::Cmd) -> tuirealm::command::CmdResult {
        self.component.perform(cmd)
    }
}

impl Component<Msg, NoUserEvent> for YesNoPopup {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        match ev {
            Event::Keyboard(KeyEvent {
                code: Key::Left | Key::Right | Key::Tab | Key::BackTab,
                ..
            }) => {
                self.yes_focused = !self.yes_focused;
                Some(Msg::ForceRedraw)
            }
            Event::Keyboard(KeyEvent {
                code: Key::Enter, ..
            }) => Self::answer(self.yes_focused),
            Event::Keyboard(KeyEvent { code: Key::Esc, .. }) => Self::answer(false),
            Event::Keyboard(KeyEvent {
                code: Key::Char(c), ..
            }) => {
                if same_key(c, self.yes_key) {
                    Self::answer(true)
                } else if same_key(c, self.no_key) {
                    Self::answer(false)
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

impl ComponentState for YesNoPopup {
    fn mount(&mut self) -> crate::error::AppResult<()> {
        log::debug!("Mounting YesNoPopup component");

        if self.is_mounted {
            log::warn!("YesNoPopup is already mounted");
            return Ok(());
        }

        self.is_mounted = true;

        log::debug!("YesNoPopup component mounted successfully");
        Ok(())
    }
}

impl Drop for YesNoPopup {
    fn drop(&mut self) {
        log::debug!("Dropping YesNoPopup component");
        self.is_mounted = false;
        log::debug!("YesNoPopup component dropped");
    }
}
