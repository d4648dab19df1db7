use crate::components::button::{Button, ButtonVariant};
use crate::components::common::{Msg, PopupActivityMsg};
use crate::components::state::ComponentState;
use crate::theme::ThemeManager;
use crate::utils;
use tui_realm_stdlib::Paragraph;
use tuirealm::{
    Component, Event, MockComponent, NoUserEvent,
    event::{Key, KeyEvent},
    props::{Alignment, TextSpan},
    ratatui::{
        Frame,
        layout::{Constraint, Direction, Layout, Rect},
        style::{Modifier, Style},
        text::{Line, Span, Text},
        widgets::{Paragraph as RatatuiParagraph, Wrap},
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderOptions {
    pub title: String,
    pub message: String,
    pub show_header: bool,
    pub show_footer: bool,
}

impl Default for PlaceholderOptions {
    fn default() -> Self {
        Self {
            title: "Placeholder".to_string(),
            message: "This functionality is not implemented yet.".to_string(),
            show_header: true,
            show_footer: true,
        }
    }
}

/// Full screen standing in for a feature that does not exist yet
pub struct PlaceholderScreen {
    component: Paragraph,
    options: PlaceholderOptions,
    back_button: Button,
    back_key: char,
    is_mounted: bool,
}

impl PlaceholderScreen {
    pub fn new(options: PlaceholderOptions) -> Self {
        Self {
            component: Paragraph::default()
                .alignment(Alignment::Center)
                .text([TextSpan::from(&options.title), TextSpan::from(&options.message)]),
            options,
            back_button: Button::new("Back", ButtonVariant::Primary),
            back_key: 'b',
            is_mounted: false,
        }
    }

    pub fn with_back_key(mut self, back_key: char) -> Self {
        self.back_key = back_key;
        self
    }

    fn header(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!(" {} ", utils::app_name()),
                Style::default()
                    .fg(ThemeManager::title_accent())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("v{}", utils::version()),
                Style::default().fg(ThemeManager::text_muted()),
            ),
        ])
    }

    fn footer(&self) -> Line<'static> {
        let key = |k: String| Span::styled(k, Style::default().fg(ThemeManager::shortcut_key()));
        let desc =
            |d: &str| Span::styled(d.to_string(), Style::default().fg(ThemeManager::shortcut_description()));
        Line::from(vec![
            key("Enter".to_string()),
            desc(" back  "),
            key("Esc".to_string()),
            desc(" back  "),
            key(self.back_key.to_string()),
            desc(" back"),
        ])
    }
}

impl MockComponent for PlaceholderScreen {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let header_height = if self.options.show_header { 1 } else { 0 };
        let footer_height = if self.options.show_footer { 1 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(header_height),
                Constraint::Min(3),
                Constraint::Length(footer_height),
            ])
            .split(area);

        if self.options.show_header {
            frame.render_widget(
                RatatuiParagraph::new(self.header())
                    .style(Style::default().bg(ThemeManager::header_accent())),
                chunks[0],
            );
        }

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.options.title.clone(),
                Style::default()
                    .fg(ThemeManager::title_accent())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for line in self.options.message.lines() {
            lines.push(Line::from(Span::styled(
                line.to_string(),
                Style::default().fg(ThemeManager::text_primary()),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(self.back_button.span(true)));

        frame.render_widget(
            RatatuiParagraph::new(Text::from(lines))
                .alignment(tuirealm::ratatui::layout::Alignment::Center)
                .wrap(Wrap { trim: true }),
            chunks[1],
        );

        if self.options.show_footer {
            frame.render_widget(RatatuiParagraph::new(self.footer()), chunks[2]);
        }
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

impl Component<Msg, NoUserEvent> for PlaceholderScreen {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        match ev {
            Event::Keyboard(KeyEvent {
                code: Key::Enter | Key::Esc,
                ..
            }) => Some(Msg::PopupActivity(PopupActivityMsg::ClosePlaceholder)),
            Event::Keyboard(KeyEvent {
                code: Key::Char(c), ..
            }) if c == self.back_key => {
                Some(Msg::PopupActivity(PopupActivityMsg::ClosePlaceholder))
            }
            _ => None,
        }
    }
}

impl ComponentState for PlaceholderScreen {
    fn mount(&mut self) -> crate::error::AppResult<()> {
        log::debug!("Mounting PlaceholderScreen component");

        if self.is_mounted {
            log::warn!("PlaceholderScreen is already mounted");
            return Ok(());
        }

        self.is_mounted = true;

        log::debug!("PlaceholderScreen component mounted successfully");
        Ok(())
    }
}

impl Drop for PlaceholderScreen {
    fn drop(&mut self) {
        log::debug!("Dropping PlaceholderScreen component");
        self.is_mounted = false;
        log::debug!("PlaceholderScreen component dropped");
    }
}
