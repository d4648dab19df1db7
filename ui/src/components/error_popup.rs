use crate::components::base_popup::PopupBuilder;
use crate::components::common::{Msg, PopupActivityMsg};
use crate::components::state::ComponentState;
use crate::error::AppError;
use crate::theme::ThemeManager;
use tui_realm_stdlib::Paragraph;
use tuirealm::{
    Component, Event, MockComponent, NoUserEvent,
    event::{Key, KeyEvent},
    props::{Alignment, BorderType, Borders, TextModifiers, TextSpan},
    ratatui::{Frame, layout::Rect},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Severity {
    Error,
    Warning,
}

/// Shows an error or warning until Enter or Esc
pub struct ErrorPopup {
    component: Paragraph,
    message: String,
    severity: Severity,
    is_mounted: bool,
}

impl ErrorPopup {
    pub fn new(error: &AppError) -> Self {
        // ErrorReporter has already formatted the message
        Self::build(error.to_string(), Severity::Error)
    }

    pub fn warning(message: &str) -> Self {
        Self::build(message.to_string(), Severity::Warning)
    }

    fn build(message: String, severity: Severity) -> Self {
        let color = match severity {
            Severity::Error => ThemeManager::status_error(),
            Severity::Warning => ThemeManager::status_warning(),
        };
        Self {
            component: Paragraph::default()
                .borders(Borders::default().color(color).modifiers(BorderType::Rounded))
                .foreground(color)
                .modifiers(TextModifiers::BOLD)
                .alignment(Alignment::Center)
                .text([TextSpan::from(&message)]),
            message,
            severity,
            is_mounted: false,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl MockComponent for ErrorPopup {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let builder = match self.severity {
            Severity::Error => PopupBuilder::error("Error"),
            Severity::Warning => PopupBuilder::warning("Warning"),
        };
        builder
            .add_multiline_text(self.message.clone())
            .with_instructions("Press Enter or Esc to close")
            .render(frame, area);
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

impl Component<Msg, NoUserEvent> for ErrorPopup {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        match ev {
            Event::Keyboard(KeyEvent {
                code: Key::Enter | Key::Esc,
                ..
            }) => Some(Msg::PopupActivity(PopupActivityMsg::CloseError)),
            _ => None,
        }
    }
}

impl ComponentState for ErrorPopup {
    fn mount(&mut self) -> crate::error::AppResult<()> {
        log::debug!("Mounting ErrorPopup component");

        if self.is_mounted {
            log::warn!("ErrorPopup is already mounted");
            return Ok(());
        }

        self.is_mounted = true;

        log::debug!("ErrorPopup component mounted successfully");
        Ok(())
    }
}

impl Drop for ErrorPopup {
    fn drop(&mut self) {
        log::debug!("Dropping ErrorPopup component");
        self.is_mounted = false;
        log::debug!("ErrorPopup component dropped");
    }
}
