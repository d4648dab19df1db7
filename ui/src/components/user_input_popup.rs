use crate::components::base_popup::PopupStyle;
use crate::components::button::{Button, ButtonVariant};
use crate::components::common::{Msg, PopupActivityMsg};
use crate::components::input_field::{InputChange, InputField, InputKind, Restrict, ValidateOn};
use crate::components::state::ComponentState;
use crate::theme::ThemeManager;
use std::sync::Arc;
use tui_realm_stdlib::Paragraph;
use tuirealm::{
    Component, Event, MockComponent, NoUserEvent,
    event::{Key, KeyEvent, KeyModifiers},
    props::{Alignment, TextSpan},
    ratatui::{
        Frame,
        layout::{Constraint, Direction, Layout, Rect},
        style::{Modifier, Style},
        text::{Line, Span, Text},
        widgets::{Block, BorderType, Borders, Clear, Paragraph as RatatuiParagraph, Wrap},
    },
};
use validators::{StringValidator, Validator};

/// Content, input constraints and validation of a text prompt
#[derive(Clone)]
pub struct UserInputOptions {
    pub message: String,
    pub button_label: String,
    pub button_variant: ButtonVariant,
    pub placeholder: String,
    pub default_value: String,
    pub password: bool,
    pub input_kind: InputKind,
    /// Maximum number of characters, 0 for unlimited
    pub max_length: usize,
    pub restrict: Option<Restrict>,
    pub validators: Vec<StringValidator>,
    pub validate_on: Vec<ValidateOn>,
    pub tooltip: Option<String>,
}

impl Default for UserInputOptions {
    fn default() -> Self {
        Self {
            message: "Please input something".to_string(),
            button_label: "Submit".to_string(),
            button_variant: ButtonVariant::Primary,
            placeholder: "Please input something.".to_string(),
            default_value: String::new(),
            password: false,
            input_kind: InputKind::Text,
            max_length: 0,
            restrict: None,
            validators: Vec::new(),
            validate_on: ValidateOn::ALL.to_vec(),
            tooltip: None,
        }
    }
}

impl UserInputOptions {
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_button(mut self, label: impl Into<String>, variant: ButtonVariant) -> Self {
        self.button_label = label.into();
        self.button_variant = variant;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    pub fn with_password(mut self, password: bool) -> Self {
        self.password = password;
        self
    }

    pub fn with_input_kind(mut self, kind: InputKind) -> Self {
        self.input_kind = kind;
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_restrict(mut self, restrict: impl Fn(char) -> bool + Send + Sync + 'static) -> Self {
        self.restrict = Some(Arc::new(restrict));
        self
    }

    pub fn with_validator(mut self, validator: StringValidator) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn with_validate_on(mut self, triggers: impl IntoIterator<Item = ValidateOn>) -> Self {
        self.validate_on.clear();
        for trigger in triggers {
            if !self.validate_on.contains(&trigger) {
                self.validate_on.push(trigger);
            }
        }
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }
}

/// Modal prompting for one line of text.
///
/// Answers with `UserInputResult(value)` on a valid submit and
/// `UserInputCancelled` on Esc. A submit that fails validation keeps the
/// popup open and shows the first failing reason.
pub struct UserInputPopup {
    component: Paragraph,
    message: String,
    placeholder: String,
    tooltip: Option<String>,
    field: InputField,
    button: Button,
    validators: Vec<StringValidator>,
    validate_on: Vec<ValidateOn>,
    input_focused: bool,
    reason: Option<String>,
    is_mounted: bool,
}

impl UserInputPopup {
    pub fn new(options: UserInputOptions) -> Self {
        let field = InputField::new()
            .with_kind(options.input_kind)
            .with_max_length(options.max_length)
            .with_restrict(options.restrict)
            .with_password(options.password)
            .with_value(&options.default_value);

        Self {
            component: Paragraph::default()
                .alignment(Alignment::Center)
                .text([TextSpan::from(&options.message)]),
            message: options.message,
            placeholder: options.placeholder,
            tooltip: options.tooltip,
            field,
            button: Button::new(options.button_label, options.button_variant),
            validators: options.validators,
            validate_on: options.validate_on,
            input_focused: true,
            reason: None,
            is_mounted: false,
        }
    }

    pub fn value(&self) -> String {
        self.field.value()
    }

    /// Reason shown under the field after the last failed validation
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    pub fn is_input_focused(&self) -> bool {
        self.input_focused
    }

    /// First failure for `value`: the input kind check, then each validator in order
    pub fn first_failure(&self, value: &str) -> Option<String> {
        if let Err(e) = self.field.kind().validate(value) {
            return Some(e.user_message());
        }
        self.validators
            .iter()
            .find_map(|validator| validator.outcome(value).reason().map(str::to_string))
    }

    fn validates_on(&self, trigger: ValidateOn) -> bool {
        self.validate_on.contains(&trigger)
    }

    fn run_validation(&mut self) -> bool {
        self.reason = self.first_failure(&self.field.value());
        if let Some(reason) = &self.reason {
            log::debug!("Input rejected: {reason}");
        }
        self.reason.is_none()
    }

    fn submit(&mut self) -> Option<Msg> {
        if self.validates_on(ValidateOn::Submitted) && !self.run_validation() {
            return Some(Msg::ForceRedraw);
        }
        Some(Msg::PopupActivity(PopupActivityMsg::UserInputResult(
            self.field.value(),
        )))
    }

    fn toggle_focus(&mut self) -> Option<Msg> {
        let leaving_input = self.input_focused;
        self.input_focused = !self.input_focused;
        if leaving_input && self.validates_on(ValidateOn::Blur) {
            self.run_validation();
        }
        Some(Msg::ForceRedraw)
    }

    fn edit(&mut self, key: Key, modifiers: KeyModifiers) -> Option<Msg> {
        match self.field.handle_key(key, modifiers) {
            InputChange::Edited => {
                if self.validates_on(ValidateOn::Changed) {
                    self.run_validation();
                } else {
                    self.reason = None;
                }
                Some(Msg::ForceRedraw)
            }
            InputChange::Moved => Some(Msg::ForceRedraw),
            InputChange::Ignored => None,
        }
    }

    fn input_line(&self) -> Line<'static> {
        if self.field.is_empty() {
            Line::from(Span::styled(
                self.placeholder.clone(),
                Style::default().fg(ThemeManager::text_muted()),
            ))
        } else {
            Line::from(Span::styled(
                self.field.display_text(),
                Style::default().fg(ThemeManager::text_primary()),
            ))
        }
    }
}

impl MockComponent for UserInputPopup {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let style = PopupStyle::default();
        let block = style.block("Input");
        let inner = block.inner(area);

        frame.render_widget(Clear, area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Length(1),
            ])
            .split(inner);

        let message_lines: Vec<Line> = self
            .message
            .lines()
            .map(|line| Line::from(line.to_string()))
            .collect();
        frame.render_widget(
            RatatuiParagraph::new(Text::from(message_lines))
                .alignment(tuirealm::ratatui::layout::Alignment::Center)
                .wrap(Wrap { trim: true })
                .style(
                    Style::default()
                        .fg(ThemeManager::popup_text())
                        .add_modifier(Modifier::BOLD),
                ),
            chunks[0],
        );

        let border_color = if self.reason.is_some() {
            ThemeManager::status_error()
        } else if self.input_focused {
            ThemeManager::primary_accent()
        } else {
            ThemeManager::text_muted()
        };
        let input_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));
        let input_inner = input_block.inner(chunks[1]);
        frame.render_widget(
            RatatuiParagraph::new(self.input_line()).block(input_block),
            chunks[1],
        );
        if self.input_focused {
            let offset = (self.field.cursor() as u16).min(input_inner.width.saturating_sub(1));
            frame.set_cursor_position((input_inner.x + offset, input_inner.y));
        }

        let mut hint_lines = Vec::new();
        if let Some(reason) = &self.reason {
            hint_lines.push(Line::from(Span::styled(
                reason.clone(),
                Style::default().fg(ThemeManager::status_error()),
            )));
        }
        if let Some(tooltip) = &self.tooltip {
            hint_lines.push(Line::from(Span::styled(
                tooltip.clone(),
                Style::default().fg(ThemeManager::status_info()),
            )));
        }
        frame.render_widget(
            RatatuiParagraph::new(Text::from(hint_lines)).wrap(Wrap { trim: true }),
            chunks[2],
        );

        frame.render_widget(
            RatatuiParagraph::new(Line::from(vec![
                self.button.span(!self.input_focused),
                Span::styled(
                    "   Tab switch focus, Enter submit, Esc cancel",
                    Style::default().fg(ThemeManager::shortcut_description()),
                ),
            ]))
            .alignment(tuirealm::ratatui::layout::Alignment::Center),
            chunks[3],
        );
    }

    fn query(&self, attr: tuirealm::Attribute) -> Option<tuirealm::AttrValue> {
        self.component.query(attr)
    }

    fn attr(&mut self, attr: tuirealm::Attribute, value: tuirealm::AttrValue) {
        self.component.attr(attr, value);
    }

    fn state(&self) -> tuirealm::State {
        tuirealm::State::One(tuirealm::StateValue::String(self.field.value()))
    }

    fn perform(&mut self, cmd: tuirealm::command::Cmd) -> tuirealm::command::CmdResult {
        self.component.perform(cmd)
    }
}

impl Component<Msg, NoUserEvent> for UserInputPopup {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        let Event::Keyboard(KeyEvent { code, modifiers, .. }) = ev else {
            return None;
        };

        match code {
            Key::Esc => Some(Msg::PopupActivity(PopupActivityMsg::UserInputCancelled)),
            Key::Enter => self.submit(),
            Key::Tab | Key::BackTab => self.toggle_focus(),
            key if self.input_focused => self.edit(key, modifiers),
            _ => None,
        }
    }
}

impl ComponentState for UserInputPopup {
    fn mount(&mut self) -> crate::error::AppResult<()> {
        log::debug!("Mounting UserInputPopup component");

        if self.is_mounted {
            log::warn!("UserInputPopup is already mounted");
            return Ok(());
        }

        self.is_mounted = true;

        log::debug!("UserInputPopup component mounted successfully");
        Ok(())
    }
}

impl Drop for UserInputPopup {
    fn drop(&mut self) {
        log::debug!("Dropping UserInputPopup component");
        self.is_mounted = false;
        log::debug!("UserInputPopup component dropped");
    }
}
