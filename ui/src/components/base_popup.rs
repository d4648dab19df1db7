use crate::theme::ThemeManager;
use tuirealm::ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

/// Common popup styling and layout patterns
pub struct PopupStyle {
    pub border_color: Color,
    pub title_color: Color,
    pub text_color: Color,
    pub muted_color: Color,
}

impl Default for PopupStyle {
    fn default() -> Self {
        Self {
            border_color: ThemeManager::primary_accent(),
            title_color: ThemeManager::title_accent(),
            text_color: ThemeManager::popup_text(),
            muted_color: ThemeManager::text_muted(),
        }
    }
}

impl PopupStyle {
    pub fn error() -> Self {
        Self {
            border_color: ThemeManager::status_error(),
            title_color: ThemeManager::status_error(),
            ..Self::default()
        }
    }

    pub fn warning() -> Self {
        Self {
            border_color: ThemeManager::status_warning(),
            title_color: ThemeManager::status_warning(),
            ..Self::default()
        }
    }

    /// Rounded bordered block with a centered bold title
    pub fn block(&self, title: &str) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.border_color))
            .title(format!(" {title} "))
            .title_alignment(Alignment::Center)
            .title_style(
                Style::default()
                    .fg(self.title_color)
                    .add_modifier(Modifier::BOLD),
            )
            .style(Style::default().bg(ThemeManager::surface()))
    }
}

/// Base popup builder for message-only popups
pub struct PopupBuilder {
    title: String,
    style: PopupStyle,
    content_lines: Vec<Line<'static>>,
    instructions: Option<String>,
}

impl PopupBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_style(title, PopupStyle::default())
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::with_style(title, PopupStyle::error())
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::with_style(title, PopupStyle::warning())
    }

    fn with_style(title: impl Into<String>, style: PopupStyle) -> Self {
        Self {
            title: title.into(),
            style,
            content_lines: Vec::new(),
            instructions: None,
        }
    }

    pub fn add_multiline_text(mut self, text: impl Into<String>) -> Self {
        for line in text.into().lines() {
            self.content_lines.push(Line::from(line.to_string()));
        }
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let block = self.style.block(&self.title);

        let mut all_lines = vec![Line::from("")];
        all_lines.extend(self.content_lines);

        if let Some(instructions) = self.instructions {
            all_lines.push(Line::from(""));
            all_lines.push(Line::from(Span::styled(
                instructions,
                Style::default().fg(self.style.muted_color),
            )));
        }

        let paragraph = Paragraph::new(all_lines)
            .block(block)
            .style(
                Style::default()
                    .fg(self.style.text_color)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        frame.render_widget(Clear, area);
        frame.render_widget(paragraph, area);
    }
}

/// Common popup sizing utilities
pub struct PopupLayout;

impl PopupLayout {
    /// Calculate centered popup area with given percentage of screen
    pub fn centered(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
        let width_percent = width_percent.min(100);
        let height_percent = height_percent.min(100);
        let popup_width = ((area.width as u32 * width_percent as u32) / 100) as u16;
        let popup_height = ((area.height as u32 * height_percent as u32) / 100) as u16;

        let x = (area.width.saturating_sub(popup_width)) / 2;
        let y = (area.height.saturating_sub(popup_height)) / 2;

        Rect {
            x: area.x + x,
            y: area.y + y,
            width: popup_width,
            height: popup_height,
        }
    }

    /// Centered area of fixed size, shrunk to fit `area`
    pub fn fixed(area: Rect, width: u16, height: u16) -> Rect {
        let width = width.min(area.width);
        let height = height.min(area.height);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }
}
