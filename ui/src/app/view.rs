use crate::app::model::{ActivePopup, AppState, Model};
use crate::components::base_popup::PopupLayout;
use crate::components::common::{ComponentId, Msg};
use crate::error::{AppError, AppResult};
use crate::theme::ThemeManager;
use crate::utils;
use tuirealm::ratatui::layout::{Constraint, Direction, Layout, Rect};
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::ratatui::widgets::Paragraph;
use tuirealm::terminal::TerminalAdapter;
use tuirealm::{Application, Frame, NoUserEvent};

const MENU_WIDTH: u16 = 44;
const ERROR_POPUP_WIDTH: u16 = 64;
const ERROR_POPUP_HEIGHT: u16 = 12;

// Render the error popup centered on the screen
pub fn view_error_popup(app: &mut Application<ComponentId, Msg, NoUserEvent>, f: &mut Frame) {
    let area = PopupLayout::fixed(f.area(), ERROR_POPUP_WIDTH, ERROR_POPUP_HEIGHT);
    app.view(&ComponentId::ErrorPopup, f, area);
}

pub fn view_menu(
    app: &mut Application<ComponentId, Msg, NoUserEvent>,
    f: &mut Frame,
    id: &ComponentId,
    area: Rect,
) {
    // Two lines per entry, plus borders, padding and the hint line
    let entries = match id {
        ComponentId::MainMenu => 4,
        _ => 5,
    };
    let menu_area = PopupLayout::fixed(area, MENU_WIDTH, entries * 2 + 4);
    app.view(id, f, menu_area);
}

fn title_line() -> Line<'static> {
    Line::from(vec![
        Span::styled(
            utils::app_name(),
            Style::default()
                .fg(ThemeManager::title_accent())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" v{}", utils::version()),
            Style::default().fg(ThemeManager::text_muted()),
        ),
    ])
}

fn help_line(quit_key: char) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            quit_key.to_string(),
            Style::default().fg(ThemeManager::shortcut_key()),
        ),
        Span::styled(
            " quit  ",
            Style::default().fg(ThemeManager::shortcut_description()),
        ),
        Span::styled("Esc", Style::default().fg(ThemeManager::shortcut_key())),
        Span::styled(
            " back  ",
            Style::default().fg(ThemeManager::shortcut_description()),
        ),
        Span::styled("Enter", Style::default().fg(ThemeManager::shortcut_key())),
        Span::styled(
            " select",
            Style::default().fg(ThemeManager::shortcut_description()),
        ),
    ])
}

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn view(&mut self) -> AppResult<()> {
        let popup_width = self.config.ui().popup_width();
        let popup_height = self.config.ui().popup_height();
        let quit_key = self.config.keys().quit();
        let app_state = self.app_state;
        let popup_id = match self.popup {
            Some(ActivePopup::ConfirmQuit) => Some(ComponentId::YesNoPopup),
            Some(ActivePopup::Input(_)) => Some(ComponentId::UserInputPopup),
            None => None,
        };
        let app = &mut self.app;

        self.terminal
            .draw(|f| {
                if app_state == AppState::Placeholder {
                    let area = f.area();
                    app.view(&ComponentId::PlaceholderScreen, f, area);
                } else {
                    let chunks = Layout::default()
                        .direction(Direction::Vertical)
                        .margin(1)
                        .constraints([
                            Constraint::Length(1), // Title
                            Constraint::Length(1), // Result label
                            Constraint::Min(8),    // Menu
                            Constraint::Length(1), // Help bar
                        ])
                        .split(f.area());

                    f.render_widget(
                        Paragraph::new(title_line())
                            .alignment(tuirealm::ratatui::layout::Alignment::Center),
                        chunks[0],
                    );
                    app.view(&ComponentId::ResultLabel, f, chunks[1]);

                    let menu = match app_state {
                        AppState::InputExamples => ComponentId::InputMenu,
                        _ => ComponentId::MainMenu,
                    };
                    view_menu(app, f, &menu, chunks[2]);
                    f.render_widget(Paragraph::new(help_line(quit_key)), chunks[3]);
                }

                if let Some(id) = &popup_id {
                    let area = PopupLayout::centered(f.area(), popup_width, popup_height);
                    app.view(id, f, area);
                }

                if app.mounted(&ComponentId::ErrorPopup) {
                    view_error_popup(app, f);
                }
            })
            .map_err(|e| AppError::Component(e.to_string()))?;

        Ok(())
    }
}
