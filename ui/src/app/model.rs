use crate::app::demo;
use crate::components::common::{ComponentId, InputExample, Msg};
use crate::components::error_popup::ErrorPopup;
use crate::components::global_key_watcher::GlobalKeyWatcher;
use crate::components::menu::DemoMenu;
use crate::components::placeholder_screen::PlaceholderScreen;
use crate::components::state::ComponentStateMount;
use crate::components::text_label::TextLabel;
use crate::components::user_input_popup::UserInputPopup;
use crate::components::yes_no_popup::YesNoPopup;
use crate::config::AppConfig;
use crate::error::{AppError, AppResult, ErrorReporter};
use std::sync::mpsc::{self, Receiver, Sender};
use tuirealm::event::NoUserEvent;
use tuirealm::terminal::{CrosstermTerminalAdapter, TerminalAdapter, TerminalBridge};
use tuirealm::{Application, AttrValue, Attribute, EventListenerCfg, Sub, SubClause, SubEventClause};

/// Screen shown underneath any popup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    MainMenu,
    InputExamples,
    Placeholder,
}

/// The dialog currently open above the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivePopup {
    ConfirmQuit,
    Input(InputExample),
}

/// Application model
pub struct Model<T>
where
    T: TerminalAdapter,
{
    /// Application
    pub app: Application<ComponentId, Msg, NoUserEvent>,
    pub app_state: AppState,
    pub popup: Option<ActivePopup>,
    /// Indicates that the application must quit
    pub quit: bool,
    /// Tells whether to redraw interface
    pub redraw: bool,
    /// Used to draw to terminal
    pub terminal: TerminalBridge<T>,

    pub tx_to_main: Sender<Msg>,
    pub rx_to_main: Receiver<Msg>,
    pub error_reporter: ErrorReporter,

    pub config: &'static AppConfig,
}

impl Model<CrosstermTerminalAdapter> {
    pub fn new(config: &'static AppConfig) -> AppResult<Self> {
        let (tx_to_main, rx_to_main) = mpsc::channel();
        let error_reporter = ErrorReporter::new(tx_to_main.clone());

        Ok(Self {
            app: Self::init_app(config)?,
            app_state: AppState::MainMenu,
            popup: None,
            quit: false,
            redraw: true,
            terminal: TerminalBridge::init_crossterm()
                .map_err(|e| AppError::Component(e.to_string()))?,
            tx_to_main,
            rx_to_main,
            error_reporter,
            config,
        })
    }
}

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    fn init_app(config: &AppConfig) -> AppResult<Application<ComponentId, Msg, NoUserEvent>> {
        let mut app: Application<ComponentId, Msg, NoUserEvent> = Application::init(
            EventListenerCfg::default()
                .crossterm_input_listener(
                    config.crossterm_input_listener_interval(),
                    config.crossterm_input_listener_retries(),
                )
                .poll_timeout(config.poll_timeout())
                .tick_interval(config.tick_interval()),
        );

        app.mount(
            ComponentId::ResultLabel,
            Box::new(TextLabel::new(demo::INITIAL_RESULT)),
            Vec::default(),
        )
        .map_err(|e| AppError::Component(e.to_string()))?;

        let back_key = config.keys().back();
        app.mount_with_state(
            ComponentId::MainMenu,
            DemoMenu::new("Main Menu", demo::main_menu_entries()).with_back_key(back_key),
            Vec::default(),
        )?;
        app.mount_with_state(
            ComponentId::InputMenu,
            DemoMenu::new("User Input Examples", demo::input_menu_entries())
                .with_back_key(back_key),
            Vec::default(),
        )?;

        app.mount(
            ComponentId::GlobalKeyWatcher,
            Box::new(GlobalKeyWatcher::new(config.keys().quit(), false)),
            vec![Sub::new(SubEventClause::Any, SubClause::Always)],
        )
        .map_err(|e| AppError::Component(e.to_string()))?;

        app.active(&ComponentId::MainMenu)
            .map_err(|e| AppError::Component(e.to_string()))?;

        Ok(app)
    }

    pub fn update_outside_msg(&mut self) {
        // Messages sent through the ErrorReporter
        while let Ok(msg) = self.rx_to_main.try_recv() {
            let mut msg = Some(msg);
            while msg.is_some() {
                msg = self.handle_update(msg);
            }
        }
    }

    /// Component owning the keyboard for the current screen
    pub fn screen_component(&self) -> ComponentId {
        match self.app_state {
            AppState::MainMenu => ComponentId::MainMenu,
            AppState::InputExamples => ComponentId::InputMenu,
            AppState::Placeholder => ComponentId::PlaceholderScreen,
        }
    }

    /// Give focus to the top-most visible component
    pub fn focus_top(&mut self) -> AppResult<()> {
        let id = if self.app.mounted(&ComponentId::ErrorPopup) {
            ComponentId::ErrorPopup
        } else {
            match self.popup {
                Some(ActivePopup::ConfirmQuit) => ComponentId::YesNoPopup,
                Some(ActivePopup::Input(_)) => ComponentId::UserInputPopup,
                None => self.screen_component(),
            }
        };
        self.app
            .active(&id)
            .map_err(|e| AppError::Component(e.to_string()))
    }

    /// Remount the global key watcher, suppressing the quit key while a dialog is open
    pub fn update_global_key_watcher(&mut self) -> AppResult<()> {
        let suppressed = self.popup.is_some() || self.app.mounted(&ComponentId::ErrorPopup);
        self.app
            .remount(
                ComponentId::GlobalKeyWatcher,
                Box::new(GlobalKeyWatcher::new(self.config.keys().quit(), suppressed)),
                vec![Sub::new(SubEventClause::Any, SubClause::Always)],
            )
            .map_err(|e| AppError::Component(e.to_string()))
    }

    pub fn set_result_text(&mut self, text: String) -> AppResult<()> {
        self.app
            .attr(
                &ComponentId::ResultLabel,
                Attribute::Text,
                AttrValue::String(text),
            )
            .map_err(|e| AppError::Component(e.to_string()))
    }

    pub fn show_placeholder(&mut self) -> AppResult<()> {
        self.app.remount_with_state(
            ComponentId::PlaceholderScreen,
            PlaceholderScreen::new(demo::placeholder_options())
                .with_back_key(self.config.keys().back()),
            Vec::default(),
        )?;
        self.app_state = AppState::Placeholder;
        self.focus_top()
    }

    pub fn close_placeholder(&mut self) -> AppResult<()> {
        if self.app.mounted(&ComponentId::PlaceholderScreen) {
            self.app
                .umount(&ComponentId::PlaceholderScreen)
                .map_err(|e| AppError::Component(e.to_string()))?;
        }
        self.app_state = AppState::MainMenu;
        self.focus_top()
    }

    pub fn open_quit_confirmation(&mut self) -> AppResult<()> {
        if self.popup.is_some() {
            log::debug!("Ignoring quit request while {:?} is open", self.popup);
            return Ok(());
        }
        let keys = self.config.keys();
        self.app.remount_with_state(
            ComponentId::YesNoPopup,
            YesNoPopup::new(demo::quit_confirmation(self.config))
                .with_keys(keys.confirm_yes(), keys.confirm_no()),
            Vec::default(),
        )?;
        self.popup = Some(ActivePopup::ConfirmQuit);
        self.update_global_key_watcher()?;
        self.focus_top()
    }

    pub fn open_user_input(&mut self, example: InputExample) -> AppResult<()> {
        if self.popup.is_some() {
            return Err(AppError::State(format!(
                "Cannot open the {} prompt while another dialog is open",
                demo::example_label(example)
            )));
        }
        self.app.remount_with_state(
            ComponentId::UserInputPopup,
            UserInputPopup::new(demo::input_options(example, self.config)),
            Vec::default(),
        )?;
        self.popup = Some(ActivePopup::Input(example));
        self.update_global_key_watcher()?;
        self.focus_top()
    }

    /// Unmount the open dialog and return what it was
    pub fn close_popup(&mut self) -> AppResult<Option<ActivePopup>> {
        let closed = self.popup.take();
        let id = match closed {
            Some(ActivePopup::ConfirmQuit) => ComponentId::YesNoPopup,
            Some(ActivePopup::Input(_)) => ComponentId::UserInputPopup,
            None => return Ok(None),
        };
        if self.app.mounted(&id) {
            self.app
                .umount(&id)
                .map_err(|e| AppError::Component(e.to_string()))?;
        }
        self.update_global_key_watcher()?;
        self.focus_top()?;
        Ok(closed)
    }

    /// Mount error popup and give focus to it
    pub fn mount_error_popup(&mut self, error: &AppError) -> AppResult<()> {
        log::error!("Displaying error popup: {error}");
        self.app.remount_with_state(
            ComponentId::ErrorPopup,
            ErrorPopup::new(error),
            Vec::default(),
        )?;
        self.update_global_key_watcher()?;
        self.redraw = true;
        self.focus_top()
    }

    pub fn mount_warning_popup(&mut self, message: &str) -> AppResult<()> {
        log::warn!("Displaying warning popup: {message}");
        self.app.remount_with_state(
            ComponentId::ErrorPopup,
            ErrorPopup::warning(message),
            Vec::default(),
        )?;
        self.update_global_key_watcher()?;
        self.redraw = true;
        self.focus_top()
    }

    /// Unmount error popup and return focus to what is underneath
    pub fn unmount_error_popup(&mut self) -> AppResult<()> {
        if self.app.mounted(&ComponentId::ErrorPopup) {
            self.app
                .umount(&ComponentId::ErrorPopup)
                .map_err(|e| AppError::Component(e.to_string()))?;
        }
        self.update_global_key_watcher()?;
        self.redraw = true;
        self.focus_top()
    }

    /// Shutdown the application
    pub fn shutdown(&mut self) {
        log::info!("Shutting down application");
        self.quit = true;
    }
}
