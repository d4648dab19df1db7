use crate::app::demo;
use crate::app::model::{ActivePopup, AppState, Model};
use crate::components::common::{InputExample, MenuAction, MenuActivityMsg, Msg, PopupActivityMsg};
use crate::error::{AppError, AppResult, handle_error};
use tuirealm::Update;
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn handle_update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        let msg = msg?;
        self.redraw = true;

        let result = match msg {
            Msg::AppClose => {
                self.shutdown();
                Ok(None)
            }
            Msg::ForceRedraw => Ok(None),
            Msg::RequestQuit => self.open_quit_confirmation().map(|_| None),
            Msg::MenuActivity(msg) => self.update_menu(msg),
            Msg::PopupActivity(msg) => self.update_popup(msg),
            Msg::Error(e) => {
                log::error!("Error received: {e}");
                self.update_popup(PopupActivityMsg::ShowError(e))
            }
        };

        match result {
            Ok(next) => next,
            Err(e) => {
                log::error!("Error from message processing: {e}");
                if let Err(err) = self.mount_error_popup(&e) {
                    log::error!("Failed to mount error popup: {err}");
                    handle_error(e);
                }
                None
            }
        }
    }

    fn update_menu(&mut self, msg: MenuActivityMsg) -> AppResult<Option<Msg>> {
        match msg {
            MenuActivityMsg::Selected(action) => self.run_menu_action(action),
            MenuActivityMsg::Back => {
                if self.app_state == AppState::InputExamples {
                    self.app_state = AppState::MainMenu;
                    self.focus_top()?;
                }
                Ok(None)
            }
        }
    }

    fn run_menu_action(&mut self, action: MenuAction) -> AppResult<Option<Msg>> {
        log::debug!("Menu action: {action:?}");
        match action {
            MenuAction::ShowPlaceholder => self.show_placeholder()?,
            MenuAction::OpenInputExamples => {
                self.app_state = AppState::InputExamples;
                self.focus_top()?;
            }
            MenuAction::ConfirmQuit => self.open_quit_confirmation()?,
            MenuAction::Quit => return Ok(Some(Msg::AppClose)),
            MenuAction::Input(example) => self.open_user_input(example)?,
        }
        Ok(None)
    }

    fn update_popup(&mut self, msg: PopupActivityMsg) -> AppResult<Option<Msg>> {
        match msg {
            PopupActivityMsg::ShowError(error) => self.mount_error_popup(&error)?,
            PopupActivityMsg::ShowWarning(message) => self.mount_warning_popup(&message)?,
            PopupActivityMsg::CloseError => self.unmount_error_popup()?,
            PopupActivityMsg::YesNoResult(answer) => match self.close_popup()? {
                Some(ActivePopup::ConfirmQuit) if answer => return Ok(Some(Msg::AppClose)),
                Some(ActivePopup::ConfirmQuit) => log::debug!("Quit declined"),
                other => {
                    return Err(AppError::State(format!(
                        "Confirmation answer received while {other:?} was open"
                    )));
                }
            },
            PopupActivityMsg::UserInputResult(value) => {
                let example = self.take_input_example()?;
                log::info!("{} submitted", demo::example_label(example));
                self.set_result_text(demo::result_text(example, Some(&value)))?;
            }
            PopupActivityMsg::UserInputCancelled => {
                let example = self.take_input_example()?;
                self.set_result_text(demo::result_text(example, None))?;
            }
            PopupActivityMsg::ClosePlaceholder => self.close_placeholder()?,
        }
        Ok(None)
    }

    fn take_input_example(&mut self) -> AppResult<InputExample> {
        match self.close_popup()? {
            Some(ActivePopup::Input(example)) => Ok(example),
            other => Err(AppError::State(format!(
                "Input result received while {other:?} was open"
            ))),
        }
    }
}

impl<T> Update<Msg> for Model<T>
where
    T: TerminalAdapter,
{
    fn update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        self.handle_update(msg)
    }
}
