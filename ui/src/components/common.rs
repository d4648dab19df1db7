use crate::error::AppError;

#[derive(Debug, Eq, PartialEq, Clone, Hash)]
pub enum ComponentId {
    ResultLabel,
    MainMenu,
    InputMenu,
    PlaceholderScreen,
    YesNoPopup,
    UserInputPopup,
    ErrorPopup,
    GlobalKeyWatcher,
}

#[derive(Debug, PartialEq)]
pub enum Msg {
    AppClose,
    ForceRedraw,
    /// Ask before quitting
    RequestQuit,
    MenuActivity(MenuActivityMsg),
    PopupActivity(PopupActivityMsg),
    Error(AppError),
}

#[derive(Debug, PartialEq)]
pub enum MenuActivityMsg {
    Selected(MenuAction),
    Back,
}

/// What a demo menu entry does when chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ShowPlaceholder,
    OpenInputExamples,
    ConfirmQuit,
    Quit,
    Input(InputExample),
}

/// The prompts offered by the input examples menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputExample {
    Greeting,
    Ipv4,
    Ipv6,
    Email,
    Password,
}

#[derive(Debug, PartialEq)]
pub enum PopupActivityMsg {
    ShowError(AppError),
    ShowWarning(String),
    CloseError,
    YesNoResult(bool),
    UserInputResult(String),
    UserInputCancelled,
    ClosePlaceholder,
}

impl Default for Msg {
    fn default() -> Self {
        Self::AppClose
    }
}
