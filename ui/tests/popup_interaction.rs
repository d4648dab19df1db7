use claims::{assert_none, assert_some_eq};
use gadgets::app::demo;
use gadgets::components::button::ButtonVariant;
use gadgets::components::common::{
    InputExample, MenuAction, MenuActivityMsg, Msg, PopupActivityMsg,
};
use gadgets::components::global_key_watcher::GlobalKeyWatcher;
use gadgets::components::input_field::{InputKind, ValidateOn};
use gadgets::components::menu::DemoMenu;
use gadgets::components::placeholder_screen::PlaceholderScreen;
use gadgets::components::user_input_popup::{UserInputOptions, UserInputPopup};
use gadgets::components::yes_no_popup::{YesNoOptions, YesNoPopup};
use gadgets::config::AppConfig;
use tuirealm::event::{Key, KeyEvent, KeyModifiers};
use tuirealm::{Component, Event, NoUserEvent};
use validators::StringValidator;

fn key(code: Key) -> Event<NoUserEvent> {
    Event::Keyboard(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(popup: &mut UserInputPopup, text: &str) {
    for c in text.chars() {
        popup.on(key(Key::Char(c)));
    }
}

fn yes_no_result(answer: bool) -> Msg {
    Msg::PopupActivity(PopupActivityMsg::YesNoResult(answer))
}

fn submitted(value: &str) -> Msg {
    Msg::PopupActivity(PopupActivityMsg::UserInputResult(value.to_string()))
}

#[test]
fn test_yes_no_enter_answers_with_focused_button() {
    let mut popup = YesNoPopup::new(YesNoOptions::default());
    assert!(popup.is_yes_focused());
    assert_some_eq!(popup.on(key(Key::Enter)), yes_no_result(true));

    assert_some_eq!(popup.on(key(Key::Right)), Msg::ForceRedraw);
    assert!(!popup.is_yes_focused());
    assert_some_eq!(popup.on(key(Key::Enter)), yes_no_result(false));

    popup.on(key(Key::Tab));
    assert!(popup.is_yes_focused());
}

#[test]
fn test_yes_no_esc_and_custom_keys() {
    let options = YesNoOptions::default()
        .with_message("Delete everything?")
        .with_yes("Delete", ButtonVariant::Error)
        .with_no("Keep", ButtonVariant::Primary);
    let mut popup = YesNoPopup::new(options).with_keys('d', 'k');

    assert_some_eq!(popup.on(key(Key::Esc)), yes_no_result(false));
    assert_some_eq!(popup.on(key(Key::Char('D'))), yes_no_result(true));
    assert_some_eq!(popup.on(key(Key::Char('k'))), yes_no_result(false));
    assert_none!(popup.on(key(Key::Char('y'))));
}

#[test]
fn test_user_input_submits_typed_value() {
    let mut popup = UserInputPopup::new(UserInputOptions::default());
    assert!(popup.is_input_focused());

    type_text(&mut popup, "hello");
    assert_eq!(popup.value(), "hello");
    assert_some_eq!(popup.on(key(Key::Enter)), submitted("hello"));
}

#[test]
fn test_user_input_esc_cancels() {
    let mut popup =
        UserInputPopup::new(UserInputOptions::default().with_default_value("draft"));
    assert_some_eq!(
        popup.on(key(Key::Esc)),
        Msg::PopupActivity(PopupActivityMsg::UserInputCancelled)
    );
}

#[test]
fn test_user_input_invalid_submit_keeps_popup_open() {
    let options = UserInputOptions::default()
        .with_validator(StringValidator::ipv4())
        .with_validate_on([ValidateOn::Submitted]);
    let mut popup = UserInputPopup::new(options);

    type_text(&mut popup, "300.1.1.1");
    assert_some_eq!(popup.on(key(Key::Enter)), Msg::ForceRedraw);
    assert_eq!(popup.reason(), Some("Not an IPv4 address."));

    // editing clears the reason when only submits are validated
    for _ in 0..9 {
        popup.on(key(Key::Backspace));
    }
    assert_none!(popup.reason());
    type_text(&mut popup, "10.0.0.1");
    assert_some_eq!(popup.on(key(Key::Enter)), submitted("10.0.0.1"));
}

#[test]
fn test_user_input_validates_on_blur() {
    let options = UserInputOptions::default()
        .with_validator(StringValidator::ipv6())
        .with_validate_on([ValidateOn::Blur]);
    let mut popup = UserInputPopup::new(options);

    type_text(&mut popup, "not-an-address");
    assert_none!(popup.reason());

    popup.on(key(Key::Tab));
    assert!(!popup.is_input_focused());
    assert_eq!(popup.reason(), Some("Not an IPv6 address."));

    // typing is ignored while the button has focus
    assert_none!(popup.on(key(Key::Char('x'))));
    assert_eq!(popup.value(), "not-an-address");
}

#[test]
fn test_user_input_validates_on_change() {
    let options = UserInputOptions::default()
        .with_validator(StringValidator::ipv4())
        .with_validate_on([ValidateOn::Changed]);
    let mut popup = UserInputPopup::new(options);

    type_text(&mut popup, "1.2.3");
    assert_eq!(popup.reason(), Some("Not an IPv4 address."));
    type_text(&mut popup, ".4");
    assert_none!(popup.reason());

    // submit is not validated, so it passes straight through
    assert_some_eq!(popup.on(key(Key::Enter)), submitted("1.2.3.4"));
}

#[test]
fn test_user_input_integer_kind_rejects_letters() {
    let options = UserInputOptions::default().with_input_kind(InputKind::Integer);
    let mut popup = UserInputPopup::new(options);

    type_text(&mut popup, "-4a2");
    assert_eq!(popup.value(), "-42");
}

#[test]
fn test_user_input_ignores_control_chords() {
    let mut popup = UserInputPopup::new(UserInputOptions::default().with_default_value("abc"));

    let chord = popup.on(Event::Keyboard(KeyEvent::new(
        Key::Char('a'),
        KeyModifiers::CONTROL,
    )));
    assert_none!(chord);
    assert_eq!(popup.value(), "abc");

    popup.on(key(Key::Char('d')));
    assert_eq!(popup.value(), "abcd");
}

#[test]
fn test_user_input_max_length_and_restrict() {
    let options = UserInputOptions::default()
        .with_max_length(4)
        .with_restrict(|c| !c.is_whitespace());
    let mut popup = UserInputPopup::new(options);

    type_text(&mut popup, "a b c d e");
    assert_eq!(popup.value(), "abcd");
}

#[test]
fn test_demo_ipv4_prompt_starts_with_default_value() {
    let config = AppConfig::default();
    let mut popup = UserInputPopup::new(demo::input_options(InputExample::Ipv4, &config));

    assert_eq!(popup.value(), demo::DEFAULT_IPV4);
    assert_some_eq!(popup.on(key(Key::Enter)), submitted(demo::DEFAULT_IPV4));
}

#[test]
fn test_demo_email_prompt_rejects_bad_address() {
    let config = AppConfig::default();
    let mut popup = UserInputPopup::new(demo::input_options(InputExample::Email, &config));

    type_text(&mut popup, "someone@");
    assert_some_eq!(popup.on(key(Key::Enter)), Msg::ForceRedraw);
    assert!(popup.reason().is_some());
}

#[test]
fn test_menu_wraps_and_selects() {
    let mut menu = DemoMenu::new("Main Menu", demo::main_menu_entries());
    let first = menu.selected_action();

    menu.on(key(Key::Up));
    let last = menu.selected_action();
    assert_ne!(first, last);

    menu.on(key(Key::Down));
    assert_eq!(menu.selected_action(), first);

    let action = first.unwrap();
    assert_some_eq!(
        menu.on(key(Key::Enter)),
        Msg::MenuActivity(MenuActivityMsg::Selected(action))
    );
}

#[test]
fn test_menu_back_key() {
    let mut menu = DemoMenu::new("User Input Examples", demo::input_menu_entries())
        .with_back_key('h');
    assert_some_eq!(
        menu.on(key(Key::Char('h'))),
        Msg::MenuActivity(MenuActivityMsg::Back)
    );
    assert_some_eq!(
        menu.on(key(Key::Esc)),
        Msg::MenuActivity(MenuActivityMsg::Back)
    );
    assert!(matches!(
        menu.selected_action(),
        Some(MenuAction::Input(InputExample::Greeting))
    ));
}

#[test]
fn test_placeholder_closes_on_enter_and_back_key() {
    let mut screen = PlaceholderScreen::new(demo::placeholder_options()).with_back_key('b');
    let close = Msg::PopupActivity(PopupActivityMsg::ClosePlaceholder);

    assert_some_eq!(screen.on(key(Key::Enter)), close);
    assert_some_eq!(
        screen.on(key(Key::Char('b'))),
        Msg::PopupActivity(PopupActivityMsg::ClosePlaceholder)
    );
    assert_none!(screen.on(key(Key::Char('x'))));
}

#[test]
fn test_global_key_watcher_respects_suppression() {
    let mut watcher = GlobalKeyWatcher::new('q', false);
    assert_some_eq!(watcher.on(key(Key::Char('q'))), Msg::RequestQuit);

    let mut suppressed = GlobalKeyWatcher::new('q', true);
    assert_none!(suppressed.on(key(Key::Char('q'))));
    assert_some_eq!(
        suppressed.on(Event::Keyboard(KeyEvent::new(
            Key::Char('c'),
            KeyModifiers::CONTROL
        ))),
        Msg::AppClose
    );
}
