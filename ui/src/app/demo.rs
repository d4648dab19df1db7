//! Content of the demo application: menu entries, prompt options and the
//! text shown in the result label.

use crate::components::button::{Button, ButtonVariant};
use crate::components::common::{InputExample, MenuAction};
use crate::components::input_field::ValidateOn;
use crate::components::menu::MenuEntry;
use crate::components::placeholder_screen::PlaceholderOptions;
use crate::components::user_input_popup::UserInputOptions;
use crate::components::yes_no_popup::YesNoOptions;
use crate::config::AppConfig;
use validators::StringValidator;

pub const GREETING_MAX_LENGTH: usize = 30;
pub const DEFAULT_IPV4: &str = "127.0.0.1";
pub const INITIAL_RESULT: &str = "Pick an example to see its result here";

pub fn main_menu_entries() -> Vec<MenuEntry> {
    vec![
        MenuEntry::new(
            Button::new("Placeholder Screen", ButtonVariant::Primary),
            MenuAction::ShowPlaceholder,
        ),
        MenuEntry::new(
            Button::new("User Input Examples", ButtonVariant::Primary),
            MenuAction::OpenInputExamples,
        ),
        MenuEntry::new(
            Button::new("Confirm Quit", ButtonVariant::Warning),
            MenuAction::ConfirmQuit,
        ),
        MenuEntry::new(Button::new("Quit", ButtonVariant::Error), MenuAction::Quit),
    ]
}

pub fn input_menu_entries() -> Vec<MenuEntry> {
    [
        InputExample::Greeting,
        InputExample::Ipv4,
        InputExample::Ipv6,
        InputExample::Email,
        InputExample::Password,
    ]
    .into_iter()
    .map(|example| {
        MenuEntry::new(
            Button::new(example_label(example), ButtonVariant::Default),
            MenuAction::Input(example),
        )
    })
    .collect()
}

pub fn example_label(example: InputExample) -> &'static str {
    match example {
        InputExample::Greeting => "Short greeting",
        InputExample::Ipv4 => "IPv4 address",
        InputExample::Ipv6 => "IPv6 address",
        InputExample::Email => "Email address",
        InputExample::Password => "Password",
    }
}

pub fn input_options(example: InputExample, config: &AppConfig) -> UserInputOptions {
    let base = UserInputOptions::default().with_button("Submit", config.demo().button_variant());

    match example {
        InputExample::Greeting => base
            .with_message("Enter a short greeting!")
            .with_max_length(GREETING_MAX_LENGTH)
            .with_tooltip(format!(
                "A maximum length of {GREETING_MAX_LENGTH} characters is allowed."
            )),
        InputExample::Ipv4 => base
            .with_message("Enter IP address")
            .with_default_value(DEFAULT_IPV4)
            .with_validator(StringValidator::ipv4())
            .with_validate_on([ValidateOn::Submitted, ValidateOn::Blur]),
        InputExample::Ipv6 => base
            .with_message("Enter IPv6 address")
            .with_placeholder("e.g. 2001:db8::1")
            .with_validator(StringValidator::ipv6()),
        InputExample::Email => base
            .with_message("Enter email address")
            .with_placeholder("name@example.com")
            .with_validator(StringValidator::email(config.email().clone()))
            // Deliverability checks hit DNS, so not on every keystroke
            .with_validate_on([ValidateOn::Submitted, ValidateOn::Blur])
            .with_tooltip(if config.email().check_deliverability() {
                "The domain is checked for mail servers on submit."
            } else {
                "Only the address syntax is checked."
            }),
        InputExample::Password => base
            .with_message("Enter a password")
            .with_placeholder("")
            .with_password(true)
            .with_restrict(|c| !c.is_whitespace()),
    }
}

pub fn quit_confirmation(config: &AppConfig) -> YesNoOptions {
    YesNoOptions::default()
        .with_message("Do you really want to quit?")
        .with_yes("Quit", config.demo().yes_variant())
        .with_no("Stay", config.demo().no_variant())
}

pub fn placeholder_options() -> PlaceholderOptions {
    PlaceholderOptions {
        title: "Placeholder Screen".to_string(),
        ..PlaceholderOptions::default()
    }
}

/// Result label text for a submitted value, or for a cancelled prompt
pub fn result_text(example: InputExample, value: Option<&str>) -> String {
    let label = example_label(example);
    match value {
        None => format!("{label}: cancelled"),
        Some(value) if example == InputExample::Password => {
            format!("{label}: received ({} characters)", value.chars().count())
        }
        Some("") => format!("{label}: (empty)"),
        Some(value) => format!("{label}: {value}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_is_never_shown() {
        assert_eq!(
            result_text(InputExample::Password, Some("hunter2")),
            "Password: received (7 characters)"
        );
        assert_eq!(
            result_text(InputExample::Ipv4, Some("10.0.0.1")),
            "IPv4 address: 10.0.0.1"
        );
        assert_eq!(
            result_text(InputExample::Email, None),
            "Email address: cancelled"
        );
    }

    #[test]
    fn test_input_options_follow_config() {
        let config = AppConfig::default();
        let ipv4 = input_options(InputExample::Ipv4, &config);
        assert_eq!(ipv4.default_value, DEFAULT_IPV4);
        assert_eq!(
            ipv4.validate_on,
            vec![ValidateOn::Submitted, ValidateOn::Blur]
        );
        assert_eq!(ipv4.button_variant, ButtonVariant::Primary);

        let greeting = input_options(InputExample::Greeting, &config);
        assert_eq!(greeting.max_length, 30);
        assert!(greeting.validators.is_empty());

        let quit = quit_confirmation(&config);
        assert_eq!(quit.yes_variant, ButtonVariant::Error);
        assert_eq!(quit.no_variant, ButtonVariant::Primary);
    }

    #[test]
    fn test_menus_offer_every_example() {
        assert_eq!(main_menu_entries().len(), 4);
        let inputs: Vec<MenuAction> = input_menu_entries().iter().map(|e| e.action).collect();
        assert!(inputs.contains(&MenuAction::Input(InputExample::Password)));
        assert_eq!(inputs.len(), 5);
    }
}
