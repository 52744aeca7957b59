//! Menu tokens and the menus offered at each step.
//!
//! A menu is transport-neutral: the gateway decides whether it becomes an
//! inline keyboard (the token's wire value travels back as callback data)
//! or a reply keyboard (the label travels back as plain text).

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fixed symbolic value carried by a button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MenuToken {
    HelpSelf,
    HelpOther,
    Anonymous,
    Skip,
    Cancel,
    Send,
    DoNotSend,
    /// Offered after a successful submission.
    NewRequest,
}

impl MenuToken {
    pub const ALL: [MenuToken; 8] = [
        MenuToken::HelpSelf,
        MenuToken::HelpOther,
        MenuToken::Anonymous,
        MenuToken::Skip,
        MenuToken::Cancel,
        MenuToken::Send,
        MenuToken::DoNotSend,
        MenuToken::NewRequest,
    ];

    /// Value carried in callback data.
    pub fn wire_value(&self) -> &'static str {
        match self {
            MenuToken::HelpSelf => "help-self",
            MenuToken::HelpOther => "help-other",
            MenuToken::Anonymous => "anonymous",
            MenuToken::Skip => "skip",
            MenuToken::Cancel => "cancel",
            MenuToken::Send => "send",
            MenuToken::DoNotSend => "do-not-send",
            MenuToken::NewRequest => "new-request",
        }
    }

    /// Text shown on the button.
    pub fn label(&self) -> &'static str {
        match self {
            MenuToken::HelpSelf => "Я прошу помощь для себя",
            MenuToken::HelpOther => "Я прошу помощь для другого человека",
            MenuToken::Anonymous => "Аноним",
            MenuToken::Skip => "Пропустить",
            MenuToken::Cancel => "Отмена",
            MenuToken::Send => "Отправить",
            MenuToken::DoNotSend => "НЕ отправлять",
            MenuToken::NewRequest => "Я хочу подать ещё одну заявку",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.wire_value() == value)
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

impl fmt::Display for MenuToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_value())
    }
}

/// One selectable entry of a menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    pub token: MenuToken,
    pub label: String,
}

impl From<MenuToken> for MenuOption {
    fn from(token: MenuToken) -> Self {
        Self {
            token,
            label: token.label().to_string(),
        }
    }
}

/// An ordered list of options, rendered one per row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSpec {
    options: Vec<MenuOption>,
}

impl MenuSpec {
    /// Builds a menu from tokens using their default labels.
    pub fn of(tokens: &[MenuToken]) -> Self {
        Self {
            options: tokens.iter().copied().map(MenuOption::from).collect(),
        }
    }

    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }

    pub fn tokens(&self) -> Vec<MenuToken> {
        self.options.iter().map(|o| o.token).collect()
    }

    pub fn contains(&self, token: MenuToken) -> bool {
        self.options.iter().any(|o| o.token == token)
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

pub static WELCOME_MENU: Lazy<MenuSpec> =
    Lazy::new(|| MenuSpec::of(&[MenuToken::HelpSelf, MenuToken::HelpOther]));

pub static NAME_MENU: Lazy<MenuSpec> =
    Lazy::new(|| MenuSpec::of(&[MenuToken::Anonymous, MenuToken::Cancel]));

pub static CANCEL_MENU: Lazy<MenuSpec> = Lazy::new(|| MenuSpec::of(&[MenuToken::Cancel]));

pub static QUESTIONS_MENU: Lazy<MenuSpec> =
    Lazy::new(|| MenuSpec::of(&[MenuToken::Skip, MenuToken::Cancel]));

pub static APPROVE_MENU: Lazy<MenuSpec> =
    Lazy::new(|| MenuSpec::of(&[MenuToken::Send, MenuToken::DoNotSend]));

pub static SUBMITTED_MENU: Lazy<MenuSpec> = Lazy::new(|| MenuSpec::of(&[MenuToken::NewRequest]));
