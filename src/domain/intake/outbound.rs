//! Outbound message value type.

use super::menu::MenuSpec;

/// How the gateway should interpret the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextFormat {
    #[default]
    Plain,
    /// Lightweight HTML markup (`<b>` only).
    Html,
}

/// What to do with the menu shown under the chat input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MenuAttachment {
    /// Leave whatever menu is currently shown.
    #[default]
    Keep,
    Show(MenuSpec),
}

/// A message to deliver to one recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub text: String,
    pub format: TextFormat,
    pub menu: MenuAttachment,
}

impl OutboundMessage {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: TextFormat::Plain,
            menu: MenuAttachment::Keep,
        }
    }

    pub fn html(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: TextFormat::Html,
            menu: MenuAttachment::Keep,
        }
    }

    pub fn with_menu(mut self, menu: MenuSpec) -> Self {
        self.menu = MenuAttachment::Show(menu);
        self
    }

    /// The menu attached to this message, if any.
    pub fn menu_spec(&self) -> Option<&MenuSpec> {
        match &self.menu {
            MenuAttachment::Show(spec) => Some(spec),
            _ => None,
        }
    }
}
