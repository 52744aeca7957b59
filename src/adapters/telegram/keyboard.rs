//! Rendering of menus as Telegram keyboards.

use teloxide::types::{
    InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup, ReplyMarkup,
};

use crate::config::MenuStyle;
use crate::domain::intake::{MenuAttachment, MenuSpec};

/// Markup to attach to a message, or `None` to leave the chat's keyboard alone.
pub fn render(menu: &MenuAttachment, style: MenuStyle) -> Option<ReplyMarkup> {
    match (menu, style) {
        (MenuAttachment::Keep, _) => None,
        (MenuAttachment::Show(spec), MenuStyle::Inline) => {
            Some(ReplyMarkup::InlineKeyboard(inline_keyboard(spec)))
        }
        (MenuAttachment::Show(spec), MenuStyle::Reply) => {
            Some(ReplyMarkup::Keyboard(reply_keyboard(spec)))
        }
    }
}

/// One button per row; callback data is the token's wire value.
pub fn inline_keyboard(spec: &MenuSpec) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(spec.options().iter().map(|option| {
        vec![InlineKeyboardButton::callback(
            option.label.as_str(),
            option.token.wire_value(),
        )]
    }))
}

/// One button per row, sized to fit and shown only to the addressed user.
pub fn reply_keyboard(spec: &MenuSpec) -> KeyboardMarkup {
    KeyboardMarkup::new(
        spec.options()
            .iter()
            .map(|option| vec![KeyboardButton::new(option.label.as_str())]),
    )
    .resize_keyboard()
    .selective::<()>()
}
