//! Fixed prompt texts and the menus attached to them.

use super::fields::FieldSet;
use super::menu::{
    APPROVE_MENU, CANCEL_MENU, NAME_MENU, QUESTIONS_MENU, SUBMITTED_MENU, WELCOME_MENU,
};
use super::outbound::OutboundMessage;
use super::state::IntakeState;
use super::summary;

/// Placeholder stored when the user picks "anonymous" instead of a name.
pub const ANONYMOUS_NAME: &str = "Аноним";

pub const WELCOME_TEXT: &str =
    "Добрый день!\n\nНажмите подходящую кнопку ниже, чтобы обратиться за помощью.";

pub const REQUESTER_NAME_TEXT: &str = "Укажите ваше имя\n\n Пример: <b>Петр Петров</b>";

pub const VICTIM_NAME_TEXT: &str = "Укажите имя пострадавшего\n\n Пример: <b>Иван Иванов</b>";

pub const AGE_TEXT: &str =
    "Укажите дату рождения/возраст пострадавшего\n\n Пример: <b>15.08.2000, 20 лет</b>";

pub const INJURY_DATE_TEXT: &str = "Укажите дату травмы\n\n Пример: <b>11.08.2020</b>";

pub const INJURY_LIST_TEXT: &str = "Перечислите полученные травмы\n\n \
Пример: <b>панические атаки, закрытый перелом руки, гематомы</b>";

pub const LOCATION_TEXT: &str =
    "Укажите, в каком населённом пункте находится пострадавший\n\n Пример: <b>Минск</b>";

pub const CONTACT_TEXT: &str = "Укажите, как с вами связаться (телефон или мессенджер)\n\n \
Пример: <b>+375291234567</b>\n Пример: <b>telegram @username</b>";

pub const QUESTIONS_TEXT: &str = "Укажите дополнительные вопросы или комментарии.\n\n \
Введите вопрос или нажмите \"Пропустить\".";

pub const SUBMITTED_TEXT: &str = "Спасибо! Ваша заявка отправлена. \
Специалист свяжется с вами лично.\n\nДержитесь, друзья, вы невероятные!";

pub const ONLY_TEXT_ALLOWED: &str = "Допускается только ввод текста.";

pub const PRESS_A_BUTTON: &str = "Нажмите на одну из кнопок ниже.";

pub const DELIVERY_FAILED: &str = "Не удалось отправить заявку врачам. \
Повторите последнее действие чуть позже. Если ответы очень длинные, сократите их.";

pub fn welcome() -> OutboundMessage {
    OutboundMessage::plain(WELCOME_TEXT).with_menu(WELCOME_MENU.clone())
}

pub fn ask_requester_name() -> OutboundMessage {
    OutboundMessage::html(REQUESTER_NAME_TEXT).with_menu(NAME_MENU.clone())
}

pub fn ask_victim_name() -> OutboundMessage {
    OutboundMessage::html(VICTIM_NAME_TEXT).with_menu(NAME_MENU.clone())
}

pub fn ask_age() -> OutboundMessage {
    OutboundMessage::html(AGE_TEXT).with_menu(CANCEL_MENU.clone())
}

pub fn ask_injury_date() -> OutboundMessage {
    OutboundMessage::html(INJURY_DATE_TEXT).with_menu(CANCEL_MENU.clone())
}

pub fn ask_injury_list() -> OutboundMessage {
    OutboundMessage::html(INJURY_LIST_TEXT).with_menu(CANCEL_MENU.clone())
}

pub fn ask_location() -> OutboundMessage {
    OutboundMessage::html(LOCATION_TEXT).with_menu(CANCEL_MENU.clone())
}

pub fn ask_contact() -> OutboundMessage {
    OutboundMessage::html(CONTACT_TEXT).with_menu(CANCEL_MENU.clone())
}

pub fn ask_questions() -> OutboundMessage {
    OutboundMessage::html(QUESTIONS_TEXT).with_menu(QUESTIONS_MENU.clone())
}

/// The summary shown to the submitter before it goes out.
pub fn review(fields: &FieldSet) -> OutboundMessage {
    OutboundMessage::html(summary::compose_for_review(fields)).with_menu(APPROVE_MENU.clone())
}

/// The report delivered to the doctors.
pub fn doctors_report(fields: &FieldSet) -> OutboundMessage {
    OutboundMessage::html(summary::compose(fields))
}

pub fn submitted() -> OutboundMessage {
    OutboundMessage::html(SUBMITTED_TEXT).with_menu(SUBMITTED_MENU.clone())
}

pub fn only_text_allowed() -> OutboundMessage {
    OutboundMessage::plain(ONLY_TEXT_ALLOWED)
}

pub fn press_a_button() -> OutboundMessage {
    OutboundMessage::plain(PRESS_A_BUTTON)
}

/// Sent to the submitter when the doctors' chat rejected the report.
pub fn delivery_failed() -> OutboundMessage {
    OutboundMessage::plain(DELIVERY_FAILED)
}

/// The prompt that opens a step.
///
/// `None` and `Approve` have no standalone prompt: the first has nothing to
/// ask and the second needs the collected answers, see [`review`].
pub fn prompt_for(state: IntakeState) -> Option<OutboundMessage> {
    match state {
        IntakeState::Initial => Some(welcome()),
        IntakeState::GoodManName => Some(ask_requester_name()),
        IntakeState::VictimName => Some(ask_victim_name()),
        IntakeState::Age => Some(ask_age()),
        IntakeState::InjuryDate => Some(ask_injury_date()),
        IntakeState::InjuryList => Some(ask_injury_list()),
        IntakeState::Location => Some(ask_location()),
        IntakeState::Contact => Some(ask_contact()),
        IntakeState::Questions => Some(ask_questions()),
        IntakeState::None | IntakeState::Approve => None,
    }
}
