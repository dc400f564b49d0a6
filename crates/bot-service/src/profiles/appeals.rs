//! Free-text appeal bot

use bot_core::entities::{DialogState, DomainRecord, RecordKind};

use super::{escape_html, format_date, BotProfile, Menu, Replies, SubmissionFormat};
use crate::dialog::Action;

const START: Menu = Menu::text(
    "Добро пожаловать в бот ЛКСМ РФ Иркутск! 🚩\n\n\
     Я помогу вам отправить обращение в местное отделение.\n\n\
     Доступные команды:\n\
     /appeal - Отправить обращение\n\
     /status - Проверить статус обращения\n\
     /help - Помощь",
);

const APPEAL_PROMPT: Menu = Menu::text(
    "Пожалуйста, напишите ваше обращение в следующем сообщении.\n\n\
     Укажите:\n\
     • Тему обращения\n\
     • Подробное описание\n\
     • Контактные данные (если необходимо)",
);

const HELP: Menu = Menu::text(
    "Помощь по боту ЛКСМ РФ Иркутск\n\n\
     /appeal - Отправить новое обращение\n\
     /status - Проверить статус ваших обращений\n\
     /help - Показать эту справку\n\n\
     По всем вопросам обращайтесь в местное отделение.",
);

const FALLBACK: Menu = Menu::text("Я вас не понял. Используйте /help для списка команд.");

fn order_created(record: &DomainRecord) -> String {
    format!("✅ Заявка #{} создана!", record.id)
}

fn submission_accepted(record: &DomainRecord) -> String {
    format!(
        "Ваше обращение #{} принято! ✅\n\n\
         Вы можете проверить статус командой /status",
        record.id
    )
}

fn record_line(record: &DomainRecord) -> String {
    format!(
        "#{} - {}\nДата: {}\nТекст: {}\n\n",
        record.id,
        escape_html(record.status.as_str()),
        format_date(record),
        escape_html(&record.summary(50))
    )
}

pub static APPEALS: BotProfile = BotProfile {
    name: "appeals",
    submission_kind: RecordKind::Appeal,
    submission_format: SubmissionFormat::Plain,
    commands: &[
        ("/start", Action::Reply(&START)),
        ("/appeal", Action::BeginSubmission(&APPEAL_PROMPT)),
        ("/status", Action::ListRecords(10)),
        ("/help", Action::Reply(&HELP)),
    ],
    callbacks: &[],
    callback_prefixes: &[],
    state_routes: &[(DialogState::AwaitingSubmission, Action::CompleteSubmission)],
    fallback: Some(FALLBACK),
    catalog: &[],
    replies: Replies {
        order_created,
        order_keyboard: &[],
        submission_accepted,
        records_header: "Ваши обращения:\n\n",
        no_records: "У вас пока нет обращений.",
        record_line,
    },
};
