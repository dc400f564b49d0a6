//! Citizen appeal bot with a structured form

use bot_core::entities::{DialogState, DomainRecord, RecordKind};

use super::{escape_html, format_date, BotProfile, Menu, Replies, SubmissionFormat};
use crate::dialog::Action;

const START: Menu = Menu::text(
    "🚩 Добро пожаловать в бот ЛКСМ РФ Иркутск!\n\n\
     Этот бот создан для приема обращений граждан.\n\n\
     Доступные команды:\n\
     /appeal - Подать обращение\n\
     /status - Проверить статус обращения\n\
     /info - Информация о ЛКСМ РФ\n\
     /contact - Контакты отделения",
);

const APPEAL_FORM: Menu = Menu::text(
    "📝 Для подачи обращения отправьте сообщение в следующем формате:\n\n\
     ФИО: Ваше полное имя\n\
     Телефон: Ваш номер телефона\n\
     Тип обращения: (жалоба/предложение/вопрос)\n\
     Текст обращения: Подробное описание вашего обращения\n\n\
     Пример:\n\
     ФИО: Иванов Иван Иванович\n\
     Телефон: +79001234567\n\
     Тип обращения: вопрос\n\
     Текст обращения: Как вступить в ЛКСМ?",
);

const INFO: Menu = Menu::text(
    "ℹ️ ЛКСМ РФ - Ленинский коммунистический союз молодёжи Российской Федерации\n\n\
     Иркутское местное отделение\n\n\
     Мы работаем над:\n\
     • Защитой прав молодёжи\n\
     • Организацией культурных и спортивных мероприятий\n\
     • Образовательными программами\n\
     • Социальной поддержкой",
);

const CONTACT: Menu = Menu::text(
    "📞 Контакты ЛКСМ РФ Иркутск:\n\n\
     📍 Адрес: г. Иркутск\n\
     📧 Email: irkutsk@lksm.org\n\
     🌐 Сайт: lksm.org\n\
     💬 Telegram: @lksm_irkutsk",
);

const FALLBACK: Menu = Menu::text(
    "Извините, я не понял вашу команду.\n\n\
     Используйте /start для просмотра доступных команд.",
);

fn order_created(record: &DomainRecord) -> String {
    format!("✅ Заявка #{} создана!", record.id)
}

fn submission_accepted(record: &DomainRecord) -> String {
    format!(
        "✅ Ваше обращение #{} успешно принято!\n\n\
         Мы рассмотрим его в ближайшее время и свяжемся с вами.\n\n\
         Проверить статус можно командой /status",
        record.id
    )
}

fn status_emoji(status: &str) -> &'static str {
    match status {
        "new" => "🆕",
        "processed" | "completed" => "✅",
        _ => "⏳",
    }
}

fn record_line(record: &DomainRecord) -> String {
    format!(
        "{} #{} - {} ({})\nДата: {}\n\n",
        status_emoji(record.status.as_str()),
        record.id,
        escape_html(record.category.as_deref().unwrap_or("общее")),
        escape_html(record.status.as_str()),
        format_date(record)
    )
}

pub static LKSM: BotProfile = BotProfile {
    name: "lksm",
    submission_kind: RecordKind::Appeal,
    submission_format: SubmissionFormat::AppealForm,
    commands: &[
        ("/start", Action::Reply(&START)),
        ("/appeal", Action::BeginSubmission(&APPEAL_FORM)),
        ("/status", Action::ListRecords(5)),
        ("/info", Action::Reply(&INFO)),
        ("/contact", Action::Reply(&CONTACT)),
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
        records_header: "📋 Ваши последние обращения:\n\n",
        no_records: "У вас пока нет обращений.",
        record_line,
    },
};
