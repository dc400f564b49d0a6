//! Design studio order bot

use bot_core::entities::{DomainRecord, RecordKind};

use super::{escape_html, format_date, BotProfile, Menu, PrefixRoute, Replies, SubmissionFormat};
use crate::dialog::Action;

const BACK: (&str, &str) = ("« Назад", "back_to_menu");
const ORDER: (&str, &str) = ("🎨 Заказать", "show_services");

const START: Menu = Menu::with_keyboard(
    "🎨 <b>Привет! Мы создаём крутой дизайн</b>\n\n\
     Разрабатываем карточки для маркетплейсов, сайты, аватарки и многое другое!\n\n\
     🎁 <b>Скидка 10% на первый заказ</b>",
    &[
        &[("✨ Услуги", "show_services")],
        &[("💼 Портфолио", "show_portfolio"), ("💰 Цены", "show_prices")],
        &[("⭐ Отзывы", "show_reviews"), ("🎁 Акция", "show_promo")],
    ],
);

const SERVICES: Menu = Menu::with_keyboard(
    "<b>📦 Выберите услугу:</b>\n\n\
     <b>Карточки товара:</b>\n\
     🎨 Дизайн карточки\n\
     ✍️ Тексты для карточки\n\
     ⭐ A+ контент / EBC\n\
     🎁 Пакет \"Под ключ\"\n\n\
     <b>Сайты:</b>\n\
     🚀 Лендинг\n\
     🛒 Интернет-магазин\n\n\
     <b>Brand Identity:</b>\n\
     👤 Аватарки\n\
     🎯 Логотип",
    &[
        &[("🎨 Дизайн карточки", "order_card_design")],
        &[("✍️ Тексты для карточки", "order_card_text")],
        &[("⭐ A+ контент", "order_aplus")],
        &[("🎁 Пакет под ключ", "order_full_package")],
        &[("🚀 Лендинг", "order_landing")],
        &[("🛒 Интернет-магазин", "order_shop")],
        &[("👤 Аватарки", "order_avatar")],
        &[("🎯 Логотип", "order_logo")],
        &[BACK],
    ],
);

const PORTFOLIO: Menu = Menu::with_keyboard(
    "<b>📊 Наши кейсы</b>\n\n\
     <b>Карточка чайника</b>\n✅ +180% просмотров\n\n\
     <b>Лендинг для косметики</b>\n✅ +65% конверсия\n\n\
     <b>A+ контент для кроссовок</b>\n✅ +220% продаж",
    &[&[ORDER], &[BACK]],
);

const PRICES: Menu = Menu::with_keyboard(
    "<b>💰 Тарифы</b>\n\n\
     <b>Базовый - 5 000 ₽</b>\n• 1 вариант\n• 3 правки\n• 5 дней\n\n\
     <b>Про - 12 000 ₽</b> ⭐\n• 3 варианта\n• 5 правок\n• 3 дня\n• A+ контент\n\n\
     <b>Всё включено - 25 000 ₽</b>\n• 5 вариантов\n• Безлимит правок\n• 2 дня\n• Аудит конкурентов",
    &[&[ORDER], &[BACK]],
);

const REVIEWS: Menu = Menu::with_keyboard(
    "<b>⭐ Отзывы клиентов</b>\n\n\
     ⭐⭐⭐⭐⭐\n\"Продажи выросли в 3 раза за месяц.\"\n\n\
     ⭐⭐⭐⭐⭐\n\"Быстро, качественно, креативно.\"",
    &[&[ORDER], &[BACK]],
);

const PROMO: Menu = Menu::with_keyboard(
    "<b>🎁 Акция!</b>\n\n\
     <b>-10% на первый заказ</b>\n\n\
     При оформлении через бота получите скидку 10%!",
    &[&[("🎨 Оформить заказ", "show_services")], &[BACK]],
);

fn order_created(record: &DomainRecord) -> String {
    let service = record.service.as_deref().unwrap_or_default();
    format!(
        "<b>✅ Заказ #{id} создан!</b>\n\n\
         Услуга: {service}\n\n\
         Мы свяжемся с вами в течение 1 часа!",
        id = record.id,
        service = escape_html(service),
    )
}

fn submission_accepted(record: &DomainRecord) -> String {
    format!("✅ Заявка #{} принята!", record.id)
}

fn record_line(record: &DomainRecord) -> String {
    format!(
        "#{} - {} ({})\nДата: {}\n\n",
        record.id,
        escape_html(&record.summary(50)),
        escape_html(record.status.as_str()),
        format_date(record)
    )
}

pub static STUDIO: BotProfile = BotProfile {
    name: "studio",
    submission_kind: RecordKind::Order,
    submission_format: SubmissionFormat::Plain,
    commands: &[("/start", Action::Reply(&START))],
    callbacks: &[
        ("show_services", Action::Reply(&SERVICES)),
        ("show_portfolio", Action::Reply(&PORTFOLIO)),
        ("show_prices", Action::Reply(&PRICES)),
        ("show_reviews", Action::Reply(&REVIEWS)),
        ("show_promo", Action::Reply(&PROMO)),
        ("back_to_menu", Action::Reply(&START)),
    ],
    callback_prefixes: &[("order_", PrefixRoute::StartOrder)],
    state_routes: &[],
    fallback: None,
    catalog: &[
        ("card_design", "Дизайн карточки товара"),
        ("card_text", "Тексты для карточки"),
        ("aplus", "A+ контент / EBC"),
        ("full_package", "Пакет \"Под ключ\""),
        ("landing", "Лендинг"),
        ("shop", "Интернет-магазин"),
        ("avatar", "Аватарки"),
        ("logo", "Логотип"),
    ],
    replies: Replies {
        order_created,
        order_keyboard: &[&[("« Назад к услугам", "show_services")]],
        submission_accepted,
        records_header: "📋 Ваши заказы:\n\n",
        no_records: "У вас пока нет заказов.",
        record_line,
    },
};
