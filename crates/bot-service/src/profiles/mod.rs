//! Bot profiles
//!
//! A profile is the data that makes one bot personality: command, callback
//! and state tables, the menus it replies with, and its service catalog. The
//! dialog engine is the same for every profile.

mod appeals;
mod lksm;
mod studio;

use bot_core::entities::{DialogState, DomainRecord, RecordKind};
use bot_core::value_objects::{InlineButton, InlineKeyboard, OutgoingMessage};

use crate::dialog::Action;

pub use appeals::APPEALS;
pub use lksm::LKSM;
pub use studio::STUDIO;

/// Every built-in profile
pub static BUILTIN: [&BotProfile; 3] = [&STUDIO, &LKSM, &APPEALS];

/// Look up a built-in profile by name
pub fn builtin(name: &str) -> Option<&'static BotProfile> {
    BUILTIN.iter().copied().find(|p| p.name == name)
}

/// Rows of `(label, payload)` buttons
pub type Keyboard = &'static [&'static [(&'static str, &'static str)]];

/// A canned reply: HTML text plus an optional inline keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Menu {
    pub text: &'static str,
    pub keyboard: Keyboard,
}

impl Menu {
    pub const fn text(text: &'static str) -> Self {
        Self { text, keyboard: &[] }
    }

    pub const fn with_keyboard(text: &'static str, keyboard: Keyboard) -> Self {
        Self { text, keyboard }
    }

    /// Render for a chat
    pub fn render(&self, chat_id: i64) -> OutgoingMessage {
        OutgoingMessage::new(chat_id, self.text).with_keyboard(build_keyboard(self.keyboard))
    }
}

pub(crate) fn build_keyboard(rows: Keyboard) -> InlineKeyboard {
    rows.iter().fold(InlineKeyboard::new(), |keyboard, row| {
        keyboard.row(
            row.iter()
                .map(|(label, payload)| InlineButton::new(*label, *payload))
                .collect(),
        )
    })
}

/// What a callback prefix starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixRoute {
    /// `order_<service-key>`
    StartOrder,
}

/// How free text completing a submission is turned into a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionFormat {
    /// The whole text is the appeal
    Plain,
    /// `ФИО:` / `Телефон:` / `Тип обращения:` / `Текст обращения:` lines
    AppealForm,
}

/// Replies whose text depends on stored data
#[derive(Debug, Clone, Copy)]
pub struct Replies {
    pub order_created: fn(&DomainRecord) -> String,
    pub order_keyboard: Keyboard,
    pub submission_accepted: fn(&DomainRecord) -> String,
    pub records_header: &'static str,
    pub no_records: &'static str,
    pub record_line: fn(&DomainRecord) -> String,
}

/// One bot personality
#[derive(Debug)]
pub struct BotProfile {
    /// Path segment under `/bots/` and the `bot` column of stored rows
    pub name: &'static str,
    /// Kind of record a completed submission produces
    pub submission_kind: RecordKind,
    pub submission_format: SubmissionFormat,
    pub commands: &'static [(&'static str, Action<'static>)],
    pub callbacks: &'static [(&'static str, Action<'static>)],
    pub callback_prefixes: &'static [(&'static str, PrefixRoute)],
    pub state_routes: &'static [(DialogState, Action<'static>)],
    /// Reply for free text that no state claims; `None` stays silent
    pub fallback: Option<Menu>,
    /// Service key to human label
    pub catalog: &'static [(&'static str, &'static str)],
    pub replies: Replies,
}

impl BotProfile {
    /// Whether `token` is one of this profile's commands
    pub fn has_command(&self, token: &str) -> bool {
        self.commands.iter().any(|(t, _)| *t == token)
    }

    /// Label of a catalog service, or the raw key when unknown
    pub fn service_label<'a>(&'a self, key: &'a str) -> &'a str {
        self.catalog
            .iter()
            .find(|(k, _)| *k == key)
            .map_or(key, |(_, label)| *label)
    }
}

/// Escape user-supplied text for `parse_mode: HTML`
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Date format used in record listings
pub(crate) fn format_date(record: &DomainRecord) -> String {
    record.created_at.format("%d.%m.%Y %H:%M").to_string()
}
