//! Update classification

use bot_core::update::{InvalidUpdate, Update};

use crate::profiles::BotProfile;

/// Coarse kind of an inbound update, relative to one profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// A command token the profile knows, without arguments or `@botname`
    Command(String),
    /// A button press with its opaque payload
    Callback { id: String, data: String },
    /// Any other text, unknown slash words included
    FreeText(String),
    /// Neither message nor callback, or a message without text
    Unknown,
    /// Rejected at the boundary
    Invalid(InvalidUpdate),
}

/// First word of `text` as a command token: `/start@my_bot payload` -> `/start`
pub fn command_token(text: &str) -> Option<&str> {
    let first = text.split_whitespace().next()?;
    if !first.starts_with('/') || first.len() == 1 {
        return None;
    }
    first.split('@').next()
}

/// Classify an update for `profile`
pub fn classify(update: &Result<Update, InvalidUpdate>, profile: &BotProfile) -> Classification {
    match update {
        Err(reason) => Classification::Invalid(reason.clone()),
        Ok(Update::Unrecognized) => Classification::Unknown,
        Ok(Update::CallbackQuery(callback)) => Classification::Callback {
            id: callback.id.clone(),
            data: callback.data.clone(),
        },
        Ok(Update::Message(message)) => match message.text.as_deref() {
            None => Classification::Unknown,
            Some(text) => match command_token(text) {
                Some(token) if profile.has_command(token) => {
                    Classification::Command(token.to_string())
                }
                _ => Classification::FreeText(text.to_string()),
            },
        },
    }
}
