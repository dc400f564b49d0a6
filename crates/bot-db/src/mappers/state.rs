//! DialogState <-> model mapper

use bot_core::entities::DialogState;
use bot_core::error::DomainError;
use tracing::warn;

use crate::models::ConversationStateModel;

impl TryFrom<ConversationStateModel> for DialogState {
    type Error = DomainError;

    fn try_from(model: ConversationStateModel) -> Result<Self, Self::Error> {
        model.state.parse()
    }
}

/// Stored state, or idle when the row holds a value this version never writes
pub fn state_or_idle(model: ConversationStateModel) -> Option<DialogState> {
    let (bot, user_id) = (model.bot.clone(), model.user_id);
    match DialogState::try_from(model) {
        Ok(state) => Some(state),
        Err(e) => {
            warn!(bot = %bot, user_id, error = %e, "Ignoring unrecognized dialog state");
            None
        }
    }
}
