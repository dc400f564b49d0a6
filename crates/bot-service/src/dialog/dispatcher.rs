//! Routing of classified updates to actions

use bot_core::entities::DialogState;

use super::{Action, Classification};
use crate::profiles::{BotProfile, PrefixRoute};

/// Route a classified update using the profile tables.
///
/// Commands ignore `state`, so they always override an in-flight flow.
/// Returns `None` when the update has no handler.
pub fn route<'a>(
    profile: &'a BotProfile,
    classification: &'a Classification,
    state: Option<DialogState>,
) -> Option<Action<'a>> {
    match classification {
        Classification::Command(token) => Some(
            lookup(profile.commands, token).unwrap_or(Action::Fallback),
        ),
        Classification::Callback { data, .. } => Some(route_callback(profile, data)),
        Classification::FreeText(_) => Some(
            state
                .and_then(|state| {
                    profile
                        .state_routes
                        .iter()
                        .find(|(s, _)| *s == state)
                        .map(|(_, action)| *action)
                })
                .unwrap_or(Action::Fallback),
        ),
        Classification::Unknown | Classification::Invalid(_) => None,
    }
}

fn route_callback<'a>(profile: &'a BotProfile, data: &'a str) -> Action<'a> {
    if let Some(action) = lookup(profile.callbacks, data) {
        return action;
    }

    profile
        .callback_prefixes
        .iter()
        .find_map(|(prefix, route)| {
            let key = data.strip_prefix(prefix).filter(|key| !key.is_empty())?;
            Some(match route {
                PrefixRoute::StartOrder => Action::StartOrder(key),
            })
        })
        .unwrap_or(Action::Acknowledge)
}

fn lookup<'a>(table: &'a [(&'static str, Action<'static>)], key: &str) -> Option<Action<'a>> {
    table.iter().find(|(k, _)| *k == key).map(|(_, action)| *action)
}
