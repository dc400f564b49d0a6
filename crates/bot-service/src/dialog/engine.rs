//! Dialog engine - one inbound update, start to finish

use tracing::{debug, info, instrument, warn};

use bot_core::entities::{DialogState, NewRecord, RecordKind, UserIdentity};
use bot_core::traits::Messenger;
use bot_core::update::{InvalidUpdate, Update};
use bot_core::value_objects::OutgoingMessage;

use super::form;
use super::{classify, route, Action, Classification, ReplyDispatcher};
use crate::profiles::{build_keyboard, BotProfile, SubmissionFormat};
use crate::services::{ServiceContext, ServiceResult};

/// What happened to an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    /// Rejected at the boundary, nothing touched
    Dropped,
    /// No handler for this kind of update
    Ignored,
    /// An action ran
    Handled {
        action: &'static str,
        record_id: Option<i64>,
        replied: bool,
    },
}

/// Result of executing an action, before the reply goes out
struct Step {
    reply: Option<OutgoingMessage>,
    record_id: Option<i64>,
}

impl Step {
    fn silent() -> Self {
        Self {
            reply: None,
            record_id: None,
        }
    }

    fn reply(message: OutgoingMessage) -> Self {
        Self {
            reply: Some(message),
            record_id: None,
        }
    }
}

/// Dialog engine for one profile
pub struct DialogEngine<'a> {
    ctx: &'a ServiceContext,
    profile: &'a BotProfile,
    replies: ReplyDispatcher<'a>,
}

impl<'a> DialogEngine<'a> {
    /// Create a new DialogEngine
    pub fn new(ctx: &'a ServiceContext, profile: &'a BotProfile, messenger: &'a dyn Messenger) -> Self {
        Self {
            ctx,
            profile,
            replies: ReplyDispatcher::new(messenger),
        }
    }

    /// Handle one update.
    ///
    /// A callback is always acknowledged exactly once, even when handling
    /// it failed.
    #[instrument(skip(self, update), fields(bot = self.profile.name))]
    pub async fn handle(&self, update: Result<Update, InvalidUpdate>) -> ServiceResult<DialogOutcome> {
        let classification = classify(&update, self.profile);

        let update = match update {
            Ok(update) => update,
            Err(reason) => {
                warn!(%reason, "Dropping invalid update");
                return Ok(DialogOutcome::Dropped);
            }
        };

        let (Some(chat_id), Some(sender)) = (update.chat_id(), update.sender()) else {
            debug!("Ignoring unrecognized update");
            return Ok(DialogOutcome::Ignored);
        };

        let result = self.process(&classification, chat_id, sender).await;

        if let Update::CallbackQuery(callback) = &update {
            self.replies.acknowledge(&callback.id).await;
        }

        result
    }

    async fn process(
        &self,
        classification: &Classification,
        chat_id: i64,
        sender: &UserIdentity,
    ) -> ServiceResult<DialogOutcome> {
        self.ctx.user_repo().upsert(sender).await?;

        let state = match classification {
            Classification::FreeText(_) => {
                self.ctx
                    .state_store()
                    .get(self.profile.name, sender.id)
                    .await?
            }
            _ => None,
        };

        let Some(action) = route(self.profile, classification, state) else {
            debug!("No handler for update");
            return Ok(DialogOutcome::Ignored);
        };
        debug!(action = action.name(), user_id = sender.id, "Routed update");

        let step = self.execute(action, classification, chat_id, sender).await?;

        let replied = match &step.reply {
            Some(message) => self.replies.send(message).await,
            None => false,
        };

        Ok(DialogOutcome::Handled {
            action: action.name(),
            record_id: step.record_id,
            replied,
        })
    }

    async fn execute(
        &self,
        action: Action<'_>,
        classification: &Classification,
        chat_id: i64,
        sender: &UserIdentity,
    ) -> ServiceResult<Step> {
        let bot = self.profile.name;
        let replies = &self.profile.replies;

        match action {
            Action::Reply(menu) => Ok(Step::reply(menu.render(chat_id))),

            Action::StartOrder(key) => {
                let service = self.profile.service_label(key);
                let record = self
                    .ctx
                    .record_repo()
                    .create(&NewRecord::order(bot, chat_id, sender.clone(), service))
                    .await?;
                info!(
                    record_id = record.id,
                    service,
                    customer = %sender.display_name(),
                    "Order created"
                );

                let message = OutgoingMessage::new(chat_id, (replies.order_created)(&record))
                    .with_keyboard(build_keyboard(replies.order_keyboard));
                Ok(Step {
                    reply: Some(message),
                    record_id: Some(record.id),
                })
            }

            Action::BeginSubmission(prompt) => {
                self.ctx
                    .state_store()
                    .set(bot, sender.id, DialogState::AwaitingSubmission)
                    .await?;
                Ok(Step::reply(prompt.render(chat_id)))
            }

            Action::CompleteSubmission => {
                let Classification::FreeText(text) = classification else {
                    return Ok(Step::silent());
                };

                let record = self
                    .ctx
                    .record_repo()
                    .create(&self.submission(chat_id, sender, text))
                    .await?;
                self.ctx.state_store().clear(bot, sender.id).await?;
                info!(record_id = record.id, kind = %record.kind, "Submission recorded");

                Ok(Step {
                    reply: Some(OutgoingMessage::new(
                        chat_id,
                        (replies.submission_accepted)(&record),
                    )),
                    record_id: Some(record.id),
                })
            }

            Action::ListRecords(limit) => {
                let records = self
                    .ctx
                    .record_repo()
                    .list_for_user(bot, sender.id, limit)
                    .await?;

                let text = if records.is_empty() {
                    replies.no_records.to_string()
                } else {
                    let mut text = replies.records_header.to_string();
                    for record in &records {
                        text.push_str(&(replies.record_line)(record));
                    }
                    text.trim_end().to_string()
                };
                Ok(Step::reply(OutgoingMessage::new(chat_id, text)))
            }

            Action::Fallback => Ok(self
                .profile
                .fallback
                .map_or_else(Step::silent, |menu| Step::reply(menu.render(chat_id)))),

            Action::Acknowledge => Ok(Step::silent()),
        }
    }

    fn submission(&self, chat_id: i64, sender: &UserIdentity, text: &str) -> NewRecord {
        let bot = self.profile.name;
        let author = sender.clone();

        match (self.profile.submission_kind, self.profile.submission_format) {
            (RecordKind::Order, _) => NewRecord::order(bot, chat_id, author, text.trim()),
            (RecordKind::Appeal, SubmissionFormat::Plain) => {
                NewRecord::appeal(bot, chat_id, author, text)
            }
            (RecordKind::Appeal, SubmissionFormat::AppealForm) => {
                let form = form::parse(text);
                NewRecord::appeal(bot, chat_id, author, form.message)
                    .with_contact(form.full_name, form.phone)
                    .with_category(form.category)
            }
        }
    }
}
