//! Value objects - immutable types that represent domain concepts

mod record_status;
mod reply;

pub use record_status::RecordStatus;
pub use reply::{InlineButton, InlineKeyboard, OutgoingMessage, ParseMode};
