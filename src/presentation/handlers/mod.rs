mod conversation;
mod health;
pub mod views;

pub use conversation::{
    conversation_view_handler, message_handler, quick_reply_handler, reset_handler, start_handler,
};
pub use health::health_handler;
