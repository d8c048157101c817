mod settings;

pub use settings::{
    FollowUpSettings, PacingSettings, ServerSettings, Settings, WebhookSettings,
};
