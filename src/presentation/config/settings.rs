/// Runtime configuration, resolved from the environment with the defaults
/// the product shipped with.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub webhook: WebhookSettings,
    pub pacing: PacingSettings,
    pub follow_up: FollowUpSettings,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings::default(),
            webhook: WebhookSettings::default(),
            pacing: PacingSettings::default(),
            follow_up: FollowUpSettings::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }
}

#[derive(Debug, Clone)]
pub struct WebhookSettings {
    pub url: String,
    /// The `origem` field of every submission; fixed endpoint contract.
    pub source: String,
}

impl Default for WebhookSettings {
    fn default() -> Self {
        Self {
            url: std::env::var("WEBHOOK_URL")
                .unwrap_or_else(|_| "https://n8n.lockpainel.shop/webhook/quiz".to_string()),
            source: "Quiz Redshark".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PacingSettings {
    pub composing_delay_ms: u64,
    pub inter_message_delay_ms: u64,
}

impl Default for PacingSettings {
    fn default() -> Self {
        Self {
            composing_delay_ms: std::env::var("COMPOSING_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1500),
            inter_message_delay_ms: std::env::var("INTER_MESSAGE_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FollowUpSettings {
    /// Group-invite link offered once the conversation completes.
    pub group_invite_url: String,
}

impl Default for FollowUpSettings {
    fn default() -> Self {
        Self {
            group_invite_url: std::env::var("GROUP_INVITE_URL")
                .unwrap_or_else(|_| "https://chat.whatsapp.com/SEU_LINK_DO_GRUPO".to_string()),
        }
    }
}
