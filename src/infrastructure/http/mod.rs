mod webhook_gateway;

pub use webhook_gateway::WebhookGateway;
