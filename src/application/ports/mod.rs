mod notifier;
mod submission_gateway;

pub use notifier::Notifier;
pub use submission_gateway::{LeadSubmission, SubmissionGateway, SubmissionGatewayError};
