// Profile builder: completion scoring, field validation, drafts, publishing.

pub mod completeness;
pub mod drafts;
pub mod handlers;
pub mod publish;
pub mod validation;
