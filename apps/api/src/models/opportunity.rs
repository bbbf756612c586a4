use serde::{Deserialize, Serialize};

use crate::listing::Listable;

/// A job, internship or attachment listed on the opportunities board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Opportunity {
    pub id: String,
    pub title: String,
    pub company: String,
    pub description: String,
    pub department: String,
    pub location: String,
    /// Monthly salary in RWF. `None` for unpaid or undisclosed positions.
    pub salary: Option<u64>,
    #[serde(rename = "type")]
    pub job_type: String,
    /// Posting date as published, e.g. `2024-01-02`.
    pub posted: String,
    pub relevance: Option<u32>,
}

impl Listable for Opportunity {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.title
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn organization(&self) -> &str {
        &self.company
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn category(&self) -> &str {
        &self.department
    }

    fn location(&self) -> &str {
        &self.location
    }

    fn kind(&self) -> &str {
        &self.job_type
    }

    fn compensation(&self) -> u64 {
        self.salary.unwrap_or(0)
    }

    fn posted(&self) -> &str {
        &self.posted
    }

    fn relevance(&self) -> u32 {
        self.relevance.unwrap_or(0)
    }
}
