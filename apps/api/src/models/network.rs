use serde::{Deserialize, Serialize};

use crate::listing::Listable;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub title: String,
    pub company: String,
    pub department: String,
    /// `student`, `alumni` or `mentor`.
    #[serde(rename = "type")]
    pub person_type: String,
}

impl Listable for Person {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn organization(&self) -> &str {
        &self.company
    }

    fn category(&self) -> &str {
        &self.department
    }

    fn kind(&self) -> &str {
        &self.person_type
    }

    // The directory search box looks at who someone is, not a description.
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.title.as_str(), self.company.as_str()]
    }
}
