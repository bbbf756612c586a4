// Read-only catalogs seeded at start-up: opportunities, skills, people.

pub mod handlers;
mod seed;

use crate::listing::{filter_items, sort_items, FilterCriteria, Listable, SortKey};
use crate::models::network::Person;
use crate::models::opportunity::Opportunity;
use crate::models::skill::Skill;

/// Category / type selector value meaning "no constraint".
pub const ALL: &str = "all";

#[derive(Debug, Clone)]
pub struct Catalog {
    pub opportunities: Vec<Opportunity>,
    pub skills: Vec<Skill>,
    pub people: Vec<Person>,
}

impl Catalog {
    pub fn seed() -> Self {
        Self {
            opportunities: seed::opportunities(),
            skills: seed::skills(),
            people: seed::people(),
        }
    }

    pub fn find_opportunity(&self, id: &str) -> Option<&Opportunity> {
        self.opportunities.iter().find(|o| o.id() == id)
    }

    /// Skill categories in first-seen order.
    pub fn skill_categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for skill in &self.skills {
            if !categories.contains(&skill.category) {
                categories.push(skill.category.clone());
            }
        }
        categories
    }

    /// Skills in one category, or every skill for `all` / no selection.
    pub fn skills_in(&self, category: Option<&str>) -> Vec<Skill> {
        let criteria = FilterCriteria {
            categories: single_selection(category),
            ..Default::default()
        };
        filter_items(&self.skills, &criteria).items
    }

    /// Network directory: search over name / title / company, optional
    /// `student` / `alumni` / `mentor` selector, optional sort.
    pub fn search_people(&self, search: &str, person_type: Option<&str>, sort: Option<&str>) -> Vec<Person> {
        let criteria = FilterCriteria {
            search: search.to_string(),
            types: single_selection(person_type),
            ..Default::default()
        };
        let found = filter_items(&self.people, &criteria).items;
        sort_items(&found, sort.and_then(SortKey::parse))
    }
}

fn single_selection(value: Option<&str>) -> Vec<String> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() && v != ALL => vec![v.to_string()],
        _ => Vec::new(),
    }
}
