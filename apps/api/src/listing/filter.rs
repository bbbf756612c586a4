//! Listing filter engine: AND-combined search, location, compensation, type
//! and category predicates over any [`Listable`] collection.

use serde::{Deserialize, Serialize};

use crate::listing::Listable;

/// Current filter selection. Every field is independently optional: the
/// default value of a field imposes no constraint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FilterCriteria {
    pub search: String,
    pub location: Option<String>,
    pub max_compensation: Option<u64>,
    pub types: Vec<String>,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterOutcome<T> {
    pub count: usize,
    pub items: Vec<T>,
}

impl FilterCriteria {
    /// True when no predicate is active.
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.active_location().is_none()
            && self.max_compensation.is_none()
            && self.types.is_empty()
            && self.categories.is_empty()
    }

    fn active_location(&self) -> Option<&str> {
        self.location.as_deref().filter(|l| !l.is_empty())
    }

    /// Conjunction of all active predicates.
    pub fn matches<T: Listable + ?Sized>(&self, item: &T) -> bool {
        let term = self.search.trim().to_lowercase();
        if !term.is_empty()
            && !item
                .search_fields()
                .iter()
                .any(|text| text.to_lowercase().contains(&term))
        {
            return false;
        }

        if let Some(location) = self.active_location() {
            if item.location() != location {
                return false;
            }
        }

        if let Some(max) = self.max_compensation {
            if item.compensation() > max {
                return false;
            }
        }

        if !self.types.is_empty() && !self.types.iter().any(|t| t == item.kind()) {
            return false;
        }

        if !self.categories.is_empty() && !self.categories.iter().any(|c| c == item.category()) {
            return false;
        }

        true
    }
}

/// Returns the items passing every active predicate, in their original order.
pub fn filter_items<T: Listable + Clone>(items: &[T], criteria: &FilterCriteria) -> FilterOutcome<T> {
    if criteria.is_empty() {
        return FilterOutcome {
            count: items.len(),
            items: items.to_vec(),
        };
    }
    let items: Vec<T> = items
        .iter()
        .filter(|item| criteria.matches(*item))
        .cloned()
        .collect();
    FilterOutcome {
        count: items.len(),
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::opportunity::Opportunity;

    fn make_opportunity(id: &str, title: &str, salary: Option<u64>) -> Opportunity {
        Opportunity {
            id: id.to_string(),
            title: title.to_string(),
            company: "Tech Solutions Rwanda".to_string(),
            description: "Build and maintain web applications".to_string(),
            department: "engineering".to_string(),
            location: "Kigali".to_string(),
            salary,
            job_type: "full-time".to_string(),
            posted: "2024-01-01".to_string(),
            relevance: None,
        }
    }

    fn ids(outcome: &FilterOutcome<Opportunity>) -> Vec<&str> {
        outcome.items.iter().map(|o| o.id.as_str()).collect()
    }

    #[test]
    fn test_empty_criteria_returns_everything_in_order() {
        let items = vec![
            make_opportunity("a", "Frontend Developer", Some(500)),
            make_opportunity("b", "Nurse", Some(900)),
        ];
        let criteria = FilterCriteria::default();
        assert!(criteria.is_empty());

        let outcome = filter_items(&items, &criteria);
        assert_eq!(outcome.count, 2);
        assert_eq!(outcome.items, items);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let mut nurse = make_opportunity("b", "Nurse", None);
        nurse.company = "Ruhengeri Hospital".to_string();
        nurse.description = "Ward duties".to_string();
        let items = vec![make_opportunity("a", "Frontend Developer", None), nurse];

        let criteria = FilterCriteria {
            search: "dev".to_string(),
            ..Default::default()
        };
        let outcome = filter_items(&items, &criteria);
        assert_eq!(ids(&outcome), vec!["a"]);
    }

    #[test]
    fn test_search_matches_company_and_description() {
        let items = vec![make_opportunity("a", "Analyst", None)];
        let by_company = FilterCriteria {
            search: "RWANDA".to_string(),
            ..Default::default()
        };
        let by_description = FilterCriteria {
            search: "web app".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_items(&items, &by_company).count, 1);
        assert_eq!(filter_items(&items, &by_description).count, 1);
    }

    #[test]
    fn test_blank_search_imposes_nothing() {
        let items = vec![make_opportunity("a", "Analyst", None)];
        let criteria = FilterCriteria {
            search: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_items(&items, &criteria).count, 1);
    }

    #[test]
    fn test_location_is_exact_match() {
        let mut musanze = make_opportunity("b", "Lecturer", None);
        musanze.location = "Musanze".to_string();
        let items = vec![make_opportunity("a", "Developer", None), musanze];

        let criteria = FilterCriteria {
            location: Some("Musanze".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_items(&items, &criteria)), vec!["b"]);

        let partial = FilterCriteria {
            location: Some("Musan".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_items(&items, &partial).count, 0);
    }

    #[test]
    fn test_empty_location_imposes_nothing() {
        let items = vec![make_opportunity("a", "Developer", None)];
        let criteria = FilterCriteria {
            location: Some(String::new()),
            ..Default::default()
        };
        assert!(criteria.is_empty());
        assert_eq!(filter_items(&items, &criteria).count, 1);
    }

    #[test]
    fn test_max_compensation_is_inclusive() {
        let items = vec![
            make_opportunity("a", "Junior", Some(500)),
            make_opportunity("b", "Senior", Some(900)),
            make_opportunity("c", "Volunteer", None),
        ];
        let criteria = FilterCriteria {
            max_compensation: Some(500),
            ..Default::default()
        };
        // Missing salary counts as zero and always fits under the bound.
        assert_eq!(ids(&filter_items(&items, &criteria)), vec!["a", "c"]);
    }

    #[test]
    fn test_type_and_category_sets() {
        let mut internship = make_opportunity("b", "Intern", None);
        internship.job_type = "internship".to_string();
        internship.department = "health".to_string();
        let items = vec![make_opportunity("a", "Developer", None), internship];

        let by_type = FilterCriteria {
            types: vec!["internship".to_string(), "part-time".to_string()],
            ..Default::default()
        };
        assert_eq!(ids(&filter_items(&items, &by_type)), vec!["b"]);

        let by_category = FilterCriteria {
            categories: vec!["engineering".to_string()],
            ..Default::default()
        };
        assert_eq!(ids(&filter_items(&items, &by_category)), vec!["a"]);
    }

    #[test]
    fn test_predicates_are_conjunctive() {
        let items = vec![
            make_opportunity("a", "Frontend Developer", Some(800)),
            make_opportunity("b", "Backend Developer", Some(400)),
        ];
        let criteria = FilterCriteria {
            search: "developer".to_string(),
            max_compensation: Some(500),
            categories: vec!["engineering".to_string()],
            ..Default::default()
        };
        let outcome = filter_items(&items, &criteria);
        assert_eq!(ids(&outcome), vec!["b"]);

        // Exactly the items for which every predicate holds.
        let expected: Vec<_> = items.iter().filter(|i| criteria.matches(*i)).collect();
        assert_eq!(outcome.items.iter().collect::<Vec<_>>(), expected);
    }
}
