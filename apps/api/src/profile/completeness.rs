use serde::{Deserialize, Serialize};

use crate::models::profile::{ProfileForm, SectionForm, SectionId};

/// Weights and thresholds of the completion heuristic. All values are
/// points on a 0–100 scale and can be overridden from the environment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoringConfig {
    pub required_weight: f64,
    pub optional_weight: f64,
    pub basic_required_weight: f64,
    pub basic_optional_weight: f64,
    pub photo_bonus: f64,
    pub points_per_skill: f64,
    pub publish_threshold: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            required_weight: 80.0,
            optional_weight: 20.0,
            basic_required_weight: 70.0,
            basic_optional_weight: 20.0,
            photo_bonus: 10.0,
            points_per_skill: 20.0,
            publish_threshold: 70,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum SectionStatus {
    Complete,
    InProgress,
    Started,
    Empty,
}

impl SectionStatus {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 100 => SectionStatus::Complete,
            s if s >= 50 => SectionStatus::InProgress,
            0 => SectionStatus::Empty,
            _ => SectionStatus::Started,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionCompletion {
    pub section: SectionId,
    pub score: u32,
    pub status: SectionStatus,
    pub filled_required: usize,
    pub total_required: usize,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletenessReport {
    pub overall_score: u32,
    pub sections: Vec<SectionCompletion>,
    pub publish_threshold: u32,
    pub publishable: bool,
}

/// `part / whole`, or 0 when there is nothing to divide by.
fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

struct FieldCounts {
    filled_required: usize,
    total_required: usize,
    filled_optional: usize,
    total_optional: usize,
}

fn count_fields(form: &SectionForm) -> FieldCounts {
    let (required, optional): (Vec<_>, Vec<_>) = form.fields.iter().partition(|f| f.required);
    FieldCounts {
        filled_required: required.iter().filter(|f| f.is_filled()).count(),
        total_required: required.len(),
        filled_optional: optional.iter().filter(|f| f.is_filled()).count(),
        total_optional: optional.len(),
    }
}

/// Completion of one section, 0–100.
///
/// - skills: `points_per_skill` per recorded skill, capped at 100
/// - basic: required / optional split plus a bonus for a profile photo
/// - everything else: the generic required / optional split, or 0 when the
///   section has no required fields at all
pub fn score_section(section: SectionId, form: &SectionForm, config: &ScoringConfig) -> u32 {
    if section == SectionId::Skills {
        let points = config.points_per_skill * form.skills.len() as f64;
        return points.clamp(0.0, 100.0).round() as u32;
    }

    let counts = count_fields(form);
    if section != SectionId::Basic && counts.total_required == 0 {
        return 0;
    }
    let (required_weight, optional_weight, bonus) = match section {
        SectionId::Basic => (
            config.basic_required_weight,
            config.basic_optional_weight,
            if form.has_photo { config.photo_bonus } else { 0.0 },
        ),
        _ => (config.required_weight, config.optional_weight, 0.0),
    };

    let raw = required_weight * ratio(counts.filled_required, counts.total_required)
        + optional_weight * ratio(counts.filled_optional, counts.total_optional)
        + bonus;
    raw.clamp(0.0, 100.0).round() as u32
}

/// Unweighted mean of section scores, rounded. Empty input scores 0.
pub fn aggregate_score(scores: &[u32]) -> u32 {
    if scores.is_empty() {
        return 0;
    }
    let sum: u32 = scores.iter().sum();
    (sum as f64 / scores.len() as f64).round() as u32
}

pub fn is_publishable(overall_score: u32, config: &ScoringConfig) -> bool {
    overall_score >= config.publish_threshold
}

fn recommendations(section: SectionId, form: &SectionForm, counts: &FieldCounts, config: &ScoringConfig) -> Vec<String> {
    let mut recs = Vec::new();
    match section {
        SectionId::Skills => {
            let full_at = (100.0 / config.points_per_skill.max(1.0)).ceil() as usize;
            if form.skills.len() < full_at {
                recs.push(format!(
                    "Add {} more skill(s) to complete this section",
                    full_at - form.skills.len()
                ));
            }
        }
        _ => {
            let missing = counts.total_required - counts.filled_required;
            if missing > 0 {
                recs.push(format!(
                    "Fill in {missing} more required field(s) in {}",
                    section.as_str()
                ));
            }
            if section == SectionId::Basic && !form.has_photo {
                recs.push("Upload a profile photo".to_string());
            }
        }
    }
    recs
}

/// Scores every section of the builder. Sections missing from the form
/// score 0.
pub fn compute_completeness_report(form: &ProfileForm, config: &ScoringConfig) -> CompletenessReport {
    let empty = SectionForm::default();
    let sections: Vec<SectionCompletion> = SectionId::ALL
        .iter()
        .map(|&section| {
            let section_form = form.section(section).unwrap_or(&empty);
            let counts = count_fields(section_form);
            let score = score_section(section, section_form, config);
            SectionCompletion {
                section,
                score,
                status: SectionStatus::from_score(score),
                filled_required: counts.filled_required,
                total_required: counts.total_required,
                recommendations: recommendations(section, section_form, &counts, config),
            }
        })
        .collect();

    let scores: Vec<u32> = sections.iter().map(|s| s.score).collect();
    let overall_score = aggregate_score(&scores);

    CompletenessReport {
        overall_score,
        sections,
        publish_threshold: config.publish_threshold,
        publishable: is_publishable(overall_score, config),
    }
}
