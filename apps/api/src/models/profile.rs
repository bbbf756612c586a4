use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Basic,
    Education,
    Skills,
    Experience,
    Projects,
}

impl SectionId {
    /// Every section of the profile builder, in display order.
    pub const ALL: [SectionId; 5] = [
        SectionId::Basic,
        SectionId::Education,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Projects,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Basic => "basic",
            SectionId::Education => "education",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
        }
    }
}

/// Input type of a form control. Drives format validation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Url,
    Tel,
    Month,
    Select,
    Textarea,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormField {
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub kind: FieldKind,
}

impl FormField {
    /// A field counts as filled when its trimmed value is non-empty.
    pub fn is_filled(&self) -> bool {
        !self.value.trim().is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillEntry {
    pub name: String,
    #[serde(default)]
    pub level: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SectionForm {
    pub fields: Vec<FormField>,
    /// Basic info only: a non-default profile photo was uploaded.
    pub has_photo: bool,
    /// Skills only: skills recorded by the user.
    pub skills: Vec<SkillEntry>,
}

/// Everything the profile builder collects, keyed by section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProfileForm {
    pub sections: BTreeMap<SectionId, SectionForm>,
}

impl ProfileForm {
    pub fn section(&self, id: SectionId) -> Option<&SectionForm> {
        self.sections.get(&id)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SaveType {
    Draft,
    Progress,
    Auto,
}

/// Stored snapshot of the profile builder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileDraft {
    pub form: ProfileForm,
    pub saved_at: DateTime<Utc>,
    pub save_type: SaveType,
}
