use crate::models::network::Person;
use crate::models::opportunity::Opportunity;
use crate::models::skill::{Difficulty, Skill};

#[allow(clippy::too_many_arguments)]
fn opportunity(
    id: &str,
    title: &str,
    company: &str,
    description: &str,
    department: &str,
    location: &str,
    salary: Option<u64>,
    job_type: &str,
    posted: &str,
    relevance: Option<u32>,
) -> Opportunity {
    Opportunity {
        id: id.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        description: description.to_string(),
        department: department.to_string(),
        location: location.to_string(),
        salary,
        job_type: job_type.to_string(),
        posted: posted.to_string(),
        relevance,
    }
}

pub(super) fn opportunities() -> Vec<Opportunity> {
    vec![
        opportunity(
            "opp-001",
            "Frontend Developer",
            "Tech Solutions Rwanda",
            "Build responsive web applications for local businesses using modern JavaScript frameworks.",
            "engineering",
            "Kigali",
            Some(600_000),
            "full-time",
            "2024-03-12",
            Some(92),
        ),
        opportunity(
            "opp-002",
            "Registered Nurse",
            "Ruhengeri Referral Hospital",
            "Provide patient care on the surgical ward and support clinical training of interns.",
            "health",
            "Musanze",
            Some(450_000),
            "full-time",
            "2024-03-08",
            Some(78),
        ),
        opportunity(
            "opp-003",
            "Civil Engineering Intern",
            "Rwanda Transport Development Agency",
            "Assist site engineers with road construction supervision and quantity surveys.",
            "engineering",
            "Musanze",
            Some(150_000),
            "internship",
            "2024-03-15",
            Some(85),
        ),
        opportunity(
            "opp-004",
            "Junior Business Analyst",
            "Bank of Kigali",
            "Analyse branch performance data and prepare weekly reports for management.",
            "business",
            "Kigali",
            Some(700_000),
            "full-time",
            "2024-02-27",
            Some(70),
        ),
        opportunity(
            "opp-005",
            "Laboratory Assistant",
            "Rwanda Biomedical Centre",
            "Run diagnostic tests and maintain laboratory equipment and records.",
            "health",
            "Kigali",
            Some(350_000),
            "part-time",
            "2024-03-01",
            Some(66),
        ),
        opportunity(
            "opp-006",
            "Land Surveyor",
            "Rwanda Land Management Authority",
            "Carry out cadastral surveys and update the national land information system.",
            "sciences",
            "Huye",
            Some(520_000),
            "contract",
            "2024-02-19",
            Some(58),
        ),
        opportunity(
            "opp-007",
            "Community Translator",
            "INES-Ruhengeri Language Centre",
            "Translate training materials between Kinyarwanda, English and French.",
            "languages",
            "Musanze",
            None,
            "volunteer",
            "2024-03-10",
            None,
        ),
        opportunity(
            "opp-008",
            "Backend Developer Intern",
            "Irembo",
            "Develop REST services for citizen e-government applications.",
            "engineering",
            "Kigali",
            Some(200_000),
            "internship",
            "2024-03-18",
            Some(88),
        ),
    ]
}

fn skill(name: &str, category: &str, description: &str, progress: u8, difficulty: Difficulty) -> Skill {
    Skill {
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        progress,
        difficulty,
    }
}

pub(super) fn skills() -> Vec<Skill> {
    use Difficulty::*;

    vec![
        skill("Civil Engineering Design", "engineering", "Master structural design and construction principles", 75, Advanced),
        skill("Water Systems Management", "engineering", "Design and manage water treatment and distribution systems", 60, Intermediate),
        skill("Programming & Software Development", "engineering", "Master modern programming languages and frameworks", 85, Intermediate),
        skill("Architectural Design", "engineering", "Create innovative and sustainable building designs", 70, Advanced),
        skill("Laboratory Diagnostics", "health", "Master biomedical laboratory techniques and analysis", 80, Advanced),
        skill("Patient Care & Nursing", "health", "Provide comprehensive patient care and support", 90, Intermediate),
        skill("Pharmaceutical Sciences", "health", "Understand drug development and medication management", 65, Advanced),
        skill("Anesthesia Techniques", "health", "Administer and monitor anesthesia safely", 55, Expert),
        skill("Economic Analysis", "business", "Analyse markets and economic policy", 70, Intermediate),
        skill("Enterprise Management", "business", "Plan, run and grow an organisation", 60, Advanced),
        skill("Land Valuation", "business", "Assess land and property value", 45, Intermediate),
        skill("Statistical Analysis", "business", "Turn data into decisions with statistics", 75, Intermediate),
        skill("Biotechnology Research", "sciences", "Apply biological systems to research problems", 50, Advanced),
        skill("Land Surveying", "sciences", "Measure and map land with modern instruments", 65, Intermediate),
        skill("Information Management", "sciences", "Organise and secure information systems", 70, Intermediate),
        skill("Multilingual Communication", "languages", "Communicate across Kinyarwanda, English and French", 85, Intermediate),
        skill("Professional Writing", "languages", "Write clear reports, proposals and correspondence", 75, Intermediate),
        skill("Public Speaking", "languages", "Present confidently to any audience", 60, Beginner),
    ]
}

fn person(id: &str, name: &str, title: &str, company: &str, department: &str, person_type: &str) -> Person {
    Person {
        id: id.to_string(),
        name: name.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        department: department.to_string(),
        person_type: person_type.to_string(),
    }
}

pub(super) fn people() -> Vec<Person> {
    vec![
        person("usr-001", "Alice Uwimana", "Software Engineer", "Tech Solutions Rwanda", "Engineering", "alumni"),
        person("usr-002", "Jean Baptiste", "Medical Student", "INES - Health Sciences", "Health", "student"),
        person("usr-003", "Marie Claire", "Business Analyst", "Bank of Kigali", "Business", "alumni"),
        person("usr-004", "Eric Niyonzima", "Senior Surveyor", "Rwanda Land Management Authority", "Sciences", "mentor"),
        person("usr-005", "Grace Mukamana", "Nursing Lecturer", "INES - Health Sciences", "Health", "mentor"),
        person("usr-006", "Patrick Habimana", "Civil Engineering Student", "INES - Engineering", "Engineering", "student"),
        person("usr-007", "Diane Ingabire", "Data Analyst", "Irembo", "Business", "alumni"),
    ]
}
