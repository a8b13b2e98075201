use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::models::{
    domain::{AssessmentBlock, TopicOutline},
    dto::request::{AssessmentMethodInfo, CourseInfoRequest, LearningUnitInfo},
};

static HOURS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+\.?\d*)").expect("HOURS_REGEX is a valid regex pattern"));

static UNIT_PREFIX_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^LU\s*\d+\s*[:.\-]\s*").expect("UNIT_PREFIX_REGEX is a valid regex pattern")
});

static TOPIC_PREFIX_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^T\d+[\s:.]").expect("TOPIC_PREFIX_REGEX is a valid regex pattern"));

const HOURS_PER_DAY: f64 = 8.0;
const DEFAULT_METHOD: &str = "Lecture";
const DEFAULT_ASSESSMENT_NAME: &str = "Assessment";

const VALID_METHOD_PAIRS: &[&[&str]] = &[
    &["Lecture", "Didactic Questioning"],
    &["Lecture", "Peer Sharing"],
    &["Lecture", "Group Discussion"],
    &["Demonstration", "Practice"],
    &["Demonstration", "Group Discussion"],
    &["Case Study"],
    &["Role Play"],
];

/// Reads an hour figure such as `14`, `14.5`, `"14 hrs"` or `"2 hours"`.
/// Anything without a number reads as zero.
pub fn parse_hours(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or_default(),
        Value::String(s) => HOURS_REGEX
            .captures(s.trim())
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or_default(),
        _ => 0.0,
    }
}

/// Eight-hour days, rounded, never fewer than one.
pub fn course_days(total_hours: f64) -> i64 {
    if total_hours >= HOURS_PER_DAY {
        ((total_hours / HOURS_PER_DAY).round() as i64).max(1)
    } else {
        1
    }
}

pub fn normalize_method(method: &str) -> String {
    match method.trim() {
        "Classroom" => "Lecture".to_string(),
        "Practical" => "Practice".to_string(),
        "Discussion" => "Group Discussion".to_string(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearningUnit {
    pub number: usize,
    pub title: String,
    pub methods: Vec<String>,
    pub topic_labels: Vec<String>,
}

impl LearningUnit {
    pub fn from_info(number: usize, info: &LearningUnitInfo) -> Self {
        let raw_title = info
            .lu_title
            .clone()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| format!("Learning Unit {}", number));
        let stripped = UNIT_PREFIX_REGEX.replace(raw_title.trim(), "").trim().to_string();
        let title = if stripped.is_empty() { raw_title } else { stripped };

        let topic_labels = info
            .topics
            .iter()
            .enumerate()
            .map(|(i, topic)| {
                let title = topic
                    .topic_title
                    .clone()
                    .filter(|t| !t.trim().is_empty())
                    .unwrap_or_else(|| format!("Topic {}", i + 1));
                if TOPIC_PREFIX_REGEX.is_match(&title) {
                    title
                } else {
                    format!("T{}: {}", i + 1, title)
                }
            })
            .collect();

        Self {
            number,
            title,
            methods: info
                .instructional_methods
                .iter()
                .map(|m| normalize_method(m))
                .collect(),
            topic_labels,
        }
    }

    pub fn label(&self) -> String {
        format!("LU{}: {}", self.number, self.title)
    }

    pub fn methods_text(&self) -> String {
        if self.methods.is_empty() {
            DEFAULT_METHOD.to_string()
        } else {
            self.methods.join(", ")
        }
    }

    pub fn topic_outlines(&self) -> Vec<TopicOutline> {
        let label = self.label();
        let methods = self.methods_text();
        self.topic_labels
            .iter()
            .map(|t| TopicOutline::new(t.clone()).in_unit(label.clone(), methods.clone()))
            .collect()
    }
}

/// Method combinations used across the course, sorted.
pub fn unique_instructional_methods(units: &[LearningUnit]) -> Vec<String> {
    let mut unique = BTreeSet::new();

    for unit in units {
        let methods = &unit.methods;
        let mut pairs: BTreeSet<String> = VALID_METHOD_PAIRS
            .iter()
            .filter(|pair| pair.iter().all(|m| methods.iter().any(|x| x == m)))
            .map(|pair| pair.join(", "))
            .collect();

        if pairs.is_empty() && !methods.is_empty() {
            match methods.len() {
                1 | 2 => {
                    pairs.insert(methods.join(", "));
                }
                n => {
                    pairs.insert(methods[..2].join(", "));
                    pairs.insert(methods[n - 2..].join(", "));
                }
            }
        }
        unique.extend(pairs);
    }

    unique.into_iter().collect()
}

/// Splits the assessment time equally across the listed methods.
pub fn assessment_blocks(
    assessment_hours: f64,
    details: &[AssessmentMethodInfo],
) -> Vec<AssessmentBlock> {
    let total_minutes = (assessment_hours * 60.0).trunc().max(0.0) as u32;
    if total_minutes == 0 {
        return Vec::new();
    }
    if details.is_empty() {
        return vec![AssessmentBlock::new(
            DEFAULT_ASSESSMENT_NAME,
            f64::from(total_minutes),
        )];
    }

    let count = u32::try_from(details.len()).unwrap_or(u32::MAX);
    let per_method = total_minutes / count;
    details
        .iter()
        .map(|d| {
            let name = d
                .assessment_method
                .clone()
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ASSESSMENT_NAME.to_string());
            AssessmentBlock::new(name, f64::from(per_method))
        })
        .collect()
}

/// Download name for the rendered plan, e.g. `LP_TGS-2024001_Workplace Safety_v1.docx`.
pub fn suggested_filename(course_title: &str, tgs_ref: &str) -> String {
    let safe_title: String = course_title
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, ' ' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .take(50)
        .collect();
    let safe_title = safe_title.trim_matches('_');

    let safe_tgs: String = tgs_ref
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let safe_tgs = safe_tgs.trim_matches('_');

    if safe_tgs.is_empty() {
        format!("LP_{}_v1.docx", safe_title)
    } else {
        format!("LP_{}_{}_v1.docx", safe_tgs, safe_title)
    }
}

/// Scheduling parameters recovered from extracted course info.
#[derive(Debug, Clone)]
pub struct CourseOutline {
    pub course_title: String,
    pub tgs_ref_no: String,
    pub num_days: i64,
    pub instructional_hours: f64,
    pub assessment_hours: f64,
    pub units: Vec<LearningUnit>,
    pub assessment_blocks: Vec<AssessmentBlock>,
}

impl CourseOutline {
    pub fn from_info(info: &CourseInfoRequest, default_total_hours: f64) -> Self {
        let total_hours = info
            .total_course_duration_hours
            .as_ref()
            .map(parse_hours)
            .unwrap_or(default_total_hours);
        let training_hours = info
            .total_training_hours
            .as_ref()
            .map(parse_hours)
            .unwrap_or_default();
        let instructional_hours = if training_hours > 0.0 {
            training_hours
        } else {
            total_hours
        };
        let assessment_hours = info
            .total_assessment_hours
            .as_ref()
            .map(parse_hours)
            .unwrap_or_default();

        let units: Vec<LearningUnit> = info
            .learning_units
            .iter()
            .enumerate()
            .map(|(i, lu)| LearningUnit::from_info(i + 1, lu))
            .collect();

        Self {
            course_title: info
                .course_title
                .clone()
                .unwrap_or_else(|| "Course".to_string()),
            tgs_ref_no: info.tgs_ref_no.clone().unwrap_or_default(),
            num_days: course_days(total_hours),
            instructional_hours,
            assessment_hours,
            assessment_blocks: assessment_blocks(
                assessment_hours,
                &info.assessment_methods_details,
            ),
            units,
        }
    }

    pub fn topic_outlines(&self) -> Vec<TopicOutline> {
        self.units.iter().flat_map(|u| u.topic_outlines()).collect()
    }

    pub fn suggested_filename(&self) -> String {
        suggested_filename(&self.course_title, &self.tgs_ref_no)
    }
}
