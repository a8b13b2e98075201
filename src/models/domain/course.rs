use serde::{Deserialize, Serialize};

/// A topic as supplied by the caller, before any time is allocated to it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TopicOutline {
    pub title: String,
    #[serde(default)]
    pub learning_unit: Option<String>,
    #[serde(default)]
    pub methods: Option<String>,
}

impl TopicOutline {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn in_unit(mut self, learning_unit: impl Into<String>, methods: impl Into<String>) -> Self {
        self.learning_unit = Some(learning_unit.into());
        self.methods = Some(methods.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Topic {
    pub title: String,
    /// Exact share of the instructional time, identical for every topic.
    pub allocated_minutes: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub methods: Option<String>,
}

impl Topic {
    /// Whole minutes the scheduler places for this topic.
    pub fn scheduled_minutes(&self) -> u32 {
        self.allocated_minutes.round().max(0.0) as u32
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct AssessmentBlock {
    pub name: String,
    pub duration_minutes: f64,
}

impl AssessmentBlock {
    pub fn new(name: impl Into<String>, duration_minutes: f64) -> Self {
        Self {
            name: name.into(),
            duration_minutes,
        }
    }

    pub fn whole_minutes(&self) -> u32 {
        self.duration_minutes.round().max(0.0) as u32
    }
}

/// Validated scheduling input. Only `scheduler::validate` builds one, so the
/// fields are read-only from outside the crate.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CourseSchedulingRequest {
    num_days: u32,
    topics: Vec<Topic>,
    instructional_hours: f64,
    assessment_blocks: Vec<AssessmentBlock>,
}

impl CourseSchedulingRequest {
    pub(crate) fn new(
        num_days: u32,
        topics: Vec<Topic>,
        instructional_hours: f64,
        assessment_blocks: Vec<AssessmentBlock>,
    ) -> Self {
        Self {
            num_days,
            topics,
            instructional_hours,
            assessment_blocks,
        }
    }

    pub fn num_days(&self) -> u32 {
        self.num_days
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn instructional_hours(&self) -> f64 {
        self.instructional_hours
    }

    pub fn assessment_blocks(&self) -> &[AssessmentBlock] {
        &self.assessment_blocks
    }

    pub fn has_assessment(&self) -> bool {
        self.assessment_blocks.iter().any(|b| b.whole_minutes() > 0)
    }

    /// Minutes allocated to each topic, before rounding.
    pub fn per_topic_minutes(&self) -> f64 {
        self.topics
            .first()
            .map(|t| t.allocated_minutes)
            .unwrap_or_default()
    }

    pub fn required_minutes(&self) -> u64 {
        self.topics
            .iter()
            .map(|t| u64::from(t.scheduled_minutes()))
            .sum()
    }
}
