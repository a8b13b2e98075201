use async_graphql::InputObject;
use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::models::domain::{AssessmentBlock, TopicOutline};

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct TopicInput {
    #[validate(length(min = 1, max = 300))]
    pub title: String,

    #[validate(length(max = 300))]
    pub learning_unit: Option<String>,

    #[validate(length(max = 200))]
    pub methods: Option<String>,
}

impl From<TopicInput> for TopicOutline {
    fn from(input: TopicInput) -> Self {
        TopicOutline {
            title: input.title,
            learning_unit: input.learning_unit,
            methods: input.methods,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct AssessmentBlockInput {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(range(min = 0.0))]
    pub duration_minutes: f64,
}

impl From<AssessmentBlockInput> for AssessmentBlock {
    fn from(input: AssessmentBlockInput) -> Self {
        AssessmentBlock::new(input.name, input.duration_minutes)
    }
}

/// Raw scheduling parameters. Day, topic and hour constraints are checked by
/// the scheduler so the error names the violated rule.
#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct LessonPlanRequest {
    pub num_days: i64,

    #[validate(nested)]
    pub topics: Vec<TopicInput>,

    pub instructional_hours: f64,

    #[serde(default)]
    #[graphql(default)]
    #[validate(nested)]
    pub assessment_blocks: Vec<AssessmentBlockInput>,
}

// Course info as produced by the extraction step. Field names follow the
// extracted JSON; hour fields may be numbers or strings such as "14 hrs".

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CourseInfoRequest {
    #[serde(rename = "Course_Title", default)]
    #[validate(length(max = 300))]
    pub course_title: Option<String>,

    #[serde(rename = "TGS_Ref_No", default)]
    #[validate(length(max = 100))]
    pub tgs_ref_no: Option<String>,

    #[serde(rename = "Total_Course_Duration_Hours", default)]
    pub total_course_duration_hours: Option<Value>,

    #[serde(rename = "Total_Training_Hours", default)]
    pub total_training_hours: Option<Value>,

    #[serde(rename = "Total_Assessment_Hours", default)]
    pub total_assessment_hours: Option<Value>,

    #[serde(rename = "Learning_Units", default)]
    pub learning_units: Vec<LearningUnitInfo>,

    #[serde(rename = "Assessment_Methods_Details", default)]
    pub assessment_methods_details: Vec<AssessmentMethodInfo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LearningUnitInfo {
    #[serde(rename = "LU_Title", default)]
    pub lu_title: Option<String>,

    #[serde(rename = "Topics", default)]
    pub topics: Vec<TopicInfo>,

    #[serde(rename = "Instructional_Methods", default)]
    pub instructional_methods: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopicInfo {
    #[serde(rename = "Topic_Title", default)]
    pub topic_title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssessmentMethodInfo {
    #[serde(rename = "Assessment_Method", default)]
    pub assessment_method: Option<String>,
}
