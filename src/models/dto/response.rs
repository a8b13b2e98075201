use async_graphql::SimpleObject;
use serde::Serialize;

use crate::models::domain::{CourseSchedulingRequest, LessonPlan, SessionKind};

#[derive(Debug, Clone, PartialEq, Serialize, SimpleObject)]
pub struct LessonPlanSummary {
    pub num_days: u32,
    pub topic_count: u32,
    pub instructional_hours: f64,
    pub per_topic_minutes: f64, // one decimal place
    pub assessment_minutes: u32,
    pub break_minutes: u32,
}

impl LessonPlanSummary {
    pub fn new(request: &CourseSchedulingRequest, plan: &LessonPlan) -> Self {
        LessonPlanSummary {
            num_days: request.num_days(),
            topic_count: u32::try_from(request.topics().len()).unwrap_or(u32::MAX),
            instructional_hours: request.instructional_hours(),
            per_topic_minutes: (request.per_topic_minutes() * 10.0).round() / 10.0,
            assessment_minutes: plan.minutes_of(SessionKind::Assessment),
            break_minutes: plan.minutes_of(SessionKind::Break),
        }
    }
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct LessonPlanResponse {
    pub plan: LessonPlan,
    pub summary: LessonPlanSummary,
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct CourseLessonPlanResponse {
    pub course_title: String,
    pub plan: LessonPlan,
    pub summary: LessonPlanSummary,
    pub instructional_methods: Vec<String>,
    pub suggested_filename: String,
}
