use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::{
        domain::{AssessmentBlock, CourseSchedulingRequest, LessonPlan, TopicOutline},
        dto::{
            request::{CourseInfoRequest, LessonPlanRequest},
            response::{CourseLessonPlanResponse, LessonPlanResponse, LessonPlanSummary},
        },
    },
    scheduler,
    services::course_context::{unique_instructional_methods, CourseOutline},
};
use validator::Validate;

pub struct LessonPlanService {
    max_topics: usize,
    max_days: u32,
    default_total_course_hours: f64,
}

impl LessonPlanService {
    pub fn new(config: &Config) -> Self {
        Self {
            max_topics: config.max_topics,
            max_days: config.max_days,
            default_total_course_hours: config.default_total_course_hours,
        }
    }

    pub fn create_lesson_plan(&self, request: LessonPlanRequest) -> AppResult<LessonPlanResponse> {
        request.validate()?;

        let course = self.prepare(
            request.num_days,
            request.topics.into_iter().map(TopicOutline::from).collect(),
            request.instructional_hours,
            request
                .assessment_blocks
                .into_iter()
                .map(AssessmentBlock::from)
                .collect(),
        )?;
        let plan = self.schedule(&course)?;

        Ok(LessonPlanResponse {
            summary: LessonPlanSummary::new(&course, &plan),
            plan,
        })
    }

    pub fn create_lesson_plan_from_course_info(
        &self,
        info: CourseInfoRequest,
    ) -> AppResult<CourseLessonPlanResponse> {
        info.validate()?;

        let outline = CourseOutline::from_info(&info, self.default_total_course_hours);
        log::info!(
            "Building lesson plan for '{}': {} learning unit(s), {} day(s)",
            outline.course_title,
            outline.units.len(),
            outline.num_days
        );

        let course = self.prepare(
            outline.num_days,
            outline.topic_outlines(),
            outline.instructional_hours,
            outline.assessment_blocks.clone(),
        )?;
        let plan = self.schedule(&course)?;

        Ok(CourseLessonPlanResponse {
            instructional_methods: unique_instructional_methods(&outline.units),
            suggested_filename: outline.suggested_filename(),
            summary: LessonPlanSummary::new(&course, &plan),
            course_title: outline.course_title,
            plan,
        })
    }

    fn prepare(
        &self,
        num_days: i64,
        topics: Vec<TopicOutline>,
        instructional_hours: f64,
        assessment_blocks: Vec<AssessmentBlock>,
    ) -> AppResult<CourseSchedulingRequest> {
        if num_days > i64::from(self.max_days) {
            return Err(AppError::ValidationError(format!(
                "num_days {} exceeds the limit of {}",
                num_days, self.max_days
            )));
        }
        if topics.len() > self.max_topics {
            return Err(AppError::ValidationError(format!(
                "{} topics exceed the limit of {}",
                topics.len(),
                self.max_topics
            )));
        }

        Ok(scheduler::validate(
            num_days,
            topics,
            instructional_hours,
            assessment_blocks,
        )?)
    }

    fn schedule(&self, course: &CourseSchedulingRequest) -> AppResult<LessonPlan> {
        match scheduler::schedule(course) {
            Ok(plan) => {
                log::info!(
                    "Scheduled {} topic(s) over {} day(s), {:.1} minutes each",
                    course.topics().len(),
                    course.num_days(),
                    course.per_topic_minutes()
                );
                Ok(plan)
            }
            Err(err) => {
                log::warn!("Lesson plan rejected: {}", err);
                Err(err.into())
            }
        }
    }
}
