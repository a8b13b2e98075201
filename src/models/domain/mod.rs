pub mod course;
pub mod lesson_plan;

pub use course::{AssessmentBlock, CourseSchedulingRequest, Topic, TopicOutline};
pub use lesson_plan::{DaySchedule, LessonPlan, ScheduledSession, SessionKind};
