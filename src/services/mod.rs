pub mod course_context;
pub mod lesson_plan_service;

pub use lesson_plan_service::LessonPlanService;
