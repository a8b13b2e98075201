use std::sync::Arc;

use crate::{config::Config, services::LessonPlanService};

#[derive(Clone)]
pub struct AppState {
    pub lesson_plan_service: Arc<LessonPlanService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let lesson_plan_service = Arc::new(LessonPlanService::new(&config));

        Self {
            lesson_plan_service,
            config: Arc::new(config),
        }
    }
}
