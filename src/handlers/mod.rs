pub mod graphql_handler;
pub mod health_handler;
pub mod lesson_plan_handler;

use actix_web::web;

pub use graphql_handler::{graphiql, graphql};
pub use health_handler::health_check;
pub use lesson_plan_handler::{create_lesson_plan, create_lesson_plan_from_course_info};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(create_lesson_plan)
        .service(create_lesson_plan_from_course_info)
        .service(graphql)
        .service(graphiql);
}
