use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::request::{CourseInfoRequest, LessonPlanRequest},
};

#[post("/api/lesson-plans")]
pub async fn create_lesson_plan(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<LessonPlanRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    log::info!(
        "[{}] Lesson plan requested: {} topic(s), {} day(s)",
        get_request_id(&req).unwrap_or_default(),
        request.topics.len(),
        request.num_days
    );

    let response = state.lesson_plan_service.create_lesson_plan(request)?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/api/lesson-plans/from-course-info")]
pub async fn create_lesson_plan_from_course_info(
    req: HttpRequest,
    state: web::Data<AppState>,
    info: web::Json<CourseInfoRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!(
        "[{}] Lesson plan requested from course info",
        get_request_id(&req).unwrap_or_default()
    );

    let response = state
        .lesson_plan_service
        .create_lesson_plan_from_course_info(info.into_inner())?;
    Ok(HttpResponse::Ok().json(response))
}
