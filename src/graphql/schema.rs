use async_graphql::{
    Context, EmptyMutation, EmptySubscription, ErrorExtensions, Object, Result,
    Schema as GraphQLSchema,
};

use crate::{
    app_state::AppState,
    models::dto::{request::LessonPlanRequest, response::LessonPlanResponse},
};

pub type Schema = GraphQLSchema<QueryRoot, EmptyMutation, EmptySubscription>;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Builds the timetable for a course. Pure computation, nothing is stored.
    async fn lesson_plan(
        &self,
        ctx: &Context<'_>,
        input: LessonPlanRequest,
    ) -> Result<LessonPlanResponse> {
        let state = ctx.data::<AppState>()?;
        state
            .lesson_plan_service
            .create_lesson_plan(input)
            .map_err(|e| e.extend())
    }

    async fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

pub fn create_schema(app_state: AppState) -> Schema {
    GraphQLSchema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(app_state)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn schema() -> Schema {
        create_schema(AppState::new(Config::test_config()))
    }

    #[actix_web::test]
    async fn test_lesson_plan_query() {
        let query = r#"{
            lessonPlan(input: {
                numDays: 2,
                topics: [{title: "T1"}, {title: "T2"}, {title: "T3"}, {title: "T4"}, {title: "T5"}, {title: "T6"}],
                instructionalHours: 14.0,
                assessmentBlocks: [{name: "Final Exam", durationMinutes: 120.0}]
            }) {
                summary { perTopicMinutes breakMinutes }
                plan { days { dayIndex sessions { start end kind label } } }
            }
        }"#;

        let response = schema().execute(query).await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);

        let data = response.data.into_json().unwrap();
        assert_eq!(data["lessonPlan"]["summary"]["breakMinutes"], 30);
        let day_two = &data["lessonPlan"]["plan"]["days"][1]["sessions"];
        assert_eq!(day_two[2]["kind"], "LUNCH");
        assert_eq!(day_two[2]["start"], "12:25hrs");
        assert_eq!(day_two[5]["label"], "Final Exam");
    }

    #[actix_web::test]
    async fn test_overflow_carries_error_code() {
        let query = r#"{
            lessonPlan(input: {
                numDays: 1,
                topics: [{title: "A"}, {title: "B"}],
                instructionalHours: 20.0
            }) { summary { numDays } }
        }"#;

        let response = schema().execute(query).await;
        assert_eq!(response.errors.len(), 1);
        let extensions = response.errors[0].extensions.as_ref().unwrap();
        assert!(extensions.get("code").is_some());
    }

    #[actix_web::test]
    async fn test_version_query() {
        let response = schema().execute("{ version }").await;
        assert!(response.errors.is_empty());
    }
}
