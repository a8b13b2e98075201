#[cfg(test)]
pub mod fixtures {
    use crate::models::dto::request::{
        AssessmentBlockInput, CourseInfoRequest, LessonPlanRequest, TopicInput,
    };

    /// Six topics over two days with a two hour final exam.
    pub fn two_day_request() -> LessonPlanRequest {
        LessonPlanRequest {
            num_days: 2,
            topics: (1..=6)
                .map(|i| TopicInput {
                    title: format!("T{}", i),
                    learning_unit: None,
                    methods: None,
                })
                .collect(),
            instructional_hours: 14.0,
            assessment_blocks: vec![AssessmentBlockInput {
                name: "Final Exam".to_string(),
                duration_minutes: 120.0,
            }],
        }
    }

    /// Extracted course info with two learning units of three topics each.
    pub fn course_info() -> CourseInfoRequest {
        serde_json::from_value(course_info_json()).expect("course info fixture is valid")
    }

    pub fn course_info_json() -> serde_json::Value {
        serde_json::json!({
            "Course_Title": "Workplace Safety and Health",
            "TGS_Ref_No": "TGS-2024001",
            "Total_Course_Duration_Hours": "16 hrs",
            "Total_Training_Hours": 14,
            "Total_Assessment_Hours": "2 hrs",
            "Learning_Units": [
                {
                    "LU_Title": "LU1: Hazards",
                    "Topics": [
                        {"Topic_Title": "Hazard identification"},
                        {"Topic_Title": "Risk assessment"},
                        {"Topic_Title": "Incident reporting"}
                    ],
                    "Instructional_Methods": ["Classroom", "Discussion"]
                },
                {
                    "LU_Title": "LU2: Controls",
                    "Topics": [
                        {"Topic_Title": "Engineering controls"},
                        {"Topic_Title": "Administrative controls"},
                        {"Topic_Title": "Personal protective equipment"}
                    ],
                    "Instructional_Methods": ["Demonstration", "Practical"]
                }
            ],
            "Assessment_Methods_Details": [
                {"Assessment_Method": "Written Exam"},
                {"Assessment_Method": "Practical Exam"}
            ]
        })
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_two_day_request() {
        let request = two_day_request();
        assert_eq!(request.num_days, 2);
        assert_eq!(request.topics.len(), 6);
        assert_eq!(request.topics[0].title, "T1");
    }

    #[test]
    fn test_fixtures_course_info() {
        let info = course_info();
        assert_eq!(info.learning_units.len(), 2);
        assert_eq!(info.assessment_methods_details.len(), 2);
    }
}
