use crate::{
    errors::ScheduleError,
    models::domain::{AssessmentBlock, CourseSchedulingRequest, Topic, TopicOutline},
    scheduler::clock::{Minute, MIN_SESSION},
};

/// Longest course the scheduler will lay out, one day per calendar day of a year.
pub const MAX_COURSE_DAYS: u32 = 366;

/// Checks raw course parameters and builds a [`CourseSchedulingRequest`]
/// in which every topic carries the same share of the instructional time.
pub fn validate(
    num_days: i64,
    topics: Vec<TopicOutline>,
    instructional_hours: f64,
    assessment_blocks: Vec<AssessmentBlock>,
) -> Result<CourseSchedulingRequest, ScheduleError> {
    if num_days < 1 {
        return Err(ScheduleError::invalid(format!(
            "num_days must be at least 1, got {}",
            num_days
        )));
    }
    let num_days = u32::try_from(num_days)
        .ok()
        .filter(|days| *days <= MAX_COURSE_DAYS)
        .ok_or_else(|| {
            ScheduleError::invalid(format!(
                "num_days must be at most {}, got {}",
                MAX_COURSE_DAYS, num_days
            ))
        })?;

    if topics.is_empty() {
        return Err(ScheduleError::invalid("at least one topic is required"));
    }
    if let Some(position) = topics.iter().position(|t| t.title.trim().is_empty()) {
        return Err(ScheduleError::invalid(format!(
            "topic {} has an empty title",
            position + 1
        )));
    }

    if !instructional_hours.is_finite() || instructional_hours <= 0.0 {
        return Err(ScheduleError::invalid(format!(
            "instructional_hours must be greater than 0, got {}",
            instructional_hours
        )));
    }

    if let Some(block) = assessment_blocks
        .iter()
        .find(|b| !b.duration_minutes.is_finite() || b.duration_minutes < 0.0)
    {
        return Err(ScheduleError::invalid(format!(
            "assessment block '{}' has an invalid duration {}",
            block.name, block.duration_minutes
        )));
    }

    let allocated_minutes = instructional_hours * 60.0 / topics.len() as f64;
    if allocated_minutes.round() < f64::from(MIN_SESSION) {
        return Err(ScheduleError::invalid(format!(
            "each topic would get {:.1} minutes, below the {} minute minimum session",
            allocated_minutes, MIN_SESSION
        )));
    }
    if allocated_minutes.round() > f64::from(Minute::MAX) {
        return Err(ScheduleError::invalid(format!(
            "instructional_hours {} is too large to schedule",
            instructional_hours
        )));
    }

    let topics = topics
        .into_iter()
        .map(|outline| Topic {
            title: outline.title.trim().to_string(),
            allocated_minutes,
            learning_unit: outline.learning_unit,
            methods: outline.methods,
        })
        .collect();

    Ok(CourseSchedulingRequest::new(
        num_days,
        topics,
        instructional_hours,
        assessment_blocks,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outlines(count: usize) -> Vec<TopicOutline> {
        (1..=count)
            .map(|i| TopicOutline::new(format!("Topic {}", i)))
            .collect()
    }

    #[test]
    fn test_equal_allocation() {
        let request = validate(2, outlines(6), 14.0, vec![]).unwrap();
        assert_eq!(request.num_days(), 2);
        assert!(request
            .topics()
            .iter()
            .all(|t| (t.allocated_minutes - 140.0).abs() < f64::EPSILON));
        assert_eq!(request.required_minutes(), 840);
    }

    #[test]
    fn test_zero_days_is_invalid() {
        let err = validate(0, outlines(3), 6.0, vec![]).unwrap_err();
        match err {
            ScheduleError::InvalidSchedule { reason } => assert!(reason.contains("num_days")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_negative_days_is_invalid() {
        assert!(matches!(
            validate(-2, outlines(3), 6.0, vec![]),
            Err(ScheduleError::InvalidSchedule { .. })
        ));
    }

    #[test]
    fn test_days_beyond_a_year_are_invalid() {
        assert!(validate(i64::from(MAX_COURSE_DAYS), outlines(3), 6.0, vec![]).is_ok());
        for days in [i64::from(MAX_COURSE_DAYS) + 1, 4_000_000_000, i64::MAX] {
            let err = validate(days, outlines(3), 6.0, vec![]).unwrap_err();
            assert_eq!(
                err,
                ScheduleError::invalid(format!("num_days must be at most 366, got {}", days))
            );
        }
    }

    #[test]
    fn test_allocation_too_large_for_minutes_is_invalid() {
        // 6e10 minutes for a single topic
        assert!(matches!(
            validate(1, outlines(1), 1.0e9, vec![]),
            Err(ScheduleError::InvalidSchedule { .. })
        ));
        assert!(validate(1, outlines(2), 1.0e8, vec![]).is_ok());
    }

    #[test]
    fn test_empty_topics_is_invalid() {
        assert!(matches!(
            validate(1, vec![], 6.0, vec![]),
            Err(ScheduleError::InvalidSchedule { .. })
        ));
    }

    #[test]
    fn test_non_positive_hours_is_invalid() {
        for hours in [0.0, -1.5, f64::NAN] {
            assert!(matches!(
                validate(1, outlines(2), hours, vec![]),
                Err(ScheduleError::InvalidSchedule { .. })
            ));
        }
    }

    #[test]
    fn test_blank_title_is_invalid() {
        let topics = vec![TopicOutline::new("Intro"), TopicOutline::new("   ")];
        let err = validate(1, topics, 4.0, vec![]).unwrap_err();
        assert_eq!(err, ScheduleError::invalid("topic 2 has an empty title"));
    }

    #[test]
    fn test_allocation_below_minimum_session_is_invalid() {
        // 120 minutes over 10 topics leaves 12 minutes each
        assert!(matches!(
            validate(1, outlines(10), 2.0, vec![]),
            Err(ScheduleError::InvalidSchedule { .. })
        ));
    }

    #[test]
    fn test_negative_assessment_duration_is_invalid() {
        let blocks = vec![AssessmentBlock::new("Written", -10.0)];
        assert!(matches!(
            validate(1, outlines(2), 4.0, blocks),
            Err(ScheduleError::InvalidSchedule { .. })
        ));
    }

    #[test]
    fn test_unit_and_methods_are_kept() {
        let topics = vec![TopicOutline::new(" T1: Basics ").in_unit("LU1: Foundations", "Lecture")];
        let request = validate(1, topics, 2.0, vec![]).unwrap();
        let topic = &request.topics()[0];
        assert_eq!(topic.title, "T1: Basics");
        assert_eq!(topic.learning_unit.as_deref(), Some("LU1: Foundations"));
        assert_eq!(topic.methods.as_deref(), Some("Lecture"));
    }
}
