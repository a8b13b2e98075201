use crate::{
    models::domain::{CourseSchedulingRequest, DaySchedule, LessonPlan, ScheduledSession, SessionKind},
    scheduler::{
        barrier::{Placement, Slot},
        clock::{format_hrs, format_timing},
    },
};

pub const BREAK_LABEL: &str = "Break";
pub const LUNCH_LABEL: &str = "Lunch Break";
pub const CONTINUATION_SUFFIX: &str = " (Cont'd)";

const IDLE_METHODS: &str = "-";
const ASSESSMENT_METHODS: &str = "Assessment";
const DEFAULT_TOPIC_METHODS: &str = "Lecture";

/// Turns placement decisions into the day-by-day [`LessonPlan`].
pub(crate) fn emit(request: &CourseSchedulingRequest, placements: &[Placement]) -> LessonPlan {
    let days = (1..=request.num_days())
        .map(|day_index| {
            let sessions: Vec<ScheduledSession> = placements
                .iter()
                .filter(|p| p.day_index == day_index)
                .map(|p| to_session(request, p))
                .collect();

            debug_assert!(
                sessions.windows(2).all(|w| w[0].end_minute == w[1].start_minute),
                "day {} has a gap or overlap",
                day_index
            );

            DaySchedule {
                day_index,
                sessions,
            }
        })
        .collect();

    LessonPlan { days }
}

fn to_session(request: &CourseSchedulingRequest, placement: &Placement) -> ScheduledSession {
    let (kind, label, methods, learning_unit, topic_index) = match placement.slot {
        Slot::Topic { index, continued } => {
            let topic = &request.topics()[index];
            let (kind, label) = if continued {
                (
                    SessionKind::TopicContinuation,
                    format!("{}{}", topic.title, CONTINUATION_SUFFIX),
                )
            } else {
                (SessionKind::Topic, topic.title.clone())
            };
            let methods = topic
                .methods
                .clone()
                .unwrap_or_else(|| DEFAULT_TOPIC_METHODS.to_string());
            (
                kind,
                label,
                methods,
                topic.learning_unit.clone(),
                u32::try_from(index).ok(),
            )
        }
        Slot::Break => (
            SessionKind::Break,
            BREAK_LABEL.to_string(),
            IDLE_METHODS.to_string(),
            None,
            None,
        ),
        Slot::Lunch => (
            SessionKind::Lunch,
            LUNCH_LABEL.to_string(),
            IDLE_METHODS.to_string(),
            None,
            None,
        ),
        Slot::Assessment { block } => (
            SessionKind::Assessment,
            request.assessment_blocks()[block].name.clone(),
            ASSESSMENT_METHODS.to_string(),
            None,
            None,
        ),
    };

    let duration_minutes = placement.end - placement.start;
    ScheduledSession {
        day_index: placement.day_index,
        start: format_hrs(placement.start),
        end: format_hrs(placement.end),
        start_minute: placement.start,
        end_minute: placement.end,
        duration_minutes,
        kind,
        label,
        timing: format_timing(placement.start, placement.end),
        duration_label: format!("{} mins", duration_minutes),
        methods,
        learning_unit,
        topic_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::domain::{AssessmentBlock, TopicOutline},
        scheduler::validate,
    };

    fn request() -> CourseSchedulingRequest {
        let topics = vec![
            TopicOutline::new("T1: Risk registers").in_unit("LU1: Risk", "Lecture, Group Discussion"),
            TopicOutline::new("T2: Controls"),
        ];
        validate(1, topics, 4.0, vec![AssessmentBlock::new("Written Exam", 60.0)]).unwrap()
    }

    fn placement(start: u32, end: u32, slot: Slot) -> Placement {
        Placement {
            day_index: 1,
            start,
            end,
            slot,
        }
    }

    #[test]
    fn test_topic_session_fields() {
        let plan = emit(
            &request(),
            &[placement(540, 660, Slot::Topic { index: 0, continued: false })],
        );
        let session = &plan.days[0].sessions[0];
        assert_eq!(session.kind, SessionKind::Topic);
        assert_eq!(session.label, "T1: Risk registers");
        assert_eq!(session.start, "09:00hrs");
        assert_eq!(session.end, "11:00hrs");
        assert_eq!(session.timing, "9:00 AM - 11:00 AM");
        assert_eq!(session.duration_minutes, 120);
        assert_eq!(session.duration_label, "120 mins");
        assert_eq!(session.methods, "Lecture, Group Discussion");
        assert_eq!(session.learning_unit.as_deref(), Some("LU1: Risk"));
        assert_eq!(session.topic_index, Some(0));
    }

    #[test]
    fn test_continuation_is_labelled() {
        let plan = emit(
            &request(),
            &[placement(795, 825, Slot::Topic { index: 1, continued: true })],
        );
        let session = &plan.days[0].sessions[0];
        assert_eq!(session.kind, SessionKind::TopicContinuation);
        assert_eq!(session.label, "T2: Controls (Cont'd)");
        assert_eq!(session.methods, DEFAULT_TOPIC_METHODS);
    }

    #[test]
    fn test_fixed_sessions_use_fixed_labels() {
        let plan = emit(
            &request(),
            &[
                placement(930, 960, Slot::Break),
                placement(960, 1020, Slot::Assessment { block: 0 }),
            ],
        );
        let sessions = &plan.days[0].sessions;
        assert_eq!(sessions[0].label, BREAK_LABEL);
        assert_eq!(sessions[0].methods, "-");
        assert_eq!(sessions[1].kind, SessionKind::Assessment);
        assert_eq!(sessions[1].label, "Written Exam");
        assert_eq!(sessions[1].methods, "Assessment");
        assert_eq!(sessions[1].topic_index, None);
    }

    #[test]
    fn test_days_are_emitted_even_without_placements() {
        let plan = emit(&request(), &[]);
        assert_eq!(plan.days.len(), 1);
        assert!(plan.days[0].sessions.is_empty());
    }
}
