use async_graphql::{Enum, SimpleObject};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Enum, Copy)]
pub enum SessionKind {
    Topic,
    TopicContinuation,
    Break,
    Lunch,
    Assessment,
}

impl SessionKind {
    pub fn is_topic(&self) -> bool {
        matches!(self, SessionKind::Topic | SessionKind::TopicContinuation)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct ScheduledSession {
    pub day_index: u32,
    pub start: String, // HH:MMhrs
    pub end: String,
    pub start_minute: u32, // minutes from midnight
    pub end_minute: u32,
    pub duration_minutes: u32,
    pub kind: SessionKind,
    pub label: String,
    pub timing: String,         // "9:00 AM - 11:20 AM"
    pub duration_label: String, // "140 mins"
    pub methods: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_unit: Option<String>,
    /// Index of the source topic for Topic and TopicContinuation sessions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_index: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct DaySchedule {
    pub day_index: u32,
    pub sessions: Vec<ScheduledSession>,
}

impl DaySchedule {
    pub fn total_minutes(&self) -> u32 {
        self.sessions.iter().map(|s| s.duration_minutes).sum()
    }

    pub fn lunch(&self) -> Option<&ScheduledSession> {
        self.sessions.iter().find(|s| s.kind == SessionKind::Lunch)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct LessonPlan {
    pub days: Vec<DaySchedule>,
}

impl LessonPlan {
    pub fn sessions(&self) -> impl Iterator<Item = &ScheduledSession> {
        self.days.iter().flat_map(|d| d.sessions.iter())
    }

    pub fn minutes_of(&self, kind: SessionKind) -> u32 {
        self.sessions()
            .filter(|s| s.kind == kind)
            .map(|s| s.duration_minutes)
            .sum()
    }

    /// Total minutes placed for the topic at `index`, across all fragments.
    pub fn topic_minutes(&self, index: u32) -> u32 {
        self.sessions()
            .filter(|s| s.topic_index == Some(index))
            .map(|s| s.duration_minutes)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(kind: SessionKind, start: u32, end: u32) -> ScheduledSession {
        ScheduledSession {
            day_index: 1,
            start: String::new(),
            end: String::new(),
            start_minute: start,
            end_minute: end,
            duration_minutes: end - start,
            kind,
            label: String::new(),
            timing: String::new(),
            duration_label: String::new(),
            methods: "-".to_string(),
            learning_unit: None,
            topic_index: None,
        }
    }

    #[test]
    fn test_session_kind_serializes_as_variant_name() {
        let json = serde_json::to_string(&SessionKind::TopicContinuation).unwrap();
        assert_eq!(json, "\"TopicContinuation\"");
    }

    #[test]
    fn test_minutes_of_kind() {
        let plan = LessonPlan {
            days: vec![DaySchedule {
                day_index: 1,
                sessions: vec![
                    session(SessionKind::Break, 540, 600),
                    session(SessionKind::Lunch, 600, 645),
                    session(SessionKind::Break, 645, 700),
                ],
            }],
        };
        assert_eq!(plan.minutes_of(SessionKind::Break), 115);
        assert_eq!(plan.days[0].total_minutes(), 160);
        assert_eq!(plan.days[0].lunch().map(|s| s.start_minute), Some(600));
    }
}
