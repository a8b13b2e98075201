//! Greedy forward packing of topics into fixed daily windows.
//!
//! Each day is cut into regions by its barriers (lunch, the last-day
//! assessment, day end). Topics are laid down in input order until the next
//! barrier; a topic that does not fit is split and carried over. A gap shorter
//! than [`MIN_SESSION`] is never given to a topic: before lunch the lunch
//! break starts early, before any other barrier the gap becomes a break.

use crate::{
    errors::ScheduleError,
    models::domain::CourseSchedulingRequest,
    scheduler::clock::{
        format_hrs, Minute, ASSESSMENT_START, ASSESSMENT_WINDOW, DAY_END, DAY_START,
        LUNCH_DURATION, LUNCH_START, MIN_SESSION,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarrierKind {
    Lunch,
    Assessment,
    DayEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Barrier {
    pub kind: BarrierKind,
    pub at: Minute,
}

/// The fixed shape of one teaching day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayWindow {
    pub day_index: u32,
    pub start: Minute,
    pub end: Minute,
    pub is_last_day: bool,
    pub barriers: Vec<Barrier>,
}

impl DayWindow {
    pub fn new(day_index: u32, is_last_day: bool, has_assessment: bool) -> Self {
        let mut barriers = vec![Barrier {
            kind: BarrierKind::Lunch,
            at: LUNCH_START,
        }];
        if is_last_day && has_assessment {
            barriers.push(Barrier {
                kind: BarrierKind::Assessment,
                at: ASSESSMENT_START,
            });
        }
        barriers.push(Barrier {
            kind: BarrierKind::DayEnd,
            at: DAY_END,
        });

        Self {
            day_index,
            start: DAY_START,
            end: DAY_END,
            is_last_day,
            barriers,
        }
    }

    pub fn has_assessment(&self) -> bool {
        self.barriers.iter().any(|b| b.kind == BarrierKind::Assessment)
    }

    /// Minutes left for topics once lunch and the assessment window are taken.
    pub fn open_minutes(&self) -> Minute {
        let fixed = LUNCH_DURATION
            + if self.has_assessment() {
                ASSESSMENT_WINDOW
            } else {
                0
            };
        (self.end - self.start).saturating_sub(fixed)
    }
}

pub fn day_windows(request: &CourseSchedulingRequest) -> Vec<DayWindow> {
    let num_days = request.num_days();
    (1..=num_days)
        .map(|day| DayWindow::new(day, day == num_days, request.has_assessment()))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Topic { index: usize, continued: bool },
    Break,
    Lunch,
    Assessment { block: usize },
}

/// One placement decision: `slot` occupies `[start, end)` on `day_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub day_index: u32,
    pub start: Minute,
    pub end: Minute,
    pub slot: Slot,
}

#[derive(Debug, Clone, Copy)]
struct TopicCursor {
    index: usize,
    remaining: Minute,
    continued: bool,
}

struct Packer<'a> {
    request: &'a CourseSchedulingRequest,
    placements: Vec<Placement>,
    next: Option<TopicCursor>,
}

impl<'a> Packer<'a> {
    fn new(request: &'a CourseSchedulingRequest) -> Self {
        let next = request.topics().first().map(|topic| TopicCursor {
            index: 0,
            remaining: topic.scheduled_minutes(),
            continued: false,
        });
        Self {
            request,
            placements: Vec::new(),
            next,
        }
    }

    fn push(&mut self, day_index: u32, start: Minute, end: Minute, slot: Slot) {
        self.placements.push(Placement {
            day_index,
            start,
            end,
            slot,
        });
    }

    fn pack_day(&mut self, window: &DayWindow) {
        let day = window.day_index;
        let mut cursor = window.start;
        let mut accepts_topics = true;
        log::debug!(
            "Packing day {}{}",
            day,
            if window.is_last_day { " (last day)" } else { "" }
        );

        for barrier in &window.barriers {
            cursor = self.fill_region(day, cursor, barrier, accepts_topics);
            cursor = match barrier.kind {
                BarrierKind::Lunch => {
                    if cursor < barrier.at {
                        log::debug!("Day {}: lunch pulled forward to {}", day, format_hrs(cursor));
                    }
                    self.push(day, cursor, cursor + LUNCH_DURATION, Slot::Lunch);
                    cursor + LUNCH_DURATION
                }
                BarrierKind::Assessment => {
                    accepts_topics = false;
                    self.place_assessment(day, cursor, window.end)
                }
                BarrierKind::DayEnd => cursor,
            };
        }
    }

    /// Fills `[cursor, barrier.at)` and returns where the barrier event starts.
    fn fill_region(
        &mut self,
        day: u32,
        mut cursor: Minute,
        barrier: &Barrier,
        accepts_topics: bool,
    ) -> Minute {
        while cursor < barrier.at {
            let remaining = barrier.at - cursor;

            if remaining < MIN_SESSION {
                if barrier.kind == BarrierKind::Lunch {
                    return cursor;
                }
                self.push(day, cursor, barrier.at, Slot::Break);
                return barrier.at;
            }

            let Some(topic) = self.next.filter(|_| accepts_topics) else {
                self.push(day, cursor, barrier.at, Slot::Break);
                return barrier.at;
            };

            let length = fragment_length(topic.remaining, remaining);
            if length == 0 {
                // No split leaves both halves at the minimum length.
                self.push(day, cursor, barrier.at, Slot::Break);
                return barrier.at;
            }

            if length < topic.remaining {
                log::debug!(
                    "Day {}: splitting topic {} at {} ({} of {} minutes)",
                    day,
                    topic.index + 1,
                    format_hrs(cursor + length),
                    length,
                    topic.remaining
                );
            }
            self.push(
                day,
                cursor,
                cursor + length,
                Slot::Topic {
                    index: topic.index,
                    continued: topic.continued,
                },
            );
            self.advance_topic(length);
            cursor += length;
        }
        cursor
    }

    fn advance_topic(&mut self, placed: Minute) {
        let Some(mut cursor) = self.next else {
            return;
        };
        cursor.remaining -= placed;
        self.next = if cursor.remaining > 0 {
            cursor.continued = true;
            Some(cursor)
        } else {
            let index = cursor.index + 1;
            self.request.topics().get(index).map(|topic| TopicCursor {
                index,
                remaining: topic.scheduled_minutes(),
                continued: false,
            })
        };
    }

    /// Lays the assessment blocks out in order from `start`, truncating at `end`.
    fn place_assessment(&mut self, day: u32, start: Minute, end: Minute) -> Minute {
        let mut cursor = start;
        for (block, assessment) in self.request.assessment_blocks().iter().enumerate() {
            let wanted = assessment.whole_minutes();
            let minutes = wanted.min(end.saturating_sub(cursor));
            if minutes < wanted {
                log::debug!(
                    "Day {}: assessment '{}' truncated from {} to {} minutes",
                    day,
                    assessment.name,
                    wanted,
                    minutes
                );
            }
            if minutes == 0 {
                continue;
            }
            self.push(day, cursor, cursor + minutes, Slot::Assessment { block });
            cursor += minutes;
        }
        cursor
    }

    fn unplaced_minutes(&self) -> u64 {
        match self.next {
            Some(cursor) => {
                let later: u64 = self.request.topics()[cursor.index + 1..]
                    .iter()
                    .map(|t| u64::from(t.scheduled_minutes()))
                    .sum();
                u64::from(cursor.remaining) + later
            }
            None => 0,
        }
    }
}

/// How much of a topic with `topic_remaining` minutes goes into a window of
/// `window` minutes. Zero means nothing can be placed.
fn fragment_length(topic_remaining: Minute, window: Minute) -> Minute {
    if topic_remaining <= window {
        return topic_remaining;
    }
    let split = window.min(topic_remaining.saturating_sub(MIN_SESSION));
    if split >= MIN_SESSION {
        split
    } else {
        0
    }
}

/// Places every topic, break, lunch and assessment block for all days.
pub fn schedule(request: &CourseSchedulingRequest) -> Result<Vec<Placement>, ScheduleError> {
    let windows = day_windows(request);

    let capacity: u64 = windows
        .iter()
        .map(|w| u64::from(w.open_minutes()))
        .sum();
    let required = request.required_minutes();
    if required > capacity {
        return Err(ScheduleError::ScheduleOverflow {
            shortfall_minutes: required - capacity,
        });
    }

    let mut packer = Packer::new(request);
    for window in &windows {
        packer.pack_day(window);
    }

    match packer.unplaced_minutes() {
        0 => Ok(packer.placements),
        shortfall_minutes => Err(ScheduleError::ScheduleOverflow { shortfall_minutes }),
    }
}
