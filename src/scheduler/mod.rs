//! Lesson plan timetable scheduling.
//!
//! `validate` normalizes raw course parameters, `barrier::schedule` packs the
//! topics into daily windows, and `emitter::emit` turns the placements into a
//! [`LessonPlan`]. Everything here is pure: identical input always yields an
//! identical plan.

pub mod barrier;
pub mod clock;
pub mod emitter;
pub mod validator;

pub use barrier::{day_windows, DayWindow, Placement, Slot};
pub use validator::validate;

use crate::{
    errors::ScheduleError,
    models::domain::{CourseSchedulingRequest, LessonPlan},
};

/// Schedules a validated request. Either every topic is placed and every day
/// is filled from 09:00 to 18:00, or an error is returned.
pub fn schedule(request: &CourseSchedulingRequest) -> Result<LessonPlan, ScheduleError> {
    let placements = barrier::schedule(request)?;
    Ok(emitter::emit(request, &placements))
}
