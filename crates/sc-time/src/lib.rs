//! # sc-time
//!
//! Time grids, schedules, tenors, and business-day calendars for
//! stochastic-curves.
//!
//! Curves and products measure time as a year fraction from a reference
//! date.  Calendar dates only appear when a forward curve derives its payment
//! offset from a tenor code such as `"6M"`; the [`Calendar`] and
//! [`BusinessDayConvention`] types cover that case.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Business-day adjustment conventions.
pub mod business_day_convention;

/// Calendars and date adjustment.
pub mod calendar;

/// Accrual schedules.
pub mod schedule;

/// Tenor codes (`3M`, `1Y`, …).
pub mod tenor;

/// Strictly increasing time grids.
pub mod time_discretization;

pub use business_day_convention::BusinessDayConvention;
pub use calendar::{year_fraction_act365, Calendar, NullCalendar, WeekendsOnly};
pub use schedule::{RegularSchedule, Schedule, ScheduleFromPeriods, SchedulePeriod};
pub use tenor::{Tenor, TimeUnit};
pub use time_discretization::TimeDiscretization;
