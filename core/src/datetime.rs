// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod calendar;
mod util;

pub use calendar::{MonthCursor, days_in_month, is_last_day_of_month, is_leap_year};
pub use util::{RangePosition, parse_date, parse_time};
pub(crate) use util::{STABLE_FORMAT_DATEONLY, STABLE_FORMAT_TIME};
