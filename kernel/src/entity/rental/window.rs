use error_stack::{Report, ResultExt};
use serde::{Deserialize, Serialize};
use time::{util, Date, Month};
use vodca::{AsRefln, Fromln};

use crate::KernelError;

const MAX_WINDOW_MONTHS: u32 = 120;

/// Trailing window, in calendar months, used to select recent rentals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct RecentWindow(u32);

impl RecentWindow {
    pub fn new(months: impl Into<u32>) -> error_stack::Result<Self, KernelError> {
        let months = months.into();
        if months == 0 || months > MAX_WINDOW_MONTHS {
            return Err(Report::new(KernelError::InvalidInput).attach_printable(format!(
                "Window must be between 1 and {MAX_WINDOW_MONTHS} months, got {months}"
            )));
        }
        Ok(Self(months))
    }

    /// First start date still inside the window ending at `today`.
    ///
    /// The day of month is clamped to the length of the target month, so
    /// a two month window ending on April 30th starts on February 28th
    /// (or 29th in leap years).
    pub fn earliest_start(&self, today: Date) -> error_stack::Result<Date, KernelError> {
        let months = today.year() * 12 + i32::from(u8::from(today.month())) - 1 - self.0 as i32;
        let year = months.div_euclid(12);
        let month = Month::try_from(months.rem_euclid(12) as u8 + 1)
            .change_context(KernelError::Internal)?;
        let day = today.day().min(util::days_in_year_month(year, month));
        Date::from_calendar_date(year, month, day)
            .change_context(KernelError::Internal)
            .attach_printable_lazy(|| format!("Cannot step {} months back from {today}", self.0))
    }
}

impl Default for RecentWindow {
    fn default() -> Self {
        Self(2)
    }
}

#[cfg(test)]
mod test {
    use time::macros::date;

    use crate::entity::RecentWindow;
    use crate::KernelError;

    #[test]
    fn default_window_is_two_months() {
        let window = RecentWindow::default();
        assert_eq!(
            window.earliest_start(date!(2025 - 08 - 15)).unwrap(),
            date!(2025 - 06 - 15)
        );
    }

    #[test]
    fn window_crosses_year_boundary() {
        let window = RecentWindow::new(3u32).unwrap();
        assert_eq!(
            window.earliest_start(date!(2025 - 01 - 31)).unwrap(),
            date!(2024 - 10 - 31)
        );
    }

    #[test]
    fn day_is_clamped_to_month_length() {
        let window = RecentWindow::default();
        assert_eq!(
            window.earliest_start(date!(2024 - 04 - 30)).unwrap(),
            date!(2024 - 02 - 29)
        );
        assert_eq!(
            window.earliest_start(date!(2025 - 04 - 30)).unwrap(),
            date!(2025 - 02 - 28)
        );
    }

    #[test]
    fn out_of_range_window_is_rejected() {
        for months in [0u32, 121] {
            let error = RecentWindow::new(months).unwrap_err();
            assert_eq!(error.current_context(), &KernelError::InvalidInput);
        }
    }
}
