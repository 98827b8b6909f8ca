//! Browser capabilities used by the shell outside the stores.

#[cfg(target_arch = "wasm32")]
use leptos::logging;

/// Opens `url` in a new browser tab.
pub fn open_external_url(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.open_with_url_and_target(url, "_blank") {
            logging::warn!("open external url failed for `{url}`: {err:?}");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = url;
}

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Local wall-clock reading for the menu bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSnapshot {
    /// 0 = Sunday.
    pub weekday: u32,
    /// 0 = January.
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl ClockSnapshot {
    pub fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                weekday: date.get_day(),
                month: date.get_month(),
                day: date.get_date(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                weekday: 4,
                month: 0,
                day: 1,
                hour: 0,
                minute: 0,
            }
        }
    }

    /// Formats as `Mon Sep 2 9:05 AM`.
    pub fn menu_label(&self) -> String {
        let weekday = WEEKDAYS[(self.weekday % 7) as usize];
        let month = MONTHS[(self.month % 12) as usize];
        let meridiem = if self.hour < 12 { "AM" } else { "PM" };
        let hour = match self.hour % 12 {
            0 => 12,
            hour => hour,
        };
        format!(
            "{weekday} {month} {} {hour}:{:02} {meridiem}",
            self.day, self.minute
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn clock(weekday: u32, month: u32, day: u32, hour: u32, minute: u32) -> ClockSnapshot {
        ClockSnapshot {
            weekday,
            month,
            day,
            hour,
            minute,
        }
    }

    #[test]
    fn menu_label_uses_twelve_hour_clock() {
        assert_eq!(clock(1, 8, 2, 9, 5).menu_label(), "Mon Sep 2 9:05 AM");
        assert_eq!(clock(5, 11, 31, 23, 59).menu_label(), "Fri Dec 31 11:59 PM");
    }

    #[test]
    fn midnight_and_noon_read_as_twelve() {
        assert_eq!(clock(0, 0, 1, 0, 0).menu_label(), "Sun Jan 1 12:00 AM");
        assert_eq!(clock(3, 6, 15, 12, 30).menu_label(), "Wed Jul 15 12:30 PM");
    }
}
