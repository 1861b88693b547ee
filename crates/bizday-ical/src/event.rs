//! Event construction.

use bizday_time::{Date, TimeWindow};
use icalendar::{Component, Event, EventLike};

/// Create one event on `date` spanning `window`.
///
/// An empty `description` leaves the `DESCRIPTION` property out.
pub fn create_event(date: Date, window: TimeWindow, summary: &str, description: &str) -> Event {
    let (starts, ends) = window.on(date);
    let mut event = Event::new();
    event.summary(summary).starts(starts).ends(ends);
    if !description.is_empty() {
        event.description(description);
    }
    event.done()
}

/// Create one event per date, all sharing the same window, summary and
/// description. Order follows `dates`.
pub fn create_events_for_dates(
    dates: &[Date],
    window: TimeWindow,
    summary: &str,
    description: &str,
) -> Vec<Event> {
    dates
        .iter()
        .map(|&date| create_event(date, window, summary, description))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bizday_time::TimeOfDay;

    fn window(h0: u8, m0: u8, h1: u8, m1: u8) -> TimeWindow {
        TimeWindow::new(TimeOfDay::new(h0, m0).unwrap(), TimeOfDay::new(h1, m1).unwrap()).unwrap()
    }

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn event_carries_summary_and_floating_times() {
        let event = create_event(date(2024, 1, 10), window(10, 0, 11, 30), "Standup", "Weekly");
        assert_eq!(event.get_summary(), Some("Standup"));
        assert_eq!(event.get_description(), Some("Weekly"));
        let text = event.to_string();
        assert!(text.contains("DTSTART:20240110T100000\r\n"));
        assert!(text.contains("DTEND:20240110T113000\r\n"));
    }

    #[test]
    fn empty_description_is_omitted() {
        let event = create_event(date(2024, 1, 10), window(9, 0, 9, 15), "Standup", "");
        assert_eq!(event.get_description(), None);
    }

    #[test]
    fn one_event_per_date() {
        let dates = [date(2024, 1, 10), date(2024, 2, 9), date(2024, 3, 11)];
        let events = create_events_for_dates(&dates, window(10, 0, 11, 0), "Review", "");
        assert_eq!(events.len(), 3);
        assert!(events.iter().all(|e| e.get_summary() == Some("Review")));
        assert!(create_events_for_dates(&[], window(10, 0, 11, 0), "Review", "").is_empty());
    }
}
