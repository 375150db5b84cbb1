use crate::model::attendee::AttendeeRecord;

/// Check-in progress over the whole roster, ignoring any search filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub checked_in: usize,
    pub total: usize,
}

impl Progress {
    pub fn of(records: &[AttendeeRecord]) -> Self {
        Self {
            checked_in: records.iter().filter(|r| r.checked_in).count(),
            total: records.len(),
        }
    }

    /// Share of attendees checked in, 0.0 to 100.0. An empty roster is 0.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.checked_in as f64 / self.total as f64 * 100.0
    }

    pub fn rounded_percentage(&self) -> u32 {
        self.percentage().round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_roster_is_zero_percent() {
        assert_eq!(Progress::of(&[]).percentage(), 0.0);
    }

    #[test]
    fn counts_checked_in_records() {
        let mut records = vec![
            AttendeeRecord::new("A", "A", "a@x.com"),
            AttendeeRecord::new("B", "B", "b@x.com"),
            AttendeeRecord::new("C", "C", "c@x.com"),
        ];
        records[1].check_in("Flyer");
        let progress = Progress::of(&records);
        assert_eq!(progress, Progress { checked_in: 1, total: 3 });
        assert_eq!(progress.rounded_percentage(), 33);
    }
}
