use std::fmt;

/// A half-hour bucket within a service day. Rendered as a zero-padded
/// 24-hour `"HH:MM"` string at the wire boundary. The textual format is
/// load-bearing: stored booking times are matched against generated slot
/// times for string equality, so formatting and parsing must stay in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot {
    pub hour: u8,
    pub minute: u8,
}

impl TimeSlot {
    /// Builds a slot from an hour and a minute. Only `:00` and `:30`
    /// minutes are representable; anything else is rejected.
    pub fn new(hour: u8, minute: u8) -> Option<TimeSlot> {
        if hour > 23 || (minute != 0 && minute != 30) {
            return None;
        }

        Some(TimeSlot { hour, minute })
    }

    /// Parses a strict zero-padded `"HH:MM"` string into a slot.
    ///
    /// # Returns
    /// `None` for anything that is not exactly five characters of the form
    /// `HH:MM` with a representable hour/minute pair.
    pub fn parse(value: &str) -> Option<TimeSlot> {
        let bytes = value.as_bytes();

        if bytes.len() != 5 || bytes[2] != b':' {
            return None;
        }

        let hour: u8 = value[0..2].parse().ok()?;
        let minute: u8 = value[3..5].parse().ok()?;

        TimeSlot::new(hour, minute)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// The serving hours of a restaurant, both bounds inclusive. The default
/// reproduces the 12-23 window the platform launched with; it is injected
/// so restaurants with different hours can share one advisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceWindow {
    pub opening_hour: u8,
    pub closing_hour: u8,
}

impl Default for ServiceWindow {
    fn default() -> Self {
        ServiceWindow { opening_hour: 12, closing_hour: 23 }
    }
}

impl ServiceWindow {
    pub fn new(opening_hour: u8, closing_hour: u8) -> ServiceWindow {
        if opening_hour > closing_hour {
            log::warn!("Service window opens ({}) after it closes ({}). No slots will be generated.", opening_hour, closing_hour);
        }

        ServiceWindow { opening_hour, closing_hour }
    }

    /// Generates the bookable half-hour slots of this window, two per hour,
    /// in strictly ascending order. Deterministic and free of hidden state;
    /// the default window yields exactly 24 slots, 12:00 through 23:30.
    pub fn slots(&self) -> Vec<TimeSlot> {
        let mut slots = Vec::new();

        for hour in self.opening_hour..=self.closing_hour.min(23) {
            slots.push(TimeSlot { hour, minute: 0 });
            slots.push(TimeSlot { hour, minute: 30 });
        }

        slots
    }

    pub fn contains(&self, slot: TimeSlot) -> bool {
        slot.hour >= self.opening_hour && slot.hour <= self.closing_hour
    }
}

/// Capacity policy for a single restaurant and day: the serving window and
/// the total number of guests the floor can seat per slot. The defaults
/// reproduce the original fixed constants (hours 12-23, capacity 50).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotPolicy {
    pub window: ServiceWindow,
    pub total_capacity: u32,
}

impl Default for SlotPolicy {
    fn default() -> Self {
        SlotPolicy { window: ServiceWindow::default(), total_capacity: 50 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_zero_padded() {
        let slot = TimeSlot::new(9, 30).unwrap();
        assert_eq!(slot.to_string(), "09:30");
    }

    #[test]
    fn parse_round_trips_all_generated_slots() {
        for slot in ServiceWindow::default().slots() {
            assert_eq!(TimeSlot::parse(&slot.to_string()), Some(slot));
        }
    }

    #[test]
    fn parse_rejects_loose_formats() {
        assert_eq!(TimeSlot::parse("9:30"), None);
        assert_eq!(TimeSlot::parse("19:15"), None);
        assert_eq!(TimeSlot::parse("24:00"), None);
        assert_eq!(TimeSlot::parse("19:30 "), None);
        assert_eq!(TimeSlot::parse("1930"), None);
    }

    #[test]
    fn default_window_has_24_ascending_slots() {
        let slots = ServiceWindow::default().slots();

        assert_eq!(slots.len(), 24);
        assert_eq!(slots.first().unwrap().to_string(), "12:00");
        assert_eq!(slots.last().unwrap().to_string(), "23:30");

        for pair in slots.windows(2) {
            assert!(pair[0] < pair[1], "Slots must be strictly ascending: {} vs {}", pair[0], pair[1]);
        }
    }
}
