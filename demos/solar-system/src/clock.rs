/// Earth clock: time of day from Earth's spin, years from its orbit.

use std::f64::consts::TAU;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    pub hours: u32,
    pub minutes: u32,
    pub days: i64,
    pub years: i64,
}

impl ClockReading {
    /// One full spin is a day, one full orbit a year.
    pub fn from_angles(spin_angle: f64, orbit_angle: f64) -> Self {
        let total_days = spin_angle / TAU;
        let days = total_days.floor();
        let day_hours = (total_days - days) * 24.0;
        let hours = day_hours.floor();
        let minutes = ((day_hours - hours) * 60.0).floor();
        Self {
            hours: (hours as u32).min(23),
            minutes: (minutes as u32).min(59),
            days: days as i64,
            years: (orbit_angle / TAU).floor() as i64,
        }
    }

    pub fn minute_of_day(&self) -> u32 {
        self.hours * 60 + self.minutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_of_time() {
        let clock = ClockReading::from_angles(0.0, 0.5);
        assert_eq!(clock, ClockReading { hours: 0, minutes: 0, days: 0, years: 0 });
    }

    #[test]
    fn hours_and_minutes_from_fraction() {
        let fraction = (6.0 + 30.5 / 60.0) / 24.0;
        let clock = ClockReading::from_angles(TAU * (3.0 + fraction), 0.0);
        assert_eq!(clock.days, 3);
        assert_eq!(clock.hours, 6);
        assert_eq!(clock.minutes, 30);
        assert_eq!(clock.minute_of_day(), 390);
    }

    #[test]
    fn years_count_full_orbits() {
        let clock = ClockReading::from_angles(0.0, TAU * 2.5);
        assert_eq!(clock.years, 2);
    }

    #[test]
    fn negative_time_floors_down() {
        let clock = ClockReading::from_angles(-TAU * 0.5, -0.1);
        assert_eq!(clock.days, -1);
        assert_eq!(clock.hours, 12);
        assert_eq!(clock.years, -1);
    }
}
