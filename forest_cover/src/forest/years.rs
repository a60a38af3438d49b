use crate::data::Period;

/// Years the viewer can show: `min..=max` in steps of `step`. Year `y` shows the
/// period `y..y + step`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct YearRange {
    pub min: u16,
    pub max: u16,
    pub step: u16,
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            min: 2000,
            max: 2015,
            step: 5,
        }
    }
}

impl YearRange {
    pub fn clamp(&self, year: i32) -> u16 {
        year.clamp(self.min as i32, self.max as i32) as u16
    }

    pub fn period_for(&self, year: u16) -> Period {
        Period::new(year, year.saturating_add(self.step))
    }

    /// One step forward, wrapping to `min` past `max`.
    pub fn cycle(&self, year: u16) -> u16 {
        let next = year as i32 + self.step as i32;
        if next > self.max as i32 {
            self.min
        } else {
            next as u16
        }
    }
}
