//! Rating counts aggregated over one study session.
use super::ConfidenceRating;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub again: u32,
    pub hard: u32,
    pub good: u32,
    pub easy: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Performance {
    Excellent,
    Great,
    KeepPracticing,
    NeedsReview,
}

impl Performance {
    pub fn message(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent work!",
            Self::Great => "Great progress!",
            Self::KeepPracticing => "Keep practicing!",
            Self::NeedsReview => "Review these cards more!",
        }
    }
}

impl SessionStats {
    pub fn record(&mut self, rating: ConfidenceRating) {
        *self.count_mut(rating) += 1;
    }

    pub fn count(&self, rating: ConfidenceRating) -> u32 {
        match rating {
            ConfidenceRating::Again => self.again,
            ConfidenceRating::Hard => self.hard,
            ConfidenceRating::Good => self.good,
            ConfidenceRating::Easy => self.easy,
        }
    }

    fn count_mut(&mut self, rating: ConfidenceRating) -> &mut u32 {
        match rating {
            ConfidenceRating::Again => &mut self.again,
            ConfidenceRating::Hard => &mut self.hard,
            ConfidenceRating::Good => &mut self.good,
            ConfidenceRating::Easy => &mut self.easy,
        }
    }

    pub fn total(&self) -> u32 {
        self.again + self.hard + self.good + self.easy
    }

    /// Share of the session, rounded to a whole percent.
    pub fn percent(&self, rating: ConfidenceRating) -> u32 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        (f64::from(self.count(rating)) * 100.0 / f64::from(total)).round() as u32
    }

    /// Judged on the rounded good and easy percentages combined.
    pub fn performance(&self) -> Performance {
        let confident = self.percent(ConfidenceRating::Good) + self.percent(ConfidenceRating::Easy);
        match confident {
            80.. => Performance::Excellent,
            60..=79 => Performance::Great,
            40..=59 => Performance::KeepPracticing,
            _ => Performance::NeedsReview,
        }
    }
}
