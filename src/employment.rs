use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmploymentStatus {
    Current,
    Past,
    Contract,
    Freelance,
    Gap,
    Seeking,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IndicatorVariant {
    #[default]
    Default,
    Compact,
    Detailed,
}

/// Roles that ended at most this many calendar months ago count as job hunting.
const SEEKING_WINDOW_MONTHS: i32 = 2;

impl EmploymentStatus {
    /// No end date means the role is ongoing.
    pub fn from_end_date(end: Option<NaiveDate>, today: NaiveDate) -> Self {
        let Some(end) = end else {
            return Self::Current;
        };
        let months = (today.year() - end.year()) * 12 + today.month() as i32 - end.month() as i32;
        if months <= SEEKING_WINDOW_MONTHS {
            Self::Seeking
        } else {
            Self::Past
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Current => "Current role",
            Self::Past => "Previous role",
            Self::Contract => "Contract work",
            Self::Freelance => "Freelance",
            Self::Gap => "Upskilling",
            Self::Seeking => "Open to work",
        }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            Self::Current => "Current",
            Self::Past => "Past",
            Self::Contract => "Contract",
            Self::Freelance => "Freelance",
            Self::Gap => "Learning",
            Self::Seeking => "Seeking",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Current => "Currently working in this position",
            Self::Past => "A completed position",
            Self::Contract => "Project work under contract",
            Self::Freelance => "Independently sourced project work",
            Self::Gap => "Focused on learning and improving skills",
            Self::Seeking => "Looking for a new opportunity",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Current => "bg-green-500/10 text-green-700 border-green-500/20 dark:text-green-400",
            Self::Past => "bg-blue-500/10 text-blue-700 border-blue-500/20 dark:text-blue-400",
            Self::Contract => {
                "bg-purple-500/10 text-purple-700 border-purple-500/20 dark:text-purple-400"
            }
            Self::Freelance => {
                "bg-orange-500/10 text-orange-700 border-orange-500/20 dark:text-orange-400"
            }
            Self::Gap => "bg-cyan-500/10 text-cyan-700 border-cyan-500/20 dark:text-cyan-400",
            Self::Seeking => {
                "bg-yellow-500/10 text-yellow-700 border-yellow-500/20 dark:text-yellow-400"
            }
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Current => "↗",
            Self::Past => "✓",
            Self::Contract => "▣",
            Self::Freelance => "◎",
            Self::Gap => "★",
            Self::Seeking => "◷",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_no_end_date_is_current() {
        assert_eq!(
            EmploymentStatus::from_end_date(None, date(2024, 5, 1)),
            EmploymentStatus::Current
        );
    }

    #[test]
    fn test_recent_end_is_seeking() {
        let today = date(2024, 3, 15);
        assert_eq!(
            EmploymentStatus::from_end_date(Some(date(2024, 1, 31)), today),
            EmploymentStatus::Seeking
        );
        assert_eq!(
            EmploymentStatus::from_end_date(Some(date(2023, 12, 1)), today),
            EmploymentStatus::Past
        );
    }

    #[test]
    fn test_month_math_crosses_years() {
        assert_eq!(
            EmploymentStatus::from_end_date(Some(date(2023, 11, 30)), date(2024, 1, 2)),
            EmploymentStatus::Seeking
        );
        assert_eq!(
            EmploymentStatus::from_end_date(Some(date(2021, 12, 31)), date(2024, 1, 2)),
            EmploymentStatus::Past
        );
    }
}
