use chrono::{DateTime, NaiveDate, Utc};

/// UI settings shared through context by the app shell.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Id of the user shown as logged in.
    pub current_user_id: String,
    /// How many tasks the dashboard lists under "recent".
    pub recent_task_limit: usize,
    pub date_format: &'static str,
    pub timestamp_format: &'static str,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            current_user_id: "1".to_string(),
            recent_task_limit: 5,
            date_format: "%d/%m/%Y",
            timestamp_format: "%d/%m/%Y %H:%M",
        }
    }
}

impl AppConfig {
    pub fn format_date(&self, date: NaiveDate) -> String {
        date.format(self.date_format).to_string()
    }

    pub fn format_timestamp(&self, at: DateTime<Utc>) -> String {
        at.format(self.timestamp_format).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_dates_day_first() {
        let config = AppConfig::default();
        let date = NaiveDate::from_ymd_opt(2024, 2, 5).unwrap();
        assert_eq!(config.format_date(date), "05/02/2024");

        let at = date.and_hms_opt(14, 30, 0).unwrap().and_utc();
        assert_eq!(config.format_timestamp(at), "05/02/2024 14:30");
    }
}
