pub const DAY_FMT: &str = "%Y-%m-%d";

pub mod serializer {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DAY_FMT;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        date.format(DAY_FMT).to_string().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let str_date: String = Deserialize::deserialize(deserializer)?;
        let date = NaiveDate::parse_from_str(&str_date, DAY_FMT).map_err(D::Error::custom)?;
        Ok(date)
    }
}

pub mod opt_serializer {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DAY_FMT;

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error> {
        date.map(|d| d.format(DAY_FMT).to_string()).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
        let str_date: Option<String> = Deserialize::deserialize(deserializer)?;
        match str_date {
            Some(s) if !s.is_empty() => {
                let date = NaiveDate::parse_from_str(&s, DAY_FMT).map_err(D::Error::custom)?;
                Ok(Some(date))
            }
            _ => Ok(None),
        }
    }
}

// Lenient parse used where malformed input degrades instead of failing.
pub fn parse_day(value: &str) -> Option<chrono::NaiveDate> {
    chrono::NaiveDate::parse_from_str(value, DAY_FMT).ok()
}

pub fn format_day(date: &chrono::NaiveDate) -> String {
    date.format(DAY_FMT).to_string()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::utils::date::{format_day, parse_day};

    #[tokio::test]
    async fn test_should_parse_day() {
        assert_eq!(Some(NaiveDate::from_ymd_opt(2016, 3, 1).unwrap()), parse_day("2016-03-01"));
        assert_eq!(None, parse_day("not-a-date"));
        assert_eq!(None, parse_day(""));
    }

    #[tokio::test]
    async fn test_should_round_trip_day() {
        let date = NaiveDate::from_ymd_opt(2016, 12, 24).unwrap();
        assert_eq!(Some(date), parse_day(format_day(&date).as_str()));
    }
}
