pub mod units;

use chrono::{DateTime, TimeZone};

pub use units::{
    convert_cm_to_twip, convert_mm_to_twip, convert_point_to_twip, convert_point_to_half_point,
};

/// 日期目录名，例如 `2024-05-01`
pub fn date_dir_name<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%Y-%m-%d").to_string()
}

/// 14 位时间戳，例如 `20240501093005`
pub fn timestamp<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%Y%m%d%H%M%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    #[test]
    fn formats_directory_and_timestamp() {
        let now = Local.with_ymd_and_hms(2024, 5, 1, 9, 30, 5).unwrap();
        assert_eq!(date_dir_name(&now), "2024-05-01");
        assert_eq!(timestamp(&now), "20240501093005");
    }
}
