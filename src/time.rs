use actix_web::{get, Responder};
use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};
use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::api::ApiResponse;

/// Server clock snapshot used to check time zone configuration.
#[derive(Debug, Serialize, ToSchema, PartialEq, Eq)]
pub struct TimeInfo {
    #[schema(example = "09:30")]
    pub time: String,
    /// Seconds since local midnight
    pub time_in_seconds: u32,
    pub unix: i64,
    #[schema(example = "15.01.2025")]
    pub date: String,
    /// 0 = Sunday
    pub week_day: u32,
    #[schema(example = "15.01.2025 09:30:05")]
    pub full_date: String,
    pub month: u32,
    pub day: u32,
    pub year: i32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl TimeInfo {
    pub fn at<Tz>(now: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self {
            time: now.format("%H:%M").to_string(),
            time_in_seconds: now.num_seconds_from_midnight(),
            unix: now.timestamp(),
            date: now.format("%d.%m.%Y").to_string(),
            week_day: now.weekday().num_days_from_sunday(),
            full_date: now.format("%d.%m.%Y %H:%M:%S").to_string(),
            month: now.month(),
            day: now.day(),
            year: now.year(),
            hour: now.hour(),
            minute: now.minute(),
            second: now.second(),
        }
    }
}

/// Current server time
#[utoipa::path(
    get,
    path = "/api/v1/time",
    tag = "time",
    responses(
        (status = 200, description = "Server local time", body = TimeInfo),
    )
)]
#[get("/api/v1/time")]
pub async fn time_handler() -> impl Responder {
    let info = TimeInfo::at(&Local::now());
    ApiResponse::success(info)
}
