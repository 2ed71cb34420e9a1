use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::database::EventInput;
use crate::error::AppError;

pub const MISSING_FIELDS: &str = "title and date are required";

#[derive(Debug, Default)]
pub struct ListQuery {
    pub all: Option<String>,
}

impl ListQuery {
    /// 同名参数出现多次时取第一个
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            all: pairs
                .into_iter()
                .find(|(key, _)| key == "all")
                .map(|(_, value)| value),
        }
    }

    /// 只有 `all=true` 时才包含已经结束的活动
    pub fn include_past(&self) -> bool {
        self.all.as_deref() == Some("true")
    }
}

/// 创建/更新活动的请求体，字段在 `into_input` 中校验
#[derive(Debug, Default, Deserialize)]
pub struct EventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub end_date: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub max_participants: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct DeleteEventResponse {
    pub ok: bool,
}

impl EventRequest {
    pub fn into_input(self) -> Result<EventInput, AppError> {
        let title = self.title.filter(|t| !t.is_empty());
        let date = self.date.filter(|d| !d.is_empty());
        let (Some(title), Some(date)) = (title, date) else {
            return Err(AppError::Validation(MISSING_FIELDS.into()));
        };

        let date = parse_timestamp(&date)
            .ok_or_else(|| AppError::Validation("date must be a valid timestamp".into()))?;
        let end_date = match self.end_date.filter(|d| !d.is_empty()) {
            Some(raw) => Some(parse_timestamp(&raw).ok_or_else(|| {
                AppError::Validation("end_date must be a valid timestamp".into())
            })?),
            None => None,
        };

        Ok(EventInput {
            title,
            description: self.description.unwrap_or_default(),
            date,
            end_date,
            location: self.location.unwrap_or_default(),
            image_url: self.image_url.filter(|u| !u.is_empty()),
            max_participants: self.max_participants,
        })
    }
}

/// 解析时间
///
/// 接受 RFC 3339，以及前端 `datetime-local` 输入产生的不带时区的格式（按 UTC 处理）。
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// 路径中的活动 id 只接受纯数字
pub fn parse_event_id(raw: &str) -> Option<i32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
