// 活动实体
// 定义活动相关的数据库实体

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 活动实体，对应数据库中的 events 表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct EventEntity {
    pub id: i32,
    pub title: String,
    pub description: String,
    /// 开始时间
    pub date: DateTime<Utc>,
    /// 结束时间（可选）
    pub end_date: Option<DateTime<Utc>>,
    pub location: String,
    pub image_url: Option<String>,
    pub max_participants: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 创建或更新活动时写入的字段，已经过校验
#[derive(Debug, Clone, PartialEq)]
pub struct EventInput {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: String,
    pub image_url: Option<String>,
    pub max_participants: Option<i32>,
}
