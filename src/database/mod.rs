// 数据库模块
// 包含活动实体定义和存储操作

pub mod models;
pub mod operations;

use futures_util::future::BoxFuture;
use sqlx::Error as SqlxError;

pub use models::event::{EventEntity, EventInput};
pub use operations::{EventOperation, MemoryEventOperation};

/// 活动存储接口
///
/// 列表按开始时间升序；`include_past` 为 false 时只返回尚未开始的活动。
pub trait EventStore: Send + Sync {
    fn list_events(&self, include_past: bool) -> BoxFuture<'_, Result<Vec<EventEntity>, SqlxError>>;

    fn get_event(&self, id: i32) -> BoxFuture<'_, Result<Option<EventEntity>, SqlxError>>;

    fn create_event(&self, input: EventInput) -> BoxFuture<'_, Result<EventEntity, SqlxError>>;

    /// id 不存在时返回 `None`
    fn update_event(
        &self,
        id: i32,
        input: EventInput,
    ) -> BoxFuture<'_, Result<Option<EventEntity>, SqlxError>>;

    /// 返回是否真的删除了记录
    fn delete_event(&self, id: i32) -> BoxFuture<'_, Result<bool, SqlxError>>;
}
