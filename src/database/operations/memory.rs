// 内存活动存储
// 没有配置数据库时使用，测试也依赖它

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use futures_util::{FutureExt, future::BoxFuture};
use parking_lot::Mutex;
use sqlx::Error as SqlxError;

use crate::database::EventStore;
use crate::database::models::event::{EventEntity, EventInput};

#[derive(Debug)]
struct MemoryState {
    events: BTreeMap<i32, EventEntity>,
    next_id: i32,
}

/// 进程内活动存储，数据随进程结束而丢失
#[derive(Debug, Clone)]
pub struct MemoryEventOperation {
    state: Arc<Mutex<MemoryState>>,
}

impl Default for MemoryEventOperation {
    fn default() -> Self {
        Self {
            state: Arc::new(Mutex::new(MemoryState {
                events: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }
}

impl MemoryEventOperation {
    pub fn new() -> Self {
        Self::default()
    }

    fn list_now(&self, include_past: bool) -> Vec<EventEntity> {
        let now = Utc::now();
        let state = self.state.lock();
        let mut events: Vec<EventEntity> = state
            .events
            .values()
            .filter(|e| include_past || e.date >= now)
            .cloned()
            .collect();
        // BTreeMap 已按 id 排序，稳定排序保证同一时间的活动按 id 输出
        events.sort_by_key(|e| e.date);
        events
    }

    fn create_now(&self, input: EventInput) -> EventEntity {
        let now = Utc::now();
        let mut state = self.state.lock();
        let id = state.next_id;
        state.next_id += 1;

        let event = EventEntity {
            id,
            title: input.title,
            description: input.description,
            date: input.date,
            end_date: input.end_date,
            location: input.location,
            image_url: input.image_url,
            max_participants: input.max_participants,
            created_at: now,
            updated_at: now,
        };
        state.events.insert(id, event.clone());
        event
    }

    fn update_now(&self, id: i32, input: EventInput) -> Option<EventEntity> {
        let mut state = self.state.lock();
        let event = state.events.get_mut(&id)?;

        event.title = input.title;
        event.description = input.description;
        event.date = input.date;
        event.end_date = input.end_date;
        event.location = input.location;
        event.image_url = input.image_url;
        event.max_participants = input.max_participants;
        event.updated_at = Utc::now();
        Some(event.clone())
    }
}

impl EventStore for MemoryEventOperation {
    fn list_events(&self, include_past: bool) -> BoxFuture<'_, Result<Vec<EventEntity>, SqlxError>> {
        let events = self.list_now(include_past);
        async move { Ok(events) }.boxed()
    }

    fn get_event(&self, id: i32) -> BoxFuture<'_, Result<Option<EventEntity>, SqlxError>> {
        let event = self.state.lock().events.get(&id).cloned();
        async move { Ok(event) }.boxed()
    }

    fn create_event(&self, input: EventInput) -> BoxFuture<'_, Result<EventEntity, SqlxError>> {
        let event = self.create_now(input);
        async move { Ok(event) }.boxed()
    }

    fn update_event(
        &self,
        id: i32,
        input: EventInput,
    ) -> BoxFuture<'_, Result<Option<EventEntity>, SqlxError>> {
        let event = self.update_now(id, input);
        async move { Ok(event) }.boxed()
    }

    fn delete_event(&self, id: i32) -> BoxFuture<'_, Result<bool, SqlxError>> {
        let removed = self.state.lock().events.remove(&id).is_some();
        async move { Ok(removed) }.boxed()
    }
}
