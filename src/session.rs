use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::RwLock;
use uuid::Uuid;

/// 管理员会话存储
///
/// 只保存当前有效的 token 集合，进程重启后全部失效。
/// 克隆开销很小，所有克隆共享同一个集合。
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    tokens: Arc<RwLock<HashSet<String>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建会话并返回新 token
    pub fn create_session(&self) -> String {
        let mut tokens = self.tokens.write();
        loop {
            let token = Uuid::new_v4().to_string();
            if tokens.insert(token.clone()) {
                return token;
            }
        }
    }

    /// 空字符串和未知 token 一律返回 false
    pub fn validate_session(&self, token: &str) -> bool {
        !token.is_empty() && self.tokens.read().contains(token)
    }

    /// 删除会话，token 不存在时什么也不做
    pub fn delete_session(&self, token: &str) {
        self.tokens.write().remove(token);
    }

    pub fn len(&self) -> usize {
        self.tokens.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.read().is_empty()
    }
}
