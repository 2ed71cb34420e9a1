use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub admin_password: String,
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub server_host: String,
    pub server_port: u16,
    pub api_base_uri: String,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 从任意键值来源构建配置，`from_env` 和测试共用
    pub fn from_lookup<F>(lookup: F) -> Result<Self, env::VarError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // 管理员密码没有默认值，缺失时拒绝启动
        let admin_password = lookup("ADMIN_PASSWORD")
            .filter(|p| !p.is_empty())
            .ok_or(env::VarError::NotPresent)?;

        Ok(Config {
            admin_password,
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            database_max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            server_port: lookup("SERVER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            api_base_uri: lookup("API_BASE_URI")
                .map(|uri| normalize_base_uri(&uri))
                .unwrap_or_else(|| "/api".into()),
        })
    }
}

/// 统一 API 前缀格式：以 `/` 开头、不以 `/` 结尾，空串表示不加前缀
fn normalize_base_uri(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
