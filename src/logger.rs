//! 日志管理模块
//!
//! 初始化 tracing 输出，并维护一个有界的内存日志缓冲，
//! 供视图层展示最近的客户端日志。

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing_subscriber::EnvFilter;

/// 内存缓冲的日志条数上限
const MAX_LOG_ENTRIES: usize = 1000;

/// 初始化全局 tracing 订阅器
///
/// 过滤级别取 `RUST_LOG`，未设置时默认 `info`。
/// 重复调用返回错误（全局订阅器只能装一次）。
pub fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!("初始化日志订阅器失败: {}", e))?;
    Ok(())
}

/// 一条展示用日志
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: String,
    pub message: String,
}

/// 有界内存日志缓冲
pub struct LogStore {
    entries: VecDeque<LogEntry>,
    max_entries: usize,
}

impl Default for LogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LogStore {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries: MAX_LOG_ENTRIES,
        }
    }

    pub fn add(&mut self, level: &str, message: &str) {
        self.entries.push_back(LogEntry {
            timestamp: Utc::now().to_rfc3339(),
            level: level.to_string(),
            message: message.to_string(),
        });

        // 保持日志数量在限制内
        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

pub type SharedLogStore = Arc<RwLock<LogStore>>;
