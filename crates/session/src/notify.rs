//! 瞬时通知接口
//!
//! 对应前端的 toast：动作结束时向用户弹一条短消息。
//! 错误槽位和通知是同一个动作结果的两个下游观察者，
//! 由控制器在同一处一并触发，视图层注入自己的实现。

/// 瞬时通知接收方
pub trait Notifier: Send + Sync {
    /// 成功提示
    fn success(&self, message: &str);
    /// 失败提示
    fn error(&self, message: &str);
}

/// 默认实现：写入日志
///
/// 未注入视图层通知器时使用，保证消息不会静默丢失。
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        tracing::info!("[Notify] {}", message);
    }

    fn error(&self, message: &str) {
        tracing::warn!("[Notify] {}", message);
    }
}
