//! codeground-session - 工作区会话控制器
//!
//! 持有全部会话状态（编辑器内容、片段列表、执行结果、分享信息、
//! 忙碌标志与错误槽位），并为每个改变状态的能力暴露一个动作。
//! 动作通过 [`Gateway`] 访问网络，结果以统一的三段式状态变迁
//! 落回会话：发起时置忙碌、清错误；成功时合并结果、清忙碌；
//! 失败时写入面向用户的错误消息、清忙碌，其余状态保持不变。
//!
//! 控制器实例由宿主（视图层）创建并注入，随会话生命周期存活，
//! 不存在全局单例。

mod controller;
mod gateway;
mod notify;
mod state;

pub use controller::SessionController;
pub use gateway::Gateway;
pub use notify::{LogNotifier, Notifier};
pub use state::{SessionState, DEFAULT_AUTHOR, DEFAULT_TITLE};
