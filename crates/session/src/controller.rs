//! 工作区会话控制器
//!
//! 每个动作对应原型应用里的一个用户操作。网络类动作统一遵循
//! 三段式变迁：置忙碌 + 清错误 → 网关调用 → 成功合并 / 失败记错，
//! 且无论成败都在收尾时放下忙碌标志。失败时除错误槽位外
//! 不触碰任何已有状态。
//!
//! 同类动作重叠时采用序号闸门（SeqGate）：每次发起领取单调递增
//! 的票号，收尾时票号已不是该类别最新的响应被整体丢弃（不合并
//! 状态、不发通知、不碰标志），标志由最新一次调用负责放下。
//! 即"最后发起者胜"，而不是"最后到达者胜"。

use crate::gateway::Gateway;
use crate::notify::{LogNotifier, Notifier};
use crate::state::{SessionState, DEFAULT_TITLE};
use codeground_core::{
    ExecutionRequest, ExecutionStatus, Language, ShareInfo, ShareRequest, SnippetRequest,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// 列表加载页大小
const SNIPPET_PAGE_SIZE: u32 = 50;

/// 执行历史页大小
const HISTORY_PAGE_SIZE: u32 = 20;

/// 服务端执行超时提示（秒）
const EXECUTION_TIMEOUT_SECS: u32 = 10;

/// 面向用户的提示文案
mod msg {
    pub const LOAD_SNIPPETS_FAILED: &str = "加载代码片段失败";
    pub const LOAD_SNIPPET_FAILED: &str = "加载代码片段失败";
    pub const SEARCH_FAILED: &str = "搜索代码片段失败";
    pub const CODE_REQUIRED: &str = "请先输入代码";
    pub const SNIPPET_REQUIRED: &str = "请先保存代码片段";
    pub const SAVED: &str = "代码片段已保存";
    pub const SAVE_FAILED: &str = "保存代码片段失败";
    pub const UPDATED: &str = "代码片段已更新";
    pub const UPDATE_FAILED: &str = "更新代码片段失败";
    pub const DELETED: &str = "代码片段已删除";
    pub const DELETE_FAILED: &str = "删除代码片段失败";
    pub const EXECUTED: &str = "代码执行成功";
    pub const EXECUTION_REPORTED_ERROR: &str = "代码执行出现错误";
    pub const EXECUTE_FAILED: &str = "代码执行失败";
    pub const HISTORY_FAILED: &str = "加载执行记录失败";
    pub const SHARED: &str = "分享链接已生成";
    pub const SHARE_FAILED: &str = "生成分享链接失败";
    pub const LOAD_SHARED_FAILED: &str = "加载分享代码失败";
}

/// 忙碌标志类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BusyFlag {
    Loading,
    Executing,
    Sharing,
}

impl BusyFlag {
    fn set(self, state: &mut SessionState) {
        match self {
            Self::Loading => state.is_loading = true,
            Self::Executing => state.is_executing = true,
            Self::Sharing => state.is_sharing = true,
        }
    }

    fn clear(self, state: &mut SessionState) {
        match self {
            Self::Loading => state.is_loading = false,
            Self::Executing => state.is_executing = false,
            Self::Sharing => state.is_sharing = false,
        }
    }
}

/// 每个忙碌类别一个的单调序号闸门
#[derive(Debug, Default)]
struct SeqGate {
    seq: AtomicU64,
}

impl SeqGate {
    /// 领取新票号（同类别内单调递增）
    fn issue(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// 票号是否仍是该类别最新发起的一次
    fn is_latest(&self, ticket: u64) -> bool {
        self.seq.load(Ordering::SeqCst) == ticket
    }
}

/// 一次动作的收尾结果：状态已在锁内合并完毕，
/// 通知作为同一结果的第二个观察者在锁外触发。
enum Settled {
    Success(Option<&'static str>),
    Failure(&'static str),
    Stale,
}

/// 工作区会话控制器
///
/// 由宿主创建一次并注入视图层；状态经 [`SessionState`] 快照
/// 或共享句柄对外暴露，修改只能通过动作方法。
pub struct SessionController<G: Gateway> {
    state: Arc<RwLock<SessionState>>,
    gateway: Arc<G>,
    notifier: Arc<dyn Notifier>,
    loading_gate: SeqGate,
    executing_gate: SeqGate,
    sharing_gate: SeqGate,
}

impl<G: Gateway> SessionController<G> {
    /// 创建控制器（通知走日志）
    pub fn new(gateway: Arc<G>) -> Self {
        Self::with_notifier(gateway, Arc::new(LogNotifier))
    }

    /// 创建控制器并注入视图层通知器
    pub fn with_notifier(gateway: Arc<G>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            state: Arc::new(RwLock::new(SessionState::default())),
            gateway,
            notifier,
            loading_gate: SeqGate::default(),
            executing_gate: SeqGate::default(),
            sharing_gate: SeqGate::default(),
        }
    }

    /// 当前状态快照
    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    /// 状态共享句柄（供视图层做响应式绑定）
    pub fn state_handle(&self) -> Arc<RwLock<SessionState>> {
        Arc::clone(&self.state)
    }

    // ------------------------------------------------------------------
    // 编辑器动作（同步语义，无网络、无忙碌标志）
    // ------------------------------------------------------------------

    /// 更新编辑器代码
    pub async fn set_code(&self, code: impl Into<String>) {
        self.state.write().await.code = code.into();
    }

    /// 切换语言
    ///
    /// 同时把编辑器代码重置为该语言的初始代码——这是用户
    /// 主动触发的覆盖，未保存的修改会丢失。
    pub async fn set_language(&self, language: Language) {
        let mut s = self.state.write().await;
        s.language = language;
        s.code = language.starter_code().to_string();
    }

    /// 更新工作标题
    pub async fn set_title(&self, title: impl Into<String>) {
        self.state.write().await.title = title.into();
    }

    /// 更新作者展示名
    pub async fn set_author(&self, author: impl Into<String>) {
        self.state.write().await.author = author.into();
    }

    /// 重置为新文档
    ///
    /// 恢复当前语言的初始代码与默认标题，并清空当前片段、
    /// 最近执行结果、最近分享与错误。作者名保留。
    pub async fn reset_editor(&self) {
        let mut s = self.state.write().await;
        s.code = s.language.starter_code().to_string();
        s.title = DEFAULT_TITLE.to_string();
        s.current_snippet = None;
        s.execution_result = None;
        s.share_info = None;
        s.error = None;
    }

    /// 清除错误槽位
    pub async fn clear_error(&self) {
        self.state.write().await.error = None;
    }

    /// 直接写入错误槽位
    pub async fn set_error(&self, message: impl Into<String>) {
        self.state.write().await.error = Some(message.into());
    }

    // ------------------------------------------------------------------
    // 片段动作
    // ------------------------------------------------------------------

    /// 加载片段列表（首页，整体替换）
    pub async fn load_snippets(&self) {
        let ticket = self.begin_loading().await;
        let result = self.gateway.list_snippets(0, SNIPPET_PAGE_SIZE).await;
        let settled = {
            let mut s = self.state.write().await;
            if !self.loading_gate.is_latest(ticket) {
                Settled::Stale
            } else {
                match result {
                    Ok(page) => {
                        s.snippets = page.content;
                        BusyFlag::Loading.clear(&mut s);
                        Settled::Success(None)
                    }
                    Err(e) => {
                        tracing::warn!("[Session] 加载片段列表失败: {}", e);
                        s.error = Some(msg::LOAD_SNIPPETS_FAILED.to_string());
                        BusyFlag::Loading.clear(&mut s);
                        Settled::Failure(msg::LOAD_SNIPPETS_FAILED)
                    }
                }
            }
        };
        self.emit(settled);
    }

    /// 关键字搜索（空白关键字等价于加载全部）
    pub async fn search_snippets(&self, keyword: &str) {
        if keyword.trim().is_empty() {
            self.load_snippets().await;
            return;
        }

        let ticket = self.begin_loading().await;
        let result = self
            .gateway
            .search_snippets(keyword, 0, SNIPPET_PAGE_SIZE)
            .await;
        let settled = {
            let mut s = self.state.write().await;
            if !self.loading_gate.is_latest(ticket) {
                Settled::Stale
            } else {
                match result {
                    Ok(page) => {
                        s.snippets = page.content;
                        BusyFlag::Loading.clear(&mut s);
                        Settled::Success(None)
                    }
                    Err(e) => {
                        tracing::warn!("[Session] 搜索片段失败: {}", e);
                        s.error = Some(msg::SEARCH_FAILED.to_string());
                        BusyFlag::Loading.clear(&mut s);
                        Settled::Failure(msg::SEARCH_FAILED)
                    }
                }
            }
        };
        self.emit(settled);
    }

    /// 加载单个片段并镜像到编辑器
    ///
    /// 编辑器字段被加载结果整体覆盖，未保存的修改会丢失。
    pub async fn load_snippet(&self, id: i64) {
        let ticket = self.begin_loading().await;
        let result = self.gateway.get_snippet(id).await;
        let settled = {
            let mut s = self.state.write().await;
            if !self.loading_gate.is_latest(ticket) {
                Settled::Stale
            } else {
                match result {
                    Ok(snippet) => {
                        s.code = snippet.code.clone();
                        s.language = snippet.language;
                        s.title = snippet.title.clone();
                        s.author = snippet.author_name.clone();
                        s.current_snippet = Some(snippet);
                        BusyFlag::Loading.clear(&mut s);
                        Settled::Success(None)
                    }
                    Err(e) => {
                        tracing::warn!("[Session] 加载片段 {} 失败: {}", id, e);
                        s.error = Some(msg::LOAD_SNIPPET_FAILED.to_string());
                        BusyFlag::Loading.clear(&mut s);
                        Settled::Failure(msg::LOAD_SNIPPET_FAILED)
                    }
                }
            }
        };
        self.emit(settled);
    }

    /// 保存当前编辑内容为新片段
    ///
    /// 代码为空或全空白时本地拒绝，不发起网络调用。
    /// 成功后新片段插入列表头部并成为当前片段。
    pub async fn save_snippet(&self) {
        let request = {
            let s = self.state.read().await;
            if s.code.trim().is_empty() {
                None
            } else {
                Some(SnippetRequest {
                    title: s.title.clone(),
                    code: s.code.clone(),
                    language: s.language,
                    author_name: s.author.clone(),
                })
            }
        };
        let Some(request) = request else {
            self.reject(msg::CODE_REQUIRED).await;
            return;
        };

        let ticket = self.begin_loading().await;
        let result = self.gateway.create_snippet(&request).await;
        let settled = {
            let mut s = self.state.write().await;
            if !self.loading_gate.is_latest(ticket) {
                Settled::Stale
            } else {
                match result {
                    Ok(snippet) => {
                        s.snippets.insert(0, snippet.clone());
                        s.current_snippet = Some(snippet);
                        BusyFlag::Loading.clear(&mut s);
                        Settled::Success(Some(msg::SAVED))
                    }
                    Err(e) => {
                        tracing::warn!("[Session] 保存片段失败: {}", e);
                        s.error = Some(msg::SAVE_FAILED.to_string());
                        BusyFlag::Loading.clear(&mut s);
                        Settled::Failure(msg::SAVE_FAILED)
                    }
                }
            }
        };
        self.emit(settled);
    }

    /// 用当前编辑内容全量更新片段
    ///
    /// 成功后原位替换列表中的同 ID 条目（保持列表顺序），
    /// 并替换当前片段。
    pub async fn update_snippet(&self, id: i64) {
        let request = {
            let s = self.state.read().await;
            SnippetRequest {
                title: s.title.clone(),
                code: s.code.clone(),
                language: s.language,
                author_name: s.author.clone(),
            }
        };

        let ticket = self.begin_loading().await;
        let result = self.gateway.update_snippet(id, &request).await;
        let settled = {
            let mut s = self.state.write().await;
            if !self.loading_gate.is_latest(ticket) {
                Settled::Stale
            } else {
                match result {
                    Ok(updated) => {
                        if let Some(slot) = s.snippets.iter_mut().find(|x| x.id == id) {
                            *slot = updated.clone();
                        }
                        s.current_snippet = Some(updated);
                        BusyFlag::Loading.clear(&mut s);
                        Settled::Success(Some(msg::UPDATED))
                    }
                    Err(e) => {
                        tracing::warn!("[Session] 更新片段 {} 失败: {}", id, e);
                        s.error = Some(msg::UPDATE_FAILED.to_string());
                        BusyFlag::Loading.clear(&mut s);
                        Settled::Failure(msg::UPDATE_FAILED)
                    }
                }
            }
        };
        self.emit(settled);
    }

    /// 删除片段
    ///
    /// 成功后从列表移除；当且仅当被删的是当前片段时清空
    /// 当前片段。不自动刷新列表，由调用方决定是否重新加载。
    pub async fn delete_snippet(&self, id: i64) {
        let ticket = self.begin_loading().await;
        let result = self.gateway.delete_snippet(id).await;
        let settled = {
            let mut s = self.state.write().await;
            if !self.loading_gate.is_latest(ticket) {
                Settled::Stale
            } else {
                match result {
                    Ok(()) => {
                        s.snippets.retain(|x| x.id != id);
                        if s.current_snippet.as_ref().map(|x| x.id) == Some(id) {
                            s.current_snippet = None;
                        }
                        BusyFlag::Loading.clear(&mut s);
                        Settled::Success(Some(msg::DELETED))
                    }
                    Err(e) => {
                        tracing::warn!("[Session] 删除片段 {} 失败: {}", id, e);
                        s.error = Some(msg::DELETE_FAILED.to_string());
                        BusyFlag::Loading.clear(&mut s);
                        Settled::Failure(msg::DELETE_FAILED)
                    }
                }
            }
        };
        self.emit(settled);
    }

    // ------------------------------------------------------------------
    // 执行动作
    // ------------------------------------------------------------------

    /// 执行当前片段
    ///
    /// 要求已有当前片段，否则本地拒绝、不发起网络调用。
    /// 发送覆盖代码（未提供或为空串时取编辑器代码）、可选输入与
    /// 固定的服务端超时提示；成功后覆盖"最近一次执行结果"槽位。
    pub async fn execute_code(&self, custom_code: Option<String>, input: Option<String>) {
        let request = {
            let s = self.state.read().await;
            s.current_snippet.as_ref().map(|snippet| ExecutionRequest {
                code_snippet_id: snippet.id,
                custom_code: Some(
                    custom_code
                        .filter(|code| !code.is_empty())
                        .unwrap_or_else(|| s.code.clone()),
                ),
                input,
                timeout_seconds: Some(EXECUTION_TIMEOUT_SECS),
            })
        };
        let Some(request) = request else {
            self.reject(msg::SNIPPET_REQUIRED).await;
            return;
        };

        let ticket = self.executing_gate.issue();
        {
            let mut s = self.state.write().await;
            BusyFlag::Executing.set(&mut s);
            s.error = None;
            s.execution_result = None;
        }

        let result = self.gateway.execute(&request).await;
        let settled = {
            let mut s = self.state.write().await;
            if !self.executing_gate.is_latest(ticket) {
                Settled::Stale
            } else {
                match result {
                    Ok(outcome) => {
                        let succeeded = outcome.status == ExecutionStatus::Success;
                        s.execution_result = Some(outcome);
                        BusyFlag::Executing.clear(&mut s);
                        if succeeded {
                            Settled::Success(Some(msg::EXECUTED))
                        } else {
                            // 执行请求本身成功，结果是业务层面的失败：
                            // 用错误样式提示，但不写错误槽位
                            Settled::Failure(msg::EXECUTION_REPORTED_ERROR)
                        }
                    }
                    Err(e) => {
                        tracing::warn!("[Session] 执行代码失败: {}", e);
                        s.error = Some(msg::EXECUTE_FAILED.to_string());
                        BusyFlag::Executing.clear(&mut s);
                        Settled::Failure(msg::EXECUTE_FAILED)
                    }
                }
            }
        };

        self.emit(settled);
    }

    /// 加载片段的执行历史（最近 20 条，整体替换）
    ///
    /// 与原型一致：不设置忙碌标志、不写错误槽位，失败只提示。
    pub async fn load_execution_history(&self, snippet_id: i64) {
        match self
            .gateway
            .get_execution_history(snippet_id, 0, HISTORY_PAGE_SIZE)
            .await
        {
            Ok(page) => {
                self.state.write().await.execution_history = page.content;
            }
            Err(e) => {
                tracing::warn!("[Session] 加载执行历史失败: {}", e);
                self.notifier.error(msg::HISTORY_FAILED);
            }
        }
    }

    // ------------------------------------------------------------------
    // 分享动作
    // ------------------------------------------------------------------

    /// 为当前片段生成分享链接
    ///
    /// 要求已有当前片段，否则本地拒绝。`expiration_days` 缺省
    /// 表示永久分享。成功时既更新最近分享槽位也把分享信息
    /// 返回给调用方，便于视图层接续弹出确认界面。
    pub async fn share_code(&self, expiration_days: Option<u32>) -> Option<ShareInfo> {
        let request = {
            let s = self.state.read().await;
            s.current_snippet.as_ref().map(|snippet| ShareRequest {
                code_snippet_id: snippet.id,
                expiration_days,
            })
        };
        let Some(request) = request else {
            self.reject(msg::SNIPPET_REQUIRED).await;
            return None;
        };

        let ticket = self.sharing_gate.issue();
        {
            let mut s = self.state.write().await;
            BusyFlag::Sharing.set(&mut s);
            s.error = None;
        }

        let result = self.gateway.create_share(&request).await;
        let (settled, share) = {
            let mut s = self.state.write().await;
            if !self.sharing_gate.is_latest(ticket) {
                (Settled::Stale, None)
            } else {
                match result {
                    Ok(info) => {
                        s.share_info = Some(info.clone());
                        BusyFlag::Sharing.clear(&mut s);
                        (Settled::Success(Some(msg::SHARED)), Some(info))
                    }
                    Err(e) => {
                        tracing::warn!("[Session] 创建分享失败: {}", e);
                        s.error = Some(msg::SHARE_FAILED.to_string());
                        BusyFlag::Sharing.clear(&mut s);
                        (Settled::Failure(msg::SHARE_FAILED), None)
                    }
                }
            }
        };
        self.emit(settled);
        share
    }

    /// 打开别人的分享链接
    ///
    /// 获取分享信息后，用其内嵌的片段快照整体还原会话：
    /// 编辑器字段、当前片段与最近分享。
    pub async fn load_shared_code(&self, share_id: &str) {
        let ticket = self.begin_loading().await;
        let result = self.gateway.get_share(share_id).await;
        let settled = {
            let mut s = self.state.write().await;
            if !self.loading_gate.is_latest(ticket) {
                Settled::Stale
            } else {
                match result {
                    Ok(info) => {
                        let snippet = info.code_snippet.clone();
                        s.code = snippet.code.clone();
                        s.language = snippet.language;
                        s.title = snippet.title.clone();
                        s.author = snippet.author_name.clone();
                        s.current_snippet = Some(snippet);
                        s.share_info = Some(info);
                        BusyFlag::Loading.clear(&mut s);
                        Settled::Success(None)
                    }
                    Err(e) => {
                        tracing::warn!("[Session] 加载分享 {} 失败: {}", share_id, e);
                        s.error = Some(msg::LOAD_SHARED_FAILED.to_string());
                        BusyFlag::Loading.clear(&mut s);
                        Settled::Failure(msg::LOAD_SHARED_FAILED)
                    }
                }
            }
        };
        self.emit(settled);
    }

    // ------------------------------------------------------------------
    // 内部辅助
    // ------------------------------------------------------------------

    /// 发起一次加载类调用：领取票号、置忙碌、清错误
    async fn begin_loading(&self) -> u64 {
        let ticket = self.loading_gate.issue();
        let mut s = self.state.write().await;
        BusyFlag::Loading.set(&mut s);
        s.error = None;
        ticket
    }

    /// 本地校验失败：写错误槽位并提示，不碰忙碌标志
    async fn reject(&self, message: &'static str) {
        {
            let mut s = self.state.write().await;
            s.error = Some(message.to_string());
        }
        self.notifier.error(message);
    }

    /// 把收尾结果送达第二个观察者（瞬时通知）
    fn emit(&self, settled: Settled) {
        match settled {
            Settled::Success(Some(message)) => self.notifier.success(message),
            Settled::Success(None) => {}
            Settled::Failure(message) => self.notifier.error(message),
            Settled::Stale => tracing::debug!("[Session] 丢弃过期响应"),
        }
    }
}
