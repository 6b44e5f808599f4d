//! 会话状态

use codeground_core::{ExecutionResult, Language, ShareInfo, Snippet};
use serde::Serialize;

/// 新文档默认标题
pub const DEFAULT_TITLE: &str = "新代码";

/// 默认作者展示名
pub const DEFAULT_AUTHOR: &str = "匿名";

/// 工作区会话的完整状态
///
/// 单实例、随页面生命周期存活。视图层通过快照读取并渲染；
/// 所有修改都经由控制器动作完成，外部观察到的永远是
/// 动作前或动作后的完整形态，不存在修改中途的中间态。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// 编辑器中的代码
    pub code: String,
    /// 当前选中的语言
    pub language: Language,
    /// 工作标题
    pub title: String,
    /// 作者展示名
    pub author: String,

    /// 已知片段列表（保存后新片段在最前）
    pub snippets: Vec<Snippet>,
    /// 当前加载的片段
    ///
    /// 为空，或指向本会话最近一次成功加载/保存/更新的片段；
    /// 编辑文本字段不会回写它，只有保存/更新会替换它。
    pub current_snippet: Option<Snippet>,

    /// 最近一次执行结果
    pub execution_result: Option<ExecutionResult>,
    /// 执行历史（新到旧）
    pub execution_history: Vec<ExecutionResult>,

    /// 最近一次分享信息
    pub share_info: Option<ShareInfo>,

    /// 列表/片段类操作进行中
    pub is_loading: bool,
    /// 执行进行中
    pub is_executing: bool,
    /// 分享进行中
    pub is_sharing: bool,

    /// 面向用户的错误消息
    pub error: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        let language = Language::default();
        Self {
            code: language.starter_code().to_string(),
            language,
            title: DEFAULT_TITLE.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            snippets: Vec::new(),
            current_snippet: None,
            execution_result: None,
            execution_history: Vec::new(),
            share_info: None,
            is_loading: false,
            is_executing: false,
            is_sharing: false,
            error: None,
        }
    }
}
