//! 编程语言目录
//!
//! 后端以固定枚举标识语言（JAVASCRIPT / PYTHON / JAVA），
//! 客户端侧为每种语言维护展示名、扩展名、编辑器语言 id、
//! 初始代码与主题色。切换语言时编辑器代码会被重置为初始代码。

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// 支持的编程语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Language {
    Javascript,
    Python,
    Java,
}

impl Default for Language {
    fn default() -> Self {
        Self::Javascript
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Language {
    /// 线上枚举标签（与后端一致）
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Javascript => "JAVASCRIPT",
            Self::Python => "PYTHON",
            Self::Java => "JAVA",
        }
    }

    /// 全部支持的语言
    pub fn all() -> &'static [Language] {
        &[Self::Javascript, Self::Python, Self::Java]
    }

    /// 语言的静态配置
    pub fn info(&self) -> &'static LanguageInfo {
        &LANGUAGE_CATALOG[self]
    }

    /// 该语言的初始代码
    pub fn starter_code(&self) -> &'static str {
        self.info().starter_code
    }
}

/// 单个语言的客户端配置
#[derive(Debug, Clone, Serialize)]
pub struct LanguageInfo {
    /// 展示名称
    pub name: &'static str,
    /// 文件扩展名
    pub extension: &'static str,
    /// 编辑器组件使用的语言 id
    pub editor_id: &'static str,
    /// 新建文档时的初始代码
    pub starter_code: &'static str,
    /// 语言主题色
    pub color: &'static str,
}

static LANGUAGE_CATALOG: Lazy<HashMap<Language, LanguageInfo>> = Lazy::new(|| {
    let mut catalog = HashMap::new();
    catalog.insert(
        Language::Javascript,
        LanguageInfo {
            name: "JavaScript",
            extension: "js",
            editor_id: "javascript",
            starter_code: "console.log(\"Hello, World!\");",
            color: "#f7df1e",
        },
    );
    catalog.insert(
        Language::Python,
        LanguageInfo {
            name: "Python",
            extension: "py",
            editor_id: "python",
            starter_code: "print(\"Hello, World!\")",
            color: "#3776ab",
        },
    );
    catalog.insert(
        Language::Java,
        LanguageInfo {
            name: "Java",
            extension: "java",
            editor_id: "java",
            starter_code: "public class Main {\n    public static void main(String[] args) {\n        System.out.println(\"Hello, World!\");\n    }\n}",
            color: "#ed8b00",
        },
    );
    catalog
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_tag_matches_wire_format() {
        assert_eq!(Language::Javascript.tag(), "JAVASCRIPT");
        assert_eq!(Language::Python.tag(), "PYTHON");
        assert_eq!(Language::Java.tag(), "JAVA");
    }

    #[test]
    fn language_serialization_uses_screaming_snake_case() {
        let json = serde_json::to_string(&Language::Javascript).unwrap();
        assert_eq!(json, "\"JAVASCRIPT\"");

        let parsed: Language = serde_json::from_str("\"PYTHON\"").unwrap();
        assert_eq!(parsed, Language::Python);
    }

    #[test]
    fn every_language_has_starter_code() {
        for lang in Language::all() {
            assert!(!lang.starter_code().is_empty());
            assert!(!lang.info().name.is_empty());
        }
    }

    #[test]
    fn java_starter_code_is_a_main_class() {
        assert!(Language::Java.starter_code().contains("public class Main"));
    }
}
