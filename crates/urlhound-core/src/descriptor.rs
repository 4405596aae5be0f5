//! 规则元数据（外部注入的文案 + 内置默认值）
use serde::Serialize;

/// 诊断严重级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// 默认规则 id（对齐原分析器的类型名）
pub const DEFAULT_RULE_ID: &str = "UrlHardcodeAnalyzer";

/// 固定的诊断类别标签
pub const CATEGORY_HARDCODE: &str = "Hardcode";

/// 规则描述符：id 与全部文案均为透传配置，本库不解析任何资源
#[derive(Debug, Clone)]
pub struct RuleDescriptor {
    pub id: String,
    pub title: String,
    /// 消息模板，`{0}` 为命中字面量文本的替换槽
    pub message_format: String,
    pub description: String,
    pub category: String,
    pub severity: Severity,
    pub enabled_by_default: bool,
}

impl RuleDescriptor {
    /// 将命中文本代入消息模板
    pub(crate) fn format_message(&self, value: &str) -> String {
        self.message_format.replace("{0}", value)
    }
}

impl Default for RuleDescriptor {
    fn default() -> Self {
        Self {
            id: DEFAULT_RULE_ID.to_string(),
            title: "Hardcoded URL".to_string(),
            message_format: "String '{0}' contains hardcoded URL".to_string(),
            description: "String literals should not contain hardcoded network endpoints."
                .to_string(),
            category: CATEGORY_HARDCODE.to_string(),
            severity: Severity::Warning,
            enabled_by_default: true,
        }
    }
}
