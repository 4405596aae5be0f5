//! 错误类型（仅构造期的配置错误；匹配路径本身不可失败）
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("rule id must not be empty")]
    EmptyRuleId,

    #[error("scheme blacklist must not be empty")]
    EmptyBlacklist,

    #[error("failed to build scheme automaton: {0}")]
    Automaton(#[from] aho_corasick::BuildError),
}
