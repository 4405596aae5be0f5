//! 硬编码 URL 检测规则核心（宿主无关）
//!
//! 设计要点：
//! - 规则以纯函数形式暴露：`examine_literal` / `examine_interpolated_segment`，
//!   每次调用只读取节点句柄与进程级不可变常量，无跨节点状态。
//! - 语法树由宿主（或测试夹具）构建并持有；本库仅通过 `NodeRef` 借用遍历，
//!   向上回溯以迭代方式进行，不依赖宿主树深度保证。
//! - 白名单命中即短路：位于白名单注解实参位置的字面量不进入黑名单匹配。
//! - 黑名单匹配采用 ASCII 大小写不敏感的 Aho-Corasick 自动机，结果与宿主
//!   系统 locale 无关；每个节点至多产出一条诊断。
//! - 诊断的元数据文案（id/标题/消息模板/描述）由外部在构造期注入，
//!   本库不做任何资源解析。

// 模块化拆分：小文件、私有模块 + 精选重导出
mod descriptor;
mod diagnostics;
mod driver;
mod error;
mod matcher;
mod rule;
mod syntax;
mod whitelist;

// 对外暴露的稳定 API
pub use descriptor::{RuleDescriptor, Severity, CATEGORY_HARDCODE, DEFAULT_RULE_ID};
pub use diagnostics::{Diagnostic, DiagnosticSink};
pub use driver::{Analysis, AnalysisStats};
pub use error::RuleError;
pub use matcher::{SchemeBlacklist, DEFAULT_SCHEME_BLACKLIST};
pub use rule::{RuleConfig, UrlHardcodeRule};
pub use syntax::{Ancestors, NodeId, NodeKind, NodeRef, Span, SyntaxTree};
pub use whitelist::{AttributeWhitelist, DEFAULT_ATTRIBUTE_WHITELIST};
