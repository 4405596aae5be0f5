//! 诊断记录与上报接口
use serde::Serialize;

use crate::descriptor::{RuleDescriptor, Severity};
use crate::syntax::Span;

/// 单条诊断：每个确认违例的节点恰好产出一条，所有权在上报时移交给 sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub rule_id: String,
    pub severity: Severity,
    pub category: String,
    pub message: String,
    pub span: Span,
}

impl Diagnostic {
    /// 由描述符 + 节点区间 + 命中文本组装诊断
    pub(crate) fn from_descriptor(descriptor: &RuleDescriptor, span: Span, value: &str) -> Self {
        Self {
            rule_id: descriptor.id.clone(),
            severity: descriptor.severity,
            category: descriptor.category.clone(),
            message: descriptor.format_message(value),
            span,
        }
    }
}

/// 宿主侧诊断汇集点；投递顺序与线程安全由宿主负责
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
