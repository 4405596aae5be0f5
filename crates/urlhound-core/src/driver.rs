//! 宿主侧调度器：按文档顺序分发已注册的两类节点
//!
//! 稳定性保证：节点按 id 升序（即构建时的文档顺序）访问，诊断按产出
//! 顺序上报；同一棵树重复运行得到完全相同的诊断序列。

use tracing::debug;

use crate::diagnostics::DiagnosticSink;
use crate::rule::UrlHardcodeRule;
use crate::syntax::{NodeKind, SyntaxTree};

/// 单次树遍历的统计信息
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisStats {
    pub nodes_visited: usize,
    pub candidates_examined: usize,
    pub diagnostics_reported: usize,
}

/// 针对单条规则的分析驱动
pub struct Analysis<'r> {
    rule: &'r UrlHardcodeRule,
}

impl<'r> Analysis<'r> {
    pub fn new(rule: &'r UrlHardcodeRule) -> Self {
        Self { rule }
    }

    /// 遍历整棵树，把两类已注册节点交给对应入口，违例上报给 sink
    pub fn run(&self, tree: &SyntaxTree, sink: &mut dyn DiagnosticSink) -> AnalysisStats {
        let mut stats = AnalysisStats::default();

        for node in tree.iter() {
            stats.nodes_visited += 1;
            let produced = match node.kind() {
                NodeKind::StringLiteral => {
                    stats.candidates_examined += 1;
                    self.rule.examine_literal(node)
                }
                NodeKind::InterpolatedStringText => {
                    stats.candidates_examined += 1;
                    self.rule.examine_interpolated_segment(node)
                }
                _ => None,
            };
            if let Some(diagnostic) = produced {
                debug!(
                    rule = %diagnostic.rule_id,
                    start = diagnostic.span.start,
                    end = diagnostic.span.end,
                    "diagnostic reported"
                );
                stats.diagnostics_reported += 1;
                sink.report(diagnostic);
            }
        }

        stats
    }
}
