//! 规则本体：节点选择 + 白名单短路 + 黑名单匹配的编排
//!
//! 两个入口均为纯函数：构造后规则不可变（Send + Sync），宿主可跨树、
//! 跨节点并发调用；同一节点重复检查产出完全相同的结果。

use tracing::trace;

use crate::descriptor::RuleDescriptor;
use crate::diagnostics::Diagnostic;
use crate::error::RuleError;
use crate::matcher::{SchemeBlacklist, DEFAULT_SCHEME_BLACKLIST};
use crate::syntax::{NodeKind, NodeRef};
use crate::whitelist::{
    is_argument_of_whitelisted_attribute, AttributeWhitelist, DEFAULT_ATTRIBUTE_WHITELIST,
};

/// 规则配置：全部列表与文案在构造期注入，便于测试替换小型夹具
#[derive(Debug, Clone)]
pub struct RuleConfig {
    pub descriptor: RuleDescriptor,
    pub scheme_blacklist: Vec<String>,
    pub attribute_whitelist: Vec<String>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            descriptor: RuleDescriptor::default(),
            scheme_blacklist: DEFAULT_SCHEME_BLACKLIST
                .iter()
                .map(|s| s.to_string())
                .collect(),
            attribute_whitelist: DEFAULT_ATTRIBUTE_WHITELIST
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// 硬编码 URL 检测规则
#[derive(Debug)]
pub struct UrlHardcodeRule {
    descriptor: RuleDescriptor,
    blacklist: SchemeBlacklist,
    whitelist: AttributeWhitelist,
}

impl UrlHardcodeRule {
    pub fn new(config: RuleConfig) -> Result<Self, RuleError> {
        if config.descriptor.id.trim().is_empty() {
            return Err(RuleError::EmptyRuleId);
        }
        let blacklist = SchemeBlacklist::new(&config.scheme_blacklist)?;
        let whitelist = AttributeWhitelist::new(&config.attribute_whitelist);
        Ok(Self { descriptor: config.descriptor, blacklist, whitelist })
    }

    pub fn descriptor(&self) -> &RuleDescriptor {
        &self.descriptor
    }

    /// 检查独立字符串字面量节点；其他种类的节点直接放行
    pub fn examine_literal(&self, node: NodeRef<'_>) -> Option<Diagnostic> {
        if node.kind() != NodeKind::StringLiteral {
            return None;
        }
        self.examine(node)
    }

    /// 检查插值字符串的字面文本段；表达式洞是独立节点，不在此处理
    pub fn examine_interpolated_segment(&self, node: NodeRef<'_>) -> Option<Diagnostic> {
        if node.kind() != NodeKind::InterpolatedStringText {
            return None;
        }
        self.examine(node)
    }

    /// 白名单短路在前，黑名单匹配在后；每个节点至多一条诊断
    fn examine(&self, node: NodeRef<'_>) -> Option<Diagnostic> {
        if is_argument_of_whitelisted_attribute(node, &self.whitelist) {
            return None;
        }
        let text = node.text_value()?;
        let scheme = self.blacklist.first_hit(text)?;
        trace!(scheme, "blacklist hit in literal text");
        Some(Diagnostic::from_descriptor(&self.descriptor, node.span(), text))
    }
}

impl Default for UrlHardcodeRule {
    fn default() -> Self {
        // 内置常量已知合法
        Self::new(RuleConfig::default()).expect("built-in rule config is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{Span, SyntaxTree};

    #[test]
    fn mismatched_kind_yields_none() {
        let rule = UrlHardcodeRule::default();
        let mut tree = SyntaxTree::new();
        let lit = tree.add_string_literal(None, Span::new(0, 10), "http://x");

        // 字面量节点交给插值入口：种类不符，放行
        assert!(rule.examine_interpolated_segment(tree.get(lit)).is_none());
        assert!(rule.examine_literal(tree.get(lit)).is_some());
    }

    #[test]
    fn custom_config_lists_are_honored() {
        let config = RuleConfig {
            scheme_blacklist: vec!["gopher:".to_string()],
            attribute_whitelist: vec!["EndpointAttribute".to_string()],
            ..RuleConfig::default()
        };
        let rule = UrlHardcodeRule::new(config).unwrap();

        let mut tree = SyntaxTree::new();
        let hit = tree.add_string_literal(None, Span::new(0, 12), "gopher://old");
        let miss = tree.add_string_literal(None, Span::new(13, 25), "http://new");

        assert!(rule.examine_literal(tree.get(hit)).is_some());
        assert!(rule.examine_literal(tree.get(miss)).is_none());
    }

    #[test]
    fn empty_rule_id_is_rejected() {
        let mut config = RuleConfig::default();
        config.descriptor.id = "  ".to_string();
        assert!(matches!(UrlHardcodeRule::new(config), Err(RuleError::EmptyRuleId)));
    }
}
