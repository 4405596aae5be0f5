//! 白名单解析器（注解实参位置判定）
//!
//! 判定流程：
//! 1. 直接父节点必须是注解实参节点，否则不在白名单范围内；
//! 2. 从实参节点向上回溯到最近的注解应用节点；找不到（异常树形）按
//!   “未白名单”处理，宁可多报不可漏报；
//! 3. 提取注解引用的简单类型名（去限定前缀与泛型实参），补全惯用的
//!    `Attribute` 后缀后做精确（大小写敏感）集合匹配。
//!
//! 回溯止于第一个注解应用节点：同一声明上堆叠的其他注解不影响判定。

use std::collections::HashSet;

use crate::syntax::{NodeKind, NodeRef};

/// 内置的注解类型名白名单：这些注解的实参本就应当包含 URL
pub const DEFAULT_ATTRIBUTE_WHITELIST: &[&str] = &[
    "WebServiceBindingAttribute",
    "DefaultSettingValueAttribute",
    "XmlTypeAttribute",
    "SoapDocumentMethodAttribute",
    "SoapRpcMethodAttribute",
    "SoapTypeAttribute",
];

/// 不可变的注解类型名集合
#[derive(Debug, Clone)]
pub struct AttributeWhitelist {
    names: HashSet<String>,
}

impl AttributeWhitelist {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names.into_iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }

    /// 精确匹配规范化后的类型名
    pub fn contains(&self, canonical_name: &str) -> bool {
        self.names.contains(canonical_name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for AttributeWhitelist {
    fn default() -> Self {
        Self::new(DEFAULT_ATTRIBUTE_WHITELIST.iter().copied())
    }
}

/// 节点是否处于白名单注解的实参位置
pub(crate) fn is_argument_of_whitelisted_attribute(
    node: NodeRef<'_>,
    whitelist: &AttributeWhitelist,
) -> bool {
    let Some(parent) = node.parent() else {
        return false;
    };
    if parent.kind() != NodeKind::AttributeArgument {
        return false;
    }
    let Some(attribute) = walk_to_attribute(parent) else {
        return false;
    };
    match attribute.attribute_name() {
        Some(name) => whitelist.contains(&canonical_attribute_name(name)),
        None => false,
    }
}

/// 自实参节点向上回溯到最近的注解应用节点
fn walk_to_attribute<'a>(argument: NodeRef<'a>) -> Option<NodeRef<'a>> {
    argument.ancestors().find(|n| n.kind() == NodeKind::Attribute)
}

/// 规范化注解类型名：取限定名末段，去掉泛型实参，补全 `Attribute` 后缀
pub(crate) fn canonical_attribute_name(raw: &str) -> String {
    let simple = raw.rsplit("::").next().unwrap_or(raw);
    let simple = simple.rsplit('.').next().unwrap_or(simple);
    let simple = simple.split('<').next().unwrap_or(simple).trim();
    if simple.ends_with("Attribute") {
        simple.to_string()
    } else {
        format!("{simple}Attribute")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{Span, SyntaxTree};

    #[test]
    fn canonical_name_appends_conventional_suffix() {
        assert_eq!(canonical_attribute_name("WebServiceBinding"), "WebServiceBindingAttribute");
        assert_eq!(
            canonical_attribute_name("WebServiceBindingAttribute"),
            "WebServiceBindingAttribute"
        );
    }

    #[test]
    fn canonical_name_strips_qualifiers_and_generics() {
        assert_eq!(canonical_attribute_name("System.Xml.XmlType"), "XmlTypeAttribute");
        assert_eq!(canonical_attribute_name("bindings::SoapType"), "SoapTypeAttribute");
        assert_eq!(canonical_attribute_name("Typed<string>"), "TypedAttribute");
    }

    #[test]
    fn literal_outside_argument_position_is_not_whitelisted() {
        let whitelist = AttributeWhitelist::default();
        let mut tree = SyntaxTree::new();
        let root = tree.add(NodeKind::Other, None, Span::new(0, 40));
        let lit = tree.add_string_literal(Some(root), Span::new(0, 20), "https://example.com");

        assert!(!is_argument_of_whitelisted_attribute(tree.get(lit), &whitelist));
    }

    #[test]
    fn argument_of_listed_attribute_is_whitelisted() {
        let whitelist = AttributeWhitelist::default();
        let mut tree = SyntaxTree::new();
        let list = tree.add(NodeKind::AttributeList, None, Span::new(0, 50));
        let attr = tree.add_attribute(Some(list), Span::new(1, 49), "DefaultSettingValue");
        let args = tree.add(NodeKind::AttributeArgumentList, Some(attr), Span::new(20, 49));
        let arg = tree.add(NodeKind::AttributeArgument, Some(args), Span::new(21, 48));
        let lit = tree.add_string_literal(Some(arg), Span::new(21, 48), "https://example.com");

        assert!(is_argument_of_whitelisted_attribute(tree.get(lit), &whitelist));
    }

    #[test]
    fn argument_of_unlisted_attribute_is_not_whitelisted() {
        let whitelist = AttributeWhitelist::default();
        let mut tree = SyntaxTree::new();
        let attr = tree.add_attribute(None, Span::new(0, 40), "Obsolete");
        let args = tree.add(NodeKind::AttributeArgumentList, Some(attr), Span::new(10, 40));
        let arg = tree.add(NodeKind::AttributeArgument, Some(args), Span::new(11, 39));
        let lit = tree.add_string_literal(Some(arg), Span::new(11, 39), "http://x");

        assert!(!is_argument_of_whitelisted_attribute(tree.get(lit), &whitelist));
    }

    #[test]
    fn malformed_ancestry_falls_through_to_not_whitelisted() {
        // 实参节点之上没有注解应用节点
        let whitelist = AttributeWhitelist::default();
        let mut tree = SyntaxTree::new();
        let root = tree.add(NodeKind::Other, None, Span::new(0, 30));
        let arg = tree.add(NodeKind::AttributeArgument, Some(root), Span::new(0, 30));
        let lit = tree.add_string_literal(Some(arg), Span::new(1, 29), "http://x");

        assert!(!is_argument_of_whitelisted_attribute(tree.get(lit), &whitelist));
    }
}
