//! 语法树模型（宿主无关的节点句柄）
//!
//! 树由宿主或测试夹具按文档顺序追加构建；节点只记录规则关心的信息：
//! 种类、父节点、源区间、字面量文本值（字面量类节点）、被引用的注解类型名
//! （`Attribute` 节点）。追加式构建保证父节点 id 恒小于子节点 id，
//! 因此向上回溯必然终止。

use serde::Serialize;

/// 源区间（字节偏移，左闭右开）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 节点种类（仅建模本规则需要区分的形状，其余归入 `Other`）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    /// 独立字符串字面量表达式
    StringLiteral,
    /// 插值字符串表达式（容器）
    InterpolatedString,
    /// 插值字符串中的字面文本段（不含表达式洞）
    InterpolatedStringText,
    /// 插值字符串中的表达式洞（结构上独立，规则不访问）
    Interpolation,
    /// 注解应用（携带被引用的类型名）
    Attribute,
    /// 注解实参列表
    AttributeArgumentList,
    /// 单个注解实参
    AttributeArgument,
    /// 声明上的注解列表
    AttributeList,
    /// 其他节点（声明、语句等，规则不关心其内部结构）
    Other,
}

/// 节点 id（树内索引）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    span: Span,
    /// 反转义后的字面量文本值（仅字面量类节点）
    text: Option<String>,
    /// 注解引用的类型名原文（仅 `Attribute` 节点）
    name: Option<String>,
}

/// 追加式语法树竞技场
#[derive(Debug, Default)]
pub struct SyntaxTree {
    nodes: Vec<NodeData>,
}

impl SyntaxTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// 追加一个普通节点；父节点必须已存在于树中
    pub fn add(&mut self, kind: NodeKind, parent: Option<NodeId>, span: Span) -> NodeId {
        self.push(NodeData { kind, parent, span, text: None, name: None })
    }

    /// 追加字符串字面量节点，`text` 为反转义后的值
    pub fn add_string_literal(
        &mut self,
        parent: Option<NodeId>,
        span: Span,
        text: &str,
    ) -> NodeId {
        self.push(NodeData {
            kind: NodeKind::StringLiteral,
            parent,
            span,
            text: Some(text.to_string()),
            name: None,
        })
    }

    /// 追加插值字符串的字面文本段节点
    pub fn add_interpolated_text(
        &mut self,
        parent: Option<NodeId>,
        span: Span,
        text: &str,
    ) -> NodeId {
        self.push(NodeData {
            kind: NodeKind::InterpolatedStringText,
            parent,
            span,
            text: Some(text.to_string()),
            name: None,
        })
    }

    /// 追加注解应用节点，`name` 为源码中引用的类型名原文
    pub fn add_attribute(&mut self, parent: Option<NodeId>, span: Span, name: &str) -> NodeId {
        self.push(NodeData {
            kind: NodeKind::Attribute,
            parent,
            span,
            text: None,
            name: Some(name.to_string()),
        })
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        // 追加式构建的无环保证：父 id 必须小于新节点 id
        if let Some(p) = data.parent {
            debug_assert!(p.0 < self.nodes.len(), "parent node must be added first");
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(data);
        id
    }

    /// 取节点句柄（id 必须来自本树的 add 系列方法）
    pub fn get(&self, id: NodeId) -> NodeRef<'_> {
        NodeRef { tree: self, id }
    }

    /// 按文档顺序（即 id 升序）遍历全部节点
    pub fn iter(&self) -> impl Iterator<Item = NodeRef<'_>> {
        (0..self.nodes.len()).map(move |i| NodeRef { tree: self, id: NodeId(i) })
    }
}

/// 借用的节点句柄（Copy，可廉价传递）
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a SyntaxTree,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub fn id(self) -> NodeId {
        self.id
    }

    pub fn kind(self) -> NodeKind {
        self.data().kind
    }

    pub fn span(self) -> Span {
        self.data().span
    }

    pub fn parent(self) -> Option<NodeRef<'a>> {
        self.data().parent.map(|id| NodeRef { tree: self.tree, id })
    }

    /// 自父节点起的向上回溯迭代器，遇到根（无父）即终止
    pub fn ancestors(self) -> Ancestors<'a> {
        Ancestors { next: self.parent() }
    }

    /// 反转义后的字面量文本值（非字面量类节点为 None）
    pub fn text_value(self) -> Option<&'a str> {
        self.data().text.as_deref()
    }

    /// 注解引用的类型名原文（非 `Attribute` 节点为 None）
    pub fn attribute_name(self) -> Option<&'a str> {
        self.data().name.as_deref()
    }

    fn data(self) -> &'a NodeData {
        &self.tree.nodes[self.id.0]
    }
}

impl std::fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("kind", &self.kind())
            .field("span", &self.span())
            .finish()
    }
}

/// 向上回溯迭代器
pub struct Ancestors<'a> {
    next: Option<NodeRef<'a>>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent();
        Some(current)
    }
}
