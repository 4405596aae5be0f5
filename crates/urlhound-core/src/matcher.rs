//! 黑名单匹配器（scheme 子串的大小写不敏感搜索）
//!
//! 采用 ASCII 大小写不敏感的 Aho-Corasick 自动机做一次扫描即可覆盖全部
//! 条目；黑名单 token 均为 ASCII，因此匹配结果与宿主 locale 无关。
//! 子串不要求前缀锚定，token 出现在文本任意位置均算命中。

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};

use crate::error::RuleError;

/// 内置 scheme 黑名单
pub const DEFAULT_SCHEME_BLACKLIST: &[&str] = &["http:", "https:", "ftp:", "tcp:"];

/// 不可变的 scheme 黑名单自动机（可跨线程共享）
#[derive(Debug)]
pub struct SchemeBlacklist {
    ac: AhoCorasick,
    entries: Vec<String>,
}

impl SchemeBlacklist {
    /// 由条目列表构建自动机；空列表视为配置错误
    pub fn new<I, S>(entries: I) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries: Vec<String> = entries
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect();
        if entries.is_empty() {
            return Err(RuleError::EmptyBlacklist);
        }
        let ac = AhoCorasickBuilder::new()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .build(&entries)?;
        Ok(Self { ac, entries })
    }

    /// 返回文本中最左命中的黑名单条目；空文本永不命中
    pub fn first_hit(&self, text: &str) -> Option<&str> {
        self.ac
            .find(text)
            .map(|m| self.entries[m.pattern().as_usize()].as_str())
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}
