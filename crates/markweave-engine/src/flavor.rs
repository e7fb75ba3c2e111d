//! Flavors: named, pre-built rule lists.
//!
//! A flavor is the parser's only extensibility surface. The list order IS
//! the dispatch priority; there is no implicit global registry. Dialects
//! substitute, reorder, append, or remove rules and hand the result to
//! [`crate::parse_with`].

use crate::parsing::block::rules::{
    FencedCodeRule, HeadingRule, ImageRule, IndentedCodeRule, ListRule, ParagraphRule, QuoteRule,
    TableRule, ThematicBreakRule,
};
use crate::parsing::block::BlockRule;
use crate::parsing::inline::rules::{
    BoldRule, CodeRule, InlineImageRule, ItalicRule, LinkRule, PlainTextRule, ShortLinkRule,
    StrikeRule, SubscriptRule, SuperscriptRule,
};
use crate::parsing::inline::InlineRule;

/// A named, ordered pair of rule lists.
///
/// Keep a paragraph-style catch-all registered last in the block list: the
/// block engine treats "no rule matched" as a configuration error, and the
/// plain-text terminal plays the same role in the inline list.
pub struct Flavor {
    name: String,
    block_rules: Vec<Box<dyn BlockRule>>,
    inline_rules: Vec<Box<dyn InlineRule>>,
}

impl Flavor {
    /// An empty flavor. Rules are appended in dispatch order.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            block_rules: Vec::new(),
            inline_rules: Vec::new(),
        }
    }

    /// The built-in rule set in its documented priority order.
    #[must_use]
    pub fn standard() -> Self {
        Self::new("standard")
            .with_block_rule(Box::new(HeadingRule))
            .with_block_rule(Box::new(ThematicBreakRule))
            .with_block_rule(Box::new(QuoteRule))
            .with_block_rule(Box::new(ListRule))
            .with_block_rule(Box::new(FencedCodeRule))
            .with_block_rule(Box::new(IndentedCodeRule))
            .with_block_rule(Box::new(TableRule))
            .with_block_rule(Box::new(ImageRule))
            .with_block_rule(Box::new(ParagraphRule))
            .with_inline_rule(Box::new(InlineImageRule))
            .with_inline_rule(Box::new(LinkRule))
            .with_inline_rule(Box::new(ShortLinkRule::new()))
            .with_inline_rule(Box::new(BoldRule::new('*')))
            .with_inline_rule(Box::new(BoldRule::new('_')))
            .with_inline_rule(Box::new(ItalicRule::new('*')))
            .with_inline_rule(Box::new(ItalicRule::new('_')))
            .with_inline_rule(Box::new(StrikeRule))
            .with_inline_rule(Box::new(SubscriptRule))
            .with_inline_rule(Box::new(SuperscriptRule))
            .with_inline_rule(Box::new(CodeRule))
            .with_inline_rule(Box::new(PlainTextRule))
    }

    /// Appends a block rule at the end of the dispatch order.
    #[must_use]
    pub fn with_block_rule(mut self, rule: Box<dyn BlockRule>) -> Self {
        self.block_rules.push(rule);
        self
    }

    /// Appends an inline rule at the end of the dispatch order.
    #[must_use]
    pub fn with_inline_rule(mut self, rule: Box<dyn InlineRule>) -> Self {
        self.inline_rules.push(rule);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn block_rules(&self) -> &[Box<dyn BlockRule>] {
        &self.block_rules
    }

    #[must_use]
    pub fn inline_rules(&self) -> &[Box<dyn InlineRule>] {
        &self.inline_rules
    }
}
