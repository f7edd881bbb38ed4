//! Violation kinds and the per-file reporter shared by the validators.

use brace_lint_core::{
    FileContext, Label, Node, Severity, SourceTree, Suggestion, TextEdit, TokenId, Violation,
};

use super::policy::StylePolicy;
use super::{CODE, NAME};

/// The distinct placement problems this rule reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// Opening brace is not on the controlling statement's line.
    NextLineOpen,
    /// Opening brace shares the controlling line under Allman.
    SameLineOpen,
    /// Block content starts on the opening brace's line.
    BlockSameLine,
    /// Closing brace shares a line with the preceding content.
    SingleLineClose,
    /// Closing brace and continuation keyword are on separate lines.
    NextLineClose,
    /// Closing brace and continuation keyword share a line.
    SameLineClose,
    /// A complex `else if` chain is visually dense.
    DenseElseIfChain,
}

impl ViolationKind {
    /// Stable identifier, used as [`Violation::kind`].
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::NextLineOpen => "next-line-open",
            Self::SameLineOpen => "same-line-open",
            Self::BlockSameLine => "block-same-line",
            Self::SingleLineClose => "single-line-close",
            Self::NextLineClose => "next-line-close",
            Self::SameLineClose => "same-line-close",
            Self::DenseElseIfChain => "dense-else-if-chain",
        }
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::NextLineOpen => "Opening brace must follow the controlling statement on the same line",
            Self::SameLineOpen => "Opening brace must start its own line",
            Self::BlockSameLine => "Block content must start on its own line",
            Self::SingleLineClose => "Closing brace must start its own line",
            Self::NextLineClose => "Closing brace and keyword must share a line",
            Self::SameLineClose => "Closing brace and keyword must be on separate lines",
            Self::DenseElseIfChain => "Please harmonize/add breaks in complex if/else/if statements",
        }
    }

    fn help(self) -> &'static str {
        match self {
            Self::NextLineOpen | Self::NextLineClose => "Join the two lines",
            Self::SameLineOpen | Self::SingleLineClose => "Insert a line break before the brace",
            Self::BlockSameLine | Self::SameLineClose => "Insert a line break after the brace",
            Self::DenseElseIfChain => {
                "Put each `}` and the following `else` on separate lines throughout the chain"
            }
        }
    }
}

/// Collects violations for one file.
pub(crate) struct Reporter<'a> {
    pub(crate) ctx: &'a FileContext<'a>,
    pub(crate) source: &'a SourceTree,
    pub(crate) policy: StylePolicy,
    severity: Severity,
    violations: Vec<Violation>,
}

impl<'a> Reporter<'a> {
    pub(crate) fn new(
        ctx: &'a FileContext<'a>,
        source: &'a SourceTree,
        policy: StylePolicy,
        severity: Severity,
    ) -> Self {
        Self {
            ctx,
            source,
            policy,
            severity,
            violations: Vec::new(),
        }
    }

    /// Reports a violation anchored on a token, with an optional fix.
    pub(crate) fn report_token(
        &mut self,
        kind: ViolationKind,
        anchor: TokenId,
        fix: Option<TextEdit>,
    ) {
        let location = self.ctx.location_of(self.source.token(anchor));
        let suggestion = match fix {
            Some(edit) => Suggestion::with_fix(kind.help(), edit),
            None => Suggestion::new(format!("{} (manual fix required)", kind.help())),
        };
        self.violations.push(
            Violation::new(CODE, NAME, self.severity, location, kind.message())
                .with_kind(kind.id())
                .with_suggestion(suggestion),
        );
    }

    /// Reports a violation covering a whole node; never fixable.
    pub(crate) fn report_node(&mut self, kind: ViolationKind, node: Node<'_>, at: TokenId) {
        let location = self
            .ctx
            .location_for_range(node.start_byte(), node.end_byte());
        let label = Label::new(
            self.ctx.location_of(self.source.token(at)),
            "`}` and `else` share this line",
        );
        self.violations.push(
            Violation::new(CODE, NAME, self.severity, location, kind.message())
                .with_kind(kind.id())
                .with_suggestion(Suggestion::new(kind.help()))
                .with_label(label),
        );
    }

    pub(crate) fn finish(self) -> Vec<Violation> {
        self.violations
    }
}
