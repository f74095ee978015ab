//! Rendering options.

/// Rank separation used when none is configured.
pub const DEFAULT_RANK_SEPARATION: &str = "1.0 equally";

/// Layout hints written into the document header.
///
/// `overlap`, `splines` and `concentrate` are always emitted; these options
/// only control the orientation variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotOptions {
    /// Lay ranks out left to right (`rankdir="LR"`).
    pub left_to_right: bool,
    /// Value of the `ranksep` attribute; omitted when `None`.
    pub rank_separation: Option<String>,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self {
            left_to_right: true,
            rank_separation: Some(DEFAULT_RANK_SEPARATION.to_string()),
        }
    }
}

impl DotOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with only the fixed attributes.
    pub fn plain() -> Self {
        Self {
            left_to_right: false,
            rank_separation: None,
        }
    }

    pub fn with_left_to_right(mut self, left_to_right: bool) -> Self {
        self.left_to_right = left_to_right;
        self
    }

    pub fn with_rank_separation(mut self, rank_separation: Option<String>) -> Self {
        self.rank_separation = rank_separation;
        self
    }
}
