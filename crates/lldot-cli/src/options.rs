//! Layout options shared by the command line and library callers.

use clap::Args;

use lldot_render::{DEFAULT_RANK_SEPARATION, DotOptions};

/// Header layout flags.
#[derive(Args, Debug, Clone, Default)]
pub struct LayoutOptions {
    /// Lay ranks out top to bottom instead of left to right.
    #[arg(long = "top-to-bottom")]
    pub top_to_bottom: bool,

    /// Value written into the `ranksep` attribute (default: "1.0 equally").
    #[arg(long = "ranksep", value_name = "VALUE", conflicts_with = "no_ranksep")]
    pub rank_separation: Option<String>,

    /// Leave the `ranksep` attribute out.
    #[arg(long = "no-ranksep")]
    pub no_ranksep: bool,
}

impl LayoutOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_top_to_bottom(mut self, top_to_bottom: bool) -> Self {
        self.top_to_bottom = top_to_bottom;
        self
    }

    pub fn with_rank_separation(mut self, rank_separation: Option<String>) -> Self {
        self.rank_separation = rank_separation;
        self
    }

    pub fn with_no_ranksep(mut self, no_ranksep: bool) -> Self {
        self.no_ranksep = no_ranksep;
        self
    }

    pub fn dot_options(&self) -> DotOptions {
        let rank_separation = if self.no_ranksep {
            None
        } else {
            Some(
                self.rank_separation
                    .clone()
                    .unwrap_or_else(|| DEFAULT_RANK_SEPARATION.to_string()),
            )
        };
        DotOptions::new()
            .with_left_to_right(!self.top_to_bottom)
            .with_rank_separation(rank_separation)
    }
}
