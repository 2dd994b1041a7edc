//! Selection of exactly one layout strategy from flat options.

use serde::{Deserialize, Serialize};

use crate::layout::{ArenaParams, ColumnParams, LayoutStrategy, DEFAULT_MAX_ATTEMPTS};

/// Invalid layout selection or parameter.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("please specify a layout with either --arena-number or --column-number")]
    NoLayout,
    #[error(
        "please specify either a column or an arena layout \
         (got --column-number={column_number} and --arena-number={arena_number})"
    )]
    BothLayouts {
        column_number: usize,
        arena_number: usize,
    },
    #[error("invalid {name}: {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Flat layout options as they arrive from the command line or a config file.
///
/// `column_number` and `arena_number` use `0` for "disabled"; exactly one of
/// them must be non-zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    pub column_number: usize,
    pub arena_number: usize,
    /// Gap between tags in column layout, mm.
    pub tag_border: f64,
    /// Gap between columns / families in column layout, mm.
    pub family_margin: f64,
    pub max_attempts: usize,
    pub seed: Option<u64>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            column_number: 0,
            arena_number: 0,
            tag_border: 0.2,
            family_margin: 2.0,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
        }
    }
}

impl LayoutOptions {
    /// Resolve the options into the single active strategy.
    pub fn strategy(&self) -> Result<LayoutStrategy, ConfigError> {
        match (self.column_number, self.arena_number) {
            (0, 0) => Err(ConfigError::NoLayout),
            (0, count) => {
                if self.max_attempts == 0 {
                    return Err(ConfigError::InvalidParameter {
                        name: "max-attempts",
                        value: "0".to_string(),
                        reason: "must be at least 1",
                    });
                }
                Ok(LayoutStrategy::Arena(ArenaParams {
                    count,
                    max_attempts: self.max_attempts,
                    seed: self.seed,
                }))
            }
            (columns, 0) => {
                check_gap("individual-tag-border", self.tag_border)?;
                check_gap("family-margin", self.family_margin)?;
                Ok(LayoutStrategy::Column(ColumnParams {
                    columns,
                    tag_border: self.tag_border,
                    family_margin: self.family_margin,
                }))
            }
            (column_number, arena_number) => Err(ConfigError::BothLayouts {
                column_number,
                arena_number,
            }),
        }
    }
}

fn check_gap(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter {
            name,
            value: value.to_string(),
            reason: "must be a finite, non-negative length",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(column_number: usize, arena_number: usize) -> LayoutOptions {
        LayoutOptions {
            column_number,
            arena_number,
            ..LayoutOptions::default()
        }
    }

    #[test]
    fn exactly_one_layout_must_be_selected() {
        assert_eq!(options(0, 0).strategy(), Err(ConfigError::NoLayout));
        assert_eq!(
            options(4, 10).strategy(),
            Err(ConfigError::BothLayouts {
                column_number: 4,
                arena_number: 10
            })
        );
    }

    #[test]
    fn arena_selection_carries_budget_and_seed() {
        let opts = LayoutOptions {
            seed: Some(9),
            max_attempts: 50,
            ..options(0, 10)
        };
        assert_eq!(
            opts.strategy(),
            Ok(LayoutStrategy::Arena(ArenaParams {
                count: 10,
                max_attempts: 50,
                seed: Some(9)
            }))
        );
    }

    #[test]
    fn column_selection_carries_gaps() {
        let LayoutStrategy::Column(params) = options(3, 0).strategy().expect("strategy") else {
            panic!("expected column layout");
        };
        assert_eq!(params.columns, 3);
        assert_eq!(params.tag_border, 0.2);
        assert_eq!(params.family_margin, 2.0);
    }

    #[test]
    fn negative_gaps_and_zero_budget_are_rejected() {
        let opts = LayoutOptions {
            family_margin: -1.0,
            ..options(2, 0)
        };
        assert!(matches!(
            opts.strategy(),
            Err(ConfigError::InvalidParameter {
                name: "family-margin",
                ..
            })
        ));
        let opts = LayoutOptions {
            max_attempts: 0,
            ..options(0, 2)
        };
        assert!(matches!(
            opts.strategy(),
            Err(ConfigError::InvalidParameter { .. })
        ));
    }
}
