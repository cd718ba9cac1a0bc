//! Draw configuration.

use super::errors::{DrawError, DrawResult};
use serde::{Deserialize, Serialize};

/// Maximum number of tables a single round may use
pub const DEFAULT_MAX_TABLES: usize = 25;

/// Preferred number of seats per table
pub const DEFAULT_TABLE_SIZE: usize = 4;

/// Rounds played in every block
pub const DEFAULT_ROUNDS_PER_BLOCK: u32 = 3;

/// Randomized construction attempts per round before settling for the best found
pub const DEFAULT_MAX_ATTEMPTS: u32 = 200;

/// Local swap-improvement passes applied to each attempt
pub const DEFAULT_SWAP_PASSES: u32 = 8;

/// Draw configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawConfig {
    /// Maximum tables per round (default: 25)
    pub max_tables: usize,

    /// Preferred seats per table (default: 4); tables grow by one seat to absorb remainders
    pub table_size: usize,

    /// Rounds per block (default: 3)
    pub rounds_per_block: u32,

    /// Retry budget per round (default: 200)
    pub max_attempts: u32,

    /// Swap-improvement passes per attempt (default: 8, 0 disables)
    pub swap_passes: u32,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            max_tables: DEFAULT_MAX_TABLES,
            table_size: DEFAULT_TABLE_SIZE,
            rounds_per_block: DEFAULT_ROUNDS_PER_BLOCK,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            swap_passes: DEFAULT_SWAP_PASSES,
        }
    }
}

impl DrawConfig {
    /// Validate configuration
    pub fn validate(&self) -> DrawResult<()> {
        if self.max_tables == 0 {
            return Err(DrawError::InvalidConfig(
                "Max tables must be at least 1".to_string(),
            ));
        }

        if self.table_size < 2 {
            return Err(DrawError::InvalidConfig(
                "Table size must be at least 2".to_string(),
            ));
        }

        if self.rounds_per_block == 0 {
            return Err(DrawError::InvalidConfig(
                "Rounds per block must be at least 1".to_string(),
            ));
        }

        if self.max_attempts == 0 {
            return Err(DrawError::InvalidConfig(
                "Max attempts must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Fewest active competitors a category needs before it can be drawn
    pub fn min_competitors(&self) -> usize {
        self.table_size
    }
}
