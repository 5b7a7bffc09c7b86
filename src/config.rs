//! Config for the match runner behaviors
//!
//! Configuration can be created programmatically using [`MatchConfig::new()`]
//! or by reading environment variables using [`MatchConfig::from_env()`].
//!
//! # Environment Variables
//!
//! The following environment variables can be used to override configuration
//! values. All values are optional and case-insensitive.
//!
//! - `NOUGHTS_BOARD_SIZE` — Side length of the board (default: `3`)
//! - `NOUGHTS_SHUFFLE` — Set to `"true"` to shuffle turn order at the start of
//!   each match (default: `false`)
//! - `NOUGHTS_LOG` — Set to `"true"` to enable logging to a file (default:
//!   `false`)

/// Configuration for match runner behaviors.
#[derive(Debug, Clone, Copy)]
pub struct MatchConfig {
    pub(crate) board_size: usize,
    pub(crate) shuffle: bool,
    pub(crate) log: bool,
}

impl MatchConfig {
    /// Create a new configuration with default parameters.
    ///
    /// By default:
    /// - The board is the classic 3x3.
    /// - Turn order follows the order players were supplied in.
    /// - Logging to file is disabled.
    pub fn new() -> Self {
        Self {
            board_size: 3,
            shuffle: false,
            log: false,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// The following environment variables are recognized:
    /// - `NOUGHTS_BOARD_SIZE`: side length of the board (default: `3`)
    /// - `NOUGHTS_SHUFFLE`: if set to `"true"`, shuffles turn order (default: `false`)
    /// - `NOUGHTS_LOG`: if set to `"true"`, enables logging to file (default: `false`)
    ///
    /// Any other value (including unset) will result in using the default
    /// value for each field.
    pub fn from_env() -> Self {
        fn get_env_flag(var: &str, default: bool) -> bool {
            match std::env::var(var) {
                Ok(val) => val.eq_ignore_ascii_case("true"),
                Err(_) => default,
            }
        }

        let board_size = std::env::var("NOUGHTS_BOARD_SIZE")
            .ok()
            .and_then(|val| val.parse().ok())
            .filter(|&n| n >= 1)
            .unwrap_or(3);

        Self {
            board_size,
            shuffle: get_env_flag("NOUGHTS_SHUFFLE", false),
            log: get_env_flag("NOUGHTS_LOG", false),
        }
    }

    /// Set the side length of the board.
    ///
    /// # Panics
    /// Panics if `value` is zero.
    pub fn with_board_size(mut self, value: usize) -> Self {
        assert!(value >= 1, "board side length must be at least 1");
        self.board_size = value;
        self
    }

    /// Enable or disable shuffling the player turn order at the start of each
    /// match. Shuffling changes who moves first, never which side a player
    /// holds.
    pub fn with_shuffle(mut self, value: bool) -> Self {
        self.shuffle = value;
        self
    }

    /// Enable or disable logging to file.
    pub fn with_log(mut self, value: bool) -> Self {
        self.log = value;
        self
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new()
    }
}
