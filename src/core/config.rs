//! Engine configuration.
//!
//! Every rule constant is provided at construction to support rule
//! variants - nothing is hardcoded. The defaults reproduce the standard
//! game: a 4x4 grid and 4 attributes (16 pieces).

/// Construction-time rule constants.
#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Grid width in squares.
    pub board_width: i32,
    /// Grid height in squares.
    pub board_height: i32,
    /// Attributes per piece; the pool holds `2^attribute_count` pieces.
    pub attribute_count: usize,
    /// Minimum seconds between accepted discrete selection steps.
    pub step_interval: f32,
    /// Seconds of inactivity before the engine reports idle.
    pub idle_threshold: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: 4,
            board_height: 4,
            attribute_count: 4,
            step_interval: 0.25,
            idle_threshold: 5.0,
        }
    }
}

impl GameConfig {
    /// The standard game configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grid dimensions.
    #[must_use]
    pub fn with_board_size(mut self, width: i32, height: i32) -> Self {
        assert!(width >= 2 && height >= 2, "Board must be at least 2x2");
        self.board_width = width;
        self.board_height = height;
        self
    }

    /// Set the number of attributes per piece.
    #[must_use]
    pub fn with_attribute_count(mut self, count: usize) -> Self {
        assert!((1..=8).contains(&count), "Attribute count must be 1-8");
        self.attribute_count = count;
        self
    }

    /// Set the step repeat interval in seconds.
    #[must_use]
    pub fn with_step_interval(mut self, seconds: f32) -> Self {
        assert!(seconds >= 0.0, "Step interval must not be negative");
        self.step_interval = seconds;
        self
    }

    /// Set the idle threshold in seconds.
    #[must_use]
    pub fn with_idle_threshold(mut self, seconds: f32) -> Self {
        assert!(seconds > 0.0, "Idle threshold must be positive");
        self.idle_threshold = seconds;
        self
    }

    /// Number of pieces the pool will hold.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        1 << self.attribute_count
    }

    /// Number of squares on the board.
    #[must_use]
    pub fn square_count(&self) -> usize {
        (self.board_width * self.board_height) as usize
    }
}
