pub mod cli_consts {
    //! Dashboard configuration constants

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of diagnostic events kept for display.
    pub const MAX_DIAGNOSTIC_EVENTS: usize = 50;

    /// Buffer size of the diagnostic event channel.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Buffer size of the load outcome channel. Outcomes are small and rare.
    pub const OUTCOME_QUEUE_SIZE: usize = 16;

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    pub mod ui {
        use std::time::Duration;

        /// Redraw interval when no input or outcome arrives.
        pub const TICK_INTERVAL_MS: u64 = 100;

        /// Widest bar drawn in the region panel, in cells.
        pub const MAX_BAR_WIDTH: u16 = 24;

        pub const fn tick_interval() -> Duration {
            Duration::from_millis(TICK_INTERVAL_MS)
        }
    }
}
