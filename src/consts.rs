pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains the fixed tables and limits used by the calculator,
    //! the input form and the dashboard, organized by functional area.

    // =============================================================================
    // ACTIVITY LOG CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    // =============================================================================
    // NUMBER SETS
    // =============================================================================

    /// Numbers that are never reduced further and always highlighted as master frequencies.
    pub const MASTER_NUMBERS: [u32; 9] = [11, 22, 33, 44, 55, 66, 77, 88, 99];

    /// Karmic debt numbers.
    pub const KARMIC_NUMBERS: [u32; 4] = [13, 14, 16, 19];

    /// Single digits considered strong frequencies.
    pub const STRONG_NUMBERS: [u32; 4] = [1, 5, 8, 9];

    /// Challenge digits considered weak/blocking frequencies.
    pub const WEAK_CHALLENGE_NUMBERS: [u32; 2] = [2, 7];

    // =============================================================================
    // INPUT FORM CONFIGURATION
    // =============================================================================

    /// Input widget bounds and defaults
    pub mod form {
        pub const DAY_MIN: i32 = 1;
        pub const DAY_MAX: i32 = 31;
        pub const MONTH_MIN: i32 = 1;
        pub const MONTH_MAX: i32 = 12;
        /// The upper year bound is the current calendar year.
        pub const YEAR_MIN: i32 = 1900;

        pub const DEFAULT_DAY: u32 = 26;
        pub const DEFAULT_MONTH: u32 = 11;
        pub const DEFAULT_YEAR: i32 = 1976;
        pub const DEFAULT_FIRST_NAME: &str = "תומר";
        pub const DEFAULT_LAST_NAME: &str = "נוי";
    }

    // =============================================================================
    // LIFE CYCLE CONFIGURATION
    // =============================================================================

    /// Life cycle boundaries
    pub mod cycles {
        /// The first cycle ends at this age minus the reduced life path digit.
        pub const FIRST_CYCLE_BASE_AGE: u32 = 36;

        /// Length in years of the second and third cycles.
        pub const CYCLE_SPAN_YEARS: u32 = 9;

        /// Labels of the four life periods, in chronological order.
        pub const PERIOD_LABELS: [&str; 4] = [
            "מחזור ראשון",
            "מחזור שני",
            "מחזור שלישי",
            "מחזור רביעי",
        ];
    }

    // =============================================================================
    // CHAKRA CONFIGURATION
    // =============================================================================

    /// Chakra names and their solfeggio frequencies (Hz), root to crown.
    pub mod chakras {
        pub const ROOT: (&str, u32) = ("שורש", 396);
        pub const SACRAL: (&str, u32) = ("סקרל", 417);
        pub const SOLAR_PLEXUS: (&str, u32) = ("מקלעת השמש", 528);
        pub const HEART: (&str, u32) = ("לב", 639);
        pub const THROAT: (&str, u32) = ("גרון", 741);
        pub const THIRD_EYE: (&str, u32) = ("עין שלישית", 852);
        pub const CROWN: (&str, u32) = ("כתר", 963);
    }

    // =============================================================================
    // UI TIMING
    // =============================================================================

    /// How long the splash screen stays up before the dashboard (seconds).
    pub const SPLASH_DURATION_SECS: u64 = 2;

    /// Key event polling interval for the UI loop (milliseconds).
    pub const EVENT_POLL_INTERVAL_MS: u64 = 100;
}
