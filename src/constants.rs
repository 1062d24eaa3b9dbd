//! Application-wide constants
//!
//! This module contains the magic numbers and string literals used throughout
//! the application, providing a single source of truth for constant values.

/// Settings storage constants
pub mod storage {
    /// Directory name under the platform config dir
    pub const APP_DIR: &str = "startdeck";

    /// Fixed key the configuration record is stored under
    pub const CONFIG_KEY: &str = "startdeck-config";

    /// File extension used by file-backed storage (one file per key)
    pub const FILE_EXTENSION: &str = "json";
}

/// Built-in defaults for the configuration record
pub mod defaults {
    /// Default font family
    pub const FONT: &str = "Inter";

    /// Default background blur radius in pixels
    pub const BLUR_PX: u32 = 20;

    /// Particle effect enabled by default
    pub const PARTICLES: bool = true;
}

/// Settings control limits
pub mod limits {
    /// Smallest blur the slider offers
    pub const BLUR_MIN_PX: u32 = 0;

    /// Largest blur the slider offers
    pub const BLUR_MAX_PX: u32 = 40;
}

/// Outbound search
pub mod search {
    /// Search engine endpoint, the query goes into the `q` parameter
    pub const ENGINE_URL: &str = "https://www.google.com/search";

    /// Query parameter name
    pub const QUERY_PARAM: &str = "q";
}

/// Periodic refresh intervals
pub mod timing {
    use std::time::Duration;

    /// Clock and date refresh
    pub const CLOCK_TICK: Duration = Duration::from_secs(1);

    /// Elapsed-minutes refresh
    pub const MINUTES_TICK: Duration = Duration::from_secs(60);

    /// Milliseconds per displayed minute
    pub const MS_PER_MINUTE: u128 = 60_000;
}

/// Clock formatting (chrono strftime patterns)
pub mod clock {
    pub const TIME_FORMAT: &str = "%H:%M:%S";
    pub const DATE_FORMAT: &str = "%A, %B %-d, %Y";
}
