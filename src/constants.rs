//! Application-wide constants and default values
//!
//! Calendar names, column names and presentation defaults live here so the
//! loader, filter and reporters share one immutable source of truth.

/// Calendar names used for filtering and display
pub mod calendar {
    /// Months that can be selected as a filter, in order (index + 1 = month number)
    pub const FILTER_MONTHS: [&str; 6] = ["January", "February", "March", "April", "May", "June"];

    /// All month names, for rendering derived month numbers
    pub const MONTH_NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];

    /// Weekday names, Monday first (index = weekday number)
    pub const DAY_NAMES: [&str; 7] = [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ];
}

/// Column names in the city CSV files
pub mod columns {
    pub const START_TIME: &str = "Start Time";
    pub const TRIP_DURATION: &str = "Trip Duration";
    pub const START_STATION: &str = "Start Station";
    pub const END_STATION: &str = "End Station";
    pub const USER_TYPE: &str = "User Type";
    pub const GENDER: &str = "Gender";
    pub const BIRTH_YEAR: &str = "Birth Year";

    /// Derived at load time from the start timestamp
    pub const MONTH: &str = "Month";
    pub const DAY_OF_WEEK: &str = "Day of Week";
    pub const HOUR: &str = "Hour";

    /// Columns every city file must carry
    pub const REQUIRED: [&str; 5] = [START_TIME, TRIP_DURATION, START_STATION, END_STATION, USER_TYPE];
}

/// Date/time parsing constants
pub mod datetime {
    /// Accepted layouts for the start timestamp, tried in order
    pub const START_TIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];
}

/// Console presentation defaults
pub mod display {
    /// Width of the dashed separator printed between sections
    pub const SEPARATOR_WIDTH: usize = 40;

    /// Default number of raw rows shown per page
    pub const DEFAULT_PAGE_SIZE: usize = 5;

    /// Upper bound for a configured page size
    pub const MAX_PAGE_SIZE: usize = 100;
}

/// Configuration file paths
pub mod config {
    /// Configuration file name, looked up in the working directory
    pub const CONFIG_FILE: &str = "bikeshare.json";
}
