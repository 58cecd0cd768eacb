/// Constants used by pairwise transition extraction.
pub mod pairwise {
    /// Field holding the state a record moved away from.
    pub const FIELD_OLD_VALUE: &str = "old_value";
    /// Field holding the state a record moved into.
    pub const FIELD_NEW_VALUE: &str = "new_value";
    /// Label substituted when a pairwise cell is absent or blank.
    pub const MISSING_VALUE_LABEL: &str = "(missing)";
}

/// Constants used by chronological stage-column selection.
pub mod chronological {
    /// Field names never treated as stage columns.
    pub const RESERVED_FIELDS: [&str; 3] = ["id", "name", "description"];
}

/// Constants used by spreadsheet serial-date conversion.
pub mod epoch {
    /// Year of the serial-date reference day (1899-12-30, the Lotus-compatible base).
    pub const SERIAL_EPOCH_YEAR: i32 = 1899;
    /// Month of the serial-date reference day.
    pub const SERIAL_EPOCH_MONTH: u32 = 12;
    /// Day-of-month of the serial-date reference day.
    pub const SERIAL_EPOCH_DAY: u32 = 30;
    /// Seconds per serial-date day (fractional serials encode time of day).
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
    /// Year substituted when a text cell names only a month and day.
    pub const DEFAULT_TEXT_YEAR: i32 = 2000;
}

/// Constants used by text timestamp parsing.
pub mod timestamp {
    /// Cell texts treated as null-like (case-insensitive) and skipped.
    pub const NULL_LIKE: [&str; 4] = ["null", "none", "n/a", "na"];
    /// Datetime layouts tried in order against text cells.
    pub const DATETIME_LAYOUTS: [&str; 3] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%m/%d/%Y %H:%M:%S",
    ];
    /// Date-only layouts tried in order against text cells.
    pub const DATE_LAYOUTS: [&str; 7] = [
        "%Y-%m-%d",
        "%m/%d/%Y",
        "%m-%d-%Y",
        "%d %b %Y",
        "%b %d, %Y",
        "%b %d %Y",
        "%B %d, %Y",
    ];
}
