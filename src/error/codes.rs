/// Error code registry for order-stats
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 2000-2999: Input errors
/// - 3000-3999: Schema errors
/// - 4000-4999: Value errors
/// - 5000-5999: Write errors
/// - 9000-9999: Other errors
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_PARSE_ERROR: u16 = 1002;
    pub const CONFIG_INVALID_VALUE: u16 = 1003;
    pub const CONFIG_PATH_ERROR: u16 = 1004;

    // Input errors (2000-2999)
    pub const INPUT_NOT_FOUND: u16 = 2001;
    pub const INPUT_UNREADABLE: u16 = 2002;
    pub const INPUT_NO_SHEETS: u16 = 2003;
    pub const INPUT_SHEET_NOT_FOUND: u16 = 2004;
    pub const INPUT_UNSUPPORTED_FORMAT: u16 = 2005;

    // Schema errors (3000-3999)
    pub const SCHEMA_MISSING_COLUMN: u16 = 3001;
    pub const SCHEMA_EMPTY_SHEET: u16 = 3002;

    // Value errors (4000-4999)
    pub const VALUE_MISSING: u16 = 4001;
    pub const VALUE_NOT_NUMERIC: u16 = 4002;
    pub const VALUE_BAD_DATE: u16 = 4003;

    // Write errors (5000-5999)
    pub const WRITE_GENERIC: u16 = 5000;
    pub const WRITE_UNSUPPORTED_FORMAT: u16 = 5001;
    pub const WRITE_IO_ERROR: u16 = 5002;

    // Other errors (9000-9999)
    pub const OTHER_OUTPUT_STREAM: u16 = 9001;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        // Configuration errors
        1001 => "Configuration file not found",
        1002 => "Failed to parse configuration",
        1003 => "Invalid value in configuration",
        1004 => "Configuration path error",

        // Input errors
        2001 => "Input file not found",
        2002 => "Input file could not be read",
        2003 => "Input workbook has no worksheets",
        2004 => "Requested worksheet not found",
        2005 => "Unsupported input format",

        // Schema errors
        3001 => "Expected column is missing",
        3002 => "Worksheet has no header row",

        // Value errors
        4001 => "Required cell is empty",
        4002 => "Cell is not numeric",
        4003 => "Cell is not a valid date",

        // Write errors
        5000 => "Generic write error",
        5001 => "Unsupported output format",
        5002 => "Output file could not be written",

        // Other errors
        9001 => "Failed to write to standard output",

        _ => "Unknown error code",
    }
}
