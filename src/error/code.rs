/// Error codes with category prefix
///
/// Categories:
/// - IO: File system operations
/// - CFG: Configuration parsing/validation
/// - CAT: Catalog snapshot validation
/// - TUI: Terminal UI errors
/// - VAL: Input validation errors
/// - INT: Unexpected internal errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // I/O errors (IO001-IO099)
    /// File not found
    Io001,
    /// Permission denied
    Io002,

    // Config errors (CFG001-CFG099)
    /// Invalid config format
    Cfg001,
    /// Invalid config value
    Cfg002,

    // Catalog errors (CAT001-CAT099)
    /// Duplicate record id
    Cat001,
    /// Undeclared category
    Cat002,
    /// Missing id or label
    Cat003,

    // TUI errors (TUI001-TUI099)
    /// Terminal initialization failed
    Tui001,

    // Validation errors (VAL001-VAL099)
    /// Invalid argument
    Val001,
    /// Unknown route
    Val002,

    // Internal errors (INT001-INT099)
    /// Unexpected internal error
    Int001,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "CAT001")
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Io001 => "IO001",
            ErrorCode::Io002 => "IO002",
            ErrorCode::Cfg001 => "CFG001",
            ErrorCode::Cfg002 => "CFG002",
            ErrorCode::Cat001 => "CAT001",
            ErrorCode::Cat002 => "CAT002",
            ErrorCode::Cat003 => "CAT003",
            ErrorCode::Tui001 => "TUI001",
            ErrorCode::Val001 => "VAL001",
            ErrorCode::Val002 => "VAL002",
            ErrorCode::Int001 => "INT001",
        }
    }

    /// Returns the general cause description
    pub fn cause(&self) -> &'static str {
        match self {
            ErrorCode::Io001 => "The specified file or directory was not found",
            ErrorCode::Io002 => "Permission denied when accessing the file or directory",
            ErrorCode::Cfg001 => "The configuration file has an invalid format",
            ErrorCode::Cfg002 => "A configuration value is out of range or malformed",
            ErrorCode::Cat001 => "Two catalog records share the same id",
            ErrorCode::Cat002 => "A catalog record uses a category that is not declared",
            ErrorCode::Cat003 => "A catalog record is missing its id or display label",
            ErrorCode::Tui001 => "Failed to initialize the terminal interface",
            ErrorCode::Val001 => "An invalid argument was provided",
            ErrorCode::Val002 => "The navigation path does not match any view",
            ErrorCode::Int001 => "An unexpected internal error occurred",
        }
    }

    /// Returns remediation steps
    pub fn remediation(&self) -> &'static str {
        match self {
            ErrorCode::Io001 => "1. Verify the file path is correct\n2. Check `catalog_path` in ~/.mbb/config.toml",
            ErrorCode::Io002 => "1. Check file/directory permissions\n2. Verify ownership of the resource",
            ErrorCode::Cfg001 => "1. Check the TOML syntax of ~/.mbb/config.toml\n2. Remove the file to fall back to defaults",
            ErrorCode::Cfg002 => "1. Check the value against the documented format\n2. Dates use YYYY-MM-DD",
            ErrorCode::Cat001 => "1. Give every record in the catalog file a unique id",
            ErrorCode::Cat002 => "1. Declare the category in the `categories` list\n2. Or change the record's category to a declared one",
            ErrorCode::Cat003 => "1. Give every record a non-empty id and name",
            ErrorCode::Tui001 => "1. Ensure your terminal supports the required features\n2. Try a different terminal emulator\n3. Use the non-interactive subcommands instead",
            ErrorCode::Val001 => "1. Check the argument format\n2. Use 'mbb --help' for usage information",
            ErrorCode::Val002 => "1. Known paths: /, /app-store, /app-store/<id>, /apps/bookings",
            ErrorCode::Int001 => "1. Try the operation again\n2. Report the issue with debug logs (MBB_LOG=debug)",
        }
    }
}
