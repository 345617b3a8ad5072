/// Centralized defaults for trust anchor handling.
pub struct AnchorDefaults;

impl AnchorDefaults {
    // Diagnostic rendering
    pub const DIAGNOSTIC_INDENT: &'static str = "    "; // prefix for each name constraints dump line
    pub const DIAGNOSTIC_BYTES_PER_LINE: usize = 16;
}
