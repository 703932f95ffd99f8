//! Construction project lifecycle stages.
//!
//! Stages are stored as plain integers. The set below is the known
//! lifecycle, but values outside it are accepted structurally; the only
//! value with rule significance is [`CONSTRUCTION`].

/// Concept stage.
pub const CONCEPT: i32 = 1;
/// Design & Documentation stage.
pub const DESIGN_DOCUMENTATION: i32 = 2;
/// Pre-Construction stage.
pub const PRE_CONSTRUCTION: i32 = 3;
/// Construction stage. Projects at this stage are exempt from the
/// future-start-date rule.
pub const CONSTRUCTION: i32 = 4;

/// Human-readable name for a known stage, `None` for anything else.
pub fn name(stage: i32) -> Option<&'static str> {
    match stage {
        CONCEPT => Some("Concept"),
        DESIGN_DOCUMENTATION => Some("Design & Documentation"),
        PRE_CONSTRUCTION => Some("Pre-Construction"),
        CONSTRUCTION => Some("Construction"),
        _ => None,
    }
}
