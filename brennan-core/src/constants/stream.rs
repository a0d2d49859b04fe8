//! Real-Time Data Stream

use super::Band;

/// Point value band.
pub const STREAM_VALUE_BAND: Band = Band::new(0.0, 100.0);

/// Source labels a point is tagged with.
pub const STREAM_SOURCES: [&str; 4] = ["AI_Processing", "Blockchain_Tx", "Medical_Analysis", "Business_Intel"];

/// Points kept on screen: the newest plus the twenty before it.
pub const STREAM_WINDOW: usize = 21;
