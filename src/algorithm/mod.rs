/// Grid walk that places every tile exactly once
pub mod assembly;
/// Interior stitching into the composite image
pub mod compositor;
/// Fingerprint to tile lookup
pub mod index;
/// Orientation search under adjacency constraints
pub mod orientation;
/// End-to-end reconstruction driver
pub mod pipeline;
/// Motif search under all eight symmetries
pub mod scanner;
/// Corner, border and interior classification
pub mod topology;
