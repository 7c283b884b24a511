pub mod heading;
pub mod list_marker;
pub mod preformat;

pub use heading::Heading;
pub use list_marker::{ListLine, ListMarker};
pub use preformat::Preformat;
