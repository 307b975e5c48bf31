pub mod align;
pub mod analysis;
pub mod error;
pub mod feature;
pub mod inflection;
pub mod token;

pub use align::align;
pub use error::AlignError;
pub use inflection::{project, InflectionTable};
