pub mod catalog;
pub mod error;
pub mod locale;
mod names;
pub mod translations;

pub use catalog::{Label, LabelFormat, LabelStore, Role};
pub use error::LocaleError;
pub use locale::Locale;
pub use translations::available_translations;
