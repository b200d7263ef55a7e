pub mod analyze;
pub mod app;
pub mod breeds;
pub mod config;
pub mod error;
pub mod load;
pub mod prompt;
pub mod table;

pub use analyze::{analyze_breed, write_report, BreedReport, YearShare};
pub use breeds::BreedCatalog;
pub use config::Config;
pub use error::{LoadError, PromptError};
pub use load::load_registrations;
pub use prompt::resolve_breed;
pub use table::{RegistrationRecord, RegistrationTable};
