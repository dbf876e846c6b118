// Public modules
pub mod article;
pub mod catalog;
pub mod config;
pub mod driver;
pub mod error;
pub mod io;
pub mod links;
pub mod logging;
pub mod models;
pub mod planning;
pub mod research;
pub mod sample;
pub mod sections;
pub mod selector;

// Re-export commonly used types
pub use article::{assemble, Document, GeneratedArticle};
pub use catalog::Product;
pub use config::Config;
pub use driver::{run, run_batch, BatchReport, DEFAULT_BATCH_SIZE};
pub use error::PlanningError;
pub use io::{article_exists, prepare_image_dir, save_article};
pub use links::{plan_internal_links, InternalLink};
pub use logging::init_logging;
pub use models::{ArticleTask, Locale, Variant, VolumeTier};
pub use planning::PlanningTable;
pub use research::ResearchBundle;
pub use sample::{generate_sample, SampleOutput};
pub use selector::select_pending;
