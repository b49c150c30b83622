//! Turning a directory of markdown into Django templates, URL patterns and
//! views.
//!
//! [`process_file`] handles a single document. [`Site::build`] walks a source
//! directory, writes one template per document and regenerates the content
//! app's `urls.py` and `views.py`.

pub mod error;
pub mod process;
pub mod routes;
pub mod site;
pub mod template;

pub use error::BuildError;
pub use process::{ProcessedFile, process_file};
pub use routes::{Route, render_urls, render_views, view_name};
pub use site::{BuildSummary, Site};
pub use template::{base_template_name, wrap_in_base_template};
