pub mod analyze;
pub mod analyzers;
pub mod health;
pub mod upload;

pub use analyze::AnalyzeHandler;
pub use upload::UploadHandler;
