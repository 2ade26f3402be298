/// Directory-backed image catalog and image ingestion
pub mod catalog;
/// Command-line interface and command orchestration
pub mod cli;
/// Constants and runtime configuration defaults
pub mod configuration;
/// Error types for all operations
pub mod error;
/// Diagnostic logging setup
pub mod logging;
/// Output canvas enumeration
pub mod outputs;
/// Progress bars for generation cycles
pub mod progress;
/// Canvas rasterization and JPEG export
pub mod raster;
/// Wallpaper selection and application
pub mod wallpaper;
