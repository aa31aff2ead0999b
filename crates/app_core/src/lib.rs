//! PhotoDesk Core Domain Logic
//!
//! This crate contains:
//! - Photo records and the mock repository
//! - View state store and selection
//! - Simulated collection loading
//! - List sorting and pagination
//! - Right panel model
//! - Command system and menu layout
//! - Configuration
//! - Localization
//! - Error types

pub mod catalog;
pub mod command;
pub mod config;
pub mod error;
pub mod i18n;
pub mod inspector;
pub mod listing;
pub mod menu;
pub mod photo;
pub mod repository;
pub mod selection;
pub mod view_state;

pub use catalog::{LoadEvent, LoadPhase, PhotoCatalog};
pub use command::{
    Command, CommandHandler, CommandId, CommandOutcome, CommandParams, CommandRegistry,
    CommandSpec, PanelSide,
};
pub use config::{AppConfig, ContentConfig, GeneralConfig, ViewConfig};
pub use error::AppError;
pub use i18n::I18n;
pub use inspector::{CameraInfo, Inspector, InspectorEdits, PhotoDetail, SelectionArity};
pub use listing::{ListSort, ListView, Pagination, SortDirection, SortKey, PAGE_SIZE_OPTIONS};
pub use menu::{Menu, MENUS};
pub use photo::{
    ColorTag, FileSize, Issue, IssueFlags, IssueSeverity, PhotoId, PhotoRecord, PhotoStatus,
};
pub use repository::{MockPhotoRepository, PhotoRepository};
pub use selection::SelectionState;
pub use view_state::{FileStats, ThumbnailSize, ViewMode, ViewState};
