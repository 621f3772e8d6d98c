//! Project command handlers.

mod setup_project;

pub use setup_project::{
    ProjectStatus, SetupProjectCommand, SetupProjectError, SetupProjectHandler,
    SetupProjectResult,
};
