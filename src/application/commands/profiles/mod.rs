mod service;
mod update;

pub use service::ProfileCommandService;
pub use update::UpdateProfileCommand;
