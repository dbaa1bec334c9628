pub mod del;
pub mod log;
pub mod overview;
pub mod save;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use del::DeleteLogic;
pub use overview::OverviewLogic;
pub use save::SaveLogic;
pub use state::StateLogic;
