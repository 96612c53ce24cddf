mod browse;
mod config;
mod explore;

pub use browse::cmd_browse;
pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use explore::{ExploreOptions, cmd_explore};
