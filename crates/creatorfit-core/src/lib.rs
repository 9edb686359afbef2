//! Record model, input normalization and configuration for creatorfit.
//!
//! Everything downstream of this crate works on the canonical [`Account`] and
//! [`Post`] shapes. Loosely-typed records coming from the match-finding service
//! are converted exactly once, in [`normalize`], with defaults substituted there.

pub mod app_config;
pub mod config;
pub mod error;
pub mod model;
pub mod normalize;
pub mod raw;
pub mod roster;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use model::{Account, AccountOverview, CampaignBrief, Post};
pub use normalize::{normalize_account, normalize_post, parse_post_date};
pub use raw::{RawAccount, RawOverview, RawPost};
pub use roster::{load_roster, parse_roster, select_account, RosterFormat};
