use serde::{Deserialize, Serialize};

pub use gatehouse_db::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAuthSettingsDto {
    pub enabled: bool,
}
