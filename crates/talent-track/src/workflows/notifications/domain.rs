use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::workflows::directory::domain::UserId;

pub type NotificationId = u32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub user_id: UserId,
    pub text: String,
    pub time: DateTime<Utc>,
    pub read: bool,
}
