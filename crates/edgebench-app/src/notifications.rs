//! Transient notification banners
//!
//! Every `notify` inserts an independent banner; nothing is deduplicated or
//! queued. Expiry is driven by a timer message carrying the banner id.

use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BannerId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerLevel {
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct Banner {
    pub id: BannerId,
    pub level: BannerLevel,
    pub message: String,
    pub posted_at: DateTime<Local>,
}

#[derive(Debug, Default)]
pub struct Notifications {
    banners: Vec<Banner>,
    next_id: u64,
}

impl Notifications {
    pub fn notify(&mut self, level: BannerLevel, message: impl Into<String>) -> BannerId {
        self.next_id += 1;
        let id = BannerId(self.next_id);
        self.banners.push(Banner {
            id,
            level,
            message: message.into(),
            posted_at: Local::now(),
        });
        id
    }

    /// Remove one banner. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: BannerId) -> bool {
        let before = self.banners.len();
        self.banners.retain(|b| b.id != id);
        self.banners.len() != before
    }

    /// Banners oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Banner> {
        self.banners.iter()
    }

    pub fn latest(&self) -> Option<&Banner> {
        self.banners.last()
    }

    pub fn len(&self) -> usize {
        self.banners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.banners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_messages_are_independent_banners() {
        let mut notifications = Notifications::default();
        let a = notifications.notify(BannerLevel::Error, "Error exporting tests");
        let b = notifications.notify(BannerLevel::Error, "Error exporting tests");

        assert_ne!(a, b);
        assert_eq!(notifications.len(), 2);

        assert!(notifications.dismiss(a));
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications.latest().map(|b| b.id), Some(b));
    }

    #[test]
    fn test_dismiss_unknown_is_noop() {
        let mut notifications = Notifications::default();
        let id = notifications.notify(BannerLevel::Info, "saved");
        notifications.dismiss(id);

        assert!(!notifications.dismiss(id));
        assert!(notifications.is_empty());
    }
}
