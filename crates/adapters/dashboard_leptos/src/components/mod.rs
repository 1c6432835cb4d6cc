mod master_controls;
mod notification_banner;
mod relay_switch;
mod status_pill;

pub use master_controls::MasterControls;
pub use notification_banner::NotificationBanner;
pub use relay_switch::RelaySwitch;
pub use status_pill::StatusPill;
