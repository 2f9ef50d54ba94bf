pub use self::click::{clear_lost_sessions, handle_resize_click};
pub use self::update::update_active_drags;

mod click;
mod update;
