pub mod avatar;
pub mod badges;
pub mod layout;
pub mod task_modal;

pub use avatar::{UnassignedAvatar, UserAvatar};
pub use badges::{PriorityBadge, StatusBadge, TagList};
pub use layout::{Header, Sidebar};
pub use task_modal::TaskModal;
