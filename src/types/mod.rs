pub mod achievement;
pub mod activity;
pub mod application;
pub mod enums;
pub mod image;
pub mod lobby;
pub mod relationship;
pub mod storage;
pub mod store;
pub mod user;
pub mod voice;

pub use achievement::*;
pub use activity::*;
pub use application::*;
pub use enums::*;
pub use image::*;
pub use lobby::*;
pub use relationship::*;
pub use storage::*;
pub use store::*;
pub use user::*;
pub use voice::*;
