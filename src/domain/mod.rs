pub mod board;
pub mod card;
pub mod list;

pub use board::BoardStore;
pub use card::{Card, CardId};
pub use list::{List, ListId};
