pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod dialog;
pub mod empty_state;
pub mod filter_chip;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod search_bar;
pub mod textarea;
pub mod toast;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use dialog::*;
pub use empty_state::*;
pub use filter_chip::*;
pub use form_select::*;
pub use input::*;
pub use page_header::*;
pub use search_bar::*;
pub use textarea::*;
pub use toast::*;
