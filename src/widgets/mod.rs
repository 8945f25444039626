pub mod job_cards;
pub mod job_detail;
pub mod search_button;
pub mod text_input;

pub use job_cards::{CardAction, JobCards, JobCardsState};
pub use job_detail::JobDetail;
pub use search_button::SearchButton;
pub use text_input::{TextInput, TextInputState};
