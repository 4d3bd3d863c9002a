pub mod entry_list;
pub use entry_list::EntryList;

pub mod prompt_bar;
pub use prompt_bar::PromptBar;

pub mod status_bar;
pub use status_bar::StatusBar;
