mod header;
mod quote_card;
mod quote_form;
mod quote_list;
mod toast;

pub use header::Header;
pub use quote_form::QuoteForm;
pub use quote_list::QuoteList;
pub use toast::{ToastShelf, Toaster};
