pub mod errors;
pub mod html;
pub mod redirect;

pub use crate::errors::ResultResp;
pub use errors::error_to_response;
pub use html::{html_response, text_response};
pub use redirect::redirect;
