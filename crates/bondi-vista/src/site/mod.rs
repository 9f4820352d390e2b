pub mod contact;
pub mod landing;

pub use contact::{contact_router, ContactFormController, ContactFormState, SiteState};
pub use landing::{render_landing_page, LandingContent, PageView};
