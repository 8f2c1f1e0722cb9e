// Landing page sections
// Developed by the Petal web team (c)2026

mod benefits;
mod cta;
mod faq;
mod footer;
mod hero;
mod interactions;
mod nav;

pub use benefits::Benefits;
pub use cta::CallToAction;
pub use faq::Faq;
pub use footer::Footer;
pub use hero::Hero;
pub use interactions::Interactions;
pub use nav::Header;
