pub mod content;
pub mod render;

pub use content::{
    ApartmentListing, CallToAction, ContactSection, Feature, FeatureIcon, FooterLink, HeroSection,
    LandingContent, LocationSection, NavLink,
};
pub use render::{render_landing_page, PageView};
