//! Static marketing copy for the Bondi Vista development.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CallToAction {
    pub label: &'static str,
    pub href: &'static str,
    pub primary: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeroSection {
    pub headline: &'static str,
    pub subheading: &'static str,
    pub image_src: &'static str,
    pub image_alt: &'static str,
    pub actions: Vec<CallToAction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureIcon {
    Waves,
    Sun,
    Leaf,
}

impl FeatureIcon {
    /// Glyph shown in place of an icon font.
    pub fn glyph(self) -> &'static str {
        match self {
            FeatureIcon::Waves => "\u{1F30A}",
            FeatureIcon::Sun => "\u{2600}",
            FeatureIcon::Leaf => "\u{1F343}",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Feature {
    pub name: &'static str,
    pub icon: FeatureIcon,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApartmentListing {
    pub kind: &'static str,
    pub size: &'static str,
    pub price: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocationSection {
    pub map_title: &'static str,
    pub map_embed_url: &'static str,
    pub blurb: &'static str,
    pub highlights: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactSection {
    pub heading: &'static str,
    pub blurb: &'static str,
    pub perks: Vec<&'static str>,
    pub submit_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Everything the landing page shows apart from the contact form values.
#[derive(Debug, Clone, Serialize)]
pub struct LandingContent {
    pub brand: &'static str,
    pub nav: Vec<NavLink>,
    pub hero: HeroSection,
    pub features: Vec<Feature>,
    pub apartments: Vec<ApartmentListing>,
    pub location: LocationSection,
    pub contact: ContactSection,
    pub copyright: &'static str,
    pub footer_links: Vec<FooterLink>,
}

const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3310.9759600963897!2d151.27421661521174!3d-33.89170798065352!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x6b12ad9f13e7707b%3A0x5017d681632c600!2sBondi%20Beach!5e0!3m2!1sen!2sau!4v1620847388946!5m2!1sen!2sau";

impl LandingContent {
    pub fn bondi_vista() -> Self {
        Self {
            brand: "Bondi Vista",
            nav: vec![
                NavLink {
                    label: "Features",
                    anchor: "features",
                },
                NavLink {
                    label: "Apartments",
                    anchor: "apartments",
                },
                NavLink {
                    label: "Location",
                    anchor: "location",
                },
                NavLink {
                    label: "Contact",
                    anchor: "contact",
                },
            ],
            hero: HeroSection {
                headline: "Bondi Vista: Luxury Living by the Beach",
                subheading: "Experience unparalleled luxury in our exclusive 20-apartment development, just steps away from iconic Bondi Beach.",
                image_src: "/assets/landing-page-photo.svg",
                image_alt: "Bondi Vista Apartment Development",
                actions: vec![
                    CallToAction {
                        label: "Register Interest",
                        href: "#contact",
                        primary: true,
                    },
                    CallToAction {
                        label: "View Apartments",
                        href: "#apartments",
                        primary: false,
                    },
                ],
            },
            features: vec![
                Feature {
                    name: "Oceanfront Views",
                    icon: FeatureIcon::Waves,
                    description: "Breathtaking views of Bondi Beach from every apartment",
                },
                Feature {
                    name: "Rooftop Terrace",
                    icon: FeatureIcon::Sun,
                    description: "Expansive rooftop terrace with infinity pool and BBQ area",
                },
                Feature {
                    name: "Eco-Friendly Design",
                    icon: FeatureIcon::Leaf,
                    description:
                        "Sustainable architecture with solar panels and rainwater harvesting",
                },
            ],
            apartments: vec![
                ApartmentListing {
                    kind: "1 Bedroom",
                    size: "60-75 sqm",
                    price: "From $1.2M",
                },
                ApartmentListing {
                    kind: "2 Bedrooms",
                    size: "85-100 sqm",
                    price: "From $1.8M",
                },
                ApartmentListing {
                    kind: "3 Bedrooms Penthouse",
                    size: "120-150 sqm",
                    price: "From $3.5M",
                },
            ],
            location: LocationSection {
                map_title: "Bondi Vista Location",
                map_embed_url: MAP_EMBED_URL,
                blurb: "Bondi Vista is perfectly positioned to offer the best of beachside living. Just steps away from the golden sands of Bondi Beach, and minutes from cafes, restaurants, and shopping.",
                highlights: vec![
                    "2 minutes walk to Bondi Beach",
                    "5 minutes to local cafes and restaurants",
                    "15 minutes drive to Sydney CBD",
                ],
            },
            contact: ContactSection {
                heading: "Register Your Interest",
                blurb: "Interested in making Bondi Vista your new home? Fill out the form below, and our sales team will be in touch to provide you with more information and arrange a private viewing.",
                perks: vec![
                    "Exclusive pre-launch pricing",
                    "Priority selection of apartments",
                    "Flexible payment plans available",
                ],
                submit_label: "Submit Enquiry",
            },
            copyright: "\u{00A9} 2024 Bondi Vista. All rights reserved.",
            footer_links: vec![
                FooterLink {
                    label: "Terms of Service",
                    href: "#",
                },
                FooterLink {
                    label: "Privacy Policy",
                    href: "#",
                },
            ],
        }
    }
}

impl Default for LandingContent {
    fn default() -> Self {
        Self::bondi_vista()
    }
}
