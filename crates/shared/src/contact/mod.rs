use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, IntoStaticStr, VariantArray};

/// How the visitor heard about us, shown as the step 3 chips.
#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
    IntoStaticStr,
)]
pub enum DiscoveryChannel {
    #[strum(serialize = "Word of Mouth")]
    #[serde(rename = "Word of Mouth")]
    WordOfMouth,
    #[strum(serialize = "Social Media")]
    #[serde(rename = "Social Media")]
    SocialMedia,
    Dribbble,
    #[strum(serialize = "Google Search")]
    #[serde(rename = "Google Search")]
    GoogleSearch,
    LinkedIn,
    Instagram,
    Webflow,
    Other,
}

/// Service the visitor needs help with, shown as the step 4 chips.
#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
    IntoStaticStr,
)]
pub enum Service {
    #[strum(serialize = "Brand Identity Design")]
    #[serde(rename = "Brand Identity Design")]
    BrandIdentityDesign,
    #[strum(serialize = "Website Design")]
    #[serde(rename = "Website Design")]
    WebsiteDesign,
    #[strum(serialize = "App Development")]
    #[serde(rename = "App Development")]
    AppDevelopment,
    #[strum(serialize = "Social Media Management")]
    #[serde(rename = "Social Media Management")]
    SocialMediaManagement,
    #[strum(serialize = "Product Design")]
    #[serde(rename = "Product Design")]
    ProductDesign,
    #[strum(serialize = "Brand Guidelines")]
    #[serde(rename = "Brand Guidelines")]
    BrandGuidelines,
    #[strum(serialize = "E-Commerce Solutions")]
    #[serde(rename = "E-Commerce Solutions")]
    ECommerceSolutions,
    #[strum(serialize = "Digital Marketing")]
    #[serde(rename = "Digital Marketing")]
    DigitalMarketing,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn labels_round_trip_through_from_str() {
        for channel in DiscoveryChannel::VARIANTS {
            assert_eq!(
                DiscoveryChannel::from_str(channel.as_ref()).ok(),
                Some(*channel)
            );
        }

        assert_eq!(Service::WebsiteDesign.to_string(), "Website Design");
        assert_eq!(
            Service::from_str("E-Commerce Solutions").ok(),
            Some(Service::ECommerceSolutions)
        );
    }

    #[test]
    fn option_sets_keep_display_order() {
        assert_eq!(DiscoveryChannel::VARIANTS.len(), 8);
        assert_eq!(DiscoveryChannel::VARIANTS[0], DiscoveryChannel::WordOfMouth);
        assert_eq!(Service::VARIANTS.len(), 8);
        assert_eq!(Service::VARIANTS[7], Service::DigitalMarketing);
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert!(DiscoveryChannel::from_str("Carrier Pigeon").is_err());
    }
}
