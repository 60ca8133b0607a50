//! Device catalogue: headline specs for the home page showcase and the
//! detailed configuration cards of the device page.

use crate::model::device::{Configuration, Device, DeviceId, HeadlineSpec, SpecKind};

const DISPLAY_IMAGE: &str = "https://images.unsplash.com/photo-1636614597280-3dde89cbd6cc?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080";
const PROCESSOR_IMAGE: &str = "https://images.unsplash.com/photo-1562136935-2c010ce547b7?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080";
const RAM_IMAGE: &str = "https://images.unsplash.com/photo-1601046885687-b7bdf1306274?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080";
const STORAGE_IMAGE: &str = "https://images.unsplash.com/photo-1756836857570-127b0408b676?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080";
const CONNECTIVITY_IMAGE: &str = "https://images.unsplash.com/photo-1750712263185-edde9f359e33?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080";
const BATTERY_IMAGE: &str = "https://images.unsplash.com/photo-1521372557841-004496c23b26?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080";

const fn spec(kind: SpecKind, value: &'static str) -> HeadlineSpec {
    HeadlineSpec { kind, value }
}

const fn config(
    kind: SpecKind,
    value: &'static str,
    description: &'static str,
    image: &'static str,
) -> Configuration {
    Configuration {
        kind,
        value,
        description,
        image,
    }
}

/// Devices in showcase order.
pub static DEVICES: &[Device] = &[
    Device {
        id: DeviceId::Aspire,
        tagline: "Perfect Entry-Level POS",
        description: "Designed for small kiranas, pharmacies, and local shops that need reliable billing with essential features at an affordable price.",
        image: "/assets/aspire_1.png",
        headline_specs: &[
            spec(SpecKind::Display, "10.1 inches"),
            spec(SpecKind::Ram, "2GB"),
            spec(SpecKind::Storage, "16GB"),
            spec(SpecKind::Processor, "Quad-core 1.8GHz"),
            spec(SpecKind::Connectivity, "WiFi, Bluetooth"),
            spec(SpecKind::Battery, "5000mAh"),
            spec(SpecKind::Os, "Android 11"),
            spec(SpecKind::Ports, "USB, Ethernet"),
        ],
        configurations: &[
            config(SpecKind::Display, "10.1\" Thin Bezel Screen", "HD Display with Touch Support", DISPLAY_IMAGE),
            config(SpecKind::Processor, "Quad-core 1.8GHz", "Fast & Efficient Processing", PROCESSOR_IMAGE),
            config(SpecKind::Ram, "2GB DDR4", "Smooth Multitasking", RAM_IMAGE),
            config(SpecKind::Storage, "16GB eMMC", "Expandable Storage", STORAGE_IMAGE),
            config(SpecKind::Connectivity, "WiFi + Bluetooth", "Seamless Connectivity", CONNECTIVITY_IMAGE),
            config(SpecKind::Battery, "5000mAh Li-ion", "All-day Power Backup", BATTERY_IMAGE),
        ],
    },
    Device {
        id: DeviceId::Elite,
        tagline: "Enterprise Excellence",
        description: "The ultimate POS solution with AI-powered features, enterprise-grade security, and unlimited scalability for growing businesses.",
        image: "/assets/elitedevice.png",
        headline_specs: &[
            spec(SpecKind::Display, "15.6 inches"),
            spec(SpecKind::Ram, "8GB"),
            spec(SpecKind::Storage, "128GB"),
            spec(SpecKind::Processor, "Octa-core 2.4GHz"),
            spec(SpecKind::Connectivity, "WiFi 6, Bluetooth 5.0, 5G"),
            spec(SpecKind::Battery, "10000mAh"),
            spec(SpecKind::Os, "Android 13"),
            spec(SpecKind::Ports, "USB-C, Ethernet, HDMI, Serial"),
        ],
        configurations: &[
            config(SpecKind::Display, "15.6\" FHD Screen", "Crystal Clear Full HD Display", DISPLAY_IMAGE),
            config(SpecKind::Processor, "Octa-core 2.4GHz", "Premium Performance Chipset", PROCESSOR_IMAGE),
            config(SpecKind::Ram, "8GB DDR4", "Superior Multitasking Power", RAM_IMAGE),
            config(SpecKind::Storage, "128GB NVMe SSD", "Ultra-Fast Storage", STORAGE_IMAGE),
            config(SpecKind::Connectivity, "WiFi 6 + BT 5.0 + 5G", "Advanced Connectivity Suite", CONNECTIVITY_IMAGE),
            config(SpecKind::Battery, "10000mAh Li-Po", "Extended Power Capacity", BATTERY_IMAGE),
        ],
    },
    Device {
        id: DeviceId::Pro2,
        tagline: "Professional POS Solution",
        description: "Built for supermarkets, restaurants, and multi-location businesses that need advanced features, faster performance, and seamless multi-store management.",
        image: "/assets/sunmiDevice.png",
        headline_specs: &[
            spec(SpecKind::Display, "15.6 inches"),
            spec(SpecKind::Ram, "4GB"),
            spec(SpecKind::Storage, "64GB"),
            spec(SpecKind::Processor, "Octa-core 2.0GHz"),
            spec(SpecKind::Connectivity, "WiFi, Bluetooth, 4G"),
            spec(SpecKind::Battery, "7000mAh"),
            spec(SpecKind::Os, "Android 12"),
            spec(SpecKind::Ports, "USB, Ethernet, HDMI"),
        ],
        configurations: &[
            config(SpecKind::Display, "15.6\" HD+ Screen", "High Definition Touch Display", DISPLAY_IMAGE),
            config(SpecKind::Processor, "Octa-core 2.0GHz", "Professional Performance", PROCESSOR_IMAGE),
            config(SpecKind::Ram, "4GB DDR4", "Efficient Multitasking", RAM_IMAGE),
            config(SpecKind::Storage, "64GB SSD", "Fast & Reliable Storage", STORAGE_IMAGE),
            config(SpecKind::Connectivity, "WiFi + Bluetooth + 4G", "Comprehensive Connectivity", CONNECTIVITY_IMAGE),
            config(SpecKind::Battery, "7000mAh Li-ion", "Long-lasting Performance", BATTERY_IMAGE),
        ],
    },
];

pub fn device(id: DeviceId) -> &'static Device {
    DEVICES
        .iter()
        .find(|device| device.id == id)
        .unwrap_or(&DEVICES[0])
}

/// Resolves the `/device/<slug>` path parameter.
pub fn find_by_slug(slug: &str) -> Option<&'static Device> {
    DeviceId::from_slug(slug).map(device)
}

/// Rotating hero carousel: image, caption and highlighted feature.
pub struct CarouselSlide {
    pub name: &'static str,
    pub image: &'static str,
    pub feature: &'static str,
}

pub static HERO_CAROUSEL: &[CarouselSlide] = &[
    CarouselSlide {
        name: "Nukkad Pro Terminal",
        image: "/assets/sunmiDevice.png",
        feature: "⚡ Lightning Fast",
    },
    CarouselSlide {
        name: "Nukkad Dino Elite",
        image: "/assets/dino_elite.png",
        feature: "🔒 Secure Payments",
    },
    CarouselSlide {
        name: "Nukkad Aspire Terminal",
        image: "/assets/aspire_1.png",
        feature: "📊 Smart Analytics",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_device_is_catalogued_once() {
        for id in DeviceId::ALL {
            assert_eq!(DEVICES.iter().filter(|d| d.id == id).count(), 1);
            assert_eq!(device(id).id, id);
        }
    }

    #[test]
    fn detail_page_shows_six_configurations_and_showcase_eight_specs() {
        for device in DEVICES {
            assert_eq!(device.configurations.len(), 6, "{}", device.name());
            assert_eq!(device.headline_specs.len(), 8, "{}", device.name());
        }
    }

    #[test]
    fn slugs_resolve_and_unknown_ones_do_not() {
        assert_eq!(find_by_slug("elite").map(Device::name), Some("Elite-A"));
        assert_eq!(find_by_slug("pro2").map(|d| d.href()), Some("/device/pro2".to_string()));
        assert!(find_by_slug("pro3").is_none());
    }
}
