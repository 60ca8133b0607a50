pub struct Feature {
    pub title: &'static str,
    pub image: &'static str,
}

pub static FEATURES: &[Feature] = &[
    Feature {
        title: "Billing Payments",
        image: "/assets/Features/Billing.png",
    },
    Feature {
        title: "Offers & Promotions",
        image: "/assets/Features/offers.png",
    },
    Feature {
        title: "Customer Loyalty",
        image: "/assets/Features/Loyalty.png",
    },
    Feature {
        title: "Inventory Management",
        image: "/assets/Features/inventory.png",
    },
];
