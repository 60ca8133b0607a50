pub struct Industry {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub static INDUSTRIES: &[Industry] = &[
    Industry {
        title: "Kirana Stores & Supermarkets",
        description: "Empower neighborhood stores and supermarkets with fast billing, barcode scanning, inventory tracking, and real-time stock updates.",
        image: "/assets/Industries/Stores.jpg",
    },
    Industry {
        title: "Airports",
        description: "Handle high-volume airport retail with multi-currency support, duty-free billing, and real-time inventory sync across terminals.",
        image: "/assets/Industries/Airports.jpg",
    },
    Industry {
        title: "Fuel Stations",
        description: "Streamline fuel sales, convenience store billing, and fleet management with integrated POS solutions.",
        image: "/assets/Industries/Stations.jpg",
    },
    Industry {
        title: "Cinema Theaters",
        description: "Manage ticket sales, concession stands, and loyalty programs with seamless POS integration for entertainment venues.",
        image: "/assets/Industries/Theaters.jpg",
    },
    Industry {
        title: "Malls",
        description: "Power large-scale mall operations with centralized billing, tenant management, multi-store coordination, and comprehensive sales analytics.",
        image: "/assets/Industries/Malls.jpg",
    },
    Industry {
        title: "Government",
        description: "Support government canteens, offices, and public facilities with secure billing, transparent transactions, and compliance-ready reporting systems.",
        image: "/assets/Industries/govt.jpg",
    },
    Industry {
        title: "Lounges",
        description: "Enhance premium lounge experiences with quick service billing, membership management, and sophisticated payment processing for VIP areas.",
        image: "/assets/Industries/Lounges.jpg",
    },
    Industry {
        title: "Canteen",
        description: "Streamline corporate and institutional canteen operations with fast meal billing, employee ID integration, subsidy management, and cashless payments.",
        image: "/assets/Industries/canteen.jpg",
    },
];
