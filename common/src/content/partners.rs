pub struct Partner {
    pub name: &'static str,
    pub logo: &'static str,
}

pub static PARTNERS: &[Partner] = &[
    Partner { name: "Pee Safe", logo: "/assets/peesafe.png" },
    Partner { name: "Payment Partner", logo: "/assets/swiggy.png" },
    Partner { name: "Government Partner", logo: "/assets/delhi.png" },
    Partner { name: "Bharat Petroleum", logo: "/assets/bharath.png" },
    Partner { name: "BeCafe", logo: "/assets/beCafe.png" },
    Partner { name: "Waisl", logo: "/assets/waisl.png" },
    Partner { name: "ampm", logo: "/assets/ampm.png" },
    Partner { name: "Chicken Vicken", logo: "/assets/chickenvicken.png" },
    Partner { name: "Ninjacart", logo: "/assets/ninja.png" },
    Partner { name: "Swiggy", logo: "/assets/swiggy.png" },
    Partner { name: "The Man Company", logo: "/assets/man.png" },
    Partner { name: "Government of Rajasthan", logo: "/assets/rajsthan.png" },
    Partner { name: "Hyderabad International Airport", logo: "/assets/hyderabad.png" },
    Partner { name: "New Goa International Airport", logo: "/assets/newgoa.png" },
    Partner { name: "Delhi International Airport", logo: "/assets/delhi.png" },
];

pub struct PartnerBenefit {
    pub title: &'static str,
    pub description: &'static str,
}

pub static PARTNER_BENEFITS: &[PartnerBenefit] = &[
    PartnerBenefit {
        title: "Strategic Partnerships",
        description: "Collaborate with industry leaders for cutting-edge technology",
    },
    PartnerBenefit {
        title: "Certified Solutions",
        description: "Maintain industry certifications and compliance standards",
    },
    PartnerBenefit {
        title: "Growth Together",
        description: "Build powerful ecosystem for mutual success",
    },
    PartnerBenefit {
        title: "Customer Success",
        description: "Deliver exceptional value to every retailer",
    },
];
