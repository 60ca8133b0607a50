pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub image: &'static str,
    /// Star rating out of five.
    pub rating: u8,
    pub text: &'static str,
}

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sai Kumar",
        role: "Owner",
        company: "Supermarket",
        image: "/assets/Testinomails/saiKumar.jpg",
        rating: 5,
        text: "Best software, easy to handle, can be done by any one with minimal knowledge. In case of any issue back up team will resolve in minutes, i personal recommend this for all type of business.",
    },
    Testimonial {
        name: "Priya Sharma",
        role: "Head Of Operations",
        company: "Fashion Zone",
        image: "/assets/Testinomails/priya.png",
        rating: 5,
        text: "Nice software easy to use and proper generation of sales reports very useful for business.",
    },
    Testimonial {
        name: "Ramesh",
        role: "Manager",
        company: "Woxsen University Campus Store",
        image: "/assets/Testinomails/Ramesh.jpg",
        rating: 5,
        text: "Use Nukkadshops every day & even during long queues, the system works very quickly. I haven’t faced any issues with the software so far. I especially like the Quick Items feature - it helps me add our most-selling items easily. I highly recommend it!",
    },
    Testimonial {
        name: "Anita",
        role: "Co-founder",
        company: "Cake Cafe",
        image: "/assets/Testinomails/anita.png",
        rating: 5,
        text: "Approached Nukkadshops for my bakery, and the team was incredibly quick - from demo to full setup. The system is so easy to use that my staff started billing within minutes.",
    },
    Testimonial {
        name: "Sneha Rao",
        role: "Owner",
        company: "Café Bloom Hyderabad",
        image: "/assets/Testinomails/sneha.jpg",
        rating: 5,
        text: "The POS system’s intuitive interface and reliable support team have made daily billing and inventory management effortless.",
    },
    Testimonial {
        name: "Amit Verma",
        role: "Store Manager",
        company: "Metro Fashion Pvt. Ltd.",
        image: "/assets/Testinomails/amit.jpg",
        rating: 5,
        text: "From onboarding to training, the team ensured a smooth transition. Our staff adapted quickly thanks to the user-friendly design.",
    },
];
