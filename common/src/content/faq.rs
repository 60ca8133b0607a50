pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
    /// Bullet points rendered under the answer.
    pub points: &'static [&'static str],
    pub image: &'static str,
}

pub static FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "What services does Nukkad Shops offer?",
        answer: "We provide a complete Android-based POS solution with billing, inventory, analytics, CRM, marketing, and online store features. For any special requirements, you can always speak to our sales team.",
        points: &[],
        image: "/assets/faq/faq_1.png",
    },
    FaqEntry {
        question: "Who can use Nukkad Shops POS?",
        answer: "Ideal for all retail outlets - including supermarkets, grocery stores, bakeries, and pharmacies - this solution offers billing, inventory management, analytics, CRM, marketing, and online store setup. click “Call for Demo”, or contact our sales team at +91 799 7095678 to schedule a demonstration.",
        points: &[],
        image: "/assets/faq/faq_2.png",
    },
    FaqEntry {
        question: "What is the main difference between a POS system and a cash register",
        answer: "A cash register only records sales and prints bills, while a POS system manages sales, inventory, customers, payments, reports, and overall business operations. POS is a complete business management tool; a cash register is just a billing machine.",
        points: &[],
        image: "/assets/faq/faq_3.png",
    },
    FaqEntry {
        question: "What is mPOS? Who should use mPOS?",
        answer: "mPOS (Mobile Point of Sale) is a portable billing system that works on a smartphone/ tablet or EDC machine to help businesses bill customers and accept payments on the go. Ideal for grocery stores, small retailers, delivery staff, food trucks, pop-up shops, and businesses that need quick, mobile billing.",
        points: &[],
        image: "/assets/faq/faq_4.png",
    },
    FaqEntry {
        question: "What is DinO?",
        answer: "DinO is our complete POS solution for restaurants and F& B outlets.It works even on mobiles, and helps with: ",
        points: &[
            "Billing",
            "Kitchen order management",
            "Attendance tracking",
            "Real-time reporting",
        ],
        image: "/assets/faq/faq_5.png",
    },
    FaqEntry {
        question: "Does Nukkad Shops offer hardware along with software?",
        answer: "Yes. Nukkad Shops provides Android POS devices such as Aspire, Pro2, and Elite-A, integrated with the software.",
        points: &[],
        image: "/assets/faq/faq_6.png",
    },
    FaqEntry {
        question: "Is the internet required to use Nukkad Shops POS and mPOS?",
        answer: "The system works both online and offline. Data syncs automatically once the connection is restored.",
        points: &[],
        image: "/assets/faq/faq_7.png",
    },
    FaqEntry {
        question: "Does Nukkad Shops provide customer support?",
        answer: "Yes. Dedicated support is available via phone, email, and live chat for all users.",
        points: &[],
        image: "/assets/faq/faq_9.png",
    },
    FaqEntry {
        question: "Can I access reports and analytics remotely?",
        answer: "Yes, you can track sales, inventory, and performance from anywhere using the Nukkad Shops dashboard or mobile app.",
        points: &[],
        image: "/assets/faq/faq_8.png",
    },
];

/// Accordion toggle: clicking the open entry closes it, any other entry
/// replaces it.
pub fn toggle(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) { None } else { Some(clicked) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_entry_is_open_at_a_time() {
        assert_eq!(toggle(None, 2), Some(2));
        assert_eq!(toggle(Some(2), 4), Some(4));
        assert_eq!(toggle(Some(4), 4), None);
    }
}
