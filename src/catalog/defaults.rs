//! Built-in catalog served while the store holds nothing for a query.

use super::dto::{
    BarSetup, Drink, DrinkType, Faq, FaqCategory, GalleryCategory, GalleryItem, Package,
    PackageTier, Testimonial,
};

fn list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

const VIDEO_BASE: &str =
    "https://customer-assets.emergentagent.com/job_ac6c9480-7211-41d1-abd8-0c6fb67adb33/artifacts";

fn video(file: &str) -> Option<String> {
    Some(format!("{VIDEO_BASE}/{file}"))
}

fn unsplash(photo: &str, width: u32) -> String {
    format!("https://images.unsplash.com/{photo}?w={width}")
}

#[allow(clippy::too_many_arguments)]
fn setup(
    id: &str,
    title: &str,
    slug: &str,
    description: &str,
    guest_range: &str,
    occasion: &[&str],
    style: &str,
    format: &str,
    menu_highlights: &[&str],
    molecular_tag: &str,
    photo: &str,
    video_url: Option<String>,
    featured: bool,
) -> BarSetup {
    BarSetup {
        id: id.into(),
        title: title.into(),
        slug: slug.into(),
        description: description.into(),
        best_for: format!("{guest_range} guests"),
        guest_range: guest_range.into(),
        occasion: list(occasion),
        style: style.into(),
        format: format.into(),
        menu_highlights: list(menu_highlights),
        molecular_tag: Some(molecular_tag.into()),
        image_url: unsplash(photo, 600),
        video_url,
        featured,
    }
}

pub fn setups() -> Vec<BarSetup> {
    vec![
        setup(
            "1",
            "Mehendi Soirée",
            "mehendi-soiree",
            "Vibrant bar setup with colorful cocktails and traditional aesthetics. Perfect for your mehendi celebration with folk-inspired decor.",
            "150-250",
            &["mehendi", "haldi"],
            "Royal",
            "Both",
            &["Kufri", "Mango Tango", "Rose Lassi Mocktail"],
            "Aromatic Mists",
            "photo-1551024709-8f23befc6f87",
            video("5if3jo8e_6ed5da08-8e47-4c62-95e1-594fc854688c.mp4"),
            true,
        ),
        setup(
            "2",
            "Sangeet Spectacular",
            "sangeet-spectacular",
            "High-energy bar with LED accents and signature cocktails. Dance the night away with premium drinks and dramatic presentations.",
            "200-400",
            &["sangeet", "cocktail-night"],
            "Bollywood",
            "Both",
            &["Bollywood Blast", "Disco Daiquiri", "Starlight Spritz"],
            "Smoke Bubbles",
            "photo-1470337458703-46ad1756a187",
            video("91amfrgt_c839badf-d007-42a6-ad69-487b21abdaa8.mp4"),
            true,
        ),
        setup(
            "3",
            "Reception Royale",
            "reception-royale",
            "Elegant champagne-tower bar with gold accents. The perfect finale for your wedding with signature couple cocktails.",
            "300-500",
            &["reception", "engagement"],
            "Minimal Luxe",
            "Both",
            &["Forever New", "His & Hers", "Golden Toast"],
            "Champagne Foam",
            "photo-1574096079513-d8259312b785",
            video("9lwf5b60_652a3209-9aa4-4751-8442-eaa11e571476.mp4"),
            true,
        ),
        setup(
            "4",
            "Cocktail Night Noir",
            "cocktail-night-noir",
            "Moody, sophisticated setup with dark aesthetics and premium spirits. For the discerning couple who loves drama.",
            "100-200",
            &["cocktail-night", "after-party"],
            "Modern Monochrome",
            "Cocktail",
            &["Midnight Noir", "Velvet Kiss", "Smoky Old Fashioned"],
            "Smoke Bubbles",
            "photo-1514362545857-3bc16c4c7d1b",
            video("jbuu83v8_97efb419-8fda-4ece-b870-1fbb600cb81c.mp4"),
            true,
        ),
        setup(
            "5",
            "Pool Party Paradise",
            "pool-party-paradise",
            "Tropical vibes with refreshing cocktails and mocktails. Waterside bar setup with island-inspired drinks.",
            "50-150",
            &["pool-party", "brunch"],
            "Tropical",
            "Both",
            &["Tropical Thunder", "Coconut Cloud", "Blue Lagoon"],
            "Aromatic Mists",
            "photo-1560963689-b5682b6440f8",
            None,
            false,
        ),
        setup(
            "6",
            "Corporate Excellence",
            "corporate-excellence",
            "Professional setup with brandable elements and high-volume service. Impress your clients with sophisticated beverages.",
            "100-500",
            &["corporate"],
            "Minimal Luxe",
            "Both",
            &["Executive Espresso Martini", "The Boardroom", "Sparkling Success"],
            "Foam Art",
            "photo-1566417713940-fe7c737a9ef2",
            video("ju2ki38n_6abda637-ea97-4d01-8861-eb67f7787ef2.mp4"),
            true,
        ),
        setup(
            "7",
            "After-Party Lounge",
            "after-party-lounge",
            "Intimate setup for the inner circle. Late-night vibes with premium shots and signature cocktails.",
            "30-80",
            &["after-party"],
            "Modern Monochrome",
            "Cocktail",
            &["Night Owl", "Last Dance", "Shooter Selection"],
            "Smoke Bubbles",
            "photo-1572116469696-31de0f17cc34",
            None,
            false,
        ),
        setup(
            "8",
            "Garden Elegance",
            "garden-elegance",
            "Rustic-chic outdoor setup with floral accents. Perfect for garden ceremonies and daytime events.",
            "100-300",
            &["engagement", "reception"],
            "Royal",
            "Both",
            &["Garden Spritz", "Lavender Dreams", "Rosemary Gin Fizz"],
            "Aromatic Mists",
            "photo-1519671482749-fd09be7ccebf",
            None,
            false,
        ),
    ]
}

pub fn drinks() -> Vec<Drink> {
    let drink = |id: &str,
                 name: &str,
                 kind: DrinkType,
                 flavors: &[&str],
                 spirit: Option<&str>,
                 description: &str,
                 ingredients: &[&str],
                 garnish: &str,
                 technique: Option<&str>,
                 signature: bool,
                 photo: &str| Drink {
        id: id.into(),
        name: name.into(),
        kind,
        flavor_profile: list(flavors),
        spirit_base: spirit.map(Into::into),
        description: description.into(),
        ingredients: list(ingredients),
        garnish: garnish.into(),
        molecular: technique.is_some(),
        molecular_technique: technique.map(Into::into),
        image_url: Some(unsplash(photo, 400)),
        signature,
    };

    vec![
        drink(
            "1",
            "Kufri",
            DrinkType::Cocktail,
            &["citrus", "herbal"],
            Some("Gin"),
            "A refreshing Himalayan-inspired cocktail with botanicals and a hint of mountain mist. Our signature house creation.",
            &["Premium Gin", "Fresh Lime", "Elderflower", "Himalayan Herbs", "Tonic"],
            "Dehydrated lime wheel & rosemary sprig",
            Some("Aromatic Mist"),
            true,
            "photo-1551024709-8f23befc6f87",
        ),
        drink(
            "2",
            "Forever New",
            DrinkType::Cocktail,
            &["floral", "sweet"],
            Some("Champagne"),
            "A romantic champagne cocktail for the couple. Rose petals meet bubbles in this ethereal creation.",
            &["Champagne", "Rose Syrup", "Elderflower Liqueur", "Fresh Strawberry"],
            "Edible rose petals & gold dust",
            Some("Champagne Foam"),
            true,
            "photo-1470337458703-46ad1756a187",
        ),
        drink(
            "3",
            "Midnight Noir",
            DrinkType::Cocktail,
            &["smoky", "spicy"],
            Some("Whiskey"),
            "Dark, mysterious, and unforgettable. A smoky whiskey creation with activated charcoal and spice.",
            &["Bourbon", "Activated Charcoal", "Maple Syrup", "Angostura Bitters", "Orange Zest"],
            "Flamed orange peel",
            Some("Smoke Bubble"),
            true,
            "photo-1514362545857-3bc16c4c7d1b",
        ),
        drink(
            "4",
            "Mango Tango",
            DrinkType::Mocktail,
            &["fruity", "sweet"],
            None,
            "A tropical dance of Alphonso mango and passion fruit. Refreshingly festive.",
            &["Alphonso Mango Puree", "Passion Fruit", "Lime Juice", "Coconut Water", "Mint"],
            "Mango slice & mint bouquet",
            None,
            false,
            "photo-1546171753-97d7676e4602",
        ),
        drink(
            "5",
            "Rose Lassi Cloud",
            DrinkType::Mocktail,
            &["floral", "creamy"],
            None,
            "Traditional lassi meets modern presentation. Creamy, rose-infused, topped with a cloud of foam.",
            &["Fresh Yogurt", "Rose Water", "Cardamom", "Saffron", "Honey"],
            "Dried rose petals & pistachio",
            Some("Rose Foam"),
            true,
            "photo-1571091718767-18b5b1457add",
        ),
        drink(
            "6",
            "Velvet Kiss",
            DrinkType::Cocktail,
            &["fruity", "sweet"],
            Some("Vodka"),
            "Smooth as velvet, sweet as a kiss. Berry-infused vodka with a silky finish.",
            &["Premium Vodka", "Mixed Berries", "Vanilla", "Lemon", "Simple Syrup"],
            "Fresh berries on a pick",
            None,
            false,
            "photo-1560963689-b5682b6440f8",
        ),
        drink(
            "7",
            "Bollywood Blast",
            DrinkType::Cocktail,
            &["spicy", "citrus"],
            Some("Rum"),
            "Vibrant and bold like a Bollywood dance number. Spiced rum with a citrus kick.",
            &["Spiced Rum", "Pineapple", "Jalapeño", "Lime", "Ginger Beer"],
            "Pineapple leaf & chili",
            Some("Smoke Bubble"),
            false,
            "photo-1536935338788-846bb9981813",
        ),
        drink(
            "8",
            "Golden Toast",
            DrinkType::Cocktail,
            &["sweet", "citrus"],
            Some("Champagne"),
            "Raise a glass to forever. Champagne meets gold in this celebratory creation.",
            &["Champagne", "Grand Marnier", "Honey", "Edible Gold Flakes"],
            "Sugar rim & gold flakes",
            None,
            true,
            "photo-1574096079513-d8259312b785",
        ),
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    let testimonial = |id: &str, name: &str, event_type: &str, date: &str, location: &str, quote: &str, featured: bool| {
        Testimonial {
            id: id.into(),
            name: name.into(),
            event_type: event_type.into(),
            event_date: Some(date.into()),
            location: Some(location.into()),
            quote: quote.into(),
            rating: 5,
            image_url: None,
            featured,
        }
    };

    vec![
        testimonial(
            "1",
            "Priya & Rahul Sharma",
            "Wedding",
            "December 2024",
            "Delhi",
            "HQ.D transformed our wedding into a cinematic experience. The molecular cocktails had our guests mesmerized, and the bar setup was absolutely stunning. Every detail was perfect.",
            true,
        ),
        testimonial(
            "2",
            "Ananya Mehta",
            "Corporate Event",
            "November 2024",
            "Mumbai",
            "We hired HQ.D for our product launch and they exceeded all expectations. Professional, creative, and the branded cocktails were a huge hit with our clients.",
            true,
        ),
        testimonial(
            "3",
            "Vikram & Neha Kapoor",
            "Wedding",
            "October 2024",
            "Jaipur",
            "The smoke bubble cocktails were the talk of our sangeet! HQ.D's team was incredibly professional and managed our 400-guest event flawlessly.",
            true,
        ),
        testimonial(
            "4",
            "Rohan Gupta",
            "Private Party",
            "September 2024",
            "Gurgaon",
            "Hired HQ.D for my 30th birthday bash. The after-party bar setup was intimate yet luxurious. Best decision ever!",
            false,
        ),
        testimonial(
            "5",
            "Simran & Arjun Malhotra",
            "Wedding",
            "January 2025",
            "Udaipur",
            "From mehendi to reception, HQ.D was with us for all 4 functions. Each setup was unique and the signature 'Forever New' cocktail they created for us was magical.",
            true,
        ),
    ]
}

pub fn gallery() -> Vec<GalleryItem> {
    let item = |id: &str, title: &str, category: GalleryCategory, photo: &str, event: &str, location: &str, featured: bool| {
        GalleryItem {
            id: id.into(),
            title: title.into(),
            category,
            image_url: unsplash(photo, 800),
            video_url: None,
            event_name: Some(event.into()),
            location: Some(location.into()),
            featured,
        }
    };

    vec![
        item("1", "Royal Reception Setup", GalleryCategory::Wedding, "photo-1574096079513-d8259312b785", "Sharma Wedding", "The Leela Palace, Delhi", true),
        item("2", "Sangeet Night Bar", GalleryCategory::Wedding, "photo-1470337458703-46ad1756a187", "Kapoor Sangeet", "Taj Falaknuma, Hyderabad", true),
        item("3", "Corporate Launch Event", GalleryCategory::Corporate, "photo-1566417713940-fe7c737a9ef2", "Tech Summit 2024", "Four Seasons, Mumbai", true),
        item("4", "Molecular Mixology Display", GalleryCategory::Wedding, "photo-1551024709-8f23befc6f87", "Mehta Reception", "ITC Grand Bharat", true),
        item("5", "Poolside Cocktail Bar", GalleryCategory::Private, "photo-1560963689-b5682b6440f8", "Private Villa Party", "Goa", false),
        item("6", "Noir Cocktail Evening", GalleryCategory::Private, "photo-1514362545857-3bc16c4c7d1b", "Birthday Celebration", "Private Residence, Delhi", false),
        item("7", "Garden Wedding Bar", GalleryCategory::Wedding, "photo-1519671482749-fd09be7ccebf", "Singh Wedding", "Raas Jodhpur", true),
        item("8", "Brand Activation Setup", GalleryCategory::Corporate, "photo-1572116469696-31de0f17cc34", "Luxury Brand Launch", "Ritz Carlton, Bangalore", false),
    ]
}

pub fn packages() -> Vec<Package> {
    vec![
        Package {
            id: "1".into(),
            name: "Essential".into(),
            tier: PackageTier::Good,
            tagline: "Perfect start for intimate gatherings".into(),
            description: "Our foundational package for smaller events. Premium service with curated selections.".into(),
            inclusions: list(&[
                "Professional bartenders (2)",
                "Standard bar setup",
                "Curated menu of 8 drinks",
                "Premium glassware",
                "4-hour service",
                "Basic garnish station",
            ]),
            best_for: "Intimate gatherings, small parties (up to 100 guests)".into(),
            highlight: None,
        },
        Package {
            id: "2".into(),
            name: "Signature".into(),
            tier: PackageTier::Better,
            tagline: "Elevated experience for memorable events".into(),
            description: "Our most popular package. Enhanced bar presence with signature drinks and molecular elements.".into(),
            inclusions: list(&[
                "Professional bartenders (3-4)",
                "Customized bar setup",
                "Expanded menu of 12 drinks",
                "2 signature cocktails",
                "Basic molecular elements",
                "Premium glassware",
                "6-hour service",
                "Full garnish station",
            ]),
            best_for: "Medium events, engagement parties (100-250 guests)".into(),
            highlight: Some("Most Popular".into()),
        },
        Package {
            id: "3".into(),
            name: "Luxe".into(),
            tier: PackageTier::Best,
            tagline: "Luxury experience for grand celebrations".into(),
            description: "Comprehensive bar experience with full molecular mixology and premium selections.".into(),
            inclusions: list(&[
                "Professional bartenders (4-6)",
                "Premium designer bar setup",
                "Complete menu of 16+ drinks",
                "4 signature cocktails",
                "Full molecular mixology",
                "Crystal glassware",
                "8-hour service",
                "Champagne tower",
                "Dedicated bar manager",
            ]),
            best_for: "Large weddings, corporate galas (250-400 guests)".into(),
            highlight: Some("Best Value".into()),
        },
        Package {
            id: "4".into(),
            name: "Ultra".into(),
            tier: PackageTier::Ultra,
            tagline: "The ultimate bespoke experience".into(),
            description: "Completely customized luxury bar experience. White-glove service for the most discerning clients.".into(),
            inclusions: list(&[
                "Unlimited professional bartenders",
                "Bespoke bar design & fabrication",
                "Unlimited custom menu",
                "Personal mixologist consultation",
                "Complete molecular arsenal",
                "Premium crystal & gold glassware",
                "Unlimited service hours",
                "Multiple bar stations",
                "VIP lounge setup",
                "Dedicated event coordinator",
            ]),
            best_for: "Destination weddings, ultra-luxury events (400+ guests)".into(),
            highlight: Some("Ultimate Luxury".into()),
        },
    ]
}

pub fn faqs() -> Vec<Faq> {
    let faq = |order: i32, category: FaqCategory, question: &str, answer: &str| Faq {
        id: order.to_string(),
        question: question.into(),
        answer: answer.into(),
        category,
        order,
    };

    vec![
        faq(
            1,
            FaqCategory::Service,
            "Do you provide food or only bars?",
            "We specialize exclusively in bar services - cocktails and mocktails only. We do not provide food or catering services. However, we work seamlessly with caterers and event planners to ensure perfect coordination.",
        ),
        faq(
            2,
            FaqCategory::Service,
            "Do you offer mocktail-only packages?",
            "Absolutely! We have extensive mocktail menus and can create fully non-alcoholic bar experiences. Our molecular mixology techniques work beautifully with mocktails too.",
        ),
        faq(
            3,
            FaqCategory::Service,
            "What is molecular mixology?",
            "Molecular mixology uses scientific techniques to create unique drink experiences - think smoke bubbles that release aromas, foams, caviar-like spheres, and aromatic mists. It's about creating memorable moments, not just drinks.",
        ),
        faq(
            4,
            FaqCategory::Booking,
            "How far in advance should we book?",
            "We recommend booking 3-6 months in advance for weddings and large events. For smaller private parties, 4-6 weeks notice is usually sufficient. Peak wedding season (October-February) books up quickly.",
        ),
        faq(
            5,
            FaqCategory::Logistics,
            "Do you travel outside Delhi NCR?",
            "Yes! We service events across India and have experience with destination weddings in Udaipur, Jaipur, Goa, Kerala, and more. Travel and accommodation costs apply for outstation events.",
        ),
        faq(
            6,
            FaqCategory::Service,
            "Can we customize the menu?",
            "Absolutely! Menu customization is at the heart of what we do. We can create signature 'couple cocktails' for weddings, branded drinks for corporate events, and tailor menus to your theme and preferences.",
        ),
        faq(
            7,
            FaqCategory::Logistics,
            "What about alcohol procurement?",
            "We can either work with alcohol you provide, or assist with procurement recommendations. Final procurement and permits are the client's responsibility, but we guide you through the process.",
        ),
        faq(
            8,
            FaqCategory::Booking,
            "How does pricing work?",
            "Every event is unique, so we provide custom quotes based on guest count, duration, setup requirements, menu complexity, and location. Contact us for a personalized quote - there's no obligation.",
        ),
    ]
}
