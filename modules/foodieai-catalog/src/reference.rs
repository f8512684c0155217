//! Static reference dataset: curated Lahore restaurants and deals bundled
//! with the server. Acts as a read-only pseudo-table merged with the live
//! store wherever restaurants or deals are listed or matched.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ReferenceRestaurant {
    pub id: &'static str,
    pub name: &'static str,
    pub cuisine: &'static str,
    pub address: &'static str,
    pub description: &'static str,
    pub rating: f64,
    pub menu: &'static [ReferenceMenuEntry],
}

#[derive(Debug, Serialize)]
pub struct ReferenceMenuEntry {
    pub name: &'static str,
    pub price: i64,
    pub description: &'static str,
    pub category: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ReferenceDeal {
    pub title: &'static str,
    pub restaurant: &'static str,
    pub price: i64,
    pub description: &'static str,
}

/// Number of reference restaurants returned when the query carries neither
/// keywords nor a budget, so the assistant context is never empty.
pub const UNFILTERED_FALLBACK_COUNT: usize = 3;

/// Cap on keyword/budget matches from the reference list.
pub const REFERENCE_MATCH_LIMIT: usize = 5;

/// Filter the reference list by lowercased keywords and an optional price
/// ceiling. A restaurant qualifies when its name or cuisine contains any
/// keyword, when any menu entry's name or category contains any keyword, or
/// when a budget is set and any menu entry fits under it. With no keywords
/// and no budget, the first few entries are returned unconditionally.
pub fn match_reference_restaurants(
    keywords: &[String],
    budget: Option<i64>,
) -> Vec<&'static ReferenceRestaurant> {
    if keywords.is_empty() && budget.is_none() {
        return REFERENCE_RESTAURANTS
            .iter()
            .take(UNFILTERED_FALLBACK_COUNT)
            .collect();
    }

    REFERENCE_RESTAURANTS
        .iter()
        .filter(|r| {
            let name_match = keywords.iter().any(|k| {
                r.name.to_lowercase().contains(k.as_str())
                    || r.cuisine.to_lowercase().contains(k.as_str())
            });
            let menu_match = r.menu.iter().any(|m| {
                keywords.iter().any(|k| {
                    m.name.to_lowercase().contains(k.as_str())
                        || m.category.to_lowercase().contains(k.as_str())
                })
            });
            let budget_match = budget
                .map(|b| r.menu.iter().any(|m| m.price <= b))
                .unwrap_or(false);

            name_match || menu_match || budget_match
        })
        .take(REFERENCE_MATCH_LIMIT)
        .collect()
}

pub static REFERENCE_RESTAURANTS: &[ReferenceRestaurant] = &[
    ReferenceRestaurant {
        id: "man-1",
        name: "Butt Karahi",
        cuisine: "Desi",
        address: "Lakshmi Chowk, Lahore",
        description: "The most iconic Karahi in Lahore. Known for its rich buttery taste and fresh desi chicken.",
        rating: 4.4,
        menu: &[
            ReferenceMenuEntry { name: "Desi Mutton Karahi (Makhan)", price: 3800, description: "Prepared in pure butter (makhan) with black pepper", category: "Karahi" },
            ReferenceMenuEntry { name: "Chicken Karahi (Desi Ghee)", price: 2600, description: "Organic chicken in pure ghee", category: "Karahi" },
            ReferenceMenuEntry { name: "Desi Murgh Karahi", price: 2400, description: "Traditional style with bone-in chicken", category: "Karahi" },
            ReferenceMenuEntry { name: "Roghn Naan", price: 120, description: "Sesame seed topped tandoori bread", category: "Breads" },
            ReferenceMenuEntry { name: "Zeera Raita", price: 150, description: "Yogurt with roasted cumin", category: "Sides" },
        ],
    },
    ReferenceRestaurant {
        id: "man-2",
        name: "Mohammadi Nihari House",
        cuisine: "Desi",
        address: "Mozang Chrangi, Lahore",
        description: "Legendary Nihari spot serving the city for decades. A breakfast staple for Lahoris.",
        rating: 4.2,
        menu: &[
            ReferenceMenuEntry { name: "Special Beef Nihari (Nalli)", price: 1200, description: "Slow-cooked beef shank with bone marrow", category: "Nihari" },
            ReferenceMenuEntry { name: "Maghaz Nihari", price: 1500, description: "Nihari topped with fried brain", category: "Nihari" },
            ReferenceMenuEntry { name: "Fry Maghaz Masala", price: 800, description: "Spicy brain masala fry", category: "Sides" },
            ReferenceMenuEntry { name: "Khameeri Roti", price: 60, description: "Fluffy fermented bread", category: "Breads" },
        ],
    },
    ReferenceRestaurant {
        id: "man-3",
        name: "Haveli Restaurant",
        cuisine: "BBQ",
        address: "Fort Road Food Street, Lahore",
        description: "Experience the grandeur of Badshahi Mosque while dining on exquisite BBQ.",
        rating: 4.6,
        menu: &[
            ReferenceMenuEntry { name: "Mutton Chops", price: 2800, description: "Charcoal grilled marinated chops", category: "BBQ" },
            ReferenceMenuEntry { name: "Reshmi Kabab", price: 1400, description: "Silk-texture minced chicken skewers", category: "BBQ" },
            ReferenceMenuEntry { name: "Haveli Special Platter", price: 4500, description: "Assortment of BBQ items (Serves 4)", category: "Platters" },
            ReferenceMenuEntry { name: "Palak Paneer", price: 950, description: "Spinach with cottage cheese", category: "Veg" },
        ],
    },
    ReferenceRestaurant {
        id: "man-4",
        name: "Cooco's Den",
        cuisine: "Traditional",
        address: "Roshnai Gate, Lahore",
        description: "A historic artistic haven serving traditional recipes passed down through generations.",
        rating: 4.3,
        menu: &[
            ReferenceMenuEntry { name: "Tawa Chicken", price: 2100, description: "Spicy chicken cooked on a large griddle with green chilies", category: "Specialty" },
            ReferenceMenuEntry { name: "Lahori Fried Fish", price: 1900, description: "Crispy battered fish fillet", category: "Fish" },
            ReferenceMenuEntry { name: "Daal Makhni", price: 900, description: "Black lentils with cream", category: "Veg" },
            ReferenceMenuEntry { name: "Sweet Lassi (Pera)", price: 450, description: "Traditional yogurt drink with sweet crumble", category: "Drinks" },
        ],
    },
    ReferenceRestaurant {
        id: "man-5",
        name: "Waris Nihari",
        cuisine: "Desi",
        address: "Abid Market, Lahore",
        description: "Deep, rich, and spicy. Waris Nihari is for the true connoisseurs of spice.",
        rating: 4.5,
        menu: &[
            ReferenceMenuEntry { name: "Beef Nihari Large", price: 1100, description: "Extra spicy beef shank stew", category: "Nihari" },
            ReferenceMenuEntry { name: "Nalli Fry", price: 400, description: "Fried bone marrow addition", category: "Add-on" },
            ReferenceMenuEntry { name: "Tarakay Wali Roti", price: 70, description: "Crispy tandoori bread with sesame", category: "Breads" },
        ],
    },
    ReferenceRestaurant {
        id: "man-6",
        name: "Phajja Siri Paye",
        cuisine: "Desi",
        address: "Shahi Mohallah, Walled City",
        description: "The most famous breakfast point in Androon Lahore. Known for sticky, delicious trotters.",
        rating: 4.1,
        menu: &[
            ReferenceMenuEntry { name: "Mutton Paye", price: 1500, description: "Slow cooked goat trotters", category: "Breakfast" },
            ReferenceMenuEntry { name: "Siri (Head Meat)", price: 1200, description: "Tender goat head meat curry", category: "Breakfast" },
            ReferenceMenuEntry { name: "Bong Paye", price: 1800, description: "Beef trotters with shank meat", category: "Breakfast" },
            ReferenceMenuEntry { name: "Kulcha", price: 60, description: "Traditional breakfast bread", category: "Breads" },
        ],
    },
    ReferenceRestaurant {
        id: "man-7",
        name: "Monal Lahore",
        cuisine: "Continental",
        address: "Liberty Roundabout, Gulberg",
        description: "Modern rooftop dining offering a mix of Desi, Continental, and Chinese with a view.",
        rating: 4.5,
        menu: &[
            ReferenceMenuEntry { name: "Monal Special Platter", price: 3800, description: "Mix of Malai Boti, Seekh Kabab & Fish Tikka", category: "Platters" },
            ReferenceMenuEntry { name: "Chicken Makhni", price: 1600, description: "Boneless chicken in butter tomato gravy", category: "Desi" },
            ReferenceMenuEntry { name: "Stuffed Chicken Breast", price: 1900, description: "With cheese and mushrooms, mashed potatoes side", category: "Continental" },
            ReferenceMenuEntry { name: "Cheese Naan", price: 450, description: "Stuffed with cheddar and mozzarella", category: "Breads" },
        ],
    },
    ReferenceRestaurant {
        id: "man-8",
        name: "Spice Bazaar",
        cuisine: "Pakistani",
        address: "MM Alam Road, Lahore",
        description: "A celebration of Pakistani cuisine in a high-end, sophisticated ambiance.",
        rating: 4.4,
        menu: &[
            ReferenceMenuEntry { name: "Sunday Brunch Buffet", price: 2450, description: "Over 50 authentic dishes (Price per head)", category: "Buffet" },
            ReferenceMenuEntry { name: "Mutton Kunna (Chinioti)", price: 2600, description: "Clay pot slow-cooked mutton", category: "Specialty" },
            ReferenceMenuEntry { name: "Peshawari Chappal Kabab", price: 1400, description: "Large fried beef patty with pomegranate seeds", category: "Live Station" },
            ReferenceMenuEntry { name: "Gajar Ka Halwa", price: 600, description: "Warm carrot pudding", category: "Dessert" },
        ],
    },
    ReferenceRestaurant {
        id: "man-9",
        name: "Bundu Khan",
        cuisine: "Desi",
        address: "Liberty Market, Lahore",
        description: "The gold standard for Desi BBQ and outdoor dining in Lahore.",
        rating: 4.2,
        menu: &[
            ReferenceMenuEntry { name: "Chicken Tikka Leg", price: 650, description: "Signature spicy marinated chicken leg", category: "BBQ" },
            ReferenceMenuEntry { name: "Behari Kabab", price: 1100, description: "Tenderized spicy beef strips", category: "BBQ" },
            ReferenceMenuEntry { name: "Puri Paratha", price: 180, description: "Fried crispy layered bread", category: "Breads" },
            ReferenceMenuEntry { name: "Imli Chutney", price: 50, description: "Tamarind sauce", category: "Sides" },
        ],
    },
    ReferenceRestaurant {
        id: "man-10",
        name: "Salt'n Pepper Village",
        cuisine: "Pakistani",
        address: "MM Alam Road, Lahore",
        description: "A village-themed buffet restaurant offering the complete range of Pakistani dishes.",
        rating: 4.3,
        menu: &[
            ReferenceMenuEntry { name: "Dinner Buffet", price: 3200, description: "Over 60 items including BBQ, Karahi, Chinese", category: "Buffet" },
            ReferenceMenuEntry { name: "Chapli Kabab", price: 0, description: "Available in buffet", category: "Live Station" },
            ReferenceMenuEntry { name: "Gol Gappay", price: 0, description: "Live counter", category: "Street Food" },
            ReferenceMenuEntry { name: "Fresh Jalebi", price: 0, description: "Live dessert station", category: "Dessert" },
        ],
    },
    ReferenceRestaurant {
        id: "man-11",
        name: "Arcadian Cafe",
        cuisine: "Italian",
        address: "Gulberg III, Lahore",
        description: "Chic modern cafe famous for its creamy pastas and signature mocktails.",
        rating: 4.6,
        menu: &[
            ReferenceMenuEntry { name: "Chicken Parmesan", price: 1800, description: "Fried chicken breast topped with marinara and cheese", category: "Mains" },
            ReferenceMenuEntry { name: "Tarragon Chicken", price: 1900, description: "Creamy tarragon sauce with herbs", category: "Mains" },
            ReferenceMenuEntry { name: "Red Dragon Chicken", price: 1700, description: "Spicy sticky red sauce", category: "Asian Fusion" },
            ReferenceMenuEntry { name: "Blue Colada", price: 650, description: "Coconut and pineapple mocktail", category: "Drinks" },
        ],
    },
    ReferenceRestaurant {
        id: "man-12",
        name: "Yum Chinese & Thai",
        cuisine: "Chinese",
        address: "Z Block, DHA Phase 3",
        description: "The premier spot for authentic Chinese and Thai cuisine in a family setting.",
        rating: 4.5,
        menu: &[
            ReferenceMenuEntry { name: "Kung Pao Chicken", price: 1600, description: "Stir-fried with peanuts, vegetables, and chili peppers", category: "Chicken" },
            ReferenceMenuEntry { name: "Beef Chili Dry", price: 1900, description: "Crispy beef strips in spicy glaze", category: "Beef" },
            ReferenceMenuEntry { name: "Yum Special Soup", price: 800, description: "Thick soup with prawns and chicken", category: "Soup" },
            ReferenceMenuEntry { name: "Egg Fried Rice", price: 900, description: "Classic wok-fried rice", category: "Rice" },
        ],
    },
    ReferenceRestaurant {
        id: "man-13",
        name: "Bamboo Union",
        cuisine: "Pan-Asian",
        address: "Mall 1, Main Boulevard",
        description: "Trendy spot bringing the best of Asian fusion from Thailand, Japan, and China.",
        rating: 4.3,
        menu: &[
            ReferenceMenuEntry { name: "Chicken Katsu Curry", price: 1850, description: "Panko fried chicken with Japanese curry sauce", category: "Bowls" },
            ReferenceMenuEntry { name: "Pad Thai", price: 1600, description: "Rice noodles stir-fried with peanuts and tamarind", category: "Noodles" },
            ReferenceMenuEntry { name: "Dynamite Prawns", price: 1400, description: "Crispy prawns tossed in spicy mayo", category: "Starters" },
            ReferenceMenuEntry { name: "Beef Bulgogi", price: 1950, description: "Korean style marinated beef", category: "Beef" },
        ],
    },
    ReferenceRestaurant {
        id: "man-14",
        name: "Cafe Aylanto",
        cuisine: "Continental",
        address: "MM Alam Road, Lahore",
        description: "Sophisticated dining experience featuring European and Mediterranean classics.",
        rating: 4.5,
        menu: &[
            ReferenceMenuEntry { name: "Beef Carpaccio", price: 2200, description: "Thinly sliced raw beef with parmesan and arugula", category: "Starters" },
            ReferenceMenuEntry { name: "Moroccan Chicken", price: 2100, description: "Grilled chicken with spicy sambal sauce", category: "Mains" },
            ReferenceMenuEntry { name: "Decked Beef Steak", price: 3400, description: "Premium tenderloin with mushroom sauce", category: "Steaks" },
            ReferenceMenuEntry { name: "Molten Lava Cake", price: 1100, description: "Warm chocolate cake with vanilla ice cream", category: "Dessert" },
        ],
    },
    ReferenceRestaurant {
        id: "man-15",
        name: "Sardar Machli",
        cuisine: "Seafood",
        address: "Gawal Mandi, Lahore",
        description: "World famous fried fish. Crispy batter and soft, flaky meat inside.",
        rating: 4.2,
        menu: &[
            ReferenceMenuEntry { name: "Fried Rahu Fish", price: 2400, description: "Signature battered fried fish (Per KG)", category: "Fish" },
            ReferenceMenuEntry { name: "Fish Tikka", price: 2600, description: "Barbequed fish chunks with spices", category: "Fish" },
            ReferenceMenuEntry { name: "Mint Chutney", price: 100, description: "Fresh mint sauce", category: "Sides" },
        ],
    },
    ReferenceRestaurant {
        id: "man-16",
        name: "Bhaiya Kabab",
        cuisine: "BBQ",
        address: "Model Town, Lahore",
        description: "Small shop, massive taste. Famous for their melt-in-the-mouth Seekh Kababs.",
        rating: 4.0,
        menu: &[
            ReferenceMenuEntry { name: "Seekh Kabab (Beef)", price: 180, description: "Juicy minced beef skewer (Per pc)", category: "BBQ" },
            ReferenceMenuEntry { name: "Mutton Kabab", price: 250, description: "Premium mutton mince skewer", category: "BBQ" },
            ReferenceMenuEntry { name: "Paratha", price: 90, description: "Oily fried bread", category: "Breads" },
        ],
    },
    ReferenceRestaurant {
        id: "man-17",
        name: "Nishat Cafe",
        cuisine: "Desi",
        address: "Lakshmi Chowk, Lahore",
        description: "A historic spot known for the best Mutton Karahi and Takatak in town.",
        rating: 4.1,
        menu: &[
            ReferenceMenuEntry { name: "Mutton Karahi", price: 3600, description: "Prepared fresh with tomatoes and green chilies", category: "Karahi" },
            ReferenceMenuEntry { name: "Takatak (Kata-Kat)", price: 2200, description: "Minced mix of kidney, heart, and brain", category: "Specialty" },
            ReferenceMenuEntry { name: "Brain Masala", price: 1800, description: "Spicy goat brain curry", category: "Specialty" },
        ],
    },
    ReferenceRestaurant {
        id: "man-18",
        name: "Amjad Tikka",
        cuisine: "BBQ",
        address: "Baghbanpura, Lahore",
        description: "Famous for their massive Tikkas and Karahis.",
        rating: 3.9,
        menu: &[
            ReferenceMenuEntry { name: "Chicken Tikka Chest", price: 550, description: "Large piece charcoal grilled", category: "BBQ" },
            ReferenceMenuEntry { name: "Mutton Tikka", price: 2200, description: "Spicy mutton cubes on skewer", category: "BBQ" },
            ReferenceMenuEntry { name: "Raita Salad", price: 150, description: "Complete side servings", category: "Sides" },
        ],
    },
    ReferenceRestaurant {
        id: "man-19",
        name: "Taj Mahal Sweets",
        cuisine: "Desi",
        address: "Hera Mandi, Lahore",
        description: "Traditional breakfast spot famous for Halwa Puri since 1960.",
        rating: 4.4,
        menu: &[
            ReferenceMenuEntry { name: "Halwa Puri Platter", price: 450, description: "2 Puris, Chana, Halwa & Aloo Bhujia", category: "Breakfast" },
            ReferenceMenuEntry { name: "Lassi Tall", price: 250, description: "Sweet yogurt drink", category: "Drinks" },
        ],
    },
    ReferenceRestaurant {
        id: "man-20",
        name: "Rina's Kitchenette",
        cuisine: "Continental",
        address: "Gulberg III, Lahore",
        description: "Home-style comfort food, famous for burgers and desserts.",
        rating: 4.5,
        menu: &[
            ReferenceMenuEntry { name: "The Smash Burger", price: 1400, description: "Double beef patty with cheese and secret sauce", category: "Burgers" },
            ReferenceMenuEntry { name: "Three Cheese Cannelloni", price: 1600, description: "Pasta tubes filled with cheese and spinach", category: "Pasta" },
            ReferenceMenuEntry { name: "Nutella Caramel Pie", price: 750, description: "Signature dessert slice", category: "Dessert" },
        ],
    },
    ReferenceRestaurant {
        id: "man-21",
        name: "Pizza 21",
        cuisine: "Fast Food",
        address: "PIA Road, Lahore",
        description: "New York style pizzas with generous toppings.",
        rating: 3.8,
        menu: &[
            ReferenceMenuEntry { name: "21 Special Pizza", price: 2400, description: "Loaded with pepperoni, sausages, and mushrooms (Large)", category: "Pizza" },
            ReferenceMenuEntry { name: "Creamy Chicken Pizza", price: 2200, description: "White sauce base", category: "Pizza" },
        ],
    },
    ReferenceRestaurant {
        id: "man-22",
        name: "Andaaz Restaurant",
        cuisine: "Desi",
        address: "Fort Road Food Street",
        description: "A royal dining experience with a view of the Badshahi Mosque.",
        rating: 4.5,
        menu: &[
            ReferenceMenuEntry { name: "Tandoori Jhinga", price: 2800, description: "Grilled jumbo prawns", category: "Seafood" },
            ReferenceMenuEntry { name: "Paneer Tikka", price: 1200, description: "Grilled cottage cheese", category: "Veg" },
            ReferenceMenuEntry { name: "Murgh Badami Korma", price: 1900, description: "Chicken curry with almond paste", category: "Mains" },
        ],
    },
    ReferenceRestaurant {
        id: "man-23",
        name: "Howdy",
        cuisine: "Fast Food",
        address: "MM Alam Road",
        description: "Cowboy themed burger joint known for charcoal grilled burgers.",
        rating: 4.3,
        menu: &[
            ReferenceMenuEntry { name: "Son of a Bun", price: 1300, description: "Double beef patty with cheese", category: "Burgers" },
            ReferenceMenuEntry { name: "Rango", price: 1100, description: "Spicy chicken fillet burger", category: "Burgers" },
            ReferenceMenuEntry { name: "Loaded Fries", price: 800, description: "Topped with jalapenos and cheese sauce", category: "Sides" },
        ],
    },
    ReferenceRestaurant {
        id: "man-24",
        name: "Gourmet Grill",
        cuisine: "Desi",
        address: "Various Locations",
        description: "Reliable and consistent BBQ and Karahi from the house of Gourmet.",
        rating: 4.1,
        menu: &[
            ReferenceMenuEntry { name: "Gourmet Special Karahi", price: 1800, description: "Chicken karahi", category: "Mains" },
            ReferenceMenuEntry { name: "Mixed Grill Platter", price: 2500, description: "Assortment of kababs and tikkas", category: "BBQ" },
        ],
    },
    ReferenceRestaurant {
        id: "man-25",
        name: "Jade Cafe",
        cuisine: "Continental",
        address: "Gulberg / Defence",
        description: "Contemporary cafe offering a diverse menu from breakfast to dinner.",
        rating: 4.3,
        menu: &[
            ReferenceMenuEntry { name: "Stuffed Chicken", price: 1400, description: "Fried chicken stuffed with cheese", category: "Mains" },
            ReferenceMenuEntry { name: "Jade Special Pizza", price: 1600, description: "Thin crust", category: "Pizza" },
            ReferenceMenuEntry { name: "Molten Lava", price: 800, description: "Best seller", category: "Dessert" },
        ],
    },
];

pub static REFERENCE_DEALS: &[ReferenceDeal] = &[
    ReferenceDeal {
        title: "Solo Smash Combo",
        restaurant: "Rina's Kitchenette",
        price: 850,
        description: "Classic Smash Burger + Fries + Soft Drink",
    },
    ReferenceDeal {
        title: "Desi Karahi Feast",
        restaurant: "Butt Karahi",
        price: 1800,
        description: "Half Chicken Karahi + 2 Roghni Naan + Big Raita",
    },
    ReferenceDeal {
        title: "BOGOF Pizza Deal",
        restaurant: "Pizza 21",
        price: 1500,
        description: "Buy one Large Pizza get one Regular Free (Valid all day)",
    },
    ReferenceDeal {
        title: "Chinese Fusion Bowl",
        restaurant: "Bamboo Union",
        price: 950,
        description: "Chicken Manchurian or Chowmein with Egg Fried Rice",
    },
    ReferenceDeal {
        title: "Royal BBQ Platter",
        restaurant: "Haveli Restaurant",
        price: 2500,
        description: "4 Reshmi Kababs, 4 Malai Boti, 2 Naans & Salad",
    },
    ReferenceDeal {
        title: "Howdy Style Family Bundle",
        restaurant: "Howdy",
        price: 3200,
        description: "4 Burgers (Son of a Bun), 4 Fries, 1.5L Drink",
    },
    ReferenceDeal {
        title: "Lahori Nashta Special",
        restaurant: "Phajja Siri Paye",
        price: 600,
        description: "1 Plate Paye + 2 Kulcha + Lassi",
    },
];
