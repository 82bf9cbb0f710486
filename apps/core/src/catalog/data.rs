//! Static option lists backing the capture forms: brands, per-brand
//! models, and the technical spec suggestion lists.

pub const CAR_BRANDS: &[&str] = &[
    "Toyota",
    "Honda",
    "Ford",
    "Chevrolet",
    "Nissan",
    "Volkswagen",
    "BMW",
    "Mercedes-Benz",
    "Audi",
    "Hyundai",
    "Kia",
    "Mazda",
    "Subaru",
    "Lexus",
    "Jeep",
    "Ram",
    "Dodge",
    "Chrysler",
    "Volvo",
    "Porsche",
    "Ferrari",
    "Lamborghini",
    "Maserati",
    "Aston Martin",
    "McLaren",
    "Bugatti",
    "Pagani",
    "Koenigsegg",
    "Tesla",
    "Rivian",
    "Lucid",
    "Polestar",
    "BYD",
    "MG",
    "Chery",
    "Haval",
    "Great Wall",
    "JAC",
    "Changan",
    "Geely",
];

/// Suggested models for the brands that ship a curated list. Brands
/// outside this table accept free-text model input.
pub fn models_for(brand: &str) -> &'static [&'static str] {
    match brand {
        "Toyota" => &[
            "Corolla",
            "Camry",
            "RAV4",
            "Highlander",
            "Tacoma",
            "Tundra",
            "Prius",
            "Yaris",
            "Supra",
            "GR86",
            "Sienna",
            "4Runner",
            "Sequoia",
            "Land Cruiser",
        ],
        "Honda" => &[
            "Civic",
            "Accord",
            "CR-V",
            "Pilot",
            "Odyssey",
            "HR-V",
            "Passport",
            "Ridgeline",
            "Insight",
        ],
        "Ford" => &[
            "F-150",
            "Mustang",
            "Explorer",
            "Escape",
            "Bronco",
            "Edge",
            "Expedition",
            "Ranger",
            "Maverick",
        ],
        "Chevrolet" => &[
            "Silverado",
            "Equinox",
            "Malibu",
            "Tahoe",
            "Suburban",
            "Traverse",
            "Colorado",
            "Camaro",
            "Corvette",
            "Blazer",
        ],
        "Nissan" => &[
            "Altima",
            "Rogue",
            "Sentra",
            "Pathfinder",
            "Frontier",
            "Titan",
            "Versa",
            "Kicks",
            "Murano",
            "Armada",
            "GT-R",
            "Z",
        ],
        "Volkswagen" => &[
            "Jetta", "Golf", "Tiguan", "Atlas", "Passat", "Arteon", "ID.4", "Taos",
        ],
        "BMW" => &[
            "3 Series", "5 Series", "X3", "X5", "X7", "M3", "M4", "M5", "i4", "iX", "Z4",
        ],
        "Mercedes-Benz" => &[
            "C-Class", "E-Class", "S-Class", "GLC", "GLE", "GLS", "A-Class", "CLA", "G-Class",
            "AMG GT",
        ],
        "Audi" => &["A3", "A4", "A6", "Q3", "Q5", "Q7", "Q8", "e-tron", "RS6", "R8"],
        "Hyundai" => &[
            "Elantra", "Sonata", "Tucson", "Santa Fe", "Palisade", "Kona", "Venue", "Ioniq 5",
            "Ioniq 6",
        ],
        "Kia" => &[
            "Forte", "K5", "Sportage", "Sorento", "Telluride", "Soul", "Seltos", "EV6",
            "Carnival",
        ],
        "Mazda" => &[
            "Mazda3", "Mazda6", "CX-5", "CX-30", "CX-50", "CX-90", "MX-5 Miata",
        ],
        "Subaru" => &[
            "Impreza", "Legacy", "Crosstrek", "Forester", "Outback", "Ascent", "WRX", "BRZ",
        ],
        "Tesla" => &["Model 3", "Model Y", "Model S", "Model X", "Cybertruck"],
        _ => &[],
    }
}

pub const TRANSMISSION_TYPES: &[&str] = &[
    "Manual",
    "Automática",
    "CVT (Transmisión Variable Continua)",
    "DCT (Doble Embrague)",
    "Tiptronic",
    "Semi-automática",
];

pub const ENGINE_TYPES: &[&str] = &[
    "1.0L 3-Cilindros",
    "1.2L 3-Cilindros Turbo",
    "1.4L 4-Cilindros Turbo",
    "1.5L 4-Cilindros",
    "1.5L 4-Cilindros Turbo",
    "1.6L 4-Cilindros",
    "1.8L 4-Cilindros",
    "2.0L 4-Cilindros",
    "2.0L 4-Cilindros Turbo",
    "2.4L 4-Cilindros",
    "2.5L 4-Cilindros",
    "2.5L 5-Cilindros",
    "3.0L V6",
    "3.0L 6-Cilindros en Línea Turbo",
    "3.5L V6",
    "3.6L V6",
    "3.8L V6",
    "4.0L V8",
    "5.0L V8",
    "5.2L V10",
    "6.2L V8",
    "6.2L V8 Supercargado",
    "Eléctrico (Motor Simple)",
    "Eléctrico (Motor Dual)",
    "Eléctrico (Tri-Motor)",
    "Híbrido",
];

pub const ELECTRIC_MOTOR_TYPES: &[&str] = &[
    "Motor Síncrono de Imanes Permanentes (PMSM)",
    "Motor de Inducción (Asíncrono)",
];

pub const FUEL_TYPES: &[&str] = &[
    "Gasolina",
    "Diesel",
    "Híbrido",
    "Híbrido Enchufable (PHEV)",
    "Eléctrico",
    "Gas Natural",
    "Hidrógeno",
];
