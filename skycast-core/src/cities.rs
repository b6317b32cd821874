//! Static city reference data used by the suggestion ranker.
//!
//! Two lists: a small curated set of "major" cities that get a manual
//! relevance boost in autocomplete, and a larger set of popular cities used
//! for secondary-tier matching. Both are embedded in the binary and never
//! mutated. They are not required to be disjoint; the ranker deduplicates
//! at classification time.

/// Curated cities given ranking priority in autocomplete.
pub const MAJOR_CITIES: &[&str] = &[
    "London",
    "New York",
    "Tokyo",
    "Paris",
    "São Paulo",
    "Sydney",
    "Los Angeles",
    "Chicago",
    "Toronto",
    "Berlin",
    "Madrid",
    "Rome",
    "Moscow",
    "Beijing",
    "Shanghai",
    "Mumbai",
    "Delhi",
    "Dubai",
    "Singapore",
    "Hong Kong",
    "Seoul",
    "Mexico City",
    "Buenos Aires",
    "Rio de Janeiro",
    "Cairo",
    "Istanbul",
    "Bangkok",
    "Amsterdam",
    "Barcelona",
    "Lisbon",
];

/// Larger reference set used for secondary-tier matching.
pub const POPULAR_CITIES: &[&str] = &[
    "Aarhus",
    "Abu Dhabi",
    "Accra",
    "Adelaide",
    "Ahmedabad",
    "Albuquerque",
    "Alexandria",
    "Algiers",
    "Almaty",
    "Anchorage",
    "Ankara",
    "Antwerp",
    "Asunción",
    "Athens",
    "Atlanta",
    "Auckland",
    "Austin",
    "Baghdad",
    "Baku",
    "Baltimore",
    "Bandung",
    "Bangalore",
    "Basel",
    "Beirut",
    "Belfast",
    "Belgrade",
    "Belo Horizonte",
    "Bergen",
    "Bilbao",
    "Birmingham",
    "Bogotá",
    "Bologna",
    "Bordeaux",
    "Boston",
    "Brasília",
    "Bratislava",
    "Brisbane",
    "Bristol",
    "Brussels",
    "Bucharest",
    "Budapest",
    "Busan",
    "Calgary",
    "Cape Town",
    "Caracas",
    "Cardiff",
    "Cartagena",
    "Casablanca",
    "Chengdu",
    "Chennai",
    "Christchurch",
    "Cincinnati",
    "Cleveland",
    "Cologne",
    "Colombo",
    "Columbus",
    "Copenhagen",
    "Curitiba",
    "Dakar",
    "Dallas",
    "Dar es Salaam",
    "Denver",
    "Detroit",
    "Dhaka",
    "Doha",
    "Dortmund",
    "Dresden",
    "Dublin",
    "Durban",
    "Düsseldorf",
    "Edinburgh",
    "Edmonton",
    "Florence",
    "Fortaleza",
    "Frankfurt",
    "Fukuoka",
    "Geneva",
    "Genoa",
    "Glasgow",
    "Gothenburg",
    "Guadalajara",
    "Guangzhou",
    "Guatemala City",
    "Hamburg",
    "Hanoi",
    "Harare",
    "Havana",
    "Helsinki",
    "Ho Chi Minh City",
    "Honolulu",
    "Houston",
    "Hyderabad",
    "Indianapolis",
    "Jaipur",
    "Jakarta",
    "Jeddah",
    "Jerusalem",
    "Johannesburg",
    "Kampala",
    "Kansas City",
    "Karachi",
    "Kathmandu",
    "Kiev",
    "Kingston",
    "Kolkata",
    "Kraków",
    "Kuala Lumpur",
    "Kyoto",
    "Lagos",
    "Lahore",
    "Las Vegas",
    "Leeds",
    "Leipzig",
    "Lima",
    "Liverpool",
    "Ljubljana",
    "Long Beach",
    "Lucknow",
    "Luxembourg",
    "Lyon",
    "Manchester",
    "Manila",
    "Marrakesh",
    "Marseille",
    "Medellín",
    "Melbourne",
    "Memphis",
    "Miami",
    "Milan",
    "Milwaukee",
    "Minneapolis",
    "Minsk",
    "Monterrey",
    "Montevideo",
    "Montreal",
    "Munich",
    "Nagoya",
    "Nairobi",
    "Nanjing",
    "Naples",
    "Nashville",
    "New Orleans",
    "Newcastle",
    "Nice",
    "Nuremberg",
    "Orlando",
    "Osaka",
    "Oslo",
    "Ottawa",
    "Oxford",
    "Panama City",
    "Perth",
    "Philadelphia",
    "Phnom Penh",
    "Phoenix",
    "Pittsburgh",
    "Port Louis",
    "Portland",
    "Porto",
    "Porto Alegre",
    "Prague",
    "Pretoria",
    "Pune",
    "Quebec City",
    "Quito",
    "Recife",
    "Reykjavik",
    "Riga",
    "Riyadh",
    "Rotterdam",
    "Sacramento",
    "Saint Petersburg",
    "Salt Lake City",
    "Salvador",
    "San Antonio",
    "San Diego",
    "San Francisco",
    "San José",
    "San Juan",
    "Santiago",
    "Santo Domingo",
    "Sapporo",
    "Seattle",
    "Seville",
    "Shenzhen",
    "Sofia",
    "Stockholm",
    "Strasbourg",
    "Stuttgart",
    "Surabaya",
    "Taipei",
    "Tallinn",
    "Tampa",
    "Tashkent",
    "Tbilisi",
    "Tehran",
    "Tel Aviv",
    "The Hague",
    "Thessaloniki",
    "Tianjin",
    "Tijuana",
    "Tunis",
    "Turin",
    "Valencia",
    "Valparaíso",
    "Vancouver",
    "Venice",
    "Vienna",
    "Vilnius",
    "Warsaw",
    "Wellington",
    "Winnipeg",
    "Wuhan",
    "Yerevan",
    "Yokohama",
    "Zagreb",
    "Zurich",
];
