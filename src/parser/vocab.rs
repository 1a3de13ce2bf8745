//! Fixed keyword tables shared by the tagging and resolving stages.

/// Legal-entity and business suffixes, matched as whole words, case-insensitive.
pub const COMPANY_SUFFIXES: &[&str] = &[
    "inc",
    "ltd",
    "llc",
    "corp",
    "limited",
    "pvt ltd",
    "private limited",
    "group",
    "solutions",
    "global",
    "systems",
    "technologies",
    "company",
    "gmbh",
    "ag",
    "plc",
    "s.r.l.",
];

/// Matched as case-insensitive substrings.
pub const JOB_KEYWORDS: &[&str] = &[
    "Manager",
    "Director",
    "Chief",
    "Lead",
    "Head",
    "Consultant",
    "Engineer",
    "Developer",
    "Designer",
    "Sales",
    "Executive",
    "CEO",
    "CTO",
    "Founder",
    "President",
];

/// Street, unit and locality fragments. Plain substring match on the
/// lowercased line, so short entries such as "ave" or "ida" fire inside
/// longer words.
pub const ADDRESS_KEYWORDS: &[&str] = &[
    "st.",
    "road",
    "rd.",
    "ave",
    "lane",
    "suite",
    "floor",
    "block",
    "sector",
    "hwy",
    "bldg",
    "plot",
    "h.no",
    "industrial",
    "phase",
    "mandal",
    "taluka",
    "village",
    "dist",
    "district",
    "pincode",
    "pin code",
    "opposite",
    "near",
    "beside",
    "tower",
    "garden",
    "park",
    "square",
    "colony",
    "nagar",
    "enclave",
    "boulevard",
    "plaza",
    "terrace",
    "po box",
    "postal",
    "zip",
    "apt",
    "unit",
    "level",
    "ida",
    "industrial estate",
];

/// Region, state and country names. Substring match, case-insensitive.
pub const REGIONS: &[&str] = &[
    "Andhra",
    "Assam",
    "Bihar",
    "Gujarat",
    "Haryana",
    "Karnataka",
    "Kerala",
    "Maharashtra",
    "Punjab",
    "Rajasthan",
    "Tamil Nadu",
    "Telangana",
    "Uttar",
    "Bengal",
    "Delhi",
    "California",
    "New York",
    "Texas",
    "Province",
    "County",
    "Region",
    "State",
];

/// Whole words marking a line as a phone/contact line.
pub const PHONE_KEYWORDS: &[&str] = &["tel", "phone", "mobile", "cell", "fax"];

/// Email domains that say nothing about the holder's employer.
pub const FREE_MAIL_DOMAINS: &[&str] = &["gmail", "yahoo", "hotmail", "outlook"];
