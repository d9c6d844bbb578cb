//! The fixed service catalog shipped with the platform.
//!
//! 24 bookable services across 8 categories, declared in the order the
//! product presents them. The `category_route` values are the navigation
//! targets the mobile clients expect and must stay stable.

use super::ServiceItem;

fn item(
    id: &str,
    title: &str,
    description: &str,
    category: &str,
    category_route: &str,
    keywords: &[&str],
) -> ServiceItem {
    ServiceItem {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        category_route: category_route.to_string(),
        keywords: keywords.iter().map(ToString::to_string).collect(),
    }
}

#[allow(clippy::too_many_lines)]
pub(super) fn entries() -> Vec<ServiceItem> {
    vec![
        // Electrical
        item(
            "wiring-repair",
            "Wiring Repair",
            "Troubleshooting and repair of faulty house wiring, breakers, and panels.",
            "Electrical",
            "ElectricalServices",
            &["electrician", "short circuit", "breaker", "panel", "rewiring"],
        ),
        item(
            "lighting-installation",
            "Lighting Installation",
            "Installation of ceiling lights, chandeliers, and outdoor fixtures.",
            "Electrical",
            "ElectricalServices",
            &["electrician", "ceiling light", "chandelier", "fixture"],
        ),
        item(
            "outlet-switch-repair",
            "Outlet & Switch Repair",
            "Replacement of busted outlets, sockets, and wall switches.",
            "Electrical",
            "ElectricalServices",
            &["electrician", "socket", "outlet", "switch"],
        ),
        item(
            "electrical-safety-inspection",
            "Electrical Safety Inspection",
            "Full safety audit of household electrical systems with a written report.",
            "Electrical",
            "ElectricalServices",
            &["electrician", "audit", "inspection", "grounding"],
        ),
        // Plumbing
        item(
            "leak-repair",
            "Leak Repair",
            "Fixing dripping faucets, burst pipes, and hidden water leaks.",
            "Plumbing",
            "PlumbingServices",
            &["plumber", "faucet", "pipe", "leak", "tubero"],
        ),
        item(
            "drain-declogging",
            "Drain Declogging",
            "Clearing clogged sinks, floor drains, and sewer lines.",
            "Plumbing",
            "PlumbingServices",
            &["plumber", "clogged", "sink", "drain", "sewer"],
        ),
        item(
            "toilet-repair",
            "Toilet Repair",
            "Repair and replacement of toilets, flush valves, and fittings.",
            "Plumbing",
            "PlumbingServices",
            &["plumber", "toilet", "flush", "bowl"],
        ),
        item(
            "water-heater-installation",
            "Water Heater Installation",
            "Supply and installation of electric and gas water heaters.",
            "Plumbing",
            "PlumbingServices",
            &["plumber", "heater", "shower"],
        ),
        // Aircon
        item(
            "aircon-cleaning",
            "Aircon Cleaning",
            "General cleaning of air conditioning units (split-type and window units).",
            "Aircon",
            "AirconServices",
            &["ac", "aircon", "hvac", "freon"],
        ),
        item(
            "aircon-repair",
            "Aircon Repair",
            "Diagnosis and repair of air conditioners that leak, rattle, or fail to cool.",
            "Aircon",
            "AirconServices",
            &["ac", "aircon", "hvac", "compressor"],
        ),
        item(
            "aircon-installation",
            "Aircon Installation",
            "Mounting and commissioning of new split-type air conditioning units.",
            "Aircon",
            "AirconServices",
            &["ac", "aircon", "hvac", "split-type"],
        ),
        // Cleaning
        item(
            "home-deep-cleaning",
            "Home Deep Cleaning",
            "Top-to-bottom cleaning of kitchens, bathrooms, and living areas.",
            "Cleaning",
            "CleaningServices",
            &["housekeeping", "disinfect", "deep clean"],
        ),
        item(
            "post-construction-cleaning",
            "Post-Construction Cleaning",
            "Removal of dust and debris after renovation or construction work.",
            "Cleaning",
            "CleaningServices",
            &["housekeeping", "renovation", "debris"],
        ),
        item(
            "sofa-mattress-cleaning",
            "Sofa & Mattress Cleaning",
            "Shampoo and vacuum treatment for upholstery, sofas, and mattresses.",
            "Cleaning",
            "CleaningServices",
            &["housekeeping", "upholstery", "shampoo"],
        ),
        // Carpentry
        item(
            "furniture-repair",
            "Furniture Repair",
            "Restoration of wobbly chairs, tables, and wooden furniture.",
            "Carpentry",
            "CarpentryServices",
            &["carpenter", "woodwork", "furniture"],
        ),
        item(
            "door-window-repair",
            "Door & Window Repair",
            "Realignment and repair of doors, windows, hinges, and locks.",
            "Carpentry",
            "CarpentryServices",
            &["carpenter", "hinge", "lock", "jamb"],
        ),
        item(
            "cabinet-installation",
            "Cabinet Installation",
            "Custom-fit kitchen and bedroom cabinets, built and installed.",
            "Carpentry",
            "CarpentryServices",
            &["carpenter", "cabinet", "shelving"],
        ),
        // Appliance Repair
        item(
            "refrigerator-repair",
            "Refrigerator Repair",
            "Repair of refrigerators and freezers that leak or fail to cool.",
            "Appliance Repair",
            "ApplianceServices",
            &["technician", "fridge", "freezer"],
        ),
        item(
            "washing-machine-repair",
            "Washing Machine Repair",
            "Repair of top-load and front-load washing machines.",
            "Appliance Repair",
            "ApplianceServices",
            &["technician", "laundry", "spin", "drum"],
        ),
        item(
            "tv-mounting",
            "TV Mounting",
            "Wall mounting of flat-screen TVs with concealed cabling.",
            "Appliance Repair",
            "ApplianceServices",
            &["technician", "bracket", "wall mount"],
        ),
        // Pest Control
        item(
            "general-pest-control",
            "General Pest Control",
            "Treatment against cockroaches, ants, rodents, and mosquitoes.",
            "Pest Control",
            "PestControlServices",
            &["exterminator", "cockroach", "rodent", "fumigation"],
        ),
        item(
            "termite-treatment",
            "Termite Treatment",
            "Soil treatment and baiting systems against termite infestation.",
            "Pest Control",
            "PestControlServices",
            &["exterminator", "anay", "baiting"],
        ),
        // Painting
        item(
            "interior-painting",
            "Interior Painting",
            "Repainting of interior walls and ceilings, including surface preparation.",
            "Painting",
            "PaintingServices",
            &["painter", "repaint", "wall"],
        ),
        item(
            "exterior-painting",
            "Exterior Painting",
            "Weather-proof painting of exterior walls, gates, and fences.",
            "Painting",
            "PaintingServices",
            &["painter", "weatherproof", "facade"],
        ),
    ]
}
