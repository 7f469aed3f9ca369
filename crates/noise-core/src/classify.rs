//! ICAO type designator classification.
//!
//! Covers the types commonly seen at GA airports like KJPX. Codes missing
//! from these lists classify as `Unknown`; add them here as they show up.

use crate::models::AircraftCategory;

const HELICOPTER_TYPES: &[&str] = &[
    // Robinson
    "R22", "R44", "R66",
    // Airbus Helicopters / Eurocopter
    "EC20", "EC25", "EC30", "EC35", "EC45", "EC55", "EC75", "AS32", "AS33", "AS35", "AS50",
    "AS55", "AS65", "H125", "H130", "H135", "H145", "H155", "H160", "H175", "H215", "H225",
    // Bell
    "B06", "B06T", "B204", "B205", "B206", "B209", "B212", "B214", "B222", "B230", "B407",
    "B412", "B427", "B429", "B430", "B505", "B525",
    // Sikorsky
    "S58", "S61", "S64", "S70", "S76", "S76B", "S76C", "S76D", "S92", "H60", "S300",
    // Leonardo
    "A109", "A119", "A139", "A149", "A169", "A189", "AW09", "AW39", "AW69", "AW89",
    // MD / Hughes / Schweizer / Enstrom
    "MD52", "MD60", "EXPL", "NOTR", "H369", "H500", "EN28", "EN48", "S269", "S333", "H269",
    "HELI",
];

const JET_TYPES: &[&str] = &[
    // Gulfstream
    "GLF2", "GLF3", "GLF4", "GLF5", "GLF6", "GLEX", "G150", "G200", "G280", "G350", "G450",
    "G500", "G550", "G600", "G650", "G700", "G800",
    // Bombardier
    "CL30", "CL35", "CL60", "BD70", "GL5T", "GL6T", "GL7T", "LJ23", "LJ24", "LJ25", "LJ28",
    "LJ31", "LJ35", "LJ36", "LJ40", "LJ45", "LJ55", "LJ60", "LJ70", "LJ75",
    // Cessna Citation
    "C500", "C501", "C510", "C525", "C526", "C550", "C551", "C560", "C56X", "C650", "C680",
    "C700", "C750",
    // Dassault
    "FA10", "FA20", "FA50", "FA7X", "FA8X", "F900", "F2TH", "FA6X",
    // Embraer
    "E135", "E145", "E170", "E190", "E195", "E50P", "E55P", "E35L", "E545", "E550",
    // Others
    "PC24", "HDJT", "EA50", "SF50", "PRM1", "H25A", "H25B", "H25C", "AJET",
];

const FIXED_WING_TYPES: &[&str] = &[
    // Cessna
    "C150", "C152", "C170", "C172", "C177", "C180", "C182", "C185", "C206", "C207", "C208",
    "C210", "C310", "C320", "C337", "C340", "C402", "C414", "C441",
    // Piper
    "P28A", "P28B", "P28R", "P28T", "PA18", "PA22", "PA23", "PA24", "PA27", "PA28", "PA30",
    "PA31", "PA32", "PA34", "PA38", "PA44", "PA46", "PA60",
    // Beechcraft
    "BE33", "BE35", "BE36", "BE55", "BE58", "BE76", "BE9L", "BE20", "BE30", "B200", "B300",
    "B350",
    // Mooney
    "M20J", "M20K", "M20P", "M20R", "M20T", "M20U",
    // Cirrus / Diamond / Pilatus / TBM / de Havilland
    "SR20", "SR22", "DA20", "DA40", "DA42", "DA50", "DA62", "PC12", "TBM", "TBM7", "TBM8",
    "TBM9", "DHC2", "DHC3", "DHC6",
];

/// Classify an ICAO type designator into a dashboard category.
pub fn classify_aircraft(type_code: &str) -> AircraftCategory {
    let code = type_code.trim().to_ascii_uppercase();
    if code.is_empty() {
        return AircraftCategory::Unknown;
    }

    if HELICOPTER_TYPES.contains(&code.as_str()) {
        AircraftCategory::Helicopter
    } else if JET_TYPES.contains(&code.as_str()) {
        AircraftCategory::Jet
    } else if FIXED_WING_TYPES.contains(&code.as_str()) {
        AircraftCategory::FixedWing
    } else {
        AircraftCategory::Unknown
    }
}
