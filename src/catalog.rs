// src/catalog.rs
// Question catalog: full question text → (short display label, category).
//
// The catalog is maintained by hand and supplied as data, not computed.
// A built-in table covers the survey wave this tool was written for; later
// waves can swap in a JSON file (--catalog) without touching the scoring
// core. Lookup misses are fatal and carry the unmatched text, so extending
// the table is a copy-paste job.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::PollError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum Category {
    #[serde(rename = "A2A")]
    A2A,
    #[serde(rename = "A2G")]
    A2G,
    #[serde(rename = "Navigation/Avionics")]
    NavAvionics,
    #[serde(rename = "Countermeasures")]
    Countermeasures,
    #[serde(rename = "Weapon")]
    Weapon,
    #[serde(rename = "Flight Planning/Misc")]
    FlightPlanningMisc,
}

impl Category {
    /// Fixed presentation order for rollups.
    pub const ALL: [Category; 6] = [
        Category::A2A,
        Category::A2G,
        Category::NavAvionics,
        Category::Countermeasures,
        Category::Weapon,
        Category::FlightPlanningMisc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::A2A => "A2A",
            Category::A2G => "A2G",
            Category::NavAvionics => "Navigation/Avionics",
            Category::Countermeasures => "Countermeasures",
            Category::Weapon => "Weapon",
            Category::FlightPlanningMisc => "Flight Planning/Misc",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalog entry as it appears in a JSON catalog file:
/// `{ "<full question text>": { "short": "...", "category": "A2G" }, ... }`
#[derive(Clone, Debug, Deserialize)]
struct Entry {
    short: String,
    category: Category,
}

pub struct Catalog {
    map: HashMap<String, (String, Category)>,
}

impl Catalog {
    /// The table shipped with the tool (one survey wave, verbatim —
    /// including its label quirks).
    pub fn builtin() -> Self {
        let map = DEFAULT_CATALOG
            .iter()
            .map(|&(q, short, cat)| (s!(q), (s!(short), cat)))
            .collect();
        Self { map }
    }

    pub fn from_json_str(text: &str) -> Result<Self, PollError> {
        let entries: HashMap<String, Entry> = serde_json::from_str(text)?;
        let map = entries
            .into_iter()
            .map(|(q, e)| (q, (e.short, e.category)))
            .collect();
        Ok(Self { map })
    }

    pub fn load(path: &Path) -> Result<Self, PollError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Exact-text lookup; the extractor's whitespace/entity normalization
    /// has to match the catalog's spelling for this to hit.
    pub fn lookup(&self, question: &str) -> Result<(&str, Category), PollError> {
        self.map
            .get(question)
            .map(|(short, cat)| (short.as_str(), *cat))
            .ok_or_else(|| PollError::UnknownQuestion(s!(question)))
    }
}

#[rustfmt::skip]
const DEFAULT_CATALOG: &[(&str, &str, Category)] = &[
    ("ATFLIR", "ATFLIR", Category::A2G),
    ("New and updated HOTAS functions", "HOTAS Update", Category::NavAvionics),
    ("AG radar. EXP modes (1-2-3), GMT and GMTT modes, and SEA search mode", "AG Radar Modes", Category::A2G),
    ("Azimuth / Elevation air-to-air radar mode with AUTO IFF modes", "AUTO IFF", Category::A2A),
    ("Coupled autopilot modes", "Coupled A/P", Category::NavAvionics),
    ("ACLS mode", "ACLS Mode", Category::NavAvionics),
    ("Datalink symbols, EW symbols, and AG mode for JHMCS", "JHMCS Symbology", Category::NavAvionics),
    ("Correct possible flare number loaded", "Flare # Correction", Category::Countermeasures),
    ("ASPJ ECM jammer", "ASPJ ECM Jammer", Category::Countermeasures),
    ("Adjust countermeasure programs when on ground", "Adjust CM on Ground", Category::Countermeasures),
    ("Mark points", "Mark points", Category::NavAvionics),
    ("Offset waypoints", "Offset W/P", Category::NavAvionics),
    ("SLAM-ER air-to-surface missile", "SLAM-ER", Category::Weapon),
    ("Harpoon, SEA radar directed mode (FTT)", "Harpoon FTT", Category::Weapon),
    ("Update flight model for ground effect, takeoff pitch effects, auto-pilot based on FPM, touch and go handling, and other remaining flight model issues", "Flight Model Issues", Category::NavAvionics),
    ("Jamming targets not displayed on radar, should be in dugout", "Jamming on Radar", Category::A2A),
    ("Aircraft Setup Card in Options", "A/C Setup Card", Category::FlightPlanningMisc),
    ("Mission Card for 60 waypoints with properties (Sequence 1, 2, 3, PP, PB, Initial, etc.)", "60 Waypoints", Category::FlightPlanningMisc),
    ("RWS RAID air-to-air radar sub-mode missing", "RWS RAID A2A", Category::A2A),
    ("Radar SPOT mode", "A2A SPOT Mode", Category::A2A),
    ("AG radar interleaved mode (SEA and GMT)", "AG SEA/GTM Mode", Category::A2G),
    ("AG radar. AGR (air to ground ranging) mode", "AGR Mode", Category::A2G),
    ("HARM Pre-Briefed mode", "HARM Pre-Briefed", Category::Weapon),
    ("GBU-32 JDAM", "GBU-32 JDAM", Category::Weapon),
    ("Select AA and AG on ground", "AA/AG on Ground", Category::FlightPlanningMisc),
    ("TALD decoy", "TALD Decoy", Category::Weapon),
    ("AIM-7P", "AIM-7P", Category::Weapon),
    ("Mk-77 firebomb", "MK-77 Firebomb", Category::Weapon),
    ("GBU-24 Paveway III LGB", "GBU-27 Paveway", Category::Weapon),
    ("IN LAR cue is missing", "A2A LAR gun cue", Category::A2A),
    ("The missing function of WIDE radar auto acquisition mode, cannot slew it", "WIDE Radar mode", Category::A2A),
    ("UFC BU page", "UFC B/U Page", Category::FlightPlanningMisc),
    ("Flight member TGT ground target SA page symbol missing", "TGT SA Symbology", Category::A2G),
    ("Fuel BIT (FLBIT) Page", "Fuel BIT Page", Category::NavAvionics),
    ("MUMI Page", "MUMI Page", Category::FlightPlanningMisc),
    ("Gun sparks at night", "Gun Sparks", Category::FlightPlanningMisc),
    ("INS / GPS full simulation and alignment (carrier and ground)", "INS/GPS Alignment", Category::NavAvionics),
    ("LOFT modes, ARM, JPF, and other JDAM and JSOW remaining functions", "JDAM/JSOW Modes", Category::Weapon),
    ("BDU-45 Training Bomb", "BDU-45 Train. Bomb", Category::Weapon),
    ("GEN-X decoy", "GEN-X Decoy", Category::Weapon),
    ("S/A and AUTO countermeasure modes", "S/A & AUTO CM Modes", Category::Countermeasures),
];
