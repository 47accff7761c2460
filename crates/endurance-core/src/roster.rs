//! Entry roster: the (team, driver, class) list a race is built from.
//!
//! The roster is an input owned by the caller. `default_entries` provides
//! the 2025 Le Mans entry list, using the first listed driver of each car.

use serde::{Deserialize, Serialize};

use crate::constants::MAX_NAME_LEN;
use crate::enums::CarClass;

/// A single entry on the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub team: String,
    pub driver: String,
    pub class: CarClass,
}

impl RosterEntry {
    pub fn new(team: impl Into<String>, driver: impl Into<String>, class: CarClass) -> Self {
        Self {
            team: team.into(),
            driver: driver.into(),
            class,
        }
    }
}

/// Truncate a name to `MAX_NAME_LEN` bytes without splitting a character.
pub fn truncate_name(name: &str) -> String {
    if name.len() <= MAX_NAME_LEN {
        return name.to_owned();
    }
    let mut end = MAX_NAME_LEN;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    name[..end].to_owned()
}

const ENTRY_LIST_2025: &[(&str, &str, CarClass)] = &[
    // Hypercar
    ("Aston Martin Thor Team", "Harry Tincknell", CarClass::Hypercar),
    ("Aston Martin Thor Team", "Alex Riberas", CarClass::Hypercar),
    ("Porsche Penske", "Felipe Nasr", CarClass::Hypercar),
    ("Porsche Penske", "Julien Andlauer", CarClass::Hypercar),
    ("Porsche Penske", "Kevin Estre", CarClass::Hypercar),
    ("Toyota Gazoo Racing", "Mike Conway", CarClass::Hypercar),
    ("Toyota Gazoo Racing", "Sebastien Buemi", CarClass::Hypercar),
    ("Cadillac Hertz Jota", "Will Stevens", CarClass::Hypercar),
    ("Cadillac Hertz Jota", "Earl Bamber", CarClass::Hypercar),
    ("BMW M Team WRT", "Dries Vanthoor", CarClass::Hypercar),
    ("BMW M Team WRT", "Rene Rast", CarClass::Hypercar),
    ("Alpine Endurance", "Paul-Loup Chatin", CarClass::Hypercar),
    ("Alpine Endurance", "Mick Schumacher", CarClass::Hypercar),
    ("Ferrari AF Corse", "Antonio Fuoco", CarClass::Hypercar),
    ("Ferrari AF Corse", "A. Pier Guidi", CarClass::Hypercar),
    ("AF Corse (Yellow)", "Robert Kubica", CarClass::Hypercar),
    ("Peugeot TotalEnergies", "Paul Di Resta", CarClass::Hypercar),
    ("Peugeot TotalEnergies", "Loic Duval", CarClass::Hypercar),
    ("Proton Competition", "Neel Jani", CarClass::Hypercar),
    ("Cadillac WTR", "Ricky Taylor", CarClass::Hypercar),
    ("Cadillac Whelen", "Jack Aitken", CarClass::Hypercar),
    // LMP2
    ("Iron Lynx Proton", "Jonas Ried", CarClass::Lmp2),
    ("Proton Competition", "Giorgio Roda", CarClass::Lmp2),
    ("United Autosports", "R. van der Zande", CarClass::Lmp2),
    ("United Autosports", "Daniel Schneider", CarClass::Lmp2),
    ("Inter Europol", "Jakub Smiechowski", CarClass::Lmp2),
    ("IDEC Sport", "Paul Lafargue", CarClass::Lmp2),
    ("AO by TF", "PJ Hyett", CarClass::Lmp2),
    ("Algarve Pro Racing", "Matthias Kaiser", CarClass::Lmp2),
    ("Vector Sport", "Ryan Cullen", CarClass::Lmp2),
    // LMGT3
    ("Team WRT (BMW)", "Valentino Rossi", CarClass::Gt3),
    ("Team WRT (BMW)", "Yasser Shahin", CarClass::Gt3),
    ("Iron Dames", "Sarah Bovy", CarClass::Gt3),
    ("Manthey PureRxcing", "Antares Au", CarClass::Gt3),
    ("Manthey EMA", "Ryan Hardwick", CarClass::Gt3),
    ("TF Sport (Corvette)", "Tom Van Rompuy", CarClass::Gt3),
    ("TF Sport (Corvette)", "Hiroshi Koizumi", CarClass::Gt3),
    ("Vista AF Corse", "Thomas Flohr", CarClass::Gt3),
    ("Vista AF Corse", "Francois Heriau", CarClass::Gt3),
    ("Heart of Racing", "Ian James", CarClass::Gt3),
    ("Proton (Mustang)", "Ben Tuck", CarClass::Gt3),
    ("Akkodis ASP (Lexus)", "Arnold Robin", CarClass::Gt3),
];

/// The built-in 2025 entry list, in grid order.
pub fn default_entries() -> Vec<RosterEntry> {
    ENTRY_LIST_2025
        .iter()
        .map(|&(team, driver, class)| RosterEntry::new(team, driver, class))
        .collect()
}
