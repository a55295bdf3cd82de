//! Common nuclide identity structures

// external crates
use serde::{Deserialize, Serialize};

// internal modules
use crate::error::{Error, Result};
use crate::parsers::nuclide_from_str;

// bateman crates
use bateman_utils::{f, StringExt};

/// Element symbols indexed by proton number, index 0 being the bare neutron
pub(crate) const SYMBOLS: [&str; 119] = [
    "Nn", "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg",
    "Al", "Si", "P", "S", "Cl", "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn",
    "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As", "Se", "Br", "Kr", "Rb",
    "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm",
    "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta",
    "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl", "Pb", "Bi", "Po", "At",
    "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk",
    "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt",
    "Ds", "Rg", "Cn", "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

/// Canonical nuclide identifier
///
/// Encodes the proton number `Z`, mass number `A`, and excitation state `S`
/// as the single integer `ZZZAAASSSS`. Two nuclides are equal exactly when
/// their encoded integers are equal, which makes this the key type for every
/// map and set in the toolkit.
///
/// ```rust
/// # use bateman_data::Zam;
/// let cobalt60 = Zam::new(27, 60, 0);
/// assert_eq!(cobalt60.0, 270600000);
/// assert_eq!(cobalt60.name(), "Co60");
///
/// let silver110m1 = Zam::new(47, 110, 1);
/// assert_eq!(silver110m1.name(), "Ag110m1");
/// ```
#[derive(
    Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(transparent)]
pub struct Zam(pub u32);

impl Zam {
    /// Encode a proton number, mass number, and excitation state
    pub const fn new(z: u32, a: u32, state: u32) -> Self {
        Self(z * 10_000_000 + a * 10_000 + state)
    }

    /// Proton number
    pub const fn z(&self) -> u32 {
        self.0 / 10_000_000
    }

    /// Mass number (total nucleons)
    pub const fn a(&self) -> u32 {
        (self.0 / 10_000) % 1_000
    }

    /// Excitation state, 0 for the ground state
    pub const fn state(&self) -> u32 {
        self.0 % 10_000
    }

    /// Element symbol for the proton number, e.g. "Co"
    ///
    /// Anything beyond the known periodic table is shown as "??".
    pub fn symbol(&self) -> &'static str {
        SYMBOLS.get(self.z() as usize).copied().unwrap_or("??")
    }

    /// A name for the nuclide with consistent formatting
    ///
    /// The nuclide name will be formatted as `<element><isotope><state>`,
    /// e.g. "Co60" or "Ag110m1".
    pub fn name(&self) -> String {
        let state = match self.state() {
            0 => String::new(),
            s => f!("m{s}"),
        };
        f!("{}{}{}", self.symbol(), self.a(), state)
    }
}

impl std::fmt::Display for Zam {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Proton number for an element symbol, case-insensitive
pub(crate) fn element_z(symbol: &str) -> Option<u32> {
    SYMBOLS
        .iter()
        .position(|s| s.eq_ignore_ascii_case(symbol))
        .map(|z| z as u32)
}

/// Definition for a particular nuclide in human notation
///
/// The `FromStr` trait is implemented and will try to parse a string into a
/// nuclide. Expects `<element><separator><isotope><metastable>` at most but
/// only the first is required. e.g.
///
/// - Element only Co, C
/// - Isotope Co60, C12
/// - Metastable Co60m1 Co60m2 Co60m3 ...
/// - Fispact Co60m Co60n
///
/// Note that the metastable state should be the ENSDF notation (m1, m2, m3,
/// etc...). However, this can be converted from anything ending with the
/// FISPACT-II notation of m, n, etc... but it can not be guaranteed that this
/// is a 1:1 mapping.
///
/// This order must be enforced because something like "104mn" is ambiguous.
/// i.e. should it be interpreted as Mn-104 or N-104m?
///
/// ```rust
/// # use bateman_data::{IsomerState, Nuclide};
/// # use std::str::FromStr;
/// assert_eq!(
///     Nuclide::from_str("eu-152m2").unwrap(),
///     Nuclide {
///         symbol: "eu".to_string(),
///         isotope: 152,
///         state: IsomerState::Excited(2)
///     }
/// );
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Nuclide {
    /// Element symbol
    pub symbol: String,
    /// Isotope number (Z+N, total nucleons)
    pub isotope: u16,
    /// Excited state status
    pub state: IsomerState,
}

impl Nuclide {
    /// A name for the nuclide with consistent formatting
    ///
    /// ```rust
    /// # use bateman_data::{IsomerState, Nuclide};
    /// let mut nuclide = Nuclide {
    ///     symbol: "eu".to_string(),
    ///     isotope: 152,
    ///     state: IsomerState::Ground,
    /// };
    /// assert_eq!(nuclide.name(), "Eu152");
    ///
    /// nuclide.state = IsomerState::Excited(1);
    /// assert_eq!(nuclide.name(), "Eu152m1");
    /// ```
    pub fn name(&self) -> String {
        // special case for elements
        let isotope = if self.isotope == 0 {
            "".to_string()
        } else {
            self.isotope.to_string()
        };

        f!("{}{}{}", self.symbol.capitalise(), isotope, self.state)
    }

    /// Resolve to the canonical [Zam] identifier
    ///
    /// Fails for element symbols outside of the known periodic table.
    pub fn zam(&self) -> Result<Zam> {
        let z = element_z(&self.symbol).ok_or_else(|| Error::UnknownElement {
            symbol: self.symbol.clone(),
        })?;
        let state = match self.state {
            IsomerState::Ground => 0,
            IsomerState::Excited(e) => e as u32,
        };
        Ok(Zam::new(z, self.isotope as u32, state))
    }
}

impl std::str::FromStr for Nuclide {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (_, nuclide) = nuclide_from_str(s)
            .map_err(|_| Error::ParseError(f!("Could not extract values from {s}")))?;

        Ok(nuclide)
    }
}

impl From<Zam> for Nuclide {
    fn from(zam: Zam) -> Self {
        Self {
            symbol: zam.symbol().to_string(),
            isotope: zam.a() as u16,
            state: match zam.state() {
                0 => IsomerState::Ground,
                s => IsomerState::Excited(s as u8),
            },
        }
    }
}

impl std::fmt::Display for Nuclide {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Variants of excited states
///
/// A nuclide can either be in the ground state, or some excited state.
///
/// Excited state isomers use the slightly more standardised ENSDF notation,
/// where `m1` is the first excited state, `m2` the second, and so on...
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IsomerState {
    /// Ground state
    #[default]
    Ground,
    /// The nth excited state
    Excited(u8),
}

impl std::fmt::Display for IsomerState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let state = match self {
            IsomerState::Ground => String::from(""),
            IsomerState::Excited(e) => f!("m{e}"),
        };
        write!(f, "{state}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zam_field_encoding() {
        let nuc = Zam::new(92, 235, 0);
        assert_eq!(nuc.z(), 92);
        assert_eq!(nuc.a(), 235);
        assert_eq!(nuc.state(), 0);
        assert_eq!(nuc.0, 922350000);

        let isomer = Zam(471100001);
        assert_eq!(isomer.z(), 47);
        assert_eq!(isomer.a(), 110);
        assert_eq!(isomer.state(), 1);
    }

    #[test]
    fn zam_names() {
        assert_eq!(Zam::new(1, 3, 0).name(), "H3");
        assert_eq!(Zam::new(27, 60, 0).name(), "Co60");
        assert_eq!(Zam::new(47, 110, 1).name(), "Ag110m1");
        assert_eq!(Zam::new(0, 1, 0).name(), "Nn1");
    }

    #[test]
    fn element_lookup() {
        assert_eq!(element_z("H"), Some(1));
        assert_eq!(element_z("co"), Some(27));
        assert_eq!(element_z("OG"), Some(118));
        assert_eq!(element_z("Xx"), None);
    }

    #[test]
    fn nuclide_to_zam() {
        let nuclide: Nuclide = "co60".parse().unwrap();
        assert_eq!(nuclide.zam().unwrap(), Zam::new(27, 60, 0));

        let isomer: Nuclide = "Ag110m1".parse().unwrap();
        assert_eq!(isomer.zam().unwrap(), Zam::new(47, 110, 1));
    }

    #[test]
    fn zam_round_trip() {
        let original = Zam::new(52, 129, 1);
        let nuclide = Nuclide::from(original);
        assert_eq!(nuclide.name(), "Te129m1");
        assert_eq!(nuclide.zam().unwrap(), original);
    }
}
