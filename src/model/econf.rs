//! Ground-state electron configuration parsing and screening arithmetic.
//!
//! Configurations are written the conventional way, with an optional
//! noble-gas core: `"1s2 2s2 2p4"` or `"[Ar] 3d6 4s2"`. The core is expanded
//! at parse time so occupancy queries and Slater screening always see the
//! full configuration, while the valence split is preserved for
//! valence-electron counts.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error for malformed electron configuration strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid electron configuration: {0}")]
pub struct ParseConfigurationError(pub(crate) String);

/// Azimuthal subshell label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Subshell {
    S,
    P,
    D,
    F,
    G,
}

impl Subshell {
    /// The angular momentum quantum number l.
    #[inline]
    pub fn index(&self) -> u8 {
        match self {
            Subshell::S => 0,
            Subshell::P => 1,
            Subshell::D => 2,
            Subshell::F => 3,
            Subshell::G => 4,
        }
    }

    /// Maximum electron occupancy, 2(2l + 1).
    #[inline]
    pub fn capacity(&self) -> u16 {
        2 * (2 * self.index() as u16 + 1)
    }

    pub fn as_char(&self) -> char {
        match self {
            Subshell::S => 's',
            Subshell::P => 'p',
            Subshell::D => 'd',
            Subshell::F => 'f',
            Subshell::G => 'g',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            's' => Some(Subshell::S),
            'p' => Some(Subshell::P),
            'd' => Some(Subshell::D),
            'f' => Some(Subshell::F),
            'g' => Some(Subshell::G),
            _ => None,
        }
    }
}

impl fmt::Display for Subshell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A single occupied (n, l) shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shell {
    /// Principal quantum number.
    pub n: u8,
    /// Subshell label.
    pub subshell: Subshell,
    /// Number of electrons in the subshell.
    pub electrons: u16,
}

/// Fully expanded noble-gas cores, keyed by core symbol.
const NOBLE_CORES: [(&str, &str); 6] = [
    ("He", "1s2"),
    ("Ne", "1s2 2s2 2p6"),
    ("Ar", "1s2 2s2 2p6 3s2 3p6"),
    ("Kr", "1s2 2s2 2p6 3s2 3p6 3d10 4s2 4p6"),
    ("Xe", "1s2 2s2 2p6 3s2 3p6 3d10 4s2 4p6 4d10 5s2 5p6"),
    (
        "Rn",
        "1s2 2s2 2p6 3s2 3p6 3d10 4s2 4p6 4d10 4f14 5s2 5p6 5d10 6s2 6p6",
    ),
];

/// A parsed ground-state electron configuration.
///
/// The core/valence split follows the notation: everything covered by the
/// noble-gas bracket is core, the explicitly written shells are valence.
/// Configurations written without a bracket are all valence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElectronConfiguration {
    source: String,
    core: Vec<Shell>,
    valence: Vec<Shell>,
}

impl ElectronConfiguration {
    /// The configuration string as written in the dataset.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// All occupied shells, core first, in written order.
    pub fn shells(&self) -> impl Iterator<Item = &Shell> {
        self.core.iter().chain(self.valence.iter())
    }

    /// Total number of electrons.
    pub fn electron_count(&self) -> u16 {
        self.shells().map(|s| s.electrons).sum()
    }

    /// Number of electrons outside the noble-gas core.
    pub fn valence_electrons(&self) -> u16 {
        self.valence.iter().map(|s| s.electrons).sum()
    }

    /// Largest occupied principal quantum number.
    pub fn max_n(&self) -> u8 {
        self.shells().map(|s| s.n).max().unwrap_or(0)
    }

    /// Electrons occupying the given (n, l) subshell, 0 when empty.
    pub fn occupancy(&self, n: u8, subshell: Subshell) -> u16 {
        self.shells()
            .filter(|s| s.n == n && s.subshell == subshell)
            .map(|s| s.electrons)
            .sum()
    }

    /// Highest occupied subshell within shell `n`, if any.
    pub fn highest_subshell(&self, n: u8) -> Option<Subshell> {
        self.shells()
            .filter(|s| s.n == n)
            .map(|s| s.subshell)
            .max_by_key(|s| s.index())
    }

    /// Slater screening constant for an electron in the (n, l) subshell.
    ///
    /// Follows Slater's rules: electrons in the same (ns, np) group screen
    /// 0.35 each (0.30 within 1s), the n−1 shell screens 0.85, and deeper
    /// shells screen fully. For d and f electrons everything below the
    /// subshell screens fully.
    pub fn slater_screening(&self, n: u8, subshell: Subshell) -> f64 {
        let coeff = if n == 1 { 0.30 } else { 0.35 };

        let same_group: u16;
        let inner: f64;

        match subshell {
            Subshell::S | Subshell::P => {
                same_group = self
                    .shells()
                    .filter(|s| s.n == n && matches!(s.subshell, Subshell::S | Subshell::P))
                    .map(|s| s.electrons)
                    .sum();
                let next_inner: u16 = self
                    .shells()
                    .filter(|s| s.n + 1 == n)
                    .map(|s| s.electrons)
                    .sum();
                let deep: u16 = self
                    .shells()
                    .filter(|s| s.n + 2 <= n)
                    .map(|s| s.electrons)
                    .sum();
                inner = 0.85 * f64::from(next_inner) + f64::from(deep);
            }
            _ => {
                same_group = self.occupancy(n, subshell);
                let below: u16 = self
                    .shells()
                    .filter(|s| s.n < n || (s.n == n && s.subshell != subshell))
                    .map(|s| s.electrons)
                    .sum();
                inner = f64::from(below);
            }
        }

        coeff * f64::from(same_group.saturating_sub(1)) + inner
    }
}

impl FromStr for ElectronConfiguration {
    type Err = ParseConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace().peekable();

        let core = match tokens.peek() {
            Some(tok) if tok.starts_with('[') => {
                let tok = tokens.next().unwrap_or_default();
                let symbol = tok
                    .strip_prefix('[')
                    .and_then(|t| t.strip_suffix(']'))
                    .ok_or_else(|| ParseConfigurationError(s.to_string()))?;
                let expansion = NOBLE_CORES
                    .iter()
                    .find(|(sym, _)| *sym == symbol)
                    .map(|(_, conf)| *conf)
                    .ok_or_else(|| ParseConfigurationError(s.to_string()))?;
                expansion
                    .split_whitespace()
                    .map(|t| parse_shell(t).ok_or_else(|| ParseConfigurationError(s.to_string())))
                    .collect::<Result<Vec<_>, _>>()?
            }
            _ => Vec::new(),
        };

        let mut valence = Vec::new();
        for tok in tokens {
            let shell = parse_shell(tok).ok_or_else(|| ParseConfigurationError(s.to_string()))?;
            valence.push(shell);
        }

        if core.is_empty() && valence.is_empty() {
            return Err(ParseConfigurationError(s.to_string()));
        }

        let mut seen = Vec::new();
        for shell in core.iter().chain(valence.iter()) {
            let key = (shell.n, shell.subshell);
            if seen.contains(&key) {
                return Err(ParseConfigurationError(s.to_string()));
            }
            seen.push(key);
        }

        Ok(Self {
            source: s.trim().to_string(),
            core,
            valence,
        })
    }
}

fn parse_shell(token: &str) -> Option<Shell> {
    let mut chars = token.chars();

    let n = chars.next()?.to_digit(10)? as u8;
    if n == 0 || n > 8 {
        return None;
    }

    let subshell = Subshell::from_char(chars.next()?)?;
    if subshell.index() >= n {
        return None;
    }

    let rest = chars.as_str();
    let electrons = if rest.is_empty() {
        1
    } else {
        rest.parse::<u16>().ok()?
    };
    if electrons == 0 || electrons > subshell.capacity() {
        return None;
    }

    Some(Shell {
        n,
        subshell,
        electrons,
    })
}

impl fmt::Display for ElectronConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for shell in self.shells() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}{}{}", shell.n, shell.subshell, shell.electrons)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conf(s: &str) -> ElectronConfiguration {
        s.parse().unwrap()
    }

    #[test]
    fn parses_plain_configuration() {
        let c = conf("1s2 2s2 2p4");
        assert_eq!(c.electron_count(), 8);
        assert_eq!(c.valence_electrons(), 8);
        assert_eq!(c.max_n(), 2);
        assert_eq!(c.occupancy(2, Subshell::P), 4);
        assert_eq!(c.occupancy(3, Subshell::S), 0);
    }

    #[test]
    fn expands_noble_core() {
        let c = conf("[Ar] 3d6 4s2");
        assert_eq!(c.electron_count(), 26);
        assert_eq!(c.valence_electrons(), 8);
        assert_eq!(c.max_n(), 4);
        assert_eq!(c.occupancy(3, Subshell::D), 6);
        assert_eq!(c.occupancy(2, Subshell::P), 6);
    }

    #[test]
    fn bare_subshell_means_one_electron() {
        let c = conf("[Xe] 6s");
        assert_eq!(c.electron_count(), 55);
        assert_eq!(c.valence_electrons(), 1);
    }

    #[test]
    fn rejects_malformed_strings() {
        assert!("".parse::<ElectronConfiguration>().is_err());
        assert!("[Zz] 2s2".parse::<ElectronConfiguration>().is_err());
        assert!("9s2".parse::<ElectronConfiguration>().is_err());
        assert!("1p2".parse::<ElectronConfiguration>().is_err());
        assert!("2s7".parse::<ElectronConfiguration>().is_err());
        assert!("2x3".parse::<ElectronConfiguration>().is_err());
        assert!("1s2 1s2".parse::<ElectronConfiguration>().is_err());
    }

    #[test]
    fn slater_screening_carbon_2p() {
        // C 1s2 2s2 2p2: 0.35 * 3 + 0.85 * 2 = 2.75
        let c = conf("1s2 2s2 2p2");
        let s = c.slater_screening(2, Subshell::P);
        assert!((s - 2.75).abs() < 1e-9);
    }

    #[test]
    fn slater_screening_iron_4s_and_3d() {
        let c = conf("[Ar] 3d6 4s2");
        // 4s: 0.35 * 1 + 0.85 * 14 + 10 = 22.25
        let s4 = c.slater_screening(4, Subshell::S);
        assert!((s4 - 22.25).abs() < 1e-9);
        // 3d: 0.35 * 5 + 18 = 19.75
        let s3 = c.slater_screening(3, Subshell::D);
        assert!((s3 - 19.75).abs() < 1e-9);
    }

    #[test]
    fn slater_screening_hydrogen_1s() {
        let c = conf("1s1");
        assert_eq!(c.slater_screening(1, Subshell::S), 0.0);
    }

    #[test]
    fn highest_subshell_per_shell() {
        let c = conf("[Ar] 3d6 4s2");
        assert_eq!(c.highest_subshell(3), Some(Subshell::D));
        assert_eq!(c.highest_subshell(4), Some(Subshell::S));
        assert_eq!(c.highest_subshell(5), None);
    }

    #[test]
    fn display_expands_and_preserves_order() {
        let c = conf("[He] 2s2 2p1");
        assert_eq!(c.to_string(), "1s2 2s2 2p1");
        assert_eq!(c.source(), "[He] 2s2 2p1");
    }

    #[test]
    fn subshell_capacities() {
        assert_eq!(Subshell::S.capacity(), 2);
        assert_eq!(Subshell::P.capacity(), 6);
        assert_eq!(Subshell::D.capacity(), 10);
        assert_eq!(Subshell::F.capacity(), 14);
        assert_eq!(Subshell::G.capacity(), 18);
    }
}
