use clap::{Args, Parser, Subcommand, ValueEnum};

use periodica::{Block, Filter, Property, Series};

#[derive(Parser)]
#[command(
    name = "ptab",
    about = "Queryable periodic table of the elements",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the full property card for one element
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// List elements, optionally filtered and sorted
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show the isotopic composition of one element
    #[command(visible_alias = "iso")]
    Isotopes(IsotopesArgs),

    /// Draw the 18-column periodic grid
    #[command(visible_alias = "g")]
    Grid(GridArgs),
}

/// Output options shared by all commands.
#[derive(Args)]
pub struct OutputOptions {
    /// Suppress the banner and decorations (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct InfoArgs {
    /// Element identifier: atomic number, symbol, or name
    #[arg(value_name = "ELEMENT")]
    pub element: String,

    /// Show only this electronegativity scale
    #[arg(long, value_name = "SCALE")]
    pub scale: Option<String>,

    #[command(flatten)]
    pub output: OutputOptions,
}

#[derive(Args)]
pub struct ListArgs {
    /// Restrict to one block
    #[arg(long, value_name = "BLOCK")]
    pub block: Option<BlockArg>,

    /// Restrict to one chemical series
    #[arg(long, value_name = "SERIES")]
    pub series: Option<SeriesArg>,

    /// Restrict to one period (row)
    #[arg(long, value_name = "N")]
    pub period: Option<u8>,

    /// Restrict to one group (column)
    #[arg(long, value_name = "N")]
    pub group: Option<u8>,

    /// Ordering key; also picks the displayed property column
    #[arg(long, value_name = "KEY", default_value = "z")]
    pub sort: SortKey,

    /// Sort in descending order
    #[arg(long)]
    pub desc: bool,

    #[command(flatten)]
    pub output: OutputOptions,
}

#[derive(Args)]
pub struct IsotopesArgs {
    /// Element identifier: atomic number, symbol, or name
    #[arg(value_name = "ELEMENT")]
    pub element: String,

    /// Show only naturally occurring isotopes
    #[arg(long)]
    pub natural: bool,

    #[command(flatten)]
    pub output: OutputOptions,
}

#[derive(Args)]
pub struct GridArgs {
    #[command(flatten)]
    pub output: OutputOptions,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum BlockArg {
    S,
    P,
    D,
    F,
}

impl From<BlockArg> for Block {
    fn from(arg: BlockArg) -> Self {
        match arg {
            BlockArg::S => Block::S,
            BlockArg::P => Block::P,
            BlockArg::D => Block::D,
            BlockArg::F => Block::F,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SeriesArg {
    #[value(name = "alkali-metal", alias = "alkali")]
    AlkaliMetal,
    #[value(name = "alkaline-earth-metal", alias = "alkaline-earth")]
    AlkalineEarthMetal,
    #[value(name = "transition-metal", alias = "transition")]
    TransitionMetal,
    #[value(name = "poor-metal")]
    PoorMetal,
    Metalloid,
    Nonmetal,
    Halogen,
    #[value(name = "noble-gas", alias = "noble")]
    NobleGas,
    Lanthanide,
    Actinide,
}

impl From<SeriesArg> for Series {
    fn from(arg: SeriesArg) -> Self {
        match arg {
            SeriesArg::AlkaliMetal => Series::AlkaliMetal,
            SeriesArg::AlkalineEarthMetal => Series::AlkalineEarthMetal,
            SeriesArg::TransitionMetal => Series::TransitionMetal,
            SeriesArg::PoorMetal => Series::PoorMetal,
            SeriesArg::Metalloid => Series::Metalloid,
            SeriesArg::Nonmetal => Series::Nonmetal,
            SeriesArg::Halogen => Series::Halogen,
            SeriesArg::NobleGas => Series::NobleGas,
            SeriesArg::Lanthanide => Series::Lanthanide,
            SeriesArg::Actinide => Series::Actinide,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum SortKey {
    /// Atomic number
    #[default]
    #[value(name = "z", alias = "atomic-number")]
    AtomicNumber,
    /// Atomic mass
    Mass,
    /// Covalent radius
    #[value(name = "covalent-radius", alias = "radius")]
    CovalentRadius,
    /// Van der Waals radius
    #[value(name = "vdw-radius")]
    VdwRadius,
    /// Pauling electronegativity
    #[value(name = "en-pauling", alias = "en")]
    EnPauling,
    /// Allen electronegativity
    #[value(name = "en-allen")]
    EnAllen,
    /// Electron affinity
    #[value(name = "electron-affinity", alias = "ea")]
    ElectronAffinity,
    /// First ionization energy
    #[value(name = "ionization-energy", alias = "ie")]
    IonizationEnergy,
    /// Melting point
    #[value(name = "melting-point")]
    MeltingPoint,
    /// Boiling point
    #[value(name = "boiling-point")]
    BoilingPoint,
    /// Density
    Density,
}

impl SortKey {
    /// Property shown in the value column. Atomic-number ordering shows
    /// mass, since Z already has a column of its own.
    pub fn column(self) -> Property {
        match self {
            SortKey::AtomicNumber | SortKey::Mass => Property::AtomicMass,
            SortKey::CovalentRadius => Property::CovalentRadius,
            SortKey::VdwRadius => Property::VanDerWaalsRadius,
            SortKey::EnPauling => Property::PaulingElectronegativity,
            SortKey::EnAllen => Property::AllenElectronegativity,
            SortKey::ElectronAffinity => Property::ElectronAffinity,
            SortKey::IonizationEnergy => Property::FirstIonizationEnergy,
            SortKey::MeltingPoint => Property::MeltingPoint,
            SortKey::BoilingPoint => Property::BoilingPoint,
            SortKey::Density => Property::Density,
        }
    }
}

impl ListArgs {
    pub fn filter(&self) -> Filter {
        Filter {
            block: self.block.map(Into::into),
            series: self.series.map(Into::into),
            period: self.period,
            group: self.group,
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
