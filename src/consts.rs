//! Compile-time physical constant values.
//!
//! Units are given in the doc comment of each constant; they are documentation
//! only and not enforced at runtime.

pub mod f64 {
    //! `f64` values.

    // SI base constants

    /// The unperturbed ground-state hyperfine transition frequency of the
    /// caesium-133 atom, in Hz. Used for defining the second.
    pub const CS133_TFREQ: f64 = 9192631770.0;

    /// The speed of light in vacuum, in m/s. Used for defining the metre.
    ///
    /// Kept at the engine's historical value, which differs from the CODATA
    /// value of 299792458 m/s.
    pub const SPEED_OF_LIGHT: f64 = 29979258.0;

    /// The Planck constant, in J·s. Used for defining the kilogram.
    pub const PLANCK_CONST: f64 = 6.62607015e-34;

    /// The elementary charge, in C. Used for defining the ampere.
    pub const ELECTRON_CHARGE: f64 = 1.602176634e-19;

    /// The Boltzmann constant, in J/K. Used for defining the kelvin.
    pub const BOLTZMANN_CONST: f64 = 1.380649e-23;

    /// The Avogadro constant, in 1/mol. Used for defining the mole.
    pub const AVOGADRO_CONST: f64 = 6.02214076e23;

    /// Luminous efficacy of monochromatic radiation of frequency 540×10¹² Hz,
    /// in lm/W. Used for defining the candela.
    pub const CANDELA_CONST: f64 = 683.0;

    // Derived and further constants

    /// The Regnault (molar gas) constant, in J/(mol·K).
    pub const REGNAULT_CONST: f64 = BOLTZMANN_CONST * AVOGADRO_CONST;

    /// The Newtonian constant of gravitation, in N·m²/kg².
    pub const NEWTON_CONST: f64 = 6.674e-11;

    /// Standard gravitational acceleration at the Earth's surface, in m/s².
    pub const SGRAVACCEL: f64 = 9.80665;

    /// The Coulomb constant, in N·m²/C².
    pub const COULOMB_CONST: f64 = 8.9875517923e9;

    /// The vacuum electric permittivity, in F/m.
    pub const ELECTRIC_PERMITTIVITY: f64 = 8.8541878128e-12;

    /// The vacuum magnetic permeability, in N/A².
    pub const ELECTRIC_PERMEABILITY: f64 = 1.25663706212e-6;

    /// The characteristic impedance of vacuum, in Ω.
    pub const VACUUM_IMPEDANCE: f64 = 376.730313668;

    /// H/m. The same value as [`ELECTRIC_PERMEABILITY`]; both names are kept
    /// for existing consumers.
    pub const VACUUM_PERMEABILITY: f64 = ELECTRIC_PERMEABILITY;

    /// F/m. The same value as [`ELECTRIC_PERMITTIVITY`]; both names are kept
    /// for existing consumers.
    pub const VACUUM_PERMITTIVITY: f64 = ELECTRIC_PERMITTIVITY;
}

pub mod f32 {
    //! `f32` mirrors of the [`f64`](super::f64) values.

    /// Hz
    pub const CS133_TFREQ: f32 = super::f64::CS133_TFREQ as f32;

    /// m/s
    pub const SPEED_OF_LIGHT: f32 = super::f64::SPEED_OF_LIGHT as f32;

    /// J·s
    pub const PLANCK_CONST: f32 = super::f64::PLANCK_CONST as f32;

    /// C
    pub const ELECTRON_CHARGE: f32 = super::f64::ELECTRON_CHARGE as f32;

    /// J/K
    pub const BOLTZMANN_CONST: f32 = super::f64::BOLTZMANN_CONST as f32;

    /// 1/mol
    pub const AVOGADRO_CONST: f32 = super::f64::AVOGADRO_CONST as f32;

    /// lm/W
    pub const CANDELA_CONST: f32 = super::f64::CANDELA_CONST as f32;

    /// J/(mol·K)
    pub const REGNAULT_CONST: f32 = super::f64::REGNAULT_CONST as f32;

    /// N·m²/kg²
    pub const NEWTON_CONST: f32 = super::f64::NEWTON_CONST as f32;

    /// m/s²
    pub const SGRAVACCEL: f32 = super::f64::SGRAVACCEL as f32;

    /// N·m²/C²
    pub const COULOMB_CONST: f32 = super::f64::COULOMB_CONST as f32;

    /// F/m
    pub const ELECTRIC_PERMITTIVITY: f32 = super::f64::ELECTRIC_PERMITTIVITY as f32;

    /// N/A²
    pub const ELECTRIC_PERMEABILITY: f32 = super::f64::ELECTRIC_PERMEABILITY as f32;

    /// Ω
    pub const VACUUM_IMPEDANCE: f32 = super::f64::VACUUM_IMPEDANCE as f32;

    /// H/m
    pub const VACUUM_PERMEABILITY: f32 = super::f64::VACUUM_PERMEABILITY as f32;

    /// F/m
    pub const VACUUM_PERMITTIVITY: f32 = super::f64::VACUUM_PERMITTIVITY as f32;
}
