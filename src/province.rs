use serde::Serialize;
use strum::{EnumIter, IntoEnumIterator};

pub const UNKNOWN_PROVINCE: &str = "Desconocida";

/// Issuing province, encoded in the first two digits of a cédula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter)]
pub enum Province {
    Azuay,
    Bolivar,
    Canar,
    Carchi,
    Cotopaxi,
    Chimborazo,
    ElOro,
    Esmeraldas,
    Guayas,
    Imbabura,
    Loja,
    LosRios,
    Manabi,
    MoronaSantiago,
    Napo,
    Pastaza,
    Pichincha,
    Tungurahua,
    ZamoraChinchipe,
    Galapagos,
    Sucumbios,
    Orellana,
    SantoDomingoDeLosTsachilas,
    SantaElena,
    /// Foreign residents.
    Extranjero,
}

impl Province {
    pub fn code(self) -> u8 {
        match self {
            Province::Azuay => 1,
            Province::Bolivar => 2,
            Province::Canar => 3,
            Province::Carchi => 4,
            Province::Cotopaxi => 5,
            Province::Chimborazo => 6,
            Province::ElOro => 7,
            Province::Esmeraldas => 8,
            Province::Guayas => 9,
            Province::Imbabura => 10,
            Province::Loja => 11,
            Province::LosRios => 12,
            Province::Manabi => 13,
            Province::MoronaSantiago => 14,
            Province::Napo => 15,
            Province::Pastaza => 16,
            Province::Pichincha => 17,
            Province::Tungurahua => 18,
            Province::ZamoraChinchipe => 19,
            Province::Galapagos => 20,
            Province::Sucumbios => 21,
            Province::Orellana => 22,
            Province::SantoDomingoDeLosTsachilas => 23,
            Province::SantaElena => 24,
            Province::Extranjero => 30,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Province::Azuay => "Azuay",
            Province::Bolivar => "Bolívar",
            Province::Canar => "Cañar",
            Province::Carchi => "Carchi",
            Province::Cotopaxi => "Cotopaxi",
            Province::Chimborazo => "Chimborazo",
            Province::ElOro => "El Oro",
            Province::Esmeraldas => "Esmeraldas",
            Province::Guayas => "Guayas",
            Province::Imbabura => "Imbabura",
            Province::Loja => "Loja",
            Province::LosRios => "Los Ríos",
            Province::Manabi => "Manabí",
            Province::MoronaSantiago => "Morona Santiago",
            Province::Napo => "Napo",
            Province::Pastaza => "Pastaza",
            Province::Pichincha => "Pichincha",
            Province::Tungurahua => "Tungurahua",
            Province::ZamoraChinchipe => "Zamora Chinchipe",
            Province::Galapagos => "Galápagos",
            Province::Sucumbios => "Sucumbíos",
            Province::Orellana => "Orellana",
            Province::SantoDomingoDeLosTsachilas => "Santo Domingo de los Tsáchilas",
            Province::SantaElena => "Santa Elena",
            Province::Extranjero => "Extranjero",
        }
    }

    pub fn from_code(code: u8) -> Option<Province> {
        Province::iter().find(|province| province.code() == code)
    }
}

/// Name of the province for a two digit code such as `"17"`, or
/// [UNKNOWN_PROVINCE]. Only used for display, so it never fails.
pub fn lookup_province(two_digit_code: &str) -> &'static str {
    if two_digit_code.len() != 2 || !two_digit_code.bytes().all(|b| b.is_ascii_digit()) {
        return UNKNOWN_PROVINCE;
    }
    two_digit_code
        .parse::<u8>()
        .ok()
        .and_then(Province::from_code)
        .map_or(UNKNOWN_PROVINCE, Province::name)
}
