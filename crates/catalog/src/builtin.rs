//! The built-in movie catalog.
//!
//! The list deliberately mixes in the awkward cases: surrounding and doubled
//! spaces, `&`, digits, Polish diacritics, a whitespace-only entry and an empty
//! one. Tests across the workspace depend on this exact content and order.

/// Titles served when no other catalog is supplied.
pub const BUILTIN_TITLES: [&str; 17] = [
    "Pulp Fiction",
    "Incepcja",
    "Skazani na Shawshank",
    "Dwunastu gniewnych ludzi & ja",
    "Wanda i 123 smerfy",
    "Wrotkowe szaleństwa",
    "worek ziemniaków",
    "worek ziemniaków2",
    " wartość ze  spacjami ",
    " wartość z wieloma  spacjami ",
    "123 powody, żeby się zakochać",
    "123 powody, żeby się zakochać2",
    "Pachnidło: Historia mordercy",
    "&& w programowaniu",
    "&& w programowaniu2",
    " ",
    "",
];
