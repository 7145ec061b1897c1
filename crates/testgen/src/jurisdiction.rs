//! Static jurisdiction tables mirrored from the engine's schema.

/// Two-letter code -> FIPS code for the 50 states, DC and the territories.
pub const STATE_FIPS: &[(&str, u32)] = &[
    ("AL", 1),
    ("AK", 2),
    ("AZ", 4),
    ("AR", 5),
    ("CA", 6),
    ("CO", 8),
    ("CT", 9),
    ("DE", 10),
    ("FL", 12),
    ("GA", 13),
    ("HI", 15),
    ("ID", 16),
    ("IL", 17),
    ("IN", 18),
    ("IA", 19),
    ("KS", 20),
    ("KY", 21),
    ("LA", 22),
    ("ME", 23),
    ("MD", 24),
    ("MA", 25),
    ("MI", 26),
    ("MN", 27),
    ("MS", 28),
    ("MO", 29),
    ("MT", 30),
    ("NE", 31),
    ("NV", 32),
    ("NH", 33),
    ("NJ", 34),
    ("NM", 35),
    ("NY", 36),
    ("NC", 37),
    ("ND", 38),
    ("OH", 39),
    ("OK", 40),
    ("OR", 41),
    ("PA", 42),
    ("RI", 44),
    ("SC", 45),
    ("SD", 46),
    ("TN", 47),
    ("TX", 48),
    ("UT", 49),
    ("VT", 50),
    ("VA", 51),
    ("WA", 53),
    ("WV", 54),
    ("WI", 55),
    ("WY", 56),
    ("DC", 11),
    ("AS", 60),
    ("GU", 66),
    ("MP", 69),
    ("PR", 72),
    ("VI", 78),
];

/// States whose tax unit carries a `<state>_use_tax` input in the engine.
/// Keep in sync with the engine's variable list; it is not derivable from input.
pub const USE_TAX_STATES: &[&str] = &["pa", "nc", "ca", "il", "in", "ok"];

/// FIPS code for a two-letter code, or 0 when the code is unknown.
pub fn state_fips(code: &str) -> u32 {
    STATE_FIPS
        .iter()
        .find(|(abbr, _)| abbr.eq_ignore_ascii_case(code))
        .map(|(_, fips)| *fips)
        .unwrap_or(0)
}

pub fn requires_use_tax(state: &str) -> bool {
    USE_TAX_STATES
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(state))
}
