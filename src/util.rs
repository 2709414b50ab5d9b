use itertools::Itertools;


// If a string consists of exactly two characters, returns them. Otherwise returns none.
pub fn as_two_chars(s: &str) -> Option<(char, char)> { s.chars().collect_tuple() }
