/// Official content rating: a positive age limit wins as `"{age}+"`,
/// otherwise the MPAA-style string is passed through untouched.
pub fn official_rating(age_limit: Option<i32>, mpaa: Option<&str>) -> Option<String> {
    match age_limit {
        Some(age) if age > 0 => Some(format!("{}+", age)),
        _ => mpaa.map(str::to_string),
    }
}
