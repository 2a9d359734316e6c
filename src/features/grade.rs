/// Maps a FICO score to a credit tier; higher is better. First band wins.
pub fn fico_to_grade(score: i64) -> i64 {
    if score >= 740 {
        7
    } else if score >= 670 {
        6
    } else if score >= 580 {
        5
    } else {
        4
    }
}
