//! Fixture texts

/// Small text with a repeated pair and a sink word
pub const SAMPLE: &str = "the cat sat on the mat the cat ran";

/// Longer text with punctuation, mixed case and several cycles
pub const STORY: &str = "\
To explore strange new worlds,
To seek out new life and new civilizations?
The scientist carefully analyzed the data, wrote a detailed report,
and shared the report with the team, but the team requested more data,
so the scientist analyzed it again.
";
