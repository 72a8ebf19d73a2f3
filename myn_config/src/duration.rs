use std::ops::Deref;

use serde::Deserialize;

/// Duration given as an integer with a unit suffix: `15s`, `2m`, `1h`, `3d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(pub std::time::Duration);

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl Deref for Duration {
    type Target = std::time::Duration;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let invalid = || serde::de::Error::custom(format!("Invalid duration: {s:?}"));

        let unit = s.chars().next_back().ok_or_else(invalid)?;
        let value = s[..s.len() - unit.len_utf8()]
            .parse::<u64>()
            .map_err(|_| invalid())?;
        let seconds = match unit {
            's' => value,
            'm' => value * 60,
            'h' => value * 60 * 60,
            'd' => value * 24 * 60 * 60,
            _ => return Err(invalid()),
        };

        Ok(Self(std::time::Duration::from_secs(seconds)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_duration() {
        for (input, expected) in [
            ("13s", Some(13)),
            ("42m", Some(42 * 60)),
            ("7h", Some(7 * 60 * 60)),
            ("20d", Some(20 * 24 * 60 * 60)),
            ("", None),
            ("10", None),
            ("s", None),
            ("xyz", None),
            ("7dd", None),
        ] {
            let input = serde_json::Value::String(input.into());
            let output = serde_json::from_value::<Duration>(input)
                .ok()
                .map(|x| x.0.as_secs());
            assert_eq!(output, expected);
        }
    }
}
