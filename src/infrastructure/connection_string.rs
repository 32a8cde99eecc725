/// Azure-style `Key=Value;Key=Value` connection string. Keys match case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionString {
    entries: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConnectionStringError {
    #[error("connection string is empty")]
    Empty,
    #[error("malformed connection string segment at position {0}")]
    MalformedSegment(usize),
    #[error("connection string is missing {0}")]
    MissingKey(&'static str),
}

impl ConnectionString {
    pub fn parse(raw: &str) -> Result<Self, ConnectionStringError> {
        let mut entries = Vec::new();

        for (position, segment) in raw
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .enumerate()
        {
            // Values such as base64 account keys may themselves contain '='.
            let (key, value) = segment
                .split_once('=')
                .ok_or(ConnectionStringError::MalformedSegment(position))?;
            let key = key.trim();
            if key.is_empty() {
                return Err(ConnectionStringError::MalformedSegment(position));
            }
            entries.push((key.to_string(), value.trim().to_string()));
        }

        if entries.is_empty() {
            return Err(ConnectionStringError::Empty);
        }

        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    pub fn require(&self, key: &'static str) -> Result<&str, ConnectionStringError> {
        self.get(key)
            .filter(|v| !v.is_empty())
            .ok_or(ConnectionStringError::MissingKey(key))
    }

    pub fn flag(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| v.eq_ignore_ascii_case("true"))
    }
}
