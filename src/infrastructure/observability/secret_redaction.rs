const SECRET_KEYS: [&str; 4] = ["AccountKey", "SharedAccessSignature", "SharedAccessKey", "sig"];
const REDACTED: &str = "[REDACTED]";

/// Masks secret values of a `Key=Value;` connection string so it can be logged.
pub fn redact_connection_string(raw: &str) -> String {
    raw.split(';')
        .map(|segment| match segment.split_once('=') {
            Some((key, _)) if is_secret(key) => format!("{}={}", key, REDACTED),
            _ => segment.to_string(),
        })
        .collect::<Vec<_>>()
        .join(";")
}

fn is_secret(key: &str) -> bool {
    let key = key.trim();
    SECRET_KEYS.iter().any(|secret| key.eq_ignore_ascii_case(secret))
}
