use crate::log::row::{Decoded, LogRecord};
use regex::Regex;

/// Nginx `ui_short` format:
///
/// ```text
/// $remote_addr  $remote_user $http_x_real_ip [$time_local] "$request"
/// $status $body_bytes_sent "$http_referer" "$http_user_agent"
/// "$http_x_forwarded_for" "$http_X_REQUEST_ID" "$http_X_RB_USER"
/// $request_time
/// ```
const LOG_LINE_RE: &str = concat!(
    r#"^(?P<ip>\S+)\s+\S+\s+(?:\S+)?\s+\s*(?P<timestamp>.+) "#,
    r#""(?P<method>\w+) (?P<url>.+?) HTTP/.+?"\s+\d+\s+\d+\s+"#,
    r#"".*"\s+"[^"]+"\s+"[^"]+"\s+"[^"]+"\s+"[^"]+"\s+"#,
    r#"(?P<request_time>\d+\.\d+)$"#,
);

/// Compiled line grammar. Build once, then decode any number of lines.
#[derive(Debug, Clone)]
pub struct LineDecoder {
    re: Regex,
}

impl LineDecoder {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            re: Regex::new(LOG_LINE_RE)?,
        })
    }

    /// Extract `(url, request_time)` from one raw line.
    ///
    /// Lines that do not fit the grammar, and lines whose duration token does
    /// not parse as a float, come back as [`Decoded::Rejected`].
    pub fn decode(&self, line: &str) -> Decoded {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return Decoded::Rejected;
        }

        let Some(caps) = self.re.captures(line) else {
            return Decoded::Rejected;
        };

        let (Some(url), Some(request_time)) = (caps.name("url"), caps.name("request_time"))
        else {
            return Decoded::Rejected;
        };

        // `\d` is Unicode-aware, so a matched token can still fail to parse.
        match request_time.as_str().parse::<f64>() {
            Ok(request_time) => Decoded::Record(LogRecord {
                url: url.as_str().to_string(),
                request_time,
            }),
            Err(_) => Decoded::Rejected,
        }
    }
}
