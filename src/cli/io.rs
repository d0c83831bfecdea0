//! JSON I/O handling for CLI
//!
//! - Input: one JSON object on stdin (may span lines)
//! - Output: one JSON object per line on stdout
//! - UTF-8 only

use std::io::{Read, Write};

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::errors::{CliError, CliResult};

/// Read one JSON request
pub fn read_request<T: DeserializeOwned>(mut input: impl Read) -> CliResult<T> {
    let mut body = String::new();
    input.read_to_string(&mut body)?;

    if body.trim().is_empty() {
        return Err(CliError::io_error("Empty input"));
    }

    let request = serde_json::from_str(&body)?;
    Ok(request)
}

/// Write a success response
pub fn write_response<T: Serialize>(out: &mut impl Write, data: &T) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });

    serde_json::to_writer(&mut *out, &response)?;
    writeln!(out)?;
    out.flush()?;

    Ok(())
}

/// Write an error response
pub fn write_error(out: &mut impl Write, code: &str, message: &str) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    });

    serde_json::to_writer(&mut *out, &response)?;
    writeln!(out)?;
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_read_request_spanning_lines() {
        let input = "{\n  \"drug\": \"DrugA\"\n}\n";
        let value: Value = read_request(input.as_bytes()).unwrap();
        assert_eq!(value["drug"], "DrugA");
    }

    #[test]
    fn test_empty_input_rejected() {
        let result: CliResult<Value> = read_request("  \n".as_bytes());
        assert_eq!(result.unwrap_err().message(), "Empty input");
    }

    #[test]
    fn test_response_envelopes() {
        let mut out = Vec::new();
        write_response(&mut out, &serde_json::json!({"verdict": "STABLE"})).unwrap();
        write_error(&mut out, "NANO_UNKNOWN_CATEGORY", "Unknown drug category 'X'").unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines[0]["status"], "ok");
        assert_eq!(lines[0]["data"]["verdict"], "STABLE");
        assert_eq!(lines[1]["status"], "error");
        assert_eq!(lines[1]["code"], "NANO_UNKNOWN_CATEGORY");
    }
}
