//! Lookup commands
//!
//! - lookup_postcode / lookup_city: one-shot resolution
//! - watch: re-resolve on every input line

use std::borrow::Cow;
use std::io::Write;

use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use super::state::AppState;
use crate::display::LookupDisplay;
use crate::error::Result;
use crate::reference::{self, LookupResult};

/// What a lookup command returns: the raw result plus its display state
#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub input: String,
    pub result: LookupResult,
    pub display: LookupDisplay,
}

pub fn lookup_postcode(state: &AppState, postcode: &str) -> LookupResponse {
    log::debug!("Looking up postcode: {}", postcode);
    let result = reference::lookup_postcode(postcode, &state.schedule);
    let display = LookupDisplay::from_result(postcode, &result);
    LookupResponse {
        input: postcode.to_string(),
        result,
        display,
    }
}

pub fn lookup_city(state: &AppState, city: &str) -> LookupResponse {
    log::debug!("Looking up Ireland city: {}", city);
    let result = reference::lookup_ireland_city(city, &state.schedule);
    let display = LookupDisplay::from_city_result(city, &result);
    LookupResponse {
        input: city.to_string(),
        result,
        display,
    }
}

/// Print a lookup as text, or as JSON when asked
pub fn print_lookup<W: Write>(out: &mut W, response: &LookupResponse, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, response)?;
        writeln!(out)?;
    } else if !response.display.is_empty() {
        writeln!(out, "{}", response.display)?;
    }
    Ok(())
}

/// Show the lookup for every line read until end of input
///
/// Each line is resolved on its own; a blank line clears the output.
/// Lines that are not valid UTF-8 are decoded lossily and resolved like
/// any other input. Returns the number of lines processed.
pub async fn watch<R, W>(
    state: &AppState,
    mut reader: R,
    out: &mut W,
    ireland: bool,
) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut buf = Vec::new();
    let mut count = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        count += 1;

        let raw = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let line = String::from_utf8_lossy(raw);
        if let Cow::Owned(_) = line {
            log::warn!("Line {} is not valid UTF-8; resolving it lossily", count);
        }

        let display = if ireland {
            LookupDisplay::for_ireland_city(&line, &state.schedule)
        } else {
            LookupDisplay::for_postcode(&line, &state.schedule)
        };

        if display.is_empty() {
            writeln!(out, "-")?;
        } else {
            writeln!(out, "{}", display)?;
        }
        out.flush()?;
    }

    log::debug!("Watch finished after {} lines", count);
    Ok(count)
}
